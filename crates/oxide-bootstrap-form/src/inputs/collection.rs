//! Checkbox and radio button sets built from a collection.

use std::ptr;

use crate::builder::FormBuilder;
use crate::deprecation;
use crate::html::HtmlAttributes;
use crate::model::CollectionMember;
use crate::options::FieldOptions;
use crate::tags;

/// Reads the value or text of a collection item.
pub enum Accessor<'f, T> {
    /// Reads a named member through [`CollectionMember`].
    Member(&'f str),
    /// Computes it with a closure.
    Call(&'f dyn Fn(&T) -> String),
}

impl<T: CollectionMember> Accessor<'_, T> {
    pub(crate) fn read(&self, item: &T) -> String {
        match self {
            Self::Member(name) => item.member(name).unwrap_or_default(),
            Self::Call(call) => call(item),
        }
    }
}

/// Which items of a collection start checked.
pub enum Checked<'c, T> {
    /// The item with this value.
    Value(String),
    /// Items whose value is in the list.
    Values(Vec<String>),
    /// This very item.
    Item(&'c T),
    /// These very items.
    Items(Vec<&'c T>),
}

impl<T> Checked<'_, T> {
    fn matches(&self, value: &str, item: &T) -> bool {
        match self {
            Self::Value(checked) => checked == value,
            Self::Values(checked) => checked.iter().any(|checked| checked == value),
            Self::Item(checked) => ptr::eq(*checked, item),
            Self::Items(checked) => checked.iter().any(|checked| ptr::eq(*checked, item)),
        }
    }
}

/// Items rendered as a checkbox or radio button set.
///
/// ```rust
/// use oxide_bootstrap_form::{Accessor, Collection, FieldOptions, FormBuilder, FormSettings, Record};
///
/// let user = Record::new("User");
/// let plans = [("Free", "free"), ("Pro", "pro")];
/// let form = FormBuilder::for_object(&user, FormSettings::new());
/// let html = form.collection_radio_buttons(
///     "plan",
///     &Collection::new(&plans, Accessor::Member("last"), Accessor::Member("first")),
///     &FieldOptions::new(),
/// );
/// assert_eq!(html.matches(r#"type="radio""#).count(), 2);
/// ```
pub struct Collection<'c, T> {
    /// The items.
    pub items: &'c [T],
    /// Reads the submitted value of an item.
    pub value: Accessor<'c, T>,
    /// Reads the label text of an item.
    pub text: Accessor<'c, T>,
    /// Initially checked items. Without it the bound object decides.
    pub checked: Option<Checked<'c, T>>,
}

impl<'c, T: CollectionMember> Collection<'c, T> {
    /// Creates a collection.
    pub fn new(items: &'c [T], value: Accessor<'c, T>, text: Accessor<'c, T>) -> Self {
        Self {
            items,
            value,
            text,
            checked: None,
        }
    }

    /// Sets the checked items.
    #[must_use]
    pub fn checked(mut self, checked: Checked<'c, T>) -> Self {
        self.checked = Some(checked);
        self
    }

    fn render_items(
        &self,
        options: &FieldOptions,
        mut render: impl FnMut(&str, &FieldOptions) -> String,
    ) -> String {
        self.items
            .iter()
            .map(|item| {
                let value = self.value.read(item);
                let checked = self
                    .checked
                    .as_ref()
                    .map(|checked| checked.matches(&value, item));
                let item_options = options.collection_item(self.text.read(item), checked);
                render(&value, &item_options)
            })
            .collect()
    }
}

impl FormBuilder<'_> {
    /// One checkbox per item inside a single form group.
    ///
    /// A hidden input with an empty value precedes the group, so an empty
    /// selection still submits the attribute.
    pub fn collection_check_boxes<T: CollectionMember>(
        &self,
        attribute: &str,
        collection: &Collection<'_, T>,
        options: &FieldOptions,
    ) -> String {
        let group = self.group_options(attribute, options);
        let inputs = self.wrap_group(attribute, group.as_ref(), || {
            collection.render_items(options, |value, item_options| {
                let item_options = item_options.clone().multiple();
                self.check_box_with_values(attribute, &item_options, value, None)
            })
        });

        let mut hidden = HtmlAttributes::new();
        if let Some(id) = self.control_id(attribute, options) {
            hidden.set("id", id);
        }
        if let Some(name) = self.control_name(attribute, options) {
            hidden.set("name", format!("{name}[]"));
        }
        hidden.set_flag("multiple");
        format!("{}{inputs}", tags::input_tag("hidden", Some(""), &hidden))
    }

    /// One radio button per item inside a single form group.
    pub fn collection_radio_buttons<T: CollectionMember>(
        &self,
        attribute: &str,
        collection: &Collection<'_, T>,
        options: &FieldOptions,
    ) -> String {
        let group = self.group_options(attribute, options);
        self.wrap_group(attribute, group.as_ref(), || {
            collection.render_items(options, |value, item_options| {
                self.radio_button(attribute, value, item_options)
            })
        })
    }

    /// Renamed to [`FormBuilder::collection_check_boxes`].
    #[deprecated(note = "use `collection_check_boxes`")]
    pub fn check_boxes_collection<T: CollectionMember>(
        &self,
        attribute: &str,
        collection: &Collection<'_, T>,
        options: &FieldOptions,
    ) -> String {
        deprecation::warn_once("check_boxes_collection", "collection_check_boxes");
        self.collection_check_boxes(attribute, collection, options)
    }

    /// Renamed to [`FormBuilder::collection_radio_buttons`].
    #[deprecated(note = "use `collection_radio_buttons`")]
    pub fn radio_buttons_collection<T: CollectionMember>(
        &self,
        attribute: &str,
        collection: &Collection<'_, T>,
        options: &FieldOptions,
    ) -> String {
        deprecation::warn_once("radio_buttons_collection", "collection_radio_buttons");
        self.collection_radio_buttons(attribute, collection, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use crate::settings::FormSettings;

    fn skills() -> Vec<(String, String)> {
        vec![
            ("Rust".to_string(), "rust".to_string()),
            ("Go".to_string(), "go".to_string()),
            ("Zig".to_string(), "zig".to_string()),
        ]
    }

    #[test]
    fn test_three_check_boxes_and_one_hidden_input() {
        let user = Record::new("User");
        let skills = skills();
        let form = FormBuilder::for_object(&user, FormSettings::new());
        let collection = Collection::new(&skills, Accessor::Member("last"), Accessor::Member("first"));
        let html = form.collection_check_boxes("skills", &collection, &FieldOptions::new());

        assert_eq!(html.matches(r#"type="checkbox""#).count(), 3);
        assert_eq!(html.matches("<label").count(), 4);
        assert_eq!(html.matches(r#"type="hidden""#).count(), 1);
        assert!(html.starts_with(
            r#"<input type="hidden" value="" id="user_skills" name="user[skills][]" multiple="multiple"><div class="form-group">"#
        ));
        assert_eq!(html.matches(r#"name="user[skills][]""#).count(), 4);
    }

    #[test]
    fn test_checked_by_value_list_and_identity() {
        let user = Record::new("User");
        let skills = skills();
        let form = FormBuilder::for_object(&user, FormSettings::new());

        let by_values = Collection::new(&skills, Accessor::Member("last"), Accessor::Member("first"))
            .checked(Checked::Values(vec!["rust".to_string(), "zig".to_string()]));
        let html = form.collection_check_boxes("skills", &by_values, &FieldOptions::new());
        assert_eq!(html.matches("checked=").count(), 2);

        let by_item = Collection::new(&skills, Accessor::Member("last"), Accessor::Member("first"))
            .checked(Checked::Item(&skills[1]));
        let html = form.collection_radio_buttons("skills", &by_item, &FieldOptions::new());
        assert_eq!(html.matches("checked=").count(), 1);
        assert!(html.contains(r#"value="go" id="user_skills_go" name="user[skills]" class="form-check-input" checked="checked""#));
    }

    #[test]
    fn test_identity_does_not_match_equal_copies() {
        let skills = skills();
        let copy = skills[0].clone();
        assert!(!Checked::Item(&copy).matches("rust", &skills[0]));
        assert!(Checked::Items(vec![&skills[0]]).matches("ignored", &skills[0]));
    }

    #[test]
    fn test_closure_accessors() {
        let user = Record::new("User").with_value("plan", "pro");
        let plans = ["free", "pro"];
        let value = |plan: &&str| plan.to_string();
        let text = |plan: &&str| plan.to_uppercase();
        let form = FormBuilder::for_object(&user, FormSettings::new());
        let collection = Collection::new(&plans, Accessor::Call(&value), Accessor::Call(&text));
        let html = form.collection_radio_buttons("plan", &collection, &FieldOptions::new().inline());

        assert!(html.contains("FREE"));
        assert!(html.contains("PRO"));
        assert_eq!(html.matches("form-check form-check-inline").count(), 2);
        assert_eq!(html.matches("checked=").count(), 1);
    }

    #[test]
    fn test_group_label_and_help() {
        let user = Record::new("User");
        let plans = ["free", "pro"];
        let form = FormBuilder::for_object(&user, FormSettings::new());
        let collection = Collection::new(&plans, Accessor::Member("to_s"), Accessor::Member("to_s"));
        let options = FieldOptions::new().label("Plan").help("Pick one");
        let html = form.collection_radio_buttons("plan", &collection, &options);

        assert_eq!(html.matches("Pick one").count(), 1);
        assert!(html.contains(r#"class="control-label""#));
    }

    #[test]
    #[allow(deprecated)]
    fn test_deprecated_aliases_forward() {
        let user = Record::new("User");
        let plans = ["free", "pro"];
        let form = FormBuilder::for_object(&user, FormSettings::new());
        let collection = Collection::new(&plans, Accessor::Member("to_s"), Accessor::Member("to_s"));

        assert_eq!(
            form.radio_buttons_collection("plan", &collection, &FieldOptions::new()),
            form.collection_radio_buttons("plan", &collection, &FieldOptions::new())
        );
        assert_eq!(
            form.check_boxes_collection("plan", &collection, &FieldOptions::new()),
            form.collection_check_boxes("plan", &collection, &FieldOptions::new())
        );
    }
}
