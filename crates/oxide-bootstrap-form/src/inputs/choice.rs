//! Single checkboxes and radio buttons.

use ironhtml::html;

use crate::builder::FormBuilder;
use crate::classes;
use crate::html::{join_classes, sanitized_value, HtmlAttributes};
use crate::model::humanize;
use crate::options::FieldOptions;
use crate::settings::Layout;
use crate::tags;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ChoiceKind {
    Checkbox,
    Radio,
}

impl ChoiceKind {
    const fn input_type(self) -> &'static str {
        match self {
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
        }
    }
}

impl FormBuilder<'_> {
    /// A checkbox submitting `"1"` when checked and `"0"` otherwise.
    pub fn check_box(&self, attribute: &str, options: &FieldOptions) -> String {
        self.check_box_with_values(attribute, options, "1", Some("0"))
    }

    /// A checkbox with explicit values. Without an unchecked value, or in a
    /// `multiple` set, no hidden input is emitted.
    pub fn check_box_with_values(
        &self,
        attribute: &str,
        options: &FieldOptions,
        checked_value: &str,
        unchecked_value: Option<&str>,
    ) -> String {
        let checked = options.checked.unwrap_or_else(|| {
            if options.multiple {
                self.values(attribute).iter().any(|value| value == checked_value)
            } else {
                self.value(attribute)
                    .is_some_and(|value| value == checked_value || (checked_value == "1" && value == "true"))
            }
        });
        let hidden = unchecked_value
            .filter(|_| !options.multiple)
            .and_then(|unchecked| {
                let name = self.control_name(attribute, options)?;
                let attrs = HtmlAttributes::new().with("name", name);
                Some(tags::input_tag("hidden", Some(unchecked), &attrs))
            })
            .unwrap_or_default();
        let input = self.choice_input(ChoiceKind::Checkbox, attribute, checked_value, checked, options);
        format!("{hidden}{input}")
    }

    /// A radio button for one value of `attribute`.
    pub fn radio_button(&self, attribute: &str, value: &str, options: &FieldOptions) -> String {
        let checked = options
            .checked
            .unwrap_or_else(|| self.value(attribute).is_some_and(|current| current == value));
        self.choice_input(ChoiceKind::Radio, attribute, value, checked, options)
    }

    fn choice_input(
        &self,
        kind: ChoiceKind,
        attribute: &str,
        value: &str,
        checked: bool,
        options: &FieldOptions,
    ) -> String {
        let id = self.choice_id(kind, attribute, value, options);
        let layout = options.layout.unwrap_or(self.settings().layout);
        let inline = options.inline || layout == Layout::Inline;

        let mut input = HtmlAttributes::new();
        if let Some(id) = &id {
            input.set("id", id.as_str());
        }
        if let Some(name) = self.control_name(attribute, options) {
            let name = if kind == ChoiceKind::Checkbox && options.multiple {
                format!("{name}[]")
            } else {
                name
            };
            input.set("name", name);
        }
        input.set(
            "class",
            join_classes([
                options.class.as_deref(),
                Some(if options.custom.is_some() {
                    classes::CUSTOM_CONTROL_INPUT
                } else {
                    classes::CHECK_INPUT
                }),
                self.has_error(attribute).then_some(classes::ERROR),
                (options.skip_label || options.hide_label).then_some(classes::POSITION_STATIC),
            ]),
        );
        for (key, attr_value) in options.attrs.iter().filter(|(key, _)| *key != "class") {
            input.set(key, attr_value);
        }
        if checked {
            input.set_flag("checked");
        }
        if options.disabled {
            input.set_flag("disabled");
        }
        let mut html = tags::input_tag(kind.input_type(), Some(value), &input);

        if !options.skip_label {
            html.push_str(&self.choice_label(kind, attribute, value, id, options));
        }
        if options.error_message && self.inline_error(attribute) {
            let message = self.error_message(attribute, true);
            let class = classes::ERROR_HELP;
            html.push_str(&html! { div.class(#class) { #message } }.render());
        }

        let wrapper_class = match &options.custom {
            Some(custom) => join_classes([
                Some(classes::CUSTOM_CONTROL),
                Some(custom.wrapper_class(kind.input_type()).as_str()),
                inline.then_some(classes::CUSTOM_CONTROL_INLINE),
                options.wrapper_class.as_deref(),
            ]),
            None => join_classes([
                Some(classes::CHECK),
                inline.then_some(classes::CHECK_INLINE),
                options.disabled.then_some(classes::DISABLED),
                options.wrapper_class.as_deref(),
            ]),
        };
        let mut wrapper = HtmlAttributes::new().with("class", wrapper_class);
        let title_key = format!("{attribute}.{value}");
        if let Some(title) = self.scoped_translation(&title_key, options.title_scope.as_deref(), options) {
            wrapper.set("title", title);
        }
        format!("<div{}>{html}</div>", wrapper.to_html())
    }

    fn choice_label(
        &self,
        kind: ChoiceKind,
        attribute: &str,
        value: &str,
        id: Option<String>,
        options: &FieldOptions,
    ) -> String {
        let class = join_classes([
            Some(if options.custom.is_some() {
                classes::CUSTOM_CONTROL_LABEL
            } else {
                classes::CHECK_LABEL
            }),
            options.label_class.as_deref(),
            options.hide_label.then_some(classes::HIDE),
        ]);
        let scoped_key = format!("{attribute}.{value}");
        let text = self
            .scoped_translation(&scoped_key, options.label_scope.as_deref(), options)
            .or_else(|| options.label_text().map(str::to_string))
            .unwrap_or_else(|| match kind {
                ChoiceKind::Checkbox => self.human_attribute_name(attribute),
                ChoiceKind::Radio => humanize(value),
            });
        match id {
            Some(id) => html! { label.for_(#id).class(#class) { #text } }.render(),
            None => html! { label.class(#class) { #text } }.render(),
        }
    }

    /// Radio buttons and checkboxes of a set get one id per value.
    fn choice_id(
        &self,
        kind: ChoiceKind,
        attribute: &str,
        value: &str,
        options: &FieldOptions,
    ) -> Option<String> {
        if let Some(id) = &options.id {
            return Some(id.clone());
        }
        let id = self.field_id(attribute)?;
        if kind == ChoiceKind::Radio || options.multiple {
            Some(format!("{id}_{}", sanitized_value(value)))
        } else {
            Some(id)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::i18n::Catalog;
    use crate::model::Record;
    use crate::options::{CustomControl, FieldOptions};
    use crate::settings::{FormSettings, Layout};
    use crate::validation::PresenceValidator;
    use crate::FormBuilder;

    fn user() -> Record {
        Record::new("User")
            .with_value("terms", "1")
            .with_value("plan", "pro")
    }

    #[test]
    fn test_check_box_emits_hidden_then_input() {
        let user = user();
        let form = FormBuilder::for_object(&user, FormSettings::new());
        let html = form.check_box("terms", &FieldOptions::new());

        assert!(html.starts_with(r#"<input type="hidden" value="0" name="user[terms]"><div class="form-check">"#));
        assert!(html.contains(
            r#"<input type="checkbox" value="1" id="user_terms" name="user[terms]" class="form-check-input" checked="checked">"#
        ));
        assert!(html.contains(r#"for="user_terms""#));
        assert!(html.contains(r#"class="form-check-label""#));
        assert!(html.contains(">Terms</label>"));
    }

    #[test]
    fn test_check_box_without_unchecked_value() {
        let user = user();
        let form = FormBuilder::for_object(&user, FormSettings::new());
        let html = form.check_box_with_values("terms", &FieldOptions::new(), "yes", None);
        assert!(html.starts_with(r#"<div class="form-check">"#));
        assert!(!html.contains("checked="));
    }

    #[test]
    fn test_multiple_check_box_has_list_name_and_no_hidden() {
        let user = Record::new("User").with_values("skills", ["rust"]);
        let form = FormBuilder::for_object(&user, FormSettings::new());
        let html = form.check_box_with_values("skills", &FieldOptions::new().multiple(), "rust", Some("0"));

        assert!(!html.contains(r#"type="hidden""#));
        assert!(html.contains(r#"id="user_skills_rust" name="user[skills][]""#));
        assert!(html.contains(r#"checked="checked""#));
    }

    #[test]
    fn test_radio_button() {
        let user = user();
        let form = FormBuilder::for_object(&user, FormSettings::new());
        let html = form.radio_button("plan", "pro", &FieldOptions::new().label("Pro plan"));

        assert!(html.starts_with(r#"<div class="form-check">"#));
        assert!(html.contains(
            r#"<input type="radio" value="pro" id="user_plan_pro" name="user[plan]" class="form-check-input" checked="checked">"#
        ));
        assert!(html.contains("Pro plan"));

        let other = form.radio_button("plan", "free", &FieldOptions::new());
        assert!(!other.contains("checked="));
    }

    #[test]
    fn test_inline_disabled_and_wrapper_class() {
        let user = user();
        let form = FormBuilder::for_object(&user, FormSettings::new());
        let options = FieldOptions::new().inline().disabled().wrapper_class("ml-2");
        let html = form.radio_button("plan", "free", &options);
        assert!(html.starts_with(r#"<div class="form-check form-check-inline disabled ml-2">"#));
        assert!(html.contains(r#"disabled="disabled""#));

        let inline_form = FormBuilder::for_object(&user, FormSettings::inline());
        let html = inline_form.radio_button("plan", "free", &FieldOptions::new());
        assert!(html.starts_with(r#"<div class="form-check form-check-inline">"#));
    }

    #[test]
    fn test_custom_controls() {
        let user = user();
        let form = FormBuilder::for_object(&user, FormSettings::new());

        let radio = form.radio_button("plan", "pro", &FieldOptions::new().custom(CustomControl::Default));
        assert!(radio.starts_with(r#"<div class="custom-control custom-radio">"#));
        assert!(radio.contains(r#"class="custom-control-input""#));
        assert!(radio.contains(r#"class="custom-control-label""#));

        let switch = form.check_box(
            "terms",
            &FieldOptions::new().custom(CustomControl::Switch).inline(),
        );
        assert!(switch.contains(r#"<div class="custom-control custom-switch custom-control-inline">"#));
    }

    #[test]
    fn test_hidden_and_skipped_labels() {
        let user = user();
        let form = FormBuilder::for_object(&user, FormSettings::new());

        let hidden = form.radio_button("plan", "pro", &FieldOptions::new().hide_label());
        assert!(hidden.contains("form-check-input position-static"));
        assert!(hidden.contains("form-check-label sr-only"));

        let skipped = form.radio_button("plan", "pro", &FieldOptions::new().skip_label());
        assert!(skipped.contains("form-check-input position-static"));
        assert!(!skipped.contains("<label"));
    }

    #[test]
    fn test_error_message_block() {
        let mut user = Record::new("User").with_validator("plan", PresenceValidator::new());
        user.validate();
        let form = FormBuilder::for_object(&user, FormSettings::new());

        let html = form.radio_button("plan", "pro", &FieldOptions::new().error_message());
        assert!(html.contains("form-check-input is-invalid"));
        assert!(html.contains(r#"class="invalid-feedback""#));
        assert!(html.contains("be blank"));
        assert!(!html.contains("Plan can"));

        let quiet = form.radio_button("plan", "pro", &FieldOptions::new());
        assert!(!quiet.contains("invalid-feedback"));
    }

    #[test]
    fn test_error_message_block_needs_inline_errors() {
        let mut user = Record::new("User").with_validator("plan", PresenceValidator::new());
        user.validate();
        let form = FormBuilder::for_object(&user, FormSettings::new().label_errors(true));

        let html = form.radio_button("plan", "pro", &FieldOptions::new().error_message());
        assert!(!html.contains("invalid-feedback"));
        assert!(!html.contains("be blank"));
    }

    #[test]
    fn test_field_layout_makes_checks_inline() {
        let user = user();
        let form = FormBuilder::for_object(&user, FormSettings::new());
        let options = FieldOptions::new().layout(Layout::Inline);

        let radio = form.radio_button("plan", "pro", &options);
        assert!(radio.starts_with(r#"<div class="form-check form-check-inline">"#));

        let check = form.check_box("terms", &options);
        assert!(check.contains(r#"<div class="form-check form-check-inline">"#));

        let stacked = form.radio_button("plan", "pro", &FieldOptions::new());
        assert!(!stacked.contains("form-check-inline"));
    }

    #[test]
    fn test_scoped_label_and_title() {
        let user = user();
        let catalog = Catalog::new()
            .with("plans.labels.plan.pro", "Professional")
            .with("plans.titles.plan.pro", "Best for teams");
        let form = FormBuilder::for_object(&user, FormSettings::new()).with_translator(&catalog);
        let options = FieldOptions::new()
            .label("ignored")
            .label_scope("plans.labels")
            .title_scope("plans.titles");
        let html = form.radio_button("plan", "pro", &options);

        assert!(html.starts_with(r#"<div class="form-check" title="Best for teams">"#));
        assert!(html.contains("Professional"));
        assert!(!html.contains("ignored"));
    }
}
