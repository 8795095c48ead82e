//! Select-like controls.

use crate::builder::FormBuilder;
use crate::html::HtmlAttributes;
use crate::inputs::collection::Accessor;
use crate::inputs::prepend_and_append;
use crate::model::CollectionMember;
use crate::options::FieldOptions;
use crate::resolver::ResolvedField;
use crate::tags::{self, Choices, OptionGroup, SelectChoice};

const ZONE_SEPARATOR: &str = "-------------";

impl FormBuilder<'_> {
    /// A select over `choices`.
    ///
    /// A placeholder, from `placeholder_scope` or from `html_options`,
    /// becomes a first choice with an empty value. Pre-rendered option
    /// markup is left as it is and the placeholder is dropped.
    pub fn select(
        &self,
        attribute: &str,
        mut choices: Choices,
        options: &FieldOptions,
        html_options: &HtmlAttributes,
    ) -> String {
        let mut resolved = self.resolve_field(attribute, options, Some(html_options));
        if let Some(placeholder) = resolved.control.remove("placeholder") {
            choices.prepend(SelectChoice::new(placeholder, ""));
        }
        let selected = self.values(attribute);
        let blank = blank_option(options);
        self.render_select(attribute, resolved, options, || {
            format!("{blank}{}", choices.to_html(&selected))
        })
    }

    /// A select over a collection, reading each option's value and text
    /// with accessors. A placeholder becomes the blank option.
    pub fn collection_select<T: CollectionMember>(
        &self,
        attribute: &str,
        items: &[T],
        value: Accessor<'_, T>,
        text: Accessor<'_, T>,
        options: &FieldOptions,
        html_options: &HtmlAttributes,
    ) -> String {
        let mut resolved = self.resolve_field(attribute, options, Some(html_options));
        let placeholder = resolved.control.remove("placeholder");
        let blank = options
            .include_blank
            .clone()
            .or(placeholder)
            .map(|label| tags::blank_option(&label))
            .unwrap_or_default();
        let selected = self.values(attribute);
        let choices: Vec<SelectChoice> = items
            .iter()
            .map(|item| SelectChoice::new(text.read(item), value.read(item)))
            .collect();
        self.render_select(attribute, resolved, options, || {
            format!("{blank}{}", tags::options_for_select(&choices, &selected))
        })
    }

    /// A select with `<optgroup>` sections.
    pub fn grouped_collection_select(
        &self,
        attribute: &str,
        groups: &[OptionGroup],
        options: &FieldOptions,
        html_options: &HtmlAttributes,
    ) -> String {
        let resolved = self.resolve_field(attribute, options, Some(html_options));
        let selected = self.values(attribute);
        let blank = blank_option(options);
        self.render_select(attribute, resolved, options, || {
            format!("{blank}{}", tags::grouped_options_for_select(groups, &selected))
        })
    }

    /// A select over the known time zones. Priority zones come first,
    /// followed by a disabled separator and every other zone.
    pub fn time_zone_select(
        &self,
        attribute: &str,
        priority_zones: &[&str],
        options: &FieldOptions,
        html_options: &HtmlAttributes,
    ) -> String {
        let resolved = self.resolve_field(attribute, options, Some(html_options));
        let selected = self.values(attribute);
        let mut html = blank_option(options);
        if !priority_zones.is_empty() {
            let priority: Vec<SelectChoice> =
                priority_zones.iter().map(|zone| (*zone).into()).collect();
            html.push_str(&tags::options_for_select(&priority, &selected));
            html.push_str(&tags::option_tag(
                &SelectChoice::new(ZONE_SEPARATOR, "").disabled(),
                false,
            ));
        }
        let zones: Vec<SelectChoice> = tags::TIME_ZONES
            .iter()
            .filter(|zone| !priority_zones.contains(*zone))
            .map(|zone| (*zone).into())
            .collect();
        html.push_str(&tags::options_for_select(&zones, &selected));
        self.render_select(attribute, resolved, options, || html)
    }

    fn render_select(
        &self,
        attribute: &str,
        resolved: ResolvedField,
        options: &FieldOptions,
        options_html: impl FnOnce() -> String,
    ) -> String {
        let ResolvedField { mut control, group } = resolved;
        if control.contains("multiple") {
            if let Some(name) = control.get("name").map(|name| format!("{name}[]")) {
                control.set("name", name);
            }
        }
        self.wrap_group(attribute, group.as_ref(), || {
            let select = tags::select_tag(&options_html(), &control);
            prepend_and_append(&select, options)
        })
    }
}

fn blank_option(options: &FieldOptions) -> String {
    options
        .include_blank
        .as_deref()
        .map(tags::blank_option)
        .unwrap_or_default()
}
