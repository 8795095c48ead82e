//! Submit buttons and error alerts.

use ironhtml::html;
use ironhtml::typed::Element;
use ironhtml_elements::{Li, P};

use crate::builder::FormBuilder;
use crate::classes;
use crate::html::HtmlAttributes;
use crate::model::{humanize, underscore};
use crate::tags;
use crate::validation::{full_messages, full_messages_for};

/// Options for [`FormBuilder::alert_message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertOptions {
    /// Replaces the `alert alert-danger` class.
    pub class: Option<String>,
    /// Lists every full message under the title.
    pub error_summary: bool,
}

impl Default for AlertOptions {
    fn default() -> Self {
        Self {
            class: None,
            error_summary: true,
        }
    }
}

impl FormBuilder<'_> {
    /// A submit button with `btn btn-default` plus the classes of `attrs`,
    /// without duplicates.
    pub fn submit(&self, value: Option<&str>, attrs: &HtmlAttributes) -> String {
        let mut attrs = attrs.clone();
        let class = dedup_classes(["btn", "btn-default"], attrs.get("class"));
        attrs.set("class", class);
        let value = value.map_or_else(|| self.submit_default_value(), str::to_string);
        let mut button = HtmlAttributes::new().with("name", "commit");
        button.merge(&attrs);
        tags::input_tag("submit", Some(&value), &button)
    }

    /// A submit button that also carries `btn-primary`.
    pub fn primary(&self, value: Option<&str>, attrs: &HtmlAttributes) -> String {
        let mut attrs = attrs.clone();
        let class = dedup_classes(["btn-primary"], attrs.get("class"));
        attrs.set("class", class);
        self.submit(value, &attrs)
    }

    fn submit_default_value(&self) -> String {
        match self.object() {
            Some(object) => format!("Save {}", humanize(&underscore(object.model_name()))),
            None if self.object_name().is_empty() => "Save".to_string(),
            None => format!("Save {}", humanize(self.object_name())),
        }
    }

    /// An alert listing the object's errors under `title`. Empty when the
    /// object has no errors.
    pub fn alert_message(&self, title: &str, options: &AlertOptions) -> String {
        let Some(object) = self.object() else {
            return String::new();
        };
        if full_messages(object).is_empty() {
            return String::new();
        }
        let class = options.class.as_deref().unwrap_or(classes::ALERT);
        html! { div.class(#class) }
            .child::<P, _>(|p| p.text(title))
            .when(options.error_summary, |div| div.raw(self.error_summary()))
            .render()
    }

    /// A list of every full error message of the object.
    pub fn error_summary(&self) -> String {
        let messages = self.object().map(full_messages).unwrap_or_default();
        let class = classes::ERROR_SUMMARY;
        html! { ul.class(#class) }
            .children(messages.iter(), |message, li: Element<Li>| li.text(message))
            .render()
    }

    /// An alert with the errors of one attribute. Empty when it has none.
    pub fn errors_on(&self, attribute: &str, hide_attribute_name: bool) -> String {
        let Some(object) = self.object().filter(|_| self.has_error(attribute)) else {
            return String::new();
        };
        let text = if hide_attribute_name {
            object
                .as_error_bearing()
                .map(|bearer| bearer.errors().get(attribute).join(", "))
                .unwrap_or_default()
        } else {
            full_messages_for(object, attribute).join(", ")
        };
        let class = classes::ALERT;
        html! { div.class(#class) { #text } }.render()
    }
}

fn dedup_classes<'c>(base: impl IntoIterator<Item = &'c str>, extra: Option<&'c str>) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for class in base
        .into_iter()
        .chain(extra.into_iter().flat_map(str::split_whitespace))
    {
        if !seen.contains(&class) {
            seen.push(class);
        }
    }
    seen.join(" ")
}
