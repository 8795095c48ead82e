//! Field methods of [`FormBuilder`].
//!
//! Every method resolves its options, renders the control with the plain
//! tag helpers and wraps it in a form group.

mod choice;
mod collection;
mod date;
mod select;

pub use collection::{Accessor, Checked, Collection};

use ironhtml::html;

use crate::builder::FormBuilder;
use crate::classes;
use crate::html::{html_escape, join_classes};
use crate::options::{ControlClass, FieldOptions};
use crate::tags;

macro_rules! text_like_fields {
    ($($(#[$doc:meta])* $method:ident => $input_type:literal,)+) => {
        impl FormBuilder<'_> {
            $(
                $(#[$doc])*
                pub fn $method(&self, attribute: &str, options: &FieldOptions) -> String {
                    self.text_like_field($input_type, attribute, options)
                }
            )+
        }
    };
}

text_like_fields! {
    /// Color picker.
    color_field => "color",
    /// Date input.
    date_field => "date",
    /// Datetime input.
    datetime_field => "datetime",
    /// Local datetime input.
    datetime_local_field => "datetime-local",
    /// Email input.
    email_field => "email",
    /// Month input.
    month_field => "month",
    /// Number input.
    number_field => "number",
    /// Password input. The current value is never rendered.
    password_field => "password",
    /// Telephone input.
    phone_field => "tel",
    /// Range slider.
    range_field => "range",
    /// Search input.
    search_field => "search",
    /// Telephone input.
    telephone_field => "tel",
    /// Text input.
    text_field => "text",
    /// Time input.
    time_field => "time",
    /// URL input.
    url_field => "url",
    /// Week input.
    week_field => "week",
}

impl FormBuilder<'_> {
    fn text_like_field(&self, input_type: &str, attribute: &str, options: &FieldOptions) -> String {
        let resolved = self.resolve_field(attribute, options, None);
        let value = if input_type == "password" {
            None
        } else {
            self.value(attribute)
        };
        self.wrap_group(attribute, resolved.group.as_ref(), || {
            let input = tags::input_tag(input_type, value.as_deref(), &resolved.control);
            prepend_and_append(&input, options)
        })
    }

    /// Multi-line text input.
    pub fn text_area(&self, attribute: &str, options: &FieldOptions) -> String {
        let resolved = self.resolve_field(attribute, options, None);
        let value = self.value(attribute);
        self.wrap_group(attribute, resolved.group.as_ref(), || {
            let textarea = tags::textarea_tag(value.as_deref(), &resolved.control);
            prepend_and_append(&textarea, options)
        })
    }

    /// File input. It gets no base control class unless one is given.
    pub fn file_field(&self, attribute: &str, options: &FieldOptions) -> String {
        let options = if options.control_class == ControlClass::Base {
            options.clone().no_control_class()
        } else {
            options.clone()
        };
        let resolved = self.resolve_field(attribute, &options, None);
        self.wrap_group(attribute, resolved.group.as_ref(), || {
            tags::input_tag("file", None, &resolved.control)
        })
    }

    /// Hidden input, rendered without a group.
    pub fn hidden_field(&self, attribute: &str, options: &FieldOptions) -> String {
        let mut attrs = options.attrs.clone();
        if let Some(id) = self.control_id(attribute, options) {
            attrs.set("id", id);
        }
        if let Some(name) = self.control_name(attribute, options) {
            attrs.set("name", name);
        }
        tags::input_tag("hidden", self.value(attribute).as_deref(), &attrs)
    }

    /// The attribute's value as static text inside the group.
    pub fn static_control(&self, attribute: &str, options: &FieldOptions) -> String {
        let value = self.value(attribute).unwrap_or_default();
        self.static_control_with(attribute, options, || html_escape(&value))
    }

    /// Caller markup as static text inside the group.
    pub fn static_control_with(
        &self,
        attribute: &str,
        options: &FieldOptions,
        content: impl FnOnce() -> String,
    ) -> String {
        let group = self.group_options(attribute, options);
        self.wrap_group(attribute, group.as_ref(), || {
            let class = classes::STATIC;
            html! { p.class(#class) }.raw(content()).render()
        })
    }

    /// Caller markup inside the group, labelled and decorated like any
    /// other field.
    pub fn custom_control(
        &self,
        attribute: &str,
        options: &FieldOptions,
        content: impl FnOnce() -> String,
    ) -> String {
        let group = self.group_options(attribute, options);
        self.wrap_group(attribute, group.as_ref(), content)
    }
}

/// Surrounds a control with its prepend and append content.
///
/// The content is markup and is not escaped. Add-ons containing `btn` get
/// the button add-on class. With `skip_input_group` the content is placed
/// around the control without any input group markup.
pub(crate) fn prepend_and_append(input: &str, options: &FieldOptions) -> String {
    if options.prepend.is_none() && options.append.is_none() {
        return input.to_string();
    }
    let addon = |content: &str| {
        if options.skip_input_group {
            content.to_string()
        } else {
            let class = if content.contains("btn") {
                classes::INPUT_GROUP_BTN
            } else {
                classes::INPUT_GROUP_ADDON
            };
            html! { span.class(#class) }.raw(content).render()
        }
    };
    let prepend = options.prepend.as_deref().map(&addon).unwrap_or_default();
    let append = options.append.as_deref().map(&addon).unwrap_or_default();
    let input = format!("{prepend}{input}{append}");
    if options.skip_input_group {
        return input;
    }
    let class = join_classes([
        Some(classes::INPUT_GROUP),
        options.input_group_class.as_deref(),
    ]);
    html! { div.class(#class) }.raw(&input).render()
}
