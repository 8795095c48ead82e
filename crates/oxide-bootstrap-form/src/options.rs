//! Per-field options.
//!
//! [`FieldOptions`] is built by the caller for one field and never mutated
//! by the builder. Keys that only steer the group (label, help, layout,
//! wrapper, decoration) are consumed by the resolver; the free-form
//! [`FieldOptions::attrs`] bag is forwarded to the control as-is.

use crate::group::ControlWrapper;
use crate::html::HtmlAttributes;
use crate::i18n::TranslateParams;
use crate::settings::Layout;

/// How the group label is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelOption {
    /// Plain label text.
    Text(String),
    /// Text and class together. Both win over the flat options.
    Descriptor {
        /// Label text.
        text: Option<String>,
        /// Label class.
        class: Option<String>,
    },
}

/// Explicit help text, or none at all.
///
/// Without a help option the help text is looked up in the translator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpOption {
    /// Show this help text.
    Text(String),
    /// Show no help text, not even a translated one.
    Suppressed,
}

/// Overrides for the group wrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrapperOverrides {
    /// Extra wrapper class. Wins over `wrapper_class`.
    pub class: Option<String>,
    /// Extra wrapper attributes.
    pub attrs: HtmlAttributes,
}

/// Wrapper directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WrapperOption {
    /// Render the bare control without a form group.
    Disabled,
    /// Render the form group with overrides.
    Overrides(WrapperOverrides),
}

/// The class a control starts from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ControlClass {
    /// The builder's base control class.
    #[default]
    Base,
    /// A replacement for the base class.
    Override(String),
    /// No base class at all.
    Omitted,
}

/// Custom-control flavor for checkboxes and radio buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomControl {
    /// `custom-checkbox` or `custom-radio`, depending on the input.
    Default,
    /// `custom-switch`.
    Switch,
    /// `custom-{name}`.
    Named(String),
}

impl CustomControl {
    pub(crate) fn wrapper_class(&self, input: &str) -> String {
        match self {
            Self::Default => format!("custom-{input}"),
            Self::Switch => "custom-switch".to_string(),
            Self::Named(name) => format!("custom-{name}"),
        }
    }
}

/// Options for one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldOptions {
    /// Label text or descriptor.
    pub label: Option<LabelOption>,
    /// Label class, used when the label descriptor has none.
    pub label_class: Option<String>,
    /// Render no label.
    pub skip_label: bool,
    /// Keep the label for screen readers only.
    pub hide_label: bool,
    /// Hide the label and use its text as the placeholder.
    pub label_as_placeholder: bool,
    /// Never mark the label as required.
    pub skip_required: bool,
    /// Help text directive.
    pub help: Option<HelpOption>,
    /// Extra class for the help block.
    pub help_class: Option<String>,
    /// Feedback icon name.
    pub icon: Option<String>,
    /// Wrapper directive.
    pub wrapper: Option<WrapperOption>,
    /// Extra wrapper class.
    pub wrapper_class: Option<String>,
    /// Element wrapped around the control inside the group.
    pub control_wrapper: Option<ControlWrapper>,
    /// Layout override for this field.
    pub layout: Option<Layout>,
    /// Label column override (horizontal layout).
    pub label_col: Option<String>,
    /// Control column override (horizontal layout).
    pub control_col: Option<String>,
    /// Format errors without the attribute name.
    pub hide_attribute_name: bool,
    /// Base control class directive.
    pub control_class: ControlClass,
    /// Extra control class.
    pub class: Option<String>,
    /// Element id override.
    pub id: Option<String>,
    /// Element name override.
    pub name: Option<String>,
    /// Inline checkbox or radio button.
    pub inline: bool,
    /// Custom-control flavor for checkboxes and radio buttons.
    pub custom: Option<CustomControl>,
    /// Disabled control.
    pub disabled: bool,
    /// Explicit checked state for checkboxes and radio buttons.
    pub checked: Option<bool>,
    /// Checkbox belongs to a set submitted as a list.
    pub multiple: bool,
    /// Render the error block next to a checkbox or radio button.
    pub error_message: bool,
    /// Content before the control in an input group.
    pub prepend: Option<String>,
    /// Content after the control in an input group.
    pub append: Option<String>,
    /// Extra input group class.
    pub input_group_class: Option<String>,
    /// Render prepend/append content without the input group markup.
    pub skip_input_group: bool,
    /// Translation scope for label text.
    pub label_scope: Option<String>,
    /// Translation scope for the title attribute.
    pub title_scope: Option<String>,
    /// Translation scope for the placeholder attribute.
    pub placeholder_scope: Option<String>,
    /// Interpolation parameters for the scoped translations.
    pub translate_params: TranslateParams,
    /// Blank first option for select-like controls.
    pub include_blank: Option<String>,
    /// HTML attributes forwarded to the control.
    pub attrs: HtmlAttributes,
}

impl FieldOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label text.
    #[must_use]
    pub fn label(mut self, text: impl Into<String>) -> Self {
        self.label = Some(LabelOption::Text(text.into()));
        self
    }

    /// Sets the label text and class together.
    #[must_use]
    pub fn label_descriptor(mut self, text: Option<&str>, class: Option<&str>) -> Self {
        self.label = Some(LabelOption::Descriptor {
            text: text.map(str::to_string),
            class: class.map(str::to_string),
        });
        self
    }

    /// Sets the label class.
    #[must_use]
    pub fn label_class(mut self, class: impl Into<String>) -> Self {
        self.label_class = Some(class.into());
        self
    }

    /// Renders no label.
    #[must_use]
    pub const fn skip_label(mut self) -> Self {
        self.skip_label = true;
        self
    }

    /// Keeps the label for screen readers only.
    #[must_use]
    pub const fn hide_label(mut self) -> Self {
        self.hide_label = true;
        self
    }

    /// Uses the label text as placeholder and hides the label.
    #[must_use]
    pub const fn label_as_placeholder(mut self) -> Self {
        self.label_as_placeholder = true;
        self
    }

    /// Never marks the label as required.
    #[must_use]
    pub const fn skip_required(mut self) -> Self {
        self.skip_required = true;
        self
    }

    /// Sets the help text.
    #[must_use]
    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.help = Some(HelpOption::Text(text.into()));
        self
    }

    /// Suppresses the help text.
    #[must_use]
    pub fn no_help(mut self) -> Self {
        self.help = Some(HelpOption::Suppressed);
        self
    }

    /// Sets an extra help block class.
    #[must_use]
    pub fn help_class(mut self, class: impl Into<String>) -> Self {
        self.help_class = Some(class.into());
        self
    }

    /// Sets the feedback icon.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Renders the control without a form group.
    #[must_use]
    pub fn no_wrapper(mut self) -> Self {
        self.wrapper = Some(WrapperOption::Disabled);
        self
    }

    /// Overrides the wrapper class and attributes.
    #[must_use]
    pub fn wrapper(mut self, overrides: WrapperOverrides) -> Self {
        self.wrapper = Some(WrapperOption::Overrides(overrides));
        self
    }

    /// Sets an extra wrapper class.
    #[must_use]
    pub fn wrapper_class(mut self, class: impl Into<String>) -> Self {
        self.wrapper_class = Some(class.into());
        self
    }

    /// Wraps the control in an extra element.
    #[must_use]
    pub fn control_wrapper(mut self, wrapper: ControlWrapper) -> Self {
        self.control_wrapper = Some(wrapper);
        self
    }

    /// Overrides the layout.
    #[must_use]
    pub const fn layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Overrides the label column.
    #[must_use]
    pub fn label_col(mut self, class: impl Into<String>) -> Self {
        self.label_col = Some(class.into());
        self
    }

    /// Overrides the control column.
    #[must_use]
    pub fn control_col(mut self, class: impl Into<String>) -> Self {
        self.control_col = Some(class.into());
        self
    }

    /// Formats errors without the attribute name.
    #[must_use]
    pub const fn hide_attribute_name(mut self) -> Self {
        self.hide_attribute_name = true;
        self
    }

    /// Replaces the base control class.
    #[must_use]
    pub fn control_class(mut self, class: impl Into<String>) -> Self {
        self.control_class = ControlClass::Override(class.into());
        self
    }

    /// Drops the base control class.
    #[must_use]
    pub fn no_control_class(mut self) -> Self {
        self.control_class = ControlClass::Omitted;
        self
    }

    /// Adds a control class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Overrides the element id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Overrides the element name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Renders checkboxes and radio buttons inline.
    #[must_use]
    pub const fn inline(mut self) -> Self {
        self.inline = true;
        self
    }

    /// Uses a custom-control flavor.
    #[must_use]
    pub fn custom(mut self, custom: CustomControl) -> Self {
        self.custom = Some(custom);
        self
    }

    /// Disables the control.
    #[must_use]
    pub const fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Forces the checked state.
    #[must_use]
    pub const fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    /// Submits the checkbox as part of a list.
    #[must_use]
    pub const fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    /// Renders the inline error block next to a checkbox or radio button.
    #[must_use]
    pub const fn error_message(mut self) -> Self {
        self.error_message = true;
        self
    }

    /// Content before the control.
    #[must_use]
    pub fn prepend(mut self, content: impl Into<String>) -> Self {
        self.prepend = Some(content.into());
        self
    }

    /// Content after the control.
    #[must_use]
    pub fn append(mut self, content: impl Into<String>) -> Self {
        self.append = Some(content.into());
        self
    }

    /// Adds an input group class.
    #[must_use]
    pub fn input_group_class(mut self, class: impl Into<String>) -> Self {
        self.input_group_class = Some(class.into());
        self
    }

    /// Keeps prepend/append content but drops the input group markup.
    #[must_use]
    pub const fn skip_input_group(mut self) -> Self {
        self.skip_input_group = true;
        self
    }

    /// Translation scope for the label.
    #[must_use]
    pub fn label_scope(mut self, scope: impl Into<String>) -> Self {
        self.label_scope = Some(scope.into());
        self
    }

    /// Translation scope for the title attribute.
    #[must_use]
    pub fn title_scope(mut self, scope: impl Into<String>) -> Self {
        self.title_scope = Some(scope.into());
        self
    }

    /// Translation scope for the placeholder attribute.
    #[must_use]
    pub fn placeholder_scope(mut self, scope: impl Into<String>) -> Self {
        self.placeholder_scope = Some(scope.into());
        self
    }

    /// Adds a translation parameter.
    #[must_use]
    pub fn translate_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.translate_params.insert(key.into(), value.into());
        self
    }

    /// Adds a blank first option with the given text.
    #[must_use]
    pub fn include_blank(mut self, text: impl Into<String>) -> Self {
        self.include_blank = Some(text.into());
        self
    }

    /// Forwards an HTML attribute to the control.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }

    /// Label text given explicitly, as descriptor text or plain text.
    pub(crate) fn label_text(&self) -> Option<&str> {
        match &self.label {
            Some(LabelOption::Text(text)) => Some(text),
            Some(LabelOption::Descriptor { text, .. }) => text.as_deref(),
            None => None,
        }
    }

    /// Options for one item of a collection input: the group-level keys
    /// are consumed by the collection's group, so each item only keeps the
    /// per-input ones, with its own label and checked state.
    pub(crate) fn collection_item(&self, label: String, checked: Option<bool>) -> Self {
        Self {
            label: Some(LabelOption::Text(label)),
            checked,
            inline: self.inline,
            custom: self.custom.clone(),
            disabled: self.disabled,
            multiple: self.multiple,
            error_message: self.error_message,
            name: self.name.clone(),
            label_scope: self.label_scope.clone(),
            title_scope: self.title_scope.clone(),
            translate_params: self.translate_params.clone(),
            attrs: self.attrs.clone(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_methods() {
        let options = FieldOptions::new()
            .label("Email")
            .help("We never share it")
            .layout(Layout::Horizontal)
            .attr("autocomplete", "email");

        assert_eq!(options.label_text(), Some("Email"));
        assert_eq!(
            options.help,
            Some(HelpOption::Text("We never share it".to_string()))
        );
        assert_eq!(options.layout, Some(Layout::Horizontal));
        assert_eq!(options.attrs.get("autocomplete"), Some("email"));
    }

    #[test]
    fn test_descriptor_text_is_label_text() {
        let options = FieldOptions::new().label_descriptor(Some("Custom"), Some("x"));
        assert_eq!(options.label_text(), Some("Custom"));
        assert_eq!(FieldOptions::new().label_text(), None);
    }

    #[test]
    fn test_collection_item_drops_group_keys() {
        let options = FieldOptions::new()
            .label("Skills")
            .help("Pick some")
            .label_class("bold")
            .wrapper_class("mb-0")
            .class("ignored")
            .id("skills")
            .inline()
            .disabled();
        let item = options.collection_item("Rust".to_string(), Some(true));

        assert_eq!(item.label_text(), Some("Rust"));
        assert_eq!(item.checked, Some(true));
        assert!(item.inline);
        assert!(item.disabled);
        assert!(item.help.is_none());
        assert!(item.label_class.is_none());
        assert!(item.wrapper_class.is_none());
        assert!(item.class.is_none());
        assert!(item.id.is_none());
    }

    #[test]
    fn test_custom_control_wrapper_class() {
        assert_eq!(CustomControl::Default.wrapper_class("radio"), "custom-radio");
        assert_eq!(CustomControl::Switch.wrapper_class("checkbox"), "custom-switch");
        assert_eq!(
            CustomControl::Named("file".to_string()).wrapper_class("checkbox"),
            "custom-file"
        );
    }
}
