//! Option resolution: splits [`FieldOptions`] into control attributes and
//! group options.

use crate::builder::FormBuilder;
use crate::classes;
use crate::group::{GroupOptions, LabelDescriptor};
use crate::html::{join_classes, HtmlAttributes};
use crate::options::{ControlClass, FieldOptions, LabelOption, WrapperOption};

/// The result of resolving one field's options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedField {
    /// Attributes of the control element, builder keys removed.
    pub control: HtmlAttributes,
    /// Group options, or `None` when the field renders without a group.
    pub group: Option<GroupOptions>,
}

impl FormBuilder<'_> {
    /// Resolves the options of a field.
    ///
    /// `html_options` are the separate HTML options of select-like
    /// controls; their `class` joins the control classes and every other
    /// key is forwarded.
    pub fn resolve_field(
        &self,
        attribute: &str,
        options: &FieldOptions,
        html_options: Option<&HtmlAttributes>,
    ) -> ResolvedField {
        let base = match &options.control_class {
            ControlClass::Base => Some(classes::CONTROL),
            ControlClass::Override(class) => Some(class.as_str()),
            ControlClass::Omitted => None,
        };
        let class = join_classes([
            base,
            html_options.and_then(|html| html.get("class")),
            options.attrs.get("class"),
            options.class.as_deref(),
            self.inline_error(attribute).then_some(classes::ERROR),
        ]);

        let mut control = HtmlAttributes::new();
        if let Some(id) = self.control_id(attribute, options) {
            control.set("id", id);
        }
        if let Some(name) = self.control_name(attribute, options) {
            control.set("name", name);
        }
        if !class.is_empty() {
            control.set("class", class);
        }
        forward_attrs(&mut control, &options.attrs);
        if let Some(html) = html_options {
            forward_attrs(&mut control, html);
        }
        if let Some(title) = self.scoped_translation(attribute, options.title_scope.as_deref(), options) {
            control.set("title", title);
        }
        if let Some(placeholder) =
            self.scoped_translation(attribute, options.placeholder_scope.as_deref(), options)
        {
            control.set("placeholder", placeholder);
        }
        if options.label_as_placeholder {
            let text = self
                .label_text(attribute, options)
                .unwrap_or_else(|| self.human_attribute_name(attribute));
            control.set("placeholder", text);
        }
        if options.disabled {
            control.set_flag("disabled");
        }

        ResolvedField {
            control,
            group: self.group_options(attribute, options),
        }
    }

    /// Group options of a field, or `None` when its wrapper is disabled.
    pub(crate) fn group_options(
        &self,
        attribute: &str,
        options: &FieldOptions,
    ) -> Option<GroupOptions> {
        let overrides = match &options.wrapper {
            Some(WrapperOption::Disabled) => return None,
            Some(WrapperOption::Overrides(overrides)) => Some(overrides),
            None => None,
        };
        let id = self.control_id(attribute, options);

        Some(GroupOptions {
            id: id.clone(),
            help: options.help.clone(),
            help_class: options.help_class.clone(),
            icon: options.icon.clone(),
            label_col: options.label_col.clone(),
            control_col: options.control_col.clone(),
            layout: options.layout,
            wrapper_class: overrides
                .and_then(|overrides| overrides.class.clone())
                .or_else(|| options.wrapper_class.clone()),
            wrapper_attrs: overrides
                .map(|overrides| overrides.attrs.clone())
                .unwrap_or_default(),
            control_wrapper: options.control_wrapper.clone(),
            label: (!options.skip_label).then(|| self.label_descriptor(attribute, options, id)),
            hide_attribute_name: options.hide_attribute_name,
        })
    }

    fn label_descriptor(
        &self,
        attribute: &str,
        options: &FieldOptions,
        for_id: Option<String>,
    ) -> LabelDescriptor {
        let class = if options.hide_label || options.label_as_placeholder {
            Some(classes::HIDE.to_string())
        } else {
            match &options.label {
                Some(LabelOption::Descriptor {
                    class: Some(class), ..
                }) => Some(class.clone()),
                _ => options.label_class.clone(),
            }
        };
        LabelDescriptor {
            text: self.label_text(attribute, options),
            class,
            required: Some(!options.skip_required && self.is_required(attribute)),
            for_id,
        }
    }

    /// Explicit label text, or the `label_scope` translation.
    pub(crate) fn label_text(&self, attribute: &str, options: &FieldOptions) -> Option<String> {
        options
            .label_text()
            .map(str::to_string)
            .or_else(|| self.scoped_translation(attribute, options.label_scope.as_deref(), options))
    }

    pub(crate) fn control_id(&self, attribute: &str, options: &FieldOptions) -> Option<String> {
        options.id.clone().or_else(|| self.field_id(attribute))
    }

    pub(crate) fn control_name(&self, attribute: &str, options: &FieldOptions) -> Option<String> {
        options.name.clone().or_else(|| self.field_name(attribute))
    }

    pub(crate) fn scoped_translation(
        &self,
        key: &str,
        scope: Option<&str>,
        options: &FieldOptions,
    ) -> Option<String> {
        self.translate(key, scope?, &options.translate_params)
            .filter(|text| !text.is_empty())
    }
}

fn forward_attrs(control: &mut HtmlAttributes, attrs: &HtmlAttributes) {
    for (key, value) in attrs.iter().filter(|(key, _)| *key != "class") {
        control.set(key, value);
    }
}
