//! The form builder: form-level state shared by every field call.

use std::fmt;

use crate::group::GroupOptions;
use crate::html::sanitized_object_name;
use crate::i18n::{self, TranslateParams, Translator};
use crate::model::{humanize, underscore, FormObject};
use crate::settings::FormSettings;
use crate::validation;

/// Renders Bootstrap-styled fields for one bound object.
///
/// The builder holds the object name used for ids and names, the bound
/// object (if any), the form-level [`FormSettings`] and an optional
/// [`Translator`]. Every field method takes `&self`: settings are never
/// mutated by rendering.
///
/// ```rust
/// use oxide_bootstrap_form::{FieldOptions, FormBuilder, FormSettings, Record};
/// use oxide_bootstrap_form::validation::PresenceValidator;
///
/// let user = Record::new("User")
///     .with_value("email", "ada@example.com")
///     .with_validator("email", PresenceValidator::new());
/// let form = FormBuilder::for_object(&user, FormSettings::new());
///
/// let html = form.email_field("email", &FieldOptions::new());
/// assert!(html.contains("form-group"));
/// assert!(html.contains(r#"name="user[email]""#));
/// ```
pub struct FormBuilder<'a> {
    object_name: String,
    object: Option<&'a dyn FormObject>,
    settings: FormSettings,
    translator: Option<&'a dyn Translator>,
}

impl fmt::Debug for FormBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormBuilder")
            .field("object_name", &self.object_name)
            .field("model", &self.object.map(FormObject::model_name))
            .field("settings", &self.settings)
            .field("translator", &self.translator.is_some())
            .finish()
    }
}

impl<'a> FormBuilder<'a> {
    /// Creates a builder for `object_name`, optionally bound to an object.
    pub fn new(
        object_name: impl Into<String>,
        object: Option<&'a dyn FormObject>,
        settings: FormSettings,
    ) -> Self {
        Self {
            object_name: object_name.into(),
            object,
            settings,
            translator: None,
        }
    }

    /// Creates a builder bound to `object`, named after its model:
    /// `AdminUser` fields are named `admin_user[...]`.
    pub fn for_object(object: &'a dyn FormObject, settings: FormSettings) -> Self {
        let object_name = underscore(object.model_name()).replace('/', "_");
        Self::new(object_name, Some(object), settings)
    }

    /// Creates a builder without an object that behaves like a tag-based
    /// form: ids and names are the bare attribute names.
    pub fn form_tag(settings: FormSettings) -> Self {
        Self::new(String::new(), None, settings.acts_like_form_tag(true))
    }

    /// Attaches a translator for labels, placeholders, titles and help.
    #[must_use]
    pub fn with_translator(mut self, translator: &'a dyn Translator) -> Self {
        self.translator = Some(translator);
        self
    }

    /// Replaces the settings.
    #[must_use]
    pub fn with_settings(mut self, settings: FormSettings) -> Self {
        self.settings = settings;
        self
    }

    /// A builder for a nested record, named `{object_name}[{record_name}]`.
    /// It inherits settings and translator.
    pub fn nested(&self, record_name: &str, object: Option<&'a dyn FormObject>) -> Self {
        let object_name = if self.object_name.is_empty() {
            record_name.to_string()
        } else {
            format!("{}[{record_name}]", self.object_name)
        };
        Self {
            object_name,
            object,
            settings: self.settings.clone(),
            translator: self.translator,
        }
    }

    /// Renders the fields of a nested record with a nested builder.
    pub fn fields_for(
        &self,
        record_name: &str,
        object: Option<&'a dyn FormObject>,
        content: impl FnOnce(&FormBuilder<'a>) -> String,
    ) -> String {
        content(&self.nested(record_name, object))
    }

    /// The object name used for ids and names.
    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    /// The bound object.
    pub fn object(&self) -> Option<&'a dyn FormObject> {
        self.object
    }

    /// The form-level settings.
    pub fn settings(&self) -> &FormSettings {
        &self.settings
    }

    /// Whether the bound object has errors on `attribute`.
    pub fn has_error(&self, attribute: &str) -> bool {
        validation::has_error(self.object, attribute)
    }

    /// Whether a presence rule is registered on `attribute`.
    pub fn is_required(&self, attribute: &str) -> bool {
        validation::is_required(self.object, attribute)
    }

    /// Formatted error message for `attribute`.
    pub fn error_message(&self, attribute: &str, hide_attribute_name: bool) -> String {
        validation::error_message(self.object, attribute, hide_attribute_name)
    }

    /// Whether errors on `attribute` replace its help text.
    pub fn inline_error(&self, attribute: &str) -> bool {
        self.settings.inline_errors_enabled() && self.has_error(attribute)
    }

    /// Default element id of an attribute, if ids are generated.
    pub fn field_id(&self, attribute: &str) -> Option<String> {
        self.tag_default(attribute, |object_name| {
            format!("{}_{attribute}", sanitized_object_name(object_name))
        })
    }

    /// Default element name of an attribute, if names are generated.
    pub fn field_name(&self, attribute: &str) -> Option<String> {
        self.tag_default(attribute, |object_name| {
            format!("{object_name}[{attribute}]")
        })
    }

    fn tag_default(&self, attribute: &str, scoped: impl FnOnce(&str) -> String) -> Option<String> {
        if self.settings.acts_like_form_tag {
            return (!self.settings.skip_default_ids).then(|| attribute.to_string());
        }
        if self.object_name.is_empty() {
            Some(attribute.to_string())
        } else {
            Some(scoped(&self.object_name))
        }
    }

    pub(crate) fn human_attribute_name(&self, attribute: &str) -> String {
        self.object.map_or_else(
            || humanize(attribute),
            |object| object.human_attribute_name(attribute),
        )
    }

    pub(crate) fn value(&self, attribute: &str) -> Option<String> {
        self.object.and_then(|object| object.value(attribute))
    }

    pub(crate) fn values(&self, attribute: &str) -> Vec<String> {
        self.object
            .map(|object| object.values(attribute))
            .unwrap_or_default()
    }

    pub(crate) fn translate(
        &self,
        key: &str,
        scope: &str,
        params: &TranslateParams,
    ) -> Option<String> {
        self.translator?.translate(key, scope, params)
    }

    pub(crate) fn help_text_by_i18n(&self, attribute: &str) -> Option<String> {
        let object = self.object?;
        i18n::help_text(self.translator?, object.model_name(), attribute)
    }

    /// Wraps `content` in a form group, or renders it bare when the field
    /// asked for no wrapper.
    pub(crate) fn wrap_group(
        &self,
        attribute: &str,
        group: Option<&GroupOptions>,
        content: impl FnOnce() -> String,
    ) -> String {
        match group {
            Some(options) => self.form_group(Some(attribute), options, content),
            None => content(),
        }
    }
}
