//! Model capabilities consumed by the form builder.
//!
//! A bound object only has to describe itself ([`FormObject`]). Error
//! reporting ([`ErrorBearing`]) and validator introspection
//! ([`Validatable`]) are optional capabilities: an object that does not
//! expose them simply never renders errors or required markers.

use std::collections::BTreeMap;
use std::fmt;

use convert_case::{Case, Casing};

use crate::error::ValidationErrors;
use crate::validation::{Validator, ValidatorKind};

/// An object whose attributes a form renders.
pub trait FormObject {
    /// The model name, e.g. `User` or `AdminUser`.
    fn model_name(&self) -> &str;

    /// Current value of an attribute.
    fn value(&self, attribute: &str) -> Option<String>;

    /// All current values of a multi-valued attribute.
    fn values(&self, attribute: &str) -> Vec<String> {
        self.value(attribute).into_iter().collect()
    }

    /// Human-readable attribute name used in labels and full messages.
    fn human_attribute_name(&self, attribute: &str) -> String {
        humanize(attribute)
    }

    /// The error-bearing capability, if this object has one.
    fn as_error_bearing(&self) -> Option<&dyn ErrorBearing> {
        None
    }

    /// The validator-introspection capability, if this object has one.
    fn as_validatable(&self) -> Option<&dyn Validatable> {
        None
    }
}

/// Objects that carry validation errors.
pub trait ErrorBearing {
    /// Current validation errors.
    fn errors(&self) -> &ValidationErrors;
}

/// Objects that can list the validators registered on an attribute.
pub trait Validatable {
    /// Validator descriptors registered on `attribute`.
    fn validators_on(&self, attribute: &str) -> Vec<ValidatorKind>;
}

/// Items of a collection input that can be read by attribute name.
///
/// Implementors that are only ever read through closures can rely on the
/// default, which knows no attributes.
pub trait CollectionMember {
    /// Reads an attribute of the item.
    fn member(&self, _name: &str) -> Option<String> {
        None
    }
}

/// Pairs answer `first` and `last`.
impl<A: fmt::Display, B: fmt::Display> CollectionMember for (A, B) {
    fn member(&self, name: &str) -> Option<String> {
        match name {
            "first" => Some(self.0.to_string()),
            "last" => Some(self.1.to_string()),
            _ => None,
        }
    }
}

impl CollectionMember for String {
    fn member(&self, name: &str) -> Option<String> {
        (name == "to_s").then(|| self.clone())
    }
}

impl CollectionMember for &str {
    fn member(&self, name: &str) -> Option<String> {
        (name == "to_s").then(|| (*self).to_string())
    }
}

/// An in-memory model implementing every capability.
///
/// Values are strings; multi-valued attributes keep all of their values.
#[derive(Default)]
pub struct Record {
    model_name: String,
    values: BTreeMap<String, Vec<String>>,
    human_names: BTreeMap<String, String>,
    validators: Vec<(String, Box<dyn Validator>)>,
    errors: ValidationErrors,
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("model_name", &self.model_name)
            .field("values", &self.values)
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}

impl Record {
    /// Creates an empty record of the given model.
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            ..Self::default()
        }
    }

    /// Sets a single-valued attribute.
    #[must_use]
    pub fn with_value(mut self, attribute: &str, value: impl Into<String>) -> Self {
        self.set_value(attribute, value);
        self
    }

    /// Sets a multi-valued attribute.
    #[must_use]
    pub fn with_values<I, S>(mut self, attribute: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values.insert(
            attribute.to_string(),
            values.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Overrides the human-readable name of an attribute.
    #[must_use]
    pub fn with_human_name(mut self, attribute: &str, name: impl Into<String>) -> Self {
        self.human_names.insert(attribute.to_string(), name.into());
        self
    }

    /// Registers a validator on an attribute.
    #[must_use]
    pub fn with_validator(mut self, attribute: &str, validator: impl Validator + 'static) -> Self {
        self.validators
            .push((attribute.to_string(), Box::new(validator)));
        self
    }

    /// Records an error on an attribute.
    #[must_use]
    pub fn with_error(mut self, attribute: &str, message: impl Into<String>) -> Self {
        self.errors.add(attribute, message);
        self
    }

    /// Replaces the values of an attribute with a single value.
    pub fn set_value(&mut self, attribute: &str, value: impl Into<String>) {
        self.values
            .insert(attribute.to_string(), vec![value.into()]);
    }

    /// Mutable access to the error collection.
    pub fn errors_mut(&mut self) -> &mut ValidationErrors {
        &mut self.errors
    }

    /// Runs every registered validator against the current values,
    /// replacing the previous errors. Returns whether the record is valid.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();
        for (attribute, validator) in &self.validators {
            let value = self
                .values
                .get(attribute)
                .map(|values| values.join(","))
                .unwrap_or_default();
            if let Err(message) = validator.validate(&value) {
                self.errors.add(attribute, message);
            }
        }
        self.errors.is_empty()
    }
}

impl FormObject for Record {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn value(&self, attribute: &str) -> Option<String> {
        self.values
            .get(attribute)
            .and_then(|values| values.first().cloned())
    }

    fn values(&self, attribute: &str) -> Vec<String> {
        self.values.get(attribute).cloned().unwrap_or_default()
    }

    fn human_attribute_name(&self, attribute: &str) -> String {
        self.human_names
            .get(attribute)
            .cloned()
            .unwrap_or_else(|| humanize(attribute))
    }

    fn as_error_bearing(&self) -> Option<&dyn ErrorBearing> {
        Some(self)
    }

    fn as_validatable(&self) -> Option<&dyn Validatable> {
        Some(self)
    }
}

impl ErrorBearing for Record {
    fn errors(&self) -> &ValidationErrors {
        &self.errors
    }
}

impl Validatable for Record {
    fn validators_on(&self, attribute: &str) -> Vec<ValidatorKind> {
        self.validators
            .iter()
            .filter(|(name, _)| name == attribute)
            .map(|(_, validator)| validator.kind())
            .collect()
    }
}

impl CollectionMember for Record {
    fn member(&self, name: &str) -> Option<String> {
        self.value(name)
    }
}

/// Turns an attribute token into a human-readable name:
/// `first_name` becomes `First name`, `author_id` becomes `Author`.
pub fn humanize(attribute: &str) -> String {
    let base = attribute.strip_suffix("_id").unwrap_or(attribute);
    base.to_case(Case::Sentence)
}

/// Turns a model name into its underscored form:
/// `AdminUser` becomes `admin_user`, `Admin::User` becomes `admin/user`.
pub fn underscore(model_name: &str) -> String {
    model_name
        .split("::")
        .map(|part| part.to_case(Case::Snake))
        .collect::<Vec<_>>()
        .join("/")
}
