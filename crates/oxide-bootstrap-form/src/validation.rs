//! Validators, validation lookups and error-message formatting.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::model::FormObject;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern is valid")
});

/// The kind of rule a validator enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidatorKind {
    /// The value must be present. Drives the `required` label marker.
    Presence,
    /// The value length is bounded.
    Length,
    /// The value matches a pattern.
    Format,
    /// The value is a number within bounds.
    Numericality,
    /// Anything else.
    Custom,
}

impl ValidatorKind {
    /// Whether this is a presence rule.
    pub const fn is_presence(self) -> bool {
        matches!(self, Self::Presence)
    }
}

/// Trait for attribute validators.
///
/// Messages are relative to the attribute (`can't be blank`), so that a
/// full message is the human attribute name followed by the message.
pub trait Validator: Send + Sync {
    /// Validates a value and returns an error message if invalid.
    fn validate(&self, value: &str) -> std::result::Result<(), String>;

    /// Returns the error message for this validator.
    fn message(&self) -> &str;

    /// Returns the kind of rule this validator enforces.
    fn kind(&self) -> ValidatorKind;
}

/// Validator that requires a non-blank value.
#[derive(Debug, Clone)]
pub struct PresenceValidator {
    message: String,
}

impl PresenceValidator {
    /// Creates a new presence validator with the default message.
    pub fn new() -> Self {
        Self::with_message("can't be blank")
    }

    /// Creates a new presence validator with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for PresenceValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for PresenceValidator {
    fn validate(&self, value: &str) -> std::result::Result<(), String> {
        if value.trim().is_empty() {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Presence
    }
}

/// Validator that bounds the number of characters.
#[derive(Debug, Clone)]
pub struct LengthValidator {
    min: Option<usize>,
    max: Option<usize>,
    message: String,
}

impl LengthValidator {
    /// Requires at most `max` characters.
    pub fn maximum(max: usize) -> Self {
        Self {
            min: None,
            max: Some(max),
            message: format!("is too long (maximum is {max} characters)"),
        }
    }

    /// Requires at least `min` characters.
    pub fn minimum(min: usize) -> Self {
        Self {
            min: Some(min),
            max: None,
            message: format!("is too short (minimum is {min} characters)"),
        }
    }

    /// Requires between `min` and `max` characters.
    pub fn within(min: usize, max: usize) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            message: format!("must be between {min} and {max} characters"),
        }
    }

    /// Replaces the error message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl Validator for LengthValidator {
    fn validate(&self, value: &str) -> std::result::Result<(), String> {
        let len = value.chars().count();
        let too_short = self.min.is_some_and(|min| len < min);
        let too_long = self.max.is_some_and(|max| len > max);
        if too_short || too_long {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Length
    }
}

/// Validator for email addresses.
#[derive(Debug, Clone)]
pub struct EmailValidator {
    message: String,
}

impl EmailValidator {
    /// Creates a new email validator with the default message.
    pub fn new() -> Self {
        Self {
            message: "is invalid".to_string(),
        }
    }

    /// Creates a new email validator with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for EmailValidator {
    fn validate(&self, value: &str) -> std::result::Result<(), String> {
        if EMAIL.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Format
    }
}

/// Validator for absolute http(s) URLs.
#[derive(Debug, Clone)]
pub struct UrlValidator {
    message: String,
}

impl UrlValidator {
    /// Creates a new URL validator with the default message.
    pub fn new() -> Self {
        Self {
            message: "is not a valid URL".to_string(),
        }
    }
}

impl Default for UrlValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for UrlValidator {
    fn validate(&self, value: &str) -> std::result::Result<(), String> {
        if value.starts_with("http://") || value.starts_with("https://") {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Format
    }
}

/// Validator using a custom regex pattern.
#[derive(Debug, Clone)]
pub struct FormatValidator {
    pattern: Regex,
    message: String,
}

impl FormatValidator {
    /// Creates a new format validator.
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            message: message.into(),
        })
    }
}

impl Validator for FormatValidator {
    fn validate(&self, value: &str) -> std::result::Result<(), String> {
        if self.pattern.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Format
    }
}

/// Validator for a numeric range.
#[derive(Debug, Clone)]
pub struct NumericalityValidator {
    min: Option<f64>,
    max: Option<f64>,
    message: String,
}

impl NumericalityValidator {
    /// Creates a new numericality validator with optional bounds.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        let message = match (min, max) {
            (Some(min), Some(max)) => format!("must be between {min} and {max}"),
            (Some(min), None) => format!("must be greater than or equal to {min}"),
            (None, Some(max)) => format!("must be less than or equal to {max}"),
            (None, None) => "is not a number".to_string(),
        };
        Self { min, max, message }
    }
}

impl Validator for NumericalityValidator {
    fn validate(&self, value: &str) -> std::result::Result<(), String> {
        let num: f64 = value
            .trim()
            .parse()
            .map_err(|_| "is not a number".to_string())?;

        if self.min.is_some_and(|min| num < min) || self.max.is_some_and(|max| num > max) {
            return Err(self.message.clone());
        }

        Ok(())
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Numericality
    }
}

/// Whether `object` currently holds errors for `attribute`.
///
/// Objects without the error-bearing capability never have errors.
pub fn has_error(object: Option<&dyn FormObject>, attribute: &str) -> bool {
    object
        .and_then(|object| object.as_error_bearing())
        .is_some_and(|bearer| !bearer.errors().get(attribute).is_empty())
}

/// Whether a presence rule is registered on `attribute`.
///
/// Objects without validator introspection are never required.
pub fn is_required(object: Option<&dyn FormObject>, attribute: &str) -> bool {
    object
        .and_then(|object| object.as_validatable())
        .is_some_and(|validatable| {
            validatable
                .validators_on(attribute)
                .into_iter()
                .any(ValidatorKind::is_presence)
        })
}

/// Full message for one error: the human attribute name followed by the
/// message. Errors on `base` are returned as-is.
pub fn full_message(object: &dyn FormObject, attribute: &str, message: &str) -> String {
    if attribute == "base" {
        message.to_string()
    } else {
        format!("{} {message}", object.human_attribute_name(attribute))
    }
}

/// Full messages for every error of an attribute.
pub fn full_messages_for(object: &dyn FormObject, attribute: &str) -> Vec<String> {
    object
        .as_error_bearing()
        .map(|bearer| {
            bearer
                .errors()
                .get(attribute)
                .iter()
                .map(|message| full_message(object, attribute, message))
                .collect()
        })
        .unwrap_or_default()
}

/// Full messages for every error of the object.
pub fn full_messages(object: &dyn FormObject) -> Vec<String> {
    object
        .as_error_bearing()
        .map(|bearer| {
            bearer
                .errors()
                .all_errors()
                .into_iter()
                .map(|(attribute, message)| full_message(object, attribute, message))
                .collect()
        })
        .unwrap_or_default()
}

/// Formats the errors of `attribute` as one human-readable string.
///
/// With `hide_attribute_name` the raw messages are joined with `", "` and
/// returned untouched. Otherwise the first message becomes a full message,
/// the list is joined as a sentence and a final `.` is added unless the
/// sentence already ends in `.`, `!` or `?`.
pub fn error_message(
    object: Option<&dyn FormObject>,
    attribute: &str,
    hide_attribute_name: bool,
) -> String {
    let Some(object) = object else {
        return String::new();
    };
    let Some(bearer) = object.as_error_bearing() else {
        return String::new();
    };
    let raw = bearer.errors().get(attribute);

    if hide_attribute_name {
        return raw.join(", ");
    }

    let Some((first, rest)) = raw.split_first() else {
        return String::new();
    };
    let mut messages = Vec::with_capacity(raw.len());
    messages.push(full_message(object, attribute, first));
    messages.extend(rest.iter().cloned());

    let sentence = to_sentence(&messages);
    if sentence.ends_with(['.', '!', '?']) {
        sentence
    } else {
        format!("{sentence}.")
    }
}

/// Joins words as an English list: `a`, `a and b`, `a, b, and c`.
pub fn to_sentence(words: &[String]) -> String {
    match words {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}
