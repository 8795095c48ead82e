//! Error types for the form builder.

use thiserror::Error;

/// Errors raised while loading configuration or translation catalogs.
///
/// Rendering itself never fails: absent data omits the fragment.
#[derive(Debug, Error)]
pub enum FormError {
    /// A JSON document could not be parsed.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An unknown layout name was given.
    #[error("unknown layout: {0}")]
    UnknownLayout(String),

    /// A translation catalog had an unexpected shape.
    #[error("invalid translation catalog: {0}")]
    InvalidCatalog(String),

    /// A validator pattern failed to compile.
    #[error("invalid validator pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Collection of validation errors by attribute, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: Vec<(String, Vec<String>)>,
}

impl ValidationErrors {
    /// Creates a new empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an error message for an attribute.
    pub fn add(&mut self, attribute: &str, message: impl Into<String>) {
        let message = message.into();
        match self.entries.iter_mut().find(|(name, _)| name == attribute) {
            Some((_, messages)) => messages.push(message),
            None => self.entries.push((attribute.to_string(), vec![message])),
        }
    }

    /// Removes every error.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of attributes with errors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the raw messages for an attribute; empty when there are none.
    pub fn get(&self, attribute: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(name, _)| name == attribute)
            .map(|(_, messages)| messages.as_slice())
            .unwrap_or_default()
    }

    /// Iterates over attributes that carry errors.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Returns all errors as a flat list of `(attribute, message)` pairs.
    pub fn all_errors(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .flat_map(|(attribute, messages)| {
                messages
                    .iter()
                    .map(move |msg| (attribute.as_str(), msg.as_str()))
            })
            .collect()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (attribute, message) in self.all_errors() {
            writeln!(f, "{attribute}: {message}")?;
        }
        Ok(())
    }
}

/// Result type alias for fallible form-builder operations.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut errors = ValidationErrors::new();
        errors.add("name", "is too short");
        errors.add("email", "is invalid");
        errors.add("name", "can't be blank");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name"), ["is too short", "can't be blank"]);
        assert_eq!(errors.attributes().collect::<Vec<_>>(), ["name", "email"]);
    }

    #[test]
    fn test_missing_attribute_is_empty_slice() {
        let errors = ValidationErrors::new();
        assert!(errors.get("anything").is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_display() {
        let mut errors = ValidationErrors::new();
        errors.add("email", "is invalid");
        assert_eq!(errors.to_string(), "email: is invalid\n");
    }
}
