//! Localization lookups for labels, placeholders, titles and help text.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{FormError, Result};
use crate::model::underscore;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%\{(\w+)\}").expect("interpolation pattern is valid"));

/// Interpolation parameters passed to translations.
pub type TranslateParams = BTreeMap<String, String>;

/// A localization backend.
pub trait Translator {
    /// Looks up `key` under the dot-separated `scope`. Returns `None` when
    /// there is no translation.
    fn translate(&self, key: &str, scope: &str, params: &TranslateParams) -> Option<String>;
}

/// An in-memory translation catalog for one locale.
///
/// The catalog is a tree of JSON objects whose leaves are strings:
///
/// ```rust
/// use oxide_bootstrap_form::{Catalog, TranslateParams, Translator};
///
/// let catalog = Catalog::from_json(
///     r#"{"activerecord": {"help": {"user": {"email": "We never share it"}}}}"#,
/// )
/// .unwrap();
/// let text = catalog.translate("email", "activerecord.help.user", &TranslateParams::new());
/// assert_eq!(text.as_deref(), Some("We never share it"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    root: Value,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            root: Value::Object(Map::new()),
        }
    }
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a catalog from a JSON document whose root is an object.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Wraps an existing JSON value whose root is an object.
    pub fn from_value(root: Value) -> Result<Self> {
        if root.is_object() {
            Ok(Self { root })
        } else {
            Err(FormError::InvalidCatalog(
                "the root must be a JSON object".to_string(),
            ))
        }
    }

    /// Inserts a translation at a dot-separated path.
    pub fn insert(&mut self, path: &str, text: impl Into<String>) {
        let mut node = &mut self.root;
        for segment in path.split('.') {
            if !node.is_object() {
                *node = Value::Object(Map::new());
            }
            let Value::Object(map) = node else {
                return;
            };
            node = map.entry(segment.to_string()).or_insert(Value::Null);
        }
        *node = Value::String(text.into());
    }

    /// Builder form of [`Catalog::insert`].
    #[must_use]
    pub fn with(mut self, path: &str, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }

    fn lookup<'s>(&self, mut segments: impl Iterator<Item = &'s str>) -> Option<&str> {
        segments
            .try_fold(&self.root, |node, segment| node.get(segment))?
            .as_str()
    }
}

impl Translator for Catalog {
    fn translate(&self, key: &str, scope: &str, params: &TranslateParams) -> Option<String> {
        let segments = scope
            .split('.')
            .chain(key.split('.'))
            .filter(|segment| !segment.is_empty());
        match self.lookup(segments) {
            Some(template) => Some(interpolate(template, params)),
            None => {
                debug!(key, scope, "translation missing");
                None
            }
        }
    }
}

/// Replaces `%{name}` placeholders with parameters. Unknown placeholders
/// are left as they are.
pub fn interpolate(template: &str, params: &TranslateParams) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            params
                .get(&caps[1])
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Looks up help text for an attribute of a model under
/// `activerecord.help.{underscored model}`, falling back to the deprecated
/// `activerecord.help.{downcased model}` scope.
pub fn help_text(
    translator: &dyn Translator,
    model_name: &str,
    attribute: &str,
) -> Option<String> {
    let params = TranslateParams::new();
    let underscored_scope = format!("activerecord.help.{}", underscore(model_name));
    if let Some(text) = translator
        .translate(attribute, &underscored_scope, &params)
        .filter(|text| !text.is_empty())
    {
        return Some(text);
    }

    let downcased_scope = format!("activerecord.help.{}", model_name.to_lowercase());
    if downcased_scope == underscored_scope {
        return None;
    }
    let text = translator
        .translate(attribute, &downcased_scope, &params)
        .filter(|text| !text.is_empty())?;
    warn!(
        deprecated = %format!("{downcased_scope}.{attribute}"),
        replacement = %format!("{underscored_scope}.{attribute}"),
        "deprecated help translation key"
    );
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> TranslateParams {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_translate_nested_key() {
        let catalog = Catalog::new().with("forms.user.role.admin", "Administrator");
        assert_eq!(
            catalog.translate("role.admin", "forms.user", &TranslateParams::new()),
            Some("Administrator".to_string())
        );
        assert_eq!(
            catalog.translate("role.guest", "forms.user", &TranslateParams::new()),
            None
        );
    }

    #[test]
    fn test_translate_interpolates() {
        let catalog = Catalog::new().with("titles.name", "Hello %{who}, %{missing}");
        assert_eq!(
            catalog.translate("name", "titles", &params(&[("who", "Ada")])),
            Some("Hello Ada, %{missing}".to_string())
        );
    }

    #[test]
    fn test_non_leaf_is_not_a_translation() {
        let catalog = Catalog::new().with("a.b.c", "leaf");
        assert_eq!(catalog.translate("b", "a", &TranslateParams::new()), None);
    }

    #[test]
    fn test_from_json_requires_object() {
        assert!(Catalog::from_json("[1, 2]").is_err());
        assert!(Catalog::from_json("not json").is_err());
        assert!(Catalog::from_json("{}").is_ok());
    }

    #[test]
    fn test_help_text_prefers_underscored_scope() {
        let catalog = Catalog::new()
            .with("activerecord.help.admin_user.email", "new")
            .with("activerecord.help.adminuser.email", "old");
        assert_eq!(
            help_text(&catalog, "AdminUser", "email").as_deref(),
            Some("new")
        );
    }

    #[test]
    fn test_help_text_falls_back_to_downcased_scope() {
        let catalog = Catalog::new().with("activerecord.help.adminuser.email", "old");
        assert_eq!(
            help_text(&catalog, "AdminUser", "email").as_deref(),
            Some("old")
        );
        assert_eq!(help_text(&catalog, "AdminUser", "name"), None);
    }

    #[test]
    fn test_help_text_ignores_empty_translation() {
        let catalog = Catalog::new().with("activerecord.help.user.email", "");
        assert_eq!(help_text(&catalog, "User", "email"), None);
    }
}
