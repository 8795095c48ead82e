//! HTML attribute bags, escaping and id/name helpers.

use tracing::warn;

/// Ordered HTML attributes. Setting an existing key replaces its value in
/// place, so output order is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlAttributes {
    attrs: Vec<(String, String)>,
}

impl HtmlAttributes {
    /// Creates new empty attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute. Keys that are not valid attribute names are
    /// dropped.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if !is_attribute_name(&key) {
            warn!(key = %key, "ignoring invalid HTML attribute name");
            return;
        }
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.attrs.push((key, value)),
        }
    }

    /// Sets a boolean attribute (`disabled="disabled"`).
    pub fn set_flag(&mut self, key: &str) {
        self.set(key, key);
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Removes an attribute, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.attrs.iter().position(|(k, _)| k == key)?;
        Some(self.attrs.remove(index).1)
    }

    /// Whether an attribute is present.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Whether there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Iterates over `(key, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copies every attribute of `other` into `self`; `other` wins.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in other.iter() {
            self.set(key, value);
        }
    }

    /// Renders attributes as ` key="value"` pairs, each with a leading
    /// space, values escaped.
    pub fn to_html(&self) -> String {
        self.attrs
            .iter()
            .map(|(k, v)| format!(r#" {k}="{}""#, html_escape(v)))
            .collect()
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for HtmlAttributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (key, value) in iter {
            attrs.set(key, value);
        }
        attrs
    }
}

/// Whether `key` can be written as an attribute name without quoting.
fn is_attribute_name(key: &str) -> bool {
    !key.is_empty()
        && key.chars().all(|c| {
            !c.is_whitespace()
                && !c.is_control()
                && !matches!(c, '"' | '\'' | '<' | '>' | '/' | '=' | '&' | '`')
        })
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Joins the present, non-blank class tokens with single spaces.
pub fn join_classes<'s>(tokens: impl IntoIterator<Item = Option<&'s str>>) -> String {
    tokens
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sanitizes an object name for use in element ids:
/// `user[address]` becomes `user_address`.
pub fn sanitized_object_name(object_name: &str) -> String {
    let replaced: String = object_name
        .replace("][", "_")
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | ':' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    replaced.strip_suffix('_').unwrap_or(&replaced).to_string()
}

/// Sanitizes a value for use as an id suffix: whitespace and dots become
/// underscores, other non-word characters are dropped, and the result is
/// lowercased.
pub fn sanitized_value(value: &str) -> String {
    value
        .chars()
        .filter_map(|c| {
            if c.is_whitespace() || c == '.' {
                Some('_')
            } else if c.is_alphanumeric() || c == '_' || c == '-' {
                Some(c)
            } else {
                None
            }
        })
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_attribute_names_are_dropped() {
        let attrs = HtmlAttributes::new()
            .with(r#"x"><script"#, "alert(1)")
            .with("data-id", "7")
            .with("", "empty")
            .with("on click", "x");

        assert_eq!(attrs.iter().count(), 1);
        assert_eq!(attrs.to_html(), r#" data-id="7""#);
        assert!(is_attribute_name("aria-label"));
        assert!(is_attribute_name("data-user_id"));
        assert!(!is_attribute_name("a=b"));
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("\"test\""), "&quot;test&quot;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
    }

    #[test]
    fn test_attributes_keep_order_and_replace() {
        let mut attrs = HtmlAttributes::new()
            .with("class", "form-control")
            .with("id", "my-input");
        attrs.set("class", "form-control is-invalid");
        assert_eq!(
            attrs.to_html(),
            r#" class="form-control is-invalid" id="my-input""#
        );
    }

    #[test]
    fn test_attributes_remove_and_merge() {
        let mut attrs = HtmlAttributes::new().with("placeholder", "Name");
        assert_eq!(attrs.remove("placeholder").as_deref(), Some("Name"));
        assert!(attrs.is_empty());

        attrs.merge(&HtmlAttributes::new().with("data-x", "1"));
        attrs.set_flag("disabled");
        assert_eq!(attrs.get("disabled"), Some("disabled"));
        assert!(attrs.contains("data-x"));
    }

    #[test]
    fn test_join_classes_skips_blanks() {
        assert_eq!(
            join_classes([Some("form-group"), None, Some(""), Some("extra")]),
            "form-group extra"
        );
    }

    #[test]
    fn test_sanitized_object_name() {
        assert_eq!(sanitized_object_name("user"), "user");
        assert_eq!(sanitized_object_name("user[address]"), "user_address");
        assert_eq!(
            sanitized_object_name("user[addresses][0]"),
            "user_addresses_0"
        );
    }

    #[test]
    fn test_sanitized_value() {
        assert_eq!(sanitized_value("Rust and Go"), "rust_and_go");
        assert_eq!(sanitized_value("v1.2"), "v1_2");
        assert_eq!(sanitized_value("a&b"), "ab");
    }
}
