//! Form-level settings shared by every field of a form.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};

/// Default label column for horizontal forms.
pub const DEFAULT_LABEL_COL: &str = "col-sm-2";

/// Default control column for horizontal forms.
pub const DEFAULT_CONTROL_COL: &str = "col-sm-10";

static GRID_COL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^col-(\w+)-(\d)$").expect("grid column pattern is valid"));

/// Form layout variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Stacked labels and controls.
    #[default]
    Default,
    /// Label and control in separate grid columns.
    Horizontal,
    /// Everything on a single line.
    Inline,
}

impl Layout {
    /// Returns the layout name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Horizontal => "horizontal",
            Self::Inline => "inline",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "default" => Ok(Self::Default),
            "horizontal" => Ok(Self::Horizontal),
            "inline" => Ok(Self::Inline),
            other => Err(FormError::UnknownLayout(other.to_string())),
        }
    }
}

/// Settings owned by a form builder for its whole lifetime.
///
/// Field rendering only ever reads these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    /// Layout applied to fields that do not override it.
    pub layout: Layout,
    /// Label column class in horizontal layout.
    pub label_col: String,
    /// Control column class in horizontal layout.
    pub control_col: String,
    /// Append error messages to label text.
    pub label_errors: bool,
    /// Render error messages in place of help text. Defaults to the
    /// opposite of `label_errors` when unset.
    pub inline_errors: Option<bool>,
    /// Behave like a tag-based form: ids and names are the bare attribute.
    pub acts_like_form_tag: bool,
    /// With `acts_like_form_tag`, do not generate ids and names at all.
    pub skip_default_ids: bool,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            layout: Layout::Default,
            label_col: DEFAULT_LABEL_COL.to_string(),
            control_col: DEFAULT_CONTROL_COL.to_string(),
            label_errors: false,
            inline_errors: None,
            acts_like_form_tag: false,
            skip_default_ids: false,
        }
    }
}

impl FormSettings {
    /// Creates settings with the default layout and grid columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Horizontal-layout settings with the default grid columns.
    pub fn horizontal() -> Self {
        Self::default().layout(Layout::Horizontal)
    }

    /// Inline-layout settings.
    pub fn inline() -> Self {
        Self::default().layout(Layout::Inline)
    }

    /// Parses settings from a JSON document. Missing keys take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the layout.
    #[must_use]
    pub const fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the label column class.
    #[must_use]
    pub fn label_col(mut self, class: impl Into<String>) -> Self {
        self.label_col = class.into();
        self
    }

    /// Sets the control column class.
    #[must_use]
    pub fn control_col(mut self, class: impl Into<String>) -> Self {
        self.control_col = class.into();
        self
    }

    /// Enables or disables error messages in labels.
    #[must_use]
    pub const fn label_errors(mut self, enabled: bool) -> Self {
        self.label_errors = enabled;
        self
    }

    /// Enables or disables inline error messages.
    #[must_use]
    pub const fn inline_errors(mut self, enabled: bool) -> Self {
        self.inline_errors = Some(enabled);
        self
    }

    /// Makes the builder behave like a tag-based form.
    #[must_use]
    pub const fn acts_like_form_tag(mut self, enabled: bool) -> Self {
        self.acts_like_form_tag = enabled;
        self
    }

    /// Suppresses generated ids and names in tag-based forms.
    #[must_use]
    pub const fn skip_default_ids(mut self, enabled: bool) -> Self {
        self.skip_default_ids = enabled;
        self
    }

    /// Whether error messages replace help text.
    pub fn inline_errors_enabled(&self) -> bool {
        self.inline_errors.unwrap_or(!self.label_errors)
    }

    /// Whether the form-level layout is horizontal.
    pub fn is_horizontal(&self) -> bool {
        self.layout == Layout::Horizontal
    }
}

/// Turns a label column (`col-sm-2`) into the matching offset class
/// (`col-sm-offset-2`). Anything else is returned unchanged.
pub fn offset_col(label_col: &str) -> String {
    GRID_COL
        .replace(label_col, "col-${1}-offset-${2}")
        .into_owned()
}
