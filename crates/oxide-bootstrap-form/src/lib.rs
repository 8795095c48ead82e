//! # oxide-bootstrap-form
//!
//! Bootstrap-styled form rendering for model-bound forms.
//!
//! This crate provides:
//! - A [`FormBuilder`] bound to an object name and an optional record
//! - Form groups with labels, help text, icons and inline errors
//! - Text-like inputs, checkboxes, radios, selects and date selects
//! - Collection-driven checkbox and radio sets
//! - Validation-aware `required` detection and error messages
//! - Horizontal, inline and default layouts
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_bootstrap_form::{FieldOptions, FormBuilder, FormSettings, Record};
//! use oxide_bootstrap_form::validation::{LengthValidator, PresenceValidator};
//!
//! let mut user = Record::new("User")
//!     .with_value("name", "A")
//!     .with_validator("email", PresenceValidator::new())
//!     .with_validator("name", LengthValidator::minimum(2));
//! user.validate();
//!
//! let form = FormBuilder::for_object(&user, FormSettings::horizontal());
//! let html = form.email_field("email", &FieldOptions::new().help("We never share it"));
//!
//! assert!(html.contains(r#"class="control-label col-sm-2 required""#));
//! assert!(html.contains(r#"class="form-control is-invalid""#));
//! assert!(html.contains("invalid-feedback"));
//! ```
//!
//! ## Layouts
//!
//! [`FormSettings`] holds the form-level layout. A field may override it
//! through [`FieldOptions`]:
//! - `Layout::Default` - label above the control
//! - `Layout::Horizontal` - label and control in grid columns
//! - `Layout::Inline` - compact, one-line rendering
//!
//! ## Translations
//!
//! Labels, placeholders, titles and help text can be looked up through a
//! [`Translator`]. [`Catalog`] is an in-memory implementation keyed by
//! dotted paths.

mod builder;
pub mod classes;
mod deprecation;
mod error;
mod group;
mod helpers;
mod html;
mod i18n;
mod inputs;
mod model;
mod options;
mod resolver;
mod settings;
pub mod tags;
pub mod validation;

pub use builder::FormBuilder;
pub use error::{FormError, Result, ValidationErrors};
pub use group::{ControlWrapper, GroupOptions, LabelDescriptor};
pub use helpers::AlertOptions;
pub use html::{html_escape, HtmlAttributes};
pub use i18n::{Catalog, TranslateParams, Translator};
pub use inputs::{Accessor, Checked, Collection};
pub use model::{humanize, CollectionMember, ErrorBearing, FormObject, Record, Validatable};
pub use options::{
    ControlClass, CustomControl, FieldOptions, HelpOption, LabelOption, WrapperOption,
    WrapperOverrides,
};
pub use resolver::ResolvedField;
pub use settings::{FormSettings, Layout};
pub use tags::{Choices, OptionGroup, SelectChoice};
