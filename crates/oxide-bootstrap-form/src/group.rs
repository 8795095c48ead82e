//! Form group rendering: wrapper, label, control column, help and errors.

use ironhtml::html;

use crate::builder::FormBuilder;
use crate::classes;
use crate::html::{html_escape, join_classes, HtmlAttributes};
use crate::options::HelpOption;
use crate::settings::{offset_col, Layout};

/// An extra element wrapped around the control inside a group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlWrapper {
    /// Tag name. Defaults to `div`.
    pub tag_name: Option<String>,
    /// Class added after `input-wrapper`.
    pub class: Option<String>,
}

impl ControlWrapper {
    /// Creates a `div.input-wrapper` wrapper.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tag name.
    #[must_use]
    pub fn tag_name(mut self, tag_name: impl Into<String>) -> Self {
        self.tag_name = Some(tag_name.into());
        self
    }

    /// Sets the extra class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub(crate) fn wrap(&self, content: &str) -> String {
        let tag = self
            .tag_name
            .as_deref()
            .filter(|tag| !tag.is_empty() && tag.chars().all(|c| c.is_ascii_alphanumeric()))
            .unwrap_or("div");
        let class = join_classes([Some(classes::INPUT_WRAPPER), self.class.as_deref()]);
        format!(r#"<{tag} class="{}">{content}</{tag}>"#, html_escape(&class))
    }
}

/// A resolved group label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelDescriptor {
    /// Label text. Defaults to the attribute's human name.
    pub text: Option<String>,
    /// Label class, placed before `control-label`.
    pub class: Option<String>,
    /// Whether to add the `required` class. `None` asks the bound object.
    pub required: Option<bool>,
    /// The `for` attribute. Defaults to the group id, then the field id.
    pub for_id: Option<String>,
}

impl LabelDescriptor {
    /// Creates a label with default text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Forces the required marker on or off.
    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Sets the `for` attribute.
    #[must_use]
    pub fn for_id(mut self, id: impl Into<String>) -> Self {
        self.for_id = Some(id.into());
        self
    }
}

/// Options for one form group.
///
/// Field methods derive these from [`FieldOptions`](crate::FieldOptions);
/// callers building a group around their own content fill them in
/// directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupOptions {
    /// Id of the control, used as the label's `for`.
    pub id: Option<String>,
    /// Help text directive.
    pub help: Option<HelpOption>,
    /// Extra class for the help block.
    pub help_class: Option<String>,
    /// Feedback icon name.
    pub icon: Option<String>,
    /// Label column override.
    pub label_col: Option<String>,
    /// Control column override.
    pub control_col: Option<String>,
    /// Layout override.
    pub layout: Option<Layout>,
    /// Extra wrapper class.
    pub wrapper_class: Option<String>,
    /// Extra wrapper attributes.
    pub wrapper_attrs: HtmlAttributes,
    /// Element wrapped around the control.
    pub control_wrapper: Option<ControlWrapper>,
    /// The label. `None` renders no label.
    pub label: Option<LabelDescriptor>,
    /// Format errors without the attribute name.
    pub hide_attribute_name: bool,
}

impl GroupOptions {
    /// Creates options for a group without a label.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, label: LabelDescriptor) -> Self {
        self.label = Some(label);
        self
    }

    /// Sets the control id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the help text.
    #[must_use]
    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.help = Some(HelpOption::Text(text.into()));
        self
    }

    /// Sets the feedback icon.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Overrides the layout.
    #[must_use]
    pub const fn layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
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
}

impl FormBuilder<'_> {
    /// Renders a form group around `content`.
    ///
    /// `attribute` ties the group to a field of the bound object: it
    /// supplies default label text, the required marker, error messages
    /// and translated help. Groups without an attribute only show what
    /// the options give them.
    ///
    /// ```rust
    /// use oxide_bootstrap_form::{FormBuilder, FormSettings, GroupOptions, LabelDescriptor};
    ///
    /// let form = FormBuilder::form_tag(FormSettings::horizontal());
    /// let html = form.form_group(
    ///     None,
    ///     &GroupOptions::new().label(LabelDescriptor::new().text("Terms")),
    ///     || "<p>Read them.</p>".to_string(),
    /// );
    /// assert!(html.contains(r#"class="control-label col-sm-2""#));
    /// assert!(html.contains("<p>Read them.</p>"));
    /// ```
    pub fn form_group(
        &self,
        attribute: Option<&str>,
        options: &GroupOptions,
        content: impl FnOnce() -> String,
    ) -> String {
        let layout = options.layout.unwrap_or(self.settings().layout);

        let label = options
            .label
            .as_ref()
            .map(|label| self.render_label(attribute, label, options, layout))
            .unwrap_or_default();

        let mut control = content();
        if let Some(wrapper) = &options.control_wrapper {
            control = wrapper.wrap(&control);
        }
        control.push_str(&self.render_help(attribute, options));
        if let Some(icon) = &options.icon {
            control.push_str(&render_icon(icon));
        }

        if layout == Layout::Horizontal {
            let control_col = options
                .control_col
                .as_deref()
                .unwrap_or(&self.settings().control_col);
            let column = if options.label.is_some() {
                control_col.to_string()
            } else {
                let label_col = options
                    .label_col
                    .as_deref()
                    .unwrap_or(&self.settings().label_col);
                join_classes([Some(control_col), Some(offset_col(label_col).as_str())])
            };
            control = html! { div.class(#column) }.raw(&control).render();
        }

        let mut wrapper = HtmlAttributes::new().with(
            "class",
            join_classes([
                Some(classes::GROUP),
                options.icon.as_ref().map(|_| classes::FEEDBACK),
                options.wrapper_class.as_deref(),
            ]),
        );
        for (key, value) in options.wrapper_attrs.iter().filter(|(key, _)| *key != "class") {
            wrapper.set(key, value);
        }
        format!("<div{}>{label}{control}</div>", wrapper.to_html())
    }

    fn render_label(
        &self,
        attribute: Option<&str>,
        label: &LabelDescriptor,
        options: &GroupOptions,
        layout: Layout,
    ) -> String {
        let required = attribute
            .is_some_and(|attr| label.required.unwrap_or_else(|| self.is_required(attr)));
        let label_col = (layout == Layout::Horizontal).then(|| {
            options
                .label_col
                .as_deref()
                .unwrap_or(&self.settings().label_col)
        });
        let class = join_classes([
            label.class.as_deref(),
            Some(classes::LABEL),
            label_col,
            required.then_some(classes::REQUIRED),
        ]);

        let mut text = label
            .text
            .clone()
            .or_else(|| attribute.map(|attr| self.human_attribute_name(attr)))
            .unwrap_or_default();
        if let Some(attr) = attribute {
            if self.settings().label_errors && self.has_error(attr) {
                let message = self.error_message(attr, options.hide_attribute_name);
                text = format!("{text} {message}");
            }
        }

        let for_id = label
            .for_id
            .clone()
            .or_else(|| options.id.clone())
            .or_else(|| attribute.and_then(|attr| self.field_id(attr)));
        match for_id {
            Some(id) => html! { label.for_(#id).class(#class) { #text } }.render(),
            None => html! { label.class(#class) { #text } }.render(),
        }
    }

    fn render_help(&self, attribute: Option<&str>, options: &GroupOptions) -> String {
        let inline_error = attribute.is_some_and(|attr| self.inline_error(attr));
        let text = match (attribute, &options.help) {
            (Some(attr), _) if inline_error => {
                Some(self.error_message(attr, options.hide_attribute_name))
            }
            (_, Some(HelpOption::Suppressed)) => None,
            (_, Some(HelpOption::Text(text))) => Some(text.clone()),
            (Some(attr), None) => self.help_text_by_i18n(attr),
            (None, None) => None,
        };
        let Some(text) = text.filter(|text| !text.is_empty()) else {
            return String::new();
        };

        let base = if inline_error {
            classes::ERROR_HELP
        } else {
            classes::HELP
        };
        let class = join_classes([Some(base), options.help_class.as_deref()]);
        html! { div.class(#class) { #text } }.render()
    }
}

fn render_icon(icon: &str) -> String {
    let class = format!("glyphicon glyphicon-{icon} form-control-feedback");
    html! { span.class(#class) }.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;
    use crate::model::Record;
    use crate::settings::FormSettings;
    use crate::validation::PresenceValidator;

    fn invalid_user() -> Record {
        let mut user = Record::new("User").with_validator("email", PresenceValidator::new());
        user.validate();
        user
    }

    #[test]
    fn test_group_with_label_and_help() {
        let user = Record::new("User");
        let form = FormBuilder::for_object(&user, FormSettings::new());
        let options = GroupOptions::new()
            .label(LabelDescriptor::new())
            .help("We never share it");
        let html = form.form_group(Some("email"), &options, || "<input>".to_string());

        assert!(html.starts_with(r#"<div class="form-group"><label"#));
        assert!(html.contains(r#"for="user_email""#));
        assert!(html.contains(r#"class="control-label""#));
        assert!(html.contains(">Email</label><input>"));
        assert!(html.contains(r#"class="form-text""#));
        assert!(html.contains("We never share it"));
        assert!(html.ends_with("</div></div>"));
    }

    #[test]
    fn test_group_without_label_has_no_label() {
        let form = FormBuilder::form_tag(FormSettings::new());
        let html = form.form_group(None, &GroupOptions::new(), || "x".to_string());
        assert_eq!(html, r#"<div class="form-group">x</div>"#);
    }

    #[test]
    fn test_horizontal_group_without_label_offsets_column() {
        let form = FormBuilder::form_tag(FormSettings::horizontal());
        let html = form.form_group(None, &GroupOptions::new(), || "x".to_string());
        assert!(html.contains(r#"class="col-sm-10 col-sm-offset-2""#));
        assert!(!html.contains("<label"));
    }

    #[test]
    fn test_required_label_and_inline_error() {
        let user = invalid_user();
        let form = FormBuilder::for_object(&user, FormSettings::new());
        let options = GroupOptions::new()
            .label(LabelDescriptor::new())
            .help("ignored while invalid");
        let html = form.form_group(Some("email"), &options, String::new);

        assert!(html.contains(r#"class="control-label required""#));
        assert!(html.contains(r#"class="invalid-feedback""#));
        assert!(html.contains("be blank."));
        assert!(!html.contains("ignored while invalid"));
    }

    #[test]
    fn test_label_errors_move_message_into_label() {
        let user = invalid_user();
        let settings = FormSettings::new().label_errors(true);
        let form = FormBuilder::for_object(&user, settings);
        let options = GroupOptions::new().label(LabelDescriptor::new()).help("Help");
        let html = form.form_group(Some("email"), &options, String::new);

        let label_end = html.find("</label>").unwrap();
        assert!(html[..label_end].contains("Email Email can"));
        assert!(html.contains(r#"class="form-text""#));
        assert!(!html.contains("invalid-feedback"));
    }

    #[test]
    fn test_help_from_catalog_and_suppression() {
        let user = Record::new("User");
        let catalog = Catalog::new().with("activerecord.help.user.email", "Translated");
        let form = FormBuilder::for_object(&user, FormSettings::new()).with_translator(&catalog);

        let translated = form.form_group(Some("email"), &GroupOptions::new(), String::new);
        assert!(translated.contains("Translated"));

        let options = GroupOptions {
            help: Some(HelpOption::Suppressed),
            ..GroupOptions::new()
        };
        let suppressed = form.form_group(Some("email"), &options, String::new);
        assert!(!suppressed.contains("Translated"));
    }

    #[test]
    fn test_icon_adds_feedback_class() {
        let form = FormBuilder::form_tag(FormSettings::new());
        let html = form.form_group(None, &GroupOptions::new().icon("ok"), String::new);
        assert!(html.starts_with(r#"<div class="form-group has-feedback">"#));
        assert!(html.contains("glyphicon glyphicon-ok form-control-feedback"));
    }

    #[test]
    fn test_wrapper_attrs_and_control_wrapper() {
        let form = FormBuilder::form_tag(FormSettings::new());
        let mut options = GroupOptions::new()
            .wrapper_class("mb-0")
            .control_wrapper(ControlWrapper::new().tag_name("span").class("wide"));
        options.wrapper_attrs.set("data-field", "email");
        let html = form.form_group(None, &options, || "x".to_string());

        assert_eq!(
            html,
            r#"<div class="form-group mb-0" data-field="email"><span class="input-wrapper wide">x</span></div>"#
        );
    }
}
