//! Plain tag helpers for controls whose attribute sets are dynamic.

use crate::html::{html_escape, HtmlAttributes};

/// One `<option>` of a select.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectChoice {
    /// Displayed text.
    pub text: String,
    /// Submitted value.
    pub value: String,
    /// Whether the option is disabled.
    pub disabled: bool,
}

impl SelectChoice {
    /// Creates a choice with separate text and value.
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
            disabled: false,
        }
    }

    /// Marks the choice as disabled.
    #[must_use]
    pub const fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

impl From<&str> for SelectChoice {
    fn from(value: &str) -> Self {
        Self::new(value, value)
    }
}

impl From<String> for SelectChoice {
    fn from(value: String) -> Self {
        Self::new(value.clone(), value)
    }
}

impl From<(&str, &str)> for SelectChoice {
    fn from((text, value): (&str, &str)) -> Self {
        Self::new(text, value)
    }
}

/// The choices of a select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choices {
    /// Structured choices.
    List(Vec<SelectChoice>),
    /// Pre-rendered `<option>` markup.
    Markup(String),
}

impl Choices {
    /// Builds a list from anything convertible into choices.
    pub fn list<C: Into<SelectChoice>>(choices: impl IntoIterator<Item = C>) -> Self {
        Self::List(choices.into_iter().map(Into::into).collect())
    }

    /// Inserts a first choice. Returns `false` for pre-rendered markup,
    /// which is left as it is.
    pub fn prepend(&mut self, choice: SelectChoice) -> bool {
        match self {
            Self::List(choices) => {
                choices.insert(0, choice);
                true
            }
            Self::Markup(_) => false,
        }
    }

    pub(crate) fn to_html(&self, selected: &[String]) -> String {
        match self {
            Self::List(choices) => options_for_select(choices, selected),
            Self::Markup(markup) => markup.clone(),
        }
    }
}

/// A labelled group of choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionGroup {
    /// The `label` of the `<optgroup>`.
    pub label: String,
    /// Choices inside the group.
    pub choices: Vec<SelectChoice>,
}

/// Renders an `<input>`. `attrs` win over `type` and `value`.
pub fn input_tag(input_type: &str, value: Option<&str>, attrs: &HtmlAttributes) -> String {
    let mut all = HtmlAttributes::new().with("type", input_type);
    if let Some(value) = value {
        all.set("value", value);
    }
    all.merge(attrs);
    format!("<input{}>", all.to_html())
}

/// Renders a `<textarea>` with escaped content.
pub fn textarea_tag(value: Option<&str>, attrs: &HtmlAttributes) -> String {
    format!(
        "<textarea{}>\n{}</textarea>",
        attrs.to_html(),
        html_escape(value.unwrap_or_default())
    )
}

/// Renders a `<select>` around option markup.
pub fn select_tag(options_html: &str, attrs: &HtmlAttributes) -> String {
    format!("<select{}>{options_html}</select>", attrs.to_html())
}

/// Renders one `<option>`.
pub fn option_tag(choice: &SelectChoice, selected: bool) -> String {
    let mut attrs = HtmlAttributes::new().with("value", choice.value.as_str());
    if selected {
        attrs.set_flag("selected");
    }
    if choice.disabled {
        attrs.set_flag("disabled");
    }
    format!("<option{}>{}</option>", attrs.to_html(), html_escape(&choice.text))
}

/// Renders `<option>` tags, marking every choice whose value is in
/// `selected`.
pub fn options_for_select(choices: &[SelectChoice], selected: &[String]) -> String {
    choices
        .iter()
        .map(|choice| option_tag(choice, selected.contains(&choice.value)))
        .collect()
}

/// Renders `<optgroup>` tags.
pub fn grouped_options_for_select(groups: &[OptionGroup], selected: &[String]) -> String {
    groups
        .iter()
        .map(|group| {
            format!(
                r#"<optgroup label="{}">{}</optgroup>"#,
                html_escape(&group.label),
                options_for_select(&group.choices, selected)
            )
        })
        .collect()
}

/// Renders a blank first option.
pub(crate) fn blank_option(text: &str) -> String {
    format!(r#"<option value="">{}</option>"#, html_escape(text))
}

/// IANA time zones offered by `time_zone_select`.
pub const TIME_ZONES: &[&str] = &[
    "Pacific/Midway",
    "Pacific/Honolulu",
    "America/Anchorage",
    "America/Los_Angeles",
    "America/Tijuana",
    "America/Phoenix",
    "America/Denver",
    "America/Chicago",
    "America/Mexico_City",
    "America/New_York",
    "America/Bogota",
    "America/Lima",
    "America/Caracas",
    "America/Halifax",
    "America/Santiago",
    "America/St_Johns",
    "America/Sao_Paulo",
    "America/Argentina/Buenos_Aires",
    "Atlantic/South_Georgia",
    "Atlantic/Azores",
    "Atlantic/Cape_Verde",
    "Africa/Casablanca",
    "Europe/London",
    "Europe/Dublin",
    "Europe/Lisbon",
    "UTC",
    "Europe/Amsterdam",
    "Europe/Berlin",
    "Europe/Brussels",
    "Europe/Madrid",
    "Europe/Paris",
    "Europe/Rome",
    "Europe/Stockholm",
    "Europe/Vienna",
    "Europe/Warsaw",
    "Africa/Lagos",
    "Europe/Athens",
    "Europe/Bucharest",
    "Europe/Helsinki",
    "Europe/Kiev",
    "Africa/Cairo",
    "Africa/Johannesburg",
    "Asia/Jerusalem",
    "Europe/Istanbul",
    "Europe/Moscow",
    "Asia/Riyadh",
    "Africa/Nairobi",
    "Asia/Baghdad",
    "Asia/Tehran",
    "Asia/Dubai",
    "Asia/Baku",
    "Asia/Kabul",
    "Asia/Karachi",
    "Asia/Tashkent",
    "Asia/Kolkata",
    "Asia/Kathmandu",
    "Asia/Dhaka",
    "Asia/Almaty",
    "Asia/Rangoon",
    "Asia/Bangkok",
    "Asia/Jakarta",
    "Asia/Shanghai",
    "Asia/Hong_Kong",
    "Asia/Singapore",
    "Australia/Perth",
    "Asia/Taipei",
    "Asia/Tokyo",
    "Asia/Seoul",
    "Australia/Adelaide",
    "Australia/Darwin",
    "Australia/Brisbane",
    "Australia/Sydney",
    "Australia/Melbourne",
    "Pacific/Guam",
    "Asia/Vladivostok",
    "Asia/Magadan",
    "Pacific/Noumea",
    "Pacific/Auckland",
    "Pacific/Fiji",
    "Pacific/Tongatapu",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_tag() {
        let attrs = HtmlAttributes::new().with("id", "q").with("name", "q");
        assert_eq!(
            input_tag("search", Some("rust & c"), &attrs),
            r#"<input type="search" value="rust &amp; c" id="q" name="q">"#
        );
        assert_eq!(
            input_tag("text", None, &HtmlAttributes::new()),
            r#"<input type="text">"#
        );
    }

    #[test]
    fn test_textarea_escapes_content() {
        let attrs = HtmlAttributes::new().with("name", "bio");
        assert_eq!(
            textarea_tag(Some("<b>hi</b>"), &attrs),
            "<textarea name=\"bio\">\n&lt;b&gt;hi&lt;/b&gt;</textarea>"
        );
    }

    #[test]
    fn test_options_for_select_marks_selected() {
        let choices = vec![
            SelectChoice::new("Red", "r"),
            SelectChoice::new("Green", "g").disabled(),
        ];
        assert_eq!(
            options_for_select(&choices, &["r".to_string()]),
            concat!(
                r#"<option value="r" selected="selected">Red</option>"#,
                r#"<option value="g" disabled="disabled">Green</option>"#
            )
        );
    }

    #[test]
    fn test_grouped_options() {
        let groups = vec![OptionGroup {
            label: "Warm".to_string(),
            choices: vec!["Red".into()],
        }];
        assert_eq!(
            grouped_options_for_select(&groups, &[]),
            r#"<optgroup label="Warm"><option value="Red">Red</option></optgroup>"#
        );
    }

    #[test]
    fn test_choices_prepend() {
        let mut list = Choices::list(["a", "b"]);
        assert!(list.prepend(SelectChoice::new("Pick one", "")));
        let Choices::List(choices) = &list else {
            panic!("expected a list");
        };
        assert_eq!(choices[0].text, "Pick one");

        let mut markup = Choices::Markup("<option>x</option>".to_string());
        assert!(!markup.prepend(SelectChoice::new("Pick one", "")));
        assert_eq!(markup.to_html(&[]), "<option>x</option>");
    }
}
