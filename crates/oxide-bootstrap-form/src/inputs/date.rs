//! Composite date and time selects.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};

use crate::builder::FormBuilder;
use crate::html::HtmlAttributes;
use crate::options::FieldOptions;
use crate::tags::{self, SelectChoice};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Years offered on each side of the selected year.
const YEAR_SPAN: i32 = 5;

#[derive(Clone, Copy)]
enum DatePart {
    Year,
    Month,
    Day,
    Hour,
    Minute,
}

impl DatePart {
    const fn position(self) -> u8 {
        match self {
            Self::Year => 1,
            Self::Month => 2,
            Self::Day => 3,
            Self::Hour => 4,
            Self::Minute => 5,
        }
    }
}

#[derive(Clone, Copy)]
enum SelectKind {
    Date,
    Time,
    Datetime,
}

impl SelectKind {
    const fn wrapper_class(self) -> &'static str {
        match self {
            Self::Date => "bootstrap-form-date-select",
            Self::Time => "bootstrap-form-time-select",
            Self::Datetime => "bootstrap-form-datetime-select",
        }
    }
}

/// Parses an attribute value as a date and time. Dates alone start at
/// midnight; times alone fall on today's date.
fn parse_value(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .or_else(|| {
            ["%H:%M:%S", "%H:%M"]
                .iter()
                .find_map(|format| NaiveTime::parse_from_str(value, format).ok())
                .map(|time| Utc::now().date_naive().and_time(time))
        })
}

impl FormBuilder<'_> {
    /// Year, month and day selects.
    pub fn date_select(
        &self,
        attribute: &str,
        options: &FieldOptions,
        html_options: &HtmlAttributes,
    ) -> String {
        self.composite_select(SelectKind::Date, attribute, options, html_options)
    }

    /// Hour and minute selects. The date parts travel as hidden inputs.
    pub fn time_select(
        &self,
        attribute: &str,
        options: &FieldOptions,
        html_options: &HtmlAttributes,
    ) -> String {
        self.composite_select(SelectKind::Time, attribute, options, html_options)
    }

    /// Year, month, day, hour and minute selects.
    pub fn datetime_select(
        &self,
        attribute: &str,
        options: &FieldOptions,
        html_options: &HtmlAttributes,
    ) -> String {
        self.composite_select(SelectKind::Datetime, attribute, options, html_options)
    }

    fn composite_select(
        &self,
        kind: SelectKind,
        attribute: &str,
        options: &FieldOptions,
        html_options: &HtmlAttributes,
    ) -> String {
        let resolved = self.resolve_field(attribute, options, Some(html_options));
        let value = self.value(attribute).as_deref().and_then(parse_value);
        let part = |part: DatePart| self.date_part_select(part, value, &resolved.control, options);

        self.wrap_group(attribute, resolved.group.as_ref(), || {
            let date = || {
                [DatePart::Year, DatePart::Month, DatePart::Day]
                    .into_iter()
                    .map(part)
                    .collect::<Vec<_>>()
                    .join("\n")
            };
            let time = || format!("{}\n : {}", part(DatePart::Hour), part(DatePart::Minute));
            let selects = match kind {
                SelectKind::Date => date(),
                SelectKind::Time => {
                    let hidden: String = [DatePart::Year, DatePart::Month, DatePart::Day]
                        .into_iter()
                        .map(|part| date_part_hidden(part, value, &resolved.control))
                        .collect();
                    format!("{hidden}{}", time())
                }
                SelectKind::Datetime => format!("{}\n &mdash; {}", date(), time()),
            };
            format!(r#"<div class="{}">{selects}</div>"#, kind.wrapper_class())
        })
    }

    fn date_part_select(
        &self,
        part: DatePart,
        value: Option<NaiveDateTime>,
        control: &HtmlAttributes,
        options: &FieldOptions,
    ) -> String {
        let choices: Vec<SelectChoice> = match part {
            DatePart::Year => {
                let center = value.map_or_else(|| Utc::now().year(), |value| value.year());
                ((center - YEAR_SPAN)..=(center + YEAR_SPAN))
                    .map(|year| year.to_string().into())
                    .collect()
            }
            DatePart::Month => MONTHS
                .iter()
                .zip(1..)
                .map(|(month, number): (&&str, u32)| SelectChoice::new(*month, number.to_string()))
                .collect(),
            DatePart::Day => (1..=31).map(|day: u32| day.to_string().into()).collect(),
            DatePart::Hour => (0..24).map(|hour: u32| two_digits(hour).into()).collect(),
            DatePart::Minute => (0..60).map(|minute: u32| two_digits(minute).into()).collect(),
        };
        let selected: Vec<String> = value
            .map(|value| part_value(part, value))
            .into_iter()
            .collect();

        let blank = options
            .include_blank
            .as_deref()
            .map(tags::blank_option)
            .unwrap_or_default();
        let attrs = part_attrs(part, control);
        tags::select_tag(
            &format!("{blank}{}", tags::options_for_select(&choices, &selected)),
            &attrs,
        )
    }
}

fn date_part_hidden(part: DatePart, value: Option<NaiveDateTime>, control: &HtmlAttributes) -> String {
    let part_attrs = part_attrs(part, control);
    let mut attrs = HtmlAttributes::new();
    for key in ["id", "name"] {
        if let Some(value) = part_attrs.get(key) {
            attrs.set(key, value);
        }
    }
    let value = value.map(|value| part_value(part, value));
    tags::input_tag("hidden", value.as_deref(), &attrs)
}

/// Control attributes of one part: `_1i` id suffix and `(1i)` name suffix.
fn part_attrs(part: DatePart, control: &HtmlAttributes) -> HtmlAttributes {
    let position = part.position();
    control
        .iter()
        .map(|(key, value)| match key {
            "id" => (key.to_string(), format!("{value}_{position}i")),
            "name" => {
                let name = match value.strip_suffix(']') {
                    Some(scoped) => format!("{scoped}({position}i)]"),
                    None => format!("{value}({position}i)"),
                };
                (key.to_string(), name)
            }
            _ => (key.to_string(), value.to_string()),
        })
        .collect()
}

fn part_value(part: DatePart, value: NaiveDateTime) -> String {
    match part {
        DatePart::Year => value.year().to_string(),
        DatePart::Month => value.month().to_string(),
        DatePart::Day => value.day().to_string(),
        DatePart::Hour => two_digits(value.hour()),
        DatePart::Minute => two_digits(value.minute()),
    }
}

fn two_digits(number: u32) -> String {
    format!("{number:02}")
}
