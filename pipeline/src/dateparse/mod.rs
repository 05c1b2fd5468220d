//! Free-form date recognition used by the repair heuristics.


use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use lazy_regex::regex_replace_all;
use lazy_static::lazy_static;

/// Decides whether free-form text reads as a date.
///
/// The repair stages only ever ask yes/no questions of the text, they never need the parsed
/// value.
pub trait DateParser {
    /// True if `text` parses as a date, a date with a time of day, or a bare time of day.
    fn is_date(&self, text: &str) -> bool;
}

impl<F> DateParser for F
where
    F: Fn(&str) -> bool,
{
    fn is_date(&self, text: &str) -> bool {
        self(text)
    }
}

/// Orderings of day, month and year accepted by [FlexibleDateParser].
///
/// `%b` only matches abbreviated month names, so each named month layout is also listed with
/// `%B` for full names.
const DATE_FORMATS: &[&str] = &[
    "%d %b %Y",
    "%Y %b %d",
    "%b %d %Y",
    "%b %d, %Y",
    "%d %b, %Y",
    "%d-%b-%Y",
    "%d %B %Y",
    "%Y %B %d",
    "%B %d %Y",
    "%B %d, %Y",
    "%d %B, %Y",
    "%d-%B-%Y",
    "%d %B %y",
    "%d-%b-%y",
    "%d %b %y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d/%m/%Y",
    "%m/%d/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
];

const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M", "%I:%M:%S %p", "%I:%M %p"];

lazy_static! {
    static ref DATE_TIME_FORMATS: Vec<String> = DATE_FORMATS
        .iter()
        .flat_map(|date_fmt| {
            TIME_FORMATS.iter().flat_map(move |time_fmt| {
                [
                    format!("{date_fmt} {time_fmt}"),
                    format!("{date_fmt}T{time_fmt}"),
                ]
            })
        })
        .collect();
}

/// Default [DateParser], tolerant of spacing, ordinal suffixes and the common statement date
/// layouts.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlexibleDateParser;

impl FlexibleDateParser {
    fn canonicalise(text: &str) -> String {
        let collapsed = regex_replace_all!(r"\s+", text.trim(), " ");
        regex_replace_all!(r"(\d)(?:st|nd|rd|th)\b"i, &collapsed, "$1").into_owned()
    }
}

impl DateParser for FlexibleDateParser {
    fn is_date(&self, text: &str) -> bool {
        let text = Self::canonicalise(text);
        if text.is_empty() {
            return false;
        }

        DATE_FORMATS
            .iter()
            .any(|fmt| NaiveDate::parse_from_str(&text, fmt).is_ok())
            || DATE_TIME_FORMATS
                .iter()
                .any(|fmt| NaiveDateTime::parse_from_str(&text, fmt).is_ok())
            || TIME_FORMATS
                .iter()
                .any(|fmt| NaiveTime::parse_from_str(&text, fmt).is_ok())
    }
}
