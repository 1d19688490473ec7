//! Publish dates, as written in front matter and as shown to readers.
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

use crate::errors::ThemeError;

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Format used for dates in post headers and excerpts, e.g. `January 5, 2020`.
pub const DISPLAY_FORMAT: &str = "%B %-d, %Y";

/// Parses a publish date. A bare date is treated as midnight.
pub fn parse_publish_date(value: &str) -> Result<NaiveDateTime, ThemeError> {
    let value = value.trim();

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| ThemeError::InvalidDate {
            value: value.to_string(),
        })
}

/// Serde helper for front matter fields holding a publish date.
///
/// ## Example
/// ```rs
/// #[derive(serde::Deserialize)]
/// struct PostContent {
///     #[serde(deserialize_with = "lascorbe_theme::date::deserialize_publish_date")]
///     date: chrono::NaiveDateTime,
/// }
/// ```
pub fn deserialize_publish_date<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_publish_date(&raw).map_err(serde::de::Error::custom)
}

pub fn format_date(date: &NaiveDateTime) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// The `date · ⏱ time to read` line shown under post titles.
pub fn date_and_reading_time(date: &NaiveDateTime, time_to_read: &str) -> String {
    format!("{} · ⏱ {}", format_date(date), time_to_read)
}
