//! Date-time field values.
//!
//! An event date is stored as one human-readable string,
//! `"<day> <Month> <year> <HH:MM>"` (e.g. "15 March 2025 19:00").
//! Parsing accepts a previously serialized string or an ISO date, extracting
//! a trailing time token when present; formatting always re-emits the
//! canonical form.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

/// Time applied when a value carries no usable time token.
pub const DEFAULT_TIME: &str = "19:00";

fn time_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d{1,2}:\d{2})").expect("static time pattern"))
}

/// A parsed date-time value: the calendar date (when recognizable) and the
/// normalized `HH:MM` time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeValue {
    pub date: Option<NaiveDate>,
    pub time: String,
}

/// Clamp and zero-pad an `H:MM`-ish input to canonical `HH:MM`.
pub fn normalize_time(value: &str) -> Option<String> {
    let mut parts = value.splitn(2, ':');
    let hours: u32 = parts.next()?.trim().parse().ok()?;
    let minutes: u32 = match parts.next() {
        Some(m) => m.trim().parse().ok()?,
        None => 0,
    };
    Some(format!("{:02}:{:02}", hours.min(23), minutes.min(59)))
}

/// Parse a stored date string into date and time parts.
///
/// Accepts the canonical format, ISO dates (`2025-03-15`,
/// `2025-03-15T19:00:00`, RFC 3339) and date-only strings; anything else
/// yields no date and the default time.
pub fn parse_date_time(value: &str) -> DateTimeValue {
    let normalized = value.trim();
    if normalized.is_empty() {
        return DateTimeValue {
            date: None,
            time: DEFAULT_TIME.to_string(),
        };
    }

    let token = time_token_re()
        .find(normalized)
        .map(|m| m.as_str().to_string());
    let time = token
        .as_deref()
        .and_then(normalize_time)
        .unwrap_or_else(|| DEFAULT_TIME.to_string());

    if let Some(date) = parse_date(normalized) {
        return DateTimeValue { date: Some(date), time };
    }

    // Strip the time token and retry on the date portion alone.
    let date_only = match &token {
        Some(token) => normalized.replace(token.as_str(), " "),
        None => normalized.to_string(),
    };
    let date = parse_date(date_only.trim());

    DateTimeValue { date, time }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M", "%d %B %Y %H:%M"] {
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.date());
        }
    }
    for format in ["%Y-%m-%d", "%d %B %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }
    None
}

/// Serialize a date and time to the canonical string.
///
/// Without a date the previous value is kept as-is, so a time edit before
/// any date selection never fabricates a date.
pub fn format_date_time(date: Option<NaiveDate>, time: &str, fallback: &str) -> String {
    let Some(date) = date else {
        return fallback.to_string();
    };
    let time = normalize_time(time).unwrap_or_else(|| DEFAULT_TIME.to_string());
    format!("{} {}", date.format("%-d %B %Y"), time)
}

/// Headless state of one date-time form control: the stored string plus the
/// free-text time input beside the calendar.
#[derive(Debug, Clone)]
pub struct DateTimeField {
    value: String,
    time_input: String,
}

impl DateTimeField {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let parsed = parse_date_time(&value);
        Self {
            time_input: parsed.time,
            value,
        }
    }

    /// The stored canonical string.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn date(&self) -> Option<NaiveDate> {
        parse_date_time(&self.value).date
    }

    pub fn time(&self) -> &str {
        &self.time_input
    }

    /// Calendar selection: reformats the value with the current time input.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.value = format_date_time(Some(date), &self.time_input, &self.value);
    }

    /// Time edit: only reformats once a date has been chosen.
    pub fn set_time(&mut self, time: impl Into<String>) {
        self.time_input = time.into();
        if let Some(date) = self.date() {
            self.value = format_date_time(Some(date), &self.time_input, &self.value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_round_trip_through_canonical_format() {
        let serialized = format_date_time(Some(date(2025, 3, 15)), "19:00", "");
        assert_eq!(serialized, "15 March 2025 19:00");

        let parsed = parse_date_time(&serialized);
        assert_eq!(parsed.date, Some(date(2025, 3, 15)));
        assert_eq!(parsed.time, "19:00");
    }

    #[test]
    fn test_parse_iso_with_and_without_time() {
        let parsed = parse_date_time("2025-03-15");
        assert_eq!(parsed.date, Some(date(2025, 3, 15)));
        assert_eq!(parsed.time, DEFAULT_TIME);

        let parsed = parse_date_time("2025-03-15T20:30:00");
        assert_eq!(parsed.date, Some(date(2025, 3, 15)));
        assert_eq!(parsed.time, "20:30");
    }

    #[test]
    fn test_parse_unrecognizable_keeps_time_token() {
        let parsed = parse_date_time("sometime soon 9:15");
        assert_eq!(parsed.date, None);
        assert_eq!(parsed.time, "09:15");
    }

    #[test]
    fn test_empty_value_defaults() {
        let parsed = parse_date_time("   ");
        assert_eq!(parsed.date, None);
        assert_eq!(parsed.time, DEFAULT_TIME);
    }

    #[test]
    fn test_normalize_time_clamps_and_pads() {
        assert_eq!(normalize_time("9:5").as_deref(), Some("09:05"));
        assert_eq!(normalize_time("25:99").as_deref(), Some("23:59"));
        assert_eq!(normalize_time("7").as_deref(), Some("07:00"));
        assert!(normalize_time("noon").is_none());
    }

    #[test]
    fn test_format_without_date_keeps_fallback() {
        assert_eq!(format_date_time(None, "19:00", "previous"), "previous");
    }

    #[test]
    fn test_field_time_edit_before_date_selection() {
        let mut field = DateTimeField::new("");
        field.set_time("21:00");
        // No date yet, so the stored value is untouched.
        assert_eq!(field.value(), "");

        field.select_date(date(2025, 3, 15));
        assert_eq!(field.value(), "15 March 2025 21:00");

        field.set_time("18:30");
        assert_eq!(field.value(), "15 March 2025 18:30");
    }
}
