/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application.
/// Timestamps are shown in the offset they were serialized with.
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate};

fn parse_timestamp(datetime_str: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(datetime_str.trim()).ok()
}

fn parse_day(date_str: &str) -> Option<NaiveDate> {
    let trimmed = date_str.trim();
    parse_timestamp(trimmed)
        .map(|dt| dt.date_naive())
        .or_else(|| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok())
}

/// Format ISO datetime string to "M/D/YYYY at h:mm am" format
/// Example: "2024-03-15T14:02:26.123Z" -> "3/15/2024 at 2:02 pm"
pub fn format_datetime(datetime_str: &str) -> String {
    match parse_timestamp(datetime_str) {
        Some(dt) => dt.format("%-m/%-d/%Y at %-I:%M %P").to_string(),
        None => datetime_str.to_string(),
    }
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Format ISO date (or datetime) to a long date
/// Example: "2024-03-01" -> "March 1st, 2024"
pub fn format_long_date(date_str: &str) -> String {
    match parse_day(date_str) {
        Some(date) => format!(
            "{} {}{}, {}",
            date.format("%B"),
            date.day(),
            ordinal_suffix(date.day()),
            date.year()
        ),
        None => date_str.to_string(),
    }
}

/// Value for `<input type="date">`: "YYYY-MM-DD"
pub fn to_input_date(date_str: &str) -> String {
    parse_day(date_str)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "3/15/2024 at 2:02 pm"
        );
        assert_eq!(
            format_datetime("2024-12-01T00:05:00Z"),
            "12/1/2024 at 12:05 am"
        );
        assert_eq!(
            format_datetime("2024-12-01T09:30:00+06:00"),
            "12/1/2024 at 9:30 am"
        );
    }

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date("2024-03-01"), "March 1st, 2024");
        assert_eq!(format_long_date("2024-03-02T10:00:00Z"), "March 2nd, 2024");
        assert_eq!(format_long_date("2024-03-13"), "March 13th, 2024");
        assert_eq!(format_long_date("2024-03-23"), "March 23rd, 2024");
    }

    #[test]
    fn test_to_input_date() {
        assert_eq!(to_input_date("2024-03-15T14:02:26.123Z"), "2024-03-15");
        assert_eq!(to_input_date(""), "");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_long_date("invalid"), "invalid");
    }
}
