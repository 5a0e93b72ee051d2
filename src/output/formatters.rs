//! Reusable formatting utilities for CLI output
//!
//! Timestamps, durations and placeholder values shared by the display models.

use chrono::{DateTime, Local};

/// Format an RFC 3339 timestamp as local date/time.
///
/// Returns "N/A" if the timestamp is empty or unparseable.
///
/// # Example output
/// `01/15/2025 14:30 PST`
pub fn format_timestamp(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => {
            let local = dt.with_timezone(&Local);
            let date_time = local.format("%m/%d/%Y %H:%M").to_string();
            let tz_abbrev = offset_to_tz_abbrev(local.offset().local_minus_utc());
            format!("{} {}", date_time, tz_abbrev)
        }
        Err(_) => "N/A".to_string(),
    }
}

/// Same as [`format_timestamp`] for optional values
pub fn format_optional_timestamp(timestamp: Option<&str>) -> String {
    timestamp.map(format_timestamp).unwrap_or_else(|| "N/A".to_string())
}

/// Convert UTC offset (seconds) to timezone abbreviation.
///
/// Maps common UTC offsets to standard timezone abbreviations. Falls back to
/// `UTC+N` for uncommon offsets.
pub fn offset_to_tz_abbrev(offset_secs: i32) -> String {
    let offset_hours = offset_secs / 3600;
    let abbrev = match offset_hours {
        -10 => "HST",
        -9 => "AKST",
        -8 => "PST",
        -7 => "MST",
        -6 => "CST",
        -5 => "EST",
        -4 => "AST",
        -3 => "ART",
        0 => "UTC",
        1 => "CET",
        2 => "EET",
        3 => "MSK",
        9 => "JST",
        10 => "AEST",
        12 => "NZST",
        _ => return format!("UTC{:+}", offset_hours),
    };
    abbrev.to_string()
}

/// Format a duration in milliseconds.
///
/// # Example output
/// - `2m 5s`
/// - `45s`
/// - `120ms`
pub fn format_duration_ms(millis: u64) -> String {
    if millis < 1000 {
        return format!("{}ms", millis);
    }

    let secs = millis / 1000;
    let mins = secs / 60;
    let secs = secs % 60;

    if mins > 0 {
        format!("{}m {}s", mins, secs)
    } else {
        format!("{}s", secs)
    }
}

/// Value or `-` for missing/empty values
pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

/// Join a list with commas, or `-` when empty
pub fn join_or_dash<T: ToString>(values: &[T]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp_valid() {
        // Noon UTC keeps the calendar date in every common zone
        let result = format_timestamp("2025-01-15T12:00:00Z");
        assert!(result.contains("01/15/2025"));
    }

    #[test]
    fn test_format_timestamp_invalid() {
        assert_eq!(format_timestamp(""), "N/A");
        assert_eq!(format_timestamp("yesterday"), "N/A");
        assert_eq!(format_optional_timestamp(None), "N/A");
    }

    #[test]
    fn test_offset_to_tz_abbrev() {
        assert_eq!(offset_to_tz_abbrev(-8 * 3600), "PST");
        assert_eq!(offset_to_tz_abbrev(0), "UTC");
        assert_eq!(offset_to_tz_abbrev(7 * 3600), "UTC+7");
    }

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(120), "120ms");
        assert_eq!(format_duration_ms(45_000), "45s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_dash_helpers() {
        assert_eq!(or_dash(Some("main")), "main");
        assert_eq!(or_dash(Some("")), "-");
        assert_eq!(or_dash(None), "-");
        assert_eq!(join_or_dash(&[1, 2]), "1,2");
        assert_eq!(join_or_dash::<u32>(&[]), "-");
    }
}
