//! Timestamp parsing and display formatting. The current time is always
//! injected by the caller so these stay deterministic and wasm-safe.

use chrono::{DateTime, Utc};

const DAY_MS: i64 = 86_400_000;

/// Parse a store timestamp (RFC 3339) into epoch milliseconds.
pub fn parse_timestamp_ms(raw: &str) -> Option<i64> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.timestamp_millis())
}

/// "Jan 5, 2026" style absolute date.
pub fn format_date(ms: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(ms) {
        Some(dt) => dt.format("%b %-d, %Y").to_string(),
        None => "Unknown date".to_string(),
    }
}

/// Coarse "how long ago" label for card metadata.
pub fn format_relative(ms: i64, now_ms: i64) -> String {
    let diff_days = ((now_ms - ms).abs() + DAY_MS - 1) / DAY_MS;
    match diff_days {
        0 => "Today".to_string(),
        1 => "1 day ago".to_string(),
        2..=6 => format!("{diff_days} days ago"),
        7..=29 => format!("{} weeks ago", diff_days / 7),
        30..=364 => format!("{} months ago", diff_days / 30),
        _ => format_date(ms),
    }
}

/// Absolute date for an optional store timestamp.
pub fn display_date(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp_ms)
        .map(format_date)
        .unwrap_or_else(|| "Unknown date".to_string())
}

/// Relative label for an optional store timestamp; freshly created records
/// without a server time yet read as "Recently".
pub fn display_relative(raw: Option<&str>, now_ms: i64) -> String {
    raw.and_then(parse_timestamp_ms)
        .map(|ms| format_relative(ms, now_ms))
        .unwrap_or_else(|| "Recently".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOON: &str = "2026-03-10T12:00:00Z";

    #[test]
    fn parses_rfc3339_with_and_without_fraction() {
        assert_eq!(parse_timestamp_ms("1970-01-01T00:00:00Z"), Some(0));
        assert_eq!(
            parse_timestamp_ms("1970-01-01T00:00:01.500Z"),
            Some(1_500)
        );
        assert_eq!(parse_timestamp_ms("not a timestamp"), None);
    }

    #[test]
    fn formats_absolute_dates() {
        let ms = parse_timestamp_ms(NOON).expect("fixture parses");
        assert_eq!(format_date(ms), "Mar 10, 2026");
        assert_eq!(display_date(Some(NOON)), "Mar 10, 2026");
        assert_eq!(display_date(None), "Unknown date");
    }

    #[test]
    fn relative_labels_step_through_units() {
        let ms = parse_timestamp_ms(NOON).expect("fixture parses");
        assert_eq!(format_relative(ms, ms), "Today");
        assert_eq!(format_relative(ms, ms + DAY_MS), "1 day ago");
        assert_eq!(format_relative(ms, ms + 3 * DAY_MS), "3 days ago");
        assert_eq!(format_relative(ms, ms + 14 * DAY_MS), "2 weeks ago");
        assert_eq!(format_relative(ms, ms + 90 * DAY_MS), "3 months ago");
        assert_eq!(format_relative(ms, ms + 400 * DAY_MS), "Mar 10, 2026");
    }

    #[test]
    fn missing_timestamp_reads_as_recently() {
        assert_eq!(display_relative(None, 0), "Recently");
    }
}
