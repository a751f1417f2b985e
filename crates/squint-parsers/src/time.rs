//! Relative-time rendering for Slurm timestamps.
//!
//! Slurm prints naive local timestamps (`2025-07-04T10:10:30`); the pasted
//! blob usually ends with one `date --iso-8601=seconds` line carrying the
//! cluster's UTC offset. The resolver combines a timestamp string, a
//! user-chosen timezone mode, and that detected offset into a relative
//! description like "3h 12m ago" or "in 2d 1h".

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

static OFFSET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-+]\d{2}:\d{2}$").unwrap());

/// How naive timestamps are anchored to a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimezoneMode {
    /// Use the offset detected from the input's timestamp line, if any,
    /// falling back to the local zone.
    #[default]
    Auto,
    /// Treat naive timestamps as UTC.
    Utc,
    /// Treat naive timestamps as local time of the evaluating process.
    Local,
}

/// Render a timestamp relative to `now`.
///
/// Empty strings and the `Unknown` / `N/A` placeholders yield an empty
/// string, as do timestamps that fail to parse; this never errors.
pub fn relative_time(
    time_str: &str,
    mode: TimezoneMode,
    detected_offset: Option<&str>,
    now: DateTime<Utc>,
) -> String {
    if time_str.is_empty() || time_str == "Unknown" || time_str == "N/A" {
        return String::new();
    }

    let Some(target) = resolve(time_str, mode, detected_offset) else {
        return String::new();
    };

    let diff = now.signed_duration_since(target).num_seconds();
    if diff > 0 {
        format!("{} ago", format_relative(diff))
    } else {
        format!("in {}", format_relative(-diff))
    }
}

/// Anchor a timestamp string to a concrete instant.
fn resolve(
    time_str: &str,
    mode: TimezoneMode,
    detected_offset: Option<&str>,
) -> Option<DateTime<Utc>> {
    let has_offset = time_str.ends_with('Z') || OFFSET_RE.is_match(time_str);
    if has_offset {
        return DateTime::parse_from_rfc3339(time_str)
            .ok()
            .map(|dt| dt.with_timezone(&Utc));
    }

    let appended = match (mode, detected_offset) {
        (TimezoneMode::Utc, _) | (TimezoneMode::Auto, Some("Z")) => Some("Z"),
        (TimezoneMode::Auto, Some(offset)) => Some(offset),
        _ => None,
    };

    match appended {
        Some(offset) => DateTime::parse_from_rfc3339(&format!("{time_str}{offset}"))
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        None => NaiveDateTime::parse_from_str(time_str, "%Y-%m-%dT%H:%M:%S")
            .ok()
            .and_then(|dt| Local.from_local_datetime(&dt).single())
            .map(|dt| dt.with_timezone(&Utc)),
    }
}

/// Format a magnitude in seconds as its largest unit plus the immediate
/// subordinate unit (days+hours, hours+minutes, minutes, or seconds).
fn format_relative(seconds: i64) -> String {
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}d {}h", days, hours % 24)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes % 60)
    } else if minutes > 0 {
        format!("{}m", minutes)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 5, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_placeholders_yield_empty() {
        assert_eq!(relative_time("", TimezoneMode::Auto, None, now()), "");
        assert_eq!(relative_time("Unknown", TimezoneMode::Auto, None, now()), "");
        assert_eq!(relative_time("N/A", TimezoneMode::Utc, None, now()), "");
        assert_eq!(relative_time("not-a-date", TimezoneMode::Utc, None, now()), "");
    }

    #[test]
    fn test_explicit_offset_parsed_as_is() {
        // 21:22:47-07:00 == 04:22:47Z on the 5th
        let s = relative_time("2025-07-04T21:22:47-07:00", TimezoneMode::Utc, None, now());
        assert_eq!(s, "7h 37m ago");
    }

    #[test]
    fn test_utc_mode_appends_z() {
        let s = relative_time("2025-07-05T10:00:00", TimezoneMode::Utc, None, now());
        assert_eq!(s, "2h 0m ago");
    }

    #[test]
    fn test_auto_mode_uses_detected_offset() {
        // Naive 02:00 at -07:00 is 09:00Z
        let s = relative_time(
            "2025-07-05T02:00:00",
            TimezoneMode::Auto,
            Some("-07:00"),
            now(),
        );
        assert_eq!(s, "3h 0m ago");
    }

    #[test]
    fn test_auto_mode_with_z_offset() {
        let s = relative_time("2025-07-05T11:58:30", TimezoneMode::Auto, Some("Z"), now());
        assert_eq!(s, "1m ago");
    }

    #[test]
    fn test_future_renders_with_prefix() {
        // Naive 7th 13:00 at -07:00 is 20:00Z, 2d 8h past "now".
        let s = relative_time(
            "2025-07-07T13:00:00",
            TimezoneMode::Auto,
            Some("-07:00"),
            now(),
        );
        assert_eq!(s, "in 2d 8h");
    }

    #[test]
    fn test_seconds_granularity() {
        let s = relative_time("2025-07-05T11:59:45", TimezoneMode::Utc, None, now());
        assert_eq!(s, "15s ago");
    }
}
