//! Game-time resolution.
//!
//! The `time` field of a schedule entry is whatever the spreadsheet held: a
//! full ISO timestamp, free text like "7:30pm", a bare number, or nothing.
//! [`sort_key`] turns it into an orderable key (unparseable sorts last) and
//! [`display`] into a short display string. Each step of the fallback chain
//! is tried in order and the first match wins.

use crate::dataset::RawValue;
use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Placeholder shown when no time is available.
pub const TIME_PLACEHOLDER: &str = "—";

/// Parse a full date/time in any of the shapes the export produces:
/// RFC 3339 with offset, naive `YYYY-MM-DDTHH:MM[:SS[.fff]]`, or a bare
/// `YYYY-MM-DD` date. Naive values are treated as UTC so ordering does not
/// depend on the host timezone.
pub fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(dt);
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }
    None
}

/// Match a 12-hour clock string: `h[:mm] am|pm`, case-insensitive, optional
/// space before the meridiem. Returns minutes since midnight.
fn parse_clock_minutes(text: &str) -> Option<f64> {
    let lower = text.trim().to_lowercase();
    let (body, pm) = if let Some(rest) = lower.strip_suffix("pm") {
        (rest, true)
    } else if let Some(rest) = lower.strip_suffix("am") {
        (rest, false)
    } else {
        return None;
    };
    let body = body.trim_end();

    let (hour_str, minute_str) = match body.split_once(':') {
        Some((h, m)) => (h, Some(m)),
        None => (body, None),
    };
    let hour: u32 = hour_str.trim().parse().ok()?;
    let minute: u32 = match minute_str {
        Some(m) => m.trim().parse().ok()?,
        None => 0,
    };
    if hour > 12 || minute > 59 {
        return None;
    }

    // 12am -> 0h, 12pm -> 12h
    let hour24 = (hour % 12) + if pm { 12 } else { 0 };
    Some((hour24 * 60 + minute) as f64)
}

/// Sort key for a single raw value: datetime instant (epoch millis), else
/// 12-hour clock minutes, else the bare number, else +inf.
fn sort_key_value(value: &RawValue) -> f64 {
    match value {
        RawValue::Number(n) if n.is_finite() => *n,
        RawValue::Text(s) => {
            if let Some(dt) = parse_datetime(s) {
                return dt.and_utc().timestamp_millis() as f64;
            }
            if let Some(minutes) = parse_clock_minutes(s) {
                return minutes;
            }
            s.trim().parse::<f64>().unwrap_or(f64::INFINITY)
        }
        _ => f64::INFINITY,
    }
}

/// Sort key for a schedule entry: the `time` field when it carries anything,
/// otherwise the `date` field. Lower sorts earlier; absent or unparseable
/// values sort last.
pub fn sort_key(time: &RawValue, date: &RawValue) -> f64 {
    let value = if time.is_present() { time } else { date };
    sort_key_value(value)
}

/// Display string for a time value: parsed timestamps render as `h:mm AM/PM`,
/// anything else falls back to the raw text, and absent values to the
/// placeholder.
pub fn display(time: &RawValue) -> String {
    if !time.is_present() {
        return TIME_PLACEHOLDER.to_string();
    }
    if let Some(text) = time.as_text() {
        if let Some(dt) = parse_datetime(text) {
            let hour12 = dt.hour12();
            return format!(
                "{}:{:02} {}",
                hour12.1,
                dt.minute(),
                if hour12.0 { "PM" } else { "AM" }
            );
        }
    }
    time.display_string()
        .unwrap_or_else(|| TIME_PLACEHOLDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> RawValue {
        RawValue::Text(s.to_string())
    }

    #[test]
    fn test_sort_key_rfc3339_instant() {
        let key = sort_key(&text("2024-09-08T13:00:00Z"), &RawValue::Null);
        // 2024-09-08 13:00 UTC = 1725800400 s
        assert_eq!(key, 1_725_800_400_000.0);
    }

    #[test]
    fn test_sort_key_naive_datetime_treated_utc() {
        let with_offset = sort_key(&text("2024-09-08T13:00:00Z"), &RawValue::Null);
        let naive = sort_key(&text("2024-09-08T13:00:00"), &RawValue::Null);
        assert_eq!(with_offset, naive);
    }

    #[test]
    fn test_sort_key_clock_pattern() {
        assert_eq!(sort_key(&text("7:30pm"), &RawValue::Null), 19.0 * 60.0 + 30.0);
        assert_eq!(sort_key(&text("7 PM"), &RawValue::Null), 19.0 * 60.0);
        assert_eq!(sort_key(&text("12am"), &RawValue::Null), 0.0);
        assert_eq!(sort_key(&text("12:15 pm"), &RawValue::Null), 735.0);
    }

    #[test]
    fn test_sort_key_bare_number() {
        assert_eq!(sort_key(&RawValue::Number(42.0), &RawValue::Null), 42.0);
        assert_eq!(sort_key(&text("1300"), &RawValue::Null), 1300.0);
    }

    #[test]
    fn test_sort_key_falls_back_to_date() {
        let key = sort_key(&RawValue::Null, &text("2024-09-08"));
        assert_eq!(key, 1_725_753_600_000.0); // midnight UTC
    }

    #[test]
    fn test_sort_key_unparseable_sorts_last() {
        assert_eq!(sort_key(&text("TBD"), &RawValue::Null), f64::INFINITY);
        assert_eq!(sort_key(&RawValue::Null, &RawValue::Null), f64::INFINITY);
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(display(&text("2024-09-08T13:00:00Z")), "1:00 PM");
        assert_eq!(display(&text("2024-09-08T00:30:00Z")), "12:30 AM");
        assert_eq!(display(&text("7:30pm")), "7:30pm");
        assert_eq!(display(&RawValue::Number(42.0)), "42");
        assert_eq!(display(&RawValue::Null), TIME_PLACEHOLDER);
        assert_eq!(display(&text("   ")), TIME_PLACEHOLDER);
    }
}
