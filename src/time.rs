// File: src/time.rs

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use humantime::parse_rfc3339_weak;

/// Textual forms that carry their own UTC offset.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    // nginx / common log format
    "%d/%b/%Y:%H:%M:%S %z",
];

/// Date and time without a zone. Interpreted as UTC.
/// Slash dates that do not start with the year are month-first.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %I:%M:%S %p",
    "%Y-%m-%d %I:%M %p",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%Y/%m/%d %I:%M:%S %p",
    "%Y/%m/%d %I:%M %p",
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%B %d %Y %H:%M:%S",
    "%B %d %Y %H:%M",
    "%B %d %Y %I:%M:%S %p",
    "%B %d %Y %I:%M %p",
    "%B %d, %Y %H:%M:%S",
    "%B %d, %Y %H:%M",
    "%B %d, %Y %I:%M:%S %p",
    "%B %d, %Y %I:%M %p",
    "%d %B %Y %H:%M:%S",
    "%d %B %Y %H:%M",
    "%d %B %Y %I:%M:%S %p",
    "%d %B %Y %I:%M %p",
    "%a, %d %b %Y %H:%M:%S",
];

/// Bare dates, taken as midnight UTC. `%B` also accepts abbreviated month names.
const NAIVE_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
];

/// Parses the text found between a log line's timestamp brackets.
///
/// Accepts RFC 3339, RFC 2822 and the common textual date-time forms listed
/// above; month names may be abbreviated or written out. Values with an offset
/// are converted to UTC, values without one are assumed to already be UTC.
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime.with_timezone(&Utc));
    }
    if let Ok(datetime) = DateTime::parse_from_rfc2822(text) {
        return Some(datetime.with_timezone(&Utc));
    }
    // "2024-01-01 10:00:00", with or without a trailing Z
    if let Ok(system_time) = parse_rfc3339_weak(text) {
        return Some(system_time.into());
    }

    for format in OFFSET_FORMATS {
        if let Ok(datetime) = DateTime::parse_from_str(text, format) {
            return Some(datetime.with_timezone(&Utc));
        }
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    for format in NAIVE_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test_case("2024-01-01 10:00:00", utc(2024, 1, 1, 10, 0, 0); "iso space")]
    #[test_case("2024-01-01 10:00:00 AM", utc(2024, 1, 1, 10, 0, 0); "iso 12h")]
    #[test_case("2024-01-01 10:15 PM", utc(2024, 1, 1, 22, 15, 0); "iso 12h minutes")]
    #[test_case("2024/01/01 10:00:00 PM", utc(2024, 1, 1, 22, 0, 0); "year first slashes 12h")]
    #[test_case("2024/01/01 12:30 AM", utc(2024, 1, 1, 0, 30, 0); "year first slashes 12h minutes")]
    #[test_case("Jan 1, 2024 10:00 AM", utc(2024, 1, 1, 10, 0, 0); "month name comma 12h minutes")]
    #[test_case("Jan 1, 2024 10:00:30 PM", utc(2024, 1, 1, 22, 0, 30); "month name comma 12h")]
    #[test_case("January 1, 2024 10:00", utc(2024, 1, 1, 10, 0, 0); "month name comma minutes")]
    #[test_case("Jan 1 2024 10:00", utc(2024, 1, 1, 10, 0, 0); "month name minutes")]
    #[test_case("Jan 1 2024 3:45:00 PM", utc(2024, 1, 1, 15, 45, 0); "month name 12h")]
    #[test_case("Jan 1 2024 3:45 pm", utc(2024, 1, 1, 15, 45, 0); "month name 12h minutes")]
    #[test_case("1 Jan 2024 10:00", utc(2024, 1, 1, 10, 0, 0); "day first minutes")]
    #[test_case("1 Jan 2024 10:00:00 PM", utc(2024, 1, 1, 22, 0, 0); "day first 12h")]
    #[test_case("1 January 2024 12:05 PM", utc(2024, 1, 1, 12, 5, 0); "day first 12h minutes")]
    #[test_case("2024-01-01T10:00:00", utc(2024, 1, 1, 10, 0, 0); "iso t")]
    #[test_case("2024-01-01T10:00:00Z", utc(2024, 1, 1, 10, 0, 0); "rfc3339 zulu")]
    #[test_case("2024-01-01T12:00:00+02:00", utc(2024, 1, 1, 10, 0, 0); "rfc3339 offset")]
    #[test_case("Mon, 01 Jan 2024 10:00:00 +0000", utc(2024, 1, 1, 10, 0, 0); "rfc2822")]
    #[test_case("01/Jan/2024:11:00:00 +0100", utc(2024, 1, 1, 10, 0, 0); "nginx")]
    #[test_case("2024-01-01 10:00", utc(2024, 1, 1, 10, 0, 0); "minutes")]
    #[test_case("2024/01/01 10:00:00", utc(2024, 1, 1, 10, 0, 0); "year first slashes")]
    #[test_case("1/15/2024 10:00:00", utc(2024, 1, 15, 10, 0, 0); "us 24h")]
    #[test_case("1/15/2024 10:00:00 PM", utc(2024, 1, 15, 22, 0, 0); "us 12h")]
    #[test_case("01/15/2024 9:30 AM", utc(2024, 1, 15, 9, 30, 0); "us 12h minutes")]
    #[test_case("Jan 15 2024 10:00:00", utc(2024, 1, 15, 10, 0, 0); "month name")]
    #[test_case("January 15, 2024 10:00:00", utc(2024, 1, 15, 10, 0, 0); "long month name")]
    #[test_case("15 Jan 2024 10:00:00", utc(2024, 1, 15, 10, 0, 0); "day first month name")]
    #[test_case("2024-01-01", utc(2024, 1, 1, 0, 0, 0); "date only")]
    #[test_case("1/15/2024", utc(2024, 1, 15, 0, 0, 0); "us date only")]
    #[test_case("Jan 15, 2024", utc(2024, 1, 15, 0, 0, 0); "month name date only")]
    #[test_case("  2024-01-01  ", utc(2024, 1, 1, 0, 0, 0); "surrounding whitespace")]
    fn parses_common_forms(text: &str, expected: DateTime<Utc>) {
        assert_eq!(parse_timestamp(text), Some(expected));
    }

    #[test]
    fn keeps_fractional_seconds() {
        let parsed = parse_timestamp("2024-01-01 10:00:00.250").unwrap();
        assert_eq!(parsed.timestamp_subsec_millis(), 250);
    }

    #[test_case(""; "empty")]
    #[test_case("   "; "blank")]
    #[test_case("not a date"; "words")]
    #[test_case("2024-13-01"; "month out of range")]
    #[test_case("2024-02-30"; "day out of range")]
    #[test_case("INFO"; "event type")]
    fn rejects_garbage(text: &str) {
        assert_eq!(parse_timestamp(text), None);
    }
}
