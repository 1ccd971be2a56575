//! Display timestamps.
//!
//! `timestamp` is the human-readable rendering of `createdAt`, fixed when the
//! item is built. Older histories only stored this string, so it must also be
//! parsed back into epoch milliseconds when backfilling `createdAt`.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Rendering used for new items, e.g. `1/1/2024, 12:00:00 PM`.
const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Local date-time layouts accepted when reading stored timestamps.
const LOCAL_DATETIME_FORMATS: &[&str] = &[
    "%m/%d/%Y, %I:%M:%S %p",
    "%m/%d/%Y, %H:%M:%S",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

const LOCAL_DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimestampParseError {
    #[error("unrecognized timestamp format: {0:?}")]
    Unrecognized(String),

    #[error("timestamp does not exist in the local time zone: {0:?}")]
    NonexistentLocalTime(String),
}

/// Render epoch milliseconds in local time.
pub fn format_display(created_at_ms: i64) -> String {
    match Local.timestamp_millis_opt(created_at_ms).single() {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => created_at_ms.to_string(),
    }
}

/// Parse a stored display timestamp into epoch milliseconds.
///
/// Zoned formats (RFC 3339 / RFC 2822) keep their offset; everything else is
/// read as local time.
pub fn parse_display(raw: &str) -> Result<i64, TimestampParseError> {
    let s = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Ok(dt.timestamp_millis());
    }

    let naive = LOCAL_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            LOCAL_DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| TimestampParseError::Unrecognized(s.to_string()))?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp_millis())
        .ok_or_else(|| TimestampParseError::NonexistentLocalTime(s.to_string()))
}

/// `createdAt` value for a record that only has a display timestamp.
///
/// Unparseable strings map to epoch 0 so the record is kept rather than dropped.
pub fn backfill_created_at(raw: &str) -> i64 {
    parse_display(raw).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_ms(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> i64 {
        Local
            .with_ymd_and_hms(y, m, d, h, min, s)
            .earliest()
            .unwrap()
            .timestamp_millis()
    }

    #[test]
    fn parses_locale_string_with_meridiem() {
        let ms = parse_display("1/1/2024, 12:00:00 PM").unwrap();
        assert_eq!(ms, local_ms(2024, 1, 1, 12, 0, 0));
    }

    #[test]
    fn parses_morning_and_evening_hours() {
        assert_eq!(
            parse_display("3/15/2023, 9:05:07 AM").unwrap(),
            local_ms(2023, 3, 15, 9, 5, 7)
        );
        assert_eq!(
            parse_display("3/15/2023, 9:05:07 PM").unwrap(),
            local_ms(2023, 3, 15, 21, 5, 7)
        );
    }

    #[test]
    fn parses_zoned_formats_with_their_offset() {
        assert_eq!(
            parse_display("2024-01-01T00:00:00Z").unwrap(),
            1_704_067_200_000
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            parse_display("not a date"),
            Err(TimestampParseError::Unrecognized(_))
        ));
        assert_eq!(backfill_created_at("not a date"), 0);
        assert_eq!(backfill_created_at(""), 0);
    }

    #[test]
    fn display_format_round_trips_to_the_second() {
        let ms = local_ms(2024, 7, 4, 18, 30, 15);
        let rendered = format_display(ms + 250);

        assert_eq!(rendered, "7/4/2024, 6:30:15 PM");
        assert_eq!(parse_display(&rendered).unwrap(), ms);
    }
}
