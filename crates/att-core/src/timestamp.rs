//! Permissive parsing of combined date+time text.
//!
//! The interval reconstructor accepts whatever common representation
//! the access-control export happens to use, in contrast to the
//! dominant-shift pass which insists on a strict `HH:MM:SS` suffix.
//! The two paths are deliberately separate.

use chrono::NaiveDateTime;
use thiserror::Error;

/// The timestamp text matched none of the accepted formats.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized timestamp: {0}")]
pub struct UnrecognizedTimestamp(pub String);

/// Formats tried in order. Fractional seconds are tolerated where the
/// exporter emits them.
const FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
    "%d-%m-%Y %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parses a combined date+time from common textual representations.
///
/// Leading and trailing whitespace is ignored. Timestamps are naive:
/// no timezone normalization is performed.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, UnrecognizedTimestamp> {
    let trimmed = raw.trim();
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| UnrecognizedTimestamp(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(h, mi, s).unwrap())
    }

    #[test]
    fn parses_common_formats() {
        assert_eq!(
            parse_timestamp("2025-09-25 06:51:01").unwrap(),
            dt(2025, 9, 25, 6, 51, 1)
        );
        assert_eq!(
            parse_timestamp("2025-09-25T06:51:01").unwrap(),
            dt(2025, 9, 25, 6, 51, 1)
        );
        assert_eq!(
            parse_timestamp("25/09/2025 06:51:01").unwrap(),
            dt(2025, 9, 25, 6, 51, 1)
        );
        assert_eq!(
            parse_timestamp("2025-09-25 06:51").unwrap(),
            dt(2025, 9, 25, 6, 51, 0)
        );
    }

    #[test]
    fn tolerates_fractional_seconds_and_whitespace() {
        assert_eq!(
            parse_timestamp("  2025-09-25 06:51:01.500  ").unwrap(),
            NaiveDate::from_ymd_opt(2025, 9, 25)
                .unwrap()
                .and_time(NaiveTime::from_hms_milli_opt(6, 51, 1, 500).unwrap())
        );
    }

    #[test]
    fn rejects_date_only_and_garbage() {
        assert!(parse_timestamp("2025-09-25").is_err());
        assert!(parse_timestamp("").is_err());
        assert!(parse_timestamp("not a time").is_err());
    }

    #[test]
    fn error_carries_original_text() {
        let err = parse_timestamp("bogus").unwrap_err();
        assert_eq!(err.to_string(), "unrecognized timestamp: bogus");
    }
}
