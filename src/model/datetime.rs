// File: ./src/model/datetime.rs
//! Flexible date/time parsing for user input, plus the display and storage formats.
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use thiserror::Error;

/// Tried in order; the first pattern that consumes the whole input wins.
const DATE_TIME_PATTERNS: &[&str] = &[
    "%Y-%m-%d %H%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%d/%m/%Y %H%M",
    "%d-%m-%Y %H%M",
    "%d.%m.%Y %H%M",
];

const DATE_ONLY_PATTERNS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y"];

const NICE_DATE: &str = "%b %d %Y";
const NICE_DATE_TIME: &str = "%b %d %Y %H:%M";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unrecognized date/time: {input}")]
pub struct DateFormatError {
    pub input: String,
}

/// Parses date/time text in any of the accepted formats.
/// A date without a time-of-day resolves to midnight.
pub fn parse_flexible(text: &str) -> Result<NaiveDateTime, DateFormatError> {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if !has_strict_date_fields(&normalized) {
        return Err(DateFormatError {
            input: text.to_string(),
        });
    }

    for pattern in DATE_TIME_PATTERNS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&normalized, pattern) {
            return Ok(dt);
        }
    }
    for pattern in DATE_ONLY_PATTERNS {
        if let Ok(d) = NaiveDate::parse_from_str(&normalized, pattern) {
            return Ok(d.and_time(NaiveTime::MIN));
        }
    }

    Err(DateFormatError {
        input: text.to_string(),
    })
}

/// chrono reads numeric fields at any width. Years must have four digits;
/// ISO dates also need two-digit months and days, while day-first dates
/// allow one or two.
fn has_strict_date_fields(normalized: &str) -> bool {
    let date = normalized.split([' ', 'T']).next().unwrap_or("");
    let fields: Vec<&str> = date.split(['-', '/', '.']).collect();
    let (first, second, third) = match fields.as_slice() {
        [first, second, third] => (*first, *second, *third),
        _ => return false,
    };
    if first.len() == 4 {
        is_digits(first, 4, 4) && is_digits(second, 2, 2) && is_digits(third, 2, 2)
    } else {
        is_digits(first, 1, 2) && is_digits(second, 1, 2) && is_digits(third, 4, 4)
    }
}

fn is_digits(field: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&field.len()) && field.bytes().all(|b| b.is_ascii_digit())
}

/// "Sep 10 2025" at midnight, "Sep 10 2025 14:00" otherwise.
pub fn format_nice(dt: &NaiveDateTime) -> String {
    if dt.time() == NaiveTime::MIN {
        dt.format(NICE_DATE).to_string()
    } else {
        dt.format(NICE_DATE_TIME).to_string()
    }
}

/// ISO-8601 local date-time as written to the backing file.
/// Seconds are only emitted when they carry information.
pub fn to_iso(dt: &NaiveDateTime) -> String {
    if dt.second() == 0 && dt.nanosecond() == 0 {
        dt.format("%Y-%m-%dT%H:%M").to_string()
    } else {
        dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
    }
}

/// Reads an ISO date-time, or an ISO date normalized to midnight.
pub fn parse_iso(text: &str) -> Result<NaiveDateTime, DateFormatError> {
    let input = text.trim();
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, pattern) {
            return Ok(dt);
        }
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN))
        .map_err(|_| DateFormatError {
            input: text.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_date_time_formats() {
        let expected = dt(2025, 9, 10, 14, 0);
        assert_eq!(parse_flexible("2025-09-10 1400").unwrap(), expected);
        assert_eq!(parse_flexible("2025-09-10T14:00").unwrap(), expected);
        assert_eq!(parse_flexible("10/9/2025 1400").unwrap(), expected);
        assert_eq!(parse_flexible("10-9-2025 1400").unwrap(), expected);
        assert_eq!(parse_flexible("10.09.2025 1400").unwrap(), expected);
    }

    #[test]
    fn test_date_only_defaults_to_midnight() {
        let expected = dt(2025, 9, 10, 0, 0);
        assert_eq!(parse_flexible("2025-09-10").unwrap(), expected);
        assert_eq!(parse_flexible("10/9/2025").unwrap(), expected);
        assert_eq!(parse_flexible("10-09-2025").unwrap(), expected);
        assert_eq!(parse_flexible("10.9.2025").unwrap(), expected);
    }

    #[test]
    fn test_whitespace_is_normalized() {
        assert_eq!(
            parse_flexible("   2025-09-10    1400  ").unwrap(),
            dt(2025, 9, 10, 14, 0)
        );
    }

    #[test]
    fn test_rejects_garbage() {
        let err = parse_flexible("next tuesday").unwrap_err();
        assert_eq!(err.input, "next tuesday");
        assert!(parse_flexible("2025-13-01").is_err());
        assert!(parse_flexible("").is_err());
    }

    #[test]
    fn test_short_years_and_unpadded_iso_fields_are_rejected() {
        assert!(parse_flexible("10/9/25").is_err());
        assert!(parse_flexible("1/1/999").is_err());
        assert!(parse_flexible("10-9-25 1400").is_err());
        assert!(parse_flexible("2025-9-1").is_err());
        assert!(parse_flexible("2025-09-1T14:00").is_err());
        assert!(parse_flexible("25-09-10").is_err());

        // Day-first dates still take one-digit day and month.
        assert_eq!(parse_flexible("1/9/2025").unwrap(), dt(2025, 9, 1, 0, 0));
    }

    #[test]
    fn test_format_nice_drops_midnight() {
        assert_eq!(format_nice(&dt(2025, 9, 10, 0, 0)), "Sep 10 2025");
        assert_eq!(format_nice(&dt(2025, 9, 10, 14, 0)), "Sep 10 2025 14:00");
        assert_eq!(format_nice(&dt(2025, 8, 6, 0, 1)), "Aug 06 2025 00:01");
    }

    #[test]
    fn test_iso_roundtrip() {
        let value = dt(2025, 9, 10, 16, 30);
        assert_eq!(to_iso(&value), "2025-09-10T16:30");
        assert_eq!(parse_iso(&to_iso(&value)).unwrap(), value);

        let with_seconds = NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        assert_eq!(to_iso(&with_seconds), "2025-01-02T03:04:05");
        assert_eq!(parse_iso("2025-01-02T03:04:05").unwrap(), with_seconds);
    }

    #[test]
    fn test_iso_accepts_bare_date() {
        assert_eq!(parse_iso("2025-09-10").unwrap(), dt(2025, 9, 10, 0, 0));
        assert!(parse_iso("10/9/2025").is_err());
    }
}
