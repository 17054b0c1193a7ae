//! # Calendar dates
//!
//! ISO `YYYY-MM-DD` parsing with real calendar checks, and pattern based
//! formatting of an already parsed date.
//!
//! ```rust
//! use inputkit::date::{format_date, parse_iso_date};
//!
//! let date = parse_iso_date("2024-02-29").ok().unwrap();
//! assert_eq!(format_date(date, "%d/%m/%Y").unwrap(), "29/02/2024");
//!
//! assert!(parse_iso_date("2023-02-29").is_invalid());
//! ```
use crate::format::{FormatName, FormatSpec};
use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use inputkit_core::{InvalidReason, ValidationOutcome};
use std::{error::Error, fmt::Display, fmt::Write};

/// Parses an ISO calendar date.
///
/// - Anything other than exactly `YYYY-MM-DD` is a [`InvalidReason::ShapeMismatch`].
/// - A well shaped but impossible date (month 13, day 32, 29 Feb of a common
///   year) is a [`InvalidReason::ParseFailure`].
pub fn parse_iso_date(input: &str) -> ValidationOutcome<NaiveDate> {
    if !FormatSpec::get(FormatName::DateIso).matches_shape(input) {
        return ValidationOutcome::Invalid(InvalidReason::ShapeMismatch);
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok().into()
}

/// True when `input` is a real `YYYY-MM-DD` calendar date.
pub fn is_calendar_date(input: &str) -> bool {
    parse_iso_date(input).is_valid()
}

/// Raised when a formatting pattern can't be applied to a date.
#[derive(Debug, PartialEq, Eq)]
pub enum DateFormatError {
    /// The pattern contains an unknown `%` specifier.
    InvalidPattern(String),
    /// The pattern asks for fields a date doesn't have (hours, time zone, ...).
    Unsupported(String),
}

impl Display for DateFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPattern(p) => write!(f, "Invalid date pattern => {}", p),
            Self::Unsupported(p) => {
                write!(f, "The pattern {} needs fields a calendar date doesn't have", p)
            }
        }
    }
}

impl Error for DateFormatError {}

/// Renders `date` with a strftime-style pattern (`%Y-%m-%d`, `%d/%m/%Y`, ...).
pub fn format_date(date: NaiveDate, pattern: &str) -> Result<String, DateFormatError> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(DateFormatError::InvalidPattern(pattern.to_string()));
    }

    let mut out = String::new();
    write!(out, "{}", date.format_with_items(StrftimeItems::new(pattern)))
        .map_err(|_| DateFormatError::Unsupported(pattern.to_string()))?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date_valid() {
        let date = parse_iso_date("2024-02-29").ok().unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert!(is_calendar_date("1999-12-31"));
    }

    #[test]
    fn test_parse_iso_date_impossible_dates() {
        for input in ["2024-13-01", "2024-01-32", "2023-02-29", "2024-00-10"] {
            assert_eq!(
                parse_iso_date(input),
                ValidationOutcome::Invalid(InvalidReason::ParseFailure),
                "{input}"
            );
        }
    }

    #[test]
    fn test_parse_iso_date_wrong_shape() {
        for input in ["2024-1-05", "24-01-05", "2024/01/05", " 2024-01-05", "2024-01-05x", ""] {
            assert_eq!(
                parse_iso_date(input),
                ValidationOutcome::Invalid(InvalidReason::ShapeMismatch),
                "{input}"
            );
        }
    }

    #[test]
    fn test_format_date_patterns() {
        let date = NaiveDate::from_ymd_opt(2023, 7, 4).unwrap();
        assert_eq!(format_date(date, "%Y-%m-%d").unwrap(), "2023-07-04");
        assert_eq!(format_date(date, "%d/%m/%Y").unwrap(), "04/07/2023");
        assert_eq!(format_date(date, "%B %-d, %Y").unwrap(), "July 4, 2023");
    }

    #[test]
    fn test_format_date_bad_pattern() {
        let date = NaiveDate::from_ymd_opt(2023, 7, 4).unwrap();
        assert_eq!(
            format_date(date, "%Y-%Q"),
            Err(DateFormatError::InvalidPattern("%Y-%Q".to_string()))
        );
        assert_eq!(
            format_date(date, "%H:%M"),
            Err(DateFormatError::Unsupported("%H:%M".to_string()))
        );
    }
}
