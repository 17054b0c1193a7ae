//! # Format validators
//!
//! Validates a candidate string against one of the named formats:
//!
//! | name             | shape                                         | verifier            |
//! |------------------|-----------------------------------------------|---------------------|
//! | `email`          | [`EMAIL_PATTERN`]                             | -                   |
//! | `phone-flexible` | [`PHONE_FLEXIBLE_PATTERN`]                    | -                   |
//! | `phone-strict`   | 10 to 15 digits                               | -                   |
//! | `isbn`           | 9 digits + digit or `X`, or 13 digits         | ISBN-10 / ISBN-13   |
//! | `credit-card`    | 15 or 16 digits                               | Luhn                |
//! | `date-iso`       | `YYYY-MM-DD`                                  | real calendar date  |
//!
//! Validation runs the shape first and the verifier only on a shape match.
//! A valid candidate is returned as-is, never normalised.
//!
//! ```rust
//! use inputkit::format::{validate_format, FormatName};
//! use inputkit::{InvalidReason, ValidationOutcome};
//!
//! assert!(validate_format(FormatName::Email, "user.name+tag@sub.example.com").is_valid());
//! assert_eq!(
//!     validate_format(FormatName::CreditCard, "1234567812345678"),
//!     ValidationOutcome::Invalid(InvalidReason::ChecksumMismatch)
//! );
//! ```
use crate::config::{
    CREDIT_CARD_PATTERN, DATE_ISO_PATTERN, EMAIL_PATTERN, ISBN_PATTERN, PHONE_FLEXIBLE_PATTERN,
    PHONE_STRICT_PATTERN,
};
use crate::date::is_calendar_date;
use inputkit_core::checksum::{isbn_checksum, luhn_checksum};
use inputkit_core::{InvalidReason, ValidationOutcome};
use regex::Regex;
use std::{error::Error, fmt::Display, str::FromStr, sync::LazyLock};

/// The formats known to [`validate_format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatName {
    Email,
    PhoneFlexible,
    PhoneStrict,
    Isbn,
    CreditCard,
    DateIso,
}

impl FormatName {
    pub const ALL: [FormatName; 6] = [
        FormatName::Email,
        FormatName::PhoneFlexible,
        FormatName::PhoneStrict,
        FormatName::Isbn,
        FormatName::CreditCard,
        FormatName::DateIso,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::PhoneFlexible => "phone-flexible",
            Self::PhoneStrict => "phone-strict",
            Self::Isbn => "isbn",
            Self::CreditCard => "credit-card",
            Self::DateIso => "date-iso",
        }
    }
}

impl Display for FormatName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when parsing a name that isn't one of [`FormatName::ALL`].
#[derive(Debug, PartialEq, Eq)]
pub struct UnknownFormat(pub String);

impl Display for UnknownFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown format {} => email, phone-flexible, phone-strict, isbn, credit-card, date-iso",
            self.0
        )
    }
}

impl Error for UnknownFormat {}

impl FromStr for FormatName {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormatName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

/// Second stage check run after a shape match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verifier {
    Isbn,
    Luhn,
    CalendarDate,
}

impl Verifier {
    fn verify(self, candidate: &str) -> Result<(), InvalidReason> {
        match self {
            Self::Isbn if isbn_checksum(candidate) => Ok(()),
            Self::Luhn if luhn_checksum(candidate) => Ok(()),
            Self::Isbn | Self::Luhn => Err(InvalidReason::ChecksumMismatch),
            Self::CalendarDate if is_calendar_date(candidate) => Ok(()),
            Self::CalendarDate => Err(InvalidReason::ParseFailure),
        }
    }
}

/// A named format: a compiled shape pattern plus an optional verifier.
///
/// There is exactly one spec per [`FormatName`], compiled on first use and
/// shared read-only for the rest of the process.
#[derive(Debug)]
pub struct FormatSpec {
    name: FormatName,
    pattern: Regex,
    verifier: Option<Verifier>,
}

fn compile(name: FormatName, pattern: &str, verifier: Option<Verifier>) -> FormatSpec {
    match Regex::new(pattern) {
        Ok(pattern) => FormatSpec {
            name,
            pattern,
            verifier,
        },
        Err(err) => panic!("Invalid {name} regex: {err}"),
    }
}

static SPECS: LazyLock<[FormatSpec; 6]> = LazyLock::new(|| {
    [
        compile(FormatName::Email, EMAIL_PATTERN, None),
        compile(FormatName::PhoneFlexible, PHONE_FLEXIBLE_PATTERN, None),
        compile(FormatName::PhoneStrict, PHONE_STRICT_PATTERN, None),
        compile(FormatName::Isbn, ISBN_PATTERN, Some(Verifier::Isbn)),
        compile(FormatName::CreditCard, CREDIT_CARD_PATTERN, Some(Verifier::Luhn)),
        compile(
            FormatName::DateIso,
            DATE_ISO_PATTERN,
            Some(Verifier::CalendarDate),
        ),
    ]
});

impl FormatSpec {
    pub fn get(name: FormatName) -> &'static FormatSpec {
        let index = match name {
            FormatName::Email => 0,
            FormatName::PhoneFlexible => 1,
            FormatName::PhoneStrict => 2,
            FormatName::Isbn => 3,
            FormatName::CreditCard => 4,
            FormatName::DateIso => 5,
        };
        &SPECS[index]
    }

    pub fn name(&self) -> FormatName {
        self.name
    }

    /// The source of the shape pattern.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn has_verifier(&self) -> bool {
        self.verifier.is_some()
    }

    /// Shape check only.
    pub fn matches_shape(&self, candidate: &str) -> bool {
        self.pattern.is_match(candidate)
    }

    pub fn validate(&self, candidate: &str) -> ValidationOutcome<String> {
        if !self.matches_shape(candidate) {
            return ValidationOutcome::Invalid(InvalidReason::ShapeMismatch);
        }

        if let Some(verifier) = self.verifier {
            if let Err(reason) = verifier.verify(candidate) {
                return ValidationOutcome::Invalid(reason);
            }
        }

        ValidationOutcome::Valid(candidate.to_string())
    }
}

/// Validates `candidate` against the named format.
pub fn validate_format(name: FormatName, candidate: &str) -> ValidationOutcome<String> {
    FormatSpec::get(name).validate(candidate)
}

/// Like [`validate_format`] but takes the format by its textual name.
pub fn validate_str(name: &str, candidate: &str) -> Result<ValidationOutcome<String>, UnknownFormat> {
    let name: FormatName = name.parse()?;
    Ok(validate_format(name, candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(name: FormatName, candidate: &str) -> Option<InvalidReason> {
        validate_format(name, candidate).reason()
    }

    #[test]
    fn test_spec_registry_is_consistent() {
        for name in FormatName::ALL {
            assert_eq!(FormatSpec::get(name).name(), name);
            assert_eq!(name.as_str().parse::<FormatName>(), Ok(name));
        }
        assert!(FormatSpec::get(FormatName::Isbn).has_verifier());
        assert!(!FormatSpec::get(FormatName::Email).has_verifier());
    }

    #[test]
    fn test_email() {
        assert_eq!(
            validate_format(FormatName::Email, "user.name+tag@sub.example.com"),
            ValidationOutcome::Valid("user.name+tag@sub.example.com".to_string())
        );
        assert!(validate_format(FormatName::Email, "a&b*c@example.museum").is_valid());
        assert_eq!(
            reason(FormatName::Email, "not-an-email"),
            Some(InvalidReason::ShapeMismatch)
        );
        assert!(validate_format(FormatName::Email, "a@b").is_invalid());
        assert!(validate_format(FormatName::Email, "a..b@example.com").is_invalid());
        assert!(validate_format(FormatName::Email, "a@example.toolongtld").is_invalid());
        assert!(validate_format(FormatName::Email, "a@example.c0m").is_invalid());
    }

    #[test]
    fn test_phone_strict() {
        assert!(validate_format(FormatName::PhoneStrict, "123456789012").is_valid());
        assert!(validate_format(FormatName::PhoneStrict, "123456 789012").is_invalid());
        assert!(validate_format(FormatName::PhoneStrict, "123456789").is_invalid());
        assert!(validate_format(FormatName::PhoneStrict, "1234567890123456").is_invalid());
        assert!(validate_format(FormatName::PhoneStrict, "+12345678901").is_invalid());
        // non-ascii digits are not digits here
        assert!(validate_format(FormatName::PhoneStrict, "١٢٣٤٥٦٧٨٩٠").is_invalid());
    }

    #[test]
    fn test_phone_flexible() {
        for phone in [
            "+1 (555) 123-4567",
            "555-123-4567",
            "555.123.4567",
            "+34 612 345 678",
            "5551234567",
            "12345",
        ] {
            assert!(
                validate_format(FormatName::PhoneFlexible, phone).is_valid(),
                "{phone}"
            );
        }

        for phone in ["1234", "555-abc-4567", "++1 555 123 4567", "555--123-4567", ""] {
            assert_eq!(
                reason(FormatName::PhoneFlexible, phone),
                Some(InvalidReason::ShapeMismatch),
                "{phone}"
            );
        }
    }

    #[test]
    fn test_isbn() {
        assert!(validate_format(FormatName::Isbn, "9780306406157").is_valid());
        assert!(validate_format(FormatName::Isbn, "0306406152").is_valid());
        assert!(validate_format(FormatName::Isbn, "080442957X").is_valid());
        assert_eq!(
            reason(FormatName::Isbn, "9780306406158"),
            Some(InvalidReason::ChecksumMismatch)
        );
        assert_eq!(
            reason(FormatName::Isbn, "080442957x"),
            Some(InvalidReason::ShapeMismatch)
        );
        assert_eq!(
            reason(FormatName::Isbn, "978-0306406157"),
            Some(InvalidReason::ShapeMismatch)
        );
    }

    #[test]
    fn test_credit_card() {
        assert_eq!(
            reason(FormatName::CreditCard, "4532015112830367"),
            Some(InvalidReason::ChecksumMismatch)
        );
        assert!(validate_format(FormatName::CreditCard, "378282246310005").is_valid());
        assert!(validate_format(FormatName::CreditCard, "4532015112830366").is_valid());
        assert_eq!(
            reason(FormatName::CreditCard, "4532 0151 1283 0366"),
            Some(InvalidReason::ShapeMismatch)
        );
    }

    #[test]
    fn test_date_iso() {
        assert!(validate_format(FormatName::DateIso, "2024-02-29").is_valid());
        assert_eq!(
            reason(FormatName::DateIso, "2024-13-01"),
            Some(InvalidReason::ParseFailure)
        );
        assert_eq!(
            reason(FormatName::DateIso, "01/02/2024"),
            Some(InvalidReason::ShapeMismatch)
        );
    }

    #[test]
    fn test_validate_str() {
        assert!(validate_str("isbn", "9780306406157").unwrap().is_valid());
        let err = validate_str("zip-code", "12345").unwrap_err();
        assert_eq!(err, UnknownFormat("zip-code".to_string()));
    }

    #[test]
    fn test_validators_are_idempotent() {
        for name in FormatName::ALL {
            for candidate in ["9780306406157", "a@b.co", "2024-01-01", "nope"] {
                let first = validate_format(name, candidate);
                assert_eq!(first, validate_format(name, candidate));
            }
        }
    }
}
