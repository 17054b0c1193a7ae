//! # Validation outcome
//!
//! Every validator and prompt in `inputkit` answers with a
//! [`ValidationOutcome`]: either the accepted value, or the reason the input
//! was rejected. A rejected outcome never carries a partial value.
//!
//! ```rust
//! use inputkit_core::{InvalidReason, ValidationOutcome};
//!
//! let parsed: ValidationOutcome<i32> = "42".parse::<i32>().ok().into();
//! assert_eq!(parsed, ValidationOutcome::Valid(42));
//!
//! let rejected: ValidationOutcome<i32> = ValidationOutcome::Invalid(InvalidReason::OutOfRange);
//! assert_eq!(rejected.unwrap_or(-1), -1);
//! ```
use std::{error::Error, fmt::Display};

/// Why a candidate input was rejected.
///
/// - [`ShapeMismatch`](InvalidReason::ShapeMismatch): the surface syntax did not match the format.
/// - [`ChecksumMismatch`](InvalidReason::ChecksumMismatch): shape matched but the check digit is wrong.
/// - [`ParseFailure`](InvalidReason::ParseFailure): the token could not become the requested type.
/// - [`OutOfRange`](InvalidReason::OutOfRange): a number outside the accepted bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidReason {
    ShapeMismatch,
    ChecksumMismatch,
    ParseFailure,
    OutOfRange,
}

impl Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShapeMismatch => write!(f, "The value doesn't have the expected format"),
            Self::ChecksumMismatch => write!(f, "The value has an invalid check digit"),
            Self::ParseFailure => write!(f, "The value couldn't be parsed"),
            Self::OutOfRange => write!(f, "The value is out of range"),
        }
    }
}

impl Error for InvalidReason {}

/// The result of validating one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome<T> {
    Valid(T),
    Invalid(InvalidReason),
}

impl<T> ValidationOutcome<T> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Returns the rejection reason, if any.
    pub fn reason(&self) -> Option<InvalidReason> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(reason) => Some(*reason),
        }
    }

    /// Discards the reason and yields the value as an `Option`.
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Returns the value or the given sentinel.
    pub fn unwrap_or(self, sentinel: T) -> T {
        match self {
            Self::Valid(value) => value,
            Self::Invalid(_) => sentinel,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ValidationOutcome<U> {
        match self {
            Self::Valid(value) => ValidationOutcome::Valid(f(value)),
            Self::Invalid(reason) => ValidationOutcome::Invalid(reason),
        }
    }

    /// Chains another check onto an accepted value.
    pub fn and_then<U, F: FnOnce(T) -> ValidationOutcome<U>>(self, f: F) -> ValidationOutcome<U> {
        match self {
            Self::Valid(value) => f(value),
            Self::Invalid(reason) => ValidationOutcome::Invalid(reason),
        }
    }

    /// Keeps the value only if `predicate` holds, otherwise rejects with `reason`.
    pub fn filter<F: FnOnce(&T) -> bool>(self, reason: InvalidReason, predicate: F) -> Self {
        match self {
            Self::Valid(value) => {
                if predicate(&value) {
                    Self::Valid(value)
                } else {
                    Self::Invalid(reason)
                }
            }
            invalid => invalid,
        }
    }

    pub fn into_result(self) -> Result<T, InvalidReason> {
        self.into()
    }
}

/// `None` becomes a [`InvalidReason::ParseFailure`].
impl<T> From<Option<T>> for ValidationOutcome<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Valid(v),
            None => Self::Invalid(InvalidReason::ParseFailure),
        }
    }
}

impl<T> From<Result<T, InvalidReason>> for ValidationOutcome<T> {
    fn from(value: Result<T, InvalidReason>) -> Self {
        match value {
            Ok(v) => Self::Valid(v),
            Err(reason) => Self::Invalid(reason),
        }
    }
}

impl<T> From<ValidationOutcome<T>> for Result<T, InvalidReason> {
    fn from(value: ValidationOutcome<T>) -> Self {
        match value {
            ValidationOutcome::Valid(v) => Ok(v),
            ValidationOutcome::Invalid(reason) => Err(reason),
        }
    }
}
