//! # inputkit core
//!
//! The dependency-free half of `inputkit`: the [`ValidationOutcome`] result
//! type shared by every validator and prompt, and the checksum algorithms
//! used to verify structured identifiers.
//!
//! ## Example
//! ```rust
//! use inputkit_core::checksum::{isbn13_checksum, luhn_checksum};
//!
//! assert!(isbn13_checksum("9780306406157"));
//! assert!(luhn_checksum("4532015112830366"));
//! assert!(!luhn_checksum("1234567812345678"));
//! ```

pub mod checksum;
pub mod outcome;

pub use outcome::{InvalidReason, ValidationOutcome};
