//! # inputkit
//!
//! A toolkit for reading validated values from a console.
//!
//! ## Features
//!
//! - **Typed prompts** - integers, floats, booleans, lines and dates that
//!   never panic or raise on bad input; see [`terminal::Prompt`]
//! - **Format validators** - email, phone (flexible and strict), ISBN,
//!   credit card and ISO date; see [`format::validate_format`]
//! - **Checksums** - ISBN-10, ISBN-13 and Luhn; see [`checksum`]
//! - **Menu selector** - a numbered list that loops until a valid choice;
//!   see [`terminal::Menu`]
//!
//! ("json-config" feature)
//! - **Configuration from JSON** - custom boolean keywords and sentinels
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use inputkit::terminal::{Menu, Prompt, StdinSource};
//!
//! let mut prompt = Prompt::new(StdinSource::new());
//! let mut out = std::io::stdout();
//!
//! let selection = Menu::new(["Register a book", "Exit"])
//!     .with_error_message("Choose 1 or 2")
//!     .select(&mut prompt, &mut out);
//!
//! if let Ok(selection) = selection {
//!     if selection.choice == 1 {
//!         match prompt.ask_isbn() {
//!             Some(isbn) => println!("Registered {}", isbn),
//!             None => eprintln!("That is not a valid ISBN"),
//!         }
//!     }
//! }
//! ```
//!
//! ## Validation without a terminal
//!
//! ```rust
//! use inputkit::format::{validate_format, FormatName};
//! use inputkit::{InvalidReason, ValidationOutcome};
//!
//! assert!(validate_format(FormatName::PhoneStrict, "123456789012").is_valid());
//! assert_eq!(
//!     validate_format(FormatName::Isbn, "9780306406158"),
//!     ValidationOutcome::Invalid(InvalidReason::ChecksumMismatch)
//! );
//! ```
//!
//! ## Error Handling
//!
//! Bad input is never an error: it is a [`ValidationOutcome::Invalid`]
//! carrying an [`InvalidReason`]. Only a dead input stream
//! ([`terminal::InputError`]) is returned as an `Err`.

pub mod config;
pub mod date;
pub mod format;
pub mod terminal;

pub use inputkit_core::checksum;
pub use inputkit_core::{InvalidReason, ValidationOutcome};
