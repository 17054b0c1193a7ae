//! # Typed prompts
//!
//! [`Prompt`] reads one unit of input and converts it to the requested
//! type. Numbers and booleans are read as a single token (the rest of that
//! line is dropped); strings, dates and formatted identifiers are read as a
//! whole line.
//!
//! Two layers are offered:
//! - `read_*` returns `Result<ValidationOutcome<T>, InputError>`. A bad value
//!   is `Ok(Invalid(reason))`; only a dead stream is an `Err`.
//! - `ask_*` collapses every failure into a sentinel (`ask_int`, `ask_float`)
//!   or `None` (everything else), for call sites that just want a value.
//!
//! ```rust
//! use inputkit::terminal::{Prompt, ReaderSource};
//!
//! let input = "42\nnope\n9780306406157\n";
//! let mut prompt = Prompt::new(ReaderSource::new(input.as_bytes()));
//!
//! assert_eq!(prompt.ask_int(), 42);
//! assert_eq!(prompt.ask_int(), -1);
//! assert_eq!(prompt.ask_isbn().as_deref(), Some("9780306406157"));
//! assert_eq!(prompt.ask_integer(), None); // stream exhausted
//! ```
use super::source::{InputError, InputSource};
use crate::config::PromptConfig;
use crate::date::parse_iso_date;
use crate::format::{FormatName, validate_format};
use chrono::NaiveDate;
use inputkit_core::ValidationOutcome;
use std::io::Write;
use std::str::FromStr;

/// Typed reads over an [`InputSource`].
#[derive(Debug)]
pub struct Prompt<S> {
    source: S,
    config: PromptConfig,
}

impl<S: InputSource> Prompt<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, PromptConfig::default())
    }

    pub fn with_config(source: S, config: PromptConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &PromptConfig {
        &self.config
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }

    /// One token; whatever follows it on the same line is dropped so the next
    /// prompt starts on a fresh line.
    fn read_token(&mut self) -> Result<String, InputError> {
        let token = self.source.next_token()?;
        self.source.discard_line()?;
        Ok(token)
    }

    fn parse_token<T: FromStr>(&mut self, kind: &'static str) -> Result<ValidationOutcome<T>, InputError> {
        let token = self.read_token()?;
        let outcome: ValidationOutcome<T> = token.parse::<T>().ok().into();
        if outcome.is_invalid() {
            tracing::debug!(kind, token = %token, "token rejected");
        }
        Ok(outcome)
    }

    pub fn read_int(&mut self) -> Result<ValidationOutcome<i32>, InputError> {
        self.parse_token("int")
    }

    pub fn read_float(&mut self) -> Result<ValidationOutcome<f32>, InputError> {
        self.parse_token("float")
    }

    pub fn read_double(&mut self) -> Result<ValidationOutcome<f64>, InputError> {
        self.parse_token("double")
    }

    /// Resolves one token against the configured [`crate::config::BooleanKeywordSet`].
    pub fn read_bool(&mut self) -> Result<ValidationOutcome<bool>, InputError> {
        let token = self.read_token()?;
        let outcome = self.config.keywords.resolve(&token);
        if outcome.is_invalid() {
            tracing::debug!(token = %token, "boolean keyword rejected");
        }
        Ok(outcome)
    }

    /// A full line, verbatim.
    pub fn read_string(&mut self) -> Result<String, InputError> {
        self.source.next_line()
    }

    /// A `YYYY-MM-DD` line. The original text is returned when it is a real date.
    pub fn read_date(&mut self) -> Result<ValidationOutcome<String>, InputError> {
        let line = self.source.next_line()?;
        Ok(parse_iso_date(&line).map(|_| line))
    }

    /// Same as [`Prompt::read_date`] but yields the parsed date.
    pub fn read_naive_date(&mut self) -> Result<ValidationOutcome<NaiveDate>, InputError> {
        let line = self.source.next_line()?;
        Ok(parse_iso_date(&line))
    }

    /// A line validated against the named format.
    pub fn read_format(&mut self, name: FormatName) -> Result<ValidationOutcome<String>, InputError> {
        let line = self.source.next_line()?;
        let outcome = validate_format(name, &line);
        if let Some(reason) = outcome.reason() {
            tracing::debug!(format = %name, %reason, "line rejected");
        }
        Ok(outcome)
    }

    pub fn read_email(&mut self) -> Result<ValidationOutcome<String>, InputError> {
        self.read_format(FormatName::Email)
    }

    pub fn read_phone_flexible(&mut self) -> Result<ValidationOutcome<String>, InputError> {
        self.read_format(FormatName::PhoneFlexible)
    }

    pub fn read_phone_strict(&mut self) -> Result<ValidationOutcome<String>, InputError> {
        self.read_format(FormatName::PhoneStrict)
    }

    pub fn read_isbn(&mut self) -> Result<ValidationOutcome<String>, InputError> {
        self.read_format(FormatName::Isbn)
    }

    pub fn read_credit_card(&mut self) -> Result<ValidationOutcome<String>, InputError> {
        self.read_format(FormatName::CreditCard)
    }

    /// Prints `question` and repeats `read` until it yields a valid value,
    /// printing the rejection reason after each miss. Only a stream failure
    /// ends the loop early.
    pub fn ask_until<T, W, F>(&mut self, out: &mut W, question: &str, mut read: F) -> Result<T, InputError>
    where
        W: Write,
        F: FnMut(&mut Self) -> Result<ValidationOutcome<T>, InputError>,
    {
        loop {
            writeln!(out, "{}", question)?;
            out.flush()?;

            match read(&mut *self)? {
                ValidationOutcome::Valid(value) => break Ok(value),
                ValidationOutcome::Invalid(reason) => writeln!(out, "{}, try again!", reason)?,
            }
        }
    }

    /// Leaves `None` for both a rejected value and a dead stream.
    fn settle<T>(result: Result<ValidationOutcome<T>, InputError>) -> Option<T> {
        match result {
            Ok(outcome) => outcome.ok(),
            Err(e) => {
                tracing::debug!(error = %e, "prompt read failed");
                None
            }
        }
    }

    /// The integer read, or the configured sentinel (`-1` by default).
    pub fn ask_int(&mut self) -> i32 {
        let sentinel = self.config.int_sentinel;
        Self::settle(self.read_int()).unwrap_or(sentinel)
    }

    pub fn ask_integer(&mut self) -> Option<i32> {
        Self::settle(self.read_int())
    }

    /// The float read, or the configured sentinel (`-1.0` by default).
    pub fn ask_float(&mut self) -> f32 {
        let sentinel = self.config.float_sentinel;
        Self::settle(self.read_float()).unwrap_or(sentinel)
    }

    pub fn ask_double(&mut self) -> Option<f64> {
        Self::settle(self.read_double())
    }

    pub fn ask_bool(&mut self) -> Option<bool> {
        Self::settle(self.read_bool())
    }

    pub fn ask_string(&mut self) -> Option<String> {
        Self::settle(self.read_string().map(ValidationOutcome::Valid))
    }

    pub fn ask_date(&mut self) -> Option<String> {
        Self::settle(self.read_date())
    }

    pub fn ask_email(&mut self) -> Option<String> {
        Self::settle(self.read_email())
    }

    pub fn ask_phone_flexible(&mut self) -> Option<String> {
        Self::settle(self.read_phone_flexible())
    }

    pub fn ask_phone_strict(&mut self) -> Option<String> {
        Self::settle(self.read_phone_strict())
    }

    pub fn ask_isbn(&mut self) -> Option<String> {
        Self::settle(self.read_isbn())
    }

    pub fn ask_credit_card(&mut self) -> Option<String> {
        Self::settle(self.read_credit_card())
    }
}
