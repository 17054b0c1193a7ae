//! # Menu selector
//!
//! Prints a numbered list of options and keeps asking for a number until one
//! in `[1, N]` is entered. Non-numeric and out-of-range input are handled
//! the same way: the optional error message is printed and the menu asks
//! again. There is no retry limit; the loop ends on a valid choice, when the
//! input stream dies, or when its [`CancelToken`] is triggered.
//!
//! ```rust
//! use inputkit::terminal::{Menu, Prompt, ReaderSource};
//!
//! let mut prompt = Prompt::new(ReaderSource::new("abc\n5\n2\n".as_bytes()));
//! let mut out = Vec::new();
//!
//! let selection = Menu::new(["Add", "Remove", "Quit"])
//!     .with_error_message("Pick 1, 2 or 3")
//!     .select(&mut prompt, &mut out)
//!     .unwrap();
//!
//! assert_eq!(selection.choice, 2);
//! assert_eq!(selection.reprompts, 2);
//! ```
use super::prompt::Prompt;
use super::source::{InputError, InputSource};
use inputkit_core::{InvalidReason, ValidationOutcome};
use std::{
    error::Error,
    fmt::Display,
    io::{self, Write},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

/// A shareable flag that stops a running [`Menu::select`] at its next iteration.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Where the selector goes after reading one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    /// A 1-indexed choice within the options.
    Accepted(usize),
    /// The answer was rejected; ask again.
    Reprompting(InvalidReason),
}

/// The accepted choice and how many answers were rejected before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub choice: usize,
    pub reprompts: usize,
}

#[derive(Debug)]
pub enum MenuError {
    /// A menu needs at least one option.
    Empty,
    Cancelled,
    Input(InputError),
    Output(io::Error),
}

impl Display for MenuError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "The menu has no options"),
            Self::Cancelled => write!(f, "The menu selection was cancelled"),
            Self::Input(e) => write!(f, "{}", e),
            Self::Output(e) => write!(f, "Couldn't write output => {}", e),
        }
    }
}

impl Error for MenuError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Input(e) => Some(e),
            Self::Output(e) => Some(e),
            Self::Empty | Self::Cancelled => None,
        }
    }
}

impl From<InputError> for MenuError {
    fn from(value: InputError) -> Self {
        Self::Input(value)
    }
}

impl From<io::Error> for MenuError {
    fn from(value: io::Error) -> Self {
        Self::Output(value)
    }
}

/// A bounded choice between `N >= 1` options.
#[derive(Debug, Clone)]
pub struct Menu {
    options: Vec<String>,
    error_message: Option<String>,
    cancel: Option<CancelToken>,
}

impl Menu {
    pub fn new<I>(options: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            error_message: None,
            cancel: None,
        }
    }

    /// Printed after every rejected answer. Without it the menu re-prompts silently.
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Writes `1.- first`, `2.- second`, ...
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (i, option) in self.options.iter().enumerate() {
            writeln!(out, "{}.- {}", i + 1, option)?;
        }
        out.flush()
    }

    /// Maps one integer read to the next state.
    pub fn transition(&self, answer: ValidationOutcome<i32>) -> MenuState {
        let bounded = answer.and_then(|n| match usize::try_from(n) {
            Ok(choice) if (1..=self.options.len()).contains(&choice) => {
                ValidationOutcome::Valid(choice)
            }
            _ => ValidationOutcome::Invalid(InvalidReason::OutOfRange),
        });

        match bounded {
            ValidationOutcome::Valid(choice) => MenuState::Accepted(choice),
            ValidationOutcome::Invalid(reason) => MenuState::Reprompting(reason),
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }

    /// Prints the options and loops until a valid choice is made.
    pub fn select<S, W>(&self, prompt: &mut Prompt<S>, out: &mut W) -> Result<Selection, MenuError>
    where
        S: InputSource,
        W: Write,
    {
        if self.options.is_empty() {
            return Err(MenuError::Empty);
        }

        self.render(out)?;

        let mut reprompts = 0;
        loop {
            if self.is_cancelled() {
                tracing::debug!(reprompts, "menu selection cancelled");
                return Err(MenuError::Cancelled);
            }

            match self.transition(prompt.read_int()?) {
                MenuState::Accepted(choice) => {
                    tracing::debug!(choice, reprompts, "menu choice accepted");
                    return Ok(Selection { choice, reprompts });
                }
                MenuState::Reprompting(reason) => {
                    reprompts += 1;
                    tracing::trace!(%reason, reprompts, "menu answer rejected");
                    if let Some(message) = &self.error_message {
                        writeln!(out, "{}", message)?;
                        out.flush()?;
                    }
                }
            }
        }
    }
}

/// Shows `options` and returns the 1-indexed choice, re-prompting silently.
pub fn display_menu<S, W>(options: &[&str], prompt: &mut Prompt<S>, out: &mut W) -> Result<usize, MenuError>
where
    S: InputSource,
    W: Write,
{
    Menu::new(options.iter().copied())
        .select(prompt, out)
        .map(|selection| selection.choice)
}

/// Like [`display_menu`], printing `error_message` after each rejected answer.
pub fn display_menu_with_error<S, W>(
    options: &[&str],
    error_message: &str,
    prompt: &mut Prompt<S>,
    out: &mut W,
) -> Result<usize, MenuError>
where
    S: InputSource,
    W: Write,
{
    Menu::new(options.iter().copied())
        .with_error_message(error_message)
        .select(prompt, out)
        .map(|selection| selection.choice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::ReaderSource;

    fn prompt(input: &str) -> Prompt<ReaderSource<&[u8]>> {
        Prompt::new(ReaderSource::new(input.as_bytes()))
    }

    #[test]
    fn test_menu_accepts_after_two_reprompts() {
        let mut p = prompt("abc\n5\n2\n");
        let mut out = Vec::new();

        let selection = Menu::new(["Red", "Green", "Blue"])
            .select(&mut p, &mut out)
            .unwrap();

        assert_eq!(selection, Selection { choice: 2, reprompts: 2 });
        // silent without an error message
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1.- Red\n2.- Green\n3.- Blue\n"
        );
    }

    #[test]
    fn test_menu_prints_error_message_per_rejection() {
        let mut p = prompt("0\n-4\nfour\n4\n1\n");
        let mut out = Vec::new();

        let choice =
            display_menu_with_error(&["a", "b", "c"], "Invalid option!", &mut p, &mut out).unwrap();

        assert_eq!(choice, 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1.- a\n2.- b\n3.- c\n".to_owned() + &"Invalid option!\n".repeat(4)
        );
    }

    #[test]
    fn test_menu_reprompts_on_non_utf8_answer() {
        let mut p = Prompt::new(ReaderSource::new(&b"\xff\xfe\n2\n"[..]));
        let mut out = Vec::new();

        let selection = Menu::new(["a", "b", "c"])
            .with_error_message("bad")
            .select(&mut p, &mut out)
            .unwrap();

        assert_eq!(selection, Selection { choice: 2, reprompts: 1 });
        assert!(String::from_utf8(out).unwrap().ends_with("bad\n"));
    }

    #[test]
    fn test_menu_single_option() {
        let mut p = prompt("2\n1\n");
        let mut out = Vec::new();
        assert_eq!(display_menu(&["only"], &mut p, &mut out).unwrap(), 1);
    }

    #[test]
    fn test_menu_bounds_are_inclusive() {
        let menu = Menu::new(["a", "b", "c"]);
        assert_eq!(menu.transition(ValidationOutcome::Valid(1)), MenuState::Accepted(1));
        assert_eq!(menu.transition(ValidationOutcome::Valid(3)), MenuState::Accepted(3));
        assert_eq!(
            menu.transition(ValidationOutcome::Valid(4)),
            MenuState::Reprompting(InvalidReason::OutOfRange)
        );
        assert_eq!(
            menu.transition(ValidationOutcome::Valid(-1)),
            MenuState::Reprompting(InvalidReason::OutOfRange)
        );
        assert_eq!(
            menu.transition(ValidationOutcome::Invalid(InvalidReason::ParseFailure)),
            MenuState::Reprompting(InvalidReason::ParseFailure)
        );
    }

    #[test]
    fn test_menu_empty_is_an_error() {
        let mut p = prompt("1\n");
        let mut out = Vec::new();
        let res = Menu::new(Vec::<String>::new()).select(&mut p, &mut out);
        assert!(matches!(res, Err(MenuError::Empty)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_menu_stream_exhausted() {
        let mut p = prompt("9\nnope\n");
        let mut out = Vec::new();
        let res = display_menu_with_error(&["a", "b"], "again", &mut p, &mut out);
        assert!(matches!(res, Err(MenuError::Input(InputError::Exhausted))));
    }

    #[test]
    fn test_menu_cancelled() {
        let token = CancelToken::new();
        let menu = Menu::new(["a", "b"]).with_cancel_token(token.clone());
        token.cancel();

        let mut p = prompt("1\n");
        let mut out = Vec::new();
        assert!(matches!(
            menu.select(&mut p, &mut out),
            Err(MenuError::Cancelled)
        ));
        // the pending answer is left unread
        assert_eq!(p.ask_int(), 1);
    }

    struct ClosedOutput;

    impl Write for ClosedOutput {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_menu_write_failure_is_output_error() {
        let mut p = prompt("1\n");
        let err = Menu::new(["a"]).select(&mut p, &mut ClosedOutput).unwrap_err();
        assert!(matches!(err, MenuError::Output(_)));
        assert!(format!("{}", err).starts_with("Couldn't write output => "));
        // nothing was read
        assert_eq!(p.ask_int(), 1);
    }

    #[test]
    fn test_menu_error_display() {
        let err = MenuError::from(InputError::Exhausted);
        assert_eq!(format!("{}", err), "The input stream is exhausted");
        assert!(err.source().is_some());
    }
}
