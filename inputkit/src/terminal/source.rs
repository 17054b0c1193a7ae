//! # Input sources
//!
//! An [`InputSource`] hands out whitespace-delimited tokens and whole lines,
//! with the same cursor semantics as a classic console scanner: reading a
//! token leaves the rest of its line pending, and the next line read
//! returns that remainder.
//!
//! End of input is [`InputError::Exhausted`], never an empty value.
//!
//! - [`ReaderSource`] wraps any [`BufRead`] (files, byte slices in tests).
//! - [`StdinSource`] locks stdin for the span of a single read.
use std::{
    error::Error,
    fmt::Display,
    io::{self, BufRead},
};

/// A failure of the input stream itself, as opposed to an invalid value.
#[derive(Debug)]
pub enum InputError {
    /// No more input can be read.
    Exhausted,
    Io(io::Error),
}

impl Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exhausted => write!(f, "The input stream is exhausted"),
            Self::Io(e) => write!(f, "Couldn't read input => {}", e),
        }
    }
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Exhausted => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(value: io::Error) -> Self {
        if value.kind() == io::ErrorKind::UnexpectedEof {
            Self::Exhausted
        } else {
            Self::Io(value)
        }
    }
}

/// A sequential text source.
pub trait InputSource {
    /// Next whitespace-delimited token, crossing line breaks if needed.
    fn next_token(&mut self) -> Result<String, InputError>;

    /// The rest of the current line, or the next full line when nothing is
    /// pending. The line terminator is not included.
    fn next_line(&mut self) -> Result<String, InputError>;

    /// Drops whatever is left of the current line.
    fn discard_line(&mut self) -> Result<(), InputError> {
        self.next_line().map(|_| ())
    }
}

impl<S: InputSource + ?Sized> InputSource for &mut S {
    fn next_token(&mut self) -> Result<String, InputError> {
        (**self).next_token()
    }

    fn next_line(&mut self) -> Result<String, InputError> {
        (**self).next_line()
    }

    fn discard_line(&mut self) -> Result<(), InputError> {
        (**self).discard_line()
    }
}

/// The cursor state shared by every source: the unread tail of the current line.
#[derive(Debug, Default)]
struct LineCursor {
    pending: Option<String>,
}

impl LineCursor {
    /// Bytes that aren't UTF-8 become U+FFFD; the line is consumed either way,
    /// so only a failing reader is an [`InputError::Io`].
    fn read_line<R: BufRead + ?Sized>(reader: &mut R) -> Result<String, InputError> {
        let mut buf = Vec::new();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            tracing::trace!("input source reached end of stream");
            return Err(InputError::Exhausted);
        }

        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }

        match String::from_utf8(buf) {
            Ok(line) => Ok(line),
            Err(e) => {
                tracing::debug!(error = %e.utf8_error(), "decoded input line lossily");
                Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
            }
        }
    }

    fn next_token<R: BufRead + ?Sized>(&mut self, reader: &mut R) -> Result<String, InputError> {
        loop {
            if let Some(rest) = self.pending.take() {
                let rest = rest.trim_start();
                if !rest.is_empty() {
                    let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
                    let (token, tail) = rest.split_at(end);
                    let token = token.to_string();
                    self.pending = Some(tail.to_string());
                    return Ok(token);
                }
            }

            self.pending = Some(Self::read_line(reader)?);
        }
    }

    fn next_line<R: BufRead + ?Sized>(&mut self, reader: &mut R) -> Result<String, InputError> {
        match self.pending.take() {
            Some(rest) => Ok(rest),
            None => Self::read_line(reader),
        }
    }
}

/// An [`InputSource`] over any buffered reader.
///
/// ```rust
/// use inputkit::terminal::{InputSource, ReaderSource};
///
/// let mut source = ReaderSource::new("12 apples\nsecond line\n".as_bytes());
/// assert_eq!(source.next_token().unwrap(), "12");
/// assert_eq!(source.next_line().unwrap(), " apples");
/// assert_eq!(source.next_line().unwrap(), "second line");
/// assert!(source.next_line().is_err());
/// ```
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    cursor: LineCursor,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            cursor: LineCursor::default(),
        }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> InputSource for ReaderSource<R> {
    fn next_token(&mut self) -> Result<String, InputError> {
        self.cursor.next_token(&mut self.reader)
    }

    fn next_line(&mut self) -> Result<String, InputError> {
        self.cursor.next_line(&mut self.reader)
    }
}

/// Standard input. The stdin lock is taken per read and released before the
/// read returns, whether it succeeded or not.
#[derive(Debug, Default)]
pub struct StdinSource {
    cursor: LineCursor,
}

impl StdinSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputSource for StdinSource {
    fn next_token(&mut self) -> Result<String, InputError> {
        let mut handle = io::stdin().lock();
        self.cursor.next_token(&mut handle)
    }

    fn next_line(&mut self) -> Result<String, InputError> {
        let mut handle = io::stdin().lock();
        self.cursor.next_line(&mut handle)
    }
}
