//! # Terminal interaction
//!
//! Everything that touches an input stream:
//! - [`InputSource`] and its implementations, [`ReaderSource`] and [`StdinSource`]
//! - [`Prompt`], typed reads with graceful failure
//! - [`Menu`], the bounded-choice selector
//!
//! Reads block until a token or line is available. A source belongs to one
//! caller at a time; nothing here is meant to be shared across threads
//! except a [`CancelToken`].

mod menu;
mod prompt;
mod source;

pub use menu::{
    CancelToken, Menu, MenuError, MenuState, Selection, display_menu, display_menu_with_error,
};
pub use prompt::Prompt;
pub use source::{InputError, InputSource, ReaderSource, StdinSource};
