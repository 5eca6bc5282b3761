//! Countdown error types.
//!
//! Invalid or past times are not errors: they are reported to the user
//! and the prompt asks again. These variants end the prompt loop.

use std::io;

use thiserror::Error;

/// Errors that can end the countdown prompt.
#[derive(Debug, Error)]
pub enum CountdownError {
    /// The user pressed Ctrl+C while being prompted.
    #[error("prompt interrupted")]
    Interrupted,

    /// Standard input reached end of file.
    #[error("no more input")]
    InputClosed,

    /// Reading from the terminal failed.
    #[error("failed to read cake time")]
    Prompt(#[source] io::Error),
}

impl CountdownError {
    /// Returns true if the user chose to leave the prompt.
    ///
    /// Leaving is a clean exit, not a failure.
    #[must_use]
    pub fn is_user_exit(&self) -> bool {
        matches!(self, Self::Interrupted | Self::InputClosed)
    }
}

impl From<io::Error> for CountdownError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::Interrupted => Self::Interrupted,
            io::ErrorKind::UnexpectedEof => Self::InputClosed,
            _ => Self::Prompt(e),
        }
    }
}

impl From<dialoguer::Error> for CountdownError {
    #[allow(unreachable_patterns)]
    fn from(e: dialoguer::Error) -> Self {
        match e {
            dialoguer::Error::IO(e) => e.into(),
            other => Self::Prompt(io::Error::other(other.to_string())),
        }
    }
}
