//! # Edit Outcome
//!
//! How a read ends. A finished line, a user cancel and the end of the input
//! stream are all normal outcomes. Device failures are errors.

use std::fmt;
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Line accepted with Enter or ^D
    Line(Vec<u8>),
    /// User pressed ^C; whatever was typed is dropped
    Interrupted,
    /// Input stream closed before the line was accepted
    EndOfInput,
}

impl EditOutcome {
    /// The accepted line as text, replacing invalid UTF-8.
    pub fn into_string_lossy(self) -> Option<String> {
        match self {
            EditOutcome::Line(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum EditError {
    /// Opening the terminal or switching its mode failed
    Device(io::Error),
    Read(io::Error),
    Write(io::Error),
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::Device(e) => write!(f, "terminal device error: {e}"),
            EditError::Read(e) => write!(f, "terminal read failed: {e}"),
            EditError::Write(e) => write!(f, "terminal write failed: {e}"),
        }
    }
}

impl std::error::Error for EditError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EditError::Device(e) | EditError::Read(e) | EditError::Write(e) => Some(e),
        }
    }
}
