//! # Terminal Adapter
//!
//! Everything that touches the real terminal: opening the device, writing
//! the prompt, bracketing the edit loop with raw mode, and the trailing
//! newline. The editing itself lives in [`crate::core`].
//!
//! On unix the line is edited in place on `/dev/tty`. Elsewhere the prompt
//! is printed and a whole line is read from stdin without editing.

mod raw_mode;

pub use raw_mode::RawModeGuard;

use crate::core::{EditError, EditOutcome};

/// Per-read settings.
#[derive(Debug, Clone)]
pub struct EditorOptions {
    /// Ring the bell on unrecognized escape sequences
    pub bell: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self { bell: true }
    }
}

/// Print `prompt` and read one edited line from the terminal.
///
/// ^C yields `EditOutcome::Interrupted`, never an error.
pub fn read_line(prompt: &str) -> Result<EditOutcome, EditError> {
    read_line_with(prompt, &EditorOptions::default())
}

#[cfg(unix)]
pub fn read_line_with(prompt: &str, options: &EditorOptions) -> Result<EditOutcome, EditError> {
    use std::fs::OpenOptions;
    use std::io::Write;

    use crate::core::InputDriver;

    let tty = OpenOptions::new()
        .read(true)
        .write(true)
        .open("/dev/tty")
        .map_err(EditError::Device)?;

    (&tty)
        .write_all(prompt.as_bytes())
        .and_then(|()| (&tty).flush())
        .map_err(EditError::Write)?;

    let outcome = {
        let _raw_mode = RawModeGuard::acquire().map_err(EditError::Device)?;
        InputDriver::new(&tty, &tty).with_bell(options.bell).run()
    };

    // Back in cooked mode, so a bare LF also returns the carriage
    let newline = (&tty).write_all(b"\n").map_err(EditError::Write);
    let outcome = outcome?;
    newline?;
    Ok(outcome)
}

/// Fallback without line editing: no `/dev/tty` or raw mode to work with.
#[cfg(not(unix))]
pub fn read_line_with(prompt: &str, _options: &EditorOptions) -> Result<EditOutcome, EditError> {
    use std::io::{self, BufRead, Write};

    let mut stdout = io::stdout();
    stdout
        .write_all(prompt.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(EditError::Write)?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line).map_err(EditError::Read)?;
    Ok(whole_line_outcome(read, line))
}

/// Maps a whole-line read (`read` bytes into `line`) to an outcome.
#[cfg_attr(unix, allow(dead_code))]
fn whole_line_outcome(read: usize, mut line: String) -> EditOutcome {
    if read == 0 {
        return EditOutcome::EndOfInput;
    }
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    EditOutcome::Line(line.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_ring_bell() {
        assert!(EditorOptions::default().bell);
    }

    #[test]
    fn test_whole_line_strips_line_ending() {
        assert_eq!(
            whole_line_outcome(7, "hello\r\n".to_string()),
            EditOutcome::Line(b"hello".to_vec())
        );
        assert_eq!(
            whole_line_outcome(4, "abc\n".to_string()),
            EditOutcome::Line(b"abc".to_vec())
        );
    }

    #[test]
    fn test_whole_line_at_end_of_input() {
        assert_eq!(whole_line_outcome(0, String::new()), EditOutcome::EndOfInput);
    }
}
