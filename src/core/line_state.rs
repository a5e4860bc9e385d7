//! # Line State
//!
//! The line buffer and the cursor offset into it. Every mutating method
//! returns the `DisplayPatch` that brings the terminal back in sync with
//! the buffer, or `None` when nothing changed.
//!
//! ```text
//! buffer: [ h | e | l | l | o ]
//!                   ^
//!                 cursor = 2  (next insertion point)
//! ```
//!
//! Offsets are raw bytes, not characters.

use crate::core::patch::{Direction, DisplayPatch};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LineState {
    /// Line content entered so far
    buffer: Vec<u8>,
    /// Byte offset in buffer (0..=buffer.len())
    cursor: usize,
}

impl LineState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Insert `byte` at the cursor and advance past it.
    ///
    /// Appending only needs the byte echoed. A mid-line insert shifts the
    /// tail right, so the tail is redrawn behind a saved cursor.
    pub fn insert(&mut self, byte: u8) -> DisplayPatch {
        let appending = self.cursor == self.buffer.len();
        self.buffer.insert(self.cursor, byte);
        self.cursor += 1;

        if appending {
            DisplayPatch::Echo(byte)
        } else {
            DisplayPatch::Splice {
                byte,
                tail: self.buffer[self.cursor..].to_vec(),
            }
        }
    }

    /// Remove the byte before the cursor.
    ///
    /// Returns `None` at the start of the line, whatever follows the cursor.
    pub fn backspace(&mut self) -> Option<DisplayPatch> {
        if self.cursor == 0 {
            return None;
        }

        self.cursor -= 1;
        self.buffer.remove(self.cursor);

        Some(DisplayPatch::Erase {
            tail: self.buffer[self.cursor..].to_vec(),
        })
    }

    pub fn move_left(&mut self) -> Option<DisplayPatch> {
        (self.cursor > 0).then(|| {
            self.cursor -= 1;
            DisplayPatch::Move(Direction::Left)
        })
    }

    pub fn move_right(&mut self) -> Option<DisplayPatch> {
        (self.cursor < self.buffer.len()).then(|| {
            self.cursor += 1;
            DisplayPatch::Move(Direction::Right)
        })
    }

    /// Copy of the line as it stands. Does not touch the state.
    pub fn snapshot(&self) -> Vec<u8> {
        self.buffer.clone()
    }

    /// Consume the state, yielding the finished line.
    pub fn into_line(self) -> Vec<u8> {
        self.buffer
    }
}
