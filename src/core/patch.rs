//! # Display Patches
//!
//! What the terminal must be told after an edit, and how to tell it.
//!
//! Redraws never touch bytes before the cursor. When a suffix has to be
//! rewritten, the cursor position is saved first and restored afterwards,
//! so the visible cursor stays on the logical edit point.

use std::io::{self, Write};

use crossterm::cursor::{MoveLeft, MoveRight, RestorePosition, SavePosition};
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

/// Audible bell (BEL)
pub const BELL: u8 = 0x07;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayPatch {
    /// Byte appended at the end of the line
    Echo(u8),
    /// Byte inserted mid-line; everything after it shifted right
    Splice { byte: u8, tail: Vec<u8> },
    /// Byte before the cursor removed; `tail` is what now follows the cursor
    Erase { tail: Vec<u8> },
    /// Cursor moved one cell, content unchanged
    Move(Direction),
}

impl DisplayPatch {
    /// Queue the patch on `out`. The caller decides when to flush.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            DisplayPatch::Echo(byte) => out.write_all(&[*byte]),
            DisplayPatch::Splice { byte, tail } => {
                out.write_all(&[*byte])?;
                redraw_tail(out, tail)
            }
            DisplayPatch::Erase { tail } => {
                queue!(out, MoveLeft(1), Clear(ClearType::UntilNewLine))?;
                redraw_tail(out, tail)
            }
            DisplayPatch::Move(Direction::Left) => queue!(out, MoveLeft(1)),
            DisplayPatch::Move(Direction::Right) => queue!(out, MoveRight(1)),
        }
    }
}

/// Save cursor, write `tail`, restore cursor. Nothing to do for an empty tail.
fn redraw_tail<W: Write>(out: &mut W, tail: &[u8]) -> io::Result<()> {
    if tail.is_empty() {
        return Ok(());
    }
    queue!(out, SavePosition)?;
    out.write_all(tail)?;
    queue!(out, RestorePosition)
}

pub fn ring_bell<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(&[BELL])
}
