//! # Input Classification
//!
//! Byte-at-a-time state machine over the raw input stream.
//!
//! ```text
//!            ESC              '['
//!  Normal ─────────▶ AwaitingBracket ─────────▶ AwaitingCode
//!    ▲                     │ other (bell)             │ any
//!    └─────────────────────┴──────────────────────────┘
//! ```
//!
//! `step` is pure: it never touches the line or the terminal. New
//! sequences are added as states and arms here, the driver stays as is.

use log::debug;

/// ^C
pub const INTERRUPT: u8 = 0x03;
/// ^D
pub const END_OF_TRANSMISSION: u8 = 0x04;
pub const CARRIAGE_RETURN: u8 = b'\r';
pub const ESCAPE: u8 = 0x1b;
/// DEL, sent by the backspace key in raw mode
pub const DELETE: u8 = 0x7f;

const CSI_BRACKET: u8 = b'[';
const ARROW_UP: u8 = b'A';
const ARROW_DOWN: u8 = b'B';
const ARROW_RIGHT: u8 = b'C';
const ARROW_LEFT: u8 = b'D';

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputState {
    #[default]
    Normal,
    /// ESC seen
    AwaitingBracket,
    /// ESC '[' seen
    AwaitingCode,
}

/// A resolved escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeSequence {
    CursorLeft,
    CursorRight,
    /// Well-formed but without effect: up/down (kept free for history) and
    /// unknown final bytes
    Ignored,
    /// ESC not followed by '['
    Malformed,
}

/// What the driver should do with the byte just consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Byte absorbed into an escape sequence still in progress
    Pending,
    Insert(u8),
    Backspace,
    Accept,
    Interrupt,
    Escape(EscapeSequence),
}

impl InputState {
    /// Transition on one input byte.
    pub fn step(self, byte: u8) -> (InputState, Action) {
        match self {
            InputState::Normal => match byte {
                END_OF_TRANSMISSION | CARRIAGE_RETURN => (InputState::Normal, Action::Accept),
                DELETE => (InputState::Normal, Action::Backspace),
                INTERRUPT => (InputState::Normal, Action::Interrupt),
                ESCAPE => (InputState::AwaitingBracket, Action::Pending),
                _ => (InputState::Normal, Action::Insert(byte)),
            },
            InputState::AwaitingBracket => match byte {
                CSI_BRACKET => (InputState::AwaitingCode, Action::Pending),
                _ => (InputState::Normal, Action::Escape(EscapeSequence::Malformed)),
            },
            InputState::AwaitingCode => {
                let sequence = match byte {
                    ARROW_RIGHT => EscapeSequence::CursorRight,
                    ARROW_LEFT => EscapeSequence::CursorLeft,
                    // reserved for history recall
                    ARROW_UP | ARROW_DOWN => EscapeSequence::Ignored,
                    // unsupported final byte: dropped without a bell
                    other => {
                        debug!("Dropping unsupported sequence ESC [ {:#04x}", other);
                        EscapeSequence::Ignored
                    }
                };
                (InputState::Normal, Action::Escape(sequence))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(bytes: &[u8]) -> Vec<Action> {
        let mut state = InputState::default();
        bytes
            .iter()
            .map(|&b| {
                let (next, action) = state.step(b);
                state = next;
                action
            })
            .collect()
    }

    #[test]
    fn test_control_bytes() {
        assert_eq!(
            feed(&[CARRIAGE_RETURN, END_OF_TRANSMISSION, DELETE, INTERRUPT]),
            vec![Action::Accept, Action::Accept, Action::Backspace, Action::Interrupt]
        );
    }

    #[test]
    fn test_ordinary_bytes_insert() {
        assert_eq!(
            feed(b"a\t\n"),
            vec![Action::Insert(b'a'), Action::Insert(b'\t'), Action::Insert(b'\n')]
        );
    }

    #[test]
    fn test_arrow_sequences() {
        assert_eq!(
            feed(b"\x1b[D\x1b[C"),
            vec![
                Action::Pending,
                Action::Pending,
                Action::Escape(EscapeSequence::CursorLeft),
                Action::Pending,
                Action::Pending,
                Action::Escape(EscapeSequence::CursorRight),
            ]
        );
    }

    #[test]
    fn test_up_down_are_ignored() {
        let actions = feed(b"\x1b[A\x1b[B");
        assert_eq!(actions[2], Action::Escape(EscapeSequence::Ignored));
        assert_eq!(actions[5], Action::Escape(EscapeSequence::Ignored));
    }

    #[test]
    fn test_unknown_final_byte_is_dropped() {
        assert_eq!(
            feed(b"\x1b[Zq"),
            vec![
                Action::Pending,
                Action::Pending,
                Action::Escape(EscapeSequence::Ignored),
                Action::Insert(b'q'),
            ]
        );
    }

    #[test]
    fn test_escape_without_bracket_is_malformed() {
        assert_eq!(
            feed(b"\x1bxy"),
            vec![
                Action::Pending,
                Action::Escape(EscapeSequence::Malformed),
                Action::Insert(b'y'),
            ]
        );
    }

    #[test]
    fn test_control_bytes_inside_sequence_are_not_commands() {
        // ^C right after ESC is swallowed by the malformed sequence
        assert_eq!(
            feed(&[ESCAPE, INTERRUPT]),
            vec![Action::Pending, Action::Escape(EscapeSequence::Malformed)]
        );
    }
}
