//! # Input Driver
//!
//! The read loop. Owns the device streams, the line and the parser state
//! for the duration of one read.
//!
//! ```text
//! flush ──▶ read byte ──▶ InputState::step ──▶ LineState ──▶ DisplayPatch::write_to
//!   ▲                                                               │
//!   └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! Output is buffered and flushed before every blocking read, so the user
//! sees each keystroke's effect before the next one is awaited. Input is
//! never read ahead: every `read` asks for exactly one byte, so typeahead
//! past the accepted line stays on the device for the next read. Any device
//! error ends the read; nothing is retried.

use std::io::{self, BufWriter, Read, Write};

use log::{debug, info, trace};

use crate::core::input::{Action, EscapeSequence, InputState};
use crate::core::line_state::LineState;
use crate::core::outcome::{EditError, EditOutcome};
use crate::core::patch::{DisplayPatch, ring_bell};

pub struct InputDriver<R: Read, W: Write> {
    input: R,
    output: BufWriter<W>,
    line: LineState,
    state: InputState,
    bell: bool,
}

impl<R: Read, W: Write> InputDriver<R, W> {
    /// `reader` and `writer` must already be in raw mode (no echo, no line
    /// buffering, no signal generation).
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            input: reader,
            output: BufWriter::new(writer),
            line: LineState::new(),
            state: InputState::default(),
            bell: true,
        }
    }

    /// Ring the bell on malformed escape sequences (on by default).
    pub fn with_bell(mut self, enabled: bool) -> Self {
        self.bell = enabled;
        self
    }

    pub fn line(&self) -> &LineState {
        &self.line
    }

    /// Everything written so far is flushed once `run` returns `Ok`.
    pub fn output(&self) -> &W {
        self.output.get_ref()
    }

    /// Edit until the line is accepted, interrupted, or the input ends.
    ///
    /// The line is handed out in `EditOutcome::Line` and the driver is left
    /// empty; it is dropped on every other outcome.
    pub fn run(&mut self) -> Result<EditOutcome, EditError> {
        info!("Line edit session started");

        loop {
            self.output.flush().map_err(EditError::Write)?;

            let Some(byte) = self.next_byte()? else {
                info!("Input ended after {} bytes", self.line.len());
                return Ok(EditOutcome::EndOfInput);
            };

            let (next, action) = self.state.step(byte);
            // Typed bytes stay out of the log
            if !matches!(action, Action::Insert(_)) {
                trace!("{:?} -> {:?}: {:?}", self.state, next, action);
            }
            self.state = next;

            if let Some(outcome) = self.apply(action)? {
                return Ok(outcome);
            }
        }
    }

    /// One byte per `read`. A signal-interrupted read is not a device error.
    fn next_byte(&mut self) -> Result<Option<u8>, EditError> {
        let mut byte = [0u8; 1];
        loop {
            match self.input.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(EditError::Read(e)),
            }
        }
    }

    /// Apply one action. Returns the outcome when the read is over.
    fn apply(&mut self, action: Action) -> Result<Option<EditOutcome>, EditError> {
        match action {
            Action::Pending => {}
            Action::Insert(byte) => {
                let patch = self.line.insert(byte);
                self.write_patch(Some(patch))?;
            }
            Action::Backspace => {
                let patch = self.line.backspace();
                self.write_patch(patch)?;
            }
            Action::Accept => {
                let line = std::mem::take(&mut self.line).into_line();
                info!("Line accepted ({} bytes)", line.len());
                return Ok(Some(EditOutcome::Line(line)));
            }
            Action::Interrupt => {
                info!("Line edit interrupted");
                self.line = LineState::new();
                return Ok(Some(EditOutcome::Interrupted));
            }
            Action::Escape(sequence) => {
                debug!("Escape sequence resolved: {:?}", sequence);
                match sequence {
                    EscapeSequence::CursorLeft => {
                        let patch = self.line.move_left();
                        self.write_patch(patch)?;
                    }
                    EscapeSequence::CursorRight => {
                        let patch = self.line.move_right();
                        self.write_patch(patch)?;
                    }
                    EscapeSequence::Ignored => {}
                    EscapeSequence::Malformed => {
                        if self.bell {
                            ring_bell(&mut self.output).map_err(EditError::Write)?;
                        }
                    }
                }
            }
        }
        Ok(None)
    }

    fn write_patch(&mut self, patch: Option<DisplayPatch>) -> Result<(), EditError> {
        match patch {
            Some(patch) => patch.write_to(&mut self.output).map_err(EditError::Write),
            None => Ok(()),
        }
    }
}
