//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::io::{self, Read, Write};
use std::rc::Rc;

use crate::core::{EditError, EditOutcome, InputDriver};

/// A device whose reads always fail.
pub struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "device unplugged"))
    }
}

/// A device whose writes always fail.
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "device unplugged"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// An in-memory terminal: keystrokes in, screen out.
///
/// Clones share state, so one clone can be the driver's reader and another
/// its writer. Every `read` records how much has reached the screen, which
/// shows whether output was flushed before the driver blocked for input.
#[derive(Clone, Default)]
pub struct LoopbackTty {
    inner: Rc<RefCell<LoopbackState>>,
}

#[derive(Default)]
struct LoopbackState {
    keys: Vec<u8>,
    consumed: usize,
    screen: Vec<u8>,
    screen_at_reads: Vec<usize>,
}

impl LoopbackTty {
    pub fn new(keys: &[u8]) -> Self {
        let tty = Self::default();
        tty.inner.borrow_mut().keys = keys.to_vec();
        tty
    }

    /// Bytes that reached the screen so far.
    pub fn screen(&self) -> Vec<u8> {
        self.inner.borrow().screen.clone()
    }

    /// Screen length observed at the start of each read.
    pub fn screen_at_reads(&self) -> Vec<usize> {
        self.inner.borrow().screen_at_reads.clone()
    }

    /// Keystrokes handed out so far.
    pub fn consumed(&self) -> usize {
        self.inner.borrow().consumed
    }
}

impl Read for LoopbackTty {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut state = self.inner.borrow_mut();
        let seen = state.screen.len();
        state.screen_at_reads.push(seen);

        let remaining = &state.keys[state.consumed..];
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        state.consumed += n;
        Ok(n)
    }
}

impl Write for LoopbackTty {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.borrow_mut().screen.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `script` through a driver and hands the driver back for inspection.
pub fn drive(script: &[u8]) -> InputDriver<&[u8], Vec<u8>> {
    let mut driver = InputDriver::new(script, Vec::new());
    let _ = driver.run();
    driver
}

/// Runs `script` and returns the outcome with everything written to the display.
pub fn run_script(script: &[u8]) -> (Result<EditOutcome, EditError>, Vec<u8>) {
    let mut driver = InputDriver::new(script, Vec::new());
    let outcome = driver.run();
    (outcome, driver.output().clone())
}
