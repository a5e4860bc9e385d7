use log::{debug, warn};

use crossterm::terminal;

/// Holds the terminal in raw mode for as long as it lives.
///
/// The previous mode is restored on drop, so every exit path out of an
/// edit session (accept, ^C, device error, panic unwind) leaves the
/// terminal usable.
#[derive(Debug)]
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn acquire() -> std::io::Result<Self> {
        terminal::enable_raw_mode()?;
        debug!("Raw mode enabled");
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        match terminal::disable_raw_mode() {
            Ok(()) => debug!("Raw mode disabled"),
            Err(e) => warn!("Failed to restore terminal mode: {}", e),
        }
    }
}
