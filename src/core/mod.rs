//! # Core Line Editor
//!
//! The editing engine. It knows nothing about which terminal it talks to:
//! it reads bytes from any `Read` and writes ANSI output to any `Write`.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • LineState (buffer)   │
//!                    │  • InputState (parser)  │
//!                    │  • InputDriver (loop)   │
//!                    │                         │
//!                    │  No device. No modes.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    term    │                          │   tests    │
//!     │ (/dev/tty, │                          │ (in-memory │
//!     │  raw mode) │                          │  streams)  │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`line_state`]: The buffer and cursor, and the patch each edit produces
//! - [`patch`]: `DisplayPatch` and the escape sequences that render it
//! - [`input`]: Byte classification and the escape-sequence state machine
//! - [`driver`]: The read loop tying it all together
//! - [`outcome`]: How a read ends
//! - [`config`]: Settings for the binary

pub mod config;
pub mod driver;
pub mod input;
pub mod line_state;
pub mod outcome;
pub mod patch;

// Re-export commonly used types for convenience
pub use driver::InputDriver;
pub use line_state::LineState;
pub use outcome::{EditError, EditOutcome};
pub use patch::DisplayPatch;
