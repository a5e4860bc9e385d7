//! Miniline: a small in-place line editor for terminal prompts.
//!
//! ```no_run
//! use miniline::EditOutcome;
//!
//! match miniline::read_line("name? ") {
//!     Ok(EditOutcome::Line(bytes)) => println!("hello {}", String::from_utf8_lossy(&bytes)),
//!     Ok(EditOutcome::Interrupted) => eprintln!("cancelled"),
//!     Ok(EditOutcome::EndOfInput) => {}
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

pub mod core;
pub mod term;

#[cfg(test)]
pub mod test_support;

pub use crate::core::{EditError, EditOutcome};
pub use crate::term::{EditorOptions, read_line, read_line_with};
