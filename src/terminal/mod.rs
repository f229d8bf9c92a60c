//! Shared terminal utilities.
//!
//! ANSI colours, box drawing and the raw-mode guard.

mod output;
mod raw_mode;

pub use output::*;
pub use raw_mode::*;
