//! Password generation and crack-time strength estimation.
//!
//! The generator builds a pool from the enabled character classes,
//! guarantees one character from each, fills to length and shuffles:
//!
//! ```no_run
//! use passgauge::pass::{GenerationRequest, generate};
//! use passgauge::rand::OsRandom;
//! use passgauge::strength::assess;
//!
//! let password = generate(&GenerationRequest::new(16), &mut OsRandom).unwrap();
//! let report = assess(password.as_str());
//! println!("{} ({}/10)", report.crack_time.text, report.score.value());
//! ```
//!
//! The estimator accepts any string and is deterministic. Persisted history
//! goes through a [`history::KeyValueStore`] supplied by the caller.

pub mod clipboard;
pub mod error;
pub mod history;
pub mod pass;
pub mod rand;
pub mod settings;
pub mod strength;

pub use error::{Error, Result};
pub use history::History;
pub use pass::{GeneratedPassword, GenerationRequest, generate};
pub use strength::{StrengthAssessment, assess};
