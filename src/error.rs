//! Crate error type.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Every character class is disabled, there is nothing to draw from.
    #[error("no character class selected")]
    NoCharacterClasses,

    #[error("password length {length} exceeds the maximum of {max}")]
    LengthTooLong { length: usize, max: usize },

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
