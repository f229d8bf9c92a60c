//! Password generation.

pub mod charset;
mod generate;

use std::fmt;

use zeroize::Zeroize;

pub use charset::{CharClass, ClassSet};
pub use generate::{generate, generate_batch};

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 128;
pub const DEFAULT_LENGTH: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: ClassSet,
    pub exclude_similar: bool,
}

impl GenerationRequest {
    /// All four classes, similar characters allowed.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            classes: ClassSet::all(),
            exclude_similar: false,
        }
    }

    pub fn with_classes(mut self, classes: ClassSet) -> Self {
        self.classes = classes;
        self
    }

    pub fn exclude_similar(mut self, exclude: bool) -> Self {
        self.exclude_similar = exclude;
        self
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH)
    }
}

/// A generated password. The buffer is wiped on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    pub(crate) fn new(password: String) -> Self {
        Self(password)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for GeneratedPassword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Keep passwords out of debug output and logs.
impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeneratedPassword(<{} chars>)", self.len())
    }
}

impl Drop for GeneratedPassword {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_enables_all_classes() {
        let req = GenerationRequest::default();
        assert_eq!(req.length, DEFAULT_LENGTH);
        assert_eq!(req.classes, ClassSet::all());
        assert!(!req.exclude_similar);
    }

    #[test]
    fn debug_hides_contents() {
        let p = GeneratedPassword::new("hunter2".into());
        assert_eq!(format!("{p:?}"), "GeneratedPassword(<7 chars>)");
    }
}
