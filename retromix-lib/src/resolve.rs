//! Resolution of asset filenames against an externally supplied base directory.

use std::path::{Path, PathBuf};

/// Base directory under which sample and music filenames are resolved.
///
/// The resolver is handed to [`crate::AudioSystem`] at construction time; the
/// facade itself never guesses where assets live.
#[derive(Debug, Clone)]
pub struct LoadPath {
    base: PathBuf,
}

impl LoadPath {
    /// Create a resolver rooted at `base`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Join `filename` onto the base directory.
    pub fn resolve(&self, filename: &str) -> PathBuf {
        self.base.join(filename)
    }

    /// The configured base directory.
    pub fn base(&self) -> &Path {
        &self.base
    }
}

impl Default for LoadPath {
    fn default() -> Self {
        Self::new(".")
    }
}
