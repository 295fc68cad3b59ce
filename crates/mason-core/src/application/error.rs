//! Application layer errors.
//!
//! These errors represent orchestration failures against the outside world.
//! Manifest-content problems are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that occur while orchestrating a classification.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The declared umbrella header could not be read or decoded.
    ///
    /// A declared umbrella is load-bearing: without its import index the
    /// public scope cannot be computed, so this aborts the whole
    /// classification for the target.
    #[error("cannot read umbrella header {path}: {reason}")]
    UmbrellaHeaderRead { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UmbrellaHeaderRead { path, .. } => vec![
                format!("Failed to read: {}", path.display()),
                "Check that the umbrella header exists and is UTF-8 text".into(),
                "Or remove the umbrellaHeader entry from the manifest".into(),
            ],
        }
    }
}
