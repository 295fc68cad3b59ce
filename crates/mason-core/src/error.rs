//! Unified error handling for Mason Core.
//!
//! A failed classification is blocking for the affected target: the caller
//! must not build that target's project representation from a partial
//! result. Every variant names the manifest expression or file that caused
//! the failure so the user can fix the manifest.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Mason Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MasonError {
    /// Errors from the domain layer (manifest content problems).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl MasonError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Manifest,
            Self::Application(_) => ErrorCategory::Filesystem,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The manifest itself needs fixing (bad path expression, unknown
    /// variable).
    Manifest,
    /// A declared file could not be read.
    Filesystem,
}

/// Convenient result type alias.
pub type MasonResult<T> = Result<T, MasonError>;
