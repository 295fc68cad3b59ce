//! Domain layer errors.

use thiserror::Error;

/// Root domain error type.
///
/// Domain errors are manifest problems the user can fix: every variant names
/// the offending expression so the message points back at the manifest.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A path expression referenced a variable the manifest never defined.
    #[error("undefined path variable '$({name})' in '{expression}'")]
    UndefinedPathVariable { name: String, expression: String },

    /// A relative path expression was resolved without a project root.
    #[error("cannot resolve '{expression}': no project root configured")]
    ProjectRootUndefined { expression: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UndefinedPathVariable { name, expression } => vec![
                format!("'{}' references '$({})', which is not defined", expression, name),
                "Define the variable in the manifest, or fix the spelling".into(),
            ],
            Self::ProjectRootUndefined { expression } => vec![
                format!("'{}' is relative, but no project root is configured", expression),
                "Pass an absolute project root when building the resolver".into(),
            ],
        }
    }
}
