//! Manifest path expression resolution.
//!
//! Manifests refer to files relative to the project root, optionally through
//! `$(NAME)` path variables defined alongside the manifest. [`PathResolver`]
//! turns such an expression into an absolute, lexically normalized path.
//!
//! Resolution is a pure function of the resolver's state and the expression.
//! There is no filesystem access, so a resolver for a root that does not
//! exist yet is perfectly usable.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Resolution context for manifest path expressions.
///
/// Holds the project root and the manifest-defined path variables. Built once
/// per manifest by the loader and shared by every classification call for
/// that project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResolver {
    root: Option<PathBuf>,
    variables: BTreeMap<String, String>,
}

impl PathResolver {
    /// Resolver anchored at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            variables: BTreeMap::new(),
        }
    }

    /// Define a path variable, usable in expressions as `$(name)`.
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Resolve a manifest path expression to an absolute path.
    ///
    /// `$(NAME)` occurrences are substituted from the variable table; the
    /// substituted expression is then joined onto the project root unless it
    /// is already absolute, and `.`/`..` components are folded away.
    ///
    /// Fails with [`DomainError::UndefinedPathVariable`] for an unknown
    /// variable and [`DomainError::ProjectRootUndefined`] when a relative
    /// expression is resolved without a configured root.
    pub fn resolve(&self, expression: &str) -> Result<PathBuf, DomainError> {
        let substituted = self.substitute(expression)?;

        let path = PathBuf::from(&substituted);
        let absolute = if path.is_absolute() {
            path
        } else {
            match &self.root {
                Some(root) => root.join(path),
                None => {
                    return Err(DomainError::ProjectRootUndefined {
                        expression: expression.to_string(),
                    });
                }
            }
        };

        Ok(normalize(&absolute))
    }

    /// Expand every `$(NAME)` reference in `expression`.
    fn substitute(&self, expression: &str) -> Result<String, DomainError> {
        let mut out = String::with_capacity(expression.len());
        let mut rest = expression;

        while let Some(start) = rest.find("$(") {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];
            let Some(end) = after_open.find(')') else {
                // Unterminated reference: keep it literally, like any other
                // odd filename character.
                out.push_str(&rest[start..]);
                return Ok(out);
            };
            let name = &after_open[..end];
            match self.variables.get(name) {
                Some(value) => out.push_str(value),
                None => {
                    return Err(DomainError::UndefinedPathVariable {
                        name: name.to_string(),
                        expression: expression.to_string(),
                    });
                }
            }
            rest = &after_open[end + 1..];
        }
        out.push_str(rest);
        Ok(out)
    }
}

/// Fold `.` and `..` components lexically.
///
/// `..` at the filesystem root stays at the root, matching how shells resolve
/// `/..`. Purely lexical: symlinks are not consulted.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !matches!(
                    out.components().next_back(),
                    None | Some(Component::RootDir) | Some(Component::Prefix(_))
                ) {
                    out.pop();
                }
            }
            other => out.push(other),
        }
    }
    out
}
