//! Driven (output) ports - implemented by infrastructure.

use std::io;
use std::path::{Path, PathBuf};

/// Port for read-only filesystem access.
///
/// Implemented by:
/// - `mason_adapters::filesystem::LocalFilesystem` (production)
/// - `mason_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `Send + Sync` so independent classification calls may run on parallel
///   threads against one shared implementation
/// - Enumeration is infallible on purpose: partially unreadable source trees
///   are a normal state while a project is being edited
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Enumerate the files matching an absolute glob pattern.
    ///
    /// `pattern` supports `*` and `?` within one path component and `**`
    /// across components. Implementations return every matching *file*
    /// (never directories), in no particular order, and treat unreadable
    /// subtrees and invalid patterns as matching nothing.
    fn glob(&self, pattern: &Path) -> Vec<PathBuf>;

    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}
