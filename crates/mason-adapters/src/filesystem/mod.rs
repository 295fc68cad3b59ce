//! Filesystem adapters.
//!
//! Both adapters share one pattern dialect so tests against
//! [`MemoryFilesystem`] observe the same matches [`LocalFilesystem`] would
//! produce: `*` and `?` stay within a single path component, `**` crosses
//! components.

mod local;
mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;

use std::path::Path;

use tracing::warn;

pub(crate) fn match_options() -> glob::MatchOptions {
    let mut options = glob::MatchOptions::new();
    options.require_literal_separator = true;
    options
}

/// Compile an absolute glob pattern, treating an unusable pattern as
/// matching nothing.
pub(crate) fn compile(pattern: &Path) -> Option<glob::Pattern> {
    let raw = pattern.to_str()?;
    match glob::Pattern::new(raw) {
        Ok(compiled) => Some(compiled),
        Err(error) => {
            warn!(pattern = raw, %error, "ignoring invalid glob pattern");
            None
        }
    }
}
