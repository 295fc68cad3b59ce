//! Glob expansion policy for header scopes.
//!
//! The [`Filesystem`] port enumerates raw matches; this module applies the
//! classification policy on top: only recognized header extensions survive,
//! excluded paths are removed unconditionally, and an optional basename
//! allow-list (the umbrella index) restricts the public scope.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::application::ports::Filesystem;
use crate::domain::headers::is_header_path;

/// Expand one absolute glob pattern into the set of header files it selects.
///
/// Matches reached through several glob fragments collapse into set
/// membership. An empty result is not an error; neither is a pattern whose
/// subtree is partially unreadable (the port already treats that as matching
/// nothing).
pub fn expand(
    filesystem: &dyn Filesystem,
    pattern: &Path,
    basename_filter: Option<&BTreeSet<String>>,
    excluding: &BTreeSet<PathBuf>,
) -> BTreeSet<PathBuf> {
    filesystem
        .glob(pattern)
        .into_iter()
        .filter(|path| is_header_path(path))
        .filter(|path| !excluding.contains(path))
        .filter(|path| matches_basename(path, basename_filter))
        .collect()
}

fn matches_basename(path: &Path, filter: Option<&BTreeSet<String>>) -> bool {
    let Some(filter) = filter else { return true };
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| filter.contains(name))
}
