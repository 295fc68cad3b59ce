//! Local filesystem adapter using walkdir.

use std::io;
use std::path::{Path, PathBuf};

use mason_core::application::ports::Filesystem;
use walkdir::WalkDir;

use super::{compile, match_options};

/// Production filesystem implementation backed by the real filesystem.
///
/// Enumeration walks from the pattern's longest wildcard-free prefix and
/// keeps the files the compiled pattern accepts. Unreadable directories are
/// skipped, not reported: partially available sources are a normal state
/// while a project is being edited.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn glob(&self, pattern: &Path) -> Vec<PathBuf> {
        let Some(compiled) = compile(pattern) else {
            return Vec::new();
        };
        let options = match_options();

        WalkDir::new(walk_root(pattern))
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
            .filter(|path| compiled.matches_path_with(path, options))
            .collect()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// The longest pattern prefix containing no glob metacharacters.
///
/// A wildcard-free pattern yields itself, so a direct file path walks (and
/// matches) exactly that file when it exists.
fn walk_root(pattern: &Path) -> PathBuf {
    let mut root = PathBuf::new();
    for component in pattern.components() {
        if component
            .as_os_str()
            .to_string_lossy()
            .contains(['*', '?', '['])
        {
            break;
        }
        root.push(component);
    }
    root
}
