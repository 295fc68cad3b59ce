//! In-memory filesystem adapter for testing.

use std::{
    collections::BTreeMap,
    io,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use mason_core::application::ports::Filesystem;

use super::{compile, match_options};

/// In-memory filesystem for testing.
///
/// Stores files as a flat path → content map; directories exist implicitly.
/// Clones share the same tree, so a test can keep a handle while the
/// classifier owns a boxed clone.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, builder style.
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.add_file(path, content);
        self
    }

    /// Add or replace a file.
    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let mut inner = self.inner.write().unwrap();
        inner.files.insert(path.into(), content.into());
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
    }
}

impl Filesystem for MemoryFilesystem {
    fn glob(&self, pattern: &Path) -> Vec<PathBuf> {
        let Some(compiled) = compile(pattern) else {
            return Vec::new();
        };
        let options = match_options();

        let inner = self.inner.read().unwrap();
        inner
            .files
            .keys()
            .filter(|path| compiled.matches_path_with(path, options))
            .cloned()
            .collect()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let inner = self.inner.read().unwrap();
        inner.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path.display()))
        })
    }
}
