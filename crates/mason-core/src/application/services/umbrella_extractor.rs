//! Umbrella header extraction.
//!
//! Reads the declared umbrella header through the [`Filesystem`] port and
//! hands the content to the domain parser. Reading is the only fallible part:
//! a declared umbrella that cannot be read aborts classification, while
//! malformed lines inside a readable umbrella are simply skipped by the
//! parser.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::{debug, instrument};

use crate::application::{error::ApplicationError, ports::Filesystem};
use crate::domain::umbrella;

/// Extracts the public import index from an umbrella header file.
pub struct UmbrellaHeaderExtractor<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> UmbrellaHeaderExtractor<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// The basenames of the headers `path` publicly imports.
    ///
    /// Fails with [`ApplicationError::UmbrellaHeaderRead`] when the file is
    /// missing or not valid UTF-8.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn public_header_names(
        &self,
        path: &Path,
        product_name: &str,
    ) -> Result<BTreeSet<String>, ApplicationError> {
        let content = self.filesystem.read_to_string(path).map_err(|source| {
            ApplicationError::UmbrellaHeaderRead {
                path: path.to_path_buf(),
                reason: source.to_string(),
            }
        })?;

        let names = umbrella::parse_public_imports(&content, product_name);
        debug!(imports = names.len(), "umbrella header parsed");
        Ok(names)
    }
}
