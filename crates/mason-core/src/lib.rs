//! Mason Core - header classification for manifest-driven project generation.
//!
//! Mason converts declarative manifests describing software targets into
//! native IDE project files. This crate is the header-classification core of
//! that pipeline: given a target's [`HeaderDeclaration`] it partitions every
//! reachable header file into the public, private, or project scope,
//! reconciling overlapping glob lists with an optional umbrella header and
//! the declaration's exclusion rule.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │     manifest loader / project builder   │
//! │      (external collaborators)           │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (HeaderClassifier, UmbrellaExtractor)   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │         (Driven: Filesystem)            │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     mason-adapters (Infrastructure)     │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (HeaderDeclaration, PathResolver,       │
//! │  umbrella parsing)                      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mason_core::{
//!     application::HeaderClassifier,
//!     domain::{HeaderDeclaration, HeaderFileList, PathResolver},
//! };
//! # fn filesystem() -> Box<dyn mason_core::application::Filesystem> { unimplemented!() }
//!
//! // 1. The manifest loader hands over a parsed declaration.
//! let declaration = HeaderDeclaration {
//!     umbrella_header: Some("Sources/MyLib.h".into()),
//!     public: Some(HeaderFileList::from_patterns(["Sources/Public/**"])),
//!     ..Default::default()
//! };
//!
//! // 2. Classify against the project root (with an injected adapter).
//! let classifier = HeaderClassifier::new(filesystem());
//! let paths = PathResolver::new("/projects/app");
//! let classified = classifier.classify(&declaration, "MyLib", &paths).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{Filesystem, HeaderClassifier, UmbrellaHeaderExtractor};
    pub use crate::domain::{
        ClassifiedHeaders, ExclusionRule, GlobSpec, HeaderDeclaration, HeaderFileList,
        HeaderScope, PathResolver,
    };
    pub use crate::error::{MasonError, MasonResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
