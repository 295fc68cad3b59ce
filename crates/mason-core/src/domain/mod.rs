//! Core domain layer for Mason.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All filesystem access happens behind ports (traits) defined in the
//! application layer.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable values**: A declaration never changes after parsing

pub mod error;
pub mod headers;
pub mod paths;
pub mod umbrella;

// Re-exports for convenience
pub use error::DomainError;
pub use headers::{
    ClassifiedHeaders, ExclusionRule, GlobSpec, HEADER_EXTENSIONS, HeaderDeclaration,
    HeaderFileList, HeaderScope, SYSTEM_FRAMEWORK_IMPORTS, is_header_path,
};
pub use paths::PathResolver;
pub use umbrella::parse_public_imports;
