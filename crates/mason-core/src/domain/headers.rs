//! The header declaration model and its classification output.
//!
//! A `HeaderDeclaration` is the manifest's description of a target's header
//! files: an optional umbrella header plus up to three glob-based file lists,
//! one per visibility scope. The manifest loader decodes it and hands it to
//! [`HeaderClassifier`](crate::application::HeaderClassifier) untouched; it is
//! read-only from then on.
//!
//! # Scopes and exclusion
//!
//! The same file may be matched by the globs of more than one scope. The
//! [`ExclusionRule`] decides which scope wins: scopes are evaluated in a fixed
//! order and every later scope automatically excludes the files already
//! claimed. The rule is a closed enum: there are exactly two valid orders.
//!
//! # Domain purity
//!
//! This module must not import `tracing` and performs no I/O. Glob expansion
//! against a real filesystem is the application layer's job, reached through
//! the `Filesystem` port.

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File extensions recognized as headers.
///
/// Any file matched by a glob whose extension is not in this table is
/// silently dropped from classification results.
pub const HEADER_EXTENSIONS: &[&str] = &["h", "hh", "hpp", "ipp"];

/// System framework names whose imports never count as local headers.
pub const SYSTEM_FRAMEWORK_IMPORTS: &[&str] = &["UIKit", "Foundation"];

/// Whether `path` carries a recognized header extension.
pub fn is_header_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| HEADER_EXTENSIONS.contains(&ext))
}

// ── Glob specifications ───────────────────────────────────────────────────────

/// A single glob pattern with optional exclusion patterns.
///
/// Both the pattern and its exclusions are manifest path expressions,
/// interpreted relative to the resolution root. In manifest form a spec is
/// either a bare pattern string or a `{ glob, excluding }` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "GlobSpecRepr")]
pub struct GlobSpec {
    /// Glob pattern; supports `*`, `**` and `?`.
    pub glob: String,

    /// Glob patterns for files excluded from the match.
    pub excluding: Vec<String>,
}

impl GlobSpec {
    /// A spec with no exclusions.
    pub fn new(glob: impl Into<String>) -> Self {
        Self {
            glob: glob.into(),
            excluding: Vec::new(),
        }
    }

    /// Add exclusion patterns.
    pub fn excluding(mut self, patterns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.excluding.extend(patterns.into_iter().map(Into::into));
        self
    }
}

impl From<&str> for GlobSpec {
    fn from(glob: &str) -> Self {
        Self::new(glob)
    }
}

impl From<String> for GlobSpec {
    fn from(glob: String) -> Self {
        Self::new(glob)
    }
}

/// Manifest wire shape: a bare string or the full object.
#[derive(Deserialize)]
#[serde(untagged)]
enum GlobSpecRepr {
    Pattern(String),
    Spec {
        glob: String,
        #[serde(default)]
        excluding: Vec<String>,
    },
}

impl From<GlobSpecRepr> for GlobSpec {
    fn from(repr: GlobSpecRepr) -> Self {
        match repr {
            GlobSpecRepr::Pattern(glob) => Self::new(glob),
            GlobSpecRepr::Spec { glob, excluding } => Self { glob, excluding },
        }
    }
}

/// An ordered list of glob specifications for one header scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeaderFileList {
    pub globs: Vec<GlobSpec>,
}

impl HeaderFileList {
    pub fn new(globs: Vec<GlobSpec>) -> Self {
        Self { globs }
    }

    /// List from plain pattern strings.
    pub fn from_patterns(patterns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            globs: patterns.into_iter().map(|p| GlobSpec::new(p)).collect(),
        }
    }

    /// List from concrete paths. A wildcard-free path is just a glob that
    /// matches at most one file, so this is a naming convenience.
    pub fn paths(paths: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::from_patterns(paths)
    }
}

// ── Scopes and the exclusion rule ─────────────────────────────────────────────

/// One of the three header visibility scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderScope {
    Public,
    Private,
    Project,
}

impl HeaderScope {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Project => "project",
        }
    }
}

impl fmt::Display for HeaderScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How to resolve files matched by the globs of more than one scope.
///
/// Scopes are evaluated in the order returned by [`scope_order`]; each later
/// scope excludes everything already claimed. Explicit `excluding` patterns
/// on a [`GlobSpec`] are honored in addition to this automatic exclusion.
///
/// [`scope_order`]: ExclusionRule::scope_order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExclusionRule {
    /// Evaluation order public → private → project: the project scope keeps
    /// only what the other two did not claim.
    #[default]
    ProjectExcludesPrivateAndPublic,

    /// Evaluation order project → private → public: reversed precedence.
    PublicExcludesPrivateAndProject,
}

impl ExclusionRule {
    /// The fixed scope evaluation order for this rule.
    pub const fn scope_order(self) -> [HeaderScope; 3] {
        match self {
            Self::ProjectExcludesPrivateAndPublic => [
                HeaderScope::Public,
                HeaderScope::Private,
                HeaderScope::Project,
            ],
            Self::PublicExcludesPrivateAndProject => [
                HeaderScope::Project,
                HeaderScope::Private,
                HeaderScope::Public,
            ],
        }
    }
}

// ── The declaration ───────────────────────────────────────────────────────────

/// A target's header declaration, as decoded from the manifest.
///
/// Immutable once parsed. Every path-valued field is a manifest path
/// expression; resolution against the project root happens at
/// classification time, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderDeclaration {
    /// Umbrella header path expression. When set, its import directives
    /// restrict which basenames the public globs may contribute.
    #[serde(default)]
    pub umbrella_header: Option<String>,

    /// Globs for public headers.
    #[serde(default)]
    pub public: Option<HeaderFileList>,

    /// Globs for private headers.
    #[serde(default)]
    pub private: Option<HeaderFileList>,

    /// Globs for project-internal headers.
    #[serde(default)]
    pub project: Option<HeaderFileList>,

    /// How overlaps between the scopes are resolved.
    #[serde(default)]
    pub exclusion_rule: ExclusionRule,
}

impl HeaderDeclaration {
    /// Declaration from explicit per-scope lists.
    pub fn headers(
        public: Option<HeaderFileList>,
        private: Option<HeaderFileList>,
        project: Option<HeaderFileList>,
        exclusion_rule: ExclusionRule,
    ) -> Self {
        Self {
            umbrella_header: None,
            public,
            private,
            project,
            exclusion_rule,
        }
    }

    /// Declaration driven by an umbrella header.
    ///
    /// Public headers are the members of `list` named by the umbrella's
    /// imports, private headers come from `private`, and everything else in
    /// `list` lands in the project scope.
    pub fn all_headers(
        list: HeaderFileList,
        umbrella: impl Into<String>,
        private: Option<HeaderFileList>,
    ) -> Self {
        Self::from_umbrella(list, umbrella, private, true)
    }

    /// Like [`all_headers`](Self::all_headers), but headers named by neither
    /// the umbrella nor the private list are skipped instead of becoming
    /// project headers.
    pub fn only_headers(
        list: HeaderFileList,
        umbrella: impl Into<String>,
        private: Option<HeaderFileList>,
    ) -> Self {
        Self::from_umbrella(list, umbrella, private, false)
    }

    fn from_umbrella(
        list: HeaderFileList,
        umbrella: impl Into<String>,
        private: Option<HeaderFileList>,
        all_others_as_project: bool,
    ) -> Self {
        Self {
            umbrella_header: Some(umbrella.into()),
            project: all_others_as_project.then(|| list.clone()),
            public: Some(list),
            private,
            exclusion_rule: ExclusionRule::ProjectExcludesPrivateAndPublic,
        }
    }

    /// The glob list declared for `scope`, if any.
    pub fn list_for(&self, scope: HeaderScope) -> Option<&HeaderFileList> {
        match scope {
            HeaderScope::Public => self.public.as_ref(),
            HeaderScope::Private => self.private.as_ref(),
            HeaderScope::Project => self.project.as_ref(),
        }
    }
}

// ── Classification output ─────────────────────────────────────────────────────

/// The classifier's output: three pairwise-disjoint sets of absolute header
/// paths.
///
/// Computed fresh on every classification request and consumed by the project
/// model builder; the classifier keeps no state between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedHeaders {
    pub public: BTreeSet<PathBuf>,
    pub private: BTreeSet<PathBuf>,
    pub project: BTreeSet<PathBuf>,
}

impl ClassifiedHeaders {
    /// The set for one scope.
    pub fn set(&self, scope: HeaderScope) -> &BTreeSet<PathBuf> {
        match scope {
            HeaderScope::Public => &self.public,
            HeaderScope::Private => &self.private,
            HeaderScope::Project => &self.project,
        }
    }

    pub(crate) fn set_mut(&mut self, scope: HeaderScope) -> &mut BTreeSet<PathBuf> {
        match scope {
            HeaderScope::Public => &mut self.public,
            HeaderScope::Private => &mut self.private,
            HeaderScope::Project => &mut self.project,
        }
    }

    /// The scope a path was classified into, if any.
    pub fn scope_of(&self, path: &Path) -> Option<HeaderScope> {
        [HeaderScope::Public, HeaderScope::Private, HeaderScope::Project]
            .into_iter()
            .find(|scope| self.set(*scope).contains(path))
    }

    /// Total number of classified headers.
    pub fn len(&self) -> usize {
        self.public.len() + self.private.len() + self.project.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
