//! Header Classifier - main application orchestrator.
//!
//! Partitions every header file reachable from a target's declared file
//! lists into three disjoint scope sets:
//! 1. Resolve and parse the umbrella header (when declared)
//! 2. Expand each scope's globs in the order fixed by the exclusion rule
//! 3. Grow the cross-scope exclusion set after each scope
//!
//! The classifier is a pure, synchronous computation over an immutable
//! declaration and a read-only filesystem; calls for different targets are
//! independent and may run on parallel threads.

use std::collections::BTreeSet;
use std::path::PathBuf;

use tracing::{debug, instrument};

use crate::{
    application::{
        ports::Filesystem,
        services::{glob_expander, umbrella_extractor::UmbrellaHeaderExtractor},
    },
    domain::{
        ClassifiedHeaders, DomainError, GlobSpec, HeaderDeclaration, HeaderFileList, HeaderScope,
        PathResolver,
    },
    error::MasonResult,
};

/// Classifies a target's headers into public, private, and project scopes.
pub struct HeaderClassifier {
    filesystem: Box<dyn Filesystem>,
}

impl HeaderClassifier {
    /// Create a classifier backed by the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Classify the headers declared by a target.
    ///
    /// `product_name` is the declaring module's product name; the umbrella
    /// parser accepts `<ProductName/Header.h>`-style imports only for it.
    /// Path expressions resolve through `paths`.
    ///
    /// Fails on an unresolvable path expression or an unreadable declared
    /// umbrella. Globs that match nothing and unreadable subtrees are not
    /// errors; they contribute empty sets.
    #[instrument(skip_all, fields(product = product_name))]
    pub fn classify(
        &self,
        declaration: &HeaderDeclaration,
        product_name: &str,
        paths: &PathResolver,
    ) -> MasonResult<ClassifiedHeaders> {
        let umbrella = declaration
            .umbrella_header
            .as_deref()
            .map(|expression| paths.resolve(expression))
            .transpose()?;

        let umbrella_index = match &umbrella {
            Some(path) => {
                let extractor = UmbrellaHeaderExtractor::new(self.filesystem.as_ref());
                Some(extractor.public_header_names(path, product_name)?)
            }
            None => None,
        };

        let mut acc = ClassificationAccumulator::default();
        if let Some(path) = &umbrella {
            // The umbrella belongs to the public scope by definition; claim
            // it up front so no scope's globs can capture it.
            acc.claimed.insert(path.clone());
        }

        for scope in declaration.exclusion_rule.scope_order() {
            let Some(list) = declaration.list_for(scope) else {
                continue;
            };
            let basename_filter = match scope {
                HeaderScope::Public => umbrella_index.as_ref(),
                HeaderScope::Private | HeaderScope::Project => None,
            };
            let matched = self.expand_list(list, basename_filter, &acc.claimed, paths)?;
            debug!(scope = %scope, files = matched.len(), "scope expanded");
            acc.assign(scope, matched);
        }

        if let Some(path) = umbrella {
            acc.classified.public.insert(path);
        }

        Ok(acc.classified)
    }

    /// Expand every glob of one scope's list against the filesystem.
    ///
    /// `claimed` holds the paths earlier scopes already own; they are
    /// excluded on top of the spec's own `excluding` patterns.
    fn expand_list(
        &self,
        list: &HeaderFileList,
        basename_filter: Option<&BTreeSet<String>>,
        claimed: &BTreeSet<PathBuf>,
        paths: &PathResolver,
    ) -> Result<BTreeSet<PathBuf>, DomainError> {
        let mut matched = BTreeSet::new();
        for spec in &list.globs {
            let pattern = paths.resolve(&spec.glob)?;
            let mut excluding = self.resolve_exclusions(spec, paths)?;
            excluding.extend(claimed.iter().cloned());

            matched.extend(glob_expander::expand(
                self.filesystem.as_ref(),
                &pattern,
                basename_filter,
                &excluding,
            ));
        }
        Ok(matched)
    }

    /// Expand a spec's `excluding` patterns into concrete paths.
    ///
    /// No extension filter here: exclusion is a removal set, and a non-header
    /// path can never enter a result set anyway.
    fn resolve_exclusions(
        &self,
        spec: &GlobSpec,
        paths: &PathResolver,
    ) -> Result<BTreeSet<PathBuf>, DomainError> {
        let mut excluded = BTreeSet::new();
        for expression in &spec.excluding {
            let pattern = paths.resolve(expression)?;
            excluded.extend(self.filesystem.glob(&pattern));
        }
        Ok(excluded)
    }
}

/// The growing classification state threaded through the scope loop.
///
/// Invariant: `claimed` is a superset of the union of the three classified
/// sets, so expanding against `claimed` keeps the sets pairwise disjoint.
#[derive(Debug, Default)]
struct ClassificationAccumulator {
    classified: ClassifiedHeaders,
    claimed: BTreeSet<PathBuf>,
}

impl ClassificationAccumulator {
    fn assign(&mut self, scope: HeaderScope, matched: BTreeSet<PathBuf>) {
        self.claimed.extend(matched.iter().cloned());
        *self.classified.set_mut(scope) = matched;
    }
}
