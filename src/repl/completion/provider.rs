//! Candidate provider for completion suggestions
//!
//! This module provides the trait and implementation for fetching completion
//! candidates: command and procedure names and variable names from the live
//! interpreter, and argument words from the [`ArgumentRegistry`].
//!
//! [`ArgumentRegistry`]: super::ArgumentRegistry

use std::collections::BTreeSet;

use super::context::{CompletionKind, ScanResult};
use super::registry::SharedRegistry;
use crate::interp::{NameKind, SharedInterpreter};

/// Trait for providing completion candidates
///
/// Every method returns a deduplicated set in ascending byte order. Failures
/// are never surfaced; a source that cannot answer contributes nothing.
pub trait CandidateProvider {
    /// Get command and procedure names matching the prefix
    fn commands(&self, prefix: &str) -> BTreeSet<String>;

    /// Get variable names matching the prefix
    fn variables(&self, prefix: &str) -> BTreeSet<String>;

    /// Get argument words registered for `command` matching the prefix
    fn arguments(&self, command: &str, prefix: &str) -> BTreeSet<String>;

    /// Dispatch on the scan result's kind
    fn candidates(&self, scan: &ScanResult) -> BTreeSet<String> {
        match scan.kind {
            CompletionKind::Command => self.commands(&scan.base),
            CompletionKind::Variable => self.variables(&scan.base),
            CompletionKind::Argument => self.arguments(&scan.command, &scan.base),
        }
    }
}

/// Candidate provider backed by an interpreter and an argument registry
pub struct CandidateGenerator {
    /// Interpreter answering name queries
    interp: SharedInterpreter,
    /// Registered argument words
    registry: SharedRegistry,
}

impl CandidateGenerator {
    /// Create a new candidate generator
    ///
    /// # Arguments
    /// * `interp` - Interpreter used for command, procedure, and variable names
    /// * `registry` - Registry used for argument words
    pub fn new(interp: SharedInterpreter, registry: SharedRegistry) -> Self {
        Self { interp, registry }
    }

    /// Run one name query and add the names starting with `prefix` to `out`
    fn query_names(&self, kind: NameKind, prefix: &str, out: &mut BTreeSet<String>) {
        let Ok(mut interp) = self.interp.try_borrow_mut() else {
            tracing::trace!(?kind, "interpreter busy, skipping completion query");
            return;
        };

        let script = interp.name_query(kind, prefix);
        match interp.eval_list(&script) {
            Ok(names) => out.extend(names.into_iter().filter(|name| name.starts_with(prefix))),
            Err(e) => tracing::trace!(query = %script, error = %e, "completion query failed"),
        }
    }
}

impl CandidateProvider for CandidateGenerator {
    fn commands(&self, prefix: &str) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        if prefix.is_empty() {
            return names;
        }
        self.query_names(NameKind::Commands, prefix, &mut names);
        self.query_names(NameKind::Procs, prefix, &mut names);
        names
    }

    fn variables(&self, prefix: &str) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        if prefix.is_empty() {
            return names;
        }
        self.query_names(NameKind::Vars, prefix, &mut names);
        names
    }

    fn arguments(&self, command: &str, prefix: &str) -> BTreeSet<String> {
        // An unfiltered dump of a long table is not useful interactively
        if prefix.is_empty() {
            return BTreeSet::new();
        }

        let Ok(registry) = self.registry.try_borrow() else {
            tracing::trace!(command, "registry busy, skipping argument completion");
            return BTreeSet::new();
        };
        registry
            .lookup(command)
            .iter()
            .filter(|arg| arg.starts_with(prefix))
            .cloned()
            .collect()
    }
}
