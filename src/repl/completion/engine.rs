//! Completion session - orchestrates the completion flow
//!
//! This module ties the completion components together: the buffer is
//! scanned for its context, candidates are fetched for that context, and
//! each candidate is spliced back onto the untouched part of the buffer.

use std::collections::BTreeSet;
use std::rc::Rc;

use super::context::ScanResult;
use super::provider::{CandidateGenerator, CandidateProvider};
use super::registry::SharedRegistry;
use super::scanner::ContextScanner;
use crate::interp::SharedInterpreter;

/// Outcome of one completion request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Context the buffer was classified into
    pub scan: ScanResult,
    /// Buffer text before `scan.replace_from`, kept verbatim
    pub prefix: String,
    /// Bare candidates, sorted and deduplicated
    pub candidates: BTreeSet<String>,
}

impl Completion {
    /// Full replacement lines, in candidate order
    pub fn lines(&self) -> Vec<String> {
        self.candidates
            .iter()
            .map(|candidate| format!("{}{}", self.prefix, candidate))
            .collect()
    }
}

/// Completion entry point used by the line editor
#[derive(Clone)]
pub struct CompletionSession {
    /// Candidate provider for fetching suggestions
    provider: Rc<dyn CandidateProvider>,
}

impl CompletionSession {
    /// Create a new completion session
    ///
    /// # Arguments
    /// * `provider` - Candidate provider for fetching suggestions
    pub fn new(provider: Rc<dyn CandidateProvider>) -> Self {
        Self { provider }
    }

    /// Create a session backed by an interpreter and a registry
    pub fn for_interpreter(interp: SharedInterpreter, registry: SharedRegistry) -> Self {
        Self::new(Rc::new(CandidateGenerator::new(interp, registry)))
    }

    /// Complete the buffer (cursor at its end)
    ///
    /// # Arguments
    /// * `buffer` - Text before the cursor
    ///
    /// # Returns
    /// * `Vec<String>` - Complete replacement lines in sorted candidate order;
    ///   empty when there is nothing to complete
    pub fn complete(&self, buffer: &str) -> Vec<String> {
        self.complete_detailed(buffer)
            .map(|completion| completion.lines())
            .unwrap_or_default()
    }

    /// Complete the buffer, keeping the scan result and bare candidates
    ///
    /// # Returns
    /// * `Option<Completion>` - `None` when the buffer is empty or the scanner
    ///   finds no context; otherwise the context and its candidates (possibly
    ///   none)
    pub fn complete_detailed(&self, buffer: &str) -> Option<Completion> {
        if buffer.is_empty() {
            return None;
        }

        let scan = ContextScanner::scan(buffer)?;
        let candidates = self.provider.candidates(&scan);
        tracing::debug!(
            kind = ?scan.kind,
            command = %scan.command,
            base = %scan.base,
            count = candidates.len(),
            "completion"
        );

        Some(Completion {
            prefix: buffer[..scan.replace_from].to_string(),
            scan,
            candidates,
        })
    }
}
