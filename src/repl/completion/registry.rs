//! Per-command argument candidates
//!
//! The registry maps a command name to the ordered set of words offered when
//! completing that command's arguments. It is seeded with the built-in Tcl
//! vocabulary and grows at runtime through [`ArgumentRegistry::register`],
//! either from Rust or from scripts via the registration command.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use super::builtins::BUILTIN_ARGUMENTS;

/// Registry handle shared between the completer and the registration command.
pub type SharedRegistry = Rc<RefCell<ArgumentRegistry>>;

static EMPTY: BTreeSet<String> = BTreeSet::new();

/// Command name to argument candidate store.
#[derive(Debug, Clone, Default)]
pub struct ArgumentRegistry {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl ArgumentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with the built-in command tables.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (command, arguments) in BUILTIN_ARGUMENTS {
            registry.register(command, arguments.iter().copied());
        }
        registry
    }

    /// Wrap this registry for sharing.
    pub fn into_shared(self) -> SharedRegistry {
        Rc::new(RefCell::new(self))
    }

    /// Store the candidate set for `command`, replacing any previous set.
    ///
    /// # Arguments
    /// * `command` - Exact command name (case-sensitive)
    /// * `arguments` - Candidate words; duplicates collapse, order is irrelevant
    pub fn register<I, S>(&mut self, command: &str, arguments: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = arguments.into_iter().map(Into::into).collect();
        tracing::trace!(command, count = set.len(), "registered completion arguments");
        self.entries.insert(command.to_string(), set);
    }

    /// Candidate set for `command`, empty if nothing is registered.
    pub fn lookup(&self, command: &str) -> &BTreeSet<String> {
        self.entries.get(command).unwrap_or(&EMPTY)
    }

    pub fn contains(&self, command: &str) -> bool {
        self.entries.contains_key(command)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered command names in ascending order.
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
