//! Completion system for the moltsh REPL
//!
//! Context-sensitive tab completion for Tcl input. The buffer before the
//! cursor is classified without any parser state, respecting nested `[...]`
//! and `{...}` groups, and routed to one of three candidate sources.
//!
//! # Architecture
//!
//! - **ContextScanner**: classifies the buffer into command, variable, or
//!   argument context
//! - **Context**: the scan result handed between components
//! - **ArgumentRegistry**: per-command argument words, seeded with the
//!   built-in Tcl vocabulary
//! - **Provider**: fetches candidates from the interpreter or the registry
//! - **Session**: orchestrates the flow and splices candidates into lines
//!
//! # Examples
//!
//! ```no_run
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use moltsh::interp::{MoltInterpreter, SharedInterpreter};
//! use moltsh::repl::completion::{ArgumentRegistry, CompletionSession};
//!
//! let interp: SharedInterpreter = Rc::new(RefCell::new(MoltInterpreter::new()));
//! let registry = ArgumentRegistry::with_builtins().into_shared();
//! let session = CompletionSession::for_interpreter(interp, registry);
//!
//! // ["string map", "string match"]
//! let lines = session.complete("string ma");
//! ```

mod builtins;
mod context;
mod engine;
mod provider;
mod registry;
mod scanner;

pub use context::{CompletionKind, ScanResult};
pub use engine::{Completion, CompletionSession};
pub use provider::{CandidateGenerator, CandidateProvider};
pub use registry::{ArgumentRegistry, SharedRegistry};
pub use scanner::ContextScanner;
