use std::cell::Cell;
use std::rc::Rc;

/// State shared between the shell loops and the commands they evaluate.
///
/// Cloning yields another handle to the same state; the `exit` command keeps
/// one as its Molt context while the loops poll another.
#[derive(Debug, Clone, Default)]
pub struct SharedState {
    /// Return code recorded by `exit`, `None` until it runs
    exit_code: Rc<Cell<Option<i32>>>,
}

impl SharedState {
    /// Create a new shared state with no exit pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `code` and raise the termination flag.
    pub fn request_exit(&self, code: i32) {
        self.exit_code.set(Some(code));
    }

    /// Whether `exit` has run.
    pub fn exit_requested(&self) -> bool {
        self.exit_code.get().is_some()
    }

    /// The pending return code, 0 when no exit was requested.
    pub fn return_code(&self) -> i32 {
        self.exit_code.get().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_state_creation() {
        let state = SharedState::new();
        assert!(!state.exit_requested());
        assert_eq!(state.return_code(), 0);
    }

    #[test]
    fn test_clones_share_exit() {
        let state = SharedState::new();
        let handle = state.clone();
        handle.request_exit(3);
        assert!(state.exit_requested());
        assert_eq!(state.return_code(), 3);
    }

    #[test]
    fn test_exit_with_zero_is_still_requested() {
        let state = SharedState::new();
        state.request_exit(0);
        assert!(state.exit_requested());
        assert_eq!(state.return_code(), 0);
    }
}
