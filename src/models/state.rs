//! Interactive session states.

use std::fmt;

/// Where the session currently is in its read, rewrite and write cycle.
///
/// `AwaitingFilename` is both the initial state and the state every
/// failure returns to. `Done` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingFilename,
    Reading,
    Transforming,
    NamingOutput,
    Writing,
    ShowingPreview,
    Done,
}

impl SessionState {
    /// Returns `true` once the session has finished.
    pub fn is_terminal(self) -> bool {
        self == SessionState::Done
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::AwaitingFilename => write!(f, "awaiting-filename"),
            SessionState::Reading => write!(f, "reading"),
            SessionState::Transforming => write!(f, "transforming"),
            SessionState::NamingOutput => write!(f, "naming-output"),
            SessionState::Writing => write!(f, "writing"),
            SessionState::ShowingPreview => write!(f, "showing-preview"),
            SessionState::Done => write!(f, "done"),
        }
    }
}
