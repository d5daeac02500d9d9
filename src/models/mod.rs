//! Shared types used across all modules.
//!
//! Rules, session states and file access kinds live here so the
//! transform, files and session modules can import them without reaching
//! into each other's internals.

pub mod rule;
pub mod state;

use std::fmt;

pub use rule::{Rule, default_rules};
pub use state::SessionState;

/// The direction of a file operation, used to word permission errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Read => write!(f, "read"),
            Access::Write => write!(f, "write to"),
        }
    }
}
