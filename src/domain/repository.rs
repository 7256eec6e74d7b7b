//! Working copy lifecycle.

use std::fmt;

/// Lifecycle of a managed working copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoState {
    Uninitialized,
    /// Freshly cloned during construction.
    Cloned,
    /// An existing valid working copy was opened.
    Open,
    Fetching,
    CheckedOut,
    Failed,
}

impl fmt::Display for RepoState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RepoState::Uninitialized => "uninitialized",
            RepoState::Cloned => "cloned",
            RepoState::Open => "open",
            RepoState::Fetching => "fetching",
            RepoState::CheckedOut => "checked-out",
            RepoState::Failed => "failed",
        };
        f.write_str(label)
    }
}
