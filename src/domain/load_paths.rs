//! Directories the downstream application may load code and assets from.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Ordered, de-duplicated set of loadable locations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadPathRegistry {
    paths: Vec<PathBuf>,
}

impl LoadPathRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a location. Returns false if it was already present.
    pub fn register(&mut self, path: impl Into<PathBuf>) -> bool {
        let path = path.into();
        if self.contains(&path) {
            return false;
        }
        self.paths.push(path);
        true
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Join the registered paths in front of `existing` using the platform separator.
    pub fn to_env_value(
        &self,
        existing: Option<OsString>,
    ) -> Result<OsString, std::env::JoinPathsError> {
        let mut all: Vec<PathBuf> = self.paths.clone();
        if let Some(existing) = existing {
            all.extend(std::env::split_paths(&existing).filter(|p| !self.contains(p)));
        }
        std::env::join_paths(all)
    }
}
