use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::GitPort;

/// In-memory git double. Clones create the target directory on disk.
#[derive(Default)]
pub struct FakeGit {
    pub operations: Mutex<Vec<String>>,
    pub repositories: Mutex<HashSet<PathBuf>>,
    pub head: Mutex<String>,
    pub fail_clone: Mutex<bool>,
    pub fail_fetch: Mutex<bool>,
    pub fail_checkout: Mutex<bool>,
}

impl FakeGit {
    pub fn new() -> Self {
        let git = Self::default();
        *git.head.lock().unwrap() = "initial".to_string();
        git
    }

    /// Treat `path` as an existing valid working copy.
    pub fn add_repository(&self, path: &Path) {
        self.repositories.lock().unwrap().insert(path.to_path_buf());
    }

    pub fn set_fail_clone(&self, fail: bool) {
        *self.fail_clone.lock().unwrap() = fail;
    }

    pub fn set_fail_fetch(&self, fail: bool) {
        *self.fail_fetch.lock().unwrap() = fail;
    }

    pub fn set_fail_checkout(&self, fail: bool) {
        *self.fail_checkout.lock().unwrap() = fail;
    }

    pub fn operations(&self) -> Vec<String> {
        self.operations.lock().unwrap().clone()
    }

    fn record(&self, op: String) {
        self.operations.lock().unwrap().push(op);
    }
}

impl GitPort for FakeGit {
    fn is_repository(&self, path: &Path) -> bool {
        self.repositories.lock().unwrap().contains(path)
    }

    fn clone_branch(&self, url: &str, path: &Path, branch: &str) -> Result<(), AppError> {
        self.record(format!("clone {} {} {}", url, path.display(), branch));
        if *self.fail_clone.lock().unwrap() {
            return Err(AppError::CloneFailed {
                url: url.to_string(),
                details: "could not resolve host".to_string(),
            });
        }
        fs::create_dir_all(path)?;
        self.add_repository(path);
        *self.head.lock().unwrap() = branch.to_string();
        Ok(())
    }

    fn fetch(&self, _path: &Path, remote: &str) -> Result<(), AppError> {
        self.record(format!("fetch {}", remote));
        if *self.fail_fetch.lock().unwrap() {
            return Err(AppError::CommandFailed {
                command: format!("git fetch {}", remote),
                code: Some(128),
                details: "could not read from remote repository".to_string(),
            });
        }
        Ok(())
    }

    fn checkout(&self, _path: &Path, revision: &str) -> Result<(), AppError> {
        self.record(format!("checkout {}", revision));
        if *self.fail_checkout.lock().unwrap() {
            return Err(AppError::CommandFailed {
                command: format!("git checkout {}", revision),
                code: Some(1),
                details: format!("pathspec '{}' did not match", revision),
            });
        }
        *self.head.lock().unwrap() = revision.to_string();
        Ok(())
    }

    fn head_revision(&self, _path: &Path) -> Result<String, AppError> {
        Ok(self.head.lock().unwrap().clone())
    }
}
