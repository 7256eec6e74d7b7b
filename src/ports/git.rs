use crate::domain::AppError;
use std::path::Path;

pub trait GitPort {
    /// Check whether `path` holds a valid working copy.
    fn is_repository(&self, path: &Path) -> bool;

    /// Clone `url` into `path` with `branch` checked out.
    fn clone_branch(&self, url: &str, path: &Path, branch: &str) -> Result<(), AppError>;

    /// Fetch from a remote without touching the working tree.
    fn fetch(&self, path: &Path, remote: &str) -> Result<(), AppError>;

    /// Check out a branch name or revision.
    fn checkout(&self, path: &Path, revision: &str) -> Result<(), AppError>;

    /// Commit id of HEAD.
    fn head_revision(&self, path: &Path) -> Result<String, AppError>;
}

impl<T: GitPort + ?Sized> GitPort for &T {
    fn is_repository(&self, path: &Path) -> bool {
        (**self).is_repository(path)
    }

    fn clone_branch(&self, url: &str, path: &Path, branch: &str) -> Result<(), AppError> {
        (**self).clone_branch(url, path, branch)
    }

    fn fetch(&self, path: &Path, remote: &str) -> Result<(), AppError> {
        (**self).fetch(path, remote)
    }

    fn checkout(&self, path: &Path, revision: &str) -> Result<(), AppError> {
        (**self).checkout(path, revision)
    }

    fn head_revision(&self, path: &Path) -> Result<String, AppError> {
        (**self).head_revision(path)
    }
}
