use crate::domain::{AppError, CommandOutput, CommandSpec};
use crate::ports::{CommandRunner, GitPort};
use git2::Repository;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Network and working-tree operations go through the `git` binary; read-only
/// inspection goes through libgit2.
#[derive(Debug, Clone)]
pub struct GitCommandAdapter<R: CommandRunner> {
    git: PathBuf,
    runner: R,
    timeout: Duration,
}

impl<R: CommandRunner> GitCommandAdapter<R> {
    pub fn new(git: PathBuf, runner: R, timeout: Duration) -> Self {
        Self { git, runner, timeout }
    }

    fn repo(&self, path: &Path) -> Result<Repository, AppError> {
        Repository::open(path).map_err(|e| AppError::GitError {
            command: "git2::Repository::open".to_string(),
            details: e.to_string(),
        })
    }

    fn run(&self, args: &[&str], cwd: Option<&Path>) -> Result<CommandOutput, AppError> {
        let mut spec = CommandSpec::new(&self.git, self.timeout).args(args.iter().copied());
        if let Some(cwd) = cwd {
            spec = spec.current_dir(cwd);
        }

        let output = self.runner.run(&spec)?;
        if !output.success() {
            let details = output.diagnostics();
            return Err(AppError::CommandFailed {
                command: spec.display(),
                code: output.code,
                details: if details.is_empty() { "Unknown error".to_string() } else { details },
            });
        }
        Ok(output)
    }
}

impl<R: CommandRunner> GitPort for GitCommandAdapter<R> {
    fn is_repository(&self, path: &Path) -> bool {
        match Repository::open(path) {
            Ok(repo) => !repo.is_bare(),
            Err(_) => false,
        }
    }

    fn clone_branch(&self, url: &str, path: &Path, branch: &str) -> Result<(), AppError> {
        let target = path.to_string_lossy().into_owned();
        match self.run(&["clone", "--branch", branch, "--", url, target.as_str()], None) {
            Ok(_) => Ok(()),
            Err(
                AppError::CommandFailed { details, .. } | AppError::CommandSpawn { details, .. },
            ) => Err(AppError::CloneFailed { url: url.to_string(), details }),
            Err(e) => Err(e),
        }
    }

    fn fetch(&self, path: &Path, remote: &str) -> Result<(), AppError> {
        self.run(&["fetch", remote], Some(path))?;
        Ok(())
    }

    fn checkout(&self, path: &Path, revision: &str) -> Result<(), AppError> {
        self.run(&["checkout", revision], Some(path))?;
        Ok(())
    }

    fn head_revision(&self, path: &Path) -> Result<String, AppError> {
        let repo = self.repo(path)?;
        let head = repo.head().map_err(|e| AppError::GitError {
            command: "git2::Repository::head".to_string(),
            details: e.to_string(),
        })?;
        let commit = head.peel_to_commit().map_err(|e| AppError::GitError {
            command: "git2::Reference::peel_to_commit".to_string(),
            details: e.to_string(),
        })?;
        Ok(commit.id().to_string())
    }
}
