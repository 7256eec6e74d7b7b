//! Repository manager: provision a working copy, fetch, and check out a revision.

use std::fs;
use std::path::{Path, PathBuf};

use crate::app::config::load_repo_config;
use crate::domain::{AppError, LoadPathRegistry, RepoConfig, RepoState};
use crate::ports::GitPort;

const REMOTE: &str = "origin";

/// Where and how working copies are provisioned.
#[derive(Debug, Clone)]
pub struct RepoOptions {
    /// Directory that relative repository paths resolve against.
    pub base_dir: PathBuf,
    /// Branch checked out by the initial clone.
    pub clone_branch: String,
}

/// Owns one working copy for its lifetime.
pub struct RepoManager<G: GitPort> {
    config: RepoConfig,
    path: PathBuf,
    git: G,
    state: RepoState,
}

impl<G: GitPort> RepoManager<G> {
    /// Load the entry `name` from `config_path` and provision its working copy.
    pub fn load(
        config_path: &Path,
        name: &str,
        options: &RepoOptions,
        git: G,
        load_paths: &mut LoadPathRegistry,
    ) -> Result<Self, AppError> {
        let config = load_repo_config(config_path, name)?;
        Self::open(config, options, git, load_paths)
    }

    /// Provision the working copy for `config`.
    ///
    /// A missing directory is cloned; an existing directory that is not a
    /// valid working copy is deleted and cloned again. On success the working
    /// copy is added to `load_paths`.
    pub fn open(
        config: RepoConfig,
        options: &RepoOptions,
        git: G,
        load_paths: &mut LoadPathRegistry,
    ) -> Result<Self, AppError> {
        let path = config.resolve_path(&options.base_dir);
        let mut manager = Self { config, path, git, state: RepoState::Uninitialized };

        if !manager.path.exists() {
            manager.clone_fresh(&options.clone_branch)?;
        } else if manager.git.is_repository(&manager.path) {
            tracing::debug!("Opened existing working copy at {}", manager.path.display());
            manager.state = RepoState::Open;
        } else {
            tracing::warn!(
                "{} is not a valid repository, removing it and cloning again",
                manager.path.display()
            );
            remove_path(&manager.path)?;
            manager.clone_fresh(&options.clone_branch)?;
        }

        load_paths.register(manager.path.clone());
        Ok(manager)
    }

    fn clone_fresh(&mut self, branch: &str) -> Result<(), AppError> {
        tracing::info!(
            "Cloning '{}' from {} into {}",
            self.config.name,
            self.config.url,
            self.path.display()
        );
        match self.git.clone_branch(&self.config.url, &self.path, branch) {
            Ok(()) => {
                self.state = RepoState::Cloned;
                Ok(())
            }
            Err(e) => {
                self.state = RepoState::Failed;
                if let Some(details) = e.details() {
                    tracing::debug!("Clone of '{}' failed: {}", self.config.name, details);
                }
                Err(e)
            }
        }
    }

    /// Fetch from `origin` without touching the working tree.
    pub fn pull_changes(&mut self) -> Result<(), AppError> {
        let previous = self.state;
        self.state = RepoState::Fetching;
        match self.git.fetch(&self.path, REMOTE) {
            Ok(()) => {
                self.state = previous;
                Ok(())
            }
            Err(e) => {
                self.state = RepoState::Failed;
                Err(e)
            }
        }
    }

    /// Fetch, then check out the configured version.
    ///
    /// A fetch failure is returned unchanged and no checkout is attempted.
    pub fn checkout(&mut self) -> Result<(), AppError> {
        self.pull_changes()?;
        match self.git.checkout(&self.path, &self.config.version) {
            Ok(()) => {
                self.state = RepoState::CheckedOut;
                tracing::debug!("Checked out '{}' in {}", self.config.version, self.path.display());
                Ok(())
            }
            Err(e) => {
                self.state = RepoState::Failed;
                Err(e)
            }
        }
    }

    /// Commit id currently checked out.
    pub fn head_revision(&self) -> Result<String, AppError> {
        self.git.head_revision(&self.path)
    }

    pub fn state(&self) -> RepoState {
        self.state
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &RepoConfig {
        &self.config
    }
}

fn remove_path(path: &Path) -> Result<(), AppError> {
    if path.is_dir() {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_file(path)?;
    }
    Ok(())
}
