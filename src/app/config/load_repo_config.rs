//! Repository entry loading.

use std::path::Path;

use crate::domain::config::parse_repo_config;
use crate::domain::{AppError, RepoConfig};

use super::read_config_file;

/// Load the entry named `name` from a repository configuration file.
pub fn load_repo_config(path: &Path, name: &str) -> Result<RepoConfig, AppError> {
    let content = read_config_file(path)?;
    parse_repo_config(path, &content, name)
}
