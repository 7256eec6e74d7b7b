//! Pure parse/validate for multi-repository configuration files.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::domain::AppError;

/// One repository entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoConfig {
    pub name: String,
    /// Location of the working copy, relative to the base directory unless absolute.
    pub path: PathBuf,
    pub url: String,
    /// Branch name or revision to check out.
    pub version: String,
}

impl RepoConfig {
    /// Absolute working copy location for a given base directory.
    pub fn resolve_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.path)
    }
}

const REQUIRED_KEYS: [&str; 3] = ["path", "url", "version"];

/// Look up `name` in repository configuration JSON. `path` is only used for error messages.
pub fn parse_repo_config(path: &Path, content: &str, name: &str) -> Result<RepoConfig, AppError> {
    let format_error =
        |details: String| AppError::ConfigFormat { path: path.to_path_buf(), details };

    let document: Value =
        serde_json::from_str(content).map_err(|e| format_error(e.to_string()))?;
    let Value::Object(repositories) = document else {
        return Err(format_error("top level must be an object of repositories".to_string()));
    };

    let entry = repositories.get(name).ok_or_else(|| AppError::RepositoryNotConfigured {
        name: name.to_string(),
        path: path.to_path_buf(),
    })?;
    let Value::Object(entry) = entry else {
        return Err(format_error(format!("entry '{}' must be an object", name)));
    };

    let mut values = Vec::with_capacity(REQUIRED_KEYS.len());
    for key in REQUIRED_KEYS {
        values.push(required_string(entry, key, name, path)?);
    }
    let [repo_path, url, version]: [String; 3] =
        values.try_into().map_err(|_| format_error(format!("entry '{}' is incomplete", name)))?;

    Ok(RepoConfig { name: name.to_string(), path: PathBuf::from(repo_path), url, version })
}

fn required_string(
    entry: &Map<String, Value>,
    key: &str,
    name: &str,
    path: &Path,
) -> Result<String, AppError> {
    match entry.get(key) {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(AppError::ConfigFormat {
            path: path.to_path_buf(),
            details: format!("key '{}' of '{}' must be a string", key, name),
        }),
        None => Err(AppError::ConfigKeyMissing {
            key: key.to_string(),
            scope: name.to_string(),
            path: path.to_path_buf(),
        }),
    }
}
