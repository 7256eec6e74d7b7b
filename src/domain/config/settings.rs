//! Loader settings (`loadout.toml`).

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::domain::AppError;

/// Default settings file name looked up in the working directory.
pub const SETTINGS_FILE: &str = "loadout.toml";

/// Top-level loader settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoaderSettings {
    /// Directory that relative paths resolve against.
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub packages: PackageSettings,
    #[serde(default)]
    pub repositories: RepositorySettings,
    #[serde(default)]
    pub launch: LaunchSettings,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            log_file: default_log_file(),
            log_level: default_log_level(),
            packages: PackageSettings::default(),
            repositories: RepositorySettings::default(),
            launch: LaunchSettings::default(),
        }
    }
}

/// Package updater settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageSettings {
    /// Interpreter used to run pip; discovered on `PATH` when unset.
    #[serde(default)]
    pub python: Option<PathBuf>,
    #[serde(default = "default_framework_config")]
    pub framework_config: PathBuf,
    /// Pin file shipped inside the configuration repository.
    #[serde(default = "default_system_config")]
    pub system_config: PathBuf,
    #[serde(default = "default_package_timeout")]
    pub timeout_secs: u64,
}

impl Default for PackageSettings {
    fn default() -> Self {
        Self {
            python: None,
            framework_config: default_framework_config(),
            system_config: default_system_config(),
            timeout_secs: default_package_timeout(),
        }
    }
}

impl PackageSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Repository manager settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepositorySettings {
    #[serde(default = "default_git")]
    pub git: PathBuf,
    #[serde(default = "default_repo_config")]
    pub default_config: PathBuf,
    /// Repository file shipped inside the configuration repository.
    #[serde(default = "default_application_config")]
    pub application_config: PathBuf,
    #[serde(default = "default_configuration_name")]
    pub configuration_name: String,
    #[serde(default = "default_application_name")]
    pub application_name: String,
    /// Branch used for the initial clone.
    #[serde(default = "default_clone_branch")]
    pub clone_branch: String,
    #[serde(default = "default_git_timeout")]
    pub timeout_secs: u64,
}

impl Default for RepositorySettings {
    fn default() -> Self {
        Self {
            git: default_git(),
            default_config: default_repo_config(),
            application_config: default_application_config(),
            configuration_name: default_configuration_name(),
            application_name: default_application_name(),
            clone_branch: default_clone_branch(),
            timeout_secs: default_git_timeout(),
        }
    }
}

impl RepositorySettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Downstream application hand-off.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LaunchSettings {
    /// Program and arguments; nothing is launched when empty.
    #[serde(default)]
    pub command: Vec<String>,
    /// Environment variable that receives the registered load paths.
    #[serde(default = "default_load_path_env")]
    pub load_path_env: String,
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self { command: Vec::new(), load_path_env: default_load_path_env() }
    }
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_log_file() -> PathBuf {
    PathBuf::from("main.log")
}

fn default_log_level() -> String {
    "debug".to_string()
}

fn default_framework_config() -> PathBuf {
    PathBuf::from("package_manager/config.json")
}

fn default_system_config() -> PathBuf {
    PathBuf::from("configuration/update_manager.json")
}

fn default_package_timeout() -> u64 {
    900
}

fn default_git() -> PathBuf {
    PathBuf::from("git")
}

fn default_repo_config() -> PathBuf {
    PathBuf::from("repo_manager/config.json")
}

fn default_application_config() -> PathBuf {
    PathBuf::from("configuration/repo_manager.json")
}

fn default_configuration_name() -> String {
    "configuration".to_string()
}

fn default_application_name() -> String {
    "application".to_string()
}

fn default_clone_branch() -> String {
    "master".to_string()
}

fn default_git_timeout() -> u64 {
    300
}

fn default_load_path_env() -> String {
    "PYTHONPATH".to_string()
}

impl LoaderSettings {
    /// Resolve a settings path against the base directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.base_dir.join(path)
    }

    pub fn framework_packages_path(&self) -> PathBuf {
        self.resolve(&self.packages.framework_config)
    }

    pub fn system_packages_path(&self) -> PathBuf {
        self.resolve(&self.packages.system_config)
    }

    pub fn default_repo_config_path(&self) -> PathBuf {
        self.resolve(&self.repositories.default_config)
    }

    pub fn application_repo_config_path(&self) -> PathBuf {
        self.resolve(&self.repositories.application_config)
    }

    pub fn log_file_path(&self) -> PathBuf {
        self.resolve(&self.log_file)
    }

    fn validate(&self, path: &Path) -> Result<(), AppError> {
        let invalid = |details: &str| AppError::SettingsFormat {
            path: path.to_path_buf(),
            details: details.to_string(),
        };
        if self.packages.timeout_secs == 0 {
            return Err(invalid("packages.timeout_secs must be greater than zero"));
        }
        if self.repositories.timeout_secs == 0 {
            return Err(invalid("repositories.timeout_secs must be greater than zero"));
        }
        if self.repositories.clone_branch.trim().is_empty() {
            return Err(invalid("repositories.clone_branch must not be empty"));
        }
        if self.launch.load_path_env.trim().is_empty() {
            return Err(invalid("launch.load_path_env must not be empty"));
        }
        Ok(())
    }
}

/// Parse and validate settings TOML. `path` is only used for error messages.
pub fn parse_settings(path: &Path, content: &str) -> Result<LoaderSettings, AppError> {
    let settings: LoaderSettings = toml::from_str(content).map_err(|e| AppError::SettingsFormat {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;
    settings.validate(path)?;
    Ok(settings)
}
