use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Library-wide error type for loadout operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration file does not exist.
    #[error("Configuration file '{}' is not found.", .0.display())]
    ConfigNotFound(PathBuf),

    /// Configuration file content cannot be parsed.
    #[error("Configuration file '{}' format is not supported. {details}", path.display())]
    ConfigFormat { path: PathBuf, details: String },

    /// A required key is absent from a loaded configuration.
    #[error("Key: '{key}' is not defined for '{scope}' in configuration file: '{}'.", path.display())]
    ConfigKeyMissing { key: String, scope: String, path: PathBuf },

    /// Requested repository entry is absent from the repository configuration.
    #[error("Repository name: '{name}' was not found in configuration file: '{}'.", path.display())]
    RepositoryNotConfigured { name: String, path: PathBuf },

    /// Loader settings file could not be parsed.
    #[error("Settings parse error in '{}': {details}", path.display())]
    SettingsFormat { path: PathBuf, details: String },

    /// Package configuration carries no package list.
    #[error("Packages is not defined in configuration file")]
    PackagesNotDefined,

    /// pip failed to upgrade itself.
    #[error("Error while running pip upgrade")]
    PipUpgradeFailed { details: String },

    /// An external command exited with a non-zero status.
    #[error("Error while running command: '{command}'.")]
    CommandFailed { command: String, code: Option<i32>, details: String },

    /// An external command could not be started.
    #[error("Failed to start '{command}': {details}")]
    CommandSpawn { command: String, details: String },

    /// An external command exceeded its time budget.
    #[error("Command '{command}' timed out after {timeout:?}")]
    CommandTimedOut { command: String, timeout: Duration },

    /// An external command was cancelled before it finished.
    #[error("Command '{command}' was cancelled")]
    CommandCancelled { command: String },

    /// Initial clone of a repository failed.
    #[error("Error while cloning the repository. Check internet connection.")]
    CloneFailed { url: String, details: String },

    /// Repository inspection through libgit2 failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// No usable Python interpreter could be located.
    #[error("Python interpreter not found: {0}")]
    PythonNotFound(String),

    /// Logging could not be initialized.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

impl AppError {
    /// Underlying diagnostic text for errors whose display message is fixed.
    pub fn details(&self) -> Option<&str> {
        match self {
            AppError::PipUpgradeFailed { details }
            | AppError::CommandFailed { details, .. }
            | AppError::CloneFailed { details, .. }
            | AppError::GitError { details, .. }
            | AppError::CommandSpawn { details, .. }
            | AppError::ConfigFormat { details, .. }
            | AppError::SettingsFormat { details, .. } => {
                Some(details.as_str()).filter(|d| !d.is_empty())
            }
            _ => None,
        }
    }

    /// Whether the error came from a command exceeding its time budget or being cancelled.
    pub fn is_interrupted(&self) -> bool {
        matches!(self, AppError::CommandTimedOut { .. } | AppError::CommandCancelled { .. })
    }

    /// Provide an `io::ErrorKind`-like view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::ConfigNotFound(_)
            | AppError::RepositoryNotConfigured { .. }
            | AppError::PythonNotFound(_) => io::ErrorKind::NotFound,
            AppError::ConfigFormat { .. }
            | AppError::ConfigKeyMissing { .. }
            | AppError::SettingsFormat { .. }
            | AppError::PackagesNotDefined => io::ErrorKind::InvalidInput,
            AppError::CommandTimedOut { .. } => io::ErrorKind::TimedOut,
            AppError::CommandCancelled { .. } => io::ErrorKind::Interrupted,
            AppError::PipUpgradeFailed { .. }
            | AppError::CommandFailed { .. }
            | AppError::CommandSpawn { .. }
            | AppError::CloneFailed { .. }
            | AppError::GitError { .. }
            | AppError::Logging(_) => io::ErrorKind::Other,
        }
    }
}
