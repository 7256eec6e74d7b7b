//! Hand-off to the downstream application.

use std::path::Path;
use std::process::Command;

use crate::domain::{AppError, LaunchSettings, LoadPathRegistry};

/// Start the configured application and wait for it.
///
/// The registered load paths are prepended to the environment variable named
/// by `load_path_env`. Returns the application's exit code, or `None` when
/// no launch command is configured.
pub fn execute(
    launch: &LaunchSettings,
    working_dir: &Path,
    load_paths: &LoadPathRegistry,
) -> Result<Option<i32>, AppError> {
    let Some((program, args)) = launch.command.split_first() else {
        return Ok(None);
    };

    let existing = std::env::var_os(&launch.load_path_env);
    let value = load_paths.to_env_value(existing).map_err(|e| AppError::CommandSpawn {
        command: launch.command.join(" "),
        details: format!("cannot export {}: {}", launch.load_path_env, e),
    })?;

    tracing::info!("Launching application: {}", launch.command.join(" "));
    let status = Command::new(program)
        .args(args)
        .current_dir(working_dir)
        .env(&launch.load_path_env, value)
        .status()
        .map_err(|e| AppError::CommandSpawn {
            command: launch.command.join(" "),
            details: e.to_string(),
        })?;

    let code = status.code().unwrap_or(1);
    if code == 0 {
        tracing::info!("Application exited normally");
    } else {
        tracing::error!("Application exited with code {}", code);
    }
    Ok(Some(code))
}
