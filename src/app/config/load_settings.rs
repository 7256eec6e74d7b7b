//! Loader settings resolution: defaults, optional `loadout.toml`, CLI overrides.

use std::path::{Path, PathBuf};

use crate::domain::config::{SETTINGS_FILE, parse_settings};
use crate::domain::{AppError, LoaderSettings};

use super::read_config_file;

/// Values supplied on the command line; they win over the settings file.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub base_dir: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub python: Option<PathBuf>,
    pub launch: Vec<String>,
}

/// Resolve loader settings.
///
/// An explicit `settings_path` must exist. Without one, `loadout.toml` in the
/// working directory is used when present. A relative `base_dir` resolves
/// against the settings file's directory.
pub fn load_settings(
    settings_path: Option<&Path>,
    overrides: SettingsOverrides,
) -> Result<LoaderSettings, AppError> {
    let cwd = std::env::current_dir()?;
    let discovered = cwd.join(SETTINGS_FILE);
    let path = match settings_path {
        Some(path) => Some(cwd.join(path)),
        None if discovered.is_file() => Some(discovered),
        None => None,
    };

    let mut settings = match &path {
        Some(path) => {
            let content = read_config_file(path)?;
            let mut settings = parse_settings(path, &content)?;
            let anchor = path.parent().unwrap_or(&cwd);
            settings.base_dir = normalize(&anchor.join(&settings.base_dir));
            settings
        }
        None => LoaderSettings { base_dir: cwd.clone(), ..LoaderSettings::default() },
    };

    if let Some(base_dir) = overrides.base_dir {
        settings.base_dir = normalize(&cwd.join(base_dir));
    }
    if let Some(log_file) = overrides.log_file {
        settings.log_file = cwd.join(log_file);
    }
    if let Some(python) = overrides.python {
        settings.packages.python = Some(python);
    }
    if !overrides.launch.is_empty() {
        settings.launch.command = overrides.launch;
    }

    Ok(settings)
}

/// Drop `.` components so derived paths read cleanly in logs and load paths.
fn normalize(path: &Path) -> PathBuf {
    path.components().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn explicit_settings_anchor_relative_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loadout.toml");
        fs::write(&path, "base_dir = \"deploy\"\n[launch]\ncommand = [\"python3\", \"main.py\"]\n")
            .unwrap();

        let settings = load_settings(Some(&path), SettingsOverrides::default()).unwrap();
        assert_eq!(settings.base_dir, dir.path().join("deploy"));
        assert_eq!(settings.launch.command, vec!["python3", "main.py"]);
    }

    #[test]
    fn overrides_win_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[launch]\ncommand = [\"python3\", \"main.py\"]\n").unwrap();

        let overrides = SettingsOverrides {
            base_dir: Some(dir.path().join("other")),
            log_file: None,
            python: Some(PathBuf::from("/opt/python/bin/python3")),
            launch: vec!["./run.sh".to_string()],
        };
        let settings = load_settings(Some(&path), overrides).unwrap();
        assert_eq!(settings.base_dir, dir.path().join("other"));
        assert_eq!(settings.packages.python, Some(PathBuf::from("/opt/python/bin/python3")));
        assert_eq!(settings.launch.command, vec!["./run.sh"]);
    }

    #[test]
    fn default_base_dir_is_settings_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loadout.toml");
        fs::write(&path, "").unwrap();

        let settings = load_settings(Some(&path), SettingsOverrides::default()).unwrap();
        assert_eq!(settings.base_dir, dir.path());
        assert_eq!(settings.log_file_path(), dir.path().join("main.log"));
    }

    #[test]
    fn explicit_missing_settings_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_settings(Some(&dir.path().join("nope.toml")), SettingsOverrides::default())
            .unwrap_err();
        assert!(matches!(err, AppError::ConfigNotFound(_)));
    }
}
