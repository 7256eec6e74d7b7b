//! Package updater: pip self-upgrade followed by pinned installs.

use std::path::{Path, PathBuf};

use crate::app::config::load_package_config;
use crate::domain::{AppError, InstalledVersion, InstalledVersions, UpdateConfig, parse_show_output};
use crate::ports::PackageManager;

/// Applies one package pin file through a package manager.
pub struct Updater<P: PackageManager> {
    config: UpdateConfig,
    config_path: PathBuf,
    packages: P,
}

impl<P: PackageManager> Updater<P> {
    /// Load the pin file at `config_path`.
    pub fn load(config_path: &Path, packages: P) -> Result<Self, AppError> {
        let config = load_package_config(config_path)?;
        Ok(Self::from_config(config, config_path.to_path_buf(), packages))
    }

    pub fn from_config(config: UpdateConfig, config_path: PathBuf, packages: P) -> Self {
        Self { config, config_path, packages }
    }

    pub fn config(&self) -> &UpdateConfig {
        &self.config
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Query the installed version of every configured package.
    ///
    /// Query failures are recorded as `Unparseable` rather than propagated.
    pub fn installed_versions(&self) -> InstalledVersions {
        let mut versions = InstalledVersions::new();
        for name in self.config.package_names() {
            let version = match self.packages.show(name) {
                Ok(output) => parse_show_output(&output),
                Err(e) => {
                    tracing::debug!("Version query for '{}' failed: {}", name, e);
                    InstalledVersion::Unparseable
                }
            };
            versions.insert(name, version);
        }
        versions
    }

    /// Upgrade pip, then install every configured package in order.
    ///
    /// Stops at the first failing package; packages installed before it stay installed.
    pub fn run_update(&self) -> Result<(), AppError> {
        let packages = self.config.packages.as_ref().ok_or(AppError::PackagesNotDefined)?;

        self.packages.self_upgrade()?;
        tracing::debug!("pip upgraded");

        for pin in packages {
            tracing::debug!("Installing {}", pin);
            self.packages.install(pin)?;
        }
        Ok(())
    }
}
