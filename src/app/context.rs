use crate::domain::LoaderSettings;
use crate::ports::{GitPort, PackageManager};

/// Application context holding settings and the external tool ports.
pub struct AppContext<P: PackageManager, G: GitPort> {
    settings: LoaderSettings,
    packages: P,
    git: G,
}

impl<P: PackageManager, G: GitPort> AppContext<P, G> {
    /// Create a new application context.
    pub fn new(settings: LoaderSettings, packages: P, git: G) -> Self {
        Self { settings, packages, git }
    }

    pub fn settings(&self) -> &LoaderSettings {
        &self.settings
    }

    /// Get a reference to the package manager.
    pub fn packages(&self) -> &P {
        &self.packages
    }

    /// Get a reference to the git port.
    pub fn git(&self) -> &G {
        &self.git
    }
}
