//! loadout: bring Python packages and git checkouts up to date before an application starts.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    CheckoutOutcome, bootstrap, checkout_repository, installed_versions, launch, update_packages,
};
pub use app::commands::checkout_repository::{RepoManager, RepoOptions};
pub use app::commands::update_packages::Updater;
pub use app::config::{SettingsOverrides, load_settings};
pub use domain::{
    AppError, BootstrapReport, CancellationToken, InstalledVersion, InstalledVersions,
    LoadPathRegistry, LoaderSettings, RepoState, Step, StepReport,
};
