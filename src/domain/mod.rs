pub mod command;
pub mod config;
pub mod error;
pub mod installed;
pub mod load_paths;
pub mod report;
pub mod repository;

pub use command::{CancellationToken, CommandOutput, CommandSpec};
pub use config::{
    LaunchSettings, LoaderSettings, PackagePin, PackageSettings, RepoConfig, RepositorySettings,
    UpdateConfig, VersionRequirement,
};
pub use error::AppError;
pub use installed::{InstalledVersion, InstalledVersions, parse_show_output};
pub use load_paths::LoadPathRegistry;
pub use report::{BootstrapReport, Step, StepReport};
pub use repository::RepoState;
