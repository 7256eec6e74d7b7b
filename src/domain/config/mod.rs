pub mod package_config;
pub mod repo_config;
pub mod settings;

pub use package_config::{PackagePin, UpdateConfig, VersionRequirement, parse_package_config};
pub use repo_config::{RepoConfig, parse_repo_config};
pub use settings::{
    LaunchSettings, LoaderSettings, PackageSettings, RepositorySettings, SETTINGS_FILE,
    parse_settings,
};
