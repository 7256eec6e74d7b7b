//! File-backed configuration loaders.
//!
//! Reading files and mapping filesystem failures to typed errors lives here;
//! pure parsing lives in `domain::config`.

mod load_package_config;
mod load_repo_config;
mod load_settings;
mod read;

pub use load_package_config::load_package_config;
pub use load_repo_config::load_repo_config;
pub use load_settings::{SettingsOverrides, load_settings};
pub(crate) use read::read_config_file;
