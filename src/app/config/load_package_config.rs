//! Package pin file loading.

use std::path::Path;

use crate::domain::config::parse_package_config;
use crate::domain::{AppError, UpdateConfig};

use super::read_config_file;

/// Load and parse a package pin file.
pub fn load_package_config(path: &Path) -> Result<UpdateConfig, AppError> {
    let content = read_config_file(path)?;
    let config = parse_package_config(path, &content)?;
    tracing::debug!(
        "Loaded {} package pin(s) from {}",
        config.package_names().count(),
        path.display()
    );
    Ok(config)
}
