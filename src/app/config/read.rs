use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::domain::AppError;

/// Read a configuration file, reporting absence as `ConfigNotFound`.
pub(crate) fn read_config_file(path: &Path) -> Result<String, AppError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(AppError::ConfigNotFound(path.to_path_buf()))
        }
        Err(e) if e.kind() == ErrorKind::InvalidData => Err(AppError::ConfigFormat {
            path: path.to_path_buf(),
            details: e.to_string(),
        }),
        Err(e) => Err(AppError::Io(e)),
    }
}
