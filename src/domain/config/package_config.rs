//! Pure parse/validate for package pin files.

use std::fmt;
use std::path::Path;

use serde_json::{Map, Value};

use crate::domain::AppError;

/// Version constraint for one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionRequirement {
    /// Empty string in the file: install whatever is newest.
    Latest,
    Exact(String),
}

/// A package and the version it must be installed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagePin {
    pub name: String,
    pub requirement: VersionRequirement,
}

impl PackagePin {
    pub fn new(name: impl Into<String>, version: &str) -> Self {
        let requirement = if version.is_empty() {
            VersionRequirement::Latest
        } else {
            VersionRequirement::Exact(version.to_string())
        };
        Self { name: name.into(), requirement }
    }

    /// Requirement specifier understood by pip (`name` or `name==version`).
    pub fn specifier(&self) -> String {
        match &self.requirement {
            VersionRequirement::Latest => self.name.clone(),
            VersionRequirement::Exact(version) => format!("{}=={}", self.name, version),
        }
    }
}

impl fmt::Display for PackagePin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.specifier())
    }
}

/// Package list loaded from a pin file.
///
/// `packages` is `None` when the file has no `packages` key, which is a
/// valid but inert configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateConfig {
    pub packages: Option<Vec<PackagePin>>,
}

impl UpdateConfig {
    pub fn package_names(&self) -> impl Iterator<Item = &str> {
        self.packages.iter().flatten().map(|pin| pin.name.as_str())
    }
}

/// Parse package pin JSON. `path` is only used for error messages.
pub fn parse_package_config(path: &Path, content: &str) -> Result<UpdateConfig, AppError> {
    let format_error =
        |details: String| AppError::ConfigFormat { path: path.to_path_buf(), details };

    let document: Value =
        serde_json::from_str(content).map_err(|e| format_error(e.to_string()))?;
    let Value::Object(mut document) = document else {
        return Err(format_error("top level must be an object".to_string()));
    };

    let entries: Map<String, Value> = match document.remove("packages") {
        None | Some(Value::Null) => return Ok(UpdateConfig { packages: None }),
        Some(Value::Object(entries)) => entries,
        Some(_) => return Err(format_error("'packages' must be an object".to_string())),
    };

    let mut packages = Vec::with_capacity(entries.len());
    for (name, version) in entries {
        let Value::String(version) = version else {
            return Err(AppError::ConfigFormat {
                path: path.to_path_buf(),
                details: format!("version of package '{}' must be a string", name),
            });
        };
        packages.push(PackagePin::new(name, version.trim()));
    }

    Ok(UpdateConfig { packages: Some(packages) })
}
