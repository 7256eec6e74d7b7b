//! Installed package version snapshot.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Detected installation state of a single package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstalledVersion {
    Installed(String),
    /// The package manager printed nothing for the package.
    NotInstalled,
    /// Output was present but carried no version, or the query failed.
    Unparseable,
}

impl InstalledVersion {
    pub fn version(&self) -> Option<&str> {
        match self {
            InstalledVersion::Installed(version) => Some(version),
            _ => None,
        }
    }
}

impl fmt::Display for InstalledVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstalledVersion::Installed(version) => f.write_str(version),
            InstalledVersion::NotInstalled => f.write_str("not installed"),
            InstalledVersion::Unparseable => f.write_str("unknown"),
        }
    }
}

/// Installed versions keyed by package name, in configuration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstalledVersions {
    entries: Vec<(String, InstalledVersion)>,
}

impl InstalledVersions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, version: InstalledVersion) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = version,
            None => self.entries.push((name, version)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&InstalledVersion> {
        self.entries.iter().find(|(existing, _)| existing == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &InstalledVersion)> {
        self.entries.iter().map(|(name, version)| (name.as_str(), version))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn version_line() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?m)^Version:[ \t]*(\S+)[ \t]*\r?$").expect("version pattern is valid")
    })
}

/// Interpret the text printed by `pip show <name>`.
pub fn parse_show_output(output: &str) -> InstalledVersion {
    if output.trim().is_empty() {
        return InstalledVersion::NotInstalled;
    }
    match version_line().captures(output).and_then(|caps| caps.get(1)) {
        Some(version) => InstalledVersion::Installed(version.as_str().to_string()),
        None => InstalledVersion::Unparseable,
    }
}
