use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Shell script standing in for a Python interpreter running pip.
///
/// Every invocation is appended to a log. Invocations containing the failing
/// pattern exit 1. `-m pip show <name>` prints a version for known packages.
pub(crate) struct FakePython {
    pub path: PathBuf,
    pub log_file: PathBuf,
}

impl FakePython {
    pub(crate) fn new(
        dir: &Path,
        failing_pattern: Option<&str>,
        installed: &[(&str, &str)],
    ) -> Self {
        fs::create_dir_all(dir).expect("Failed to create fake python dir");
        let path = dir.join("python");
        let log_file = dir.join("python.log");

        let fail_case = match failing_pattern {
            Some(pattern) => format!("    *\"{}\"*) exit 1 ;;\n", pattern),
            None => String::new(),
        };
        let show_cases: String = installed
            .iter()
            .map(|(name, version)| {
                format!("        {}) printf 'Name: {}\\nVersion: {}\\n' ;;\n", name, name, version)
            })
            .collect();

        let script = format!(
            r#"#!/bin/sh
echo "$@" >> "{log}"
case "$*" in
{fail_case}    *) ;;
esac
if [ "$3" = "show" ]; then
    case "$4" in
{show_cases}        *) echo "WARNING: Package(s) not found: $4" >&2; exit 1 ;;
    esac
fi
exit 0
"#,
            log = log_file.to_string_lossy(),
            fail_case = fail_case,
            show_cases = show_cases,
        );

        fs::write(&path, script).expect("Failed to write fake python");
        let mut perms = fs::metadata(&path).expect("Failed to get metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("Failed to set permissions");

        Self { path, log_file }
    }

    /// Logged invocations, one argument string per line.
    pub(crate) fn invocations(&self) -> Vec<String> {
        fs::read_to_string(&self.log_file)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}
