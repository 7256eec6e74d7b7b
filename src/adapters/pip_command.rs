use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::{AppError, CommandOutput, CommandSpec, PackagePin};
use crate::ports::{CommandRunner, PackageManager};

/// Interpreter names tried, in order, when none is configured.
const PYTHON_CANDIDATES: [&str; 2] = ["python3", "python"];

/// pip driven through `<python> -m pip`.
#[derive(Debug, Clone)]
pub struct PipCommandAdapter<R: CommandRunner> {
    python: PathBuf,
    runner: R,
    timeout: Duration,
}

impl<R: CommandRunner> PipCommandAdapter<R> {
    pub fn new(python: PathBuf, runner: R, timeout: Duration) -> Self {
        Self { python, runner, timeout }
    }

    fn pip(&self, args: &[&str]) -> CommandSpec {
        CommandSpec::new(&self.python, self.timeout).args(["-m", "pip"]).args(args.iter().copied())
    }

    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, AppError> {
        self.runner.run(spec)
    }
}

impl<R: CommandRunner> PackageManager for PipCommandAdapter<R> {
    fn self_upgrade(&self) -> Result<(), AppError> {
        let output = self.run(&self.pip(&["install", "--upgrade", "pip"]))?;
        if !output.success() {
            return Err(AppError::PipUpgradeFailed { details: output.diagnostics() });
        }
        Ok(())
    }

    fn install(&self, pin: &PackagePin) -> Result<(), AppError> {
        let spec = self.pip(&["install", "--user", &pin.specifier()]);
        let output = self.run(&spec)?;
        if !output.success() {
            return Err(AppError::CommandFailed {
                command: spec.display(),
                code: output.code,
                details: output.diagnostics(),
            });
        }
        Ok(())
    }

    fn show(&self, name: &str) -> Result<String, AppError> {
        // `pip show` exits non-zero for unknown packages; the empty stdout carries that.
        let output = self.run(&self.pip(&["show", name]))?;
        Ok(output.stdout)
    }
}

/// Resolve the interpreter used for pip.
///
/// A configured value containing a path separator is used as-is; a bare name
/// is looked up on `PATH`. Without configuration `python3`, then `python`, is tried.
pub fn locate_python(configured: Option<&Path>) -> Result<PathBuf, AppError> {
    match configured {
        Some(path) if path.components().count() > 1 => Ok(path.to_path_buf()),
        Some(name) => which::which(name)
            .map_err(|e| AppError::PythonNotFound(format!("{}: {}", name.display(), e))),
        None => PYTHON_CANDIDATES
            .iter()
            .find_map(|candidate| which::which(candidate).ok())
            .ok_or_else(|| {
                let candidates = PYTHON_CANDIDATES.join(", ");
                AppError::PythonNotFound(format!("none of {} on PATH", candidates))
            }),
    }
}
