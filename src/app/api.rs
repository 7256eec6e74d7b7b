//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together adapter
//! construction and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::{GitCommandAdapter, PipCommandAdapter, ProcessCommandRunner, locate_python};
use crate::app::AppContext;
use crate::app::commands::checkout_repository::{RepoManager, RepoOptions};
use crate::app::commands::update_packages::Updater;
use crate::app::commands::{bootstrap, launch};
use crate::domain::{
    AppError, BootstrapReport, CancellationToken, InstalledVersions, LoadPathRegistry,
    LoaderSettings, RepoState,
};

/// Result of a single-repository checkout.
#[derive(Debug, Clone)]
pub struct CheckoutOutcome {
    pub name: String,
    pub path: PathBuf,
    pub version: String,
    /// Commit id after checkout, when it could be read.
    pub revision: Option<String>,
    pub state: RepoState,
}

fn cancellable_runner(cancel: &CancellationToken) -> ProcessCommandRunner {
    ProcessCommandRunner::new().with_cancellation(cancel.clone())
}

fn pip_adapter(
    settings: &LoaderSettings,
    runner: ProcessCommandRunner,
) -> Result<PipCommandAdapter<ProcessCommandRunner>, AppError> {
    let python = locate_python(settings.packages.python.as_deref())?;
    Ok(PipCommandAdapter::new(python, runner, settings.packages.timeout()))
}

fn git_adapter(
    settings: &LoaderSettings,
    runner: ProcessCommandRunner,
) -> GitCommandAdapter<ProcessCommandRunner> {
    GitCommandAdapter::new(
        settings.repositories.git.clone(),
        runner,
        settings.repositories.timeout(),
    )
}

fn repo_options(settings: &LoaderSettings) -> RepoOptions {
    RepoOptions {
        base_dir: settings.base_dir.clone(),
        clone_branch: settings.repositories.clone_branch.clone(),
    }
}

/// Run the full bootstrap sequence. Step failures are recorded in the report.
pub fn bootstrap(
    settings: &LoaderSettings,
    cancel: &CancellationToken,
) -> Result<BootstrapReport, AppError> {
    let runner = cancellable_runner(cancel);

    let pip = match pip_adapter(settings, runner.clone()) {
        Ok(pip) => pip,
        Err(e) => {
            // Package steps will fail to spawn and be reported; repositories still proceed.
            tracing::warn!("{}", e);
            let fallback =
                settings.packages.python.clone().unwrap_or_else(|| PathBuf::from("python3"));
            PipCommandAdapter::new(fallback, runner.clone(), settings.packages.timeout())
        }
    };
    let git = git_adapter(settings, runner);

    let ctx = AppContext::new(settings.clone(), pip, git);
    Ok(bootstrap::execute(&ctx))
}

/// Start the configured downstream application, if any.
pub fn launch(
    settings: &LoaderSettings,
    load_paths: &LoadPathRegistry,
) -> Result<Option<i32>, AppError> {
    launch::execute(&settings.launch, &settings.base_dir, load_paths)
}

/// Apply one package pin file and return the resulting installed versions.
pub fn update_packages(
    settings: &LoaderSettings,
    config: Option<&Path>,
    cancel: &CancellationToken,
) -> Result<InstalledVersions, AppError> {
    let pip = pip_adapter(settings, cancellable_runner(cancel))?;
    let config_path = resolve_or(settings, config, settings.framework_packages_path());
    let updater = Updater::load(&config_path, pip)?;
    updater.run_update()?;
    Ok(updater.installed_versions())
}

/// Report installed versions for the packages named in a pin file.
pub fn installed_versions(
    settings: &LoaderSettings,
    config: Option<&Path>,
    cancel: &CancellationToken,
) -> Result<InstalledVersions, AppError> {
    let pip = pip_adapter(settings, cancellable_runner(cancel))?;
    let config_path = resolve_or(settings, config, settings.framework_packages_path());
    Ok(Updater::load(&config_path, pip)?.installed_versions())
}

/// Provision and check out a single named repository.
pub fn checkout_repository(
    settings: &LoaderSettings,
    name: &str,
    config: Option<&Path>,
    cancel: &CancellationToken,
) -> Result<CheckoutOutcome, AppError> {
    let git = git_adapter(settings, cancellable_runner(cancel));
    let config_path = resolve_or(settings, config, settings.default_repo_config_path());
    let mut load_paths = LoadPathRegistry::new();

    let mut manager =
        RepoManager::load(&config_path, name, &repo_options(settings), git, &mut load_paths)?;
    manager.checkout()?;

    Ok(CheckoutOutcome {
        name: name.to_string(),
        path: manager.path().to_path_buf(),
        version: manager.config().version.clone(),
        revision: manager.head_revision().ok(),
        state: manager.state(),
    })
}

fn resolve_or(settings: &LoaderSettings, config: Option<&Path>, default: PathBuf) -> PathBuf {
    match config {
        Some(path) => settings.resolve(path),
        None => default,
    }
}
