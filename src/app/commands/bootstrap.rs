//! Startup sequence: packages and repositories, best effort.

use std::path::Path;

use chrono::Utc;

use crate::app::AppContext;
use crate::app::commands::checkout_repository::{RepoManager, RepoOptions};
use crate::app::commands::update_packages::Updater;
use crate::domain::{AppError, BootstrapReport, LoadPathRegistry, Step, StepReport};
use crate::ports::{GitPort, PackageManager};

/// Run the four bootstrap steps in order.
///
/// A failing step is logged and recorded; it never stops the steps after it.
pub fn execute<P, G>(ctx: &AppContext<P, G>) -> BootstrapReport
where
    P: PackageManager,
    G: GitPort,
{
    let settings = ctx.settings();
    let started_at = Utc::now();
    let mut load_paths = LoadPathRegistry::new();
    let repo_options = RepoOptions {
        base_dir: settings.base_dir.clone(),
        clone_branch: settings.repositories.clone_branch.clone(),
    };

    let mut steps = Vec::with_capacity(Step::ALL.len());
    for step in Step::ALL {
        tracing::debug!("Starting step: {}", step.label());
        let result = match step {
            Step::FrameworkPackages => {
                update_packages(ctx.packages(), &settings.framework_packages_path())
            }
            Step::ConfigurationRepository => checkout_repository(
                ctx.git(),
                &settings.default_repo_config_path(),
                &settings.repositories.configuration_name,
                &repo_options,
                &mut load_paths,
            ),
            Step::SystemPackages => {
                update_packages(ctx.packages(), &settings.system_packages_path())
            }
            Step::ApplicationRepository => checkout_repository(
                ctx.git(),
                &settings.application_repo_config_path(),
                &settings.repositories.application_name,
                &repo_options,
                &mut load_paths,
            ),
        };

        let report = StepReport::from_result(step, &result);
        if report.success {
            tracing::info!("{}", report.message);
        } else {
            tracing::error!("{}", report.message);
            if let Some(details) = result.as_ref().err().and_then(AppError::details) {
                tracing::debug!("{} failure details: {}", step.label(), details);
            }
        }
        steps.push(report);
    }

    let report = BootstrapReport { steps, load_paths, started_at, finished_at: Utc::now() };
    tracing::info!(
        "Bootstrap finished: {}/{} steps succeeded in {} ms",
        report.succeeded(),
        report.steps.len(),
        (report.finished_at - report.started_at).num_milliseconds()
    );
    report
}

fn update_packages<P: PackageManager>(packages: &P, config_path: &Path) -> Result<(), AppError> {
    let updater = Updater::load(config_path, packages)?;
    let result = updater.run_update();
    for (name, version) in updater.installed_versions().iter() {
        tracing::debug!("Installed version of {}: {}", name, version);
    }
    result
}

fn checkout_repository<G: GitPort>(
    git: &G,
    config_path: &Path,
    name: &str,
    options: &RepoOptions,
    load_paths: &mut LoadPathRegistry,
) -> Result<(), AppError> {
    let mut manager = RepoManager::load(config_path, name, options, git, load_paths)?;
    manager.checkout()?;
    if let Ok(revision) = manager.head_revision() {
        tracing::debug!("'{}' is at {}", name, revision);
    }
    Ok(())
}
