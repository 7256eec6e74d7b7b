//! Outcome records for the bootstrap sequence.

use chrono::{DateTime, Utc};

use crate::domain::{AppError, LoadPathRegistry};

/// The fixed steps of a bootstrap run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    FrameworkPackages,
    ConfigurationRepository,
    SystemPackages,
    ApplicationRepository,
}

impl Step {
    pub const ALL: [Step; 4] = [
        Step::FrameworkPackages,
        Step::ConfigurationRepository,
        Step::SystemPackages,
        Step::ApplicationRepository,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Step::FrameworkPackages => "framework packages",
            Step::ConfigurationRepository => "configuration repository",
            Step::SystemPackages => "system packages",
            Step::ApplicationRepository => "application repository",
        }
    }

    /// Line logged when the step succeeds.
    pub fn success_message(self) -> &'static str {
        match self {
            Step::FrameworkPackages | Step::SystemPackages => "Packages updated successfully.",
            Step::ConfigurationRepository => "Configuration repository is up to date",
            Step::ApplicationRepository => "Application repository is up to date",
        }
    }

    /// Line logged when the step fails with `error`.
    pub fn failure_message(self, error: &AppError) -> String {
        match self {
            Step::FrameworkPackages | Step::SystemPackages => {
                format!("Error while updating packages. {}", error)
            }
            Step::ConfigurationRepository | Step::ApplicationRepository => error.to_string(),
        }
    }
}

/// Result of a single step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub step: Step,
    pub success: bool,
    pub message: String,
}

impl StepReport {
    pub fn from_result<T>(step: Step, result: &Result<T, AppError>) -> Self {
        match result {
            Ok(_) => Self { step, success: true, message: step.success_message().to_string() },
            Err(err) => Self { step, success: false, message: step.failure_message(err) },
        }
    }
}

/// Aggregate result of a full bootstrap run.
#[derive(Debug, Clone)]
pub struct BootstrapReport {
    pub steps: Vec<StepReport>,
    pub load_paths: LoadPathRegistry,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl BootstrapReport {
    pub fn succeeded(&self) -> usize {
        self.steps.iter().filter(|s| s.success).count()
    }

    pub fn all_succeeded(&self) -> bool {
        self.succeeded() == self.steps.len()
    }

    pub fn step(&self, step: Step) -> Option<&StepReport> {
        self.steps.iter().find(|s| s.step == step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_failure_is_prefixed() {
        let result: Result<(), AppError> = Err(AppError::PackagesNotDefined);
        let report = StepReport::from_result(Step::SystemPackages, &result);
        assert!(!report.success);
        assert_eq!(
            report.message,
            "Error while updating packages. Packages is not defined in configuration file"
        );
    }

    #[test]
    fn repository_success_uses_step_message() {
        let report = StepReport::from_result(Step::ApplicationRepository, &Ok::<(), AppError>(()));
        assert!(report.success);
        assert_eq!(report.message, "Application repository is up to date");
    }
}
