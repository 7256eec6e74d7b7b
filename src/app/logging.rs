//! Log output to `main.log` and stderr.

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::domain::{AppError, LoaderSettings};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Install the global subscriber. Keep the returned guard alive until exit so
/// buffered file output is flushed.
pub fn init(settings: &LoaderSettings) -> Result<WorkerGuard, AppError> {
    let log_path = settings.log_file_path();
    let (dir, file_name) = match (log_path.parent(), log_path.file_name()) {
        (Some(dir), Some(name)) => (dir.to_path_buf(), name.to_os_string()),
        _ => {
            return Err(AppError::Logging(format!(
                "invalid log file path: {}",
                log_path.display()
            )));
        }
    };
    fs::create_dir_all(&dir)?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.log_level).map_err(|e| {
            AppError::Logging(format!("invalid log level '{}': {}", settings.log_level, e))
        })?,
    };

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (file_writer, guard) = tracing_appender::non_blocking(appender);
    let timer = ChronoLocal::new(TIMESTAMP_FORMAT.to_string());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(false)
        .with_timer(timer.clone());
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_timer(timer);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    Ok(guard)
}
