//! CLI Adapter.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::api;
use crate::app::config::{SettingsOverrides, load_settings};
use crate::app::logging;
use crate::domain::{AppError, CancellationToken, InstalledVersions, LoaderSettings};

/// Conventional shell exit status for a process stopped by SIGINT.
const INTERRUPTED_EXIT_CODE: i32 = 130;

#[derive(Parser)]
#[command(name = "loadout")]
#[command(version)]
#[command(
    about = "Pin Python packages and check out configuration and application repositories at startup",
    long_about = None
)]
struct Cli {
    /// Settings file (defaults to ./loadout.toml when present)
    #[arg(short, long, global = true)]
    settings: Option<PathBuf>,
    /// Directory that relative paths resolve against
    #[arg(short, long, global = true)]
    base_dir: Option<PathBuf>,
    /// Log file location
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    /// Python interpreter used to run pip
    #[arg(long, global = true)]
    python: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Update packages and repositories, then launch the application (default)
    #[clap(visible_alias = "r")]
    Run {
        /// Application command to launch afterwards (after `--`)
        #[arg(last = true)]
        launch: Vec<String>,
    },
    /// Upgrade pip and install the packages pinned in a package file
    #[clap(visible_alias = "u")]
    Update {
        /// Package pin file (defaults to the framework pin file)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Show installed versions of the packages in a package file
    #[clap(visible_alias = "v")]
    Versions {
        /// Package pin file (defaults to the framework pin file)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Clone or open a repository, fetch, and check out its configured version
    #[clap(visible_alias = "co")]
    Checkout {
        /// Repository name in the repository file
        name: String,
        /// Repository file (defaults to the framework repository file)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn execute(cli: Cli) -> Result<i32, AppError> {
    let command = cli.command.unwrap_or(Commands::Run { launch: Vec::new() });
    let launch = match &command {
        Commands::Run { launch } => launch.clone(),
        _ => Vec::new(),
    };
    let overrides = SettingsOverrides {
        base_dir: cli.base_dir,
        log_file: cli.log_file,
        python: cli.python,
        launch,
    };
    let settings = load_settings(cli.settings.as_deref(), overrides)?;
    let _guard = logging::init(&settings)?;
    tracing::debug!("Base directory: {}", settings.base_dir.display());
    let cancel = interrupt_token();

    match command {
        Commands::Run { .. } => run_bootstrap(&settings, &cancel),
        Commands::Update { config } => {
            let config = absolute(config)?;
            let versions = api::update_packages(&settings, config.as_deref(), &cancel)?;
            println!("✅ Packages updated successfully.");
            print_versions(&versions);
            Ok(0)
        }
        Commands::Versions { config } => {
            let config = absolute(config)?;
            let versions = api::installed_versions(&settings, config.as_deref(), &cancel)?;
            print_versions(&versions);
            Ok(0)
        }
        Commands::Checkout { name, config } => {
            let config = absolute(config)?;
            let outcome =
                api::checkout_repository(&settings, &name, config.as_deref(), &cancel)?;
            match &outcome.revision {
                Some(revision) => println!(
                    "✅ '{}' at {} ({}) in {}",
                    outcome.name,
                    outcome.version,
                    revision,
                    outcome.path.display()
                ),
                None => println!(
                    "✅ '{}' at {} in {}",
                    outcome.name,
                    outcome.version,
                    outcome.path.display()
                ),
            }
            Ok(0)
        }
    }
}

/// Token cancelled on SIGINT or SIGTERM so in-flight commands are killed.
fn interrupt_token() -> CancellationToken {
    let token = CancellationToken::new();
    let handler_token = token.clone();
    if let Err(e) = ctrlc::set_handler(move || handler_token.cancel()) {
        tracing::warn!("Interrupt handler not installed: {}", e);
    }
    token
}

fn run_bootstrap(settings: &LoaderSettings, cancel: &CancellationToken) -> Result<i32, AppError> {
    let report = api::bootstrap(settings, cancel)?;
    if cancel.is_cancelled() {
        tracing::warn!("Interrupted; application not launched");
        return Ok(INTERRUPTED_EXIT_CODE);
    }

    // Step failures are logged, not fatal; only the launched application sets the exit code.
    match api::launch(settings, &report.load_paths) {
        Ok(Some(code)) => Ok(code),
        Ok(None) => Ok(0),
        Err(e) => {
            tracing::error!("{}", e);
            Ok(1)
        }
    }
}

fn print_versions(versions: &InstalledVersions) {
    if versions.is_empty() {
        println!("No packages configured.");
        return;
    }
    let width = versions.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, version) in versions.iter() {
        println!("{:<width$}  {}", name, version, width = width);
    }
}

fn absolute(path: Option<PathBuf>) -> Result<Option<PathBuf>, AppError> {
    match path {
        Some(path) => Ok(Some(std::env::current_dir()?.join(path))),
        None => Ok(None),
    }
}
