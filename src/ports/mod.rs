mod command_runner;
mod git;
mod package_manager;

pub use command_runner::CommandRunner;
pub use git::GitPort;
pub use package_manager::PackageManager;
