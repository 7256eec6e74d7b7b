pub mod git_command;
pub mod pip_command;
pub mod process_runner;

pub use git_command::GitCommandAdapter;
pub use pip_command::{PipCommandAdapter, locate_python};
pub use process_runner::ProcessCommandRunner;
