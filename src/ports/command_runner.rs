use crate::domain::{AppError, CommandOutput, CommandSpec};

/// Executes external commands.
pub trait CommandRunner {
    /// Run a command to completion.
    ///
    /// A non-zero exit is reported through `CommandOutput::code`, not as an
    /// error. Errors are reserved for spawn failures, timeouts and cancellation.
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, AppError>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, AppError> {
        (**self).run(spec)
    }
}
