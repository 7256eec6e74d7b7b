use std::sync::Mutex;

use crate::domain::{AppError, CommandOutput, CommandSpec};
use crate::ports::CommandRunner;

enum Reply {
    Exit { code: i32, stderr: String },
    Stdout(String),
    TimeOut,
}

/// Records every command and answers from pattern rules; unmatched commands succeed.
#[derive(Default)]
pub struct FakeRunner {
    calls: Mutex<Vec<CommandSpec>>,
    rules: Mutex<Vec<(String, Reply)>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands whose line contains `pattern` exit with `code`.
    pub fn fail_matching(&self, pattern: &str, code: i32, stderr: &str) {
        self.rules
            .lock()
            .unwrap()
            .push((pattern.to_string(), Reply::Exit { code, stderr: stderr.to_string() }));
    }

    /// Commands whose line contains `pattern` succeed and print `stdout`.
    pub fn respond_matching(&self, pattern: &str, stdout: &str) {
        self.rules.lock().unwrap().push((pattern.to_string(), Reply::Stdout(stdout.to_string())));
    }

    pub fn time_out_matching(&self, pattern: &str) {
        self.rules.lock().unwrap().push((pattern.to_string(), Reply::TimeOut));
    }

    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.lock().unwrap().clone()
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.calls().iter().map(CommandSpec::display).collect()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, AppError> {
        self.calls.lock().unwrap().push(spec.clone());
        let line = spec.display();
        let rules = self.rules.lock().unwrap();
        match rules.iter().find(|(pattern, _)| line.contains(pattern.as_str())) {
            Some((_, Reply::Exit { code, stderr })) => Ok(CommandOutput {
                code: Some(*code),
                stdout: String::new(),
                stderr: stderr.clone(),
            }),
            Some((_, Reply::Stdout(stdout))) => {
                Ok(CommandOutput { code: Some(0), stdout: stdout.clone(), stderr: String::new() })
            }
            Some((_, Reply::TimeOut)) => {
                Err(AppError::CommandTimedOut { command: line, timeout: spec.timeout })
            }
            None => Ok(CommandOutput { code: Some(0), ..CommandOutput::default() }),
        }
    }
}
