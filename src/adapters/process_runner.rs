use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::domain::{AppError, CancellationToken, CommandOutput, CommandSpec};
use crate::ports::CommandRunner;

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs commands as child processes with a deadline and optional cancellation.
#[derive(Debug, Clone)]
pub struct ProcessCommandRunner {
    cancel: Option<CancellationToken>,
    poll_interval: Duration,
}

impl Default for ProcessCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessCommandRunner {
    pub fn new() -> Self {
        Self { cancel: None, poll_interval: DEFAULT_POLL_INTERVAL }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancellationToken::is_cancelled)
    }

    /// Sleep slice that never overshoots the deadline.
    fn tick(&self, spec: &CommandSpec, started: Instant) -> Option<Duration> {
        let elapsed = started.elapsed();
        if elapsed >= spec.timeout {
            return None;
        }
        Some(self.poll_interval.min(spec.timeout - elapsed))
    }
}

impl CommandRunner for ProcessCommandRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, AppError> {
        let command_line = spec.display();
        if self.is_cancelled() {
            return Err(AppError::CommandCancelled { command: command_line });
        }

        let mut command = Command::new(&spec.program);
        command.args(&spec.args).stdin(Stdio::null()).stdout(Stdio::piped()).stderr(Stdio::piped());
        if let Some(cwd) = &spec.cwd {
            command.current_dir(cwd);
        }

        tracing::debug!("Running command: {}", command_line);
        let mut child = command.spawn().map_err(|e| AppError::CommandSpawn {
            command: command_line.clone(),
            details: e.to_string(),
        })?;

        // Pipes are drained concurrently so a chatty child cannot fill them and stall.
        let (tx, streams) = mpsc::channel();
        let mut pending = 0;
        if let Some(pipe) = child.stdout.take() {
            drain(pipe, Stream::Stdout, tx.clone());
            pending += 1;
        }
        if let Some(pipe) = child.stderr.take() {
            drain(pipe, Stream::Stderr, tx.clone());
            pending += 1;
        }
        drop(tx);

        let started = Instant::now();
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) => {}
                Err(e) => {
                    terminate(&mut child);
                    return Err(AppError::Io(e));
                }
            }
            if self.is_cancelled() {
                terminate(&mut child);
                return Err(AppError::CommandCancelled { command: command_line });
            }
            match self.tick(spec, started) {
                Some(pause) => thread::sleep(pause),
                None => {
                    terminate(&mut child);
                    tracing::warn!("Command timed out after {:?}: {}", spec.timeout, command_line);
                    return Err(AppError::CommandTimedOut {
                        command: command_line,
                        timeout: spec.timeout,
                    });
                }
            }
        };

        // A background process started by the child can hold the pipes open
        // after the child exits, so collecting output shares the deadline.
        let mut output = CommandOutput { code: status.code(), ..CommandOutput::default() };
        while pending > 0 {
            if self.is_cancelled() {
                return Err(AppError::CommandCancelled { command: command_line });
            }
            let Some(pause) = self.tick(spec, started) else {
                tracing::warn!(
                    "Output of command still open after {:?}: {}",
                    spec.timeout,
                    command_line
                );
                return Err(AppError::CommandTimedOut {
                    command: command_line,
                    timeout: spec.timeout,
                });
            };
            match streams.recv_timeout(pause) {
                Ok((Stream::Stdout, text)) => {
                    output.stdout = text;
                    pending -= 1;
                }
                Ok((Stream::Stderr, text)) => {
                    output.stderr = text;
                    pending -= 1;
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        tracing::debug!("Command exited with {:?}: {}", output.code, command_line);
        Ok(output)
    }
}

enum Stream {
    Stdout,
    Stderr,
}

fn drain<R: Read + Send + 'static>(mut pipe: R, stream: Stream, tx: Sender<(Stream, String)>) {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        let _ = tx.send((stream, String::from_utf8_lossy(&buf).into_owned()));
    });
}

fn terminate(child: &mut Child) {
    if let Err(e) = child.kill() {
        tracing::debug!("Failed to kill child process: {}", e);
    }
    let _ = child.wait();
}
