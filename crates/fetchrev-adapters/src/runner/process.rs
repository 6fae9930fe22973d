//! Process runner using `std::process::Command`.

use std::process::{Command, Stdio};

use fetchrev_core::{
    application::ports::{CommandRunner, ExecError},
    domain::Invocation,
};
use tracing::debug;

/// Production runner: spawns the program and waits for it.
///
/// stdin is always closed and git's terminal prompt is disabled, so a probe
/// against a server that wants credentials fails instead of hanging.
#[derive(Debug, Clone, Copy)]
pub struct ProcessRunner;

impl ProcessRunner {
    /// Create a new process runner.
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ProcessRunner {
    fn exec(&self, invocation: &Invocation, verbose: bool) -> Result<(), ExecError> {
        let (stdout, stderr) = if verbose {
            (Stdio::inherit(), Stdio::inherit())
        } else {
            (Stdio::null(), Stdio::null())
        };

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(stderr)
            .status()
            .map_err(|e| ExecError::Spawn {
                program: invocation.program.clone(),
                reason: e.to_string(),
            })?;

        debug!(command = %invocation, status = ?status.code(), "Command finished");

        if status.success() {
            Ok(())
        } else {
            Err(ExecError::Status {
                code: status.code(),
            })
        }
    }
}
