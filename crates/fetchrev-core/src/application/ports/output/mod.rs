//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `fetchrev-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::Invocation;
use crate::error::FetchResult;

/// Why an external program did not succeed.
///
/// The runner does not know which logical step it is serving; the service
/// wraps this into `ApplicationError::CommandFailed` with the phase attached.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExecError {
    #[error("could not start '{program}': {reason}")]
    Spawn { program: String, reason: String },

    #[error("{}", describe_status(.code))]
    Status { code: Option<i32> },
}

fn describe_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {code}"),
        None => "terminated by signal".to_string(),
    }
}

/// Port for running external programs.
///
/// Implemented by:
/// - `fetchrev_adapters::runner::ProcessRunner` (production)
/// - `fetchrev_adapters::runner::ScriptedRunner` (testing)
///
/// ## Contract
///
/// - Runs in the process's current working directory
/// - Blocks until the program exits; no timeout
/// - `verbose` forwards the program's stdout/stderr to the console
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Run `invocation`, failing on spawn error or non-zero exit.
    fn exec(&self, invocation: &Invocation, verbose: bool) -> Result<(), ExecError>;
}

/// Port for the process working directory.
///
/// Implemented by:
/// - `fetchrev_adapters::workdir::LocalWorkingDirectory` (production)
/// - `fetchrev_adapters::workdir::MemoryWorkingDirectory` (testing)
///
/// All errors are `ApplicationError::Environment`.
#[cfg_attr(test, mockall::automock)]
pub trait WorkingDirectory: Send + Sync {
    /// The current working directory.
    fn current_dir(&self) -> FetchResult<PathBuf>;

    /// Change the current working directory.
    ///
    /// Must fail if `path` does not exist or is not traversable.
    fn change_dir(&self, path: &Path) -> FetchResult<()>;

    /// Create a directory and all parent directories; succeeds if it exists.
    fn create_dir_all(&self, path: &Path) -> FetchResult<()>;
}
