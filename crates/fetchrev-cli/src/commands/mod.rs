//! Command handlers, one module per subcommand.
//!
//! Handlers translate arguments into core calls and render the results.

pub mod backends;
pub mod clone;
pub mod completions;
pub mod config;
pub mod detect;
pub mod init;
pub mod update;

use fetchrev_adapters::{LocalWorkingDirectory, ProcessRunner};
use fetchrev_core::{
    application::CloneService,
    domain::{Vcs, VcsKind},
};

use crate::{config::AppConfig, error::CliResult};

/// A service wired to the real process and working directory.
fn service() -> CloneService {
    CloneService::new(
        Box::new(ProcessRunner::new()),
        Box::new(LocalWorkingDirectory::new()),
    )
}

/// The `--vcs` flag, falling back to `defaults.vcs`.
fn resolve_vcs(flag: Option<VcsKind>, config: &AppConfig) -> CliResult<Vcs> {
    let kind = match flag {
        Some(kind) => kind,
        None => config.default_vcs()?,
    };
    Ok(Vcs::new(kind))
}
