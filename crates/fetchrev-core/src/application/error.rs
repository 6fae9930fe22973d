//! Application layer errors.
//!
//! These errors represent failures in orchestration, not domain rules.
//! Parsing and validation errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::{Phase, VcsKind};
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// No candidate scheme answered the backend's probe.
    #[error("no transport scheme found for '{address}' using {kind}")]
    SchemeNotFound { address: String, kind: VcsKind },

    /// The working directory could not be read, created, or entered.
    #[error("failed to {operation} '{}': {reason}", path.display())]
    Environment {
        operation: &'static str,
        path: PathBuf,
        reason: String,
    },

    /// An external VCS program failed to start or exited non-zero.
    #[error("{phase} failed: `{command}`: {reason}")]
    CommandFailed {
        phase: Phase,
        command: String,
        reason: String,
    },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SchemeNotFound { address, kind } => {
                let schemes = crate::domain::backend(*kind).schemes.join(", ");
                vec![
                    format!("Tried {} with schemes: {}", kind, schemes),
                    format!("Check that '{}' exists and is reachable", address),
                    format!("Check that '{}' is installed and in your PATH", kind.as_str()),
                    "Run with -v to see the probe output".into(),
                ]
            }
            Self::Environment { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the path is a directory".into(),
            ],
            Self::CommandFailed { phase, .. } => match phase {
                crate::domain::Phase::Checkout => vec![
                    "The repository was cloned but the revision could not be checked out".into(),
                    "Check that the tag or commit exists".into(),
                    "The partial clone was left on disk; remove it before retrying".into(),
                ],
                _ => vec![
                    "Run with -v to see the command output".into(),
                    "Check network access and credentials for the remote".into(),
                    "A partially created working copy may remain on disk".into(),
                ],
            },
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SchemeNotFound { .. } => ErrorCategory::NotFound,
            Self::Environment { .. } | Self::CommandFailed { .. } => ErrorCategory::Internal,
        }
    }
}
