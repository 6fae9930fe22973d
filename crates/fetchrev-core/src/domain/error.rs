// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("'{value}' is not a known VCS kind (expected one of: git, hg, bzr, svn)")]
    UnknownVcsKind { value: String },

    #[error("invalid repository address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("invalid revision '{revision}': {reason}")]
    InvalidRevision { revision: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownVcsKind { value } => vec![
                format!("'{}' does not name a supported version-control system", value),
                "Supported kinds:".into(),
                "  • git  - Git".into(),
                "  • hg   - Mercurial".into(),
                "  • bzr  - Bazaar".into(),
                "  • svn  - Subversion".into(),
            ],
            Self::InvalidAddress { reason, .. } => vec![
                format!("Address problem: {}", reason),
                "Pass the address without a scheme, e.g. github.com/org/repo".into(),
                "The transport scheme is detected automatically".into(),
            ],
            Self::InvalidRevision { reason, .. } => vec![
                format!("Revision problem: {}", reason),
                "Use a tag, branch, revision number or commit id".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownVcsKind { .. }
            | Self::InvalidAddress { .. }
            | Self::InvalidRevision { .. } => ErrorCategory::Validation,
        }
    }
}
