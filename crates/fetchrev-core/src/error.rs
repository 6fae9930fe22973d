//! Unified error handling for fetchrev core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{DomainError, Phase};

/// Root error type for fetchrev core operations.
///
/// This enum wraps all possible errors that can occur when using fetchrev-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Errors from the domain layer (parsing and validation).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl FetchError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }

    /// Check if this error is retryable.
    ///
    /// Scheme detection and clone failures usually come from the network.
    /// Single probe failures never leave [`CloneService::detect_scheme`];
    /// running out of schemes surfaces as `SchemeNotFound`.
    ///
    /// [`CloneService::detect_scheme`]: crate::application::CloneService::detect_scheme
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::SchemeNotFound { .. })
                | Self::Application(ApplicationError::CommandFailed {
                    phase: Phase::Clone,
                    ..
                })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type FetchResult<T> = Result<T, FetchError>;
