//! Application layer for fetchrev.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (CloneService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer executes what the domain describes but decides no
//! backend behaviour itself. Schemes and commands live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    BackendInfo, // DTO for backend metadata
    CloneService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{CommandRunner, ExecError, WorkingDirectory};

pub use error::ApplicationError;
