//! Infrastructure adapters for fetchrev.
//!
//! This crate implements the ports defined in `fetchrev-core::application::ports`.
//! It contains all process and working-directory I/O.

pub mod runner;
pub mod workdir;

// Re-export commonly used adapters
pub use runner::{ProcessRunner, RecordedCall, ScriptedRunner};
pub use workdir::{DirEvent, LocalWorkingDirectory, MemoryWorkingDirectory};
