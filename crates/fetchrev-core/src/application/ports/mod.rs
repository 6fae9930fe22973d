//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `fetchrev-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `CommandRunner`: Run an external VCS program
//!   - `WorkingDirectory`: Read, create, and change the current directory
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{CommandRunner, ExecError, WorkingDirectory};

#[cfg(test)]
pub use output::{MockCommandRunner, MockWorkingDirectory};
