//! fetchrev Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for fetchrev, a
//! tool that checks out a repository at a given revision without the caller
//! knowing which version-control system hosts it.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           fetchrev-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │             (CloneService)              │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Driven: CommandRunner, WorkingDir)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     fetchrev-adapters (Infrastructure)  │
//! │ (ProcessRunner, LocalWorkingDirectory)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (VcsKind, BackendDef, Vcs, ClonePlan)  │
//! │            No I/O at all                │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::path::Path;
//! use fetchrev_core::{
//!     application::CloneService,
//!     domain::{RepoAddress, Revision, Vcs},
//! };
//!
//! // 1. Decode the handle, usually from a `vcs` field in a document
//! let vcs: Vcs = "git".parse().unwrap();
//!
//! // 2. Use application service (with injected adapters)
//! let service = CloneService::new(runner, workdir);
//! service
//!     .clone(
//!         vcs,
//!         &RepoAddress::new("example.org/acme/widget").unwrap(),
//!         &Revision::new("v1.2.0").unwrap(),
//!         Path::new("./workspace"),
//!         false,
//!     )
//!     .unwrap();
//! ```
//!
//! ## Concurrency
//!
//! Cloning changes the process working directory. `CloneService` serialises
//! its own directory-changing regions, but any other code in the process
//! that depends on the working directory must not run concurrently with it.

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BackendInfo, CloneService,
        ports::{CommandRunner, ExecError, WorkingDirectory},
    };
    pub use crate::domain::{
        BackendDef, Invocation, Phase, PlanStep, RepoAddress, Revision, Vcs, VcsKind,
    };
    pub use crate::error::{FetchError, FetchResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
