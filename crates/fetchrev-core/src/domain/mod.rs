// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for fetchrev.
//!
//! This module contains pure logic with no I/O. It knows which VCS backends
//! exist, which schemes they try, and which commands they run, but it never
//! runs anything. Execution happens through ports in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: No filesystem, network, or process calls
//! - **No external crates**: Only std library + thiserror + serde
//! - **Immutable registry**: Backend definitions are `static` and never mutated
//!
// Public API - what the world sees
pub mod backends;
pub mod error;
pub mod value_objects;
pub mod vcs;

// Re-exports for convenience
pub use backends::{
    BACKEND_REGISTRY, BackendDef, ClonePlan, Invocation, Phase, PlanStep, backend,
};
pub use error::DomainError;
pub use value_objects::{RepoAddress, Revision, VcsKind};
pub use vcs::Vcs;
