//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "clone this repository at that tag".

pub mod clone_service;

pub use clone_service::{BackendInfo, CloneService};
