//! Working-directory adapters.

mod local;
mod memory;

pub use local::LocalWorkingDirectory;
pub use memory::{DirEvent, MemoryWorkingDirectory};
