//! Output sink adapters.

mod local;
mod memory;

pub use local::LocalSinkProvider;
pub use memory::{MemorySink, MemorySinkProvider};
