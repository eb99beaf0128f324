//! Infrastructure adapters for enclose.
//!
//! This crate implements the ports defined in `enclose-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod document_loader;
pub mod sink;

// Re-export commonly used adapters
pub use document_loader::{DocumentFormat, DocumentLoader};
pub use sink::{LocalSinkProvider, MemorySink, MemorySinkProvider};
