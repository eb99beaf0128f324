//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "write a header" or "render a document".

pub mod document_service;
pub mod session;

pub use document_service::{DialectInfo, DocumentService};
pub use session::{EmissionSession, EmissionStats};
