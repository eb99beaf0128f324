//! Application layer for enclose.
//!
//! This layer contains:
//! - **Services**: the emission session and document replay
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer drives the domain emitter against real sinks but
//! holds no formatting rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    DialectInfo, // DTO for dialect listings
    DocumentService,
    EmissionSession,
    EmissionStats,
};

// Re-export port traits (for adapter implementation)
pub use ports::{BoxedSink, SinkProvider};

pub use error::ApplicationError;
