//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `enclose-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `SinkProvider`: opens output destinations
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (`EmissionSession` and `DocumentService` are used directly)

pub mod output;

pub use output::{BoxedSink, SinkProvider};

#[cfg(test)]
pub use output::MockSinkProvider;
