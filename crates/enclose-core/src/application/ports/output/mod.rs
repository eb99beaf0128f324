//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `enclose-adapters` crate provides implementations.

use std::io::Write;
use std::path::Path;

use crate::error::EncloseResult;

/// A writable sink as handed out by a [`SinkProvider`].
pub type BoxedSink = Box<dyn Write + Send>;

/// Port for acquiring output sinks.
///
/// Implemented by:
/// - `enclose_adapters::sink::LocalSinkProvider` (production)
/// - `enclose_adapters::sink::MemorySinkProvider` (testing)
///
/// ## Contract
///
/// - `open` creates the destination if needed and truncates prior content
/// - the returned sink is owned exclusively by one session
/// - failure is reported as `ApplicationError::SinkUnavailable`
#[cfg_attr(test, mockall::automock)]
pub trait SinkProvider: Send + Sync {
    /// Open `destination` for exclusive, truncating writes.
    fn open(&self, destination: &Path) -> EncloseResult<BoxedSink>;
}
