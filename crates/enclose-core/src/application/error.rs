//! Application layer errors.
//!
//! These errors represent failures talking to the outside world, not
//! emission rules. Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while driving a sink.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The destination could not be opened, created or truncated.
    #[error("Cannot open output {destination}: {reason}")]
    SinkUnavailable { destination: PathBuf, reason: String },

    /// Writing or flushing an open sink failed.
    #[error("Write to output failed: {reason}")]
    SinkWrite { reason: String },

    /// A document file could not be read or parsed.
    #[error("Cannot load document {path}: {reason}")]
    DocumentLoad { path: PathBuf, reason: String },

    /// Shared adapter state was poisoned by a panic elsewhere.
    #[error("Sink registry lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    pub(crate) fn write(err: std::io::Error) -> Self {
        Self::SinkWrite {
            reason: err.to_string(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SinkUnavailable { destination, .. } => vec![
                format!("Failed to open: {}", destination.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::SinkWrite { .. } => vec![
                "Check available disk space".into(),
                "Output written before the failure has been flushed for inspection".into(),
            ],
            Self::DocumentLoad { path, .. } => vec![
                format!("Check the syntax of {}", path.display()),
                "Documents are TOML (.toml) or JSON (.json)".into(),
            ],
            Self::LockPoisoned => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SinkUnavailable { .. } => ErrorCategory::NotFound,
            Self::DocumentLoad { .. } => ErrorCategory::Validation,
            Self::SinkWrite { .. } | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
