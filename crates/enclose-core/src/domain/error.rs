// ============================================================================
// domain/error.rs - EMISSION ERROR DOMAIN
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::{LeafKind, ScopeKind};

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried through `with_scope` cleanup)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Token Errors
    // ========================================================================
    #[error("{kind} requires a value")]
    MissingValue { kind: LeafKind },

    #[error("{kind} requires non-empty content")]
    EmptyContent { kind: LeafKind },

    #[error("{kind} must fit on one line, found a line break in its {field}")]
    LineBreak { kind: LeafKind, field: &'static str },

    // ========================================================================
    // Scope Errors
    // ========================================================================
    #[error("cannot close {expected}: {}", describe_top(.found))]
    UnbalancedScope {
        expected: ScopeKind,
        found: Option<ScopeKind>,
    },

    #[error("dialect '{dialect}' has no {kind} scopes")]
    UnsupportedScope {
        dialect: &'static str,
        kind: ScopeKind,
    },

    #[error("{kind} scopes require a name")]
    MissingScopeName { kind: ScopeKind },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[error("unknown dialect: {0}")]
    UnknownDialect(String),

    #[error("unknown guard style: {0}")]
    UnknownGuardStyle(String),

    #[error("invalid guard name '{name}': {reason}")]
    InvalidGuardName { name: String, reason: String },

    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    #[error("invalid document: {0}")]
    InvalidDocument(String),
}

fn describe_top(found: &Option<ScopeKind>) -> String {
    match found {
        Some(kind) => format!("the innermost open scope is a {kind}"),
        None => "no scope is open".into(),
    }
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingValue { kind } => vec![
                format!("A {} is written as '<content> <value>'", kind),
                "Add a `value` to the token".into(),
            ],
            Self::UnbalancedScope { found: None, .. } => vec![
                "Every close must match an earlier open".into(),
                "Prefer with_scope, which closes the scope for you".into(),
            ],
            Self::UnbalancedScope {
                expected,
                found: Some(found),
            } => vec![
                format!("Close the {} before the enclosing {}", found, expected),
                "Prefer with_scope, which closes the scope for you".into(),
            ],
            Self::UnsupportedScope { dialect, kind } => vec![
                format!("'{}' cannot express {} scopes", dialect, kind),
                "Try: enclose dialects to see which kinds each dialect supports".into(),
            ],
            Self::MissingScopeName { kind } => {
                vec![format!("Give the {} a `name`", kind)]
            }
            Self::UnknownDialect(_) => vec![
                "Built-in dialects: cpp, c".into(),
                "Try: enclose dialects".into(),
            ],
            Self::UnknownGuardStyle(_) => vec!["Guard styles: pragma, ifndef".into()],
            Self::InvalidGuardName { .. } => vec![
                "Guard names are a single token, e.g. MY_PROJECT_H".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingValue { .. }
            | Self::EmptyContent { .. }
            | Self::LineBreak { .. }
            | Self::MissingScopeName { .. }
            | Self::InvalidDocument(_) => ErrorCategory::Validation,
            Self::UnsupportedScope { .. } => ErrorCategory::Compatibility,
            Self::UnknownDialect(_) => ErrorCategory::NotFound,
            Self::UnknownGuardStyle(_)
            | Self::InvalidGuardName { .. }
            | Self::InvalidLayout(_) => ErrorCategory::Validation,
            Self::UnbalancedScope { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    NotFound,
    Internal,
}
