use std::fmt;

use crate::domain::value_objects::ScopeKind;

/// A scope to open: its kind plus the name printed after the keyword.
///
/// The name is not checked here; the emitter rejects a named kind without
/// one when the scope is entered, and ignores it on unnamed kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    kind: ScopeKind,
    name: Option<String>,
}

impl Scope {
    pub fn new(kind: ScopeKind, name: Option<String>) -> Self {
        Self { kind, name }
    }

    /// `struct <name> { ... };`
    pub fn structure(name: impl Into<String>) -> Self {
        Self::new(ScopeKind::Struct, Some(name.into()))
    }

    /// `namespace <name> { ... }`
    pub fn namespace(name: impl Into<String>) -> Self {
        Self::new(ScopeKind::Namespace, Some(name.into()))
    }

    /// A bare `{ ... }` block.
    pub fn control_block() -> Self {
        Self::new(ScopeKind::ControlBlock, None)
    }

    pub fn kind(&self) -> ScopeKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} {}", self.kind, name),
            None => write!(f, "{}", self.kind),
        }
    }
}
