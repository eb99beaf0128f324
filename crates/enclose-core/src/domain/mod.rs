// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for enclose.
//!
//! This module contains the pure emission logic with no I/O. Sinks are
//! reached through ports defined in the application layer.
//!
//! ## Layout
//!
//! - **value_objects**: closed tag sets (`ScopeKind`, `LeafKind`, `GuardStyle`)
//! - **dialect**: syntax tables and the `Dialect` selection
//! - **layout**: formatting toggles
//! - **render**: stateless leaf and delimiter renderers
//! - **emitter**: the scope stack built on the enclosure tracker
//!
// Public API - what the world sees
pub mod dialect;
pub mod emitter;
pub mod entities;
pub mod error;
pub mod layout;
pub mod render;
pub mod value_objects;

// Re-exports for convenience
pub use dialect::{
    C, CPP, DEFAULT_GUARD_NAME, DIALECT_REGISTRY, Dialect, DialectSyntax, ScopeSyntax,
    find_dialect,
};
pub use emitter::Emitter;
pub use entities::{Document, EnclosureTracker, LeafToken, Node, Scope};
pub use error::{DomainError, ErrorCategory};
pub use layout::{LayoutOptions, ScopeLayout};
pub use value_objects::{GuardStyle, LeafKind, ScopeKind};
