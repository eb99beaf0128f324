//! Enclose Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for enclose, a
//! streaming writer for C and C++ header text with tracked scope nesting,
//! following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           enclose-cli (CLI)             │
//! │     (render, demo, dialects, ...)       │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (EmissionSession, DocumentService)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │          (Driven: SinkProvider)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    enclose-adapters (Infrastructure)    │
//! │  (LocalSinkProvider, MemorySinkProvider)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Dialect, LeafToken, Emitter, Layout)  │
//! │         No I/O                          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use enclose_core::prelude::*;
//!
//! let mut session =
//!     EmissionSession::new(Vec::new(), Dialect::cpp(), LayoutOptions::default())?;
//! session.with_scope(Scope::structure("hello"), |s| {
//!     s.write_leaf(&LeafToken::line_comment("inside")?)
//! })?;
//! let bytes = session.finish()?;
//!
//! assert_eq!(
//!     String::from_utf8(bytes).unwrap(),
//!     "#pragma once\nstruct hello {\n\t//\tinside\n};\n"
//! );
//! # Ok::<(), EncloseError>(())
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DocumentService, EmissionSession, EmissionStats,
        ports::{BoxedSink, SinkProvider},
    };
    pub use crate::domain::{
        Dialect, Document, GuardStyle, LayoutOptions, LeafKind, LeafToken, Node, Scope,
        ScopeKind, ScopeLayout,
    };
    pub use crate::error::{EncloseError, EncloseResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
