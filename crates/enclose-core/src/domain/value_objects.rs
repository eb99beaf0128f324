//! Domain value objects: ScopeKind, LeafKind, GuardStyle.
//!
//! # Design
//!
//! These are pure value types: `Copy`, compared by value, no identity.
//! They hold NO dialect text. Every fragment that ends up in the output lives
//! in `dialect.rs`; this file only defines the tags, their string
//! representations, and their `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ScopeKind ────────────────────────────────────────────────────────────────

/// The kind of a nested region of emitted text.
///
/// Which kinds are legal depends on the active dialect; see
/// [`DialectSyntax::supports`](crate::domain::dialect::DialectSyntax::supports).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScopeKind {
    Struct,
    Namespace,
    ControlBlock,
}

impl ScopeKind {
    pub const ALL: [ScopeKind; 3] = [Self::Struct, Self::Namespace, Self::ControlBlock];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Struct => "struct",
            Self::Namespace => "namespace",
            Self::ControlBlock => "control-block",
        }
    }

    /// Named kinds print `<keyword> <name>` before their brace.
    pub const fn is_named(&self) -> bool {
        matches!(self, Self::Struct | Self::Namespace)
    }
}

impl fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScopeKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "struct" => Ok(Self::Struct),
            "namespace" | "ns" => Ok(Self::Namespace),
            "control-block" | "control_block" | "block" => Ok(Self::ControlBlock),
            other => Err(DomainError::InvalidDocument(format!(
                "unknown scope kind: {other}"
            ))),
        }
    }
}

// ── LeafKind ─────────────────────────────────────────────────────────────────

/// The kind of a single emitted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeafKind {
    Directive,
    LineComment,
    BlockComment,
    ConstantDecl,
}

impl LeafKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Directive => "directive",
            Self::LineComment => "line-comment",
            Self::BlockComment => "block-comment",
            Self::ConstantDecl => "constant",
        }
    }

    /// Directives and constants render `<content> <value>`; comments have no value.
    pub const fn requires_value(&self) -> bool {
        matches!(self, Self::Directive | Self::ConstantDecl)
    }
}

impl fmt::Display for LeafKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeafKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "directive" | "preprocessor" => Ok(Self::Directive),
            "line-comment" | "comment" => Ok(Self::LineComment),
            "block-comment" | "multiline-comment" => Ok(Self::BlockComment),
            "constant" | "constant-decl" => Ok(Self::ConstantDecl),
            other => Err(DomainError::InvalidDocument(format!(
                "unknown leaf kind: {other}"
            ))),
        }
    }
}

// ── GuardStyle ───────────────────────────────────────────────────────────────

/// How a header guards against double inclusion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuardStyle {
    /// A single `#pragma once` line.
    #[default]
    Pragma,
    /// An `#ifndef NAME` / `#define NAME` pair closed by a trailing `#endif`.
    Ifndef,
}

impl GuardStyle {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pragma => "pragma",
            Self::Ifndef => "ifndef",
        }
    }

    /// Whether disposal has to append a closing directive.
    pub const fn needs_closing(&self) -> bool {
        matches!(self, Self::Ifndef)
    }
}

impl fmt::Display for GuardStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GuardStyle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pragma" | "pragma-once" => Ok(Self::Pragma),
            "ifndef" | "include-guard" => Ok(Self::Ifndef),
            other => Err(DomainError::UnknownGuardStyle(other.to_string())),
        }
    }
}
