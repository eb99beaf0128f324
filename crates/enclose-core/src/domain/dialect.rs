//! Dialect syntax registry.
//!
//! # Design Rationale
//!
//! A dialect is nothing but text. Every fragment the emitter writes (scope
//! keywords, terminators, comment markers, constant qualifiers, guard
//! directives) is a field of one [`DialectSyntax`] table, and the renderers
//! in `render.rs` only ever read those fields. No `match` on a language tag
//! exists anywhere in the emission path.
//!
//! # Adding a New Dialect
//!
//! 1. Declare a `static` [`DialectSyntax`] (see [`CPP`] and [`C`])
//! 2. Add it to [`DIALECT_REGISTRY`] if it should be selectable by name
//! 3. Nothing else: the scope stack and leaf renderers need no edits

use crate::domain::error::DomainError;
use crate::domain::value_objects::{GuardStyle, ScopeKind};

/// Guard name written by `#ifndef`-style headers unless overridden.
pub const DEFAULT_GUARD_NAME: &str = "COOL_GUY_TEXT_PROCESSING";

// ── Syntax tables ────────────────────────────────────────────────────────────

/// How one scope kind is spelled in a dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeSyntax {
    /// The kind this entry describes.
    pub kind: ScopeKind,

    /// Keyword printed before the scope name (`struct`, `namespace`).
    ///
    /// `None` for unnamed scopes, which open with a bare brace.
    pub keyword: Option<&'static str>,

    /// Closing text, e.g. `"};"` for structs and `"}"` for blocks.
    pub terminator: &'static str,
}

/// Every text fragment one dialect needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectSyntax {
    /// Registry name, e.g. `"cpp"`.
    pub name: &'static str,

    /// Human-readable name for listings.
    pub display_name: &'static str,

    /// Conventional header extension, used by the demo driver.
    pub header_extension: &'static str,

    /// The scope kinds this dialect can express.
    ///
    /// Entering or exiting any other kind fails with `UnsupportedScope`.
    pub scopes: &'static [ScopeSyntax],

    pub open_brace: &'static str,
    pub directive_prefix: &'static str,
    pub line_comment: &'static str,
    pub block_comment_open: &'static str,
    pub block_comment_close: &'static str,

    /// Storage qualifiers preceding a constant's type.
    pub constant_qualifiers: &'static str,
    pub constant_type: &'static str,
    pub statement_terminator: &'static str,

    pub pragma_guard: &'static str,
    pub guard_ifndef: &'static str,
    pub guard_define: &'static str,
    pub guard_endif: &'static str,
}

impl DialectSyntax {
    /// Look up how `kind` is spelled, if the dialect has it at all.
    pub fn scope(&self, kind: ScopeKind) -> Option<&'static ScopeSyntax> {
        self.scopes.iter().find(|s| s.kind == kind)
    }

    pub fn supports(&self, kind: ScopeKind) -> bool {
        self.scope(kind).is_some()
    }

    /// Scope lookup that fails the way the emitter reports it.
    pub fn require_scope(&self, kind: ScopeKind) -> Result<&'static ScopeSyntax, DomainError> {
        self.scope(kind).ok_or(DomainError::UnsupportedScope {
            dialect: self.name,
            kind,
        })
    }

    pub fn supported_kinds(&self) -> impl Iterator<Item = ScopeKind> + '_ {
        self.scopes.iter().map(|s| s.kind)
    }
}

const STRUCT: ScopeSyntax = ScopeSyntax {
    kind: ScopeKind::Struct,
    keyword: Some("struct"),
    terminator: "};",
};

const NAMESPACE: ScopeSyntax = ScopeSyntax {
    kind: ScopeKind::Namespace,
    keyword: Some("namespace"),
    terminator: "}",
};

const CONTROL_BLOCK: ScopeSyntax = ScopeSyntax {
    kind: ScopeKind::ControlBlock,
    keyword: None,
    terminator: "}",
};

/// C++ headers: namespaces allowed, constants are `[[nodiscard]] constexpr`.
pub static CPP: DialectSyntax = DialectSyntax {
    name: "cpp",
    display_name: "C++",
    header_extension: "h",
    scopes: &[STRUCT, NAMESPACE, CONTROL_BLOCK],
    open_brace: "{",
    directive_prefix: "#",
    line_comment: "//",
    block_comment_open: "/* ",
    block_comment_close: " */",
    constant_qualifiers: "[[nodiscard]] static constexpr",
    constant_type: "uint32_t",
    statement_terminator: ";",
    pragma_guard: "#pragma once",
    guard_ifndef: "#ifndef",
    guard_define: "#define",
    guard_endif: "#endif",
};

/// C headers: no namespaces, constants are plain `static const`.
pub static C: DialectSyntax = DialectSyntax {
    name: "c",
    display_name: "C",
    header_extension: "h",
    scopes: &[STRUCT, CONTROL_BLOCK],
    open_brace: "{",
    directive_prefix: "#",
    line_comment: "//",
    block_comment_open: "/* ",
    block_comment_close: " */",
    constant_qualifiers: "static const",
    constant_type: "uint32_t",
    statement_terminator: ";",
    pragma_guard: "#pragma once",
    guard_ifndef: "#ifndef",
    guard_define: "#define",
    guard_endif: "#endif",
};

/// Single source of truth for dialects selectable by name.
pub static DIALECT_REGISTRY: &[&DialectSyntax] = &[&CPP, &C];

/// Find a registered dialect by name (case-insensitive, `c++`/`cxx` accepted).
pub fn find_dialect(name: &str) -> Result<&'static DialectSyntax, DomainError> {
    let wanted = match name.to_ascii_lowercase().as_str() {
        "c++" | "cxx" | "cc" => "cpp".to_string(),
        other => other.to_string(),
    };
    DIALECT_REGISTRY
        .iter()
        .copied()
        .find(|d| d.name == wanted)
        .ok_or_else(|| DomainError::UnknownDialect(name.to_string()))
}

// ── Dialect value ────────────────────────────────────────────────────────────

/// The immutable dialect selection a session is created with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialect {
    syntax: &'static DialectSyntax,
    guard: GuardStyle,
    header: bool,
    guard_name: String,
}

impl Dialect {
    /// A header in the given syntax, guarded with `#pragma once`.
    pub fn new(syntax: &'static DialectSyntax) -> Self {
        Self {
            syntax,
            guard: GuardStyle::Pragma,
            header: true,
            guard_name: DEFAULT_GUARD_NAME.to_string(),
        }
    }

    pub fn cpp() -> Self {
        Self::new(&CPP)
    }

    pub fn c() -> Self {
        Self::new(&C)
    }

    /// Resolve a registered dialect by name.
    pub fn named(name: &str) -> Result<Self, DomainError> {
        find_dialect(name).map(Self::new)
    }

    pub fn with_guard(mut self, guard: GuardStyle) -> Self {
        self.guard = guard;
        self
    }

    /// Whether the session writes a guard preamble at all.
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Override the `#ifndef` guard macro name.
    pub fn with_guard_name(mut self, name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        validate_guard_name(&name)?;
        self.guard_name = name;
        Ok(self)
    }

    pub fn syntax(&self) -> &'static DialectSyntax {
        self.syntax
    }

    pub fn name(&self) -> &'static str {
        self.syntax.name
    }

    pub fn guard(&self) -> GuardStyle {
        self.guard
    }

    pub fn is_header(&self) -> bool {
        self.header
    }

    pub fn guard_name(&self) -> &str {
        &self.guard_name
    }

    /// Text written when the session opens.
    pub fn preamble(&self) -> String {
        if !self.header {
            return String::new();
        }
        match self.guard {
            GuardStyle::Pragma => format!("{}\n", self.syntax.pragma_guard),
            GuardStyle::Ifndef => format!(
                "{} {name}\n{} {name}\n",
                self.syntax.guard_ifndef,
                self.syntax.guard_define,
                name = self.guard_name
            ),
        }
    }

    /// Text written when the session is disposed.
    pub fn postamble(&self) -> String {
        if self.header && self.guard.needs_closing() {
            format!("\n{}", self.syntax.guard_endif)
        } else {
            String::new()
        }
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Self::cpp()
    }
}

fn validate_guard_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidGuardName {
            name: name.to_string(),
            reason: "name is empty".into(),
        });
    }
    if name.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidGuardName {
            name: name.to_string(),
            reason: "name contains whitespace".into(),
        });
    }
    Ok(())
}
