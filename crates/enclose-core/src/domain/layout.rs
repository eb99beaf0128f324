//! Layout options: the formatting toggles consulted by every renderer.
//!
//! A [`LayoutOptions`] value is resolved once (defaults, config file, CLI)
//! and handed to a session by value. Nothing mutates it afterwards.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::error::DomainError;
use crate::domain::value_objects::ScopeKind;

/// Brace placement and spacing for one scope kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeLayout {
    /// `struct a {` when true, `struct a` + `{` on its own line when false.
    pub inline_brace: bool,
    pub blank_after_open: bool,
    pub blank_before_close: bool,
    pub blank_after_close: bool,
}

impl ScopeLayout {
    pub const fn inline() -> Self {
        Self {
            inline_brace: true,
            blank_after_open: false,
            blank_before_close: false,
            blank_after_close: false,
        }
    }

    pub const fn own_line() -> Self {
        Self {
            inline_brace: false,
            blank_after_open: false,
            blank_before_close: false,
            blank_after_close: false,
        }
    }

    /// Own-line brace with a blank line inside each edge.
    pub const fn control_block() -> Self {
        Self {
            inline_brace: false,
            blank_after_open: true,
            blank_before_close: true,
            blank_after_close: false,
        }
    }
}

impl Default for ScopeLayout {
    fn default() -> Self {
        Self::inline()
    }
}

/// All formatting toggles for a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Written once per depth level before every line.
    pub indent: String,

    /// Separates comment markers from their text, and follows inline braces
    /// when `delimit_inline_syntax` is set.
    pub delimiter: String,

    pub delimit_inline_syntax: bool,

    /// Follow every directive (and the guard preamble) with a blank line.
    pub blank_after_directive: bool,

    #[serde(rename = "struct")]
    pub structs: ScopeLayout,
    #[serde(rename = "namespace")]
    pub namespaces: ScopeLayout,
    #[serde(rename = "control-block", deserialize_with = "control_block_layout")]
    pub control_blocks: ScopeLayout,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            indent: "\t".into(),
            delimiter: "\t".into(),
            delimit_inline_syntax: false,
            blank_after_directive: false,
            structs: ScopeLayout::inline(),
            namespaces: ScopeLayout::inline(),
            control_blocks: ScopeLayout::control_block(),
        }
    }
}

impl LayoutOptions {
    pub fn scope(&self, kind: ScopeKind) -> &ScopeLayout {
        match kind {
            ScopeKind::Struct => &self.structs,
            ScopeKind::Namespace => &self.namespaces,
            ScopeKind::ControlBlock => &self.control_blocks,
        }
    }

    pub fn scope_mut(&mut self, kind: ScopeKind) -> &mut ScopeLayout {
        match kind {
            ScopeKind::Struct => &mut self.structs,
            ScopeKind::Namespace => &mut self.namespaces,
            ScopeKind::ControlBlock => &mut self.control_blocks,
        }
    }

    /// `depth` copies of the indent unit.
    pub fn indentation(&self, depth: usize) -> String {
        self.indent.repeat(depth)
    }

    /// Reject layouts whose output could not be re-read line by line.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.indent.is_empty() {
            return Err(DomainError::InvalidLayout("indent must not be empty".into()));
        }
        if !self.indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(DomainError::InvalidLayout(format!(
                "indent must be spaces or tabs, got {:?}",
                self.indent
            )));
        }
        if self.delimiter.contains(['\n', '\r']) {
            return Err(DomainError::InvalidLayout(
                "delimiter must not contain a line break".into(),
            ));
        }
        Ok(())
    }
}

/// A scope table as written in a file; absent keys keep the base layout.
#[derive(Deserialize)]
struct PartialScopeLayout {
    inline_brace: Option<bool>,
    blank_after_open: Option<bool>,
    blank_before_close: Option<bool>,
    blank_after_close: Option<bool>,
}

impl PartialScopeLayout {
    fn over(self, base: ScopeLayout) -> ScopeLayout {
        ScopeLayout {
            inline_brace: self.inline_brace.unwrap_or(base.inline_brace),
            blank_after_open: self.blank_after_open.unwrap_or(base.blank_after_open),
            blank_before_close: self.blank_before_close.unwrap_or(base.blank_before_close),
            blank_after_close: self.blank_after_close.unwrap_or(base.blank_after_close),
        }
    }
}

fn control_block_layout<'de, D>(deserializer: D) -> Result<ScopeLayout, D::Error>
where
    D: Deserializer<'de>,
{
    PartialScopeLayout::deserialize(deserializer).map(|p| p.over(ScopeLayout::control_block()))
}
