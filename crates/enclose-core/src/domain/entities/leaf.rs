use std::fmt;

use crate::domain::{error::DomainError, value_objects::LeafKind};

/// One non-nesting line of output: a directive, a comment or a constant.
///
/// Invariants (enforced at construction):
/// - `content` is non-empty
/// - directives and constants carry a non-empty `value`
/// - neither field contains a line break
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafToken {
    kind: LeafKind,
    content: String,
    value: Option<String>,
}

impl LeafToken {
    /// Generic constructor used by document replay.
    ///
    /// A `value` passed to a comment kind is dropped.
    pub fn new(
        kind: LeafKind,
        content: impl Into<String>,
        value: Option<String>,
    ) -> Result<Self, DomainError> {
        let content = content.into();
        if content.is_empty() {
            return Err(DomainError::EmptyContent { kind });
        }
        check_single_line(kind, "content", &content)?;

        let value = if kind.requires_value() {
            let value = value
                .filter(|v| !v.is_empty())
                .ok_or(DomainError::MissingValue { kind })?;
            check_single_line(kind, "value", &value)?;
            Some(value)
        } else {
            if value.is_some() {
                tracing::debug!(%kind, "ignoring value on a leaf kind that takes none");
            }
            None
        };

        Ok(Self {
            kind,
            content,
            value,
        })
    }

    /// `#<content> <value>`, e.g. `directive("include", "<cstdint>")`.
    pub fn directive(
        content: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::new(LeafKind::Directive, content, Some(value.into()))
    }

    pub fn line_comment(content: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(LeafKind::LineComment, content, None)
    }

    pub fn block_comment(content: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(LeafKind::BlockComment, content, None)
    }

    /// A named constant; `content` is the identifier.
    pub fn constant(
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::new(LeafKind::ConstantDecl, name, Some(value.into()))
    }

    pub fn kind(&self) -> LeafKind {
        self.kind
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The value of a directive or constant.
    pub fn required_value(&self) -> Result<&str, DomainError> {
        self.value()
            .ok_or(DomainError::MissingValue { kind: self.kind })
    }
}

impl fmt::Display for LeafToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}({} = {})", self.kind, self.content, value),
            None => write!(f, "{}({})", self.kind, self.content),
        }
    }
}

fn check_single_line(kind: LeafKind, field: &'static str, text: &str) -> Result<(), DomainError> {
    if text.contains(['\n', '\r']) {
        return Err(DomainError::LineBreak { kind, field });
    }
    Ok(())
}
