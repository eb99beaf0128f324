//! The scope stack: dialect checks, the enclosure tracker and the renderers
//! combined into one pure state machine.
//!
//! The emitter never performs I/O. Each operation returns the exact text the
//! caller must append, and only mutates the tracker once that text is known
//! to be valid, so a failed call leaves both the stack and the output as they
//! were.

use tracing::{debug, trace};

use crate::domain::{
    dialect::Dialect,
    entities::{EnclosureTracker, LeafToken, Scope},
    error::DomainError,
    layout::LayoutOptions,
    render,
    value_objects::ScopeKind,
};

#[derive(Debug, Clone)]
pub struct Emitter {
    dialect: Dialect,
    layout: LayoutOptions,
    tracker: EnclosureTracker,
}

impl Emitter {
    pub fn new(dialect: Dialect, layout: LayoutOptions) -> Result<Self, DomainError> {
        layout.validate()?;
        Ok(Self {
            dialect,
            layout,
            tracker: EnclosureTracker::new(),
        })
    }

    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    pub fn layout(&self) -> &LayoutOptions {
        &self.layout
    }

    pub fn tracker(&self) -> &EnclosureTracker {
        &self.tracker
    }

    pub fn depth(&self) -> usize {
        self.tracker.depth()
    }

    /// Guard text for the top of the output.
    pub fn preamble(&self) -> String {
        let mut text = self.dialect.preamble();
        if !text.is_empty() && self.layout.blank_after_directive {
            text.push('\n');
        }
        text
    }

    /// Closing guard text for the end of the output.
    pub fn postamble(&self) -> String {
        self.dialect.postamble()
    }

    pub fn leaf(&self, token: &LeafToken) -> Result<String, DomainError> {
        trace!(%token, depth = self.depth(), "leaf");
        render::render_leaf(token, self.depth(), self.dialect.syntax(), &self.layout)
    }

    /// Open `scope` at the current depth and push it.
    pub fn enter(&mut self, scope: &Scope) -> Result<String, DomainError> {
        let syntax = self.dialect.syntax();
        let scope_syntax = syntax.require_scope(scope.kind())?;

        let name = match (scope.kind().is_named(), scope.name()) {
            (true, Some(name)) if !name.is_empty() => Some(name),
            (true, _) => return Err(DomainError::MissingScopeName { kind: scope.kind() }),
            (false, name) => {
                if name.is_some() {
                    debug!(%scope, "unnamed scope kind ignores its name");
                }
                None
            }
        };

        let text =
            render::render_scope_open(scope_syntax, name, self.depth(), syntax, &self.layout);
        self.tracker.push(scope.kind());
        debug!(%scope, depth = self.depth(), "scope opened");
        Ok(text)
    }

    /// Pop the innermost scope, which must be a `kind`, and close it.
    pub fn exit(&mut self, kind: ScopeKind) -> Result<String, DomainError> {
        let scope_syntax = self.dialect.syntax().require_scope(kind)?;
        self.tracker.pop(kind)?;
        debug!(%kind, depth = self.depth(), "scope closed");
        Ok(render::render_scope_close(
            scope_syntax,
            self.depth(),
            &self.layout,
        ))
    }
}
