//! Document Service - replays declarative documents onto sessions.
//!
//! This service coordinates the rendering workflow:
//! 1. Acquire a sink through the `SinkProvider` port
//! 2. Walk the document tree, translating nodes into session calls
//! 3. Dispose the session (closing guard, flush)

use std::io::Write;
use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::{
        ports::SinkProvider,
        services::session::{EmissionSession, EmissionStats},
    },
    domain::{DIALECT_REGISTRY, Dialect, Document, LayoutOptions, Node, Scope},
    error::EncloseResult,
};

/// Information about a dialect for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialectInfo {
    pub name: String,
    pub display_name: String,
    pub extension: String,
    pub scopes: Vec<String>,
    pub constant_prefix: String,
}

/// Replays [`Document`]s through the emission API.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentService;

impl DocumentService {
    pub fn new() -> Self {
        Self
    }

    /// Render `document` into an already open session.
    ///
    /// Stops at the first failing node. Scopes opened before the failure are
    /// still closed, so the partial output stays balanced.
    #[instrument(skip_all, fields(nodes = document.nodes.len()))]
    pub fn render<W: Write>(
        &self,
        document: &Document,
        session: &mut EmissionSession<W>,
    ) -> EncloseResult<()> {
        self.render_nodes(&document.nodes, session)
    }

    /// Open `destination`, render `document` into it and dispose the session.
    #[instrument(
        skip_all,
        fields(destination = %destination.as_ref().display(), dialect = dialect.name())
    )]
    pub fn render_to(
        &self,
        provider: &dyn SinkProvider,
        destination: impl AsRef<Path>,
        dialect: Dialect,
        layout: LayoutOptions,
        document: &Document,
    ) -> EncloseResult<EmissionStats> {
        let mut session = EmissionSession::open(provider, destination.as_ref(), dialect, layout)?;
        self.render(document, &mut session)?;

        let stats = session.stats();
        session.finish()?;

        info!(
            leaves = stats.leaves,
            scopes = stats.scopes,
            bytes = stats.bytes,
            "Document rendered"
        );
        Ok(stats)
    }

    /// All registered dialects.
    pub fn list_dialects(&self) -> Vec<DialectInfo> {
        DIALECT_REGISTRY
            .iter()
            .map(|syntax| DialectInfo {
                name: syntax.name.to_string(),
                display_name: syntax.display_name.to_string(),
                extension: syntax.header_extension.to_string(),
                scopes: syntax
                    .supported_kinds()
                    .map(|k| k.as_str().to_string())
                    .collect(),
                constant_prefix: syntax.constant_qualifiers.to_string(),
            })
            .collect()
    }

    fn render_nodes<W: Write>(
        &self,
        nodes: &[Node],
        session: &mut EmissionSession<W>,
    ) -> EncloseResult<()> {
        for node in nodes {
            match node {
                Node::Newline => session.newline()?,
                Node::Scope { kind, name, body } => {
                    let scope = Scope::new(*kind, name.clone());
                    session.with_scope(scope, |inner| self.render_nodes(body, inner))?;
                }
                leaf => {
                    if let Some(token) = leaf.to_leaf() {
                        session.write_leaf(&token?)?;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::application::ports::MockSinkProvider;
    use crate::domain::{DomainError, GuardStyle, ScopeKind};
    use crate::error::EncloseError;

    fn render(dialect: Dialect, document: &Document) -> (EncloseResult<()>, String) {
        let mut session =
            EmissionSession::new(Vec::new(), dialect, LayoutOptions::default()).unwrap();
        let result = DocumentService::new().render(document, &mut session);
        let bytes = session.finish().unwrap();
        (result, String::from_utf8(bytes).unwrap())
    }

    #[test]
    fn renders_nested_document() {
        let document = Document::new()
            .with(Node::Directive {
                content: "include".into(),
                value: Some("<cstdint>".into()),
            })
            .with(Node::scope(
                Scope::structure("hello"),
                vec![Node::scope(
                    Scope::namespace("N"),
                    vec![Node::Constant {
                        content: "x".into(),
                        value: Some("1".into()),
                    }],
                )],
            ));

        let (result, out) = render(Dialect::cpp(), &document);
        result.unwrap();
        assert_eq!(
            out,
            "#pragma once\n#include <cstdint>\nstruct hello {\n\tnamespace N {\n\t\t[[nodiscard]] static constexpr uint32_t x = 1;\n\t}\n};\n"
        );
    }

    #[test]
    fn failure_inside_scope_keeps_output_balanced() {
        let document = Document::new().with(Node::scope(
            Scope::structure("s"),
            vec![
                Node::LineComment {
                    content: "ok".into(),
                },
                Node::Constant {
                    content: "x".into(),
                    value: None,
                },
            ],
        ));

        let (result, out) = render(Dialect::c(), &document);
        assert!(matches!(
            result,
            Err(EncloseError::Domain(DomainError::MissingValue { .. }))
        ));
        assert_eq!(out, "#pragma once\nstruct s {\n\t//\tok\n};\n");
    }

    #[test]
    fn unsupported_scope_in_c_fails() {
        let document = Document::new().with(Node::scope(Scope::namespace("N"), vec![]));
        let (result, out) = render(Dialect::c(), &document);
        assert!(matches!(
            result,
            Err(EncloseError::Domain(DomainError::UnsupportedScope {
                kind: ScopeKind::Namespace,
                ..
            }))
        ));
        assert_eq!(out, "#pragma once\n");
    }

    #[test]
    fn render_to_reports_stats() {
        let mut provider = MockSinkProvider::new();
        provider
            .expect_open()
            .times(1)
            .returning(|_| Ok(Box::new(std::io::sink())));

        let document = Document::new()
            .with(Node::Newline)
            .with(Node::scope(Scope::control_block(), vec![]));
        let stats = DocumentService::new()
            .render_to(
                &provider,
                "c.h",
                Dialect::c().with_guard(GuardStyle::Ifndef),
                LayoutOptions::default(),
                &document,
            )
            .unwrap();

        assert_eq!(stats.scopes, 1);
        assert_eq!(stats.blank_lines, 1);
        assert_eq!(stats.max_depth, 1);
    }

    #[test]
    fn render_to_propagates_unavailable_sink() {
        let mut provider = MockSinkProvider::new();
        provider.expect_open().returning(|path| {
            Err(ApplicationError::SinkUnavailable {
                destination: path.to_path_buf(),
                reason: "denied".into(),
            }
            .into())
        });

        let result = DocumentService::new().render_to(
            &provider,
            "c.h",
            Dialect::c(),
            LayoutOptions::default(),
            &Document::new(),
        );
        assert!(matches!(
            result,
            Err(EncloseError::Application(ApplicationError::SinkUnavailable { .. }))
        ));
    }

    #[test]
    fn lists_registered_dialects() {
        let dialects = DocumentService::new().list_dialects();
        let names: Vec<&str> = dialects.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["cpp", "c"]);
        assert!(!dialects[1].scopes.contains(&"namespace".to_string()));
    }
}
