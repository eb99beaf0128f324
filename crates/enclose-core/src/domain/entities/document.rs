//! Declarative documents: a tree of leaves and scopes replayed onto a session.
//!
//! The node shapes are deliberately loose (values are optional everywhere)
//! so that a malformed file deserializes fine and then fails with the same
//! domain error a programmatic caller would get.

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::{leaf::LeafToken, scope::Scope},
    error::DomainError,
    value_objects::{LeafKind, ScopeKind},
};

/// A whole output file, minus the guard (which the dialect supplies).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub nodes: Vec<Node>,
}

/// One entry of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Node {
    Newline,
    Directive {
        content: String,
        value: Option<String>,
    },
    LineComment {
        content: String,
    },
    BlockComment {
        content: String,
    },
    Constant {
        content: String,
        value: Option<String>,
    },
    Scope {
        kind: ScopeKind,
        name: Option<String>,
        #[serde(default)]
        body: Vec<Node>,
    },
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Deepest scope nesting in the tree.
    pub fn max_depth(&self) -> usize {
        fn depth(nodes: &[Node]) -> usize {
            nodes
                .iter()
                .map(|n| match n {
                    Node::Scope { body, .. } => 1 + depth(body),
                    _ => 0,
                })
                .max()
                .unwrap_or(0)
        }
        depth(&self.nodes)
    }
}

impl Node {
    pub fn scope(scope: Scope, body: Vec<Node>) -> Self {
        Self::Scope {
            kind: scope.kind(),
            name: scope.name().map(str::to_string),
            body,
        }
    }

    /// The leaf token this node describes, if it is a leaf.
    pub fn to_leaf(&self) -> Option<Result<LeafToken, DomainError>> {
        let (kind, content, value) = match self {
            Self::Directive { content, value } => (LeafKind::Directive, content, value),
            Self::LineComment { content } => (LeafKind::LineComment, content, &None),
            Self::BlockComment { content } => (LeafKind::BlockComment, content, &None),
            Self::Constant { content, value } => (LeafKind::ConstantDecl, content, value),
            Self::Newline | Self::Scope { .. } => return None,
        };
        Some(LeafToken::new(kind, content.clone(), value.clone()))
    }
}

impl From<LeafToken> for Node {
    fn from(token: LeafToken) -> Self {
        let content = token.content().to_string();
        let value = token.value().map(str::to_string);
        match token.kind() {
            LeafKind::Directive => Self::Directive { content, value },
            LeafKind::LineComment => Self::LineComment { content },
            LeafKind::BlockComment => Self::BlockComment { content },
            LeafKind::ConstantDecl => Self::Constant { content, value },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_nodes_deserialize() {
        let doc: Document = serde_json::from_str(
            r#"{ "nodes": [
                { "type": "newline" },
                { "type": "scope", "kind": "namespace", "name": "N", "body": [
                    { "type": "constant", "content": "X", "value": "1" }
                ] }
            ] }"#,
        )
        .unwrap();
        assert_eq!(doc.nodes.len(), 2);
        assert_eq!(doc.max_depth(), 1);
    }

    #[test]
    fn missing_value_surfaces_as_domain_error() {
        let node = Node::Directive {
            content: "include".into(),
            value: None,
        };
        assert_eq!(
            node.to_leaf(),
            Some(Err(DomainError::MissingValue {
                kind: LeafKind::Directive
            }))
        );
    }

    #[test]
    fn leaf_tokens_convert_back_to_nodes() {
        let token = LeafToken::constant("cool_value", "0x1").unwrap();
        let node = Node::from(token.clone());
        assert_eq!(node.to_leaf(), Some(Ok(token)));
    }
}
