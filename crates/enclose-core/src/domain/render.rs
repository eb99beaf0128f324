//! Stateless renderers: leaf lines and scope delimiters.
//!
//! Every function here turns a descriptor plus a depth into text. None of
//! them look at the tracker; the emitter decides the depth and keeps the
//! stack consistent.

use crate::domain::{
    dialect::{DialectSyntax, ScopeSyntax},
    entities::LeafToken,
    error::DomainError,
    layout::LayoutOptions,
    value_objects::LeafKind,
};

/// Render one leaf at `depth`, terminated by exactly one newline.
pub fn render_leaf(
    token: &LeafToken,
    depth: usize,
    syntax: &DialectSyntax,
    layout: &LayoutOptions,
) -> Result<String, DomainError> {
    let mut line = layout.indentation(depth);

    match token.kind() {
        LeafKind::Directive => {
            let value = token.required_value()?;
            line.push_str(syntax.directive_prefix);
            line.push_str(token.content());
            line.push(' ');
            line.push_str(value);
        }
        LeafKind::LineComment => {
            line.push_str(syntax.line_comment);
            line.push_str(&layout.delimiter);
            line.push_str(token.content());
        }
        LeafKind::BlockComment => {
            line.push_str(syntax.block_comment_open);
            line.push_str(&layout.delimiter);
            line.push_str(token.content());
            line.push_str(syntax.block_comment_close);
        }
        LeafKind::ConstantDecl => {
            let value = token.required_value()?;
            line.push_str(&format!(
                "{} {} {} = {}{}",
                syntax.constant_qualifiers,
                syntax.constant_type,
                token.content(),
                value,
                syntax.statement_terminator
            ));
        }
    }

    line.push('\n');
    if token.kind() == LeafKind::Directive && layout.blank_after_directive {
        line.push('\n');
    }
    Ok(line)
}

/// Render the opening of a scope whose header sits at `depth`.
///
/// `name` must already be resolved: present for keyword scopes.
pub fn render_scope_open(
    scope: &ScopeSyntax,
    name: Option<&str>,
    depth: usize,
    syntax: &DialectSyntax,
    layout: &LayoutOptions,
) -> String {
    let options = layout.scope(scope.kind);
    let indent = layout.indentation(depth);
    let mut out = String::new();

    let header = match (scope.keyword, name) {
        (Some(keyword), Some(name)) => Some(format!("{keyword} {name}")),
        (Some(keyword), None) => Some(keyword.to_string()),
        (None, _) => None,
    };

    out.push_str(&indent);
    match header {
        Some(header) if !options.inline_brace => {
            out.push_str(&header);
            out.push('\n');
            out.push_str(&indent);
            out.push_str(syntax.open_brace);
        }
        Some(header) => {
            out.push_str(&header);
            out.push(' ');
            out.push_str(syntax.open_brace);
            if layout.delimit_inline_syntax {
                out.push_str(&layout.delimiter);
            }
        }
        None => {
            out.push_str(syntax.open_brace);
            if options.inline_brace && layout.delimit_inline_syntax {
                out.push_str(&layout.delimiter);
            }
        }
    }
    out.push('\n');

    if options.blank_after_open {
        out.push('\n');
    }
    out
}

/// Render the close of a scope; `depth` is the depth after the pop.
pub fn render_scope_close(scope: &ScopeSyntax, depth: usize, layout: &LayoutOptions) -> String {
    let options = layout.scope(scope.kind);
    let mut out = String::new();

    if options.blank_before_close {
        out.push('\n');
    }
    out.push_str(&layout.indentation(depth));
    out.push_str(scope.terminator);
    out.push('\n');
    if options.blank_after_close {
        out.push('\n');
    }
    out
}
