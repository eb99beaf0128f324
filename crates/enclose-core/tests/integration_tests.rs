//! Integration tests for enclose-core.

use enclose_core::{
    application::{DocumentService, EmissionSession},
    domain::{DomainError, GuardStyle, ScopeKind},
    prelude::*,
};
use proptest::prelude::*;

fn finish(session: EmissionSession<Vec<u8>>) -> String {
    String::from_utf8(session.finish().unwrap()).unwrap()
}

fn scope_for(kind: ScopeKind) -> Scope {
    match kind {
        ScopeKind::Struct => Scope::structure("s"),
        ScopeKind::Namespace => Scope::namespace("n"),
        ScopeKind::ControlBlock => Scope::control_block(),
    }
}

#[test]
fn cpp_demo_header() {
    let mut s = EmissionSession::new(
        Vec::new(),
        Dialect::cpp().with_guard(GuardStyle::Ifndef),
        LayoutOptions::default(),
    )
    .unwrap();

    s.newline().unwrap();
    s.write_leaf(&LeafToken::block_comment("Oct 19 2026").unwrap())
        .unwrap();
    s.write_leaf(&LeafToken::directive("include", "<cstdint>").unwrap())
        .unwrap();
    s.newline().unwrap();
    s.with_scope(Scope::structure("hello"), |s| {
        let credit = "This comment was made by COOL_GUY_TEXT_PROCESSING";
        s.write_leaf(&LeafToken::block_comment(credit)?)?;
        s.write_leaf(&LeafToken::line_comment(credit)?)?;
        s.with_scope(Scope::namespace("CoolNamespace"), |s| {
            s.write_leaf(&LeafToken::constant("cool_value", "0x152345125")?)
        })
    })
    .unwrap();

    let expected = "\
#ifndef COOL_GUY_TEXT_PROCESSING
#define COOL_GUY_TEXT_PROCESSING

/* \tOct 19 2026 */
#include <cstdint>

struct hello {
\t/* \tThis comment was made by COOL_GUY_TEXT_PROCESSING */
\t//\tThis comment was made by COOL_GUY_TEXT_PROCESSING
\tnamespace CoolNamespace {
\t\t[[nodiscard]] static constexpr uint32_t cool_value = 0x152345125;
\t}
};

#endif";
    assert_eq!(finish(s), expected);
}

#[test]
fn c_demo_header() {
    let mut s = EmissionSession::new(Vec::new(), Dialect::c(), LayoutOptions::default()).unwrap();

    s.newline().unwrap();
    s.write_leaf(&LeafToken::block_comment("Oct 19 2026").unwrap())
        .unwrap();
    s.write_leaf(&LeafToken::directive("include", "<stdio.h>").unwrap())
        .unwrap();
    s.newline().unwrap();
    s.with_scope(Scope::control_block(), |s| {
        s.with_scope(Scope::structure("yeh"), |_| Ok(()))
    })
    .unwrap();

    let expected = "\
#pragma once

/* \tOct 19 2026 */
#include <stdio.h>

{

\tstruct yeh {
\t};

}
";
    assert_eq!(finish(s), expected);
}

#[test]
fn document_and_api_produce_identical_output() {
    let document = Document::new()
        .with(Node::LineComment {
            content: "generated".into(),
        })
        .with(Node::scope(
            Scope::structure("point"),
            vec![Node::Constant {
                content: "dims".into(),
                value: Some("2".into()),
            }],
        ));

    let mut replayed =
        EmissionSession::new(Vec::new(), Dialect::c(), LayoutOptions::default()).unwrap();
    DocumentService::new()
        .render(&document, &mut replayed)
        .unwrap();

    let mut direct =
        EmissionSession::new(Vec::new(), Dialect::c(), LayoutOptions::default()).unwrap();
    direct
        .write_leaf(&LeafToken::line_comment("generated").unwrap())
        .unwrap();
    direct
        .with_scope(Scope::structure("point"), |s| {
            s.write_leaf(&LeafToken::constant("dims", "2")?)
        })
        .unwrap();

    assert_eq!(finish(replayed), finish(direct));
}

#[test]
fn missing_value_writes_nothing() {
    let mut s = EmissionSession::new(Vec::new(), Dialect::cpp(), LayoutOptions::default()).unwrap();
    let before = s.stats().bytes;

    let err = LeafToken::new(LeafKind::Directive, "include", None).unwrap_err();
    assert!(matches!(err, DomainError::MissingValue { .. }));
    assert_eq!(s.stats().bytes, before);

    s.newline().unwrap();
    assert_eq!(finish(s), "#pragma once\n\n");
}

#[derive(Debug, Clone)]
enum Op {
    Leaf,
    Enter(ScopeKind),
    Exit,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Leaf),
        (0..ScopeKind::ALL.len()).prop_map(|i| Op::Enter(ScopeKind::ALL[i])),
        Just(Op::Exit),
    ]
}

fn leading_tabs(line: &str) -> usize {
    line.chars().take_while(|c| *c == '\t').count()
}

proptest! {
    #[test]
    fn nested_scopes_return_to_depth_zero(kinds in prop::collection::vec(0..3usize, 0..12)) {
        fn nest(
            s: &mut EmissionSession<Vec<u8>>,
            kinds: &[usize],
        ) -> EncloseResult<()> {
            match kinds.split_first() {
                None => s.write_leaf(&LeafToken::line_comment("leaf")?),
                Some((first, rest)) => {
                    let scope = scope_for(ScopeKind::ALL[*first]);
                    s.with_scope(scope, |s| nest(s, rest))
                }
            }
        }

        let mut s = EmissionSession::new(Vec::new(), Dialect::cpp(), LayoutOptions::default()).unwrap();
        nest(&mut s, &kinds).unwrap();
        prop_assert_eq!(s.depth(), 0);
        prop_assert_eq!(s.stats().max_depth, kinds.len());
    }

    #[test]
    fn indentation_tracks_depth(ops in prop::collection::vec(op(), 0..64)) {
        let mut s = EmissionSession::new(Vec::new(), Dialect::cpp(), LayoutOptions::default()).unwrap();
        let mut stack: Vec<ScopeKind> = Vec::new();
        // The pragma line sits at depth zero.
        let mut expected = vec![0usize];

        for op in ops {
            match op {
                Op::Leaf => {
                    s.write_leaf(&LeafToken::line_comment("x").unwrap()).unwrap();
                    expected.push(stack.len());
                }
                Op::Enter(kind) => {
                    s.enter_scope(&scope_for(kind)).unwrap();
                    expected.push(stack.len());
                    stack.push(kind);
                }
                Op::Exit => match stack.pop() {
                    Some(kind) => {
                        s.exit_scope(kind).unwrap();
                        expected.push(stack.len());
                    }
                    None => {
                        let before = s.stats().bytes;
                        let err = s.exit_scope(ScopeKind::Struct).unwrap_err();
                        prop_assert!(
                            matches!(
                                err.as_domain(),
                                Some(DomainError::UnbalancedScope { found: None, .. })
                            ),
                            "unexpected error: {}",
                            err
                        );
                        prop_assert_eq!(s.stats().bytes, before);
                    }
                },
            }
        }
        while let Some(kind) = stack.pop() {
            s.exit_scope(kind).unwrap();
            expected.push(stack.len());
        }
        prop_assert_eq!(s.depth(), 0);

        let out = finish(s);
        let indents: Vec<usize> = out
            .lines()
            .filter(|l| !l.is_empty())
            .map(leading_tabs)
            .collect();
        prop_assert_eq!(indents, expected);
    }

    #[test]
    fn mismatched_exit_leaves_stack_untouched(first in 0..3usize, other in 0..3usize) {
        prop_assume!(first != other);
        let mut s = EmissionSession::new(Vec::new(), Dialect::cpp(), LayoutOptions::default()).unwrap();
        s.enter_scope(&scope_for(ScopeKind::ALL[first])).unwrap();
        let before = s.stats().bytes;

        prop_assert!(s.exit_scope(ScopeKind::ALL[other]).is_err());
        prop_assert_eq!(s.depth(), 1);
        prop_assert_eq!(s.stats().bytes, before);
        s.exit_scope(ScopeKind::ALL[first]).unwrap();
    }
}
