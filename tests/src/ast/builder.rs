use polyglot_ast::builder::TreeBuilder;
use polyglot_ast::kind::{NodeKind, SpecialKind};
use polyglot_ast::language::Language;
use polyglot_ast::languages::{c, python};
use polyglot_ast::slot::Slot;
use polyglot_ast::{AstError, NodeId};

fn python_call(builder: &mut TreeBuilder, callee: &str, arguments: &[&str]) {
    builder.start_node(python::Kind::Call);
    builder.token_in(Slot::Function, python::Kind::Identifier, callee);
    builder.start_node_in(Slot::Arguments, python::Kind::ArgumentList);
    builder.symbol("(");
    for (index, argument) in arguments.iter().enumerate() {
        if index > 0 {
            builder.symbol(",");
            builder.whitespace(" ");
        }
        builder.token(python::Kind::Identifier, argument);
    }
    builder.symbol(")");
    builder.finish_node();
    builder.finish_node();
}

#[test]
fn test_build_python_call() {
    let mut builder = TreeBuilder::new(Language::Python);
    builder.start_node(python::Kind::Module);
    builder.start_node(python::Kind::ExpressionStatement);
    python_call(&mut builder, "print", &["a", "b"]);
    builder.finish_node();
    builder.whitespace("\n");
    builder.finish_node();
    let tree = builder.finish().unwrap();

    assert_eq!(tree.source(), "print(a, b)\n");
    assert_eq!(tree.to_source(), tree.source());
    assert_eq!(tree.root().id(), NodeId::ROOT);
    assert_eq!(tree.root().kind(), NodeKind::Python(python::Kind::Module));

    let call = tree
        .root()
        .descendants()
        .find(|node| node.kind() == NodeKind::Python(python::Kind::Call))
        .unwrap();
    assert_eq!(call.one(Slot::Function).unwrap().text(), "print");
    let arguments = call.one(Slot::Arguments).unwrap().many(Slot::Items).unwrap();
    assert_eq!(arguments.iter().map(|n| n.text()).collect::<Vec<_>>(), ["a", "b"]);
}

#[test]
fn test_ids_follow_pre_order() {
    let mut builder = TreeBuilder::new(Language::Python);
    builder.start_node(python::Kind::Module);
    builder.start_node(python::Kind::ExpressionStatement);
    python_call(&mut builder, "f", &["x"]);
    builder.finish_node();
    builder.finish_node();
    let tree = builder.finish().unwrap();

    let order: Vec<_> = tree.root().descendants().map(|node| node.id()).collect();
    let mut sorted = order.clone();
    sorted.sort();
    assert_eq!(order, sorted);
    assert_eq!(order.len(), tree.len());
}

#[test]
fn test_builder_tracks_position_and_depth() {
    let mut builder = TreeBuilder::new(Language::C);
    assert_eq!(builder.depth(), 0);
    assert_eq!(builder.current_kind(), None);
    builder.start_node(c::Kind::TranslationUnit);
    builder.start_node(c::Kind::BreakStatement);
    builder.symbol("break");
    assert_eq!(builder.position(), 5);
    assert_eq!(builder.depth(), 2);
    assert_eq!(
        builder.current_kind(),
        Some(NodeKind::C(c::Kind::BreakStatement))
    );
    builder.symbol(";");
    builder.finish_node();
    builder.finish_node();
    assert_eq!(builder.finish().unwrap().source(), "break;");
}

#[test]
fn test_undeclared_slot_is_reported() {
    let mut builder = TreeBuilder::new(Language::C);
    builder.start_node(c::Kind::TranslationUnit);
    builder.start_node(c::Kind::BreakStatement);
    builder.symbol("break");
    builder.token_in(Slot::Condition, c::Kind::Identifier, "x");
    builder.finish_node();
    builder.finish_node();
    assert_eq!(
        builder.finish(),
        Err(AstError::UndeclaredSlot {
            kind: NodeKind::C(c::Kind::BreakStatement),
            slot: "condition".to_string(),
        })
    );
}

#[test]
fn test_missing_required_slot_is_reported() {
    let mut builder = TreeBuilder::new(Language::Python);
    builder.start_node(python::Kind::Module);
    builder.start_node(python::Kind::Call);
    builder.token_in(Slot::Function, python::Kind::Identifier, "f");
    builder.finish_node();
    builder.finish_node();
    match builder.finish() {
        Err(AstError::MalformedTree { kind, slot, .. }) => {
            assert_eq!(kind, NodeKind::Python(python::Kind::Call));
            assert_eq!(slot, Some(Slot::Arguments));
        }
        other => panic!("expected a malformed tree, got {other:?}"),
    }
}

#[test]
fn test_too_many_children_in_singular_slot() {
    let mut builder = TreeBuilder::new(Language::Python);
    builder.start_node(python::Kind::Module);
    builder.start_node(python::Kind::Call);
    builder.token_in(Slot::Function, python::Kind::Identifier, "f");
    builder.token_in(Slot::Function, python::Kind::Identifier, "g");
    builder.start_node_in(Slot::Arguments, python::Kind::ArgumentList);
    builder.symbol("()");
    builder.finish_node();
    builder.finish_node();
    builder.finish_node();
    assert!(matches!(
        builder.finish(),
        Err(AstError::MalformedTree {
            slot: Some(Slot::Function),
            ..
        })
    ));
}

#[test]
fn test_unfinished_node_is_unbalanced() {
    let mut builder = TreeBuilder::new(Language::Python);
    builder.start_node(python::Kind::Module);
    builder.start_node(python::Kind::ExpressionStatement);
    builder.finish_node();
    assert!(matches!(
        builder.finish(),
        Err(AstError::UnbalancedBuilder { .. })
    ));
}

#[test]
fn test_extra_finish_is_unbalanced() {
    let mut builder = TreeBuilder::new(Language::Python);
    builder.start_node(python::Kind::Module);
    builder.finish_node();
    builder.finish_node();
    assert!(matches!(
        builder.finish(),
        Err(AstError::UnbalancedBuilder { .. })
    ));
}

#[test]
fn test_empty_builder_is_unbalanced() {
    let builder = TreeBuilder::new(Language::Rust);
    assert!(matches!(
        builder.finish(),
        Err(AstError::UnbalancedBuilder { .. })
    ));
}

#[test]
fn test_second_root_is_rejected() {
    let mut builder = TreeBuilder::new(Language::Python);
    builder.start_node(python::Kind::Module);
    builder.finish_node();
    builder.start_node(python::Kind::Module);
    builder.finish_node();
    assert!(matches!(
        builder.finish(),
        Err(AstError::UnbalancedBuilder { .. })
    ));
}

#[test]
fn test_kind_of_another_language_is_rejected() {
    let mut builder = TreeBuilder::new(Language::Python);
    builder.start_node(python::Kind::Module);
    builder.token(c::Kind::Identifier, "x");
    builder.finish_node();
    assert!(matches!(
        builder.finish(),
        Err(AstError::MalformedTree { kind: NodeKind::C(_), .. })
    ));
}

#[test]
fn test_terminal_kind_cannot_be_opened() {
    let mut builder = TreeBuilder::new(Language::Python);
    builder.start_node(python::Kind::Identifier);
    builder.finish_node();
    assert!(matches!(
        builder.finish(),
        Err(AstError::MalformedTree { .. })
    ));
}

fn variation_point(alternative: &[&str]) -> Result<polyglot_ast::Tree, AstError> {
    let mut builder = TreeBuilder::new(Language::Python);
    builder.start_node(python::Kind::Module);
    builder.start_node(SpecialKind::VariationPoint);
    builder.error_in(Slot::Raw, "f(x");
    builder.start_alternative(SpecialKind::ParseError);
    for text in alternative {
        if *text == "(" {
            builder.symbol(text);
        } else {
            builder.token(python::Kind::Identifier, text);
        }
    }
    builder.finish_node();
    builder.finish_node();
    builder.whitespace("\n");
    builder.finish_node();
    builder.finish()
}

#[test]
fn test_variation_point_keeps_raw_and_alternative() {
    let tree = variation_point(&["f", "(", "x"]).unwrap();
    assert_eq!(tree.source(), "f(x\n");
    assert_eq!(tree.to_source(), "f(x\n");

    let point = tree.root().many(Slot::Items).unwrap()[0];
    assert_eq!(point.kind(), NodeKind::Special(SpecialKind::VariationPoint));
    assert_eq!(point.one(Slot::Raw).unwrap().text(), "f(x");
    let alternatives = point.many(Slot::Alternatives).unwrap();
    assert_eq!(alternatives.len(), 1);
    assert_eq!(alternatives[0].span(), point.span());
    assert_eq!(alternatives[0].many(Slot::Items).unwrap().len(), 2);
    // Alternatives are not children, so the raw text is visited once.
    assert_eq!(point.children().count(), 1);
}

#[test]
fn test_alternative_must_replay_raw_text() {
    assert_eq!(
        variation_point(&["g"]).unwrap_err(),
        AstError::AlternativeMismatch {
            offset: 0,
            found: "g".to_string(),
        }
    );
}

#[test]
fn test_alternative_cannot_overrun_raw_region() {
    assert!(matches!(
        variation_point(&["f", "(", "x", "x"]),
        Err(AstError::AlternativeMismatch { offset: 3, .. })
    ));
}

#[test]
fn test_alternative_requires_variation_point() {
    let mut builder = TreeBuilder::new(Language::Python);
    builder.start_node(python::Kind::Module);
    builder.start_alternative(SpecialKind::ParseError);
    builder.finish_node();
    builder.finish_node();
    assert!(matches!(
        builder.finish(),
        Err(AstError::MalformedTree {
            slot: Some(Slot::Alternatives),
            ..
        })
    ));
}
