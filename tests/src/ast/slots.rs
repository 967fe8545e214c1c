use crate::utils::{build_tree, find, find_all, fixtures, texts};
use polyglot::Language;
use polyglot_ast::AstError;
use polyglot_ast::kind::NodeKind;
use polyglot_ast::languages::{c, python};
use polyglot_ast::slot::{Arity, Slot, SlotValue};

const C_CALL: &str = "void f(void) { foo(a, b); }\n";

#[test]
fn test_c_call_slots() {
    let tree = build_tree(Language::C, C_CALL);
    let call = find(&tree, "call_expression");

    let SlotValue::Single(Some(function)) = call.get_slot(Slot::Function).unwrap() else {
        panic!("function is a required singular slot");
    };
    assert_eq!(function.text(), "foo");
    assert_eq!(function.parent_slot(), Some(Slot::Function));

    let arguments = call.one(Slot::Arguments).unwrap();
    assert_eq!(arguments.text(), "(a, b)");
    let items = arguments.get_slot(Slot::Items).unwrap();
    assert_eq!(texts(items.list().unwrap()), ["a", "b"]);
}

#[test]
fn test_typed_views() {
    let tree = build_tree(Language::C, C_CALL);
    let node = find(&tree, "call_expression");
    let call = c::CallExpression::cast(node).unwrap();
    assert_eq!(call.node(), node);
    assert_eq!(call.function().unwrap().text(), "foo");
    assert_eq!(call.arguments().unwrap().text(), "(a, b)");
    assert!(c::IfStatement::cast(node).is_none());
}

#[test]
fn test_python_if_without_else_has_empty_alternative() {
    let tree = build_tree(Language::Python, "if ready:\n    go()\n");
    let statement = find(&tree, "if_statement");

    assert_eq!(statement.one(Slot::Condition).unwrap().text(), "ready");
    assert_eq!(statement.get_slot(Slot::Alternative).unwrap(), SlotValue::List(vec![]));
    assert!(statement.many(Slot::Alternative).unwrap().is_empty());

    let view = python::IfStatement::cast(statement).unwrap();
    assert!(view.alternative().unwrap().is_empty());
}

#[test]
fn test_python_if_with_else_and_elif() {
    let tree = build_tree(
        Language::Python,
        "if a:\n    x()\nelif b:\n    y()\nelse:\n    z()\n",
    );
    let statement = find(&tree, "if_statement");
    let alternatives = statement.many(Slot::Alternative).unwrap();
    let productions: Vec<_> = alternatives.iter().map(|n| n.kind().production()).collect();
    assert_eq!(productions, ["elif_clause", "else_clause"]);
}

#[test]
fn test_condition_of_c_break_is_undeclared() {
    let tree = build_tree(Language::C, "void f(void) { while (1) { break; } }\n");
    let statement = find(&tree, "break_statement");
    let undeclared = AstError::UndeclaredSlot {
        kind: NodeKind::C(c::Kind::BreakStatement),
        slot: "condition".to_string(),
    };
    assert_eq!(statement.get_slot(Slot::Condition), Err(undeclared.clone()));
    assert_eq!(statement.slot("condition"), Err(undeclared));
    assert!(matches!(
        statement.slot("no_such_slot"),
        Err(AstError::UndeclaredSlot { slot, .. }) if slot == "no_such_slot"
    ));
}

#[test]
fn test_shortcuts_check_arity() {
    let tree = build_tree(Language::C, C_CALL);
    let call = find(&tree, "call_expression");
    assert_eq!(
        call.many(Slot::Function),
        Err(AstError::ArityMismatch {
            kind: call.kind(),
            slot: Slot::Function,
            declared: Arity::One,
            requested: Arity::Many,
        })
    );
    assert_eq!(call.opt(Slot::Function).unwrap().map(|n| n.text()), Some("foo"));

    let tree = build_tree(Language::Python, "if a:\n    pass\n");
    let statement = find(&tree, "if_statement");
    assert!(matches!(
        statement.one(Slot::Alternative),
        Err(AstError::ArityMismatch {
            declared: Arity::Many,
            requested: Arity::One,
            ..
        })
    ));
}

#[test]
fn test_optional_slot_reads_none() {
    let tree = build_tree(Language::C, "void f(void) { if (x) y(); }\n");
    let statement = find(&tree, "if_statement");
    assert_eq!(statement.get_slot(Slot::Alternative).unwrap(), SlotValue::Single(None));
    assert_eq!(statement.opt(Slot::Alternative).unwrap(), None);
}

#[test]
fn test_get_slot_is_idempotent() {
    for (path, language) in fixtures("roundtrip") {
        let source = std::fs::read_to_string(&path).unwrap();
        let tree = build_tree(language, &source);
        for node in tree.nodes() {
            for decl in node.kind().slots() {
                assert_eq!(
                    node.get_slot(decl.slot),
                    node.get_slot(decl.slot),
                    "{} in {}",
                    node.kind(),
                    path.display()
                );
            }
        }
    }
}

#[test]
fn test_slot_values_follow_declared_arity() {
    for (path, language) in fixtures("roundtrip") {
        let source = std::fs::read_to_string(&path).unwrap();
        let tree = build_tree(language, &source);
        for node in tree.nodes() {
            for decl in node.kind().slots() {
                let value = node.get_slot(decl.slot).unwrap();
                match decl.arity {
                    Arity::One => assert!(
                        matches!(value, SlotValue::Single(Some(_))),
                        "{} `{}` in {}",
                        node.kind(),
                        decl.slot,
                        path.display()
                    ),
                    Arity::Opt => assert!(matches!(value, SlotValue::Single(_))),
                    Arity::Many => assert!(matches!(value, SlotValue::List(_))),
                }
            }
        }
    }
}

#[test]
fn test_slotted_nodes_are_never_trivia() {
    let tree = build_tree(
        Language::JavaScript,
        "call(a, /* note */ b);\nlet x = [1, 2];\n",
    );
    for node in tree.nodes() {
        for slot in node.slots() {
            let (_, value) = slot.unwrap();
            for slotted in value.into_nodes() {
                assert!(!slotted.is_trivia(), "{} holds trivia", node.kind());
            }
        }
    }
    assert_eq!(find_all(&tree, "call_expression").len(), 1);
}

#[test]
fn test_locations_are_one_based() {
    let tree = build_tree(Language::C, "int x;\nvoid f(void) { foo(a, b); }\n");
    let call = find(&tree, "call_expression");
    let location = call.location();
    assert_eq!((location.start_line, location.start_column), (2, 16));
    assert_eq!((location.end_line, location.end_column), (2, 25));
    assert_eq!(location.to_string(), "2:16");
}
