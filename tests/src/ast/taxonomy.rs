use polyglot::Language;
use polyglot_ast::capability::Capability;
use polyglot_ast::kind::{NodeKind, SpecialKind};
use polyglot_ast::languages::{c, cpp};
use polyglot_ast::slot::{Arity, Slot};
use polyglot_ast::taxonomy::{all_kinds, validate};

#[test]
fn test_taxonomy_is_valid() {
    assert_eq!(validate(), Ok(()));
}

#[test]
fn test_capabilities_declare_required_slots() {
    for kind in all_kinds() {
        for capability in kind.capabilities().iter() {
            for slot in capability.required_slots() {
                assert!(kind.slot(*slot).is_some(), "{kind} lacks `{slot}`");
            }
        }
    }
}

#[test]
fn test_cxx_dialects_share_declarations() {
    let in_c = NodeKind::C(c::Kind::CallExpression);
    let in_cpp = NodeKind::Cpp(cpp::Kind::CallExpression);
    assert_eq!(in_c.production(), in_cpp.production());
    assert_eq!(in_c.slots(), in_cpp.slots());
    assert_eq!(Language::C.family(), Language::Cpp.family());
    assert_ne!(in_c, in_cpp);
}

#[test]
fn test_resolve_productions() {
    assert_eq!(
        NodeKind::resolve(Language::C, "break_statement"),
        Some(NodeKind::C(c::Kind::BreakStatement))
    );
    assert_eq!(NodeKind::resolve(Language::C, "no_such_production"), None);
    assert_eq!(
        NodeKind::resolve(Language::Cpp, "lambda_expression"),
        Some(NodeKind::Cpp(cpp::Kind::LambdaExpression))
    );
    assert_eq!(NodeKind::resolve(Language::C, "lambda_expression"), None);
}

#[test]
fn test_special_kinds() {
    let point = NodeKind::Special(SpecialKind::VariationPoint);
    assert_eq!(point.slot(Slot::Raw).map(|decl| decl.arity), Some(Arity::One));
    assert_eq!(point.slot(Slot::Alternatives).map(|decl| decl.arity), Some(Arity::Many));
    assert!(NodeKind::Special(SpecialKind::Comment).is_trivia());
    assert!(NodeKind::Special(SpecialKind::InnerWhitespace).is_trivia());
    assert!(NodeKind::Special(SpecialKind::TerminalSymbol).is_terminal_symbol());
    assert!(NodeKind::Special(SpecialKind::ErrorTree).has_capability(Capability::Error));
    assert!(NodeKind::Special(SpecialKind::Blot).is_terminal());
}
