use crate::utils::{build_tree, build_tree_with_variation_points, find, find_all};
use polyglot::Language;
use polyglot_ast::capability::Capability;
use polyglot_ast::kind::{NodeKind, SpecialKind};
use polyglot_ast::slot::Slot;

fn special(tree: &polyglot::Tree, kind: SpecialKind) -> Vec<polyglot_ast::Node<'_>> {
    tree.nodes()
        .filter(|node| node.kind() == NodeKind::Special(kind))
        .collect()
}

#[test]
fn test_module_root_per_language() {
    for language in Language::ALL {
        let tree = build_tree(language, "x\n");
        assert!(
            tree.root().has_capability(Capability::Module)
                || tree.root().kind() == NodeKind::Special(SpecialKind::ParseError),
            "{language}: {}",
            tree.root().kind()
        );
        assert!(tree.root().parent().is_none());
    }
}

#[test]
fn test_terminal_productions_are_collapsed() {
    let tree = build_tree(Language::Python, "greeting = \"hello {name}\"\n");
    let string = find(&tree, "string");
    assert!(string.is_terminal());
    assert_eq!(string.text(), "\"hello {name}\"");
    assert_eq!(string.children().count(), 0);
}

#[test]
fn test_punctuation_becomes_terminal_symbols() {
    let tree = build_tree(Language::C, "int main(void) { return 0; }\n");
    let symbols: Vec<_> = special(&tree, SpecialKind::TerminalSymbol)
        .into_iter()
        .map(|node| node.text())
        .collect();
    for expected in ["(", ")", "{", "}", ";", "return"] {
        assert!(symbols.contains(&expected), "missing {expected:?} in {symbols:?}");
    }
}

#[test]
fn test_comments_are_trivia() {
    let tree = build_tree(Language::Python, "# heading\nx = 1  # trailing\n");
    let comments = special(&tree, SpecialKind::Comment);
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].text(), "# heading");
    assert!(comments.iter().all(|comment| comment.is_trivia()));
    assert!(comments.iter().all(|comment| comment.parent_slot().is_none()));
}

#[test]
fn test_unmapped_productions_become_blots() {
    let tree = build_tree(Language::Python, "def f():\n    global counter\n");
    let blots = special(&tree, SpecialKind::Blot);
    assert!(
        blots.iter().any(|blot| blot.text() == "global counter"),
        "{}",
        tree.root().to_sexp()
    );
}

#[test]
fn test_error_regions_become_error_nodes() {
    let source = "int main(void) { int x = @@ 3; }\n";
    let tree = build_tree(Language::C, source);
    assert!(tree.nodes().any(|node| node.is_error()));
    assert!(special(&tree, SpecialKind::VariationPoint).is_empty());
}

#[test]
fn test_error_regions_become_variation_points() {
    let source = "int main(void) { int x = @@ 3; }\n";
    let tree = build_tree_with_variation_points(Language::C, source);
    let points = special(&tree, SpecialKind::VariationPoint);
    assert!(!points.is_empty(), "{}", tree.root().to_sexp());
    for point in points {
        let raw = point.one(Slot::Raw).unwrap();
        assert_eq!(raw.span(), point.span());
        assert_eq!(raw.kind(), NodeKind::Special(SpecialKind::ErrorTree));
        for alternative in point.many(Slot::Alternatives).unwrap() {
            assert_eq!(alternative.kind(), NodeKind::Special(SpecialKind::ParseError));
            assert_eq!(alternative.text(), raw.text());
            assert_eq!(alternative.parent_slot(), Some(Slot::Alternatives));
        }
    }
    assert_eq!(tree.to_source(), source);
}

#[test]
fn test_fielded_children_fill_slots() {
    let tree = build_tree(Language::Rust, "fn add(a: i32, b: i32) -> i32 { a + b }\n");
    let function = find(&tree, "function_item");
    assert_eq!(function.one(Slot::Name).unwrap().text(), "add");
    assert_eq!(function.opt(Slot::ReturnType).unwrap().unwrap().text(), "i32");
    let parameters = function.one(Slot::Parameters).unwrap();
    assert_eq!(parameters.many(Slot::Items).unwrap().len(), 2);

    let binary = find(&tree, "binary_expression");
    assert_eq!(binary.one(Slot::Left).unwrap().text(), "a");
    assert_eq!(binary.one(Slot::Operator).unwrap().text(), "+");
    assert_eq!(binary.one(Slot::Right).unwrap().text(), "b");
}

#[test]
fn test_capability_queries_find_every_loop() {
    let tree = build_tree(
        Language::JavaScript,
        "for (;;) {}\nwhile (x) {}\ndo { } while (y);\nfor (const k in o) {}\n",
    );
    assert_eq!(tree.nodes_with(Capability::Loop).count(), 4);
    assert_eq!(find_all(&tree, "while_statement").len(), 1);
}

#[test]
fn test_empty_for_clauses_read_as_absent() {
    let tree = build_tree(Language::JavaScript, "for (;;) { break; }\n");
    let statement = find(&tree, "for_statement");
    assert!(statement.opt(Slot::Initializer).unwrap().is_none());
    assert!(statement.opt(Slot::Condition).unwrap().is_none());
    assert!(statement.opt(Slot::Increment).unwrap().is_none());
    assert_eq!(statement.one(Slot::Body).unwrap().text(), "{ break; }");
    assert!(special(&tree, SpecialKind::Blot).is_empty());
    assert_eq!(tree.to_source(), "for (;;) { break; }\n");
}

#[test]
fn test_fixed_lexeme_productions_become_terminal_symbols() {
    let tree = build_tree(Language::Python, "def f(a, *, b):\n    pass\n");
    let separator = special(&tree, SpecialKind::TerminalSymbol)
        .into_iter()
        .find(|node| node.text() == "*")
        .unwrap();
    assert_eq!(separator.parent_slot(), None);
    assert!(special(&tree, SpecialKind::Blot).is_empty());
}
