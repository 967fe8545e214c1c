use crate::utils::{build_tree, build_tree_with_variation_points, fixtures};
use polyglot::Language;

fn assert_roundtrip(tree: &polyglot::Tree, source: &str, origin: &str) {
    assert_eq!(tree.source(), source, "{origin}");
    assert_eq!(tree.to_source(), source, "{origin}");
    assert_eq!(tree.root().text(), source, "{origin}");
    tree.validate().unwrap();
}

#[test]
fn test_fixtures_roundtrip() {
    let files = fixtures("roundtrip");
    assert_eq!(files.len(), Language::ALL.len());
    for (path, language) in files {
        let source = std::fs::read_to_string(&path).unwrap();
        let tree = build_tree(language, &source);
        assert_eq!(tree.language(), language);
        assert_roundtrip(&tree, &source, &path.display().to_string());
    }
}

#[test]
fn test_broken_fixtures_roundtrip() {
    for (path, language) in fixtures("broken") {
        let source = std::fs::read_to_string(&path).unwrap();
        let origin = path.display().to_string();

        let plain = build_tree(language, &source);
        assert_roundtrip(&plain, &source, &origin);
        assert!(plain.nodes().any(|node| node.is_error()), "{origin}");

        let packaged = build_tree_with_variation_points(language, &source);
        assert_roundtrip(&packaged, &source, &origin);
    }
}

#[test]
fn test_whitespace_and_comments_roundtrip() {
    let source = "\n\n  // leading\r\nint   x =\t1 ;  /* trailing */\n\n";
    let tree = build_tree(Language::C, source);
    assert_roundtrip(&tree, source, "inline C");
    let comments = tree
        .nodes()
        .filter(|node| node.kind().production() == "comment")
        .count();
    assert_eq!(comments, 2);
}

#[test]
fn test_empty_source_roundtrips() {
    for language in Language::ALL {
        let tree = build_tree(language, "");
        assert_roundtrip(&tree, "", language.name());
        assert_eq!(tree.root().span().len(), 0);
    }
}

#[test]
fn test_non_ascii_source_roundtrips() {
    let source = "s = \"naïve ☕\"  # café\nprint(s)\n";
    let tree = build_tree(Language::Python, source);
    assert_roundtrip(&tree, source, "inline Python");
}

#[test]
fn test_leaves_tile_the_source() {
    let source = "fn main() { let v = vec![1, 2]; }\n";
    let tree = build_tree(Language::Rust, source);
    let mut cursor = 0;
    for leaf in tree.root().leaves() {
        assert_eq!(leaf.span().start, cursor);
        cursor = leaf.span().end;
    }
    assert_eq!(cursor, source.len());
}
