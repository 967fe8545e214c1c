use crate::utils::{build_tree, find, fixtures, texts};
use polyglot::Language;
use polyglot_semantics::{call_arguments, call_function, calls};

fn single_call(language: Language, source: &str, production: &str) -> (String, Vec<String>) {
    let tree = build_tree(language, source);
    let call = find(&tree, production);
    let callee = call_function(call).unwrap().text().to_string();
    let arguments = texts(&call_arguments(call).unwrap())
        .into_iter()
        .map(str::to_string)
        .collect();
    (callee, arguments)
}

#[test]
fn test_c_call() {
    let (callee, arguments) = single_call(
        Language::C,
        "void f(void) { foo(a, b); }\n",
        "call_expression",
    );
    assert_eq!(callee, "foo");
    assert_eq!(arguments, ["a", "b"]);
}

#[test]
fn test_calls_are_normalized_across_languages() {
    let cases = [
        (Language::C, "void f(void) { foo(a, b); }\n", "call_expression"),
        (Language::Cpp, "void f() { foo(a, b); }\n", "call_expression"),
        (Language::Python, "foo(a, b)\n", "call"),
        (
            Language::Java,
            "class A { void f() { foo(a, b); } }\n",
            "method_invocation",
        ),
        (Language::JavaScript, "foo(a, b);\n", "call_expression"),
        (Language::TypeScript, "foo(a, b);\n", "call_expression"),
        (Language::Rust, "fn f() { foo(a, b); }\n", "call_expression"),
    ];
    for (language, source, production) in cases {
        let (callee, arguments) = single_call(language, source, production);
        assert_eq!(callee, "foo", "{language}");
        assert_eq!(arguments, ["a", "b"], "{language}");
    }
}

#[test]
fn test_call_without_arguments() {
    let (callee, arguments) = single_call(Language::Python, "run()\n", "call");
    assert_eq!(callee, "run");
    assert!(arguments.is_empty());
}

#[test]
fn test_python_keyword_arguments_are_arguments() {
    let (_, arguments) = single_call(Language::Python, "foo(a, key=b)\n", "call");
    assert_eq!(arguments, ["a", "key=b"]);
}

#[test]
fn test_method_calls() {
    let (callee, arguments) = single_call(
        Language::Java,
        "class A { void f() { out.println(x); } }\n",
        "method_invocation",
    );
    assert_eq!(callee, "println");
    assert_eq!(arguments, ["x"]);

    let (callee, _) = single_call(Language::JavaScript, "obj.method(1);\n", "call_expression");
    assert_eq!(callee, "obj.method");

    let (callee, _) = single_call(Language::Python, "obj.method(1)\n", "call");
    assert_eq!(callee, "obj.method");
}

#[test]
fn test_constructor_calls() {
    let (callee, arguments) = single_call(
        Language::Java,
        "class A { Object f() { return new Sample(\"hi\", 2); } }\n",
        "object_creation_expression",
    );
    assert_eq!(callee, "Sample");
    assert_eq!(arguments, ["\"hi\"", "2"]);

    let (callee, arguments) =
        single_call(Language::JavaScript, "const c = new Counter(1);\n", "new_expression");
    assert_eq!(callee, "Counter");
    assert_eq!(arguments, ["1"]);

    let (callee, arguments) = single_call(
        Language::Cpp,
        "void f() { auto w = new Widget(1, 2); }\n",
        "new_expression",
    );
    assert_eq!(callee, "Widget");
    assert_eq!(arguments, ["1", "2"]);
}

#[test]
fn test_calls_in_document_order() {
    let tree = build_tree(Language::Python, "a(b(c), d())\ne()\n");
    let callees: Vec<_> = calls(&tree)
        .map(|call| call.unwrap().function.text())
        .collect();
    assert_eq!(callees, ["a", "b", "d", "e"]);
}

#[test]
fn test_every_fixture_call_resolves() {
    for (path, language) in fixtures("roundtrip") {
        let source = std::fs::read_to_string(&path).unwrap();
        let tree = build_tree(language, &source);
        let sites: Vec<_> = calls(&tree)
            .collect::<Result<_, _>>()
            .unwrap_or_else(|e| panic!("{}: {e}", path.display()));
        assert!(!sites.is_empty(), "{}", path.display());
        for site in sites {
            assert!(site.node.span().start <= site.function.span().start);
            for argument in &site.arguments {
                assert!(!argument.is_trivia());
                assert!(!argument.kind().is_terminal_symbol());
            }
        }
    }
}

#[test]
fn test_java_explicit_constructor_calls() {
    let tree = build_tree(
        Language::Java,
        "class A { A() { this(1); } A(int x) { super(x); } }\n",
    );
    let sites: Vec<_> = calls(&tree).map(Result::unwrap).collect();
    let callees: Vec<_> = sites.iter().map(|site| site.function.text()).collect();
    assert_eq!(callees, ["this", "super"]);
    assert_eq!(texts(&sites[0].arguments), ["1"]);
    assert_eq!(texts(&sites[1].arguments), ["x"]);
}
