use crate::utils::{build_tree, find, fixtures, texts};
use polyglot::Language;
use polyglot_semantics::{function_body, function_name, function_parameters, functions};

struct Shape {
    name: Option<String>,
    parameters: Vec<String>,
    body: Option<String>,
}

fn shape(language: Language, source: &str, production: &str) -> Shape {
    let tree = build_tree(language, source);
    let function = find(&tree, production);
    Shape {
        name: function_name(function).unwrap().map(str::to_string),
        parameters: texts(&function_parameters(function).unwrap())
            .into_iter()
            .map(str::to_string)
            .collect(),
        body: function_body(function)
            .unwrap()
            .map(|body| body.text().trim_end().to_string()),
    }
}

#[test]
fn test_c_function_through_declarators() {
    let add = shape(
        Language::C,
        "static int add(int a, int b) { return a + b; }\n",
        "function_definition",
    );
    assert_eq!(add.name.as_deref(), Some("add"));
    assert_eq!(add.parameters, ["int a", "int b"]);
    assert_eq!(add.body.as_deref(), Some("{ return a + b; }"));

    let pointer = shape(
        Language::C,
        "char *label(void) { return 0; }\n",
        "function_definition",
    );
    assert_eq!(pointer.name.as_deref(), Some("label"));
    assert_eq!(pointer.parameters, ["void"]);
}

#[test]
fn test_cpp_functions() {
    let method = shape(
        Language::Cpp,
        "class Shape { int area() const { return 1; } };\n",
        "function_definition",
    );
    assert_eq!(method.name.as_deref(), Some("area"));
    assert!(method.parameters.is_empty());

    let qualified = shape(
        Language::Cpp,
        "int Shape::area(int scale) { return scale; }\n",
        "function_definition",
    );
    assert_eq!(qualified.name.as_deref(), Some("Shape::area"));
    assert_eq!(qualified.parameters, ["int scale"]);

    let lambda = shape(
        Language::Cpp,
        "void f() { auto twice = [](int v) { return v * 2; }; }\n",
        "lambda_expression",
    );
    assert_eq!(lambda.name, None);
    assert_eq!(lambda.parameters, ["int v"]);
    assert_eq!(lambda.body.as_deref(), Some("{ return v * 2; }"));
}

#[test]
fn test_java_methods() {
    let method = shape(
        Language::Java,
        "class A { int f(int x, String y) { return x; } }\n",
        "method_declaration",
    );
    assert_eq!(method.name.as_deref(), Some("f"));
    assert_eq!(method.parameters, ["int x", "String y"]);

    let abstract_method = shape(
        Language::Java,
        "abstract class A { abstract void g(); }\n",
        "method_declaration",
    );
    assert_eq!(abstract_method.name.as_deref(), Some("g"));
    assert_eq!(abstract_method.body, None);

    let constructor = shape(
        Language::Java,
        "class A { A(int x) { } }\n",
        "constructor_declaration",
    );
    assert_eq!(constructor.name.as_deref(), Some("A"));
    assert_eq!(constructor.parameters, ["int x"]);
}

#[test]
fn test_java_lambdas() {
    let single = shape(
        Language::Java,
        "class A { void f() { run(n -> n + 1); } }\n",
        "lambda_expression",
    );
    assert_eq!(single.name, None);
    assert_eq!(single.parameters, ["n"]);
    assert_eq!(single.body.as_deref(), Some("n + 1"));

    let pair = shape(
        Language::Java,
        "class A { void f() { run((a, b) -> a); } }\n",
        "lambda_expression",
    );
    assert_eq!(pair.parameters, ["a", "b"]);
}

#[test]
fn test_python_functions() {
    let def = shape(
        Language::Python,
        "def add(x, y=2):\n    return x + y\n",
        "function_definition",
    );
    assert_eq!(def.name.as_deref(), Some("add"));
    assert_eq!(def.parameters, ["x", "y=2"]);
    assert_eq!(def.body.as_deref(), Some("return x + y"));

    let lambda = shape(Language::Python, "square = lambda x: x * x\n", "lambda");
    assert_eq!(lambda.name, None);
    assert_eq!(lambda.parameters, ["x"]);
    assert_eq!(lambda.body.as_deref(), Some("x * x"));

    let thunk = shape(Language::Python, "thunk = lambda: 1\n", "lambda");
    assert!(thunk.parameters.is_empty());
}

#[test]
fn test_rust_functions() {
    let item = shape(
        Language::Rust,
        "fn add(a: i32, b: i32) -> i32 { a + b }\n",
        "function_item",
    );
    assert_eq!(item.name.as_deref(), Some("add"));
    assert_eq!(item.parameters, ["a: i32", "b: i32"]);
    assert_eq!(item.body.as_deref(), Some("{ a + b }"));

    let method = shape(
        Language::Rust,
        "impl S { fn get(&self) -> i32 { 0 } }\n",
        "function_item",
    );
    assert_eq!(method.parameters, ["&self"]);

    let closure = shape(
        Language::Rust,
        "fn f() { let g = |x| x + 1; }\n",
        "closure_expression",
    );
    assert_eq!(closure.name, None);
    assert_eq!(closure.parameters, ["x"]);
    assert_eq!(closure.body.as_deref(), Some("x + 1"));
}

#[test]
fn test_javascript_functions() {
    let declaration = shape(
        Language::JavaScript,
        "function sum(a, b) { return a + b; }\n",
        "function_declaration",
    );
    assert_eq!(declaration.name.as_deref(), Some("sum"));
    assert_eq!(declaration.parameters, ["a", "b"]);

    let arrow = shape(Language::JavaScript, "const f = x => x * 2;\n", "arrow_function");
    assert_eq!(arrow.name, None);
    assert_eq!(arrow.parameters, ["x"]);
    assert_eq!(arrow.body.as_deref(), Some("x * 2"));

    let arrow = shape(
        Language::JavaScript,
        "const f = (a, b) => a;\n",
        "arrow_function",
    );
    assert_eq!(arrow.parameters, ["a", "b"]);

    let method = shape(
        Language::JavaScript,
        "class C { increment(step = 1) { return step; } }\n",
        "method_definition",
    );
    assert_eq!(method.name.as_deref(), Some("increment"));
    assert_eq!(method.parameters, ["step = 1"]);
}

#[test]
fn test_typescript_parameters() {
    let function = shape(
        Language::TypeScript,
        "function describe(user: User, level?: number): string { return \"\"; }\n",
        "function_declaration",
    );
    assert_eq!(function.name.as_deref(), Some("describe"));
    assert_eq!(function.parameters, ["user: User", "level?: number"]);
}

#[test]
fn test_every_fixture_function_resolves() {
    for (path, language) in fixtures("roundtrip") {
        let source = std::fs::read_to_string(&path).unwrap();
        let tree = build_tree(language, &source);
        let shapes: Vec<_> = functions(&tree)
            .collect::<Result<_, _>>()
            .unwrap_or_else(|e| panic!("{}: {e}", path.display()));
        assert!(!shapes.is_empty(), "{}", path.display());
        for shape in shapes {
            for parameter in &shape.parameters {
                assert!(!parameter.is_trivia());
                assert!(!parameter.kind().is_terminal_symbol());
            }
            if let Some(body) = shape.body {
                assert_eq!(body.parent(), Some(shape.node));
            }
        }
    }
}

#[test]
fn test_cpp_defaulted_and_deleted_functions() {
    let tree = build_tree(
        Language::Cpp,
        "struct A { A() = default; void g() = delete; };\n",
    );
    let shapes: Vec<_> = functions(&tree).map(Result::unwrap).collect();
    let names: Vec<_> = shapes.iter().map(|shape| shape.name).collect();
    assert_eq!(names, [Some("A"), Some("g")]);
    assert!(shapes.iter().all(|shape| shape.body.is_none()));
    assert!(shapes.iter().all(|shape| shape.parameters.is_empty()));
}

#[test]
fn test_c_function_returning_function_pointer() {
    let get = shape(
        Language::C,
        "int (*get(void))(int) { return 0; }\n",
        "function_definition",
    );
    assert_eq!(get.name.as_deref(), Some("get"));
    assert_eq!(get.parameters, ["void"]);
    assert_eq!(get.body.as_deref(), Some("{ return 0; }"));
}

#[test]
fn test_python_parameter_separators_are_not_parameters() {
    let keyword_only = shape(
        Language::Python,
        "def f(a, *, b, **kw):\n    pass\n",
        "function_definition",
    );
    assert_eq!(keyword_only.parameters, ["a", "b", "**kw"]);

    let positional_only = shape(
        Language::Python,
        "def g(a, /, b):\n    pass\n",
        "function_definition",
    );
    assert_eq!(positional_only.parameters, ["a", "b"]);
}
