use crate::utils::{build_tree, find};
use polyglot::Language;
use polyglot_ast::capability::Capability;
use polyglot_semantics::{
    QueryError, call_arguments, call_function, function_body, function_name,
    function_parameters,
};

#[test]
fn test_call_queries_require_call_capability() {
    let tree = build_tree(Language::C, "void f(void) { if (x) y(); }\n");
    let statement = find(&tree, "if_statement");
    let expected = QueryError::CapabilityNotSupported {
        kind: statement.kind(),
        capability: Capability::Call,
    };
    assert_eq!(call_function(statement), Err(expected.clone()));
    assert_eq!(call_arguments(statement), Err(expected));
}

#[test]
fn test_function_queries_require_function_capability() {
    let tree = build_tree(Language::Python, "print(1)\n");
    let call = find(&tree, "call");
    let expected = QueryError::CapabilityNotSupported {
        kind: call.kind(),
        capability: Capability::Function,
    };
    assert_eq!(function_name(call), Err(expected.clone()));
    assert_eq!(function_parameters(call), Err(expected.clone()));
    assert_eq!(function_body(call), Err(expected));
}

#[test]
fn test_macros_are_not_calls() {
    let tree = build_tree(Language::Rust, "fn main() { println!(\"hi\"); }\n");
    let invocation = find(&tree, "macro_invocation");
    assert!(matches!(
        call_function(invocation),
        Err(QueryError::CapabilityNotSupported {
            capability: Capability::Call,
            ..
        })
    ));
}

#[test]
fn test_error_messages_name_the_kind() {
    let tree = build_tree(Language::Java, "class A { }\n");
    let error = call_function(tree.root()).unwrap_err();
    assert_eq!(
        error.to_string(),
        "`java:program` does not support `call` queries"
    );
}
