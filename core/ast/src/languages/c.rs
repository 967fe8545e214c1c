//! C, as parsed by `tree-sitter-c`.

cxx_kinds! {
    language: C;
    FunctionDefinition = "function_definition" [Declaration, Function] {
        r#type: Opt<Type>,
        declarator: One<Declarator>,
        body: One<Body>,
    },
}
