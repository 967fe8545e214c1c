//! C++, as parsed by `tree-sitter-cpp`. Shares the C declarations and adds
//! namespaces, classes, templates and lambdas.

cxx_kinds! {
    language: Cpp;
    NamespaceIdentifier = "namespace_identifier" [Identifier] terminal,
    QualifiedIdentifier = "qualified_identifier" [Expression, Identifier] terminal,
    DestructorName = "destructor_name" [Identifier] terminal,
    OperatorName = "operator_name" [Identifier] terminal,
    This = "this" [Expression] terminal,
    Nullptr = "nullptr" [Expression, Literal] terminal,
    RawStringLiteral = "raw_string_literal" [Expression, Literal] terminal,
    AccessSpecifier = "access_specifier" [] terminal,
    TemplateType = "template_type" [] terminal,
    PlaceholderTypeSpecifier = "placeholder_type_specifier" [] terminal,

    DefaultMethodClause = "default_method_clause" [] terminal,
    DeleteMethodClause = "delete_method_clause" [] terminal,

    // `= default` and `= delete` definitions have no body.
    FunctionDefinition = "function_definition" [Declaration, Function] {
        r#type: Opt<Type>,
        declarator: One<Declarator>,
        body: Opt<Body>,
    },
    NamespaceDefinition = "namespace_definition" [Declaration] {
        name: Opt<Name>,
        body: One<Body>,
    },
    DeclarationList = "declaration_list" [Block] { items: Many<Items> @rest },
    ClassSpecifier = "class_specifier" [TypeDefinition] {
        name: Opt<Name>,
        body: Opt<Body>,
    },
    TemplateDeclaration = "template_declaration" [Declaration] {
        parameters: One<Parameters>,
        items: Many<Items> @rest,
    },
    TemplateParameterList = "template_parameter_list" [] { items: Many<Items> @rest },
    LambdaExpression = "lambda_expression" [Expression, Function] {
        declarator: Opt<Declarator>,
        body: One<Body>,
    },
    AbstractFunctionDeclarator = "abstract_function_declarator" [] {
        parameters: One<Parameters>,
    },
    ForRangeLoop = "for_range_loop" [Statement, Loop] {
        initializer: Opt<Initializer>,
        r#type: One<Type>,
        declarator: One<Declarator>,
        right: One<Right>,
        body: One<Body>,
    },
    ConditionClause = "condition_clause" [] {
        initializer: Opt<Initializer>,
        value: One<Value>,
    },
    NewExpression = "new_expression" [Expression, Call] {
        r#type: One<Type>,
        declarator: Opt<Declarator>,
        arguments: Opt<Arguments>,
    },
    DeleteExpression = "delete_expression" [Expression] { items: Many<Items> @rest },
    ThrowStatement = "throw_statement" [Statement, Jump] { items: Many<Items> @rest },
    TryStatement = "try_statement" [Statement] {
        body: One<Body>,
        items: Many<Items> @rest,
    },
    CatchClause = "catch_clause" [] {
        parameters: One<Parameters>,
        body: One<Body>,
    },
}
