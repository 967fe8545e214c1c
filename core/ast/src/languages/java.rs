//! Java, as parsed by `tree-sitter-java`.

crate::grammar! {
    language: Java;
    Program = "program" [Module] { items: Many<Items> @rest },

    Identifier = "identifier" [Expression, Identifier] terminal,
    TypeIdentifier = "type_identifier" [Identifier] terminal,
    ScopedIdentifier = "scoped_identifier" [Expression, Identifier] terminal,
    ScopedTypeIdentifier = "scoped_type_identifier" [Identifier] terminal,
    IntegralType = "integral_type" [] terminal,
    FloatingPointType = "floating_point_type" [] terminal,
    BooleanType = "boolean_type" [] terminal,
    VoidType = "void_type" [] terminal,
    GenericType = "generic_type" [] terminal,
    ArrayType = "array_type" [] terminal,
    Modifiers = "modifiers" [] terminal,
    Dimensions = "dimensions" [] terminal,
    DecimalIntegerLiteral = "decimal_integer_literal" [Expression, Literal] terminal,
    HexIntegerLiteral = "hex_integer_literal" [Expression, Literal] terminal,
    DecimalFloatingPointLiteral = "decimal_floating_point_literal" [Expression, Literal] terminal,
    StringLiteral = "string_literal" [Expression, Literal] terminal,
    CharacterLiteral = "character_literal" [Expression, Literal] terminal,
    True = "true" [Expression, Literal] terminal,
    False = "false" [Expression, Literal] terminal,
    NullLiteral = "null_literal" [Expression, Literal] terminal,
    This = "this" [Expression] terminal,
    Super = "super" [Expression] terminal,

    PackageDeclaration = "package_declaration" [Declaration] { items: Many<Items> @rest },
    ImportDeclaration = "import_declaration" [Import] { items: Many<Items> @rest },

    ClassDeclaration = "class_declaration" [Statement, Declaration, TypeDefinition] {
        name: One<Name>,
        superclass: Opt<Superclass>,
        body: One<Body>,
    },
    Superclass = "superclass" [] { items: Many<Items> @rest },
    InterfaceDeclaration = "interface_declaration" [Declaration, TypeDefinition] {
        name: One<Name>,
        body: One<Body>,
    },
    EnumDeclaration = "enum_declaration" [Declaration, TypeDefinition] {
        name: One<Name>,
        body: One<Body>,
    },
    EnumBody = "enum_body" [] { items: Many<Items> @rest },
    EnumConstant = "enum_constant" [Declaration] {
        name: One<Name>,
        arguments: Opt<Arguments>,
        body: Opt<Body>,
    },
    ClassBody = "class_body" [] { items: Many<Items> @rest },
    InterfaceBody = "interface_body" [] { items: Many<Items> @rest },
    FieldDeclaration = "field_declaration" [Declaration] {
        r#type: One<Type>,
        declarator: Many<Declarator>,
    },
    VariableDeclarator = "variable_declarator" [] {
        name: One<Name>,
        value: Opt<Value>,
    },
    LocalVariableDeclaration = "local_variable_declaration" [Statement, Declaration] {
        r#type: One<Type>,
        declarator: Many<Declarator>,
    },

    MethodDeclaration = "method_declaration" [Declaration, Function] {
        name: One<Name>,
        parameters: One<Parameters>,
        r#type: One<Type>,
        body: Opt<Body>,
    },
    ConstructorDeclaration = "constructor_declaration" [Declaration, Function] {
        name: One<Name>,
        parameters: One<Parameters>,
        body: One<Body>,
    },
    ConstructorBody = "constructor_body" [Block] { items: Many<Items> @rest },
    FormalParameters = "formal_parameters" [] { items: Many<Items> @rest },
    FormalParameter = "formal_parameter" [Parameter] {
        r#type: One<Type>,
        name: One<Name>,
    },
    SpreadParameter = "spread_parameter" [Parameter] { items: Many<Items> @rest },
    InferredParameters = "inferred_parameters" [] { items: Many<Items> @rest },
    LambdaExpression = "lambda_expression" [Expression, Function] {
        parameters: One<Parameters>,
        body: One<Body>,
    },

    Block = "block" [Statement, Block] { items: Many<Items> @rest },
    ExpressionStatement = "expression_statement" [Statement] { items: Many<Items> @rest },
    IfStatement = "if_statement" [Statement, Conditional] {
        condition: One<Condition>,
        consequence: One<Consequence>,
        alternative: Opt<Alternative>,
    },
    WhileStatement = "while_statement" [Statement, Loop] {
        condition: One<Condition>,
        body: One<Body>,
    },
    DoStatement = "do_statement" [Statement, Loop] {
        body: One<Body>,
        condition: One<Condition>,
    },
    ForStatement = "for_statement" [Statement, Loop] {
        init: Many<Init>,
        condition: Opt<Condition>,
        update: Many<Update>,
        body: One<Body>,
    },
    EnhancedForStatement = "enhanced_for_statement" [Statement, Loop] {
        r#type: One<Type>,
        name: One<Name>,
        value: One<Value>,
        body: One<Body>,
    },
    ReturnStatement = "return_statement" [Statement, Return] { items: Many<Items> @rest },
    BreakStatement = "break_statement" [Statement, Jump],
    ContinueStatement = "continue_statement" [Statement, Jump],
    ThrowStatement = "throw_statement" [Statement, Jump] { items: Many<Items> @rest },
    TryStatement = "try_statement" [Statement] {
        body: One<Body>,
        items: Many<Items> @rest,
    },
    CatchClause = "catch_clause" [] {
        body: One<Body>,
        items: Many<Items> @rest,
    },
    FinallyClause = "finally_clause" [] { items: Many<Items> @rest },

    MethodInvocation = "method_invocation" [Expression, Call] {
        object: Opt<Object>,
        name: One<Name>,
        arguments: One<Arguments>,
    },
    ObjectCreationExpression = "object_creation_expression" [Expression, Call] {
        r#type: One<Type>,
        arguments: One<Arguments>,
    },
    ExplicitConstructorInvocation = "explicit_constructor_invocation" [Statement, Call] {
        object: Opt<Object>,
        constructor: One<Constructor>,
        arguments: One<Arguments>,
    },
    ArgumentList = "argument_list" [] { items: Many<Items> @rest },
    BinaryExpression = "binary_expression" [Expression, BinaryOperation] {
        left: One<Left>,
        operator: One<Operator>,
        right: One<Right>,
    },
    UnaryExpression = "unary_expression" [Expression, UnaryOperation] {
        operator: One<Operator>,
        operand: One<Operand>,
    },
    UpdateExpression = "update_expression" [Expression] { items: Many<Items> @rest },
    AssignmentExpression = "assignment_expression" [Expression, Assignment] {
        left: One<Left>,
        operator: One<Operator>,
        right: One<Right>,
    },
    FieldAccess = "field_access" [Expression] {
        object: One<Object>,
        field: One<Field>,
    },
    ArrayAccess = "array_access" [Expression] {
        array: One<Array>,
        index: One<Index>,
    },
    TernaryExpression = "ternary_expression" [Expression, Conditional] {
        condition: One<Condition>,
        consequence: One<Consequence>,
        alternative: One<Alternative>,
    },
    CastExpression = "cast_expression" [Expression] {
        r#type: One<Type>,
        value: One<Value>,
    },
    InstanceofExpression = "instanceof_expression" [Expression] {
        left: One<Left>,
        right: One<Right>,
        name: Opt<Name>,
    },
    ParenthesizedExpression = "parenthesized_expression" [Expression] {
        items: Many<Items> @rest,
    },
}
