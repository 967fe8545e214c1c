//! Rust, as parsed by `tree-sitter-rust`.

crate::grammar! {
    language: Rust;
    SourceFile = "source_file" [Module] { items: Many<Items> @rest },

    Identifier = "identifier" [Expression, Identifier] terminal,
    FieldIdentifier = "field_identifier" [Identifier] terminal,
    TypeIdentifier = "type_identifier" [Identifier] terminal,
    ScopedIdentifier = "scoped_identifier" [Expression, Identifier] terminal,
    ScopedTypeIdentifier = "scoped_type_identifier" [Identifier] terminal,
    PrimitiveType = "primitive_type" [] terminal,
    GenericType = "generic_type" [] terminal,
    ReferenceType = "reference_type" [] terminal,
    IntegerLiteral = "integer_literal" [Expression, Literal] terminal,
    FloatLiteral = "float_literal" [Expression, Literal] terminal,
    StringLiteral = "string_literal" [Expression, Literal] terminal,
    RawStringLiteral = "raw_string_literal" [Expression, Literal] terminal,
    CharLiteral = "char_literal" [Expression, Literal] terminal,
    BooleanLiteral = "boolean_literal" [Expression, Literal] terminal,
    UnitExpression = "unit_expression" [Expression, Literal] terminal,
    SelfValue = "self" [Expression, Identifier] terminal,
    MutableSpecifier = "mutable_specifier" [] terminal,
    VisibilityModifier = "visibility_modifier" [] terminal,
    Lifetime = "lifetime" [] terminal,
    Label = "label" [] terminal,
    TokenTree = "token_tree" [] terminal,
    AttributeItem = "attribute_item" [] terminal,
    InnerAttributeItem = "inner_attribute_item" [] terminal,
    SelfParameter = "self_parameter" [Parameter] terminal,

    UseDeclaration = "use_declaration" [Declaration, Import] { argument: One<Argument> },
    ModItem = "mod_item" [Declaration] {
        name: One<Name>,
        body: Opt<Body>,
    },
    FunctionItem = "function_item" [Declaration, Function] {
        name: One<Name>,
        parameters: One<Parameters>,
        return_type: Opt<ReturnType>,
        body: One<Body>,
    },
    FunctionSignatureItem = "function_signature_item" [Declaration] {
        name: One<Name>,
        parameters: One<Parameters>,
        return_type: Opt<ReturnType>,
    },
    Parameters = "parameters" [] { items: Many<Items> @rest },
    Parameter = "parameter" [Parameter] {
        pattern: One<Pattern>,
        r#type: One<Type>,
    },
    ClosureExpression = "closure_expression" [Expression, Function] {
        parameters: One<Parameters>,
        return_type: Opt<ReturnType>,
        body: One<Body>,
    },
    ClosureParameters = "closure_parameters" [] { items: Many<Items> @rest },

    StructItem = "struct_item" [Declaration, TypeDefinition] {
        name: One<Name>,
        body: Opt<Body>,
    },
    EnumItem = "enum_item" [Declaration, TypeDefinition] {
        name: One<Name>,
        body: One<Body>,
    },
    EnumVariantList = "enum_variant_list" [] { items: Many<Items> @rest },
    EnumVariant = "enum_variant" [Declaration] {
        name: One<Name>,
        body: Opt<Body>,
        value: Opt<Value>,
    },
    ImplItem = "impl_item" [Declaration] {
        r#trait: Opt<Trait>,
        r#type: One<Type>,
        body: Opt<Body>,
    },
    TraitItem = "trait_item" [Declaration, TypeDefinition] {
        name: One<Name>,
        body: One<Body>,
    },
    TypeItem = "type_item" [Declaration, TypeDefinition] {
        name: One<Name>,
        r#type: One<Type>,
    },
    ConstItem = "const_item" [Declaration] {
        name: One<Name>,
        r#type: One<Type>,
        value: Opt<Value>,
    },
    StaticItem = "static_item" [Declaration] {
        name: One<Name>,
        r#type: One<Type>,
        value: Opt<Value>,
    },
    DeclarationList = "declaration_list" [] { items: Many<Items> @rest },
    FieldDeclarationList = "field_declaration_list" [] { items: Many<Items> @rest },
    OrderedFieldDeclarationList = "ordered_field_declaration_list" [] {
        r#type: Many<Type>,
        items: Many<Items> @rest,
    },
    FieldDeclaration = "field_declaration" [Declaration] {
        name: One<Name>,
        r#type: One<Type>,
    },

    Block = "block" [Expression, Block] { items: Many<Items> @rest },
    ExpressionStatement = "expression_statement" [Statement] { items: Many<Items> @rest },
    LetDeclaration = "let_declaration" [Statement, Declaration] {
        pattern: One<Pattern>,
        r#type: Opt<Type>,
        value: Opt<Value>,
        alternative: Opt<Alternative>,
    },
    IfExpression = "if_expression" [Expression, Conditional] {
        condition: One<Condition>,
        consequence: One<Consequence>,
        alternative: Opt<Alternative>,
    },
    ElseClause = "else_clause" [] { items: Many<Items> @rest },
    LetCondition = "let_condition" [] {
        pattern: One<Pattern>,
        value: One<Value>,
    },
    LetChain = "let_chain" [] { items: Many<Items> @rest },
    WhileExpression = "while_expression" [Expression, Loop] {
        condition: One<Condition>,
        body: One<Body>,
    },
    LoopExpression = "loop_expression" [Expression, Loop] { body: One<Body> },
    ForExpression = "for_expression" [Expression, Loop] {
        pattern: One<Pattern>,
        value: One<Value>,
        body: One<Body>,
    },
    MatchExpression = "match_expression" [Expression] {
        value: One<Value>,
        body: One<Body>,
    },
    MatchBlock = "match_block" [] { items: Many<Items> @rest },
    MatchArm = "match_arm" [] {
        pattern: One<Pattern>,
        value: One<Value>,
    },
    MatchPattern = "match_pattern" [] {
        condition: Opt<Condition>,
        items: Many<Items> @rest,
    },
    ReturnExpression = "return_expression" [Expression, Return] { items: Many<Items> @rest },
    BreakExpression = "break_expression" [Expression, Jump] { items: Many<Items> @rest },
    ContinueExpression = "continue_expression" [Expression, Jump] { items: Many<Items> @rest },

    CallExpression = "call_expression" [Expression, Call] {
        function: One<Function>,
        arguments: One<Arguments>,
    },
    Arguments = "arguments" [] { items: Many<Items> @rest },
    MacroInvocation = "macro_invocation" [Expression] {
        r#macro: One<Macro>,
        items: Many<Items> @rest,
    },
    FieldExpression = "field_expression" [Expression] {
        value: One<Value>,
        field: One<Field>,
    },
    IndexExpression = "index_expression" [Expression] { items: Many<Items> @rest },
    BinaryExpression = "binary_expression" [Expression, BinaryOperation] {
        left: One<Left>,
        operator: One<Operator>,
        right: One<Right>,
    },
    UnaryExpression = "unary_expression" [Expression] { items: Many<Items> @rest },
    ReferenceExpression = "reference_expression" [Expression] { value: One<Value> },
    AssignmentExpression = "assignment_expression" [Expression, Assignment] {
        left: One<Left>,
        right: One<Right>,
    },
    CompoundAssignmentExpr = "compound_assignment_expr" [Expression, Assignment] {
        left: One<Left>,
        operator: One<Operator>,
        right: One<Right>,
    },
    TryExpression = "try_expression" [Expression] { items: Many<Items> @rest },
    AwaitExpression = "await_expression" [Expression] { items: Many<Items> @rest },
    RangeExpression = "range_expression" [Expression] { items: Many<Items> @rest },
    ParenthesizedExpression = "parenthesized_expression" [Expression] {
        items: Many<Items> @rest,
    },
    TupleExpression = "tuple_expression" [Expression] { items: Many<Items> @rest },
    ArrayExpression = "array_expression" [Expression] { items: Many<Items> @rest },
    StructExpression = "struct_expression" [Expression] {
        name: One<Name>,
        body: One<Body>,
    },
    FieldInitializerList = "field_initializer_list" [] { items: Many<Items> @rest },
}
