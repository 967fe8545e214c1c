//! Python, as parsed by `tree-sitter-python`.

crate::grammar! {
    language: Python;
    Module = "module" [Module] { items: Many<Items> @rest },

    Identifier = "identifier" [Expression, Identifier] terminal,
    DottedName = "dotted_name" [Identifier] terminal,
    Integer = "integer" [Expression, Literal] terminal,
    Float = "float" [Expression, Literal] terminal,
    StringLiteral = "string" [Expression, Literal] terminal,
    ConcatenatedString = "concatenated_string" [Expression, Literal] terminal,
    True = "true" [Expression, Literal] terminal,
    False = "false" [Expression, Literal] terminal,
    NoneLiteral = "none" [Expression, Literal] terminal,
    Ellipsis = "ellipsis" [Expression, Literal] terminal,
    TypeExpression = "type" [] terminal,

    ImportStatement = "import_statement" [Statement, Import] { name: Many<Name> },
    ImportFromStatement = "import_from_statement" [Statement, Import] {
        module_name: One<ModuleName>,
        name: Many<Name>,
    },
    AliasedImport = "aliased_import" [] { name: One<Name> },
    ExpressionStatement = "expression_statement" [Statement] { items: Many<Items> @rest },

    FunctionDefinition = "function_definition" [Statement, Declaration, Function] {
        name: One<Name>,
        parameters: One<Parameters>,
        return_type: Opt<ReturnType>,
        body: One<Body>,
    },
    DecoratedDefinition = "decorated_definition" [Statement, Declaration] {
        definition: One<Definition>,
        items: Many<Items> @rest,
    },
    Decorator = "decorator" [] { items: Many<Items> @rest },
    ClassDefinition = "class_definition" [Statement, Declaration, TypeDefinition] {
        name: One<Name>,
        superclasses: Opt<Superclasses>,
        body: One<Body>,
    },
    Parameters = "parameters" [] { items: Many<Items> @rest },
    LambdaParameters = "lambda_parameters" [] { items: Many<Items> @rest },
    DefaultParameter = "default_parameter" [Parameter] {
        name: One<Name>,
        value: One<Value>,
    },
    TypedParameter = "typed_parameter" [Parameter] {
        r#type: One<Type>,
        items: Many<Items> @rest,
    },
    TypedDefaultParameter = "typed_default_parameter" [Parameter] {
        name: One<Name>,
        r#type: One<Type>,
        value: One<Value>,
    },
    ListSplatPattern = "list_splat_pattern" [Parameter] { items: Many<Items> @rest },
    DictionarySplatPattern = "dictionary_splat_pattern" [Parameter] { items: Many<Items> @rest },
    Lambda = "lambda" [Expression, Function] {
        parameters: Opt<Parameters>,
        body: One<Body>,
    },

    Block = "block" [Block] { items: Many<Items> @rest },
    IfStatement = "if_statement" [Statement, Conditional] {
        condition: One<Condition>,
        consequence: One<Consequence>,
        alternative: Many<Alternative>,
    },
    ElifClause = "elif_clause" [] {
        condition: One<Condition>,
        consequence: One<Consequence>,
    },
    ElseClause = "else_clause" [] { body: One<Body> },
    ForStatement = "for_statement" [Statement, Loop] {
        left: One<Left>,
        right: One<Right>,
        body: One<Body>,
        alternative: Opt<Alternative>,
    },
    WhileStatement = "while_statement" [Statement, Loop] {
        condition: One<Condition>,
        body: One<Body>,
        alternative: Opt<Alternative>,
    },
    TryStatement = "try_statement" [Statement] {
        body: One<Body>,
        items: Many<Items> @rest,
    },
    ExceptClause = "except_clause" [] { items: Many<Items> @rest },
    FinallyClause = "finally_clause" [] { items: Many<Items> @rest },
    WithStatement = "with_statement" [Statement] {
        body: One<Body>,
        items: Many<Items> @rest,
    },
    ReturnStatement = "return_statement" [Statement, Return] { items: Many<Items> @rest },
    PassStatement = "pass_statement" [Statement],
    BreakStatement = "break_statement" [Statement, Jump],
    ContinueStatement = "continue_statement" [Statement, Jump],
    RaiseStatement = "raise_statement" [Statement, Jump] { items: Many<Items> @rest },

    Call = "call" [Expression, Call] {
        function: One<Function>,
        arguments: One<Arguments>,
    },
    ArgumentList = "argument_list" [] { items: Many<Items> @rest },
    KeywordArgument = "keyword_argument" [] {
        name: One<Name>,
        value: One<Value>,
    },
    GeneratorExpression = "generator_expression" [Expression] { body: One<Body> },
    Attribute = "attribute" [Expression] {
        object: One<Object>,
        attribute: One<Attribute>,
    },
    Subscript = "subscript" [Expression] {
        value: One<Value>,
        subscript: Many<Subscript>,
    },
    BinaryOperator = "binary_operator" [Expression, BinaryOperation] {
        left: One<Left>,
        operator: One<Operator>,
        right: One<Right>,
    },
    BooleanOperator = "boolean_operator" [Expression, BinaryOperation] {
        left: One<Left>,
        operator: One<Operator>,
        right: One<Right>,
    },
    UnaryOperator = "unary_operator" [Expression, UnaryOperation] {
        operator: One<Operator>,
        argument: One<Argument>,
    },
    NotOperator = "not_operator" [Expression] { argument: One<Argument> },
    ComparisonOperator = "comparison_operator" [Expression] { items: Many<Items> @rest },
    Assignment = "assignment" [Expression, Assignment] {
        left: One<Left>,
        right: Opt<Right>,
        r#type: Opt<Type>,
    },
    AugmentedAssignment = "augmented_assignment" [Expression, Assignment] {
        left: One<Left>,
        operator: One<Operator>,
        right: One<Right>,
    },
    ConditionalExpression = "conditional_expression" [Expression] { items: Many<Items> @rest },
    Await = "await" [Expression] { items: Many<Items> @rest },
    ParenthesizedExpression = "parenthesized_expression" [Expression] {
        items: Many<Items> @rest,
    },
    List = "list" [Expression] { items: Many<Items> @rest },
    Tuple = "tuple" [Expression] { items: Many<Items> @rest },
    Set = "set" [Expression] { items: Many<Items> @rest },
    Dictionary = "dictionary" [Expression] { items: Many<Items> @rest },
    Pair = "pair" [] {
        key: One<Key>,
        value: One<Value>,
    },
}
