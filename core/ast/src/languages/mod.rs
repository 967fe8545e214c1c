//! Node-kind taxonomies, one module per dialect.
//!
//! Dialects of one family share most of their declarations: C and C++ expand
//! the same list through `cxx_kinds!`, JavaScript, TypeScript and TSX through
//! `ecma_kinds!`. Production and slot names follow the upstream tree-sitter
//! grammars, since slot names double as field names during lowering.

/// Expands the kinds C and C++ share, followed by the dialect's own entries.
macro_rules! cxx_kinds {
    (language: $language:ident; $($extra:tt)*) => {
        $crate::grammar! {
            language: $language;
            TranslationUnit = "translation_unit" [Module] { items: Many<Items> @rest },

            Identifier = "identifier" [Expression, Identifier] terminal,
            FieldIdentifier = "field_identifier" [Identifier] terminal,
            TypeIdentifier = "type_identifier" [Identifier] terminal,
            StatementIdentifier = "statement_identifier" [Identifier] terminal,
            PrimitiveType = "primitive_type" [] terminal,
            SizedTypeSpecifier = "sized_type_specifier" [] terminal,
            TypeQualifier = "type_qualifier" [] terminal,
            StorageClassSpecifier = "storage_class_specifier" [] terminal,
            NumberLiteral = "number_literal" [Expression, Literal] terminal,
            StringLiteral = "string_literal" [Expression, Literal] terminal,
            CharLiteral = "char_literal" [Expression, Literal] terminal,
            ConcatenatedString = "concatenated_string" [Expression, Literal] terminal,
            SystemLibString = "system_lib_string" [Literal] terminal,
            True = "true" [Expression, Literal] terminal,
            False = "false" [Expression, Literal] terminal,
            Null = "null" [Expression, Literal] terminal,
            PreprocArg = "preproc_arg" [] terminal,

            PreprocInclude = "preproc_include" [Statement, Import] { path: One<Path> },
            PreprocDef = "preproc_def" [Statement, Declaration] {
                name: One<Name>,
                value: Opt<Value>,
            },
            PreprocIfdef = "preproc_ifdef" [Statement] {
                name: One<Name>,
                alternative: Opt<Alternative>,
                items: Many<Items> @rest,
            },
            PreprocIf = "preproc_if" [Statement] {
                condition: One<Condition>,
                alternative: Opt<Alternative>,
                items: Many<Items> @rest,
            },
            PreprocElif = "preproc_elif" [] {
                condition: One<Condition>,
                alternative: Opt<Alternative>,
                items: Many<Items> @rest,
            },
            PreprocElse = "preproc_else" [] { items: Many<Items> @rest },

            Declaration = "declaration" [Statement, Declaration] {
                r#type: Opt<Type>,
                declarator: Many<Declarator>,
            },
            InitDeclarator = "init_declarator" [] {
                declarator: One<Declarator>,
                value: One<Value>,
            },
            FunctionDeclarator = "function_declarator" [] {
                declarator: One<Declarator>,
                parameters: One<Parameters>,
            },
            PointerDeclarator = "pointer_declarator" [] { declarator: One<Declarator> },
            ParenthesizedDeclarator = "parenthesized_declarator" [] {
                declarator: Many<Declarator> @rest,
            },
            ArrayDeclarator = "array_declarator" [] {
                declarator: One<Declarator>,
                size: Opt<Size>,
            },
            ParameterList = "parameter_list" [] { items: Many<Items> @rest },
            ParameterDeclaration = "parameter_declaration" [Parameter] {
                r#type: One<Type>,
                declarator: Opt<Declarator>,
            },
            TypeDescriptor = "type_descriptor" [] {
                r#type: One<Type>,
                declarator: Opt<Declarator>,
            },
            InitializerList = "initializer_list" [Expression] { items: Many<Items> @rest },

            CompoundStatement = "compound_statement" [Statement, Block] {
                items: Many<Items> @rest,
            },
            ExpressionStatement = "expression_statement" [Statement] {
                items: Many<Items> @rest,
            },
            IfStatement = "if_statement" [Statement, Conditional] {
                condition: One<Condition>,
                consequence: One<Consequence>,
                alternative: Opt<Alternative>,
            },
            ElseClause = "else_clause" [] { items: Many<Items> @rest },
            WhileStatement = "while_statement" [Statement, Loop] {
                condition: One<Condition>,
                body: One<Body>,
            },
            DoStatement = "do_statement" [Statement, Loop] {
                body: One<Body>,
                condition: One<Condition>,
            },
            ForStatement = "for_statement" [Statement, Loop] {
                initializer: Opt<Initializer>,
                condition: Opt<Condition>,
                update: Opt<Update>,
                body: One<Body>,
            },
            ReturnStatement = "return_statement" [Statement, Return] {
                items: Many<Items> @rest,
            },
            BreakStatement = "break_statement" [Statement, Jump],
            ContinueStatement = "continue_statement" [Statement, Jump],
            GotoStatement = "goto_statement" [Statement, Jump] { label: One<Label> },
            LabeledStatement = "labeled_statement" [Statement] {
                label: One<Label>,
                items: Many<Items> @rest,
            },
            SwitchStatement = "switch_statement" [Statement] {
                condition: One<Condition>,
                body: One<Body>,
            },
            CaseStatement = "case_statement" [Statement] {
                value: Opt<Value>,
                items: Many<Items> @rest,
            },

            CallExpression = "call_expression" [Expression, Call] {
                function: One<Function>,
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
                argument: One<Argument>,
            },
            UpdateExpression = "update_expression" [Expression, UnaryOperation] {
                operator: One<Operator>,
                argument: One<Argument>,
            },
            PointerExpression = "pointer_expression" [Expression, UnaryOperation] {
                operator: One<Operator>,
                argument: One<Argument>,
            },
            AssignmentExpression = "assignment_expression" [Expression, Assignment] {
                left: One<Left>,
                operator: One<Operator>,
                right: One<Right>,
            },
            ParenthesizedExpression = "parenthesized_expression" [Expression] {
                items: Many<Items> @rest,
            },
            FieldExpression = "field_expression" [Expression] {
                argument: One<Argument>,
                operator: One<Operator>,
                field: One<Field>,
            },
            SubscriptExpression = "subscript_expression" [Expression] {
                argument: One<Argument>,
                index: Opt<Index>,
            },
            ConditionalExpression = "conditional_expression" [Expression, Conditional] {
                condition: One<Condition>,
                consequence: Opt<Consequence>,
                alternative: One<Alternative>,
            },
            CastExpression = "cast_expression" [Expression] {
                r#type: One<Type>,
                value: One<Value>,
            },
            SizeofExpression = "sizeof_expression" [Expression] {
                value: Opt<Value>,
                r#type: Opt<Type>,
            },
            CommaExpression = "comma_expression" [Expression] {
                left: One<Left>,
                right: One<Right>,
            },

            StructSpecifier = "struct_specifier" [TypeDefinition] {
                name: Opt<Name>,
                body: Opt<Body>,
            },
            UnionSpecifier = "union_specifier" [TypeDefinition] {
                name: Opt<Name>,
                body: Opt<Body>,
            },
            FieldDeclarationList = "field_declaration_list" [] { items: Many<Items> @rest },
            FieldDeclaration = "field_declaration" [Declaration] {
                r#type: Opt<Type>,
                declarator: Many<Declarator>,
            },
            EnumSpecifier = "enum_specifier" [TypeDefinition] {
                name: Opt<Name>,
                body: Opt<Body>,
            },
            EnumeratorList = "enumerator_list" [] { items: Many<Items> @rest },
            Enumerator = "enumerator" [Declaration] {
                name: One<Name>,
                value: Opt<Value>,
            },
            TypeDefinition = "type_definition" [Declaration, TypeDefinition] {
                r#type: One<Type>,
                declarator: Many<Declarator>,
            },
            $($extra)*
        }
    };
}

/// Expands the kinds JavaScript, TypeScript and TSX share. `with: [..]` adds
/// the `jsx` and `typescript` groups.
macro_rules! ecma_kinds {
    (language: $language:ident; with: [$($feature:ident),*];) => {
        ecma_kinds! {
            @collect $language; [$($feature),*];
            [
                Program = "program" [Module] { items: Many<Items> @rest },
                HashBangLine = "hash_bang_line" [] terminal,

                Identifier = "identifier" [Expression, Identifier] terminal,
                PropertyIdentifier = "property_identifier" [Identifier] terminal,
                PrivatePropertyIdentifier = "private_property_identifier" [Identifier] terminal,
                ShorthandPropertyIdentifier = "shorthand_property_identifier" [Expression, Identifier] terminal,
                StatementIdentifier = "statement_identifier" [Identifier] terminal,
                This = "this" [Expression] terminal,
                Super = "super" [Expression] terminal,
                Number = "number" [Expression, Literal] terminal,
                StringLiteral = "string" [Expression, Literal] terminal,
                TemplateString = "template_string" [Expression, Literal] terminal,
                Regex = "regex" [Expression, Literal] terminal,
                True = "true" [Expression, Literal] terminal,
                False = "false" [Expression, Literal] terminal,
                Null = "null" [Expression, Literal] terminal,
                Undefined = "undefined" [Expression, Literal] terminal,

                ImportStatement = "import_statement" [Statement, Import] {
                    source: One<Source>,
                    items: Many<Items> @rest,
                },
                ExportStatement = "export_statement" [Statement] {
                    declaration: Opt<Declaration>,
                    value: Opt<Value>,
                    source: Opt<Source>,
                    items: Many<Items> @rest,
                },
                ExpressionStatement = "expression_statement" [Statement] {
                    items: Many<Items> @rest,
                },
                StatementBlock = "statement_block" [Statement, Block] {
                    items: Many<Items> @rest,
                },
                LexicalDeclaration = "lexical_declaration" [Statement, Declaration] {
                    items: Many<Items> @rest,
                },
                VariableDeclaration = "variable_declaration" [Statement, Declaration] {
                    items: Many<Items> @rest,
                },
                VariableDeclarator = "variable_declarator" [] {
                    name: One<Name>,
                    r#type: Opt<Type>,
                    value: Opt<Value>,
                },

                FunctionDeclaration = "function_declaration" [Statement, Declaration, Function] {
                    name: One<Name>,
                    parameters: One<Parameters>,
                    return_type: Opt<ReturnType>,
                    body: One<Body>,
                },
                GeneratorFunctionDeclaration = "generator_function_declaration" [Statement, Declaration, Function] {
                    name: One<Name>,
                    parameters: One<Parameters>,
                    return_type: Opt<ReturnType>,
                    body: One<Body>,
                },
                FunctionExpression = "function_expression" [Expression, Function] {
                    name: Opt<Name>,
                    parameters: One<Parameters>,
                    return_type: Opt<ReturnType>,
                    body: One<Body>,
                },
                ArrowFunction = "arrow_function" [Expression, Function] {
                    parameter: Opt<Parameter>,
                    parameters: Opt<Parameters>,
                    return_type: Opt<ReturnType>,
                    body: One<Body>,
                },
                MethodDefinition = "method_definition" [Declaration, Function] {
                    name: One<Name>,
                    parameters: One<Parameters>,
                    return_type: Opt<ReturnType>,
                    body: One<Body>,
                },
                FormalParameters = "formal_parameters" [] { items: Many<Items> @rest },
                AssignmentPattern = "assignment_pattern" [Parameter] {
                    left: One<Left>,
                    right: One<Right>,
                },
                RestPattern = "rest_pattern" [Parameter] { items: Many<Items> @rest },

                ClassDeclaration = "class_declaration" [Statement, Declaration, TypeDefinition] {
                    name: One<Name>,
                    body: One<Body>,
                },
                Class = "class" [Expression, TypeDefinition] {
                    name: Opt<Name>,
                    body: One<Body>,
                },
                ClassHeritage = "class_heritage" [] { items: Many<Items> @rest },
                ClassBody = "class_body" [] { items: Many<Items> @rest },
                FieldDefinition = "field_definition" [Declaration] {
                    property: One<Property>,
                    value: Opt<Value>,
                },

                IfStatement = "if_statement" [Statement, Conditional] {
                    condition: One<Condition>,
                    consequence: One<Consequence>,
                    alternative: Opt<Alternative>,
                },
                ElseClause = "else_clause" [] { items: Many<Items> @rest },
                ForStatement = "for_statement" [Statement, Loop] {
                    initializer: Opt<Initializer>,
                    condition: Opt<Condition>,
                    increment: Opt<Increment>,
                    body: One<Body>,
                },
                ForInStatement = "for_in_statement" [Statement, Loop] {
                    left: One<Left>,
                    operator: One<Operator>,
                    right: One<Right>,
                    body: One<Body>,
                },
                WhileStatement = "while_statement" [Statement, Loop] {
                    condition: One<Condition>,
                    body: One<Body>,
                },
                DoStatement = "do_statement" [Statement, Loop] {
                    body: One<Body>,
                    condition: One<Condition>,
                },
                ReturnStatement = "return_statement" [Statement, Return] {
                    items: Many<Items> @rest,
                },
                BreakStatement = "break_statement" [Statement, Jump] { label: Opt<Label> },
                ContinueStatement = "continue_statement" [Statement, Jump] { label: Opt<Label> },
                ThrowStatement = "throw_statement" [Statement, Jump] { items: Many<Items> @rest },
                TryStatement = "try_statement" [Statement] {
                    body: One<Body>,
                    handler: Opt<Handler>,
                    finalizer: Opt<Finalizer>,
                },
                CatchClause = "catch_clause" [] {
                    parameter: Opt<Parameter>,
                    body: One<Body>,
                },
                FinallyClause = "finally_clause" [] { body: One<Body> },
                SwitchStatement = "switch_statement" [Statement] {
                    value: One<Value>,
                    body: One<Body>,
                },
                SwitchBody = "switch_body" [] { items: Many<Items> @rest },
                SwitchCase = "switch_case" [] {
                    value: One<Value>,
                    body: Many<Body>,
                },
                SwitchDefault = "switch_default" [] { body: Many<Body> },

                CallExpression = "call_expression" [Expression, Call] {
                    function: One<Function>,
                    arguments: One<Arguments>,
                },
                NewExpression = "new_expression" [Expression, Call] {
                    constructor: One<Constructor>,
                    arguments: Opt<Arguments>,
                },
                Arguments = "arguments" [] { items: Many<Items> @rest },
                MemberExpression = "member_expression" [Expression] {
                    object: One<Object>,
                    property: One<Property>,
                },
                SubscriptExpression = "subscript_expression" [Expression] {
                    object: One<Object>,
                    index: One<Index>,
                },
                BinaryExpression = "binary_expression" [Expression, BinaryOperation] {
                    left: One<Left>,
                    operator: One<Operator>,
                    right: One<Right>,
                },
                UnaryExpression = "unary_expression" [Expression, UnaryOperation] {
                    operator: One<Operator>,
                    argument: One<Argument>,
                },
                UpdateExpression = "update_expression" [Expression, UnaryOperation] {
                    operator: One<Operator>,
                    argument: One<Argument>,
                },
                AssignmentExpression = "assignment_expression" [Expression, Assignment] {
                    left: One<Left>,
                    right: One<Right>,
                },
                AugmentedAssignmentExpression = "augmented_assignment_expression" [Expression, Assignment] {
                    left: One<Left>,
                    operator: One<Operator>,
                    right: One<Right>,
                },
                TernaryExpression = "ternary_expression" [Expression, Conditional] {
                    condition: One<Condition>,
                    consequence: One<Consequence>,
                    alternative: One<Alternative>,
                },
                AwaitExpression = "await_expression" [Expression] { items: Many<Items> @rest },
                SpreadElement = "spread_element" [Expression] { items: Many<Items> @rest },
                ParenthesizedExpression = "parenthesized_expression" [Expression] {
                    items: Many<Items> @rest,
                },
                SequenceExpression = "sequence_expression" [Expression] {
                    items: Many<Items> @rest,
                },
                Object = "object" [Expression] { items: Many<Items> @rest },
                Pair = "pair" [] {
                    key: One<Key>,
                    value: One<Value>,
                },
                Array = "array" [Expression] { items: Many<Items> @rest },
            ];
        }
    };

    (@collect $language:ident; [jsx $(, $feature:ident)*]; [$($acc:tt)*];) => {
        ecma_kinds! {
            @collect $language; [$($feature),*];
            [
                $($acc)*
                JsxElement = "jsx_element" [Expression] {
                    open_tag: One<OpenTag>,
                    close_tag: One<CloseTag>,
                    items: Many<Items> @rest,
                },
                JsxSelfClosingElement = "jsx_self_closing_element" [Expression] {
                    name: Opt<Name>,
                    attribute: Many<Attribute>,
                },
                JsxOpeningElement = "jsx_opening_element" [] {
                    name: Opt<Name>,
                    attribute: Many<Attribute>,
                },
                JsxClosingElement = "jsx_closing_element" [] { name: Opt<Name> },
                JsxExpression = "jsx_expression" [Expression] { items: Many<Items> @rest },
                JsxAttribute = "jsx_attribute" [] { items: Many<Items> @rest },
                JsxText = "jsx_text" [Literal] terminal,
                NestedIdentifier = "nested_identifier" [Identifier] terminal,
            ];
        }
    };

    (@collect $language:ident; [typescript $(, $feature:ident)*]; [$($acc:tt)*];) => {
        ecma_kinds! {
            @collect $language; [$($feature),*];
            [
                $($acc)*
                TypeIdentifier = "type_identifier" [Identifier] terminal,
                PredefinedType = "predefined_type" [] terminal,
                TypeAnnotation = "type_annotation" [] terminal,
                InterfaceBody = "interface_body" [] terminal,
                EnumBody = "enum_body" [] terminal,
                AccessibilityModifier = "accessibility_modifier" [] terminal,
                InterfaceDeclaration = "interface_declaration" [Statement, Declaration, TypeDefinition] {
                    name: One<Name>,
                    body: One<Body>,
                },
                TypeAliasDeclaration = "type_alias_declaration" [Statement, Declaration, TypeDefinition] {
                    name: One<Name>,
                    value: One<Value>,
                },
                EnumDeclaration = "enum_declaration" [Statement, Declaration, TypeDefinition] {
                    name: One<Name>,
                    body: One<Body>,
                },
                AbstractClassDeclaration = "abstract_class_declaration" [Statement, Declaration, TypeDefinition] {
                    name: One<Name>,
                    body: One<Body>,
                },
                RequiredParameter = "required_parameter" [Parameter] {
                    pattern: One<Pattern>,
                    r#type: Opt<Type>,
                    value: Opt<Value>,
                },
                OptionalParameter = "optional_parameter" [Parameter] {
                    pattern: One<Pattern>,
                    r#type: Opt<Type>,
                    value: Opt<Value>,
                },
                FunctionSignature = "function_signature" [Statement, Declaration] {
                    name: One<Name>,
                    parameters: One<Parameters>,
                    return_type: Opt<ReturnType>,
                },
                MethodSignature = "method_signature" [Declaration] {
                    name: One<Name>,
                    parameters: One<Parameters>,
                    return_type: Opt<ReturnType>,
                },
                AbstractMethodSignature = "abstract_method_signature" [Declaration] {
                    name: One<Name>,
                    parameters: One<Parameters>,
                    return_type: Opt<ReturnType>,
                },
                PublicFieldDefinition = "public_field_definition" [Declaration] {
                    name: One<Name>,
                    r#type: Opt<Type>,
                    value: Opt<Value>,
                },
                AsExpression = "as_expression" [Expression] { items: Many<Items> @rest },
                NonNullExpression = "non_null_expression" [Expression] { items: Many<Items> @rest },
            ];
        }
    };

    (@collect $language:ident; []; [$($acc:tt)*];) => {
        $crate::grammar! {
            language: $language;
            $($acc)*
        }
    };
}

pub mod c;
pub mod cpp;
pub mod java;
pub mod javascript;
pub mod python;
pub mod rust;
pub mod tsx;
pub mod typescript;
