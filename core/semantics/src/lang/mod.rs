//! Extraction rules per language.
//!
//! Every language states the role of each of its kinds in one exhaustive
//! match, so declaring a new kind without deciding its role does not
//! compile. C and C++ share their common arms through `cxx_role!`,
//! JavaScript, TypeScript and TSX through `ecma_role!`.

/// Matches `$kind` against the kinds C and C++ share, then the `$extra` arms.
macro_rules! cxx_role {
    ($kind:expr; $($extra:tt)*) => {
        match $kind {
            Kind::CallExpression => Role::call(Slot::Function),
            Kind::FunctionDefinition => Role::Function(FunctionRule {
                name: NameRule::Declarator(Slot::Declarator),
                parameters: &[ListRule::Declarator(Slot::Declarator)],
                body: Slot::Body,
            }),
            Kind::TranslationUnit
            | Kind::Identifier
            | Kind::FieldIdentifier
            | Kind::TypeIdentifier
            | Kind::StatementIdentifier
            | Kind::PrimitiveType
            | Kind::SizedTypeSpecifier
            | Kind::TypeQualifier
            | Kind::StorageClassSpecifier
            | Kind::NumberLiteral
            | Kind::StringLiteral
            | Kind::CharLiteral
            | Kind::ConcatenatedString
            | Kind::SystemLibString
            | Kind::True
            | Kind::False
            | Kind::Null
            | Kind::PreprocArg
            | Kind::PreprocInclude
            | Kind::PreprocDef
            | Kind::PreprocIfdef
            | Kind::PreprocIf
            | Kind::PreprocElif
            | Kind::PreprocElse
            | Kind::Declaration
            | Kind::InitDeclarator
            | Kind::FunctionDeclarator
            | Kind::PointerDeclarator
            | Kind::ParenthesizedDeclarator
            | Kind::ArrayDeclarator
            | Kind::ParameterList
            | Kind::ParameterDeclaration
            | Kind::TypeDescriptor
            | Kind::InitializerList
            | Kind::CompoundStatement
            | Kind::ExpressionStatement
            | Kind::IfStatement
            | Kind::ElseClause
            | Kind::WhileStatement
            | Kind::DoStatement
            | Kind::ForStatement
            | Kind::ReturnStatement
            | Kind::BreakStatement
            | Kind::ContinueStatement
            | Kind::GotoStatement
            | Kind::LabeledStatement
            | Kind::SwitchStatement
            | Kind::CaseStatement
            | Kind::ArgumentList
            | Kind::BinaryExpression
            | Kind::UnaryExpression
            | Kind::UpdateExpression
            | Kind::PointerExpression
            | Kind::AssignmentExpression
            | Kind::ParenthesizedExpression
            | Kind::FieldExpression
            | Kind::SubscriptExpression
            | Kind::ConditionalExpression
            | Kind::CastExpression
            | Kind::SizeofExpression
            | Kind::CommaExpression
            | Kind::StructSpecifier
            | Kind::UnionSpecifier
            | Kind::FieldDeclarationList
            | Kind::FieldDeclaration
            | Kind::EnumSpecifier
            | Kind::EnumeratorList
            | Kind::Enumerator
            | Kind::TypeDefinition => Role::Other,
            $($extra)*
        }
    };
}

/// Matches `$kind` against the kinds JavaScript, TypeScript and TSX share,
/// then the `$extra` arms.
macro_rules! ecma_role {
    ($kind:expr; $($extra:tt)*) => {
        match $kind {
            Kind::CallExpression => Role::call(Slot::Function),
            Kind::NewExpression => Role::call(Slot::Constructor),
            Kind::FunctionDeclaration
            | Kind::GeneratorFunctionDeclaration
            | Kind::FunctionExpression
            | Kind::MethodDefinition => Role::named_function(),
            Kind::ArrowFunction => Role::Function(FunctionRule {
                name: NameRule::Anonymous,
                parameters: &[
                    ListRule::Items(Slot::Parameter),
                    ListRule::Items(Slot::Parameters),
                ],
                body: Slot::Body,
            }),
            Kind::Program
            | Kind::HashBangLine
            | Kind::Identifier
            | Kind::PropertyIdentifier
            | Kind::PrivatePropertyIdentifier
            | Kind::ShorthandPropertyIdentifier
            | Kind::StatementIdentifier
            | Kind::This
            | Kind::Super
            | Kind::Number
            | Kind::StringLiteral
            | Kind::TemplateString
            | Kind::Regex
            | Kind::True
            | Kind::False
            | Kind::Null
            | Kind::Undefined
            | Kind::ImportStatement
            | Kind::ExportStatement
            | Kind::ExpressionStatement
            | Kind::StatementBlock
            | Kind::LexicalDeclaration
            | Kind::VariableDeclaration
            | Kind::VariableDeclarator
            | Kind::FormalParameters
            | Kind::AssignmentPattern
            | Kind::RestPattern
            | Kind::ClassDeclaration
            | Kind::Class
            | Kind::ClassHeritage
            | Kind::ClassBody
            | Kind::FieldDefinition
            | Kind::IfStatement
            | Kind::ElseClause
            | Kind::ForStatement
            | Kind::ForInStatement
            | Kind::WhileStatement
            | Kind::DoStatement
            | Kind::ReturnStatement
            | Kind::BreakStatement
            | Kind::ContinueStatement
            | Kind::ThrowStatement
            | Kind::TryStatement
            | Kind::CatchClause
            | Kind::FinallyClause
            | Kind::SwitchStatement
            | Kind::SwitchBody
            | Kind::SwitchCase
            | Kind::SwitchDefault
            | Kind::Arguments
            | Kind::MemberExpression
            | Kind::SubscriptExpression
            | Kind::BinaryExpression
            | Kind::UnaryExpression
            | Kind::UpdateExpression
            | Kind::AssignmentExpression
            | Kind::AugmentedAssignmentExpression
            | Kind::TernaryExpression
            | Kind::AwaitExpression
            | Kind::SpreadElement
            | Kind::ParenthesizedExpression
            | Kind::SequenceExpression
            | Kind::Object
            | Kind::Pair
            | Kind::Array => Role::Other,
            $($extra)*
        }
    };
}

mod c;
mod cpp;
mod java;
mod javascript;
mod python;
mod rust;
mod tsx;
mod typescript;
