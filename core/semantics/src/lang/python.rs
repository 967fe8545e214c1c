use polyglot_ast::languages::python::Kind;
use polyglot_ast::slot::Slot;

use crate::rules::{Role, Semantics};

impl Semantics for Kind {
    fn role(self) -> Role {
        match self {
            Kind::Call => Role::call(Slot::Function),
            Kind::FunctionDefinition => Role::named_function(),
            Kind::Lambda => Role::lambda(),
            Kind::Module
            | Kind::Identifier
            | Kind::DottedName
            | Kind::Integer
            | Kind::Float
            | Kind::StringLiteral
            | Kind::ConcatenatedString
            | Kind::True
            | Kind::False
            | Kind::NoneLiteral
            | Kind::Ellipsis
            | Kind::TypeExpression
            | Kind::ImportStatement
            | Kind::ImportFromStatement
            | Kind::AliasedImport
            | Kind::ExpressionStatement
            | Kind::DecoratedDefinition
            | Kind::Decorator
            | Kind::ClassDefinition
            | Kind::Parameters
            | Kind::LambdaParameters
            | Kind::DefaultParameter
            | Kind::TypedParameter
            | Kind::TypedDefaultParameter
            | Kind::ListSplatPattern
            | Kind::DictionarySplatPattern
            | Kind::Block
            | Kind::IfStatement
            | Kind::ElifClause
            | Kind::ElseClause
            | Kind::ForStatement
            | Kind::WhileStatement
            | Kind::TryStatement
            | Kind::ExceptClause
            | Kind::FinallyClause
            | Kind::WithStatement
            | Kind::ReturnStatement
            | Kind::PassStatement
            | Kind::BreakStatement
            | Kind::ContinueStatement
            | Kind::RaiseStatement
            | Kind::ArgumentList
            | Kind::KeywordArgument
            | Kind::GeneratorExpression
            | Kind::Attribute
            | Kind::Subscript
            | Kind::BinaryOperator
            | Kind::BooleanOperator
            | Kind::UnaryOperator
            | Kind::NotOperator
            | Kind::ComparisonOperator
            | Kind::Assignment
            | Kind::AugmentedAssignment
            | Kind::ConditionalExpression
            | Kind::Await
            | Kind::ParenthesizedExpression
            | Kind::List
            | Kind::Tuple
            | Kind::Set
            | Kind::Dictionary
            | Kind::Pair => Role::Other,
        }
    }
}
