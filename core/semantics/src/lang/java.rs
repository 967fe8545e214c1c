use polyglot_ast::languages::java::Kind;
use polyglot_ast::slot::Slot;

use crate::rules::{Role, Semantics};

impl Semantics for Kind {
    fn role(self) -> Role {
        match self {
            Kind::MethodInvocation => Role::call(Slot::Name),
            Kind::ObjectCreationExpression => Role::call(Slot::Type),
            Kind::ExplicitConstructorInvocation => Role::call(Slot::Constructor),
            Kind::MethodDeclaration | Kind::ConstructorDeclaration => Role::named_function(),
            Kind::LambdaExpression => Role::lambda(),
            Kind::Program
            | Kind::Identifier
            | Kind::TypeIdentifier
            | Kind::ScopedIdentifier
            | Kind::ScopedTypeIdentifier
            | Kind::IntegralType
            | Kind::FloatingPointType
            | Kind::BooleanType
            | Kind::VoidType
            | Kind::GenericType
            | Kind::ArrayType
            | Kind::Modifiers
            | Kind::Dimensions
            | Kind::DecimalIntegerLiteral
            | Kind::HexIntegerLiteral
            | Kind::DecimalFloatingPointLiteral
            | Kind::StringLiteral
            | Kind::CharacterLiteral
            | Kind::True
            | Kind::False
            | Kind::NullLiteral
            | Kind::This
            | Kind::Super
            | Kind::PackageDeclaration
            | Kind::ImportDeclaration
            | Kind::ClassDeclaration
            | Kind::Superclass
            | Kind::InterfaceDeclaration
            | Kind::EnumDeclaration
            | Kind::EnumBody
            | Kind::EnumConstant
            | Kind::ClassBody
            | Kind::InterfaceBody
            | Kind::FieldDeclaration
            | Kind::VariableDeclarator
            | Kind::LocalVariableDeclaration
            | Kind::ConstructorBody
            | Kind::FormalParameters
            | Kind::FormalParameter
            | Kind::SpreadParameter
            | Kind::InferredParameters
            | Kind::Block
            | Kind::ExpressionStatement
            | Kind::IfStatement
            | Kind::WhileStatement
            | Kind::DoStatement
            | Kind::ForStatement
            | Kind::EnhancedForStatement
            | Kind::ReturnStatement
            | Kind::BreakStatement
            | Kind::ContinueStatement
            | Kind::ThrowStatement
            | Kind::TryStatement
            | Kind::CatchClause
            | Kind::FinallyClause
            | Kind::ArgumentList
            | Kind::BinaryExpression
            | Kind::UnaryExpression
            | Kind::UpdateExpression
            | Kind::AssignmentExpression
            | Kind::FieldAccess
            | Kind::ArrayAccess
            | Kind::TernaryExpression
            | Kind::CastExpression
            | Kind::InstanceofExpression
            | Kind::ParenthesizedExpression => Role::Other,
        }
    }
}
