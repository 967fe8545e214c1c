use polyglot_ast::languages::rust::Kind;
use polyglot_ast::slot::Slot;

use crate::rules::{Role, Semantics};

impl Semantics for Kind {
    fn role(self) -> Role {
        match self {
            Kind::CallExpression => Role::call(Slot::Function),
            Kind::FunctionItem => Role::named_function(),
            Kind::ClosureExpression => Role::lambda(),
            Kind::SourceFile
            | Kind::Identifier
            | Kind::FieldIdentifier
            | Kind::TypeIdentifier
            | Kind::ScopedIdentifier
            | Kind::ScopedTypeIdentifier
            | Kind::PrimitiveType
            | Kind::GenericType
            | Kind::ReferenceType
            | Kind::IntegerLiteral
            | Kind::FloatLiteral
            | Kind::StringLiteral
            | Kind::RawStringLiteral
            | Kind::CharLiteral
            | Kind::BooleanLiteral
            | Kind::UnitExpression
            | Kind::SelfValue
            | Kind::MutableSpecifier
            | Kind::VisibilityModifier
            | Kind::Lifetime
            | Kind::Label
            | Kind::TokenTree
            | Kind::AttributeItem
            | Kind::InnerAttributeItem
            | Kind::SelfParameter
            | Kind::UseDeclaration
            | Kind::ModItem
            | Kind::FunctionSignatureItem
            | Kind::Parameters
            | Kind::Parameter
            | Kind::ClosureParameters
            | Kind::StructItem
            | Kind::EnumItem
            | Kind::EnumVariantList
            | Kind::EnumVariant
            | Kind::ImplItem
            | Kind::TraitItem
            | Kind::TypeItem
            | Kind::ConstItem
            | Kind::StaticItem
            | Kind::DeclarationList
            | Kind::FieldDeclarationList
            | Kind::OrderedFieldDeclarationList
            | Kind::FieldDeclaration
            | Kind::Block
            | Kind::ExpressionStatement
            | Kind::LetDeclaration
            | Kind::IfExpression
            | Kind::ElseClause
            | Kind::LetCondition
            | Kind::LetChain
            | Kind::WhileExpression
            | Kind::LoopExpression
            | Kind::ForExpression
            | Kind::MatchExpression
            | Kind::MatchBlock
            | Kind::MatchArm
            | Kind::MatchPattern
            | Kind::ReturnExpression
            | Kind::BreakExpression
            | Kind::ContinueExpression
            | Kind::Arguments
            | Kind::MacroInvocation
            | Kind::FieldExpression
            | Kind::IndexExpression
            | Kind::BinaryExpression
            | Kind::UnaryExpression
            | Kind::ReferenceExpression
            | Kind::AssignmentExpression
            | Kind::CompoundAssignmentExpr
            | Kind::TryExpression
            | Kind::AwaitExpression
            | Kind::RangeExpression
            | Kind::ParenthesizedExpression
            | Kind::TupleExpression
            | Kind::ArrayExpression
            | Kind::StructExpression
            | Kind::FieldInitializerList => Role::Other,
        }
    }
}
