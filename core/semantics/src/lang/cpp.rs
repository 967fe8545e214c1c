use polyglot_ast::languages::cpp::Kind;
use polyglot_ast::slot::Slot;

use crate::rules::{FunctionRule, ListRule, NameRule, Role, Semantics};

impl Semantics for Kind {
    fn role(self) -> Role {
        cxx_role! {
            self;
            Kind::NewExpression => Role::call(Slot::Type),
            Kind::LambdaExpression => Role::Function(FunctionRule {
                name: NameRule::Anonymous,
                parameters: &[ListRule::Declarator(Slot::Declarator)],
                body: Slot::Body,
            }),
            Kind::NamespaceIdentifier
            | Kind::QualifiedIdentifier
            | Kind::DestructorName
            | Kind::OperatorName
            | Kind::This
            | Kind::Nullptr
            | Kind::RawStringLiteral
            | Kind::AccessSpecifier
            | Kind::TemplateType
            | Kind::PlaceholderTypeSpecifier
            | Kind::NamespaceDefinition
            | Kind::DeclarationList
            | Kind::ClassSpecifier
            | Kind::TemplateDeclaration
            | Kind::TemplateParameterList
            | Kind::DefaultMethodClause
            | Kind::DeleteMethodClause
            | Kind::AbstractFunctionDeclarator
            | Kind::ForRangeLoop
            | Kind::ConditionClause
            | Kind::DeleteExpression
            | Kind::ThrowStatement
            | Kind::TryStatement
            | Kind::CatchClause => Role::Other,
        }
    }
}
