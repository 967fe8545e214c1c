use polyglot_ast::languages::typescript::Kind;
use polyglot_ast::slot::Slot;

use crate::rules::{FunctionRule, ListRule, NameRule, Role, Semantics};

impl Semantics for Kind {
    fn role(self) -> Role {
        ecma_role! {
            self;
            Kind::TypeIdentifier
            | Kind::PredefinedType
            | Kind::TypeAnnotation
            | Kind::InterfaceBody
            | Kind::EnumBody
            | Kind::AccessibilityModifier
            | Kind::InterfaceDeclaration
            | Kind::TypeAliasDeclaration
            | Kind::EnumDeclaration
            | Kind::AbstractClassDeclaration
            | Kind::RequiredParameter
            | Kind::OptionalParameter
            | Kind::FunctionSignature
            | Kind::MethodSignature
            | Kind::AbstractMethodSignature
            | Kind::PublicFieldDefinition
            | Kind::AsExpression
            | Kind::NonNullExpression => Role::Other,
        }
    }
}
