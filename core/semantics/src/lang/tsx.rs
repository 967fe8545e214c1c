use polyglot_ast::languages::tsx::Kind;
use polyglot_ast::slot::Slot;

use crate::rules::{FunctionRule, ListRule, NameRule, Role, Semantics};

impl Semantics for Kind {
    fn role(self) -> Role {
        ecma_role! {
            self;
            Kind::JsxElement
            | Kind::JsxSelfClosingElement
            | Kind::JsxOpeningElement
            | Kind::JsxClosingElement
            | Kind::JsxExpression
            | Kind::JsxAttribute
            | Kind::JsxText
            | Kind::NestedIdentifier
            | Kind::TypeIdentifier
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
