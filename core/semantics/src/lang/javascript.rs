use polyglot_ast::languages::javascript::Kind;
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
            | Kind::NestedIdentifier => Role::Other,
        }
    }
}
