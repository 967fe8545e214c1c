use polyglot_ast::languages::c::Kind;
use polyglot_ast::slot::Slot;

use crate::rules::{FunctionRule, ListRule, NameRule, Role, Semantics};

impl Semantics for Kind {
    fn role(self) -> Role {
        cxx_role!(self;)
    }
}
