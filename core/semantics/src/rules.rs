//! Per-kind extraction rules.
//!
//! A rule says which slots hold the pieces a cross-language query asks for.
//! Rules are plain data so that every language can state them in one
//! exhaustive match over its kinds.

use polyglot_ast::slot::Slot;

/// How a list of nodes (arguments, parameters) is read from a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListRule {
    /// The slot holds either list nodes, whose `items` are the elements, or
    /// the elements themselves.
    Items(Slot),
    /// Follow the `declarator` chain starting at the slot down to the first
    /// node that declares `parameters`, then read that slot as
    /// [`ListRule::Items`].
    Declarator(Slot),
    Absent,
}

/// How the name of a function is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameRule {
    /// The slot holds the name; an empty optional slot means anonymous.
    Slot(Slot),
    /// Follow the `declarator` chain starting at the slot down to the first
    /// identifier.
    Declarator(Slot),
    /// Lambdas and closures.
    Anonymous,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallRule {
    pub callee: Slot,
    pub arguments: ListRule,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FunctionRule {
    pub name: NameRule,
    /// Concatenated in order.
    pub parameters: &'static [ListRule],
    pub body: Slot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Call(CallRule),
    Function(FunctionRule),
    Other,
}

impl Role {
    /// A call whose callee sits in `callee` and whose arguments are the
    /// items of the `arguments` slot.
    #[must_use]
    pub const fn call(callee: Slot) -> Role {
        Role::Call(CallRule {
            callee,
            arguments: ListRule::Items(Slot::Arguments),
        })
    }

    /// A function with a `name` slot, a `parameters` list and a `body`.
    #[must_use]
    pub const fn named_function() -> Role {
        Role::Function(FunctionRule {
            name: NameRule::Slot(Slot::Name),
            parameters: &[ListRule::Items(Slot::Parameters)],
            body: Slot::Body,
        })
    }

    /// A lambda whose parameters are the items of `parameters`.
    #[must_use]
    pub const fn lambda() -> Role {
        Role::Function(FunctionRule {
            name: NameRule::Anonymous,
            parameters: &[ListRule::Items(Slot::Parameters)],
            body: Slot::Body,
        })
    }
}

/// Extraction rules of a language's node kinds.
pub trait Semantics: Copy {
    fn role(self) -> Role;
}
