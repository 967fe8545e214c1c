//! Named child slots and their arity.
//!
//! Slots give grammar-equivalent constructs of different dialects a uniform
//! accessor surface: the `condition` of a C `if`, a Python `if` and a Rust
//! `if let` are all reached through [`Slot::Condition`].

use core::fmt;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::errors::AstError;
use crate::node::Node;

macro_rules! slots {
    ($($variant:ident => $name:literal,)*) => {
        /// A stable, language-normalized child name.
        ///
        /// Slot names double as tree-sitter field names when lowering a
        /// concrete syntax tree, see [`crate::cst`].
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[repr(u8)]
        pub enum Slot {
            $($variant,)*
        }

        impl Slot {
            pub const ALL: &'static [Slot] = &[$(Slot::$variant,)*];

            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Slot::$variant => $name,)*
                }
            }

            #[must_use]
            pub fn from_name(name: &str) -> Option<Slot> {
                match name {
                    $($name => Some(Slot::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

slots! {
    Alternative => "alternative",
    Alternatives => "alternatives",
    Argument => "argument",
    Arguments => "arguments",
    Array => "array",
    Attribute => "attribute",
    Body => "body",
    CloseTag => "close_tag",
    Condition => "condition",
    Consequence => "consequence",
    Constructor => "constructor",
    Declaration => "declaration",
    Declarator => "declarator",
    Definition => "definition",
    Field => "field",
    Finalizer => "finalizer",
    Function => "function",
    Handler => "handler",
    Increment => "increment",
    Index => "index",
    Init => "init",
    Initializer => "initializer",
    Items => "items",
    Key => "key",
    Label => "label",
    Left => "left",
    Macro => "macro",
    ModuleName => "module_name",
    Name => "name",
    Object => "object",
    OpenTag => "open_tag",
    Operand => "operand",
    Operator => "operator",
    Parameter => "parameter",
    Parameters => "parameters",
    Path => "path",
    Pattern => "pattern",
    Property => "property",
    Raw => "raw",
    ReturnType => "return_type",
    Right => "right",
    Size => "size",
    Source => "source",
    Subscript => "subscript",
    Superclass => "superclass",
    Superclasses => "superclasses",
    Trait => "trait",
    Type => "type",
    Update => "update",
    Value => "value",
}

impl Display for Slot {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How many children a slot holds. Fixed per slot per kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arity {
    /// Exactly one child.
    One,
    /// Zero or one child.
    Opt,
    /// An ordered, possibly empty, list of children.
    Many,
}

impl Arity {
    #[must_use]
    pub const fn is_singular(self) -> bool {
        !matches!(self, Arity::Many)
    }

    #[must_use]
    pub const fn accepts(self, count: usize) -> bool {
        match self {
            Arity::One => count == 1,
            Arity::Opt => count <= 1,
            Arity::Many => true,
        }
    }
}

impl Display for Arity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Arity::One => write!(f, "one"),
            Arity::Opt => write!(f, "optional"),
            Arity::Many => write!(f, "many"),
        }
    }
}

/// Declaration of one slot of a node kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlotDecl {
    pub slot: Slot,
    pub arity: Arity,
    /// The slot collects every child that is not assigned to another slot
    /// and is neither trivia nor a terminal symbol.
    pub rest: bool,
}

impl SlotDecl {
    #[must_use]
    pub const fn new(slot: Slot, arity: Arity, rest: bool) -> Self {
        Self { slot, arity, rest }
    }
}

/// Position of `slot` in a declaration table, evaluated at compile time by the
/// typed accessors that [`crate::grammar!`] generates.
///
/// # Panics
///
/// Panics when the slot is not declared; in a `const` context this is a
/// compile error.
#[must_use]
pub const fn index_of(decls: &[SlotDecl], slot: Slot) -> usize {
    let mut i = 0;
    while i < decls.len() {
        if decls[i].slot as u8 == slot as u8 {
            return i;
        }
        i += 1;
    }
    panic!("slot is not declared for this node kind")
}

/// The value of a slot: singular slots never produce a list and plural slots
/// always do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlotValue<'t> {
    Single(Option<Node<'t>>),
    List(Vec<Node<'t>>),
}

impl<'t> SlotValue<'t> {
    /// The child of a singular slot, `None` for plural slots.
    #[must_use]
    pub fn single(&self) -> Option<Option<Node<'t>>> {
        match self {
            SlotValue::Single(node) => Some(*node),
            SlotValue::List(_) => None,
        }
    }

    /// The children of a plural slot, `None` for singular slots.
    #[must_use]
    pub fn list(&self) -> Option<&[Node<'t>]> {
        match self {
            SlotValue::Single(_) => None,
            SlotValue::List(nodes) => Some(nodes),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            SlotValue::Single(node) => node.is_none(),
            SlotValue::List(nodes) => nodes.is_empty(),
        }
    }

    /// All children regardless of arity, in source order.
    #[must_use]
    pub fn into_nodes(self) -> Vec<Node<'t>> {
        match self {
            SlotValue::Single(node) => node.into_iter().collect(),
            SlotValue::List(nodes) => nodes,
        }
    }
}

/// Type-level arity used by the generated typed accessors.
pub trait ArityMarker {
    const ARITY: Arity;
    type Output<'t>;

    /// Reads the slot at `index` of the node's declaration table.
    ///
    /// # Errors
    ///
    /// Returns [`AstError::MalformedTree`] when the stored children violate
    /// the declared arity.
    fn project(node: Node<'_>, index: usize) -> Result<Self::Output<'_>, AstError>;
}

pub mod arity {
    //! Marker types named after the [`Arity`](super::Arity) variants.

    use super::{ArityMarker, Arity};
    use crate::errors::AstError;
    use crate::node::Node;

    pub struct One;
    pub struct Opt;
    pub struct Many;

    impl ArityMarker for One {
        const ARITY: Arity = Arity::One;
        type Output<'t> = Node<'t>;

        fn project(node: Node<'_>, index: usize) -> Result<Self::Output<'_>, AstError> {
            let (decl, ids) = node.slot_at(index)?;
            match ids {
                [id] => Ok(node.tree().node(*id)),
                _ => Err(AstError::malformed(
                    node.kind(),
                    Some(decl.slot),
                    format!("expected exactly one child, found {}", ids.len()),
                )),
            }
        }
    }

    impl ArityMarker for Opt {
        const ARITY: Arity = Arity::Opt;
        type Output<'t> = Option<Node<'t>>;

        fn project(node: Node<'_>, index: usize) -> Result<Self::Output<'_>, AstError> {
            let (decl, ids) = node.slot_at(index)?;
            match ids {
                [] => Ok(None),
                [id] => Ok(Some(node.tree().node(*id))),
                _ => Err(AstError::malformed(
                    node.kind(),
                    Some(decl.slot),
                    format!("expected at most one child, found {}", ids.len()),
                )),
            }
        }
    }

    impl ArityMarker for Many {
        const ARITY: Arity = Arity::Many;
        type Output<'t> = Vec<Node<'t>>;

        fn project(node: Node<'_>, index: usize) -> Result<Self::Output<'_>, AstError> {
            let (_, ids) = node.slot_at(index)?;
            let tree = node.tree();
            Ok(ids.iter().map(|id| tree.node(*id)).collect())
        }
    }
}
