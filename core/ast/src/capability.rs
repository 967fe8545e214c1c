//! Cross-language capability tags.
//!
//! A node kind carries a set of capabilities instead of sitting in a class
//! hierarchy: a C call expression is both an [`Capability::Expression`] and a
//! [`Capability::Call`]. Each capability names the slots it requires, and the
//! taxonomy guarantees that every kind tagged with a capability declares them
//! (see [`crate::taxonomy::validate`]).

use core::fmt;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::slot::Slot;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Capability {
    /// Root of a source file.
    Module,
    Expression,
    Statement,
    Declaration,
    Block,
    Call,
    Function,
    Conditional,
    Loop,
    BinaryOperation,
    UnaryOperation,
    Assignment,
    Return,
    /// `break`, `continue`, `goto` and friends.
    Jump,
    Literal,
    Identifier,
    Parameter,
    Import,
    TypeDefinition,
    Terminal,
    Trivia,
    Error,
}

impl Capability {
    pub const ALL: [Capability; 22] = [
        Capability::Module,
        Capability::Expression,
        Capability::Statement,
        Capability::Declaration,
        Capability::Block,
        Capability::Call,
        Capability::Function,
        Capability::Conditional,
        Capability::Loop,
        Capability::BinaryOperation,
        Capability::UnaryOperation,
        Capability::Assignment,
        Capability::Return,
        Capability::Jump,
        Capability::Literal,
        Capability::Identifier,
        Capability::Parameter,
        Capability::Import,
        Capability::TypeDefinition,
        Capability::Terminal,
        Capability::Trivia,
        Capability::Error,
    ];

    /// Slots every kind tagged with this capability must declare.
    #[must_use]
    pub const fn required_slots(self) -> &'static [Slot] {
        match self {
            Capability::Module | Capability::Block => &[Slot::Items],
            Capability::Call => &[Slot::Arguments],
            Capability::Function | Capability::Loop => &[Slot::Body],
            Capability::Conditional => &[Slot::Condition, Slot::Consequence, Slot::Alternative],
            Capability::BinaryOperation => &[Slot::Left, Slot::Operator, Slot::Right],
            Capability::UnaryOperation => &[Slot::Operator],
            Capability::Assignment => &[Slot::Left, Slot::Right],
            _ => &[],
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Capability::Module => "module",
            Capability::Expression => "expression",
            Capability::Statement => "statement",
            Capability::Declaration => "declaration",
            Capability::Block => "block",
            Capability::Call => "call",
            Capability::Function => "function",
            Capability::Conditional => "conditional",
            Capability::Loop => "loop",
            Capability::BinaryOperation => "binary_operation",
            Capability::UnaryOperation => "unary_operation",
            Capability::Assignment => "assignment",
            Capability::Return => "return",
            Capability::Jump => "jump",
            Capability::Literal => "literal",
            Capability::Identifier => "identifier",
            Capability::Parameter => "parameter",
            Capability::Import => "import",
            Capability::TypeDefinition => "type_definition",
            Capability::Terminal => "terminal",
            Capability::Trivia => "trivia",
            Capability::Error => "error",
        }
    }

    const fn bit(self) -> u32 {
        1 << (self as u8)
    }
}

impl Display for Capability {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of capabilities packed into a bit mask.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CapabilitySet(u32);

impl CapabilitySet {
    pub const EMPTY: CapabilitySet = CapabilitySet(0);

    #[must_use]
    pub const fn of(capabilities: &[Capability]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < capabilities.len() {
            bits |= capabilities[i].bit();
            i += 1;
        }
        CapabilitySet(bits)
    }

    #[must_use]
    pub const fn contains(self, capability: Capability) -> bool {
        self.0 & capability.bit() != 0
    }

    #[must_use]
    pub const fn union(self, other: CapabilitySet) -> Self {
        CapabilitySet(self.0 | other.0)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Capability> {
        Capability::ALL
            .into_iter()
            .filter(move |capability| self.contains(*capability))
    }
}

impl fmt::Debug for CapabilitySet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        iter.into_iter()
            .fold(CapabilitySet::EMPTY, |set, capability| {
                set.union(CapabilitySet(capability.bit()))
            })
    }
}
