//! Node kind tags.
//!
//! A [`NodeKind`] is either a production of one of the language grammars
//! (declared with [`crate::grammar!`] under [`crate::languages`]) or one of the
//! language-independent [`SpecialKind`]s used for tokens, trivia and error
//! regions.

use core::fmt;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::capability::{Capability, CapabilitySet};
use crate::errors::AstError;
use crate::language::Language;
use crate::languages::{c, cpp, java, javascript, python, rust, tsx, typescript};
use crate::slot::{Arity, Slot, SlotDecl};

/// Language-independent node kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpecialKind {
    /// A token whose production the taxonomy does not know; carries raw text.
    Terminal,
    /// A fixed lexeme: operator, keyword or punctuation. The lexeme is the
    /// node's text and is not stored separately.
    TerminalSymbol,
    /// An opaque span of source kept verbatim.
    Blot,
    InnerWhitespace,
    Comment,
    /// Raw text the upstream parser could not structure.
    ErrorTree,
    /// A region whose production could not be structured; children are kept,
    /// slots are dropped.
    ParseError,
    /// Raw error text packaged with best-effort alternative parses.
    VariationPoint,
}

const PARSE_ERROR_SLOTS: &[SlotDecl] = &[SlotDecl::new(Slot::Items, Arity::Many, true)];
const VARIATION_POINT_SLOTS: &[SlotDecl] = &[
    SlotDecl::new(Slot::Raw, Arity::One, false),
    SlotDecl::new(Slot::Alternatives, Arity::Many, false),
];

impl SpecialKind {
    pub const ALL: [SpecialKind; 8] = [
        SpecialKind::Terminal,
        SpecialKind::TerminalSymbol,
        SpecialKind::Blot,
        SpecialKind::InnerWhitespace,
        SpecialKind::Comment,
        SpecialKind::ErrorTree,
        SpecialKind::ParseError,
        SpecialKind::VariationPoint,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            SpecialKind::Terminal => "terminal",
            SpecialKind::TerminalSymbol => "terminal_symbol",
            SpecialKind::Blot => "blot",
            SpecialKind::InnerWhitespace => "inner_whitespace",
            SpecialKind::Comment => "comment",
            SpecialKind::ErrorTree => "error_tree",
            SpecialKind::ParseError => "parse_error",
            SpecialKind::VariationPoint => "variation_point",
        }
    }

    #[must_use]
    pub const fn capabilities(self) -> CapabilitySet {
        match self {
            SpecialKind::Terminal | SpecialKind::TerminalSymbol | SpecialKind::Blot => {
                CapabilitySet::of(&[Capability::Terminal])
            }
            SpecialKind::InnerWhitespace | SpecialKind::Comment => {
                CapabilitySet::of(&[Capability::Terminal, Capability::Trivia])
            }
            SpecialKind::ErrorTree => CapabilitySet::of(&[Capability::Terminal, Capability::Error]),
            SpecialKind::ParseError | SpecialKind::VariationPoint => {
                CapabilitySet::of(&[Capability::Error])
            }
        }
    }

    #[must_use]
    pub const fn slots(self) -> &'static [SlotDecl] {
        match self {
            SpecialKind::ParseError => PARSE_ERROR_SLOTS,
            SpecialKind::VariationPoint => VARIATION_POINT_SLOTS,
            _ => &[],
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, SpecialKind::ParseError | SpecialKind::VariationPoint)
    }
}

/// The kind tag of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    C(c::Kind),
    Cpp(cpp::Kind),
    Java(java::Kind),
    JavaScript(javascript::Kind),
    Python(python::Kind),
    Rust(rust::Kind),
    TypeScript(typescript::Kind),
    Tsx(tsx::Kind),
    Special(SpecialKind),
}

/// Applies the same expression to whichever language kind is inside a
/// [`NodeKind`].
macro_rules! per_language {
    ($value:expr, $kind:ident => $language_expr:expr, $special:ident => $special_expr:expr) => {
        match $value {
            NodeKind::C($kind) => $language_expr,
            NodeKind::Cpp($kind) => $language_expr,
            NodeKind::Java($kind) => $language_expr,
            NodeKind::JavaScript($kind) => $language_expr,
            NodeKind::Python($kind) => $language_expr,
            NodeKind::Rust($kind) => $language_expr,
            NodeKind::TypeScript($kind) => $language_expr,
            NodeKind::Tsx($kind) => $language_expr,
            NodeKind::Special($special) => $special_expr,
        }
    };
}

impl NodeKind {
    /// Grammar production name, or the special kind's name.
    #[must_use]
    pub const fn production(self) -> &'static str {
        per_language!(self, kind => kind.production(), special => special.name())
    }

    /// `None` for special kinds, which belong to every language.
    #[must_use]
    pub const fn language(self) -> Option<Language> {
        match self {
            NodeKind::C(_) => Some(Language::C),
            NodeKind::Cpp(_) => Some(Language::Cpp),
            NodeKind::Java(_) => Some(Language::Java),
            NodeKind::JavaScript(_) => Some(Language::JavaScript),
            NodeKind::Python(_) => Some(Language::Python),
            NodeKind::Rust(_) => Some(Language::Rust),
            NodeKind::TypeScript(_) => Some(Language::TypeScript),
            NodeKind::Tsx(_) => Some(Language::Tsx),
            NodeKind::Special(_) => None,
        }
    }

    #[must_use]
    pub const fn capabilities(self) -> CapabilitySet {
        per_language!(self, kind => kind.capabilities(), special => special.capabilities())
    }

    #[must_use]
    pub const fn has_capability(self, capability: Capability) -> bool {
        self.capabilities().contains(capability)
    }

    #[must_use]
    pub const fn slots(self) -> &'static [SlotDecl] {
        per_language!(self, kind => kind.slots(), special => special.slots())
    }

    /// A leaf that carries raw text and never has structured children.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        per_language!(self, kind => kind.is_terminal(), special => special.is_terminal())
    }

    #[must_use]
    pub const fn is_terminal_symbol(self) -> bool {
        matches!(self, NodeKind::Special(SpecialKind::TerminalSymbol))
    }

    #[must_use]
    pub const fn is_trivia(self) -> bool {
        self.has_capability(Capability::Trivia)
    }

    #[must_use]
    pub const fn is_error(self) -> bool {
        self.has_capability(Capability::Error)
    }

    /// The declaration of `slot`, if this kind declares it.
    #[must_use]
    pub fn slot(self, slot: Slot) -> Option<SlotDecl> {
        self.slots().iter().copied().find(|decl| decl.slot == slot)
    }

    /// Position of `slot` in [`NodeKind::slots`].
    #[must_use]
    pub fn slot_index(self, slot: Slot) -> Option<usize> {
        self.slots().iter().position(|decl| decl.slot == slot)
    }

    /// Like [`NodeKind::slot`], failing with [`AstError::UndeclaredSlot`].
    ///
    /// # Errors
    ///
    /// Fails when the kind does not declare the slot.
    pub fn require_slot(self, slot: Slot) -> Result<SlotDecl, AstError> {
        self.slot(slot).ok_or_else(|| AstError::UndeclaredSlot {
            kind: self,
            slot: slot.name().to_string(),
        })
    }

    /// Looks a slot up by name. Unknown names and names the kind does not
    /// declare both fail with [`AstError::UndeclaredSlot`].
    ///
    /// # Errors
    ///
    /// Fails when the name is not a declared slot of this kind.
    pub fn slot_by_name(self, name: &str) -> Result<SlotDecl, AstError> {
        Slot::from_name(name)
            .and_then(|slot| self.slot(slot))
            .ok_or_else(|| AstError::UndeclaredSlot {
                kind: self,
                slot: name.to_string(),
            })
    }

    /// The slot that collects unassigned children, if any.
    #[must_use]
    pub fn rest_slot(self) -> Option<SlotDecl> {
        self.slots().iter().copied().find(|decl| decl.rest)
    }

    /// Maps a grammar production name of `language` to its kind.
    #[must_use]
    pub fn resolve(language: Language, production: &str) -> Option<NodeKind> {
        match language {
            Language::C => c::Kind::from_production(production).map(NodeKind::C),
            Language::Cpp => cpp::Kind::from_production(production).map(NodeKind::Cpp),
            Language::Java => java::Kind::from_production(production).map(NodeKind::Java),
            Language::JavaScript => {
                javascript::Kind::from_production(production).map(NodeKind::JavaScript)
            }
            Language::Python => python::Kind::from_production(production).map(NodeKind::Python),
            Language::Rust => rust::Kind::from_production(production).map(NodeKind::Rust),
            Language::TypeScript => {
                typescript::Kind::from_production(production).map(NodeKind::TypeScript)
            }
            Language::Tsx => tsx::Kind::from_production(production).map(NodeKind::Tsx),
        }
    }

    /// Every kind declared for `language`, in declaration order.
    #[must_use]
    pub fn all(language: Language) -> Vec<NodeKind> {
        match language {
            Language::C => c::Kind::ALL.iter().copied().map(NodeKind::C).collect(),
            Language::Cpp => cpp::Kind::ALL.iter().copied().map(NodeKind::Cpp).collect(),
            Language::Java => java::Kind::ALL.iter().copied().map(NodeKind::Java).collect(),
            Language::JavaScript => javascript::Kind::ALL
                .iter()
                .copied()
                .map(NodeKind::JavaScript)
                .collect(),
            Language::Python => python::Kind::ALL.iter().copied().map(NodeKind::Python).collect(),
            Language::Rust => rust::Kind::ALL.iter().copied().map(NodeKind::Rust).collect(),
            Language::TypeScript => typescript::Kind::ALL
                .iter()
                .copied()
                .map(NodeKind::TypeScript)
                .collect(),
            Language::Tsx => tsx::Kind::ALL.iter().copied().map(NodeKind::Tsx).collect(),
        }
    }
}

impl From<SpecialKind> for NodeKind {
    fn from(kind: SpecialKind) -> Self {
        NodeKind::Special(kind)
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.language() {
            Some(language) => write!(f, "{language}:{}", self.production()),
            None => f.write_str(self.production()),
        }
    }
}
