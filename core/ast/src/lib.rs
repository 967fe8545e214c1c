#![warn(clippy::pedantic)]
//! Capability-tagged syntax trees shared by several language grammars.
//!
//! Each dialect declares its node kinds with [`grammar!`]; every kind carries
//! a set of [`capability::Capability`] tags and named [`slot::Slot`]s, so the
//! same question (what does this call invoke, what is this loop's body) can
//! be asked of C, Java, Python or Rust trees alike. Trees are stored in an
//! arena ([`tree::Tree`]) and reproduce their source text exactly.

#[macro_use]
mod grammar;

pub mod builder;
pub mod capability;
pub mod cst;
pub mod errors;
pub mod kind;
pub mod language;
pub mod languages;
pub mod node;
pub mod slot;
pub mod taxonomy;
pub mod tree;

pub use errors::AstError;
pub use kind::{NodeKind, SpecialKind};
pub use language::Language;
pub use node::Node;
pub use tree::{NodeId, Tree};
