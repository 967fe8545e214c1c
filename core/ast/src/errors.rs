//! Error types for the AST crate.
//!
//! Every variant is a contract violation between the tree and its caller or
//! its producer. Unparseable source is not an error here: it is represented
//! in the tree itself by the error node kinds (see [`SpecialKind`]).
//!
//! [`SpecialKind`]: crate::kind::SpecialKind

use thiserror::Error;

use crate::kind::NodeKind;
use crate::slot::{Arity, Slot};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum AstError {
    /// The caller asked for a slot that the node kind does not declare.
    #[error("slot `{slot}` is not declared for node kind `{kind}`")]
    UndeclaredSlot { kind: NodeKind, slot: String },

    /// A slot was accessed through a shortcut of the wrong arity,
    /// e.g. `many` on a singular slot.
    #[error("slot `{slot}` of `{kind}` has arity {declared}, requested {requested}")]
    ArityMismatch {
        kind: NodeKind,
        slot: Slot,
        declared: Arity,
        requested: Arity,
    },

    /// Stored children disagree with the declarations of the taxonomy.
    #[error("malformed tree at `{kind}`{}: {reason}", slot_suffix(.slot))]
    MalformedTree {
        kind: NodeKind,
        slot: Option<Slot>,
        reason: String,
    },

    /// `start_node`/`finish_node` calls of a builder do not pair up.
    #[error("unbalanced tree builder: {reason}")]
    UnbalancedBuilder { reason: String },

    /// Text fed to a variation point alternative does not match the raw region.
    #[error("alternative text {found:?} does not match the raw region at byte {offset}")]
    AlternativeMismatch { offset: usize, found: String },
}

impl AstError {
    pub(crate) fn malformed(kind: NodeKind, slot: Option<Slot>, reason: impl Into<String>) -> Self {
        AstError::MalformedTree {
            kind,
            slot,
            reason: reason.into(),
        }
    }
}

#[allow(clippy::ref_option)]
fn slot_suffix(slot: &Option<Slot>) -> String {
    slot.map(|slot| format!(" slot `{slot}`")).unwrap_or_default()
}
