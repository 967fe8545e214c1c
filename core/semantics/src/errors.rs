use polyglot_ast::capability::Capability;
use polyglot_ast::{AstError, NodeKind};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The node's kind does not carry the capability the query is about,
    /// e.g. asking a loop for its callee.
    #[error("`{kind}` does not support `{capability}` queries")]
    CapabilityNotSupported {
        kind: NodeKind,
        capability: Capability,
    },

    /// The kind carries the capability but has no extraction rule.
    #[error("no `{operation}` rule for `{kind}`")]
    UnhandledKind {
        operation: &'static str,
        kind: NodeKind,
    },

    #[error(transparent)]
    Ast(#[from] AstError),
}
