#![warn(clippy::pedantic)]
//! Language-normalized queries over polyglot syntax trees.
//!
//! A C `foo(a, b)`, a Java `foo(a, b)` and a Python `foo(a, b)` store their
//! callee in different slots (`function`, `name`), and a C function keeps its
//! name at the bottom of a declarator chain. The queries here hide those
//! differences: each language states, per kind, where the pieces live
//! ([`rules::Role`]), and the queries follow that rule.
//!
//! ```ignore
//! for call in polyglot_semantics::calls(&tree) {
//!     let call = call?;
//!     println!("{} with {} arguments", call.function.text(), call.arguments.len());
//! }
//! ```

pub mod errors;
mod lang;
pub mod rules;

use polyglot_ast::capability::Capability;
use polyglot_ast::slot::Slot;
use polyglot_ast::{Node, NodeKind, Tree};
use tracing::trace;

pub use errors::QueryError;
use rules::{CallRule, FunctionRule, ListRule, NameRule, Role, Semantics};

/// The extraction rule of `kind`.
#[must_use]
pub fn role(kind: NodeKind) -> Role {
    match kind {
        NodeKind::C(kind) => kind.role(),
        NodeKind::Cpp(kind) => kind.role(),
        NodeKind::Java(kind) => kind.role(),
        NodeKind::JavaScript(kind) => kind.role(),
        NodeKind::Python(kind) => kind.role(),
        NodeKind::Rust(kind) => kind.role(),
        NodeKind::TypeScript(kind) => kind.role(),
        NodeKind::Tsx(kind) => kind.role(),
        NodeKind::Special(_) => Role::Other,
    }
}

/// The node a call invokes: the function expression, method name or
/// constructed type.
///
/// # Errors
///
/// [`QueryError::CapabilityNotSupported`] when `node` is not a call.
pub fn call_function(node: Node<'_>) -> Result<Node<'_>, QueryError> {
    let rule = call_rule(node)?;
    Ok(node.one(rule.callee)?)
}

/// Arguments of a call in source order, without the surrounding
/// punctuation.
///
/// # Errors
///
/// [`QueryError::CapabilityNotSupported`] when `node` is not a call.
pub fn call_arguments(node: Node<'_>) -> Result<Vec<Node<'_>>, QueryError> {
    let rule = call_rule(node)?;
    read_list(node, rule.arguments)
}

/// Name of a function, `None` for lambdas, closures and anonymous function
/// expressions.
///
/// # Errors
///
/// [`QueryError::CapabilityNotSupported`] when `node` is not a function.
pub fn function_name(node: Node<'_>) -> Result<Option<&str>, QueryError> {
    let rule = function_rule(node)?;
    let name = match rule.name {
        NameRule::Slot(slot) => first(node, slot)?,
        NameRule::Declarator(slot) => declarator_chain(node, slot)?
            .into_iter()
            .find(|n| n.has_capability(Capability::Identifier)),
        NameRule::Anonymous => None,
    };
    Ok(name.map(Node::text))
}

/// Parameters of a function in source order.
///
/// # Errors
///
/// [`QueryError::CapabilityNotSupported`] when `node` is not a function.
pub fn function_parameters(node: Node<'_>) -> Result<Vec<Node<'_>>, QueryError> {
    let rule = function_rule(node)?;
    let mut parameters = Vec::new();
    for list in rule.parameters {
        parameters.extend(read_list(node, *list)?);
    }
    Ok(parameters)
}

/// Body of a function, `None` for declarations without one (abstract Java
/// methods).
///
/// # Errors
///
/// [`QueryError::CapabilityNotSupported`] when `node` is not a function.
pub fn function_body(node: Node<'_>) -> Result<Option<Node<'_>>, QueryError> {
    let rule = function_rule(node)?;
    first(node, rule.body)
}

/// A call with its pieces resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallSite<'t> {
    pub node: Node<'t>,
    pub function: Node<'t>,
    pub arguments: Vec<Node<'t>>,
}

/// A function with its pieces resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionShape<'t> {
    pub node: Node<'t>,
    pub name: Option<&'t str>,
    pub parameters: Vec<Node<'t>>,
    pub body: Option<Node<'t>>,
}

/// Every call in `tree`, in document order.
pub fn calls(tree: &Tree) -> impl Iterator<Item = Result<CallSite<'_>, QueryError>> {
    tree.nodes_with(Capability::Call).map(|node| {
        Ok(CallSite {
            node,
            function: call_function(node)?,
            arguments: call_arguments(node)?,
        })
    })
}

/// Every function in `tree`, in document order.
pub fn functions(tree: &Tree) -> impl Iterator<Item = Result<FunctionShape<'_>, QueryError>> {
    tree.nodes_with(Capability::Function).map(|node| {
        Ok(FunctionShape {
            node,
            name: function_name(node)?,
            parameters: function_parameters(node)?,
            body: function_body(node)?,
        })
    })
}

fn call_rule(node: Node<'_>) -> Result<CallRule, QueryError> {
    require(node, Capability::Call)?;
    match role(node.kind()) {
        Role::Call(rule) => Ok(rule),
        _ => Err(QueryError::UnhandledKind {
            operation: "call",
            kind: node.kind(),
        }),
    }
}

fn function_rule(node: Node<'_>) -> Result<FunctionRule, QueryError> {
    require(node, Capability::Function)?;
    match role(node.kind()) {
        Role::Function(rule) => Ok(rule),
        _ => Err(QueryError::UnhandledKind {
            operation: "function",
            kind: node.kind(),
        }),
    }
}

fn require(node: Node<'_>, capability: Capability) -> Result<(), QueryError> {
    if node.has_capability(capability) {
        Ok(())
    } else {
        Err(QueryError::CapabilityNotSupported {
            kind: node.kind(),
            capability,
        })
    }
}

/// First node of a slot of any arity.
fn first(node: Node<'_>, slot: Slot) -> Result<Option<Node<'_>>, QueryError> {
    Ok(node.get_slot(slot)?.into_nodes().into_iter().next())
}

fn read_list(node: Node<'_>, rule: ListRule) -> Result<Vec<Node<'_>>, QueryError> {
    match rule {
        ListRule::Items(slot) => items(node, slot),
        // The innermost list is the function's own. In `int (*get(void))(int)`
        // the outer one belongs to the returned pointer type.
        ListRule::Declarator(slot) => {
            let chain = declarator_chain(node, slot)?;
            match chain
                .into_iter()
                .rev()
                .find(|n| n.kind().slot(Slot::Parameters).is_some())
            {
                Some(declarator) => items(declarator, Slot::Parameters),
                None => {
                    trace!(
                        kind = %node.kind(),
                        %slot,
                        "declarator chain without a parameter list"
                    );
                    Ok(Vec::new())
                }
            }
        }
        ListRule::Absent => Ok(Vec::new()),
    }
}

/// Nodes of `slot`, with list nodes replaced by their items.
fn items(node: Node<'_>, slot: Slot) -> Result<Vec<Node<'_>>, QueryError> {
    let mut out = Vec::new();
    for held in node.get_slot(slot)?.into_nodes() {
        if held.kind().slot(Slot::Items).is_some() {
            out.extend(held.many(Slot::Items)?);
        } else {
            out.push(held);
        }
    }
    Ok(out)
}

/// The node in `slot`, then the nodes reached through `declarator` slots,
/// outermost first.
fn declarator_chain(node: Node<'_>, slot: Slot) -> Result<Vec<Node<'_>>, QueryError> {
    let mut chain = Vec::new();
    let mut current = first(node, slot)?;
    while let Some(declarator) = current {
        chain.push(declarator);
        current = if declarator.kind().slot(Slot::Declarator).is_some() {
            first(declarator, Slot::Declarator)?
        } else {
            None
        };
    }
    Ok(chain)
}
