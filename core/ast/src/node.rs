use core::fmt;
use std::fmt::Write as _;

use crate::capability::{Capability, CapabilitySet};
use crate::errors::AstError;
use crate::kind::NodeKind;
use crate::language::Language;
use crate::slot::{Arity, Slot, SlotDecl, SlotValue};
use crate::tree::{Location, NodeData, NodeId, Span, Tree};

/// A borrowed view of one node of a [`Tree`].
#[derive(Clone, Copy)]
pub struct Node<'t> {
    tree: &'t Tree,
    id: NodeId,
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for Node<'_> {}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let span = self.span();
        write!(f, "{}{} @ {}..{}", self.kind(), self.id, span.start, span.end)
    }
}

impl<'t> Node<'t> {
    pub(crate) fn new(tree: &'t Tree, id: NodeId) -> Self {
        Self { tree, id }
    }

    fn data(self) -> &'t NodeData {
        self.tree.data(self.id)
    }

    #[must_use]
    pub fn id(self) -> NodeId {
        self.id
    }

    #[must_use]
    pub fn tree(self) -> &'t Tree {
        self.tree
    }

    #[must_use]
    pub fn kind(self) -> NodeKind {
        self.data().kind
    }

    #[must_use]
    pub fn language(self) -> Language {
        self.tree.language()
    }

    #[must_use]
    pub fn capabilities(self) -> CapabilitySet {
        self.kind().capabilities()
    }

    #[must_use]
    pub fn has_capability(self, capability: Capability) -> bool {
        self.kind().has_capability(capability)
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        self.kind().is_terminal()
    }

    #[must_use]
    pub fn is_trivia(self) -> bool {
        self.kind().is_trivia()
    }

    #[must_use]
    pub fn is_error(self) -> bool {
        self.kind().is_error()
    }

    #[must_use]
    pub fn span(self) -> Span {
        self.data().span
    }

    #[must_use]
    pub fn location(self) -> Location {
        self.tree.location(self.span())
    }

    /// The source text covered by the node.
    #[must_use]
    pub fn text(self) -> &'t str {
        let span = self.span();
        &self.tree.source()[span.start..span.end]
    }

    #[must_use]
    pub fn parent(self) -> Option<Node<'t>> {
        self.data().parent.map(|id| self.tree.node(id))
    }

    /// All children in source order, trivia and terminal symbols included.
    pub fn children(self) -> impl DoubleEndedIterator<Item = Node<'t>> + ExactSizeIterator {
        let tree = self.tree;
        self.data().children.iter().map(move |id| tree.node(*id))
    }

    /// Children that are neither trivia nor terminal symbols.
    pub fn named_children(self) -> impl Iterator<Item = Node<'t>> {
        self.children()
            .filter(|child| !child.is_trivia() && !child.kind().is_terminal_symbol())
    }

    /// The node and everything below it through children, in pre-order.
    /// Variation point alternatives are not visited.
    pub fn descendants(self) -> impl Iterator<Item = Node<'t>> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children().rev());
            Some(node)
        })
    }

    /// Terminal descendants in source order.
    pub fn leaves(self) -> impl Iterator<Item = Node<'t>> {
        self.descendants().filter(|node| node.data().children.is_empty())
    }

    pub(crate) fn slot_at(self, index: usize) -> Result<(SlotDecl, &'t [NodeId]), AstError> {
        let kind = self.kind();
        let decl = kind.slots().get(index).copied().ok_or_else(|| {
            AstError::malformed(kind, None, format!("no slot declared at position {index}"))
        })?;
        let ids = self.data().slots.get(index).ok_or_else(|| {
            AstError::malformed(kind, Some(decl.slot), "slot storage is missing")
        })?;
        Ok((decl, ids.as_slice()))
    }

    fn lookup(self, slot: Slot) -> Result<(SlotDecl, &'t [NodeId]), AstError> {
        let kind = self.kind();
        let index = kind.slot_index(slot).ok_or_else(|| AstError::UndeclaredSlot {
            kind,
            slot: slot.name().to_string(),
        })?;
        self.slot_at(index)
    }

    /// Reads a slot. Singular slots yield [`SlotValue::Single`], plural slots
    /// [`SlotValue::List`]; an unfilled optional slot is `Single(None)` and an
    /// empty plural slot is an empty list.
    ///
    /// # Errors
    ///
    /// [`AstError::UndeclaredSlot`] when the kind does not declare `slot`,
    /// [`AstError::MalformedTree`] when the stored children violate the arity.
    pub fn get_slot(self, slot: Slot) -> Result<SlotValue<'t>, AstError> {
        let (decl, ids) = self.lookup(slot)?;
        let tree = self.tree;
        match decl.arity {
            Arity::Many => Ok(SlotValue::List(ids.iter().map(|id| tree.node(*id)).collect())),
            Arity::One | Arity::Opt => match ids {
                [] if decl.arity == Arity::Opt => Ok(SlotValue::Single(None)),
                [id] => Ok(SlotValue::Single(Some(tree.node(*id)))),
                _ => Err(AstError::malformed(
                    self.kind(),
                    Some(slot),
                    format!("holds {} children, arity is {}", ids.len(), decl.arity),
                )),
            },
        }
    }

    /// Reads a slot by its name.
    ///
    /// # Errors
    ///
    /// [`AstError::UndeclaredSlot`] for names that are not slots of this kind.
    pub fn slot(self, name: &str) -> Result<SlotValue<'t>, AstError> {
        let decl = self.kind().slot_by_name(name)?;
        self.get_slot(decl.slot)
    }

    fn expect_arity(self, slot: Slot, requested: Arity) -> Result<SlotDecl, AstError> {
        let kind = self.kind();
        let decl = kind.require_slot(slot)?;
        let compatible = match requested {
            Arity::One => decl.arity == Arity::One,
            Arity::Opt => decl.arity.is_singular(),
            Arity::Many => decl.arity == Arity::Many,
        };
        if compatible {
            Ok(decl)
        } else {
            Err(AstError::ArityMismatch {
                kind,
                slot,
                declared: decl.arity,
                requested,
            })
        }
    }

    /// The child of a slot declared with arity one.
    ///
    /// # Errors
    ///
    /// Fails for undeclared slots and for slots of another arity.
    pub fn one(self, slot: Slot) -> Result<Node<'t>, AstError> {
        self.expect_arity(slot, Arity::One)?;
        match self.get_slot(slot)? {
            SlotValue::Single(Some(node)) => Ok(node),
            _ => Err(AstError::malformed(self.kind(), Some(slot), "required slot is empty")),
        }
    }

    /// The child of a singular slot, if present.
    ///
    /// # Errors
    ///
    /// Fails for undeclared slots and for plural slots.
    pub fn opt(self, slot: Slot) -> Result<Option<Node<'t>>, AstError> {
        self.expect_arity(slot, Arity::Opt)?;
        Ok(self.get_slot(slot)?.single().flatten())
    }

    /// The children of a plural slot.
    ///
    /// # Errors
    ///
    /// Fails for undeclared slots and for singular slots.
    pub fn many(self, slot: Slot) -> Result<Vec<Node<'t>>, AstError> {
        self.expect_arity(slot, Arity::Many)?;
        Ok(self.get_slot(slot)?.into_nodes())
    }

    /// Every filled slot in declaration order. A slot whose stored children
    /// violate its arity yields the error of [`Node::get_slot`].
    pub fn slots(self) -> impl Iterator<Item = Result<(Slot, SlotValue<'t>), AstError>> {
        self.kind()
            .slots()
            .iter()
            .filter_map(move |decl| match self.get_slot(decl.slot) {
                Ok(value) if value.is_empty() => None,
                Ok(value) => Some(Ok((decl.slot, value))),
                Err(error) => Some(Err(error)),
            })
    }

    /// The slot of the parent this node is stored in, if any.
    #[must_use]
    pub fn parent_slot(self) -> Option<Slot> {
        let parent = self.parent()?;
        parent
            .kind()
            .slots()
            .iter()
            .zip(&parent.data().slots)
            .find(|(_, ids)| ids.contains(&self.id))
            .map(|(decl, _)| decl.slot)
    }

    /// Renders the subtree as an s-expression of kinds and slots. Trivia and
    /// terminal symbols are omitted.
    #[must_use]
    pub fn to_sexp(self) -> String {
        let mut out = String::new();
        self.write_sexp(&mut out, None);
        out
    }

    fn write_sexp(self, out: &mut String, slot: Option<Slot>) {
        if let Some(slot) = slot {
            let _ = write!(out, "{slot}: ");
        }
        if self.is_terminal() {
            let _ = write!(out, "({} {:?})", self.kind().production(), self.text());
            return;
        }
        let _ = write!(out, "({}", self.kind().production());
        let alternatives = self
            .kind()
            .slot_index(Slot::Alternatives)
            .and_then(|index| self.data().slots.get(index))
            .filter(|_| self.kind().is_error());
        for child in self.named_children() {
            out.push(' ');
            child.write_sexp(out, child.parent_slot());
        }
        if let Some(ids) = alternatives {
            for id in ids {
                out.push(' ');
                self.tree.node(*id).write_sexp(out, Some(Slot::Alternatives));
            }
        }
        out.push(')');
    }
}
