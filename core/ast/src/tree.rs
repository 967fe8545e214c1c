//! Arena storage for normalized syntax trees.
//!
//! A [`Tree`] owns its source text and a flat vector of nodes addressed by
//! [`NodeId`]. The root is always `NodeId(0)` and ids follow pre-order.
//! Terminal nodes store no text of their own: the text of any node is the
//! slice of the source covered by its span, so concatenating the leaves in
//! order reproduces the source exactly.

use core::fmt;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::capability::Capability;
use crate::errors::AstError;
use crate::kind::{NodeKind, SpecialKind};
use crate::language::Language;
use crate::node::Node;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Half-open byte range `[start, end)` into the tree's source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub offset_start: u32,
    pub offset_end: u32,
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.start_line, self.start_column)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct NodeData {
    pub(crate) kind: NodeKind,
    pub(crate) span: Span,
    pub(crate) parent: Option<NodeId>,
    /// Every child in source order, trivia and terminal symbols included.
    /// Variation point alternatives are not children.
    pub(crate) children: Vec<NodeId>,
    /// One entry per slot declared by `kind`, in declaration order.
    pub(crate) slots: Vec<Vec<NodeId>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TreeRepr")]
pub struct Tree {
    language: Language,
    source: String,
    nodes: Vec<NodeData>,
    #[serde(skip)]
    line_starts: Vec<usize>,
}

/// Unvalidated wire form of a [`Tree`].
#[derive(Deserialize)]
struct TreeRepr {
    language: Language,
    source: String,
    nodes: Vec<NodeData>,
}

impl TryFrom<TreeRepr> for Tree {
    type Error = AstError;

    fn try_from(repr: TreeRepr) -> Result<Self, Self::Error> {
        let tree = Tree::from_parts(repr.language, repr.source, repr.nodes);
        tree.validate()?;
        Ok(tree)
    }
}

impl Tree {
    pub(crate) fn from_parts(language: Language, source: String, nodes: Vec<NodeData>) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            language,
            source,
            nodes,
            line_starts,
        }
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn root(&self) -> Node<'_> {
        self.node(NodeId::ROOT)
    }

    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Node<'_> {
        assert!(id.index() < self.nodes.len(), "node {id} is out of bounds");
        Node::new(self, id)
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<Node<'_>> {
        (id.index() < self.nodes.len()).then(|| Node::new(self, id))
    }

    pub(crate) fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }

    /// All nodes in id order, detached alternatives included.
    #[allow(clippy::cast_possible_truncation)]
    pub fn nodes(&self) -> impl Iterator<Item = Node<'_>> {
        (0..self.nodes.len()).map(|i| Node::new(self, NodeId(i as u32)))
    }

    /// Nodes reachable from the root through children whose kind carries
    /// `capability`, in pre-order.
    pub fn nodes_with(&self, capability: Capability) -> impl Iterator<Item = Node<'_>> {
        self.root()
            .descendants()
            .filter(move |node| node.has_capability(capability))
    }

    /// Concatenated text of the leaves in order. Equals [`Tree::source`] for
    /// every valid tree.
    #[must_use]
    pub fn to_source(&self) -> String {
        self.root().leaves().map(|leaf| leaf.text()).collect()
    }

    pub(crate) fn location(&self, span: Span) -> Location {
        let (start_line, start_column) = self.line_column(span.start);
        let (end_line, end_column) = self.line_column(span.end);
        #[allow(clippy::cast_possible_truncation)]
        Location {
            offset_start: span.start as u32,
            offset_end: span.end as u32,
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }

    /// 1-based line and byte column of `offset`.
    #[allow(clippy::cast_possible_truncation)]
    fn line_column(&self, offset: usize) -> (u32, u32) {
        let line = self.line_starts.partition_point(|start| *start <= offset) - 1;
        (line as u32 + 1, (offset - self.line_starts[line]) as u32 + 1)
    }

    /// Checks the structural invariants every tree must satisfy: parent links
    /// agree with children, children tile their parent's span, slot contents
    /// match the taxonomy and the root covers the whole source.
    ///
    /// # Errors
    ///
    /// Returns [`AstError::MalformedTree`] describing the first violation.
    pub fn validate(&self) -> Result<(), AstError> {
        let special = |reason: String| {
            AstError::malformed(NodeKind::Special(SpecialKind::ParseError), None, reason)
        };
        if self.nodes.len() > u32::MAX as usize {
            return Err(special("too many nodes".to_string()));
        }
        let Some(root) = self.nodes.first() else {
            return Err(special("tree has no root".to_string()));
        };
        if root.parent.is_some() {
            return Err(AstError::malformed(root.kind, None, "root has a parent"));
        }
        if root.span != Span::new(0, self.source.len()) {
            return Err(AstError::malformed(
                root.kind,
                None,
                format!(
                    "root spans {}..{} but the source has {} bytes",
                    root.span.start,
                    root.span.end,
                    self.source.len()
                ),
            ));
        }

        let mut owners = vec![0usize; self.nodes.len()];
        for (index, data) in self.nodes.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let id = NodeId(index as u32);
            self.validate_node(id, data, &mut owners)?;
        }
        for (index, count) in owners.iter().enumerate().skip(1) {
            if *count != 1 {
                let kind = self.nodes[index].kind;
                return Err(AstError::malformed(
                    kind,
                    None,
                    format!("node #{index} is referenced {count} times by its parent"),
                ));
            }
        }
        Ok(())
    }

    fn validate_node(
        &self,
        id: NodeId,
        data: &NodeData,
        owners: &mut [usize],
    ) -> Result<(), AstError> {
        let kind = data.kind;
        let fail = |reason: String| Err(AstError::malformed(kind, None, reason));

        if let Some(language) = kind.language()
            && language != self.language
        {
            return fail(format!("kind belongs to {language}, tree is {}", self.language));
        }
        if data.span.start > data.span.end
            || data.span.end > self.source.len()
            || !self.source.is_char_boundary(data.span.start)
            || !self.source.is_char_boundary(data.span.end)
        {
            return fail(format!(
                "span {}..{} is not a valid source range",
                data.span.start, data.span.end
            ));
        }
        if kind.is_terminal() && (!data.children.is_empty() || !data.slots.is_empty()) {
            return fail("terminal node has children".to_string());
        }

        let mut cursor = data.span.start;
        for child in &data.children {
            let Some(child_data) = self.nodes.get(child.index()) else {
                return fail(format!("child {child} does not exist"));
            };
            if child_data.parent != Some(id) {
                return fail(format!("child {child} does not point back to its parent"));
            }
            if child_data.span.start != cursor {
                return fail(format!(
                    "child {child} starts at byte {}, expected {cursor}",
                    child_data.span.start
                ));
            }
            cursor = child_data.span.end;
            owners[child.index()] += 1;
        }
        // Leaves cover their span with their own text.
        if !kind.is_terminal() && cursor != data.span.end {
            return fail(format!(
                "children end at byte {cursor}, node ends at {}",
                data.span.end
            ));
        }

        let decls = kind.slots();
        if decls.len() != data.slots.len() {
            return fail(format!(
                "{} slots stored, {} declared",
                data.slots.len(),
                decls.len()
            ));
        }
        for (decl, ids) in decls.iter().zip(&data.slots) {
            if !decl.arity.accepts(ids.len()) {
                return Err(AstError::malformed(
                    kind,
                    Some(decl.slot),
                    format!("holds {} children, arity is {}", ids.len(), decl.arity),
                ));
            }
            for slotted in ids {
                let Some(slotted_data) = self.nodes.get(slotted.index()) else {
                    return fail(format!("slotted node {slotted} does not exist"));
                };
                if slotted_data.parent != Some(id) {
                    return Err(AstError::malformed(
                        kind,
                        Some(decl.slot),
                        format!("slotted node {slotted} belongs to another parent"),
                    ));
                }
                if decl.slot == crate::slot::Slot::Alternatives
                    && kind == NodeKind::Special(SpecialKind::VariationPoint)
                {
                    if slotted_data.span.start < data.span.start
                        || slotted_data.span.end > data.span.end
                    {
                        return Err(AstError::malformed(
                            kind,
                            Some(decl.slot),
                            "alternative reaches outside the raw region",
                        ));
                    }
                    owners[slotted.index()] += 1;
                } else if !data.children.contains(slotted) {
                    return Err(AstError::malformed(
                        kind,
                        Some(decl.slot),
                        format!("slotted node {slotted} is not a child"),
                    ));
                }
            }
        }
        Ok(())
    }
}
