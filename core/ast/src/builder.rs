//! Incremental construction of [`Tree`]s.
//!
//! The `TreeBuilder` receives a pre-order stream of events: nodes are opened
//! with [`TreeBuilder::start_node`], filled with leaves and nested nodes, and
//! closed with [`TreeBuilder::finish_node`]. Leaves carry their source text
//! and the tree's source is the concatenation of every leaf, so a finished
//! tree always reproduces its input.
//!
//! Event methods never fail. Contract violations (undeclared slots, arity
//! violations, unbalanced calls, alternatives that do not replay their raw
//! region) are collected and the first one is reported by
//! [`TreeBuilder::finish`].
//!
//! # Example
//!
//! ```
//! use polyglot_ast::builder::TreeBuilder;
//! use polyglot_ast::language::Language;
//! use polyglot_ast::languages::python::Kind;
//! use polyglot_ast::slot::Slot;
//!
//! let mut builder = TreeBuilder::new(Language::Python);
//! builder.start_node(Kind::Module);
//! builder.start_node(Kind::ExpressionStatement);
//! builder.start_node(Kind::Call);
//! builder.token_in(Slot::Function, Kind::Identifier, "f");
//! builder.start_node_in(Slot::Arguments, Kind::ArgumentList);
//! builder.symbol("(");
//! builder.symbol(")");
//! builder.finish_node();
//! builder.finish_node();
//! builder.finish_node();
//! builder.finish_node();
//! let tree = builder.finish().unwrap();
//! assert_eq!(tree.to_source(), "f()");
//! ```

use crate::errors::AstError;
use crate::kind::{NodeKind, SpecialKind};
use crate::language::Language;
use crate::slot::Slot;
use crate::tree::{NodeData, NodeId, Span, Tree};

struct Pending {
    id: NodeId,
    slot: Option<Slot>,
    /// Attached to a variation point's alternatives, not to its children.
    detached: bool,
}

struct OpenNode {
    id: NodeId,
    pending: Vec<Pending>,
}

/// Replay cursor of an alternative being built over an already emitted raw
/// region.
struct Replay {
    cursor: usize,
    end: usize,
}

pub struct TreeBuilder {
    language: Language,
    source: String,
    nodes: Vec<NodeData>,
    stack: Vec<OpenNode>,
    replays: Vec<Replay>,
    errors: Vec<AstError>,
}

impl TreeBuilder {
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            language,
            source: String::new(),
            nodes: Vec::new(),
            stack: Vec::new(),
            replays: Vec::new(),
            errors: Vec::new(),
        }
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Byte offset the next leaf starts at.
    #[must_use]
    pub fn position(&self) -> usize {
        self.replays
            .last()
            .map_or(self.source.len(), |replay| replay.cursor)
    }

    /// Number of open nodes.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Kind of the innermost open node.
    #[must_use]
    pub fn current_kind(&self) -> Option<NodeKind> {
        self.stack.last().map(|open| self.nodes[open.id.index()].kind)
    }

    pub fn start_node(&mut self, kind: impl Into<NodeKind>) {
        self.open(None, kind.into(), false);
    }

    pub fn start_node_in(&mut self, slot: Slot, kind: impl Into<NodeKind>) {
        self.open(Some(slot), kind.into(), false);
    }

    /// Opens an alternative parse of the innermost variation point. Leaves
    /// added until the matching [`TreeBuilder::finish_node`] must replay the
    /// raw region of the variation point from its start.
    pub fn start_alternative(&mut self, kind: impl Into<NodeKind>) {
        let kind = kind.into();
        let Some(open) = self.stack.last() else {
            self.unbalanced("alternative started outside of a variation point");
            return;
        };
        let owner = &self.nodes[open.id.index()];
        if owner.kind != NodeKind::Special(SpecialKind::VariationPoint) {
            let owner_kind = owner.kind;
            self.errors.push(AstError::malformed(
                owner_kind,
                Some(Slot::Alternatives),
                "alternatives can only be added to variation points",
            ));
            return;
        }
        let replay = Replay {
            cursor: owner.span.start,
            end: self.position(),
        };
        self.replays.push(replay);
        self.open(Some(Slot::Alternatives), kind, true);
    }

    fn open(&mut self, slot: Option<Slot>, kind: NodeKind, detached: bool) {
        if kind.is_terminal() {
            self.errors.push(AstError::malformed(
                kind,
                slot,
                "terminal kinds are added as leaves, not opened",
            ));
        }
        self.check_language(kind);
        if self.stack.is_empty() && !self.nodes.is_empty() {
            self.unbalanced("a second root node was started");
            return;
        }
        let start = self.position();
        let id = self.push(kind, Span::new(start, start), slot, detached);
        self.stack.push(OpenNode {
            id,
            pending: Vec::new(),
        });
    }

    /// Closes the innermost open node, distributing its children over the
    /// slots its kind declares.
    pub fn finish_node(&mut self) {
        let Some(open) = self.stack.pop() else {
            self.unbalanced("finish_node without a matching start_node");
            return;
        };
        let data = &self.nodes[open.id.index()];
        let kind = data.kind;
        let decls = kind.slots();
        let rest = decls.iter().position(|decl| decl.rest);
        let mut slots = vec![Vec::new(); decls.len()];
        let mut children = Vec::with_capacity(open.pending.len());

        for pending in &open.pending {
            if !pending.detached {
                children.push(pending.id);
            }
            let child_kind = self.nodes[pending.id.index()].kind;
            let index = match pending.slot {
                Some(slot) => match kind.slot_index(slot) {
                    Some(index) => Some(index),
                    None => {
                        self.errors.push(AstError::UndeclaredSlot {
                            kind,
                            slot: slot.name().to_string(),
                        });
                        None
                    }
                },
                None if child_kind.is_trivia() || child_kind.is_terminal_symbol() => None,
                None => rest,
            };
            if let Some(index) = index {
                slots[index].push(pending.id);
            }
        }

        for (decl, ids) in decls.iter().zip(&slots) {
            if !decl.arity.accepts(ids.len()) {
                self.errors.push(AstError::malformed(
                    kind,
                    Some(decl.slot),
                    format!("received {} children, arity is {}", ids.len(), decl.arity),
                ));
            }
        }

        let is_alternative = self.is_detached(open.id);
        let end = self.position();
        let data = &mut self.nodes[open.id.index()];
        data.span.end = end;
        data.children = children;
        data.slots = slots;
        if is_alternative {
            self.replays.pop();
        }
    }

    fn is_detached(&self, id: NodeId) -> bool {
        self.stack.last().is_some_and(|parent| {
            parent
                .pending
                .iter()
                .any(|pending| pending.id == id && pending.detached)
        })
    }

    /// Adds a leaf of a terminal kind.
    pub fn token(&mut self, kind: impl Into<NodeKind>, text: &str) {
        self.leaf(None, kind.into(), text);
    }

    pub fn token_in(&mut self, slot: Slot, kind: impl Into<NodeKind>, text: &str) {
        self.leaf(Some(slot), kind.into(), text);
    }

    /// Adds an operator, keyword or punctuation leaf.
    pub fn symbol(&mut self, text: &str) {
        self.leaf(None, SpecialKind::TerminalSymbol.into(), text);
    }

    pub fn symbol_in(&mut self, slot: Slot, text: &str) {
        self.leaf(Some(slot), SpecialKind::TerminalSymbol.into(), text);
    }

    pub fn whitespace(&mut self, text: &str) {
        self.leaf(None, SpecialKind::InnerWhitespace.into(), text);
    }

    pub fn comment(&mut self, text: &str) {
        self.leaf(None, SpecialKind::Comment.into(), text);
    }

    pub fn blot(&mut self, text: &str) {
        self.leaf(None, SpecialKind::Blot.into(), text);
    }

    pub fn blot_in(&mut self, slot: Slot, text: &str) {
        self.leaf(Some(slot), SpecialKind::Blot.into(), text);
    }

    /// Adds raw text the parser could not structure.
    pub fn error(&mut self, text: &str) {
        self.leaf(None, SpecialKind::ErrorTree.into(), text);
    }

    pub fn error_in(&mut self, slot: Slot, text: &str) {
        self.leaf(Some(slot), SpecialKind::ErrorTree.into(), text);
    }

    fn leaf(&mut self, slot: Option<Slot>, kind: NodeKind, text: &str) {
        if !kind.is_terminal() {
            self.errors.push(AstError::malformed(
                kind,
                slot,
                "structured kinds are opened with start_node",
            ));
        }
        self.check_language(kind);
        if self.stack.is_empty() {
            self.unbalanced("leaf added outside of any node");
            return;
        }
        let start = self.position();
        if let Some(replay) = self.replays.last_mut() {
            let fits = replay.cursor + text.len() <= replay.end
                && self.source[replay.cursor..].starts_with(text);
            if !fits {
                self.errors.push(AstError::AlternativeMismatch {
                    offset: replay.cursor,
                    found: text.to_string(),
                });
                return;
            }
            replay.cursor += text.len();
        } else {
            self.source.push_str(text);
        }
        self.push(kind, Span::new(start, start + text.len()), slot, false);
    }

    fn push(&mut self, kind: NodeKind, span: Span, slot: Option<Slot>, detached: bool) -> NodeId {
        // Trees above `u32::MAX` nodes are rejected by `Tree::validate`.
        #[allow(clippy::cast_possible_truncation)]
        let id = NodeId(self.nodes.len() as u32);
        let parent = self.stack.last_mut().map(|open| {
            open.pending.push(Pending { id, slot, detached });
            open.id
        });
        self.nodes.push(NodeData {
            kind,
            span,
            parent,
            children: Vec::new(),
            slots: Vec::new(),
        });
        id
    }

    fn check_language(&mut self, kind: NodeKind) {
        if let Some(language) = kind.language()
            && language != self.language
        {
            self.errors.push(AstError::malformed(
                kind,
                None,
                format!("kind belongs to {language}, builder is for {}", self.language),
            ));
        }
    }

    fn unbalanced(&mut self, reason: &str) {
        self.errors.push(AstError::UnbalancedBuilder {
            reason: reason.to_string(),
        });
    }

    /// Completes the tree.
    ///
    /// # Errors
    ///
    /// Returns the first contract violation recorded while building, or
    /// [`AstError::UnbalancedBuilder`] when nodes are still open or no root
    /// was started.
    pub fn finish(self) -> Result<Tree, AstError> {
        if let Some(error) = self.errors.into_iter().next() {
            return Err(error);
        }
        if !self.stack.is_empty() {
            return Err(AstError::UnbalancedBuilder {
                reason: format!("{} nodes are still open", self.stack.len()),
            });
        }
        if self.nodes.is_empty() {
            return Err(AstError::UnbalancedBuilder {
                reason: "no root node was started".to_string(),
            });
        }
        let tree = Tree::from_parts(self.language, self.source, self.nodes);
        tree.validate()?;
        Ok(tree)
    }
}
