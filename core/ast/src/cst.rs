//! Lowering of tree-sitter concrete syntax trees into [`Tree`]s.
//!
//! The lowering walks the concrete tree once, left to right, keeping a byte
//! cursor into the source:
//!
//! - text between tokens that tree-sitter does not cover becomes inner
//!   whitespace, or a blot when it is not whitespace;
//! - anonymous leaves become terminal symbols, named leaves become tokens of
//!   their terminal kind (or generic terminals when the production is not in
//!   the taxonomy);
//! - known internal productions become structured nodes whose fielded
//!   children land in the slot of the same name. A production whose children
//!   violate the declared arities is kept as a parse error instead;
//! - unknown internal productions made of anonymous tokens only (`*` as a
//!   keyword separator, a lone `;`) become unslotted terminal symbols, other
//!   unknown internal productions are kept verbatim as blots;
//! - `ERROR` regions become error trees, or variation points when
//!   [`LowerOptions::variation_points`] is set.
//!
//! Every byte of the source ends up in exactly one leaf.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};
use tree_sitter::Node as TsNode;

use crate::builder::TreeBuilder;
use crate::errors::AstError;
use crate::kind::{NodeKind, SpecialKind};
use crate::language::Language;
use crate::slot::Slot;
use crate::tree::Tree;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LowerOptions {
    /// Package each error region with a best-effort alternative parse of its
    /// contents.
    pub variation_points: bool,
}

/// Lowers the concrete tree rooted at `root`, parsed from `source`.
///
/// # Errors
///
/// Fails only when the produced tree violates the taxonomy, which indicates a
/// bug in the lowering rather than a problem with the input.
pub fn lower(
    language: Language,
    root: TsNode<'_>,
    source: &str,
    options: &LowerOptions,
) -> Result<Tree, AstError> {
    let mut lowerer = Lowerer {
        language,
        source,
        pos: 0,
        builder: TreeBuilder::new(language),
        kinds: FxHashMap::default(),
        options: *options,
        replaying: false,
    };
    lowerer.lower_root(root);
    lowerer.builder.finish()
}

struct Child<'a> {
    node: TsNode<'a>,
    slot: Option<Slot>,
}

struct Lowerer<'s> {
    language: Language,
    source: &'s str,
    /// Byte offset up to which the source has been emitted.
    pos: usize,
    builder: TreeBuilder,
    kinds: FxHashMap<u16, Option<NodeKind>>,
    options: LowerOptions,
    replaying: bool,
}

impl<'s> Lowerer<'s> {
    fn lower_root(&mut self, root: TsNode<'_>) {
        let kind = match self.kind_of(root) {
            Some(kind) if !kind.is_terminal() && self.fits(kind, root) => kind,
            _ => {
                debug!(production = root.kind(), "root lowered as parse error");
                SpecialKind::ParseError.into()
            }
        };
        self.builder.start_node(kind);
        if root.is_error() {
            self.error_region(None, root);
        } else {
            self.lower_children(kind, root);
        }
        self.gap(self.source.len());
        self.builder.finish_node();
    }

    fn kind_of(&mut self, node: TsNode<'_>) -> Option<NodeKind> {
        if !node.is_named() || node.is_error() {
            return None;
        }
        let language = self.language;
        *self
            .kinds
            .entry(node.kind_id())
            .or_insert_with(|| NodeKind::resolve(language, node.kind()))
    }

    /// Children of `node` with the slot each one belongs to in `parent`.
    fn children<'a>(language: Language, parent: NodeKind, node: TsNode<'a>) -> Vec<Child<'a>> {
        let mut cursor = node.walk();
        let mut raw = Vec::with_capacity(node.child_count());
        if cursor.goto_first_child() {
            loop {
                raw.push((cursor.field_name(), cursor.node()));
                if !cursor.goto_next_sibling() {
                    break;
                }
            }
        }
        // A field that holds named nodes ignores punctuation tagged with the
        // same field, e.g. the `;` in `field('condition', seq(expr, ';'))`.
        let named_fields: FxHashSet<&str> = raw
            .iter()
            .filter(|(_, child)| child.is_named())
            .filter_map(|(field, _)| *field)
            .collect();
        raw.into_iter()
            .map(|(field, child)| {
                let slot = field
                    .filter(|field| child.is_named() || !named_fields.contains(field))
                    .filter(|_| !Self::is_symbol_like(language, child))
                    .and_then(Slot::from_name)
                    .filter(|slot| parent.slot(*slot).is_some());
                Child { node: child, slot }
            })
            .collect()
    }

    /// An unmapped named production spelling a fixed lexeme, e.g. Python's
    /// `keyword_separator` or an `empty_statement`.
    fn is_symbol_like(language: Language, node: TsNode<'_>) -> bool {
        if !node.is_named() || node.is_error() || node.child_count() == 0 {
            return false;
        }
        if NodeKind::resolve(language, node.kind()).is_some() {
            return false;
        }
        let mut cursor = node.walk();
        node.children(&mut cursor)
            .all(|child| !child.is_named() && !child.is_extra())
    }

    fn is_empty(node: TsNode<'_>) -> bool {
        node.is_missing() || node.start_byte() == node.end_byte()
    }

    /// Whether the fielded children of `node` satisfy the arities `kind`
    /// declares.
    fn fits(&self, kind: NodeKind, node: TsNode<'_>) -> bool {
        let decls = kind.slots();
        let mut counts = vec![0usize; decls.len()];
        for child in Self::children(self.language, kind, node) {
            if Self::is_empty(child.node) || child.node.end_byte() <= self.pos {
                continue;
            }
            if let Some(index) = child.slot.and_then(|slot| kind.slot_index(slot)) {
                counts[index] += 1;
            }
        }
        decls
            .iter()
            .zip(counts)
            .all(|(decl, count)| decl.rest || decl.arity.accepts(count))
    }

    fn lower_children(&mut self, parent: NodeKind, node: TsNode<'_>) {
        for child in Self::children(self.language, parent, node) {
            self.lower_node(child.slot, child.node);
        }
        self.gap(node.end_byte());
    }

    fn lower_node(&mut self, slot: Option<Slot>, node: TsNode<'_>) {
        if Self::is_empty(node) || node.end_byte() <= self.pos {
            return;
        }
        self.gap(node.start_byte());
        let end = node.end_byte();

        if node.is_extra() && node.kind().contains("comment") {
            let text = self.take(end);
            self.builder.comment(text);
            return;
        }
        if node.is_error() {
            self.error_region(slot, node);
            return;
        }
        if node.child_count() == 0 {
            self.leaf(slot, node);
            return;
        }
        if Self::is_symbol_like(self.language, node) {
            let text = self.take(end);
            self.builder.symbol(text);
            return;
        }

        match self.kind_of(node) {
            Some(kind) if kind.is_terminal() => {
                let text = self.take(end);
                self.token(slot, kind, text);
            }
            Some(kind) if self.fits(kind, node) => {
                self.open(slot, kind);
                self.lower_children(kind, node);
                self.builder.finish_node();
            }
            Some(kind) => {
                debug!(
                    production = node.kind(),
                    %kind,
                    start = node.start_byte(),
                    "children violate declared arities, lowered as parse error"
                );
                self.parse_error(slot, node);
            }
            None => {
                trace!(production = node.kind(), "unmapped production lowered as blot");
                let text = self.take(end);
                match slot {
                    Some(slot) => self.builder.blot_in(slot, text),
                    None => self.builder.blot(text),
                }
            }
        }
    }

    fn leaf(&mut self, slot: Option<Slot>, node: TsNode<'_>) {
        let text = self.take(node.end_byte());
        if !node.is_named() {
            match slot {
                Some(slot) => self.builder.symbol_in(slot, text),
                None => self.builder.symbol(text),
            }
            return;
        }
        let kind = match self.kind_of(node) {
            Some(kind) if kind.is_terminal() => kind,
            _ => SpecialKind::Terminal.into(),
        };
        self.token(slot, kind, text);
    }

    fn token(&mut self, slot: Option<Slot>, kind: NodeKind, text: &str) {
        match slot {
            Some(slot) => self.builder.token_in(slot, kind, text),
            None => self.builder.token(kind, text),
        }
    }

    fn open(&mut self, slot: Option<Slot>, kind: NodeKind) {
        match slot {
            Some(slot) => self.builder.start_node_in(slot, kind),
            None => self.builder.start_node(kind),
        }
    }

    fn parse_error(&mut self, slot: Option<Slot>, node: TsNode<'_>) {
        let kind = SpecialKind::ParseError.into();
        self.open(slot, kind);
        self.lower_children(kind, node);
        self.builder.finish_node();
    }

    fn error_region(&mut self, slot: Option<Slot>, node: TsNode<'_>) {
        let start = self.pos;
        let end = node.end_byte().max(start);
        debug!(start, end, "error region");
        if !self.options.variation_points || self.replaying {
            let text = self.take(end);
            match slot {
                Some(slot) => self.builder.error_in(slot, text),
                None => self.builder.error(text),
            }
            return;
        }

        self.open(slot, SpecialKind::VariationPoint.into());
        let text = self.take(end);
        self.builder.error_in(Slot::Raw, text);

        self.pos = start;
        self.replaying = true;
        self.builder.start_alternative(SpecialKind::ParseError);
        self.lower_children(SpecialKind::ParseError.into(), node);
        self.gap(end);
        self.builder.finish_node();
        self.replaying = false;
        self.pos = end;

        self.builder.finish_node();
    }

    /// Emits the uncovered source between the cursor and `until`.
    fn gap(&mut self, until: usize) {
        if until <= self.pos {
            return;
        }
        let text = self.take(until);
        if text.chars().all(char::is_whitespace) {
            self.builder.whitespace(text);
        } else {
            self.builder.blot(text);
        }
    }

    /// Advances the cursor to `end`, returning the text passed over.
    fn take(&mut self, end: usize) -> &'s str {
        let start = self.pos;
        let end = end.clamp(start, self.source.len());
        self.pos = end;
        &self.source[start..end]
    }
}
