#![warn(clippy::pedantic)]
//! Entry points for parsing source files into polyglot syntax trees.
//!
//! ## Overview
//!
//! ```text
//! source → tree-sitter (per-language grammar) → cst::lower → Tree
//! ```
//!
//! Every supported [`Language`] is backed by its tree-sitter grammar crate.
//! The concrete tree is lowered into a [`Tree`] whose nodes carry capability
//! tags and named slots, so the same queries work on every language.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use polyglot::{Language, parse};
//! use polyglot::semantics::calls;
//!
//! let tree = parse(Language::C, "void f(void) { foo(a, b); }")?;
//! for call in calls(&tree) {
//!     let call = call?;
//!     println!("{} takes {} arguments", call.function.text(), call.arguments.len());
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Syntax errors in the input are not failures: they are kept in the tree as
//! error nodes (or variation points, see [`LowerOptions`]). The functions
//! here fail only when a grammar cannot be loaded, the file cannot be read,
//! or its language cannot be determined.
//!
//! ## Architecture
//!
//! - [`polyglot_ast`] - node kinds, capabilities, slots, trees and lowering
//! - [`polyglot_semantics`] - cross-language call and function queries

use std::path::Path;

use anyhow::{Context, anyhow};
use tracing::{debug, info};

pub use polyglot_ast as ast;
pub use polyglot_ast::cst::LowerOptions;
pub use polyglot_ast::{Language, Tree};
pub use polyglot_semantics as semantics;

/// The tree-sitter grammar for `language`.
#[must_use]
pub fn grammar(language: Language) -> tree_sitter::Language {
    match language {
        Language::C => tree_sitter_c::LANGUAGE.into(),
        Language::Cpp => tree_sitter_cpp::LANGUAGE.into(),
        Language::Java => tree_sitter_java::LANGUAGE.into(),
        Language::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
        Language::Python => tree_sitter_python::LANGUAGE.into(),
        Language::Rust => tree_sitter_rust::LANGUAGE.into(),
        Language::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        Language::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
    }
}

/// Parses `source_code` with default [`LowerOptions`].
///
/// # Examples
///
/// ```rust,no_run
/// use polyglot::{Language, parse};
///
/// let tree = parse(Language::Python, "if x:\n    pass\n")?;
/// assert_eq!(tree.to_source(), "if x:\n    pass\n");
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if the grammar cannot be loaded or tree-sitter gives up
/// on the input.
pub fn parse(language: Language, source_code: &str) -> anyhow::Result<Tree> {
    parse_with(language, source_code, &LowerOptions::default())
}

/// Parses `source_code` and lowers it with `options`.
///
/// # Errors
///
/// Returns an error if the grammar cannot be loaded, tree-sitter gives up on
/// the input, or the lowered tree fails validation.
pub fn parse_with(
    language: Language,
    source_code: &str,
    options: &LowerOptions,
) -> anyhow::Result<Tree> {
    debug!(%language, bytes = source_code.len(), "parsing");
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&grammar(language))
        .map_err(|e| anyhow!("Failed to load {language} grammar: {e}"))?;
    let cst = parser
        .parse(source_code, None)
        .ok_or_else(|| anyhow!("Failed to parse {language} source"))?;
    let root = cst.root_node();
    if root.has_error() {
        debug!(%language, "source contains syntax errors");
    }
    let tree = polyglot_ast::cst::lower(language, root, source_code, options)
        .with_context(|| format!("Failed to lower {language} syntax tree"))?;
    info!(%language, nodes = tree.len(), "parsed");
    Ok(tree)
}

/// Reads and parses the file at `path`, picking the language from its
/// extension.
///
/// # Errors
///
/// Returns an error if the extension is not recognized, the file cannot be
/// read, or parsing fails.
pub fn parse_file(path: &Path, options: &LowerOptions) -> anyhow::Result<Tree> {
    let language = Language::from_path(path)
        .ok_or_else(|| anyhow!("Cannot determine language of {}", path.display()))?;
    parse_file_as(path, language, options)
}

/// Reads and parses the file at `path` as `language`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsing fails.
pub fn parse_file_as(
    path: &Path,
    language: Language,
    options: &LowerOptions,
) -> anyhow::Result<Tree> {
    let source_code = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_with(language, &source_code, options)
}
