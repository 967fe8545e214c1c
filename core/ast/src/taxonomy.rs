//! Consistency checks over the declared node kinds.

use rustc_hash::FxHashSet;

use crate::capability::Capability;
use crate::errors::AstError;
use crate::kind::{NodeKind, SpecialKind};
use crate::language::Language;
use crate::slot::Arity;

/// Every kind of every language, special kinds last.
#[must_use]
pub fn all_kinds() -> Vec<NodeKind> {
    Language::ALL
        .into_iter()
        .flat_map(NodeKind::all)
        .chain(SpecialKind::ALL.into_iter().map(NodeKind::Special))
        .collect()
}

/// Checks one kind against the taxonomy rules:
///
/// - a kind tagged with a capability declares every slot it requires;
/// - terminal kinds declare no slots;
/// - slots are declared at most once, and at most one of them is a plural
///   rest slot.
///
/// # Errors
///
/// Returns [`AstError::MalformedTree`] naming the violated rule.
pub fn validate_kind(kind: NodeKind) -> Result<(), AstError> {
    for capability in kind.capabilities().iter() {
        for required in capability.required_slots() {
            if kind.slot(*required).is_none() {
                return Err(AstError::malformed(
                    kind,
                    Some(*required),
                    format!("required by capability `{capability}` but not declared"),
                ));
            }
        }
    }
    if kind.is_terminal() && !kind.slots().is_empty() {
        return Err(AstError::malformed(kind, None, "terminal kind declares slots"));
    }
    if kind.is_terminal() != kind.has_capability(Capability::Terminal) {
        return Err(AstError::malformed(
            kind,
            None,
            "terminal flag and terminal capability disagree",
        ));
    }
    let mut seen = FxHashSet::default();
    let mut rests = 0;
    for decl in kind.slots() {
        if !seen.insert(decl.slot) {
            return Err(AstError::malformed(kind, Some(decl.slot), "declared twice"));
        }
        if decl.rest {
            rests += 1;
            if decl.arity != Arity::Many {
                return Err(AstError::malformed(
                    kind,
                    Some(decl.slot),
                    "rest slot must be plural",
                ));
            }
        }
    }
    if rests > 1 {
        return Err(AstError::malformed(kind, None, "more than one rest slot"));
    }
    Ok(())
}

/// Checks every declared kind, and that productions are unique per language.
///
/// # Errors
///
/// Returns the first violation found.
pub fn validate() -> Result<(), AstError> {
    for language in Language::ALL {
        let mut productions = FxHashSet::default();
        for kind in NodeKind::all(language) {
            validate_kind(kind)?;
            if !productions.insert(kind.production()) {
                return Err(AstError::malformed(kind, None, "production declared twice"));
            }
            if NodeKind::resolve(language, kind.production()) != Some(kind) {
                return Err(AstError::malformed(kind, None, "production does not resolve"));
            }
        }
    }
    for special in SpecialKind::ALL {
        validate_kind(special.into())?;
    }
    Ok(())
}
