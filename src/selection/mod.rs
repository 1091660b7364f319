//! Selection set and CLI selector resolution
//!
//! A [`Selection`] is the set of artifact ids a formatting run should emit.
//! The set supports the interactive operations a picker UI needs (`toggle`,
//! `toggle_category`, `clear`) alongside plain set operations; the formatter
//! only ever reads it.
//!
//! [`resolve`] builds a selection from command-line selectors: explicit ids,
//! glob patterns over ids (`firebase-*`), whole categories, or everything.
//! Unknown ids and categories fail with "did you mean" suggestions computed
//! by Levenshtein distance; selectors never silently select nothing.

use std::collections::HashSet;

use glob::Pattern;
use strsim::levenshtein;
use tracing::debug;

use crate::catalog::Catalog;
use crate::core::DepmatrixError;


/// Maximum Levenshtein distance for a suggestion, as a percentage of the
/// misspelled input's length.
const SIMILARITY_THRESHOLD_PERCENT: usize = 50;

/// The set of artifact ids chosen for a formatting run.
///
/// Selections are unordered; output ordering always comes from catalog order,
/// so deselect-then-reselect round trips produce byte-identical output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: HashSet<String>,
}

impl Selection {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selection from any iterable of ids.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `id` is selected.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of selected ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Add an id to the selection. Adding an already-selected id is a no-op.
    pub fn insert(&mut self, id: impl Into<String>) {
        self.ids.insert(id.into());
    }

    /// Flip one id: deselect it if selected, select it otherwise.
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    /// Flip a group of ids with checkbox semantics: if every id in `ids` is
    /// already selected, deselect them all; otherwise select them all.
    pub fn toggle_category(&mut self, ids: &[&str]) {
        let all_selected = !ids.is_empty() && ids.iter().all(|id| self.ids.contains(*id));
        if all_selected {
            for id in ids {
                self.ids.remove(*id);
            }
        } else {
            for id in ids {
                self.ids.insert((*id).to_string());
            }
        }
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

/// Resolve CLI selectors against a catalog into a selection.
///
/// All three sources are additive into one set:
/// - `selectors`: artifact ids, or glob patterns when they contain a glob
///   metacharacter (`*`, `?`, `[`). A pattern matching nothing is an error;
///   an unknown literal id is an error with suggestions.
/// - `categories`: category ids; every artifact of the category is selected.
///   Unknown category ids error with suggestions.
/// - `all`: every artifact in the catalog.
///
/// An empty result is not an error here; the caller decides how to present
/// "nothing selected".
pub fn resolve(
    catalog: &Catalog,
    selectors: &[String],
    categories: &[String],
    all: bool,
) -> Result<Selection, DepmatrixError> {
    let mut selection = Selection::new();

    for selector in selectors {
        if is_pattern(selector) {
            select_pattern(catalog, selector, &mut selection)?;
        } else if catalog.artifact(selector).is_some() {
            selection.insert(selector.clone());
        } else {
            return Err(DepmatrixError::ArtifactNotFound {
                id: selector.clone(),
                suggestions: find_similar(selector, &catalog.artifact_ids()),
            });
        }
    }

    for category in categories {
        if !catalog.has_category(category) {
            return Err(DepmatrixError::CategoryNotFound {
                category: category.clone(),
                suggestions: find_similar(category, &catalog.category_ids()),
            });
        }
        for artifact in catalog.artifacts_in_category(category) {
            selection.insert(artifact.id.clone());
        }
    }

    if all {
        for id in catalog.artifact_ids() {
            selection.insert(id);
        }
    }

    debug!("Resolved selection of {} artifacts", selection.len());
    Ok(selection)
}

/// Whether a selector should be treated as a glob pattern.
fn is_pattern(selector: &str) -> bool {
    selector.contains('*') || selector.contains('?') || selector.contains('[')
}

fn select_pattern(
    catalog: &Catalog,
    selector: &str,
    selection: &mut Selection,
) -> Result<(), DepmatrixError> {
    let pattern = Pattern::new(selector).map_err(|e| DepmatrixError::InvalidPattern {
        pattern: selector.to_string(),
        reason: e.to_string(),
    })?;

    let mut matched = false;
    for id in catalog.artifact_ids() {
        if pattern.matches(id) {
            selection.insert(id);
            matched = true;
        }
    }

    if !matched {
        return Err(DepmatrixError::PatternNoMatches {
            pattern: selector.to_string(),
        });
    }
    Ok(())
}

/// Find ids similar to `target` using Levenshtein distance.
///
/// Returns the top 3 candidates within half of the target's length, closest
/// first. Ties keep catalog order, so suggestions are deterministic.
pub(crate) fn find_similar(target: &str, available: &[&str]) -> Vec<String> {
    let mut scored: Vec<_> = available
        .iter()
        .map(|candidate| ((*candidate).to_string(), levenshtein(target, candidate)))
        .collect();

    scored.sort_by_key(|(_, dist)| *dist);

    scored
        .into_iter()
        .filter(|(_, dist)| *dist <= target.len() * SIMILARITY_THRESHOLD_PERCENT / 100)
        .take(3)
        .map(|(candidate, _)| candidate)
        .collect()
}
