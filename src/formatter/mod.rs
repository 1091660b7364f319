//! Output generation: catalog + selection → ready-to-paste Gradle text
//!
//! This is the core of depmatrix. [`format`] is a pure function from an
//! immutable [`Catalog`], a [`Selection`] of artifact ids, and an
//! [`OutputMode`] to a `String`: no state, no I/O, and byte-identical output
//! for identical inputs. Everything else in the crate exists to feed it inputs
//! or print its result.
//!
//! # Output Modes
//!
//! - [`OutputMode::VersionCatalog`]: a `libs.versions.toml` fragment with
//!   `[versions]`, `[libraries]`, and `[plugins]` sections (each only when it
//!   has content). Version keys are the raw artifact ids; a library governed
//!   by a selected BOM is emitted without a `version.ref` and registers no
//!   version key.
//! - [`OutputMode::BuildScript`]: a `build.gradle.kts` fragment with a
//!   `plugins {}` block (only when plugins are selected) and a
//!   `dependencies {}` block (always, once anything is selected), libraries
//!   grouped under category comments.
//!
//! # Ordering Rules
//!
//! All ordering derives from catalog order, never from selection order or any
//! hash-map iteration:
//! - `[libraries]` / `[plugins]` bodies: catalog order of the selected subset.
//! - `[versions]`: insertion order, plugins registered before libraries.
//! - `dependencies {}` groups: first-occurrence order of categories among the
//!   selected libraries (which can differ from the catalog's declared
//!   category order).
//!
//! Because ordering never depends on the selection as a sequence, deselecting
//! and reselecting the same ids reproduces the output byte for byte.
//!
//! # Totality
//!
//! The formatter never fails. An empty selection yields `""`. Dangling
//! `bomRef`s fall back to independent versions. Coordinate strings pass
//! through verbatim, even when empty.
//!
//! # Examples
//!
//! ```rust
//! use depmatrix_cli::catalog::Catalog;
//! use depmatrix_cli::formatter::{OutputMode, format};
//! use depmatrix_cli::selection::Selection;
//!
//! let catalog: Catalog = serde_json::from_str(
//!     r#"{
//!         "categories": [ { "id": "google-firebase", "name": "Google & Firebase" } ],
//!         "artifacts": [ {
//!             "id": "firebase-auth",
//!             "name": "Firebase Authentication",
//!             "category": "google-firebase",
//!             "version": "34.6.0",
//!             "coordinates": { "group": "com.google.firebase", "artifact": "firebase-auth" },
//!             "type": "library"
//!         } ]
//!     }"#,
//! )
//! .unwrap();
//!
//! let selection = Selection::from_ids(["firebase-auth"]);
//! let toml = format(&catalog, &selection, OutputMode::VersionCatalog);
//! assert!(toml.contains("firebase-auth = \"34.6.0\""));
//! ```

use crate::catalog::{Artifact, ArtifactKind, Catalog};
use crate::selection::Selection;

mod build_script;
mod version_catalog;


/// Which textual format to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Gradle version-catalog TOML (`libs.versions.toml` sections).
    VersionCatalog,
    /// Kotlin DSL build-script blocks (`build.gradle.kts`).
    BuildScript,
}

/// Generate the selected artifacts as text in the requested mode.
///
/// Pure and total: identical inputs produce byte-identical output, and no
/// well-typed input can fail. An empty selection returns the empty string;
/// presenting a "nothing selected" placeholder is the caller's concern.
#[must_use]
pub fn format(catalog: &Catalog, selection: &Selection, mode: OutputMode) -> String {
    if selection.is_empty() {
        return String::new();
    }

    let (plugins, libraries) = partition(catalog, selection);

    match mode {
        OutputMode::VersionCatalog => version_catalog::render(selection, &plugins, &libraries),
        OutputMode::BuildScript => build_script::render(catalog, &plugins, &libraries),
    }
}

/// Split the selected artifacts into plugins and libraries, each in catalog
/// order.
fn partition<'a>(catalog: &'a Catalog, selection: &Selection) -> (Vec<&'a Artifact>, Vec<&'a Artifact>) {
    let mut plugins = Vec::new();
    let mut libraries = Vec::new();

    for artifact in &catalog.artifacts {
        if !selection.contains(&artifact.id) {
            continue;
        }
        match artifact.kind {
            ArtifactKind::Plugin => plugins.push(artifact),
            ArtifactKind::Library => libraries.push(artifact),
        }
    }

    (plugins, libraries)
}

/// Whether a library's version is managed by a BOM that is itself selected.
///
/// Only then does the version-catalog mode omit the library's `version.ref`.
/// A `bom_ref` pointing outside the selection (or outside the catalog) keeps
/// the independent-version line.
fn platform_governed(library: &Artifact, selection: &Selection) -> bool {
    library.bom_ref.as_deref().is_some_and(|bom| selection.contains(bom))
}
