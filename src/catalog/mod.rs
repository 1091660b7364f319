//! Catalog data model and loading
//!
//! This module defines the dependency catalog consumed by every depmatrix
//! command: an ordered list of categories plus an ordered list of artifacts
//! (libraries and Gradle plugins), each carrying the Maven coordinates and
//! version needed to emit version-catalog or build-script text.
//!
//! The catalog is loaded once per invocation (see [`loader`]) and treated as
//! immutable from then on. All query methods borrow; nothing here mutates.
//!
//! # Document Format
//!
//! Catalogs are JSON documents:
//!
//! ```json
//! {
//!   "metadata": { "lastUpdated": "2025-11-02", "kotlinVersion": "2.2.21" },
//!   "categories": [
//!     { "id": "google-firebase", "name": "Google & Firebase" }
//!   ],
//!   "artifacts": [
//!     {
//!       "id": "firebase-bom",
//!       "name": "Firebase BOM",
//!       "category": "google-firebase",
//!       "version": "34.6.0",
//!       "coordinates": { "group": "com.google.firebase", "artifact": "firebase-bom" },
//!       "type": "library"
//!     },
//!     {
//!       "id": "firebase-auth",
//!       "name": "Firebase Authentication",
//!       "category": "google-firebase",
//!       "version": "34.6.0",
//!       "coordinates": { "group": "com.google.firebase", "artifact": "firebase-auth" },
//!       "type": "library",
//!       "bomRef": "firebase-bom"
//!     }
//!   ]
//! }
//! ```
//!
//! Reference fields are conventions, not hard constraints: an artifact whose
//! `category` matches no category entry is still usable (its raw category id
//! becomes the display label), and a `bomRef` naming no catalog entry is
//! simply inactive. The loader warns about both instead of rejecting the
//! document.

use serde::{Deserialize, Serialize};

pub mod loader;


/// Whether an artifact is a library dependency or a Gradle plugin.
///
/// Serialized as the JSON `type` field (`"library"` / `"plugin"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// A regular dependency added to the `dependencies {}` block.
    Library,
    /// A Gradle plugin added to the `plugins {}` block.
    Plugin,
}

impl ArtifactKind {
    /// The lowercase name used in catalog documents and display output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Library => "library",
            Self::Plugin => "plugin",
        }
    }
}

/// Maven coordinates identifying a published module.
///
/// For plugins the `group` carries the plugin id and `artifact` is typically
/// empty; the formatter never reads `artifact` for plugins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Group id, e.g. `com.google.firebase` (or the plugin id for plugins).
    pub group: String,
    /// Artifact name, e.g. `firebase-auth`. Absent in the document for
    /// plugins, which is represented as the empty string.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub artifact: String,
}

impl Coordinates {
    /// `group:artifact` notation, or just the group when there is no artifact
    /// name (plugins).
    #[must_use]
    pub fn notation(&self) -> String {
        if self.artifact.is_empty() {
            self.group.clone()
        } else {
            format!("{}:{}", self.group, self.artifact)
        }
    }
}

/// One selectable dependency or plugin descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// Unique stable short identifier, e.g. `firebase-auth`.
    ///
    /// Used as the lookup key, as the version-catalog table key, and (after
    /// the `-` → `.` transformation, see [`accessor`]) as the basis for
    /// generated accessor names.
    ///
    /// [`accessor`]: Artifact::accessor
    pub id: String,

    /// Human-readable display name, e.g. `Firebase Authentication`.
    pub name: String,

    /// Category id this artifact belongs to.
    ///
    /// Conventionally matches a [`Category::id`] in the same catalog; when it
    /// doesn't, the raw id doubles as the display label.
    pub category: String,

    /// Version string, passed through verbatim (never parsed or compared).
    pub version: String,

    /// Maven coordinates of the published module.
    pub coordinates: Coordinates,

    /// Library or plugin. JSON field `type`.
    #[serde(rename = "type")]
    pub kind: ArtifactKind,

    /// Id of the library entry (a BOM/platform) that manages this artifact's
    /// version, when one exists. JSON field `bomRef`.
    ///
    /// Only consulted by the version-catalog output mode: when the referenced
    /// id is itself selected, this artifact is emitted without a version
    /// reference. A dangling reference is inactive, never an error.
    #[serde(default, rename = "bomRef", skip_serializing_if = "Option::is_none")]
    pub bom_ref: Option<String>,
}

impl Artifact {
    /// The accessor name used in generated build-script references.
    ///
    /// Every `-` in the id becomes `.`; no other characters change. For id
    /// `firebase-auth` the accessor is `firebase.auth`, referenced as
    /// `libs.firebase.auth`.
    #[must_use]
    pub fn accessor(&self) -> String {
        self.id.replace('-', ".")
    }

    /// Case-insensitive substring match over display name and id.
    ///
    /// `query` must already be lowercased by the caller.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query) || self.id.to_lowercase().contains(query)
    }
}

/// A grouping label for artifacts. Has no behavior beyond display-order
/// partitioning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique category id, e.g. `google-firebase`.
    pub id: String,
    /// Display name, e.g. `Google & Firebase`.
    pub name: String,
}

/// Catalog metadata, displayed by `depmatrix list` and otherwise unused.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogMetadata {
    /// Date the catalog document was last regenerated, as written.
    #[serde(default, rename = "lastUpdated", skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,

    /// Kotlin version the catalog's versions were curated against.
    #[serde(default, rename = "kotlinVersion", skip_serializing_if = "Option::is_none")]
    pub kotlin_version: Option<String>,
}

/// The root aggregate: ordered categories plus ordered artifacts.
///
/// Loaded once per invocation and read-only thereafter. Both sequences keep
/// their document order; that order is what "catalog order" means everywhere
/// in the output rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Catalog-level metadata. Optional in the document.
    #[serde(default)]
    pub metadata: CatalogMetadata,

    /// Declared categories, in display order.
    pub categories: Vec<Category>,

    /// All selectable artifacts, in catalog order.
    pub artifacts: Vec<Artifact>,
}

impl Catalog {
    /// Look up an artifact by id.
    #[must_use]
    pub fn artifact(&self, id: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.id == id)
    }

    /// Whether a category with this id is declared.
    #[must_use]
    pub fn has_category(&self, id: &str) -> bool {
        self.categories.iter().any(|c| c.id == id)
    }

    /// Display name for a category id, falling back to the raw id when no
    /// category matches.
    #[must_use]
    pub fn category_name<'a>(&'a self, category_id: &'a str) -> &'a str {
        self.categories
            .iter()
            .find(|c| c.id == category_id)
            .map_or(category_id, |c| c.name.as_str())
    }

    /// All declared category ids, in display order.
    #[must_use]
    pub fn category_ids(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.id.as_str()).collect()
    }

    /// All artifact ids, in catalog order.
    #[must_use]
    pub fn artifact_ids(&self) -> Vec<&str> {
        self.artifacts.iter().map(|a| a.id.as_str()).collect()
    }

    /// Artifacts belonging to a category, in catalog order.
    #[must_use]
    pub fn artifacts_in_category(&self, category_id: &str) -> Vec<&Artifact> {
        self.artifacts.iter().filter(|a| a.category == category_id).collect()
    }

    /// Artifacts whose name or id contains `query`, case-insensitively.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Artifact> {
        let query = query.to_lowercase();
        self.artifacts.iter().filter(|a| a.matches_query(&query)).collect()
    }
}
