//! depmatrix - Gradle dependency snippet generator
//!
//! A CLI that turns a curated dependency catalog (a JSON document of Android
//! and Kotlin artifacts grouped by category) into ready-to-paste Gradle
//! snippets: version catalog TOML for `libs.versions.toml`, or Kotlin DSL
//! blocks for `build.gradle.kts`.
//!
//! # Architecture Overview
//!
//! depmatrix follows a load/select/format pipeline:
//! - A catalog document is loaded from a local file or an http(s) URL
//! - A selection narrows the catalog to the artifacts the user asked for,
//!   by exact id, glob pattern, category, or the whole catalog
//! - A formatter renders the selection into one of two snippet formats,
//!   deterministically and in catalog order
//!
//! ## Key Features
//!
//! - **Two output formats**: version catalog TOML and build script blocks
//! - **BOM awareness**: artifacts governed by a selected platform BOM drop
//!   their explicit version, matching Gradle's own resolution behavior
//! - **Deterministic**: the same catalog and selection always produce
//!   byte-identical output, independent of selection order
//! - **Pipe-friendly**: syntax highlighting on interactive terminals only;
//!   redirected output is plain text
//! - **Cross-platform**: works on Windows, macOS, and Linux
//!
//! # Core Modules
//!
//! ## Pipeline
//! - [`catalog`] - Catalog data model and the file/URL loader
//! - [`selection`] - Selector resolution (ids, globs, categories) against a catalog
//! - [`formatter`] - Snippet rendering for both output formats
//! - [`highlight`] - ANSI syntax highlighting layered over finished snippets
//!
//! ## Application
//! - [`cli`] - Command-line interface: `generate` and `list`
//! - [`config`] - Global configuration file (`~/.depmatrix/config.toml`)
//! - [`core`] - Error types and user-facing error reporting
//!
//! ## Supporting Modules
//! - [`constants`] - Environment variable names and shared defaults
//! - [`utils`] - Progress spinner helpers
//!
//! # Catalog Format
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
//! # Command-Line Usage
//!
//! ```bash
//! # Version catalog TOML for two artifacts
//! depmatrix generate --select firebase-bom,firebase-auth
//!
//! # Build script block for a whole category
//! depmatrix generate --category networking --format gradle
//!
//! # Glob selection, written to a file
//! depmatrix generate --select 'firebase-*' --output libs.versions.toml
//!
//! # Browse the catalog
//! depmatrix list --search compose
//! ```

// Pipeline modules
pub mod catalog;
pub mod formatter;
pub mod highlight;
pub mod selection;

// Application modules
pub mod cli;
pub mod config;
pub mod core;

// Supporting modules
pub mod constants;
pub mod utils;
