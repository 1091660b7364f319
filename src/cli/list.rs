//! List catalog artifacts with optional filters.
//!
//! This module provides the `list` command which browses the dependency
//! catalog: artifacts grouped by category with their versions and Maven
//! coordinates, plus the catalog's own metadata (last update, Kotlin
//! version) when present.
//!
//! # Features
//!
//! - **Kind filters**: `--libraries` / `--plugins`
//! - **Category filter**: `--category <id>` (validated, with suggestions)
//! - **Search**: `--search <query>` matches name or id, case-insensitively
//! - **Two formats**: human table (default) or `--format json`
//!
//! # Examples
//!
//! List the whole catalog:
//! ```bash
//! depmatrix list
//! ```
//!
//! Search across names and ids:
//! ```bash
//! depmatrix list --search firebase
//! ```
//!
//! Machine-readable output for scripting:
//! ```bash
//! depmatrix list --category networking --format json
//! ```
//!
//! # Output Formats
//!
//! ## Table (default)
//! ```text
//! Artifacts from catalog.json:
//! Last updated November 2, 2025
//! Kotlin 2.2.21
//!
//! Google & Firebase
//!   firebase-bom                 34.6.0       library  com.google.firebase:firebase-bom
//!   firebase-auth                34.6.0       library  com.google.firebase:firebase-auth (bom: firebase-bom)
//!
//! Total: 2 artifacts
//! ```
//!
//! ## JSON
//! A pretty-printed array of artifact objects in catalog order, using the
//! same field names as the catalog document.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::catalog::{Artifact, ArtifactKind, Catalog};
use crate::cli::common;
use crate::core::DepmatrixError;
use crate::selection::find_similar;

/// Command to list catalog artifacts.
#[derive(Args)]
pub struct ListCommand {
    /// Show only libraries
    #[arg(long)]
    libraries: bool,

    /// Show only plugins
    #[arg(long, conflicts_with = "libraries")]
    plugins: bool,

    /// Show only artifacts of this category id
    #[arg(short, long, value_name = "CATEGORY")]
    category: Option<String>,

    /// Filter by a case-insensitive substring of name or id
    #[arg(short, long, value_name = "QUERY")]
    search: Option<String>,

    /// Output format: table or json
    #[arg(short, long, value_enum, default_value = "table")]
    format: ListFormat,
}

/// Output format options for catalog listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ListFormat {
    /// Human-readable table grouped by category.
    Table,
    /// Pretty-printed JSON array for automation.
    Json,
}

impl ListCommand {
    /// Execute the list command against the resolved catalog source.
    ///
    /// # Errors
    ///
    /// Returns an error if no catalog source is configured, the catalog
    /// cannot be loaded, or the `--category` filter names an unknown
    /// category.
    pub async fn execute_with_source(self, cli_source: Option<String>) -> Result<()> {
        let source = common::resolve_catalog_source(cli_source).await?;
        let catalog = common::load_catalog(&source).await?;

        if let Some(ref category) = self.category
            && !catalog.has_category(category)
        {
            return Err(DepmatrixError::CategoryNotFound {
                category: category.clone(),
                suggestions: find_similar(category, &catalog.category_ids()),
            }
            .into());
        }

        let artifacts = self.filtered(&catalog);

        match self.format {
            ListFormat::Json => output_json(&artifacts)?,
            ListFormat::Table => output_table(&source, &catalog, &artifacts),
        }

        Ok(())
    }

    /// Apply the category, search, and kind filters, keeping catalog order.
    fn filtered<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Artifact> {
        let query = self.search.as_ref().map(|s| s.to_lowercase());

        catalog
            .artifacts
            .iter()
            .filter(|a| self.category.as_ref().is_none_or(|c| &a.category == c))
            .filter(|a| query.as_deref().is_none_or(|q| a.matches_query(q)))
            .filter(|a| self.matches_kind(a.kind))
            .collect()
    }

    const fn matches_kind(&self, kind: ArtifactKind) -> bool {
        match kind {
            ArtifactKind::Library => !self.plugins,
            ArtifactKind::Plugin => !self.libraries,
        }
    }
}

/// Output in JSON format
fn output_json(artifacts: &[&Artifact]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(artifacts)?);
    Ok(())
}

/// Output in table format, grouped by category
fn output_table(source: &str, catalog: &Catalog, artifacts: &[&Artifact]) {
    if artifacts.is_empty() {
        println!("No artifacts found.");
        return;
    }

    println!("{}", format!("Artifacts from {source}:").bold());
    if let Some(ref raw) = catalog.metadata.last_updated {
        println!("{}", format!("Last updated {}", format_last_updated(raw)).bright_black());
    }
    if let Some(ref kotlin) = catalog.metadata.kotlin_version {
        println!("{}", format!("Kotlin {kotlin}").bright_black());
    }
    println!();

    for (category_id, members) in group_by_category(artifacts) {
        println!("{}", catalog.category_name(category_id).cyan().bold());
        for artifact in members {
            print_artifact(artifact);
        }
        println!();
    }

    println!("{}: {} artifacts", "Total".green().bold(), artifacts.len());
}

/// Print a single artifact row
fn print_artifact(artifact: &Artifact) {
    // Pad before coloring; ANSI codes would count into the width.
    let id_field = format!("{:<28}", artifact.id);
    let version_field = format!("{:<12}", artifact.version);
    let kind_field = format!("{:<8}", artifact.kind.as_str());

    let bom_note = artifact
        .bom_ref
        .as_deref()
        .map_or_else(String::new, |bom| format!(" (bom: {bom})").bright_black().to_string());

    println!(
        "  {} {} {} {}{}",
        id_field.bright_white(),
        version_field.yellow(),
        kind_field.bright_black(),
        artifact.coordinates.notation(),
        bom_note
    );
}

/// Group artifacts by category id, in order of first occurrence.
fn group_by_category<'a>(artifacts: &[&'a Artifact]) -> Vec<(&'a str, Vec<&'a Artifact>)> {
    let mut groups: Vec<(&str, Vec<&Artifact>)> = Vec::new();

    for &artifact in artifacts {
        match groups.iter_mut().find(|(id, _)| *id == artifact.category) {
            Some((_, members)) => members.push(artifact),
            None => groups.push((artifact.category.as_str(), vec![artifact])),
        }
    }

    groups
}

/// Render a `lastUpdated` value for display.
///
/// Catalog dates are conventionally `YYYY-MM-DD`; anything else is shown
/// as written.
fn format_last_updated(raw: &str) -> String {
    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_or_else(|_| raw.to_string(), |date| date.format("%B %-d, %Y").to_string())
}
