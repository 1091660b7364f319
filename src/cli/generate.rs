//! Generate Gradle snippets for selected catalog artifacts.
//!
//! This module provides the `generate` command which turns a selection of
//! catalog artifacts into ready-to-paste Gradle text: either version catalog
//! TOML for `gradle/libs.versions.toml`, or `plugins {}` / `dependencies {}`
//! blocks for `build.gradle.kts`.
//!
//! # Features
//!
//! - **Selection by id**: `--select firebase-bom,firebase-auth`
//! - **Glob patterns**: `--select 'firebase-*'` (quotes keep the shell away)
//! - **Whole categories**: `--category networking`
//! - **Everything**: `--all`
//! - **Two formats**: `--format toml` (default) or `--format gradle`
//! - **File output**: `--output path` writes the snippet instead of printing
//!
//! Selection sources combine additively, and every selector is validated:
//! unknown ids and categories fail with suggestions instead of silently
//! producing less output than asked for.
//!
//! # Examples
//!
//! Version catalog entries for two artifacts:
//! ```bash
//! depmatrix generate --select firebase-bom,firebase-auth
//! ```
//!
//! Build script block for a whole category, written to a file:
//! ```bash
//! depmatrix generate --category networking --format gradle --output deps.kts
//! ```
//!
//! # Output
//!
//! ## `toml` (default)
//! ```toml
//! [versions]
//! firebase-bom = "34.6.0"
//!
//! [libraries]
//! firebase-bom = { group = "com.google.firebase", name = "firebase-bom", version.ref = "firebase-bom" }
//! firebase-auth = { group = "com.google.firebase", name = "firebase-auth" }
//! ```
//!
//! ## `gradle`
//! ```kotlin
//! // build.gradle.kts
//!
//! dependencies {
//!     // Google & Firebase
//!     implementation(platform(libs.firebase.bom))
//!     implementation(libs.firebase.auth)
//!
//! }
//! ```
//!
//! On a terminal the snippet is syntax highlighted; piped or `--output` text
//! is always plain. `--plain` forces plain text on a terminal too.

use anyhow::{Context, Result};
use clap::{ArgGroup, Args};
use colored::Colorize;
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::cli::common;
use crate::formatter::{self, OutputMode};
use crate::highlight::highlight;
use crate::selection;

/// Command to generate a Gradle snippet from catalog artifacts.
///
/// At least one selection source (`--select`, `--category`, `--all`) is
/// required; clap enforces this before execution.
#[derive(Args)]
#[command(group = ArgGroup::new("selection").required(true).multiple(true).args(["select", "category", "all"]))]
pub struct GenerateCommand {
    /// Artifact ids or glob patterns to include
    ///
    /// Comma-separated or repeated. Ids are matched exactly; selectors
    /// containing `*`, `?` or `[` are treated as glob patterns over ids.
    #[arg(short, long, value_name = "ID", value_delimiter = ',')]
    select: Vec<String>,

    /// Include every artifact of these categories
    ///
    /// Takes category ids (as listed by `depmatrix list`), comma-separated
    /// or repeated.
    #[arg(short, long, value_name = "CATEGORY", value_delimiter = ',')]
    category: Vec<String>,

    /// Include every artifact in the catalog
    #[arg(long)]
    all: bool,

    /// Output format: toml or gradle
    ///
    /// - `toml`: version catalog entries for `gradle/libs.versions.toml`
    /// - `gradle`: `plugins {}` / `dependencies {}` blocks for `build.gradle.kts`
    #[arg(short, long, value_enum, default_value = "toml")]
    format: OutputFormat,

    /// Write the snippet to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Disable syntax highlighting
    ///
    /// Highlighting is already skipped when stdout is not a terminal or when
    /// writing to a file.
    #[arg(long)]
    plain: bool,
}

/// Output format options for generated snippets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Version catalog TOML for `gradle/libs.versions.toml`.
    Toml,
    /// Kotlin DSL blocks for `build.gradle.kts`.
    Gradle,
}

impl OutputFormat {
    const fn mode(self) -> OutputMode {
        match self {
            Self::Toml => OutputMode::VersionCatalog,
            Self::Gradle => OutputMode::BuildScript,
        }
    }
}

impl GenerateCommand {
    /// Execute the generate command against the resolved catalog source.
    ///
    /// `cli_source` is the global `--catalog` flag (or `DEPMATRIX_CATALOG`);
    /// when absent the config file's default source is used.
    ///
    /// # Errors
    ///
    /// Returns an error if no catalog source is configured, the catalog
    /// cannot be loaded, a selector does not resolve, or the output file
    /// cannot be written.
    pub async fn execute_with_source(self, cli_source: Option<String>) -> Result<()> {
        let source = common::resolve_catalog_source(cli_source).await?;
        let catalog = common::load_catalog(&source).await?;

        let selection = selection::resolve(&catalog, &self.select, &self.category, self.all)?;
        if selection.is_empty() {
            // Reachable despite the required arg group: a declared category
            // can own zero artifacts.
            println!("No artifacts selected.");
            return Ok(());
        }

        let mode = self.format.mode();
        let text = formatter::format(&catalog, &selection, mode);

        match self.output {
            Some(path) => {
                tokio::fs::write(&path, &text)
                    .await
                    .with_context(|| format!("Failed to write output to {}", path.display()))?;
                println!("{} Wrote {}", "✓".green().bold(), path.display());
            }
            None => {
                if self.plain || !std::io::stdout().is_terminal() {
                    print!("{text}");
                } else {
                    print!("{}", highlight(&text, mode));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const CATALOG: &str = r#"{
        "categories": [
            {"id": "google-firebase", "name": "Google & Firebase"},
            {"id": "empty", "name": "Nothing Here"}
        ],
        "artifacts": [
            {
                "id": "firebase-bom",
                "name": "Firebase BOM",
                "category": "google-firebase",
                "version": "34.6.0",
                "coordinates": {"group": "com.google.firebase", "artifact": "firebase-bom"},
                "type": "library"
            },
            {
                "id": "firebase-auth",
                "name": "Firebase Authentication",
                "category": "google-firebase",
                "version": "34.6.0",
                "coordinates": {"group": "com.google.firebase", "artifact": "firebase-auth"},
                "type": "library",
                "bomRef": "firebase-bom"
            }
        ]
    }"#;

    fn command(select: &[&str], category: &[&str], format: OutputFormat) -> GenerateCommand {
        GenerateCommand {
            select: select.iter().map(ToString::to_string).collect(),
            category: category.iter().map(ToString::to_string).collect(),
            all: false,
            format,
            output: None,
            plain: true,
        }
    }

    #[tokio::test]
    async fn test_generate_toml_to_file() {
        let dir = tempdir().unwrap();
        let catalog_path = dir.path().join("catalog.json");
        tokio::fs::write(&catalog_path, CATALOG).await.unwrap();
        let out_path = dir.path().join("libs.versions.toml");

        let mut cmd =
            command(&["firebase-bom", "firebase-auth"], &[], OutputFormat::Toml);
        cmd.output = Some(out_path.clone());
        cmd.execute_with_source(Some(catalog_path.display().to_string())).await.unwrap();

        let written = tokio::fs::read_to_string(&out_path).await.unwrap();
        assert!(written.starts_with("[versions]\n"));
        assert!(written.contains("firebase-bom = \"34.6.0\"\n"));
        // Governed by the selected BOM, so no version reference
        assert!(written.contains(
            "firebase-auth = { group = \"com.google.firebase\", name = \"firebase-auth\" }\n"
        ));
    }

    #[tokio::test]
    async fn test_generate_gradle_to_file() {
        let dir = tempdir().unwrap();
        let catalog_path = dir.path().join("catalog.json");
        tokio::fs::write(&catalog_path, CATALOG).await.unwrap();
        let out_path = dir.path().join("deps.kts");

        let mut cmd = command(&[], &["google-firebase"], OutputFormat::Gradle);
        cmd.output = Some(out_path.clone());
        cmd.execute_with_source(Some(catalog_path.display().to_string())).await.unwrap();

        let written = tokio::fs::read_to_string(&out_path).await.unwrap();
        assert!(written.starts_with("// build.gradle.kts\n"));
        assert!(written.contains("implementation(platform(libs.firebase.bom))\n"));
        assert!(written.contains("implementation(libs.firebase.auth)\n"));
    }

    #[tokio::test]
    async fn test_generate_empty_category_is_ok() {
        let dir = tempdir().unwrap();
        let catalog_path = dir.path().join("catalog.json");
        tokio::fs::write(&catalog_path, CATALOG).await.unwrap();

        let cmd = command(&[], &["empty"], OutputFormat::Toml);
        cmd.execute_with_source(Some(catalog_path.display().to_string())).await.unwrap();
    }

    #[tokio::test]
    async fn test_generate_unknown_id_fails() {
        let dir = tempdir().unwrap();
        let catalog_path = dir.path().join("catalog.json");
        tokio::fs::write(&catalog_path, CATALOG).await.unwrap();

        let cmd = command(&["firebase-authh"], &[], OutputFormat::Toml);
        let err = cmd
            .execute_with_source(Some(catalog_path.display().to_string()))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("firebase-authh"));
    }

    #[test]
    fn test_output_format_modes() {
        assert_eq!(OutputFormat::Toml.mode(), OutputMode::VersionCatalog);
        assert_eq!(OutputFormat::Gradle.mode(), OutputMode::BuildScript);
    }
}
