//! Command-line interface for depmatrix
//!
//! This module contains the CLI command implementations. depmatrix has two
//! commands: `generate`, which emits a Gradle dependency snippet for a
//! selection of catalog artifacts, and `list`, which browses the catalog.
//!
//! # Global Options
//!
//! All subcommands share:
//! - **Catalog source**: `--catalog` (or `DEPMATRIX_CATALOG`, or the config
//!   file) selects the catalog file or URL
//! - **Verbosity control**: `--verbose` and `--quiet`
//! - **Configuration**: `--config` for a custom config file path
//! - **UI control**: `--no-progress` for automation-friendly output
//!
//! # Examples
//!
//! ```bash
//! # Generate a version catalog snippet for two artifacts
//! depmatrix generate --select firebase-bom,firebase-auth
//!
//! # Generate a build script for a whole category
//! depmatrix generate --category networking --format gradle
//!
//! # Browse the catalog
//! depmatrix list --search firebase
//! ```

pub mod common;
mod generate;
mod list;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::constants::{ENV_CATALOG, ENV_CONFIG, ENV_NO_PROGRESS};

/// Runtime configuration for CLI execution.
///
/// Holds configuration that is applied to the process environment before any
/// command runs, so tests and programmatic callers can control behavior
/// without re-parsing arguments.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter for the `RUST_LOG` environment variable.
    ///
    /// `Some("debug")` for `--verbose`, `Some("off")` for `--quiet`, `None`
    /// to leave any existing `RUST_LOG` untouched.
    pub log_level: Option<String>,

    /// Whether to disable spinners and animated output.
    ///
    /// When `true`, sets the `DEPMATRIX_NO_PROGRESS` environment variable.
    pub no_progress: bool,

    /// Custom path to the global configuration file.
    ///
    /// When specified, sets the `DEPMATRIX_CONFIG` environment variable to
    /// override the default location (`~/.depmatrix/config.toml`).
    pub config_path: Option<String>,
}

impl CliConfig {
    /// Create a new CLI configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply this configuration to the process environment.
    ///
    /// Called exactly once at the start of CLI execution, before commands
    /// read any of these variables.
    pub fn apply_to_env(&self) {
        // SAFETY: called once on the main thread before any command spawns
        // tasks that read the environment.
        if let Some(ref level) = self.log_level {
            unsafe { std::env::set_var("RUST_LOG", level) };
        }

        if self.no_progress {
            unsafe { std::env::set_var(ENV_NO_PROGRESS, "1") };
        }

        if let Some(ref path) = self.config_path {
            unsafe { std::env::set_var(ENV_CONFIG, path) };
        }
    }
}

/// Main CLI structure for depmatrix.
///
/// Represents the root command and its global options. Options marked
/// `global = true` are available to all subcommands.
#[derive(Parser)]
#[command(
    name = "depmatrix",
    about = "Generate Gradle dependency snippets from a curated catalog",
    version,
    author,
    long_about = "depmatrix turns a curated dependency catalog into ready-to-paste Gradle \
                  snippets: version catalog TOML (libs.versions.toml) or Kotlin DSL build \
                  script (build.gradle.kts) blocks."
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output for debugging and detailed information.
    ///
    /// Equivalent to setting `RUST_LOG=debug`. Mutually exclusive with
    /// `--quiet`.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output for automation.
    ///
    /// Generated snippets and listings are still printed; only diagnostics
    /// are silenced. Mutually exclusive with `--verbose`.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Catalog source: a local JSON file path or an http(s) URL.
    ///
    /// Falls back to the `DEPMATRIX_CATALOG` environment variable, then to
    /// the `catalog` key in the global config file.
    #[arg(long, global = true, env = ENV_CATALOG, value_name = "SOURCE")]
    catalog: Option<String>,

    /// Path to a custom global configuration file.
    ///
    /// Overrides the default location (`~/.depmatrix/config.toml`).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable spinners for automation.
    ///
    /// Useful for CI pipelines and terminals without ANSI support.
    #[arg(long, global = true)]
    no_progress: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Generate a Gradle snippet for selected artifacts.
    ///
    /// Selects artifacts by id, glob pattern, category, or the whole catalog,
    /// and prints either version catalog TOML or a build script block.
    ///
    /// See [`generate::GenerateCommand`] for detailed options and behavior.
    Generate(generate::GenerateCommand),

    /// List catalog artifacts with optional filters.
    ///
    /// Browses the catalog grouped by category, with search, category, and
    /// kind filters, as a table or as JSON.
    ///
    /// See [`list::ListCommand`] for detailed options and behavior.
    List(list::ListCommand),
}

impl Cli {
    /// Execute the CLI with configuration built from the parsed arguments.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Build a [`CliConfig`] from the parsed CLI arguments.
    ///
    /// `--verbose` maps to a `debug` log filter and `--quiet` to `off`;
    /// without either flag any ambient `RUST_LOG` is respected.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("off".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
            no_progress: self.no_progress,
            config_path: self.config.as_ref().map(|p| p.display().to_string()),
        }
    }

    /// Execute the CLI with a specific configuration.
    ///
    /// Applies the configuration to the environment, initializes logging,
    /// and dispatches to the subcommand. Exposed separately so tests can
    /// inject configuration without touching global state during parsing.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.apply_to_env();
        init_logging();

        match self.command {
            Commands::Generate(cmd) => cmd.execute_with_source(self.catalog).await,
            Commands::List(cmd) => cmd.execute_with_source(self.catalog).await,
        }
    }
}

/// Initialize the tracing subscriber from the `RUST_LOG` environment
/// variable, defaulting to warnings only.
///
/// Diagnostics go to stderr so they never mix with generated snippets on
/// stdout. Safe to call more than once; later calls are ignored.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
