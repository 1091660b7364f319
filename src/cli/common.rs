//! Common utilities shared by CLI commands

use anyhow::Result;
use std::path::PathBuf;

use crate::catalog::{Catalog, loader};
use crate::config::GlobalConfig;
use crate::constants::ENV_CONFIG;
use crate::core::DepmatrixError;
use crate::utils::progress::spinner_with_message;

/// Load the global configuration, honoring the `DEPMATRIX_CONFIG` override.
///
/// The override is set by the `--config` flag (via [`CliConfig::apply_to_env`])
/// or directly in the environment. A missing file yields the default (empty)
/// configuration.
///
/// [`CliConfig::apply_to_env`]: super::CliConfig::apply_to_env
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub async fn load_global_config() -> Result<GlobalConfig> {
    let path = std::env::var(ENV_CONFIG).ok().map(PathBuf::from);
    GlobalConfig::load_with_optional(path).await
}

/// Resolve the catalog source for this invocation.
///
/// `cli_source` carries the `--catalog` flag or the `DEPMATRIX_CATALOG`
/// environment variable (clap folds the two). When neither is present the
/// `catalog` key of the global config file is used.
///
/// # Errors
///
/// Returns [`DepmatrixError::CatalogSourceMissing`] when no source is
/// configured anywhere, or a config error if the config file is unreadable.
pub async fn resolve_catalog_source(cli_source: Option<String>) -> Result<String> {
    if let Some(source) = cli_source {
        return Ok(source);
    }

    let config = load_global_config().await?;
    config.catalog.ok_or_else(|| DepmatrixError::CatalogSourceMissing.into())
}

/// Load a catalog from a file path or URL, with a spinner for remote fetches.
///
/// Local reads are fast enough that a spinner would only flicker, so it is
/// shown for http(s) sources only.
///
/// # Errors
///
/// Returns an error if the source cannot be read, fetched, or parsed.
pub async fn load_catalog(source: &str) -> Result<Catalog> {
    if loader::is_url(source) {
        let spinner = spinner_with_message(format!("Fetching catalog from {source}..."));
        let result = loader::load(source).await;
        spinner.finish_and_clear();
        result
    } else {
        loader::load(source).await
    }
}
