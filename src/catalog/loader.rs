//! Catalog loading from local files and remote URLs
//!
//! A catalog source is either a filesystem path or an `http(s)://` URL; the
//! scheme prefix decides which. Remote fetches are a single GET with a
//! 30-second timeout and no retries; re-running the command is the retry.
//!
//! Loading never rejects a catalog over reference inconsistencies (unknown
//! category ids, dangling `bomRef`s, duplicate artifact ids). Those degrade
//! gracefully downstream, so they are logged as warnings here and the load
//! succeeds.

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::constants::CATALOG_FETCH_TIMEOUT;
use crate::core::DepmatrixError;

/// Whether `source` should be fetched over HTTP rather than read from disk.
#[must_use]
pub fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Load and parse a catalog from a path or URL.
///
/// File paths support `~` expansion and are resolved against the current
/// working directory. Transport, I/O, and parse failures surface as distinct
/// [`DepmatrixError`] variants.
pub async fn load(source: &str) -> Result<Catalog> {
    let content = if is_url(source) {
        fetch_remote(source).await?
    } else {
        read_local(source).await?
    };

    let catalog = parse(&content, source)
        .with_context(|| format!("Failed to load catalog from {source}"))?;

    log_reference_warnings(&catalog);
    debug!(
        "Loaded catalog with {} artifacts in {} categories",
        catalog.artifacts.len(),
        catalog.categories.len()
    );

    Ok(catalog)
}

/// Parse a catalog document, attributing failures to `source`.
pub fn parse(content: &str, source: &str) -> Result<Catalog, DepmatrixError> {
    serde_json::from_str(content).map_err(|e| DepmatrixError::CatalogParseError {
        origin: source.to_string(),
        reason: e.to_string(),
    })
}

async fn fetch_remote(url: &str) -> Result<String> {
    debug!("Fetching catalog from: {}", url);

    let client = reqwest::Client::builder()
        .timeout(CATALOG_FETCH_TIMEOUT)
        .build()
        .map_err(|e| DepmatrixError::CatalogFetchError {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    let response =
        client.get(url).send().await.map_err(|e| DepmatrixError::CatalogFetchError {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    if !response.status().is_success() {
        return Err(DepmatrixError::CatalogFetchError {
            url: url.to_string(),
            reason: format!("HTTP {}", response.status()),
        }
        .into());
    }

    let content = response.text().await.map_err(|e| DepmatrixError::CatalogFetchError {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    Ok(content)
}

async fn read_local(path: &str) -> Result<String> {
    let expanded = PathBuf::from(shellexpand::tilde(path).into_owned());
    debug!("Reading catalog file: {}", expanded.display());

    let content = tokio::fs::read_to_string(&expanded).await.map_err(|e| {
        DepmatrixError::CatalogReadError {
            path: expanded.display().to_string(),
            reason: e.to_string(),
        }
    })?;

    Ok(content)
}

/// Warn about reference inconsistencies without failing the load.
fn log_reference_warnings(catalog: &Catalog) {
    let ids: HashSet<&str> = catalog.artifacts.iter().map(|a| a.id.as_str()).collect();

    let mut seen = HashSet::new();
    for artifact in &catalog.artifacts {
        if !seen.insert(artifact.id.as_str()) {
            warn!("Duplicate artifact id in catalog: {}", artifact.id);
        }

        if !catalog.has_category(&artifact.category) {
            warn!(
                "Artifact '{}' references undeclared category '{}'",
                artifact.id, artifact.category
            );
        }

        if let Some(bom_ref) = &artifact.bom_ref
            && !ids.contains(bom_ref.as_str())
        {
            warn!("Artifact '{}' has bomRef '{}' matching no catalog entry", artifact.id, bom_ref);
        }
    }
}
