//! Global constants used throughout the depmatrix codebase.
//!
//! Environment variable names and timeouts are defined centrally so the CLI,
//! the loader, and the tests all agree on them.

use std::time::Duration;

/// Environment variable carrying the catalog source (path or URL).
///
/// Read by clap as the fallback for `--catalog`; applies to every subcommand
/// that loads a catalog.
pub const ENV_CATALOG: &str = "DEPMATRIX_CATALOG";

/// Environment variable overriding the global config file location.
///
/// When unset, the config is read from `~/.depmatrix/config.toml`
/// (`%LOCALAPPDATA%\depmatrix\config.toml` on Windows).
pub const ENV_CONFIG: &str = "DEPMATRIX_CONFIG";

/// Environment variable that disables progress indicators when set.
///
/// Set automatically by the `--no-progress` flag, and useful directly in CI
/// environments or when capturing stderr.
pub const ENV_NO_PROGRESS: &str = "DEPMATRIX_NO_PROGRESS";

/// Timeout for the remote catalog fetch (30 seconds).
///
/// Catalog documents are small JSON files; a fetch that takes longer than
/// this is treated as a failure. There are deliberately no retries, so a
/// failed fetch is resolved by re-running the command.
pub const CATALOG_FETCH_TIMEOUT: Duration = Duration::from_secs(30);
