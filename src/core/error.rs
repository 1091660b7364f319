//! Error handling for depmatrix
//!
//! This module provides the error types and user-friendly error reporting used
//! across the depmatrix CLI. The error system is designed around two core
//! principles:
//! 1. **Strongly-typed errors** for precise error handling in code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! The error system consists of two main types:
//! - [`DepmatrixError`] - Enumerated error types for all failure cases
//! - [`ErrorContext`] - Wrapper that adds user-friendly messages and suggestions
//!
//! # Error Categories
//!
//! Errors are organized into several categories:
//! - **Catalog loading**: [`DepmatrixError::CatalogSourceMissing`],
//!   [`DepmatrixError::CatalogFetchError`], [`DepmatrixError::CatalogReadError`],
//!   [`DepmatrixError::CatalogParseError`]
//! - **Configuration**: [`DepmatrixError::ConfigParseError`]
//! - **Selection**: [`DepmatrixError::ArtifactNotFound`],
//!   [`DepmatrixError::CategoryNotFound`], [`DepmatrixError::InvalidPattern`],
//!   [`DepmatrixError::PatternNoMatches`]
//!
//! Use [`user_friendly_error`] to convert any error into a user-friendly format
//! with contextual suggestions before displaying it to the terminal.
//!
//! # Examples
//!
//! ## Basic Error Handling
//!
//! ```rust,no_run
//! use depmatrix_cli::core::{DepmatrixError, user_friendly_error};
//!
//! fn load_something() -> Result<(), DepmatrixError> {
//!     Err(DepmatrixError::CatalogSourceMissing)
//! }
//!
//! match load_something() {
//!     Ok(()) => println!("Success!"),
//!     Err(e) => {
//!         let ctx = user_friendly_error(anyhow::Error::from(e));
//!         ctx.display(); // Shows colored error with suggestions
//!     }
//! }
//! ```
//!
//! ## Creating Error Context Manually
//!
//! ```rust,no_run
//! use depmatrix_cli::core::{DepmatrixError, ErrorContext};
//!
//! let error = DepmatrixError::CatalogSourceMissing;
//! let context = ErrorContext::new(error)
//!     .with_suggestion("Pass --catalog <PATH|URL> or set DEPMATRIX_CATALOG")
//!     .with_details("depmatrix needs a catalog document to know which artifacts exist");
//!
//! // Display with colors in terminal
//! context.display();
//!
//! // Or get as string for logging
//! let message = format!("{}", context);
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for depmatrix operations
///
/// This enum represents all possible errors that can occur while loading a
/// catalog, resolving a selection, or generating output. Each variant carries
/// the details needed to explain the failure to the user.
///
/// # Design Philosophy
///
/// - **Specific Error Types**: Each error variant represents a specific failure mode
/// - **Rich Context**: Errors include relevant details like file paths, URLs, and reasons
/// - **User-Friendly**: Error messages are written for end users, not just developers
/// - **Actionable**: Most errors get a suggestion attached via [`user_friendly_error`]
///
/// # Examples
///
/// ## Pattern Matching on Errors
///
/// ```rust,no_run
/// use depmatrix_cli::core::DepmatrixError;
///
/// fn handle_error(error: DepmatrixError) {
///     match error {
///         DepmatrixError::CatalogSourceMissing => {
///             eprintln!("Pass --catalog or set DEPMATRIX_CATALOG");
///         }
///         DepmatrixError::ArtifactNotFound { id, .. } => {
///             eprintln!("Unknown artifact '{}'; run 'depmatrix list'", id);
///         }
///         _ => {
///             eprintln!("Unexpected error: {}", error);
///         }
///     }
/// }
/// ```
///
/// ## Creating Specific Errors
///
/// ```rust,no_run
/// use depmatrix_cli::core::DepmatrixError;
///
/// let error = DepmatrixError::CatalogFetchError {
///     url: "https://example.com/catalog.json".to_string(),
///     reason: "connection timed out".to_string(),
/// };
///
/// let error = DepmatrixError::ArtifactNotFound {
///     id: "firebase-authh".to_string(),
///     suggestions: vec!["firebase-auth".to_string()],
/// };
/// ```
#[derive(Error, Debug, Clone)]
pub enum DepmatrixError {
    /// No catalog source was provided
    ///
    /// This error occurs when neither the `--catalog` flag, the
    /// `DEPMATRIX_CATALOG` environment variable, nor the global config file
    /// names a catalog to load.
    #[error("No catalog source specified")]
    CatalogSourceMissing,

    /// Fetching a remote catalog over HTTP failed
    ///
    /// # Fields
    /// - `url`: The catalog URL that was requested
    /// - `reason`: The transport or status failure reported by the HTTP client
    #[error("Failed to fetch catalog from {url}: {reason}")]
    CatalogFetchError {
        /// The catalog URL that was requested
        url: String,
        /// The transport or status failure reported by the HTTP client
        reason: String,
    },

    /// Reading a local catalog file failed
    ///
    /// # Fields
    /// - `path`: The catalog path that was opened
    /// - `reason`: The underlying I/O failure
    #[error("Failed to read catalog file {path}: {reason}")]
    CatalogReadError {
        /// The catalog path that was opened
        path: String,
        /// The underlying I/O failure
        reason: String,
    },

    /// The catalog document is not valid catalog JSON
    ///
    /// # Fields
    /// - `origin`: The path or URL the document came from
    /// - `reason`: The parse failure, including line/column where available
    #[error("Invalid catalog from {origin}: {reason}")]
    CatalogParseError {
        /// The path or URL the document came from
        origin: String,
        /// The parse failure, including line/column where available
        reason: String,
    },

    /// The global configuration file is not valid TOML
    #[error("Invalid config file {path}: {reason}")]
    ConfigParseError {
        /// Path of the config file that failed to parse
        path: String,
        /// The parse failure reported by the TOML parser
        reason: String,
    },

    /// A selector named an artifact id that does not exist in the catalog
    ///
    /// # Fields
    /// - `id`: The unknown artifact id
    /// - `suggestions`: Close matches from the catalog, best first
    #[error("Artifact '{id}' not found in catalog")]
    ArtifactNotFound {
        /// The unknown artifact id
        id: String,
        /// Close matches from the catalog, best first
        suggestions: Vec<String>,
    },

    /// A category filter named a category that does not exist in the catalog
    #[error("Category '{category}' not found in catalog")]
    CategoryNotFound {
        /// The unknown category name
        category: String,
        /// Close matches from the catalog, best first
        suggestions: Vec<String>,
    },

    /// A glob selector could not be compiled
    #[error("Invalid selection pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The selector as the user wrote it
        pattern: String,
        /// The glob compilation failure
        reason: String,
    },

    /// A glob selector compiled but matched nothing in the catalog
    #[error("Pattern '{pattern}' did not match any artifacts")]
    PatternNoMatches {
        /// The selector as the user wrote it
        pattern: String,
    },

    /// Generic error for cases not covered by specific variants
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

/// Error context wrapper that provides user-friendly error information
///
/// `ErrorContext` wraps a [`DepmatrixError`] and adds optional suggestions for
/// resolution and additional details. This is the primary way depmatrix
/// presents errors to CLI users.
///
/// # Display Format
///
/// When displayed, errors show:
/// 1. **Error**: The main error message in red
/// 2. **Details**: Additional context about the error in yellow (optional)
/// 3. **Suggestion**: Actionable steps to resolve the issue in green (optional)
///
/// # Examples
///
/// ```rust,no_run
/// use depmatrix_cli::core::{DepmatrixError, ErrorContext};
///
/// let context = ErrorContext::new(DepmatrixError::CatalogSourceMissing)
///     .with_suggestion("Pass --catalog <PATH|URL> or set DEPMATRIX_CATALOG")
///     .with_details("Without a catalog there is nothing to select from");
///
/// // Display to terminal with colors
/// context.display();
///
/// // Or convert to string for logging
/// let message = context.to_string();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying depmatrix error
    pub error: DepmatrixError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context from a [`DepmatrixError`]
    ///
    /// This creates a basic error context with no additional suggestions or
    /// details. Use the builder methods [`with_suggestion`] and
    /// [`with_details`] to add user-friendly information.
    ///
    /// [`with_suggestion`]: ErrorContext::with_suggestion
    /// [`with_details`]: ErrorContext::with_details
    #[must_use]
    pub const fn new(error: DepmatrixError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    ///
    /// Suggestions should be actionable steps that users can take to resolve
    /// the error. They are displayed in green in the terminal.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    ///
    /// Details provide context about why the error occurred or what it means.
    /// They are displayed in yellow in the terminal, less prominent than the
    /// main error or suggestion.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    ///
    /// Prints the error, details, and suggestion to stderr using color coding:
    /// - Error message: Red and bold
    /// - Details: Yellow
    /// - Suggestion: Green
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions
///
/// This function is the main entry point for converting arbitrary errors into
/// user-friendly error messages for CLI display. It recognizes common error
/// types and provides appropriate context and suggestions.
///
/// # Error Recognition
///
/// The function recognizes and provides specific handling for:
/// - [`DepmatrixError`] variants with tailored suggestions
/// - [`std::io::Error`] with filesystem-specific guidance
/// - [`serde_json::Error`] with catalog format help
/// - Generic errors with their full cause chain
///
/// # Examples
///
/// ```rust,no_run
/// use depmatrix_cli::core::{DepmatrixError, user_friendly_error};
///
/// let error = DepmatrixError::CatalogSourceMissing;
/// let context = user_friendly_error(anyhow::Error::from(error));
///
/// context.display(); // Shows catalog configuration suggestions
/// ```
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    // Check for specific error types and provide helpful suggestions
    if let Some(dm_error) = error.downcast_ref::<DepmatrixError>() {
        return create_error_context(dm_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(DepmatrixError::Other {
                    message: format!("Permission denied: {io_error}"),
                })
                .with_suggestion(
                    "Check file ownership, or write the output somewhere you have access to",
                )
                .with_details(
                    "This error occurs when depmatrix doesn't have permission to read or write a file",
                );
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(DepmatrixError::Other {
                    message: format!("File not found: {io_error}"),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct")
                .with_details(
                    "This error occurs when a required file or directory cannot be found",
                );
            }
            _ => {}
        }
    }

    if let Some(json_error) = error.downcast_ref::<serde_json::Error>() {
        return ErrorContext::new(DepmatrixError::CatalogParseError {
            origin: "catalog".to_string(),
            reason: json_error.to_string(),
        })
        .with_suggestion(
            "Check the catalog JSON: every artifact needs id, name, category, version, coordinates, and type",
        )
        .with_details(
            "Catalog parsing errors are usually caused by a missing field or a trailing comma",
        );
    }

    // Generic error - include the full error chain for better diagnostics
    let mut message = error.to_string();

    // Append error chain if available
    let chain: Vec<String> = error
        .chain()
        .skip(1) // Skip the root cause which is already in to_string()
        .map(std::string::ToString::to_string)
        .collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(DepmatrixError::Other {
        message,
    })
}

/// Create appropriate [`ErrorContext`] with suggestions for specific errors
///
/// This internal function maps each [`DepmatrixError`] variant to an
/// [`ErrorContext`] with tailored suggestions and details. It's used by
/// [`user_friendly_error`] to provide consistent, helpful error messages.
fn create_error_context(error: DepmatrixError) -> ErrorContext {
    match &error {
        DepmatrixError::CatalogSourceMissing => ErrorContext::new(error.clone())
            .with_suggestion(
                "Pass --catalog <PATH|URL>, set the DEPMATRIX_CATALOG environment variable, \
                 or add 'catalog = \"...\"' to ~/.depmatrix/config.toml",
            )
            .with_details(
                "depmatrix needs a catalog document to know which artifacts exist before it can generate anything",
            ),

        DepmatrixError::CatalogFetchError { url, .. } => ErrorContext::new(error.clone())
            .with_suggestion(format!(
                "Verify the catalog URL is correct and reachable: {url}. Check your internet connection"
            ))
            .with_details("Remote catalog fetches time out after 30 seconds and are not retried"),

        DepmatrixError::CatalogReadError { path, .. } => ErrorContext::new(error.clone())
            .with_suggestion(format!("Check that {path} exists and is readable"))
            .with_details(
                "Relative paths are resolved against the current working directory; '~' expands to your home directory",
            ),

        DepmatrixError::CatalogParseError { origin, .. } => ErrorContext::new(error.clone())
            .with_suggestion(format!(
                "Validate the JSON in {origin}: every artifact needs id, name, category, version, coordinates, and type"
            ))
            .with_details(
                "Plugin artifacts additionally use coordinates.group as the plugin id; library artifacts need coordinates.artifact",
            ),

        DepmatrixError::ConfigParseError { path, .. } => ErrorContext::new(error.clone())
            .with_suggestion(format!(
                "Check the TOML syntax in {path}. The only recognized key is 'catalog'"
            ))
            .with_details(
                "The global config provides a default catalog source when --catalog and DEPMATRIX_CATALOG are unset",
            ),

        DepmatrixError::ArtifactNotFound { suggestions, .. } => {
            let ctx = ErrorContext::new(error.clone()).with_details(
                "Artifact ids are matched case-sensitively; use a glob like 'firebase-*' to select several at once",
            );
            if suggestions.is_empty() {
                ctx.with_suggestion("Run 'depmatrix list' to see every artifact id in the catalog")
            } else {
                ctx.with_suggestion(format!("Did you mean one of: {}?", suggestions.join(", ")))
            }
        }

        DepmatrixError::CategoryNotFound { suggestions, .. } => {
            let ctx = ErrorContext::new(error.clone())
                .with_details("Filters match the category id, not its display name");
            if suggestions.is_empty() {
                ctx.with_suggestion("Run 'depmatrix list' to see the catalog's categories")
            } else {
                ctx.with_suggestion(format!("Did you mean one of: {}?", suggestions.join(", ")))
            }
        }

        DepmatrixError::InvalidPattern { .. } => ErrorContext::new(error.clone())
            .with_suggestion(
                "Glob selectors support '*', '?' and character classes like [abc]; quote the pattern to keep your shell from expanding it",
            ),

        DepmatrixError::PatternNoMatches { .. } => ErrorContext::new(error.clone())
            .with_suggestion(
                "Run 'depmatrix list' to see available artifact ids, or loosen the pattern",
            )
            .with_details("A selector that matches nothing usually means a typo in the pattern"),

        _ => ErrorContext::new(error.clone()),
    }
}
