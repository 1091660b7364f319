//! Core types and functionality for depmatrix
//!
//! This module forms the foundation of depmatrix's type system, providing the
//! error handling contracts used throughout the codebase.
//!
//! # Error Management
//!
//! depmatrix separates how errors are represented from how they are shown:
//! - **Strongly-typed errors** ([`DepmatrixError`]) for precise error handling in code
//! - **User-friendly contexts** ([`ErrorContext`]) with actionable suggestions for CLI users
//! - **Conversion** via [`user_friendly_error`], which turns any [`anyhow::Error`]
//!   into a displayable context with tailored suggestions
//!
//! Every operation that can fail returns a [`Result`] with meaningful error
//! information; the CLI entry point converts whatever bubbles up into a colored
//! report on stderr.
//!
//! # Examples
//!
//! ```rust
//! use depmatrix_cli::core::{DepmatrixError, user_friendly_error};
//!
//! fn example_operation() -> anyhow::Result<String> {
//!     Err(DepmatrixError::CatalogSourceMissing.into())
//! }
//!
//! if let Err(e) = example_operation() {
//!     let friendly = user_friendly_error(e);
//!     let report = friendly.to_string();
//!     assert!(report.contains("No catalog source specified"));
//! }
//! ```

pub mod error;

pub use error::{DepmatrixError, ErrorContext, user_friendly_error};
