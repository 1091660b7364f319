//! Shared utilities
//!
//! # Modules
//!
//! - [`progress`] - Spinners for long-running operations

pub mod progress;

pub use progress::ProgressBar;
