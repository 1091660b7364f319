//! depmatrix CLI entry point
//!
//! This is the main executable for the depmatrix snippet generator.
//! It handles command-line argument parsing, error display, and command execution.
//!
//! The CLI supports two commands:
//! - `generate` - Render a Gradle snippet for selected catalog artifacts
//! - `list` - Browse the catalog with filters

use anyhow::Result;
use clap::Parser;
use depmatrix_cli::cli;
use depmatrix_cli::core::error::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    // Execute the command
    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            // Convert to user-friendly error with context and suggestions
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
