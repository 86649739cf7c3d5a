//! CLI module for HyprTile.
//!
//! This module provides the command-line interface: layout previews,
//! configuration inspection, exception checks, and the command catalog.

mod commands;
mod output;

use clap::Parser;
pub use commands::Cli;

use crate::error::HyprTileError;

/// Runs the CLI.
///
/// Parses command-line arguments and executes the appropriate command.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn run() -> Result<(), HyprTileError> {
    let cli = Cli::parse();
    cli.execute()
}
