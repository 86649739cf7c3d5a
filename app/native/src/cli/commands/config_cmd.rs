//! Config CLI commands.
//!
//! Commands for inspecting the HyprTile configuration file.

use std::sync::mpsc;

use clap::Subcommand;

use super::Cli;
use crate::cli::output;
use crate::config::{self, config_paths, watch_config_file};
use crate::error::HyprTileError;

/// Config management commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum ConfigCommands {
    /// Output the configuration JSON Schema.
    ///
    /// Outputs a JSON Schema to stdout that describes the structure of the
    /// configuration file. Can be redirected to a file for use with editors
    /// that support JSON Schema validation.
    Schema,

    /// Show the path to the configuration file.
    ///
    /// Displays the paths where HyprTile looks for configuration files,
    /// and indicates which one is currently in use (if any).
    Path,

    /// Show the resolved configuration.
    ///
    /// Missing keys are shown with their default values.
    Show {
        /// Output plain JSON without highlighting.
        #[arg(long, short)]
        json: bool,
    },

    /// Watch the configuration file and print every reload.
    #[command(
        after_long_help = r"Examples:
  hyprtile config watch                           # Watch the active config file
  hyprtile config watch --config ~/my-config.jsonc"
    )]
    Watch,
}

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cmd: &ConfigCommands, cli: &Cli) -> Result<(), HyprTileError> {
    match cmd {
        ConfigCommands::Schema => {
            println!("{}", config::print_schema());
            Ok(())
        }
        ConfigCommands::Path => {
            show_config_path();
            Ok(())
        }
        ConfigCommands::Show { json } => show_config(cli, *json),
        ConfigCommands::Watch => watch_config(cli),
    }
}

/// Show the configuration file search paths.
fn show_config_path() {
    println!("Configuration file search paths (in priority order):\n");

    let mut found_config = false;

    for (i, path) in config_paths().iter().enumerate() {
        let exists = path.exists();
        let marker = if exists && !found_config {
            found_config = true;
            " (active)"
        } else if exists {
            " (exists)"
        } else {
            ""
        };

        println!("  {}. {}{}", i + 1, path.display(), marker);
    }

    if !found_config {
        println!("\nNo configuration file found. Defaults are in use.");
    }
}

fn show_config(cli: &Cli, plain: bool) -> Result<(), HyprTileError> {
    let loaded = cli.load_config()?;
    let value = serde_json::to_value(&loaded.config)?;

    if plain {
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match &loaded.path {
        Some(path) => println!("# {}", path.display()),
        None => println!("# defaults"),
    }
    if let Some(exceptions) = loaded.exceptions_path() {
        println!("# exceptions: {}", exceptions.display());
    }
    output::print_highlighted_json(&value);
    Ok(())
}

/// Prints the tiling section every time the config file changes.
fn watch_config(cli: &Cli) -> Result<(), HyprTileError> {
    let loaded = cli.load_config()?;
    let Some(path) = loaded.path else {
        return Err(HyprTileError::InvalidArguments(
            "No configuration file to watch. Create one or pass --config.".to_string(),
        ));
    };

    let (tx, rx) = mpsc::channel();
    let watcher = watch_config_file(&path, move |config| {
        let _ = tx.send(config);
    })
    .map_err(|e| HyprTileError::Io(e.to_string()))?;

    println!("Watching {} (Ctrl+C to stop)", watcher.path().display());

    for config in rx {
        output::print_highlighted_json(&serde_json::to_value(config.tiling)?);
    }

    Ok(())
}
