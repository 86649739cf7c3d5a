//! CLI command definitions using Clap.
//!
//! This module defines all CLI commands and their arguments, organized into
//! domain-specific submodules:
//!
//! - `layout` - Preview the layout the engine would compute
//! - `config_cmd` - Configuration file commands
//! - `exceptions` - Exception list commands

use std::io;
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};

use crate::config::{self, LoadedConfig};
use crate::error::HyprTileError;
use crate::tiling::Command;

pub mod config_cmd;
pub mod exceptions;
pub mod layout;

// Re-export commonly used types for convenience
pub use config_cmd::ConfigCommands;
pub use exceptions::ExceptionsCommands;
pub use layout::LayoutArgs;

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HyprTile CLI - automatic master/stack tiling.
#[derive(Parser, Debug)]
#[command(name = "hyprtile")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a custom configuration file.
    ///
    /// Overrides the default configuration file search paths.
    /// Supports JSONC format (JSON with comments).
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Print the rectangles the engine would assign.
    ///
    /// Opens N windows on a simulated monitor, runs one layout pass with the
    /// current configuration, and prints the result.
    Layout(LayoutArgs),

    /// Configuration file commands.
    ///
    /// Print the schema, the search paths, or the resolved configuration.
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Exception list commands.
    #[command(subcommand)]
    Exceptions(ExceptionsCommands),

    /// List the routable command names.
    ///
    /// Workspace commands are listed once per configured workspace name.
    Commands,

    /// Generate shell completions.
    ///
    /// Outputs shell completion script to stdout for the specified shell.
    ///
    /// Usage:
    ///   eval "$(hyprtile completions zsh)"
    ///   hyprtile completions bash > ~/.local/share/bash-completion/completions/hyprtile
    ///   hyprtile completions fish > ~/.config/fish/completions/hyprtile.fish
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Returns the custom config path if specified via --config flag.
    #[must_use]
    pub fn config_path(&self) -> Option<&Path> { self.config.as_deref() }

    /// Loads the configuration the command should use.
    ///
    /// # Errors
    ///
    /// Returns an error if `--config` points at a missing file, or if the
    /// selected file cannot be read or parsed.
    pub fn load_config(&self) -> Result<LoadedConfig, HyprTileError> {
        if let Some(path) = self.config_path()
            && !path.exists()
        {
            return Err(HyprTileError::InvalidArguments(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        Ok(config::resolve(self.config_path())?)
    }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails.
    pub fn execute(&self) -> Result<(), HyprTileError> {
        match &self.command {
            Commands::Layout(args) => layout::execute(args, &self.load_config()?),
            Commands::Config(cmd) => config_cmd::execute(cmd, self),
            Commands::Exceptions(cmd) => exceptions::execute(cmd, &self.load_config()?),

            Commands::Commands => {
                let loaded = self.load_config()?;
                for name in Command::catalog(&loaded.config.workspace_names) {
                    println!("{name}");
                }
                Ok(())
            }

            Commands::Completions { shell } => {
                Self::print_completions(*shell);
                Ok(())
            }
        }
    }

    /// Print shell completions to stdout.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, "hyprtile", &mut io::stdout());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // CLI parsing tests
    // ========================================================================

    #[test]
    fn test_cli_definition_is_valid() { Cli::command().debug_assert(); }

    #[test]
    fn test_cli_parses_commands() {
        let cli = Cli::try_parse_from(["hyprtile", "commands"]).unwrap();
        assert!(matches!(cli.command, Commands::Commands));
    }

    #[test]
    fn test_cli_parses_completions_zsh() {
        let cli = Cli::try_parse_from(["hyprtile", "completions", "zsh"]).unwrap();
        match cli.command {
            Commands::Completions { shell } => assert_eq!(shell, Shell::Zsh),
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_parses_layout_defaults() {
        let cli = Cli::try_parse_from(["hyprtile", "layout"]).unwrap();
        match cli.command {
            Commands::Layout(args) => {
                assert_eq!(args.windows, 3);
                assert_eq!((args.width, args.height), (1920, 1080));
                assert_eq!((args.x, args.y), (0, 0));
                assert!(!args.json);
            }
            _ => panic!("Expected Layout command"),
        }
    }

    #[test]
    fn test_cli_parses_layout_options() {
        let cli = Cli::try_parse_from([
            "hyprtile", "layout", "--windows", "5", "--width", "2560", "--height", "1440", "--y", "32", "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Layout(args) => {
                assert_eq!(args.windows, 5);
                assert_eq!((args.width, args.height), (2560, 1440));
                assert_eq!(args.y, 32);
                assert!(args.json);
            }
            _ => panic!("Expected Layout command"),
        }
    }

    #[test]
    fn test_cli_parses_exceptions_check() {
        let cli = Cli::try_parse_from(["hyprtile", "exceptions", "check", "Pavucontrol", "--app-id", "x.desktop"])
            .unwrap();
        match cli.command {
            Commands::Exceptions(ExceptionsCommands::Check { class, app_id }) => {
                assert_eq!(class, "Pavucontrol");
                assert_eq!(app_id.as_deref(), Some("x.desktop"));
            }
            _ => panic!("Expected Exceptions Check command"),
        }
    }

    #[test]
    fn test_cli_global_config_flag() {
        let cli = Cli::try_parse_from(["hyprtile", "config", "show", "--config", "/tmp/x.jsonc"]).unwrap();
        assert_eq!(cli.config_path(), Some(Path::new("/tmp/x.jsonc")));
        assert!(matches!(cli.command, Commands::Config(ConfigCommands::Show { json: false })));
    }

    #[test]
    fn test_missing_custom_config_is_rejected() {
        let cli = Cli::try_parse_from(["hyprtile", "commands", "--config", "/nonexistent/hyprtile.jsonc"]).unwrap();
        assert!(matches!(cli.load_config(), Err(HyprTileError::InvalidArguments(_))));
    }

    #[test]
    fn test_cli_rejects_unknown_command() {
        assert!(Cli::try_parse_from(["hyprtile", "tile-everything"]).is_err());
    }
}
