//! Exception list commands.

use clap::Subcommand;

use crate::cli::output;
use crate::config::LoadedConfig;
use crate::error::HyprTileError;
use crate::tiling::{ExceptionSet, Rect, WindowInfo};

/// Exception list commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum ExceptionsCommands {
    /// Report whether a window would be treated as an exception.
    ///
    /// Exception windows are centered on their monitor instead of tiled.
    #[command(after_long_help = r"Examples:
  hyprtile exceptions check Pavucontrol
  hyprtile exceptions check firefox --app-id org.mozilla.firefox.desktop")]
    Check {
        /// The window's WM class.
        class: String,

        /// The window's application id.
        #[arg(long, value_name = "ID")]
        app_id: Option<String>,
    },
}

/// Execute exceptions subcommands.
///
/// # Errors
///
/// Returns an error if the exceptions file exists but cannot be read.
pub fn execute(cmd: &ExceptionsCommands, loaded: &LoadedConfig) -> Result<(), HyprTileError> {
    match cmd {
        ExceptionsCommands::Check { class, app_id } => {
            let path = loaded.exceptions_path();
            let exceptions = match &path {
                Some(path) => ExceptionSet::load(path)?,
                None => ExceptionSet::new(),
            };

            let matched = is_exception(&exceptions, class, app_id.as_deref());

            match &path {
                Some(path) => println!("Exceptions file: {} ({} patterns)", path.display(), exceptions.len()),
                None => println!("Exceptions file: none"),
            }
            println!("{} {class}", output::format_bool(matched));
            Ok(())
        }
    }
}

/// Checks a class / app id pair against the set.
fn is_exception(exceptions: &ExceptionSet, class: &str, app_id: Option<&str>) -> bool {
    let mut window = WindowInfo::new(0, Rect::default()).with_class(class);
    if let Some(app_id) = app_id {
        window = window.with_app_id(app_id);
    }
    exceptions.is_exception(&window)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_exception_by_class_or_app_id() {
        let exceptions = ExceptionSet::parse("pavucontrol\norg.gnome.calculator.desktop\n");

        assert!(is_exception(&exceptions, "Pavucontrol", None));
        assert!(is_exception(&exceptions, "gnome-calculator", Some("org.gnome.Calculator.desktop")));
        assert!(!is_exception(&exceptions, "firefox", None));
    }
}
