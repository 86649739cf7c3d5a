//! Configuration types for `HyprTile`.
//!
//! This module contains the configuration structures and the loading
//! functions that read them from disk.

use std::fs;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Tiling
// ============================================================================

/// Where newly managed windows are inserted in the window list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum NewWindowBehavior {
    /// Append the window to the end of the stack.
    #[default]
    Stack,
    /// Insert the window as the new master.
    Master,
}

impl NewWindowBehavior {
    /// Returns the configuration keyword for this behavior.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stack => "stack",
            Self::Master => "master",
        }
    }
}

/// Geometry settings for the master/stack layout.
///
/// All values are in pixels. Missing keys default to zero gaps and the
/// `stack` insertion policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "kebab-case")]
pub struct TilingConfig {
    /// Gap between adjacent tiled windows.
    pub inner_gap: i32,
    /// Gap between the work area and the tiled windows on the left and right edges.
    pub outer_gap_horizontal: i32,
    /// Gap between the work area and the tiled windows on the top and bottom edges.
    pub outer_gap_vertical: i32,
    /// Padding applied inside every tile.
    pub window_padding: i32,
    /// Where new windows join the window list.
    pub new_window_behavior: NewWindowBehavior,
}

// ============================================================================
// Root
// ============================================================================

/// Default workspace names, addressed by `switch-to-workspace-<name>`.
pub const DEFAULT_WORKSPACE_NAMES: &[&str] =
    &["1", "2", "3", "4", "5", "6", "T", "B", "S", "A", "M", "D"];

/// Default exceptions file name, resolved next to the configuration file.
pub const DEFAULT_EXCEPTIONS_FILE: &str = "exceptions.txt";

fn default_workspace_names() -> Vec<String> {
    DEFAULT_WORKSPACE_NAMES.iter().map(ToString::to_string).collect()
}

/// Root configuration structure.
///
/// The configuration file is JSONC (JSON with comments):
///
/// ```jsonc
/// {
///     "tiling": { "inner-gap": 8, "new-window-behavior": "master" },
///     "exceptions-file": "~/.config/hyprtile/exceptions.txt",
///     "workspace-names": ["1", "2", "3", "T"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "kebab-case")]
pub struct HyprTileConfig {
    /// Layout geometry settings.
    pub tiling: TilingConfig,

    /// Path to the exceptions file (one window class or app id per line).
    ///
    /// Supports `~` expansion. Defaults to `exceptions.txt` next to the
    /// configuration file.
    pub exceptions_file: Option<String>,

    /// Names used to address workspaces in commands, in workspace order.
    #[serde(default = "default_workspace_names")]
    pub workspace_names: Vec<String>,
}

impl Default for HyprTileConfig {
    fn default() -> Self {
        Self {
            tiling: TilingConfig::default(),
            exceptions_file: None,
            workspace_names: default_workspace_names(),
        }
    }
}

impl HyprTileConfig {
    /// Resolves the exceptions file path.
    ///
    /// An explicit `exceptions-file` is tilde-expanded. Without one, the
    /// default file next to `config_path` is used. Returns `None` when
    /// neither is available.
    #[must_use]
    pub fn exceptions_path(&self, config_path: Option<&Path>) -> Option<PathBuf> {
        if let Some(ref file) = self.exceptions_file {
            let expanded = shellexpand::tilde(file);
            return Some(PathBuf::from(expanded.as_ref()));
        }

        config_path
            .and_then(Path::parent)
            .map(|dir| dir.join(DEFAULT_EXCEPTIONS_FILE))
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Errors that can occur when loading the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No configuration file was found in any of the expected locations.
    #[error(
        "No configuration file found. Expected at ~/.config/hyprtile/config.jsonc \
        or ~/.hyprtile.jsonc"
    )]
    NotFound,
    /// The configuration file exists but could not be read.
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),
    /// The configuration file contains invalid JSON.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Configuration file names to search for (in priority order).
const CONFIG_FILE_NAMES: &[&str] = &["config.jsonc", "config.json"];

/// Legacy configuration file names in the home directory.
const LEGACY_CONFIG_FILE_NAMES: &[&str] = &[".hyprtile.jsonc", ".hyprtile.json"];

/// Application directory name under the config roots.
const APP_DIR: &str = "hyprtile";

/// Returns the possible configuration file paths in priority order.
///
/// 1. `$XDG_CONFIG_HOME/hyprtile/config.jsonc` or `config.json`
/// 2. `~/.config/hyprtile/config.jsonc` or `config.json`
/// 3. The platform config directory (`dirs::config_dir`)
/// 4. `~/.hyprtile.jsonc` or `~/.hyprtile.json`
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    fn push_dir(dir: &Path, paths: &mut Vec<PathBuf>) {
        for filename in CONFIG_FILE_NAMES {
            let path = dir.join(filename);
            // XDG_CONFIG_HOME is usually ~/.config
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }

    let mut paths = Vec::new();

    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        push_dir(&PathBuf::from(xdg_config).join(APP_DIR), &mut paths);
    }

    if let Some(home) = dirs::home_dir() {
        push_dir(&home.join(".config").join(APP_DIR), &mut paths);
    }

    if let Some(config_dir) = dirs::config_dir() {
        push_dir(&config_dir.join(APP_DIR), &mut paths);
    }

    if let Some(home) = dirs::home_dir() {
        for filename in LEGACY_CONFIG_FILE_NAMES {
            paths.push(home.join(filename));
        }
    }

    paths
}

/// Loads the configuration from the first available config file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no configuration file exists in any of
/// the expected locations, or any error from [`load_config_from_path`].
pub fn load_config() -> Result<(HyprTileConfig, PathBuf), ConfigError> {
    config_paths()
        .into_iter()
        .find(|path| path.exists())
        .map_or(Err(ConfigError::NotFound), load_config_from_path)
}

/// Loads the configuration from a specific path.
///
/// Comments are stripped before parsing.
///
/// # Errors
///
/// Returns `ConfigError::IoError` if the file could not be read and
/// `ConfigError::ParseError` if it is not valid JSON.
pub fn load_config_from_path(path: impl AsRef<Path>) -> Result<(HyprTileConfig, PathBuf), ConfigError> {
    let path = path.as_ref();
    let file = fs::File::open(path)?;
    let reader = json_comments::StripComments::new(file);
    let config: HyprTileConfig = serde_json::from_reader(reader)?;
    Ok((config, path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = HyprTileConfig::default();
        assert_eq!(config.tiling, TilingConfig::default());
        assert_eq!(config.tiling.new_window_behavior, NewWindowBehavior::Stack);
        assert_eq!(config.workspace_names.len(), 12);
        assert_eq!(config.workspace_names[6], "T");
        assert!(config.exceptions_file.is_none());
    }

    #[test]
    fn test_tiling_config_kebab_case_keys() {
        let json = r#"{
            "tiling": {
                "inner-gap": 8,
                "outer-gap-horizontal": 12,
                "outer-gap-vertical": 6,
                "window-padding": 2,
                "new-window-behavior": "master"
            }
        }"#;

        let config: HyprTileConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.tiling.inner_gap, 8);
        assert_eq!(config.tiling.outer_gap_horizontal, 12);
        assert_eq!(config.tiling.outer_gap_vertical, 6);
        assert_eq!(config.tiling.window_padding, 2);
        assert_eq!(config.tiling.new_window_behavior, NewWindowBehavior::Master);
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let config: HyprTileConfig = serde_json::from_str(r#"{ "tiling": { "inner-gap": 4 } }"#).unwrap();
        assert_eq!(config.tiling.inner_gap, 4);
        assert_eq!(config.tiling.window_padding, 0);
        assert_eq!(config.workspace_names, default_workspace_names());
    }

    #[test]
    fn test_unknown_behavior_is_rejected() {
        let result: Result<TilingConfig, _> =
            serde_json::from_str(r#"{ "new-window-behavior": "float" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_exceptions_path_defaults_next_to_config() {
        let config = HyprTileConfig::default();
        let path = config.exceptions_path(Some(Path::new("/etc/hyprtile/config.jsonc")));
        assert_eq!(path, Some(PathBuf::from("/etc/hyprtile/exceptions.txt")));
        assert_eq!(config.exceptions_path(None), None);
    }

    #[test]
    fn test_exceptions_path_explicit_wins() {
        let config = HyprTileConfig {
            exceptions_file: Some("/tmp/ex.txt".to_string()),
            ..HyprTileConfig::default()
        };
        let path = config.exceptions_path(Some(Path::new("/etc/hyprtile/config.jsonc")));
        assert_eq!(path, Some(PathBuf::from("/tmp/ex.txt")));
    }

    #[test]
    fn test_load_config_from_path_strips_comments() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{
                // line comment
                "tiling": {{ "inner-gap": 10 /* inline */ }}
            }}"#
        )
        .unwrap();

        let (config, path) = load_config_from_path(file.path()).unwrap();
        assert_eq!(config.tiling.inner_gap, 10);
        assert_eq!(path, file.path());
    }

    #[test]
    fn test_load_config_from_path_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{{ not json").unwrap();
        let err = load_config_from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_config_from_missing_path_is_io_error() {
        let err = load_config_from_path("/nonexistent/hyprtile/config.jsonc").unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn test_config_paths_end_with_legacy_files() {
        let paths = config_paths();
        if let Some(last) = paths.last() {
            assert!(last.ends_with(".hyprtile.json"));
        }
    }
}
