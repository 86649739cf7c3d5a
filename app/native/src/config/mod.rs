//! Configuration module for `HyprTile`.
//!
//! This module provides configuration types, loading functionality, and file
//! watching for hot-reloading configuration changes.
//!
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.

pub mod types;
mod watcher;

use std::path::{Path, PathBuf};

pub use types::{
    ConfigError, DEFAULT_EXCEPTIONS_FILE, DEFAULT_WORKSPACE_NAMES, HyprTileConfig,
    NewWindowBehavior, TilingConfig, config_paths, load_config, load_config_from_path,
};
pub use watcher::{ConfigWatcher, watch_config_file};

/// A loaded configuration together with the file it came from.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    /// The parsed configuration.
    pub config: HyprTileConfig,
    /// The file it was read from, or `None` when defaults are in use.
    pub path: Option<PathBuf>,
}

impl LoadedConfig {
    /// Returns the resolved exceptions file path.
    #[must_use]
    pub fn exceptions_path(&self) -> Option<PathBuf> {
        self.config.exceptions_path(self.path.as_deref())
    }
}

/// Resolves the configuration to use.
///
/// An explicit path must exist and parse. Without one, the search paths are
/// tried in order and defaults are used when none exists.
///
/// # Errors
///
/// Returns an error if an explicit path is missing, or if the selected file
/// cannot be read or parsed.
pub fn resolve(custom_path: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    let result = custom_path.map_or_else(load_config, load_config_from_path);

    match result {
        Ok((config, path)) => Ok(LoadedConfig { config, path: Some(path) }),
        Err(ConfigError::NotFound) if custom_path.is_none() => {
            tracing::debug!("no configuration file found, using defaults");
            Ok(LoadedConfig::default())
        }
        Err(err) => Err(err),
    }
}

/// Generates the JSON Schema for the configuration file.
#[must_use]
pub fn print_schema() -> String {
    let schema = schemars::schema_for!(HyprTileConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_mentions_kebab_case_keys() {
        let schema = print_schema();
        assert!(schema.contains("inner-gap"));
        assert!(schema.contains("new-window-behavior"));
        assert!(schema.contains("workspace-names"));
    }

    #[test]
    fn test_resolve_explicit_missing_path_fails() {
        let result = resolve(Some(Path::new("/nonexistent/hyprtile.jsonc")));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_resolve_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.jsonc");
        std::fs::write(&path, r#"{ "tiling": { "window-padding": 3 } }"#).unwrap();

        let loaded = resolve(Some(&path)).unwrap();
        assert_eq!(loaded.config.tiling.window_padding, 3);
        assert_eq!(loaded.path.as_deref(), Some(path.as_path()));
        assert_eq!(loaded.exceptions_path(), Some(dir.path().join(DEFAULT_EXCEPTIONS_FILE)));
    }
}
