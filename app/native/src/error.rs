//! Error types for HyprTile.
//!
//! `HyprTileError` is the crate-level error returned by configuration
//! loading and the CLI. The engine itself reports [`TilingError`].

use thiserror::Error;

use crate::config::ConfigError;
use crate::tiling::TilingError;

/// Errors that can occur during application execution.
#[derive(Debug, Error)]
pub enum HyprTileError {
    /// Invalid command arguments.
    #[error("{0}")]
    InvalidArguments(String),
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    /// IO error.
    #[error("IO error: {0}")]
    Io(String),
    /// Tiling engine error.
    #[error("Tiling error: {0}")]
    Tiling(#[from] TilingError),
    /// Output serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for HyprTileError {
    fn from(err: std::io::Error) -> Self { Self::Io(err.to_string()) }
}

impl From<serde_json::Error> for HyprTileError {
    fn from(err: serde_json::Error) -> Self { Self::Serialization(err.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_arguments_display() {
        let err = HyprTileError::InvalidArguments("--windows must be at least 0".to_string());
        assert_eq!(err.to_string(), "--windows must be at least 0");
    }

    #[test]
    fn test_config_error_display() {
        let err: HyprTileError = ConfigError::NotFound.into();
        let msg = err.to_string();
        assert!(msg.contains("Configuration error"));
    }

    #[test]
    fn test_io_error_from_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let err: HyprTileError = io_err.into();
        assert!(matches!(err, HyprTileError::Io(_)));
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn test_tiling_error_display() {
        let err: HyprTileError = TilingError::UnknownWorkspace("zz".to_string()).into();
        let msg = err.to_string();
        assert!(msg.contains("Tiling error"));
        assert!(msg.contains("zz"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: HyprTileError = json_err.into();
        assert!(matches!(err, HyprTileError::Serialization(_)));
    }
}
