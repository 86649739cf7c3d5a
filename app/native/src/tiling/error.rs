//! Error types for the tiling engine.
//!
//! Errors raised inside the tiler never escape its message loop: handlers
//! return [`TilingResult`] and the loop logs the failure at the level the
//! error calls for (see [`TilingError::log_level`]).
//!
//! # Error Categories
//!
//! - **Lookup errors**: the window is gone, not managed, or nothing is focused
//! - **Validation errors**: workspace index or name is out of range
//! - **Host errors**: the host rejected or could not perform a request
//! - **Actor errors**: the tiler's channel is closed

use thiserror::Error;

use super::host::HostError;
use super::state::WindowId;

/// Result type alias for tiling operations.
pub type TilingResult<T> = Result<T, TilingError>;

/// Errors that can occur during tiling operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TilingError {
    /// The host no longer knows the window.
    #[error("Window {0} not found")]
    WindowNotFound(WindowId),

    /// The window exists but is not in the managed list.
    #[error("Window {0} is not managed")]
    NotManaged(WindowId),

    /// A command needed a focused window and there is none.
    #[error("No focused window")]
    NoFocusedWindow,

    /// A workspace index outside `0..count`.
    ///
    /// Relative steps past either end (`workspace-prev` on the first
    /// workspace) also report this, with `index` set to `-1` or `count`.
    #[error("Workspace index {index} out of range (workspace count: {count})")]
    WorkspaceOutOfRange {
        /// The requested zero-based index.
        index: isize,
        /// The number of workspaces the host reports.
        count: usize,
    },

    /// A workspace name that is not in `workspace-names`.
    #[error("Unknown workspace '{0}'")]
    UnknownWorkspace(String),

    /// The host failed to carry out a request.
    #[error("Host error: {0}")]
    Host(#[from] HostError),

    /// The tiler's message loop is gone.
    #[error("Tiler is not running")]
    ActorClosed,
}

impl TilingError {
    /// Creates an out-of-range error for a workspace index.
    #[must_use]
    pub const fn workspace_out_of_range(index: isize, count: usize) -> Self {
        Self::WorkspaceOutOfRange { index, count }
    }

    /// Returns `true` if this error indicates a resource was not found.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::WindowNotFound(_)
                | Self::NotManaged(_)
                | Self::NoFocusedWindow
                | Self::Host(HostError::WindowGone)
        )
    }

    /// Returns the level the message loop logs this error at.
    ///
    /// Missing windows and unsupported requests are expected and log at
    /// debug. Workspace validation and real host failures log at warn.
    #[must_use]
    pub const fn log_level(&self) -> tracing::Level {
        if self.is_not_found() {
            return tracing::Level::DEBUG;
        }
        match self {
            Self::WorkspaceOutOfRange { .. }
            | Self::UnknownWorkspace(_)
            | Self::ActorClosed
            | Self::Host(HostError::Failed(_)) => tracing::Level::WARN,
            _ => tracing::Level::DEBUG,
        }
    }
}
