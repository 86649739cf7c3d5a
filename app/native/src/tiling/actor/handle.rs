//! Handle for communicating with the tiler.
//!
//! The `TilerHandle` is the only way collaborators reach the tiler: the host
//! posts events through it, timers post their expiries through it, and
//! callers send commands and queries through it.

use std::path::Path;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};

use super::messages::{QueryResult, TilerMessage, TilerQuery};
use crate::config::{ConfigWatcher, TilingConfig, watch_config_file};
use crate::tiling::commands::Command;
use crate::tiling::constants::channel::QUERY_TIMEOUT_MS;
use crate::tiling::error::TilingError;
use crate::tiling::host::HostEvent;
use crate::tiling::state::WindowId;

/// Error types for actor communication.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActorError {
    /// Failed to send message to the tiler.
    #[error("Failed to send message to tiler: channel closed")]
    SendFailed,
    /// Failed to receive a response from the tiler.
    #[error("Failed to receive response from tiler: channel closed")]
    ReceiveFailed,
    /// Query timed out.
    #[error("Query timed out after {0:?}")]
    Timeout(Duration),
    /// The tiler answered with an unexpected result type.
    #[error("Unexpected query result: {0}")]
    UnexpectedResult(String),
}

impl From<ActorError> for TilingError {
    fn from(_: ActorError) -> Self { Self::ActorClosed }
}

/// Handle for communicating with the tiler.
///
/// This handle is cheap to clone and can be shared across threads.
#[derive(Debug, Clone)]
pub struct TilerHandle {
    sender: mpsc::UnboundedSender<TilerMessage>,
}

impl TilerHandle {
    /// Create a new handle with the given sender.
    pub(crate) const fn new(sender: mpsc::UnboundedSender<TilerMessage>) -> Self { Self { sender } }

    /// Creates a handle together with the receiving end of its channel.
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<TilerMessage>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(sender), receiver)
    }

    /// Returns `true` if the tiler's receiver has been dropped.
    #[must_use]
    pub fn is_closed(&self) -> bool { self.sender.is_closed() }

    // ========================================================================
    // Fire-and-forget sending
    // ========================================================================

    /// Send a message to the tiler without waiting for it to be handled.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the channel is closed (the tiler has stopped).
    pub fn send(&self, msg: TilerMessage) -> Result<(), ActorError> {
        self.sender.send(msg).map_err(|_| ActorError::SendFailed)
    }

    /// Post a host event.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the tiler has stopped.
    pub fn host_event(&self, event: HostEvent) -> Result<(), ActorError> { self.send(TilerMessage::Host(event)) }

    /// Run a named command.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the tiler has stopped.
    pub fn command(&self, command: Command) -> Result<(), ActorError> { self.send(TilerMessage::Command(command)) }

    /// Replace the tiling configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the tiler has stopped.
    pub fn config_changed(&self, config: TilingConfig) -> Result<(), ActorError> {
        self.send(TilerMessage::ConfigChanged(config))
    }

    /// Watches a configuration file and forwards the tiling section of every
    /// successful reload as [`TilerMessage::ConfigChanged`].
    ///
    /// Reloads after the tiler has stopped are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the file's directory cannot be watched.
    pub fn watch_config(&self, path: &Path) -> notify::Result<ConfigWatcher> {
        let handle = self.clone();
        watch_config_file(path, move |config| {
            if handle.config_changed(config.tiling).is_err() {
                tracing::trace!("tiler stopped, dropping configuration reload");
            }
        })
    }

    /// Enable tiling.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the tiler has stopped.
    pub fn enable(&self) -> Result<(), ActorError> { self.send(TilerMessage::Enable) }

    /// Disable tiling.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the tiler has stopped.
    pub fn disable(&self) -> Result<(), ActorError> { self.send(TilerMessage::Disable) }

    /// Stop the tiler's message loop.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the tiler has already stopped.
    pub fn shutdown(&self) -> Result<(), ActorError> { self.send(TilerMessage::Shutdown) }

    // ========================================================================
    // Query methods
    // ========================================================================

    /// Execute a query and wait for the result.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the channel is closed, or
    /// [`ActorError::ReceiveFailed`] if the response channel is closed.
    pub async fn query(&self, query: TilerQuery) -> Result<QueryResult, ActorError> {
        let (tx, rx) = oneshot::channel();
        self.send(TilerMessage::Query { query, respond_to: tx })?;
        rx.await.map_err(|_| ActorError::ReceiveFailed)
    }

    /// Execute a query with a timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::Timeout`] if the query doesn't complete in time,
    /// or any error from [`Self::query`].
    pub async fn query_timeout(&self, query: TilerQuery, timeout: Duration) -> Result<QueryResult, ActorError> {
        tokio::time::timeout(timeout, self.query(query))
            .await
            .map_err(|_| ActorError::Timeout(timeout))?
    }

    // ========================================================================
    // Convenience query methods
    // ========================================================================

    /// Get the managed window list, master first.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the tiler fails.
    pub async fn managed_windows(&self) -> Result<Vec<WindowId>, ActorError> {
        let timeout = Duration::from_millis(QUERY_TIMEOUT_MS);
        match self.query_timeout(TilerQuery::ManagedWindows, timeout).await? {
            QueryResult::Windows(ids) => Ok(ids),
            other => Err(ActorError::UnexpectedResult(format!("{other:?}"))),
        }
    }

    /// Get whether tiling is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the tiler fails.
    pub async fn is_enabled(&self) -> Result<bool, ActorError> {
        let timeout = Duration::from_millis(QUERY_TIMEOUT_MS);
        match self.query_timeout(TilerQuery::Enabled, timeout).await? {
            QueryResult::Bool(enabled) => Ok(enabled),
            other => Err(ActorError::UnexpectedResult(format!("{other:?}"))),
        }
    }
}
