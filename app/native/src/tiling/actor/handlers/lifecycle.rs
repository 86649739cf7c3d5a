//! Enable/disable and workspace connection handlers.

use crate::tiling::actor::Tiler;
use crate::tiling::drag::DragState;
use crate::tiling::host::{Host, SignalKind, SignalTarget};
use crate::tiling::rules::ExceptionSet;

/// Per-window signals the tiler listens to while a window is managed.
pub(super) const WINDOW_SIGNALS: [SignalKind; 3] =
    [SignalKind::Unmanaged, SignalKind::SizeChanged, SignalKind::MinimizedChanged];

impl<H: Host> Tiler<H> {
    // ========================================================================
    // Enable / Disable
    // ========================================================================

    /// Starts tiling the active workspace.
    ///
    /// Reloads the exception set, subscribes to workspace switches and grab
    /// operations, and adopts every window already on the active workspace.
    pub fn enable(&mut self) {
        if self.enabled {
            tracing::debug!("tiling already enabled");
            return;
        }

        if let Some(path) = &self.exceptions_path {
            self.exceptions = ExceptionSet::load_or_empty(path);
        }

        self.enabled = true;
        self.subscribe(SignalTarget::WorkspaceManager, SignalKind::ActiveWorkspaceChanged);
        self.subscribe(SignalTarget::Display, SignalKind::GrabBegin);
        self.subscribe(SignalTarget::Display, SignalKind::GrabEnd);
        self.connect_to_workspace();

        tracing::info!(
            workspace = ?self.current_workspace,
            windows = self.windows.len(),
            exceptions = self.exceptions.len(),
            "tiling enabled"
        );
    }

    /// Stops tiling.
    ///
    /// Cancels every pending timer and drops every subscription. Window
    /// geometry is left as it is.
    pub fn disable(&mut self) {
        if !self.enabled {
            return;
        }

        let cancelled = self.tasks.cancel_all();
        self.scheduler.reset();

        for id in self.subscriptions.drain() {
            if let Err(err) = self.host.disconnect(id) {
                tracing::trace!(?id, error = %err, "subscription already gone");
            }
        }

        self.windows.clear();
        self.parked.clear();
        self.drag = DragState::new();
        self.current_workspace = None;
        self.enabled = false;

        tracing::info!(cancelled, "tiling disabled");
    }

    // ========================================================================
    // Subscriptions
    // ========================================================================

    /// Subscribes to a host signal, replacing any previous subscription for
    /// the same pair.
    pub(super) fn subscribe(&mut self, target: SignalTarget, kind: SignalKind) {
        match self.host.connect(target, kind, self.handle.clone()) {
            Ok(id) => {
                if let Some(previous) = self.subscriptions.insert(target, kind, id) {
                    let _ = self.host.disconnect(previous);
                }
            }
            Err(err) => tracing::debug!(?target, ?kind, error = %err, "failed to connect signal"),
        }
    }

    /// Drops every subscription attached to `target`.
    pub(super) fn unsubscribe_target(&mut self, target: SignalTarget) {
        for id in self.subscriptions.remove_target(target) {
            if let Err(err) = self.host.disconnect(id) {
                tracing::trace!(?target, ?id, error = %err, "subscription already gone");
            }
        }
    }

    // ========================================================================
    // Workspace connection
    // ========================================================================

    /// Adopts the active workspace's windows and listens for changes to it.
    pub(super) fn connect_to_workspace(&mut self) {
        let workspace = self.host.active_workspace_index();
        self.current_workspace = Some(workspace);

        for window in self.host.windows_on_workspace(workspace) {
            self.on_window_added(window);
        }

        self.subscribe(SignalTarget::Workspace(workspace), SignalKind::WindowAdded);
        self.subscribe(SignalTarget::Workspace(workspace), SignalKind::WindowRemoved);
        self.queue_tile();

        tracing::debug!(workspace, windows = self.windows.len(), "connected to workspace");
    }

    /// Forgets the current workspace's windows and drops its subscriptions.
    pub(super) fn disconnect_from_workspace(&mut self) {
        let mut released = self.windows.clear();
        released.append(&mut self.parked);

        for window in released {
            self.unsubscribe_target(SignalTarget::Window(window));
        }

        self.drag = DragState::new();

        if let Some(workspace) = self.current_workspace.take() {
            self.unsubscribe_target(SignalTarget::Workspace(workspace));
            tracing::debug!(workspace, "disconnected from workspace");
        }
    }

    pub(super) fn on_active_workspace_changed(&mut self) {
        let active = self.host.active_workspace_index();
        if self.current_workspace == Some(active) {
            tracing::trace!(workspace = active, "active workspace unchanged");
            return;
        }

        self.disconnect_from_workspace();
        self.connect_to_workspace();
    }
}
