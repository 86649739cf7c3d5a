//! Handler modules for the tiler actor.
//!
//! Each module adds the handlers for one category of messages to
//! [`Tiler`]:
//! - `lifecycle` - Enable, disable and workspace (re)connection
//! - `window` - Window lifecycle, minimize and exception centering
//! - `reflow` - Debounced and immediate layout passes
//! - `navigation` - Directional focus and swapping
//! - `drag` - Grab begin/end and drop-swap
//! - `workspace` - Workspace switching and moving windows between workspaces

mod drag;
mod lifecycle;
mod navigation;
mod reflow;
mod window;
mod workspace;

use super::Tiler;
use crate::tiling::commands::Command;
use crate::tiling::error::{TilingError, TilingResult};
use crate::tiling::host::{Host, HostEvent};

/// Logs a failed handler at the error's level.
pub(super) fn log_error(context: &str, err: &TilingError) {
    match err.log_level() {
        tracing::Level::WARN => tracing::warn!(context, error = %err, "tiling operation failed"),
        _ => tracing::debug!(context, error = %err, "tiling operation skipped"),
    }
}

impl<H: Host> Tiler<H> {
    /// Routes a host event to its handler.
    pub(super) fn on_host_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::WindowAdded { workspace, window } => {
                if self.current_workspace == Some(workspace) {
                    self.on_window_added(window);
                } else {
                    tracing::trace!(workspace, window, "window added to another workspace");
                }
            }
            HostEvent::WindowRemoved { workspace, window } => {
                if self.current_workspace == Some(workspace) {
                    self.on_window_removed(window);
                } else {
                    tracing::trace!(workspace, window, "window removed from another workspace");
                }
            }
            HostEvent::Unmanaged { window } => self.on_window_removed(window),
            HostEvent::SizeChanged { window } => self.on_size_changed(window),
            HostEvent::MinimizedChanged { window } => self.on_minimized_changed(window),
            HostEvent::ActiveWorkspaceChanged => self.on_active_workspace_changed(),
            HostEvent::GrabBegin { window } => self.on_grab_begin(window),
            HostEvent::GrabEnd => self.on_grab_end(),
        }
    }

    /// Runs a command against the current state.
    ///
    /// Commands do nothing while tiling is disabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot apply, e.g. no window is
    /// focused or the target workspace does not exist.
    pub fn execute(&mut self, command: Command) -> TilingResult<()> {
        if !self.enabled {
            tracing::trace!(%command, "tiler disabled, ignoring command");
            return Ok(());
        }

        tracing::debug!(%command, "executing command");

        match command {
            Command::SwapWithMaster => self.swap_with_master(),
            Command::Swap(direction) => self.swap_in_direction(direction),
            Command::Focus(direction) => self.focus_in_direction(direction),
            Command::SwitchToWorkspace(target) => {
                let index = target.resolve(&self.workspace_names)?;
                self.switch_to_workspace(index)
            }
            Command::MoveToWorkspace(target) => {
                let index = target.resolve(&self.workspace_names)?;
                self.move_to_workspace(index)
            }
            Command::WorkspaceNext => {
                let index = self.step_workspace(true)?;
                self.switch_to_workspace(index)
            }
            Command::WorkspacePrev => {
                let index = self.step_workspace(false)?;
                self.switch_to_workspace(index)
            }
            Command::MoveToWorkspaceNext => {
                let index = self.step_workspace(true)?;
                self.move_to_workspace(index)
            }
            Command::MoveToWorkspacePrev => {
                let index = self.step_workspace(false)?;
                self.move_to_workspace(index)
            }
        }
    }
}
