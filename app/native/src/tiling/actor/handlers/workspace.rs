//! Workspace command handlers.
//!
//! Indices are validated against the host's workspace count before anything
//! is requested of the host. Relative steps do not wrap.

use crate::tiling::actor::Tiler;
use crate::tiling::error::{TilingError, TilingResult};
use crate::tiling::host::Host;
use crate::tiling::state::WorkspaceIndex;

fn to_signed(index: usize) -> isize { isize::try_from(index).unwrap_or(isize::MAX) }

impl<H: Host> Tiler<H> {
    fn validate_workspace(&self, index: WorkspaceIndex) -> TilingResult<WorkspaceIndex> {
        let count = self.host.workspace_count();
        if index < count {
            Ok(index)
        } else {
            Err(TilingError::workspace_out_of_range(to_signed(index), count))
        }
    }

    /// Returns the workspace one step away from the active one.
    pub(super) fn step_workspace(&self, forward: bool) -> TilingResult<WorkspaceIndex> {
        let active = self.host.active_workspace_index();
        let target = if forward { active.checked_add(1) } else { active.checked_sub(1) };

        match target {
            Some(index) => self.validate_workspace(index),
            None => Err(TilingError::workspace_out_of_range(-1, self.host.workspace_count())),
        }
    }

    pub(super) fn switch_to_workspace(&mut self, index: WorkspaceIndex) -> TilingResult<()> {
        let index = self.validate_workspace(index)?;
        self.host.activate_workspace(index)?;
        tracing::debug!(index, "switched workspace");
        Ok(())
    }

    pub(super) fn move_to_workspace(&mut self, index: WorkspaceIndex) -> TilingResult<()> {
        let index = self.validate_workspace(index)?;
        let focused = self.host.focused_window().ok_or(TilingError::NoFocusedWindow)?;
        self.host.move_window_to_workspace(focused, index)?;
        tracing::debug!(window = focused, index, "moved window to workspace");
        Ok(())
    }
}
