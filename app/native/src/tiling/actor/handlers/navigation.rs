//! Directional focus and swap handlers.

use crate::tiling::actor::Tiler;
use crate::tiling::error::{TilingError, TilingResult};
use crate::tiling::host::Host;
use crate::tiling::navigator::{self, Direction, find_target_in_direction, swap_target};
use crate::tiling::state::{Rect, WindowId};

impl<H: Host> Tiler<H> {
    /// Frames of the managed windows, in list order.
    pub(super) fn managed_frames(&self) -> Vec<(WindowId, Rect)> {
        self.windows
            .iter()
            .filter_map(|id| self.host.window(id).map(|info| (id, info.frame)))
            .collect()
    }

    /// Returns the focused window and its frame, if it is managed.
    fn focused_managed(&self) -> TilingResult<(WindowId, Rect)> {
        let focused = self.host.focused_window().ok_or(TilingError::NoFocusedWindow)?;
        if !self.windows.contains(focused) {
            return Err(TilingError::NotManaged(focused));
        }

        let info = self.host.window(focused).ok_or(TilingError::WindowNotFound(focused))?;
        Ok((focused, info.frame))
    }

    pub(super) fn focus_in_direction(&mut self, direction: Direction) -> TilingResult<()> {
        let (focused, frame) = self.focused_managed()?;
        let frames = self.managed_frames();

        let Some(target) = find_target_in_direction(focused, &frame, direction, &frames) else {
            tracing::debug!(window = focused, %direction, "no window in direction");
            return Ok(());
        };

        self.host.activate(target)?;
        tracing::debug!(from = focused, to = target, %direction, "focus moved");
        Ok(())
    }

    pub(super) fn swap_in_direction(&mut self, direction: Direction) -> TilingResult<()> {
        let (focused, frame) = self.focused_managed()?;
        let frames = self.managed_frames();

        let Some(target) = swap_target(&self.windows, focused, &frame, direction, &frames) else {
            tracing::debug!(window = focused, %direction, "no window to swap with");
            return Ok(());
        };

        self.windows.swap_ids(focused, target);
        tracing::debug!(window = focused, target, %direction, "swapped windows");

        self.tile_now();
        self.host.activate(focused)?;
        Ok(())
    }

    pub(super) fn swap_with_master(&mut self) -> TilingResult<()> {
        if self.windows.len() < 2 {
            tracing::trace!(managed = self.windows.len(), "nothing to swap with master");
            return Ok(());
        }

        let focused = self.host.focused_window().ok_or(TilingError::NoFocusedWindow)?;
        let master =
            navigator::swap_with_master(&mut self.windows, focused).ok_or(TilingError::NotManaged(focused))?;
        tracing::debug!(window = focused, master, "swapped with master");

        self.tile_now();
        self.host.activate(master)?;
        Ok(())
    }
}
