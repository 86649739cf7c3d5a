//! Window lifecycle handlers.

use super::lifecycle::WINDOW_SIGNALS;
use crate::tiling::actor::{Tiler, TilerMessage};
use crate::tiling::constants::timing::CENTERING_DELAY;
use crate::tiling::error::{TilingError, TilingResult};
use crate::tiling::host::{Host, SignalTarget};
use crate::tiling::layout::center_in;
use crate::tiling::rules::{WindowDisposition, classify};
use crate::tiling::state::WindowId;
use crate::tiling::tasks::TaskId;

impl<H: Host> Tiler<H> {
    // ========================================================================
    // Added / Removed
    // ========================================================================

    /// Adopts a window that appeared on the tiled workspace.
    ///
    /// Exception windows are centered instead and never become managed.
    pub(super) fn on_window_added(&mut self, window: WindowId) {
        if self.windows.contains(window) || self.parked.contains(&window) {
            tracing::trace!(window, "window already managed");
            return;
        }

        let Some(info) = self.host.window(window) else {
            tracing::debug!(window, "window vanished before it could be managed");
            return;
        };

        match classify(&info, &self.exceptions) {
            WindowDisposition::Center => {
                tracing::debug!(window, class = ?info.wm_class, "exception window, centering");
                self.center_window(window);
                return;
            }
            WindowDisposition::Ignore => {
                tracing::trace!(window, window_type = ?info.window_type, "ignoring non-normal window");
                return;
            }
            WindowDisposition::Tile => {}
        }

        self.windows.insert(window, self.config.new_window_behavior);

        for kind in WINDOW_SIGNALS {
            self.subscribe(SignalTarget::Window(window), kind);
        }

        tracing::debug!(window, managed = self.windows.len(), "managing window");
        self.queue_tile();
    }

    /// Forgets a window that closed or left the tiled workspace.
    pub(super) fn on_window_removed(&mut self, window: WindowId) {
        let was_managed = self.windows.remove(window);
        let was_parked = self.remove_parked(window);

        self.unsubscribe_target(SignalTarget::Window(window));

        if self.drag.forget(window) {
            tracing::debug!(window, "grabbed window went away");
        }

        if was_managed || was_parked {
            tracing::debug!(window, managed = self.windows.len(), "window no longer managed");
        }

        self.queue_tile();
    }

    // ========================================================================
    // State changes
    // ========================================================================

    pub(super) fn on_size_changed(&mut self, window: WindowId) {
        if self.drag.is_dragging() {
            tracing::trace!(window, "size change during grab, waiting for drop");
            return;
        }

        self.queue_tile();
    }

    /// Parks minimized windows and brings restored ones back.
    pub(super) fn on_minimized_changed(&mut self, window: WindowId) {
        let Some(info) = self.host.window(window) else {
            tracing::debug!(window, "minimized window vanished");
            return;
        };

        if info.minimized {
            if self.windows.remove(window) {
                self.parked.push(window);
                tracing::debug!(window, "window minimized, parked");
            }
        } else if self.remove_parked(window) {
            self.windows.insert(window, self.config.new_window_behavior);
            tracing::debug!(window, "window restored");
        }

        self.queue_tile();
    }

    fn remove_parked(&mut self, window: WindowId) -> bool {
        let Some(pos) = self.parked.iter().position(|&w| w == window) else {
            return false;
        };
        self.parked.remove(pos);
        true
    }

    // ========================================================================
    // Exception centering
    // ========================================================================

    /// Centers an exception window once the host has finished placing it.
    fn center_window(&mut self, window: WindowId) {
        let task = self.tasks.schedule(CENTERING_DELAY, &self.handle, move |task| TilerMessage::CenterDue {
            task,
            window,
        });
        tracing::trace!(window, %task, "centering scheduled");
    }

    pub(in crate::tiling::actor) fn on_center_due(&mut self, task: TaskId, window: WindowId) -> TilingResult<()> {
        if !self.tasks.complete(task) {
            tracing::trace!(%task, "stale centering timer");
            return Ok(());
        }

        let info = self.host.window(window).ok_or(TilingError::WindowNotFound(window))?;
        if info.maximized {
            self.host.unmaximize(window)?;
        }

        let Some(work_area) = self.host.work_area_for_monitor(info.monitor) else {
            tracing::debug!(window, monitor = info.monitor, "no work area for monitor");
            return Ok(());
        };

        // Unmaximizing changes the frame, so size it again.
        let frame = self.host.window(window).map_or(info.frame, |w| w.frame);
        let origin = center_in(&work_area, &frame);
        self.host.move_frame(window, origin)?;
        tracing::debug!(window, x = origin.x, y = origin.y, "centered exception window");

        self.handle.send(TilerMessage::PinAbove { window })?;
        Ok(())
    }

    pub(in crate::tiling::actor) fn on_pin_above(&mut self, window: WindowId) -> TilingResult<()> {
        if self.host.window(window).is_none() {
            return Err(TilingError::WindowNotFound(window));
        }

        if !self.host.supports_keep_above() {
            tracing::trace!(window, "host cannot keep windows above");
            return Ok(());
        }

        self.host.set_keep_above(window)?;
        Ok(())
    }
}
