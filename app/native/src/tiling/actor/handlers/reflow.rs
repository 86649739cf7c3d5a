//! Layout passes.
//!
//! Bursts of events are coalesced: `queue_tile` arms one timer and every
//! request that arrives before it fires is absorbed. Commands that move
//! windows on purpose use `tile_now` instead.

use crate::config::TilingConfig;
use crate::tiling::actor::{Tiler, TilerMessage};
use crate::tiling::constants::timing::TILING_DELAY;
use crate::tiling::host::Host;
use crate::tiling::layout::calculate_layout;
use crate::tiling::state::WindowId;
use crate::tiling::tasks::TaskId;

impl<H: Host> Tiler<H> {
    /// Requests a debounced layout pass.
    pub(super) fn queue_tile(&mut self) {
        if !self.enabled {
            return;
        }

        if !self.scheduler.request() {
            tracing::trace!(state = ?self.scheduler.state(), "reflow already pending");
            return;
        }

        let task = self.tasks.schedule(TILING_DELAY, &self.handle, |task| TilerMessage::ReflowDue { task });
        self.scheduler.armed(task);
        tracing::trace!(%task, "reflow scheduled");
    }

    /// Runs a layout pass right away.
    pub(super) fn tile_now(&mut self) {
        if !self.scheduler.begin_now() {
            tracing::debug!("layout pass already running");
            return;
        }

        self.tile_windows();
        self.scheduler.finish();
    }

    pub(in crate::tiling::actor) fn on_reflow_due(&mut self, task: TaskId) {
        if !self.tasks.complete(task) {
            tracing::trace!(%task, "stale reflow timer");
            return;
        }

        if !self.scheduler.fire(task) {
            tracing::trace!(%task, state = ?self.scheduler.state(), "reflow timer no longer armed");
            return;
        }

        self.tile_windows();
        self.scheduler.finish();
    }

    /// Ends a pass that unwound before reaching `finish`.
    pub(in crate::tiling::actor) fn release_interrupted_pass(&mut self) {
        if self.scheduler.is_running() {
            self.scheduler.finish();
            tracing::warn!(state = ?self.scheduler.state(), "layout pass interrupted, scheduler released");
        }
    }

    /// Places every tileable managed window.
    fn tile_windows(&mut self) {
        let mut tileable: Vec<WindowId> = Vec::with_capacity(self.windows.len());
        let mut maximized: Vec<WindowId> = Vec::new();

        for id in self.windows.iter() {
            match self.host.window(id) {
                Some(info) if !info.minimized => {
                    if info.maximized {
                        maximized.push(id);
                    }
                    tileable.push(id);
                }
                Some(_) => {}
                None => tracing::trace!(window = id, "managed window vanished"),
            }
        }

        if tileable.is_empty() {
            return;
        }

        let Some(work_area) = self.host.primary_work_area() else {
            tracing::debug!("no primary monitor, skipping layout pass");
            return;
        };

        for id in maximized {
            if let Err(err) = self.host.unmaximize(id) {
                tracing::debug!(window = id, error = %err, "failed to unmaximize");
            }
        }

        let placements = calculate_layout(&tileable, &work_area, &self.config);
        for (id, frame) in placements {
            if let Err(err) = self.host.move_resize_frame(id, frame) {
                tracing::debug!(window = id, %frame, error = %err, "failed to place window");
            }
        }

        self.passes += 1;
        tracing::debug!(windows = tileable.len(), pass = self.passes, "layout pass complete");
    }

    pub(in crate::tiling::actor) fn on_config_changed(&mut self, config: TilingConfig) {
        if self.config == config {
            tracing::trace!("tiling configuration unchanged");
            return;
        }

        self.config = config;
        tracing::info!(
            inner_gap = config.inner_gap,
            outer_gap_horizontal = config.outer_gap_horizontal,
            outer_gap_vertical = config.outer_gap_vertical,
            window_padding = config.window_padding,
            new_window_behavior = config.new_window_behavior.as_str(),
            "tiling configuration changed"
        );

        self.queue_tile();
    }
}
