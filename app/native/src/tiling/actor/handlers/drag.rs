//! Grab and drop handlers.

use crate::tiling::actor::Tiler;
use crate::tiling::drag::resolve_drop_target;
use crate::tiling::host::Host;
use crate::tiling::state::{Rect, WindowId};

impl<H: Host> Tiler<H> {
    pub(super) fn on_grab_begin(&mut self, window: WindowId) {
        let managed = self.windows.contains(window);
        if self.drag.begin(window, managed) {
            tracing::debug!(window, "drag started");
        } else {
            tracing::trace!(window, "grab on unmanaged window");
        }
    }

    /// Swaps the dropped window with the one it landed on, then reflows.
    pub(super) fn on_grab_end(&mut self) {
        let Some(grabbed) = self.drag.take() else {
            return;
        };

        match self.drop_target(grabbed) {
            Some(target) => {
                self.windows.swap_ids(grabbed, target);
                tracing::debug!(window = grabbed, target, "dropped onto window, swapped");
            }
            None => tracing::debug!(window = grabbed, "dropped without a target"),
        }

        self.queue_tile();
    }

    fn drop_target(&self, grabbed: WindowId) -> Option<WindowId> {
        let grabbed_frame = self.host.window(grabbed)?.frame;
        let pointer = self.host.pointer_position();

        let stack: Vec<(WindowId, Rect)> = self
            .host
            .window_stack()
            .into_iter()
            .filter(|&id| self.windows.contains(id))
            .filter_map(|id| self.host.window(id).map(|info| (id, info.frame)))
            .collect();

        resolve_drop_target(grabbed, &grabbed_frame, pointer, &stack, &self.managed_frames())
    }
}
