//! Drag-to-reorder tracking.
//!
//! # Flow
//!
//! 1. The host reports a grab on a window; if the window is managed it is
//!    recorded as grabbed and size changes stop triggering reflows.
//! 2. On release, the drop target is resolved from the pointer position:
//!    the topmost managed window under the pointer wins.
//! 3. If the pointer is over no managed window, the managed window whose
//!    frame overlaps the grabbed window's frame the most wins.
//! 4. The grabbed window and the target swap list positions, and a reflow
//!    is queued whether or not a target was found.

use super::state::{Point, Rect, WindowId};

/// Tracks the window currently being dragged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    grabbed: Option<WindowId>,
}

impl DragState {
    /// Creates an idle drag state.
    #[must_use]
    pub const fn new() -> Self { Self { grabbed: None } }

    /// Returns the grabbed window, if any.
    #[must_use]
    pub const fn grabbed(&self) -> Option<WindowId> { self.grabbed }

    /// Returns `true` while a managed window is being dragged.
    #[must_use]
    pub const fn is_dragging(&self) -> bool { self.grabbed.is_some() }

    /// Records a grab. Grabs on unmanaged windows are ignored.
    ///
    /// Returns `true` if the grab was recorded.
    pub const fn begin(&mut self, window: WindowId, managed: bool) -> bool {
        if !managed {
            return false;
        }
        self.grabbed = Some(window);
        true
    }

    /// Ends the drag, returning the grabbed window.
    pub const fn take(&mut self) -> Option<WindowId> { self.grabbed.take() }

    /// Forgets `window` if it is the grabbed one. Returns `true` if it was.
    pub fn forget(&mut self, window: WindowId) -> bool {
        if self.grabbed == Some(window) {
            self.grabbed = None;
            return true;
        }
        false
    }
}

/// Resolves the drop target for a released drag.
///
/// # Arguments
///
/// * `grabbed` - The dragged window
/// * `grabbed_frame` - Its frame at release time
/// * `pointer` - Pointer position at release time
/// * `stack` - Managed windows in stacking order (bottom to top) with frames
/// * `managed` - Managed windows in list order with frames
#[must_use]
pub fn resolve_drop_target(
    grabbed: WindowId,
    grabbed_frame: &Rect,
    pointer: Point,
    stack: &[(WindowId, Rect)],
    managed: &[(WindowId, Rect)],
) -> Option<WindowId> {
    target_under_pointer(grabbed, pointer, stack)
        .or_else(|| target_by_overlap(grabbed, grabbed_frame, managed))
}

/// Returns the topmost window (other than `grabbed`) containing `pointer`.
#[must_use]
pub fn target_under_pointer(grabbed: WindowId, pointer: Point, stack: &[(WindowId, Rect)]) -> Option<WindowId> {
    stack
        .iter()
        .rev()
        .find(|(id, frame)| *id != grabbed && frame.contains_point(pointer))
        .map(|(id, _)| *id)
}

/// Returns the window (other than `grabbed`) with the largest positive
/// overlap with `grabbed_frame`. The first window wins ties.
#[must_use]
pub fn target_by_overlap(grabbed: WindowId, grabbed_frame: &Rect, managed: &[(WindowId, Rect)]) -> Option<WindowId> {
    let mut best: Option<(WindowId, i64)> = None;

    for (id, frame) in managed {
        if *id == grabbed {
            continue;
        }

        let area = grabbed_frame.intersection_area(frame);
        if area > best.map_or(0, |(_, best_area)| best_area) {
            best = Some((*id, area));
        }
    }

    best.map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: WindowId = 1;
    const B: WindowId = 2;
    const C: WindowId = 3;

    fn layout() -> Vec<(WindowId, Rect)> {
        vec![
            (A, Rect::new(0, 0, 960, 1080)),
            (B, Rect::new(960, 0, 960, 540)),
            (C, Rect::new(960, 540, 960, 540)),
        ]
    }

    #[test]
    fn test_begin_ignores_unmanaged() {
        let mut state = DragState::new();
        assert!(!state.begin(A, false));
        assert!(!state.is_dragging());
        assert!(state.begin(A, true));
        assert_eq!(state.grabbed(), Some(A));
        assert_eq!(state.take(), Some(A));
        assert_eq!(state.take(), None);
    }

    #[test]
    fn test_forget_only_matching_window() {
        let mut state = DragState::new();
        state.begin(A, true);
        assert!(!state.forget(B));
        assert!(state.forget(A));
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_release_over_window_targets_it() {
        let frames = layout();
        let dragged = Rect::new(900, 600, 960, 1080);
        let target = resolve_drop_target(A, &dragged, Point::new(1500, 800), &frames, &frames);
        assert_eq!(target, Some(C));
    }

    #[test]
    fn test_pointer_skips_grabbed_window() {
        // The dragged window sits on top of the stack under the pointer.
        let mut stack = layout();
        stack.push((A, Rect::new(1200, 100, 300, 300)));
        let target = target_under_pointer(A, Point::new(1300, 200), &stack);
        assert_eq!(target, Some(B));
    }

    #[test]
    fn test_pointer_prefers_topmost() {
        let stack = vec![(B, Rect::new(0, 0, 500, 500)), (C, Rect::new(100, 100, 500, 500))];
        assert_eq!(target_under_pointer(A, Point::new(200, 200), &stack), Some(C));
    }

    #[test]
    fn test_release_outside_falls_back_to_overlap() {
        let frames = layout();
        // Mostly over B, slightly over C; pointer outside every frame.
        let dragged = Rect::new(1000, -100, 800, 700);
        let target = resolve_drop_target(A, &dragged, Point::new(-50, -50), &frames, &frames);
        assert_eq!(target, Some(B));
    }

    #[test]
    fn test_zero_overlap_has_no_target() {
        let frames = layout();
        let dragged = Rect::new(3000, 3000, 100, 100);
        let target = resolve_drop_target(A, &dragged, Point::new(3050, 3050), &frames, &frames);
        assert_eq!(target, None);
    }

    #[test]
    fn test_overlap_ties_keep_first() {
        let managed = vec![(B, Rect::new(0, 0, 100, 100)), (C, Rect::new(100, 0, 100, 100))];
        let dragged = Rect::new(50, 0, 100, 100);
        assert_eq!(target_by_overlap(A, &dragged, &managed), Some(B));
    }
}
