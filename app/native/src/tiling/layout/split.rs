//! Recursive binary split.
//!
//! The first window takes one half of the area and the remaining windows
//! share the other half, split again the same way. Wide areas split into
//! columns (first window left), tall or square areas into rows (first
//! window on top).
//!
//! ```text
//!  Wide:                 Tall:
//! ┌──────────┬─────┐    ┌─────────┐
//! │          │  2  │    │    1    │
//! │    1     ├──┬──┤    ├────┬────┤
//! │          │3 │4 │    │ 2  │ 3  │
//! └──────────┴──┴──┘    └────┴────┘
//! ```

use super::{Gaps, LayoutResult};
use crate::tiling::state::{Rect, WindowId};

/// Splits `area` among `window_ids`.
///
/// Only single-window areas place a window; padding is applied there.
#[must_use]
pub fn layout(window_ids: &[WindowId], area: &Rect, gaps: &Gaps) -> LayoutResult {
    let mut result = LayoutResult::new();
    split_into(&mut result, window_ids, area, gaps);
    result
}

/// Appends the split of `area` among `window_ids` to `result`.
pub(super) fn split_into(result: &mut LayoutResult, window_ids: &[WindowId], area: &Rect, gaps: &Gaps) {
    let Some((&primary, secondary)) = window_ids.split_first() else {
        return;
    };

    if secondary.is_empty() {
        result.push((primary, gaps.apply_padding(area)));
        return;
    }

    let (primary_area, secondary_area) = if area.width > area.height {
        split_columns(area, gaps)
    } else {
        split_rows(area, gaps)
    };

    split_into(result, &[primary], &primary_area, gaps);
    split_into(result, secondary, &secondary_area, gaps);
}

/// Splits an area into a left and a right part around the inner gap.
#[must_use]
pub fn split_columns(area: &Rect, gaps: &Gaps) -> (Rect, Rect) {
    let left_width = gaps.leading_size(area.width);
    let right_width = area.width.saturating_sub(left_width).saturating_sub(gaps.inner);

    let left = Rect::new(area.x, area.y, left_width, area.height);
    let right_x = area.x.saturating_add(left_width).saturating_add(gaps.inner);
    let right = Rect::new(right_x, area.y, right_width, area.height);

    (left, right)
}

/// Splits an area into a top and a bottom part around the inner gap.
#[must_use]
pub fn split_rows(area: &Rect, gaps: &Gaps) -> (Rect, Rect) {
    let top_height = gaps.leading_size(area.height);
    let bottom_height = area.height.saturating_sub(top_height).saturating_sub(gaps.inner);

    let top = Rect::new(area.x, area.y, area.width, top_height);
    let bottom_y = area.y.saturating_add(top_height).saturating_add(gaps.inner);
    let bottom = Rect::new(area.x, bottom_y, area.width, bottom_height);

    (top, bottom)
}
