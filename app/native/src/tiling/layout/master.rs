//! Master layout - one master column with the remaining windows split beside it.
//!
//! ```text
//! ┌──────────┬─────┐
//! │          │  2  │
//! │  Master  ├──┬──┤
//! │          │3 │4 │
//! └──────────┴──┴──┘
//! ```
//!
//! The master always takes the left column of the area. The stack column is
//! handed to the recursive split, so the master is never split against its
//! stack peers.

use super::{Gaps, LayoutResult, split};
use crate::tiling::state::{Rect, WindowId};

/// Master layout over an area that already has outer gaps applied.
#[must_use]
pub fn layout(window_ids: &[WindowId], area: &Rect, gaps: &Gaps) -> LayoutResult {
    let mut result = LayoutResult::new();

    let Some((&master, stack)) = window_ids.split_first() else {
        return result;
    };

    if stack.is_empty() {
        result.push((master, gaps.apply_padding(area)));
        return result;
    }

    let (master_area, stack_area) = split::split_columns(area, gaps);
    result.push((master, gaps.apply_padding(&master_area)));
    split::split_into(&mut result, stack, &stack_area, gaps);

    result
}
