//! Layout algorithms for the tiling engine.
//!
//! The engine has a single tiled layout: a master column on the left with the
//! stack split recursively beside it. Windows opted out of tiling are
//! centered instead (see [`center_in`]).
//!
//! # Performance
//!
//! Layout results use `SmallVec` to avoid heap allocations for workspaces with
//! up to 16 windows (the common case).

mod floating;
mod gaps;
mod master;
pub mod split;

pub use floating::center_in;
pub use gaps::Gaps;
use smallvec::SmallVec;

use crate::config::TilingConfig;
use crate::tiling::state::{Rect, WindowId};

// ============================================================================
// Layout Result
// ============================================================================

/// Inline capacity for layout results.
pub const LAYOUT_INLINE_CAP: usize = 16;

/// Result of a layout calculation.
///
/// Maps window IDs to their calculated frames, in window-list order.
pub type LayoutResult = SmallVec<[(WindowId, Rect); LAYOUT_INLINE_CAP]>;

// ============================================================================
// Main Layout Function
// ============================================================================

/// Calculates window frames for one reflow pass.
///
/// # Arguments
///
/// * `window_ids` - Windows to tile, master first
/// * `work_area` - The monitor work area (panels excluded)
/// * `config` - Gap and padding settings
///
/// The outer gaps are removed from the work area first, then the master
/// layout runs over what remains. An empty list yields an empty result.
#[must_use]
pub fn calculate_layout(window_ids: &[WindowId], work_area: &Rect, config: &TilingConfig) -> LayoutResult {
    calculate_layout_with_gaps(window_ids, work_area, &Gaps::from_config(config))
}

/// Calculates window frames with already resolved gaps.
#[must_use]
pub fn calculate_layout_with_gaps(window_ids: &[WindowId], work_area: &Rect, gaps: &Gaps) -> LayoutResult {
    if window_ids.is_empty() {
        return SmallVec::new();
    }

    let inner = gaps.apply_outer(work_area);
    master::layout(window_ids, &inner, gaps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NewWindowBehavior;

    fn config(inner: i32, outer_h: i32, outer_v: i32, padding: i32) -> TilingConfig {
        TilingConfig {
            inner_gap: inner,
            outer_gap_horizontal: outer_h,
            outer_gap_vertical: outer_v,
            window_padding: padding,
            new_window_behavior: NewWindowBehavior::Stack,
        }
    }

    #[test]
    fn test_empty_list_is_noop() {
        let result = calculate_layout(&[], &Rect::new(0, 0, 1920, 1080), &TilingConfig::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_single_window_uses_outer_gaps_and_padding() {
        let result = calculate_layout(&[1], &Rect::new(0, 0, 1920, 1080), &config(8, 10, 20, 4));
        assert_eq!(result.as_slice(), &[(1, Rect::new(14, 24, 1892, 1032))]);
    }

    #[test]
    fn test_three_windows_without_gaps() {
        let result = calculate_layout(&[1, 2, 3], &Rect::new(0, 0, 1920, 1080), &TilingConfig::default());
        assert_eq!(result.as_slice(), &[
            (1, Rect::new(0, 0, 960, 1080)),
            (2, Rect::new(960, 0, 960, 540)),
            (3, Rect::new(960, 540, 960, 540)),
        ]);
    }

    #[test]
    fn test_gaps_and_padding_combined() {
        let result = calculate_layout(&[1, 2], &Rect::new(0, 0, 1000, 600), &config(10, 20, 30, 5));
        // inner area: {20, 30, 960, 540}; master width 480 - 5 = 475
        assert_eq!(result[0], (1, Rect::new(25, 35, 465, 530)));
        assert_eq!(result[1], (2, Rect::new(510, 35, 465, 530)));
    }

    #[test]
    fn test_result_order_follows_window_list() {
        let result = calculate_layout(&[9, 4, 7, 1], &Rect::new(0, 0, 1920, 1080), &TilingConfig::default());
        let ids: Vec<WindowId> = result.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![9, 4, 7, 1]);
    }
}
