//! Floating placement for windows that are not tiled.

use crate::tiling::state::{Point, Rect};

/// Returns the origin that centers `frame` inside `work_area`.
///
/// The frame keeps its size; the origin is
/// `work.x + floor((work.w - frame.w) / 2)` and likewise for `y`.
#[must_use]
pub const fn center_in(work_area: &Rect, frame: &Rect) -> Point {
    Point {
        x: work_area.x + (work_area.width - frame.width).div_euclid(2),
        y: work_area.y + (work_area.height - frame.height).div_euclid(2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_in_work_area() {
        let work = Rect::new(0, 32, 1920, 1048);
        let frame = Rect::new(5, 5, 800, 600);
        assert_eq!(center_in(&work, &frame), Point::new(560, 256));
    }

    #[test]
    fn test_center_in_odd_remainder_floors() {
        let work = Rect::new(0, 0, 101, 101);
        let frame = Rect::new(0, 0, 50, 50);
        assert_eq!(center_in(&work, &frame), Point::new(25, 25));
    }

    #[test]
    fn test_center_oversized_window_goes_negative() {
        let work = Rect::new(100, 0, 800, 600);
        let frame = Rect::new(0, 0, 1001, 600);
        assert_eq!(center_in(&work, &frame), Point::new(-1, 0));
    }
}
