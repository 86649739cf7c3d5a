//! Gap configuration and handling for layouts.

use crate::config::TilingConfig;
use crate::tiling::state::Rect;

/// Resolved gap values for layout calculations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gaps {
    /// Gap between adjacent tiles.
    pub inner: i32,
    /// Outer gap on the left and right edges of the work area.
    pub outer_h: i32,
    /// Outer gap on the top and bottom edges of the work area.
    pub outer_v: i32,
    /// Padding applied inside every placed tile.
    pub padding: i32,
}

impl Gaps {
    /// Creates gaps with uniform inner and outer values and no padding.
    #[must_use]
    pub const fn uniform(inner: i32, outer: i32) -> Self {
        Self { inner, outer_h: outer, outer_v: outer, padding: 0 }
    }

    /// Resolves gaps from the tiling configuration.
    #[must_use]
    pub const fn from_config(config: &TilingConfig) -> Self {
        Self {
            inner: config.inner_gap,
            outer_h: config.outer_gap_horizontal,
            outer_v: config.outer_gap_vertical,
            padding: config.window_padding,
        }
    }

    /// Applies outer gaps to a work area.
    #[must_use]
    pub const fn apply_outer(&self, frame: &Rect) -> Rect { frame.inset(self.outer_h, self.outer_v) }

    /// Applies the per-tile padding to a placed frame.
    #[must_use]
    pub const fn apply_padding(&self, frame: &Rect) -> Rect { frame.shrink(self.padding) }

    /// Returns the size of the leading half when `dim` is split around an
    /// inner gap: `floor(dim / 2) - floor(inner / 2)`.
    #[must_use]
    pub const fn leading_size(&self, dim: i32) -> i32 { dim.div_euclid(2).saturating_sub(self.inner.div_euclid(2)) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NewWindowBehavior;

    #[test]
    fn test_from_config() {
        let config = TilingConfig {
            inner_gap: 8,
            outer_gap_horizontal: 12,
            outer_gap_vertical: 6,
            window_padding: 2,
            new_window_behavior: NewWindowBehavior::Stack,
        };
        let gaps = Gaps::from_config(&config);
        assert_eq!(gaps, Gaps { inner: 8, outer_h: 12, outer_v: 6, padding: 2 });
    }

    #[test]
    fn test_apply_outer() {
        let gaps = Gaps { inner: 0, outer_h: 10, outer_v: 20, padding: 0 };
        let frame = Rect::new(0, 0, 1920, 1080);
        assert_eq!(gaps.apply_outer(&frame), Rect::new(10, 20, 1900, 1040));
    }

    #[test]
    fn test_leading_size_floors_both_halves() {
        let gaps = Gaps::uniform(5, 0);
        // floor(101 / 2) - floor(5 / 2) = 50 - 2
        assert_eq!(gaps.leading_size(101), 48);
        assert_eq!(Gaps::default().leading_size(1920), 960);
    }

    #[test]
    fn test_leading_size_floors_negative_dimensions() {
        assert_eq!(Gaps::default().leading_size(-3), -2);
    }
}
