//! Directional navigation over tiled windows.
//!
//! Targets are chosen purely from frame origins: a candidate lies "left" of
//! the source when its origin x is strictly smaller, "up" when its origin y
//! is strictly smaller, and so on. Among candidates on the right side the
//! one with the smallest deviation on the other axis wins; ties go to the
//! earliest window in list order.

use std::str::FromStr;

use super::managed::ManagedWindows;
use super::state::{Rect, WindowId};

/// A navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in command-name order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// Returns the lowercase name used in command names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// Returns whether `candidate` lies in this direction from `source`.
    #[must_use]
    const fn admits(self, source: &Rect, candidate: &Rect) -> bool {
        match self {
            Self::Left => candidate.x < source.x,
            Self::Right => candidate.x > source.x,
            Self::Up => candidate.y < source.y,
            Self::Down => candidate.y > source.y,
        }
    }

    /// Returns the deviation of `candidate` from `source` on the cross axis.
    #[must_use]
    const fn deviation(self, source: &Rect, candidate: &Rect) -> u32 {
        match self {
            Self::Left | Self::Right => candidate.y.abs_diff(source.y),
            Self::Up | Self::Down => candidate.x.abs_diff(source.x),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown direction '{s}'"))
    }
}

/// Finds the nearest window in `direction` from `source`.
///
/// `candidates` are `(id, frame)` pairs in list order; `source` itself is
/// skipped if present. Never returns `source`.
#[must_use]
pub fn find_target_in_direction(
    source: WindowId,
    source_frame: &Rect,
    direction: Direction,
    candidates: &[(WindowId, Rect)],
) -> Option<WindowId> {
    let mut best: Option<(WindowId, u32)> = None;

    for (id, frame) in candidates {
        if *id == source || !direction.admits(source_frame, frame) {
            continue;
        }

        let deviation = direction.deviation(source_frame, frame);
        if best.is_none_or(|(_, best_deviation)| deviation < best_deviation) {
            best = Some((*id, deviation));
        }
    }

    best.map(|(id, _)| id)
}

/// Resolves the swap partner for `focused`.
///
/// The master swapping right always pairs with the first stack window;
/// everything else uses the spatial search.
#[must_use]
pub fn swap_target(
    windows: &ManagedWindows,
    focused: WindowId,
    focused_frame: &Rect,
    direction: Direction,
    frames: &[(WindowId, Rect)],
) -> Option<WindowId> {
    let index = windows.position(focused)?;

    if index == 0 && direction == Direction::Right {
        return windows.get(1);
    }

    find_target_in_direction(focused, focused_frame, direction, frames)
}

/// Swaps `focused` with the master.
///
/// A stack window trades places with the master; the master trades places
/// with the first stack window. Returns the new master, or `None` when fewer
/// than two windows are managed or `focused` is not managed.
pub fn swap_with_master(windows: &mut ManagedWindows, focused: WindowId) -> Option<WindowId> {
    if windows.len() < 2 {
        return None;
    }

    let index = windows.position(focused)?;
    let partner = if index > 0 { index } else { 1 };
    windows.swap(0, partner);
    windows.master()
}
