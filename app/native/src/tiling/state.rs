//! State types for the tiling engine.
//!
//! This module defines the geometry and window snapshot types shared by the
//! layout engine, the navigator, and the host boundary.

use serde::{Deserialize, Serialize};

// ============================================================================
// Identifiers
// ============================================================================

/// Opaque, host-assigned window identifier.
pub type WindowId = u64;

/// Zero-based workspace index.
pub type WorkspaceIndex = usize;

/// Host-assigned monitor index.
pub type MonitorIndex = usize;

// ============================================================================
// Geometric Types
// ============================================================================

/// A point in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self { Self { x, y } }
}

/// An integer rectangle in screen coordinates (top-left origin).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// X coordinate of the origin (top-left corner).
    pub x: i32,
    /// Y coordinate of the origin (top-left corner).
    pub y: i32,
    /// Width of the rectangle.
    pub width: i32,
    /// Height of the rectangle.
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the origin point of the rectangle.
    #[must_use]
    pub const fn origin(&self) -> Point { Point { x: self.x, y: self.y } }

    /// Returns the exclusive right edge, saturating at the `i32` bounds.
    #[must_use]
    pub const fn right(&self) -> i32 { self.x.saturating_add(self.width) }

    /// Returns the exclusive bottom edge, saturating at the `i32` bounds.
    #[must_use]
    pub const fn bottom(&self) -> i32 { self.y.saturating_add(self.height) }

    /// Returns whether a point is inside the rectangle.
    ///
    /// The left and top edges are inclusive, the right and bottom edges are
    /// exclusive, so adjacent rectangles never both contain a point.
    #[must_use]
    pub const fn contains_point(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Returns the area of the overlap between two rectangles, or 0 if they
    /// do not intersect.
    #[must_use]
    pub fn intersection_area(&self, other: &Self) -> i64 {
        let overlap_w = i64::from(self.right().min(other.right())) - i64::from(self.x.max(other.x));
        let overlap_h = i64::from(self.bottom().min(other.bottom())) - i64::from(self.y.max(other.y));

        if overlap_w <= 0 || overlap_h <= 0 {
            return 0;
        }

        overlap_w * overlap_h
    }

    /// Shrinks the rectangle by `amount` on every side.
    #[must_use]
    pub const fn shrink(&self, amount: i32) -> Self { self.inset(amount, amount) }

    /// Insets the rectangle by `horizontal` on the left and right edges and
    /// `vertical` on the top and bottom edges.
    ///
    /// Oversized insets produce negative sizes. Arithmetic saturates, so
    /// out-of-range configuration values never overflow.
    #[must_use]
    pub const fn inset(&self, horizontal: i32, vertical: i32) -> Self {
        Self {
            x: self.x.saturating_add(horizontal),
            y: self.y.saturating_add(vertical),
            width: self.width.saturating_sub(horizontal.saturating_mul(2)),
            height: self.height.saturating_sub(vertical.saturating_mul(2)),
        }
    }

    /// Returns the area of the rectangle.
    #[must_use]
    pub fn area(&self) -> i64 { i64::from(self.width) * i64::from(self.height) }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{} @ {},{}", self.width, self.height, self.x, self.y)
    }
}

// ============================================================================
// Windows
// ============================================================================

/// Host classification of a window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowType {
    /// A regular application window.
    #[default]
    Normal,
    /// A free-standing dialog.
    Dialog,
    /// A dialog attached to a parent window.
    ModalDialog,
    /// A utility or tool palette window.
    Utility,
    /// An application splash screen.
    Splash,
    /// Anything else (menus, tooltips, docks).
    Other,
}

impl WindowType {
    /// Returns whether windows of this type are ever considered for tiling.
    #[must_use]
    pub const fn is_normal(self) -> bool { matches!(self, Self::Normal) }
}

/// Snapshot of a host window's properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowInfo {
    /// Host-assigned identifier.
    pub id: WindowId,
    /// Current frame in screen coordinates.
    pub frame: Rect,
    /// Whether the window is minimized.
    pub minimized: bool,
    /// Whether the window is maximized (either axis).
    pub maximized: bool,
    /// Host window type.
    pub window_type: WindowType,
    /// Window class, if the host exposes one.
    pub wm_class: Option<String>,
    /// Application identifier, if the host exposes one.
    pub app_id: Option<String>,
    /// Monitor the window lives on.
    pub monitor: MonitorIndex,
    /// Window title.
    pub title: String,
}

impl WindowInfo {
    /// Creates a normal, unminimized window with the given frame.
    #[must_use]
    pub fn new(id: WindowId, frame: Rect) -> Self { Self { id, frame, ..Self::default() } }

    /// Sets the window class.
    #[must_use]
    pub fn with_class(mut self, wm_class: impl Into<String>) -> Self {
        self.wm_class = Some(wm_class.into());
        self
    }

    /// Sets the application identifier.
    #[must_use]
    pub fn with_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    /// Sets the window type.
    #[must_use]
    pub const fn with_type(mut self, window_type: WindowType) -> Self {
        self.window_type = window_type;
        self
    }

    /// Sets the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}
