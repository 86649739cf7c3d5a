//! The boundary to the host window manager.
//!
//! The tiler never touches windows directly. Everything it needs (window
//! snapshots, geometry changes, workspace switches, signal subscriptions)
//! goes through the [`Host`] trait, and everything the host observes comes
//! back as a [`HostEvent`] posted to the tiler's [`TilerHandle`].
//!
//! # Signals
//!
//! Subscriptions are keyed by a [`SignalTarget`] (the entity) and a
//! [`SignalKind`]. The host hands back a [`SubscriptionId`] that the tiler
//! later passes to [`Host::disconnect`].

use thiserror::Error;

use super::actor::TilerHandle;
use super::state::{MonitorIndex, Point, Rect, WindowId, WindowInfo, WorkspaceIndex};

// ============================================================================
// Errors
// ============================================================================

/// Errors reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The object the request referred to no longer exists.
    #[error("window or object is gone")]
    WindowGone,
    /// The host does not support the request.
    #[error("operation not supported by host")]
    Unsupported,
    /// The host tried and failed.
    #[error("{0}")]
    Failed(String),
}

impl HostError {
    /// Creates a `Failed` error with the given message.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self { Self::Failed(message.into()) }
}

/// Result type alias for host requests.
pub type HostResult<T> = Result<T, HostError>;

// ============================================================================
// Signals
// ============================================================================

/// The entity a subscription is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalTarget {
    /// A single window.
    Window(WindowId),
    /// A workspace by index.
    Workspace(WorkspaceIndex),
    /// The display (grab operations).
    Display,
    /// The workspace manager (active workspace changes).
    WorkspaceManager,
}

/// The kind of signal subscribed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    /// A window was added to a workspace.
    WindowAdded,
    /// A window was removed from a workspace.
    WindowRemoved,
    /// A window is no longer managed by the host (closed).
    Unmanaged,
    /// A window's size changed.
    SizeChanged,
    /// A window was minimized or restored.
    MinimizedChanged,
    /// The active workspace changed.
    ActiveWorkspaceChanged,
    /// A grab (move or resize) started.
    GrabBegin,
    /// A grab ended.
    GrabEnd,
}

/// Host-assigned subscription handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

/// An event observed by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// A window appeared on a workspace.
    WindowAdded {
        /// The workspace the window was added to.
        workspace: WorkspaceIndex,
        /// The new window.
        window: WindowId,
    },
    /// A window left a workspace.
    WindowRemoved {
        /// The workspace the window was removed from.
        workspace: WorkspaceIndex,
        /// The removed window.
        window: WindowId,
    },
    /// A window was closed.
    Unmanaged {
        /// The closed window.
        window: WindowId,
    },
    /// A window's size changed.
    SizeChanged {
        /// The resized window.
        window: WindowId,
    },
    /// A window was minimized or restored.
    MinimizedChanged {
        /// The window whose minimized state changed.
        window: WindowId,
    },
    /// The active workspace changed.
    ActiveWorkspaceChanged,
    /// A grab started on a window.
    GrabBegin {
        /// The grabbed window.
        window: WindowId,
    },
    /// The current grab ended.
    GrabEnd,
}

impl HostEvent {
    /// Returns the signal kind this event is delivered under.
    #[must_use]
    pub const fn kind(&self) -> SignalKind {
        match self {
            Self::WindowAdded { .. } => SignalKind::WindowAdded,
            Self::WindowRemoved { .. } => SignalKind::WindowRemoved,
            Self::Unmanaged { .. } => SignalKind::Unmanaged,
            Self::SizeChanged { .. } => SignalKind::SizeChanged,
            Self::MinimizedChanged { .. } => SignalKind::MinimizedChanged,
            Self::ActiveWorkspaceChanged => SignalKind::ActiveWorkspaceChanged,
            Self::GrabBegin { .. } => SignalKind::GrabBegin,
            Self::GrabEnd => SignalKind::GrabEnd,
        }
    }
}

// ============================================================================
// Host
// ============================================================================

/// Queries and requests the tiler makes of the host window manager.
///
/// Query methods return `None` (or an empty list) for objects that no longer
/// exist. Mutating requests return `Err(HostError::WindowGone)` in that case.
pub trait Host {
    /// Lists the windows on a workspace.
    fn windows_on_workspace(&self, workspace: WorkspaceIndex) -> Vec<WindowId>;

    /// Returns a snapshot of a window.
    fn window(&self, id: WindowId) -> Option<WindowInfo>;

    /// Returns the window with keyboard focus.
    fn focused_window(&self) -> Option<WindowId>;

    /// Returns every window in stacking order, bottom to top.
    fn window_stack(&self) -> Vec<WindowId>;

    /// Returns the pointer position.
    fn pointer_position(&self) -> Point;

    /// Returns the work area of the primary monitor.
    fn primary_work_area(&self) -> Option<Rect>;

    /// Returns the work area of a monitor.
    fn work_area_for_monitor(&self, monitor: MonitorIndex) -> Option<Rect>;

    /// Moves and resizes a window.
    ///
    /// # Errors
    ///
    /// Returns an error if the window is gone or the host refuses.
    fn move_resize_frame(&mut self, id: WindowId, frame: Rect) -> HostResult<()>;

    /// Moves a window without resizing it.
    ///
    /// # Errors
    ///
    /// Returns an error if the window is gone or the host refuses.
    fn move_frame(&mut self, id: WindowId, origin: Point) -> HostResult<()>;

    /// Unmaximizes a window on both axes.
    ///
    /// # Errors
    ///
    /// Returns an error if the window is gone.
    fn unmaximize(&mut self, id: WindowId) -> HostResult<()>;

    /// Activates (focuses and raises) a window.
    ///
    /// # Errors
    ///
    /// Returns an error if the window is gone.
    fn activate(&mut self, id: WindowId) -> HostResult<()>;

    /// Returns whether windows can be pinned above others.
    fn supports_keep_above(&self) -> bool;

    /// Pins a window above others.
    ///
    /// # Errors
    ///
    /// Returns `HostError::Unsupported` if the capability is missing.
    fn set_keep_above(&mut self, id: WindowId) -> HostResult<()>;

    /// Returns the active workspace index.
    fn active_workspace_index(&self) -> WorkspaceIndex;

    /// Returns the number of workspaces.
    fn workspace_count(&self) -> usize;

    /// Switches to a workspace.
    ///
    /// # Errors
    ///
    /// Returns an error if the workspace does not exist.
    fn activate_workspace(&mut self, index: WorkspaceIndex) -> HostResult<()>;

    /// Moves a window to another workspace.
    ///
    /// # Errors
    ///
    /// Returns an error if the window or the workspace does not exist.
    fn move_window_to_workspace(&mut self, id: WindowId, index: WorkspaceIndex) -> HostResult<()>;

    /// Subscribes `sink` to a signal.
    ///
    /// # Errors
    ///
    /// Returns an error if the target no longer exists.
    fn connect(&mut self, target: SignalTarget, kind: SignalKind, sink: TilerHandle) -> HostResult<SubscriptionId>;

    /// Drops a subscription.
    ///
    /// # Errors
    ///
    /// Returns an error if the subscription or its target is gone.
    fn disconnect(&mut self, id: SubscriptionId) -> HostResult<()>;
}
