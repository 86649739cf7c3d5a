//! Message types for the tiler actor.
//!
//! All communication with the tiler happens through messages:
//! - `TilerMessage` - events, timer expiries and commands sent to the tiler
//! - `TilerQuery` - requests for state data (with response channel)
//! - `QueryResult` - responses from queries

use tokio::sync::oneshot;

use crate::config::TilingConfig;
use crate::tiling::commands::Command;
use crate::tiling::host::HostEvent;
use crate::tiling::scheduler::ReflowState;
use crate::tiling::state::{WindowId, WorkspaceIndex};
use crate::tiling::tasks::TaskId;

// ============================================================================
// Tiler Messages
// ============================================================================

/// Messages sent to the tiler.
#[derive(Debug)]
pub enum TilerMessage {
    // ════════════════════════════════════════════════════════════════════════
    // Host Events
    // ════════════════════════════════════════════════════════════════════════
    /// Something happened in the host window manager.
    Host(HostEvent),

    // ════════════════════════════════════════════════════════════════════════
    // Commands
    // ════════════════════════════════════════════════════════════════════════
    /// A named command (keybinding).
    Command(Command),

    /// Replace the tiling configuration and reflow.
    ConfigChanged(TilingConfig),

    /// Start tiling the active workspace.
    Enable,

    /// Stop tiling and release every subscription and timer.
    Disable,

    // ════════════════════════════════════════════════════════════════════════
    // Timer Expiries
    // ════════════════════════════════════════════════════════════════════════
    /// The reflow debounce timer fired.
    ReflowDue {
        /// The timer that fired.
        task: TaskId,
    },

    /// The centering delay for an exception window elapsed.
    CenterDue {
        /// The timer that fired.
        task: TaskId,
        /// The window to center.
        window: WindowId,
    },

    /// Pin a freshly centered window above others.
    PinAbove {
        /// The centered window.
        window: WindowId,
    },

    // ════════════════════════════════════════════════════════════════════════
    // Queries
    // ════════════════════════════════════════════════════════════════════════
    /// Query state (with response channel).
    Query {
        query: TilerQuery,
        respond_to: oneshot::Sender<QueryResult>,
    },

    /// Stop the message loop.
    Shutdown,
}

impl TilerMessage {
    /// Returns a short name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Host(_) => "Host",
            Self::Command(_) => "Command",
            Self::ConfigChanged(_) => "ConfigChanged",
            Self::Enable => "Enable",
            Self::Disable => "Disable",
            Self::ReflowDue { .. } => "ReflowDue",
            Self::CenterDue { .. } => "CenterDue",
            Self::PinAbove { .. } => "PinAbove",
            Self::Query { .. } => "Query",
            Self::Shutdown => "Shutdown",
        }
    }
}

// ============================================================================
// Queries
// ============================================================================

/// Queries answered by the tiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TilerQuery {
    /// The managed window list, master first.
    ManagedWindows,
    /// Windows parked because they are minimized.
    ParkedWindows,
    /// The window currently being dragged.
    GrabbedWindow,
    /// The reflow scheduler state.
    SchedulerState,
    /// The number of layout passes run so far.
    PassCount,
    /// Whether the tiler is enabled.
    Enabled,
    /// The workspace whose windows are being tiled.
    CurrentWorkspace,
}

/// Results from tiler queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    /// A list of window ids.
    Windows(Vec<WindowId>),
    /// An optional window id.
    Window(Option<WindowId>),
    /// The scheduler state.
    Scheduler(ReflowState),
    /// A counter.
    Count(u64),
    /// A flag.
    Bool(bool),
    /// An optional workspace index.
    Workspace(Option<WorkspaceIndex>),
}
