//! The tiler actor.
//!
//! A [`Tiler`] owns every piece of tiling state: the managed window list,
//! the parked (minimized) windows, the drag state, the reflow scheduler, the
//! host subscriptions, and the pending timers. It processes
//! [`TilerMessage`]s one at a time, so no locking is needed anywhere in the
//! engine.
//!
//! # Architecture
//!
//! ```text
//! host signals ─┐
//! timers ───────┼──▶ TilerHandle ──▶ mpsc ──▶ Tiler::run ──▶ handlers
//! commands ─────┘                                   │
//!                                                   └──▶ Host (geometry, focus)
//! ```
//!
//! The tiler can be driven two ways: [`Tiler::run`] (or [`Tiler::spawn`])
//! loops until shutdown, while [`Tiler::process_pending`] drains whatever is
//! queued and returns, which suits single-threaded embedding and tests.

mod handle;
mod handlers;
mod messages;

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::path::PathBuf;

pub use handle::{ActorError, TilerHandle};
pub use messages::{QueryResult, TilerMessage, TilerQuery};
use tokio::sync::mpsc;

use super::drag::DragState;
use super::host::Host;
use super::managed::ManagedWindows;
use super::rules::ExceptionSet;
use super::scheduler::{ReflowScheduler, ReflowState};
use super::state::{WindowId, WorkspaceIndex};
use super::subscriptions::SubscriptionTable;
use super::tasks::TaskSet;
use crate::config::{HyprTileConfig, LoadedConfig, TilingConfig};

/// Settings a tiler is constructed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilerSettings {
    /// Layout geometry.
    pub tiling: TilingConfig,
    /// Names used to address workspaces in commands.
    pub workspace_names: Vec<String>,
    /// Exceptions file, read on every enable.
    pub exceptions_path: Option<PathBuf>,
}

impl Default for TilerSettings {
    fn default() -> Self { Self::from_config(&HyprTileConfig::default(), None) }
}

impl TilerSettings {
    /// Builds settings from a configuration and the file it was loaded from.
    #[must_use]
    pub fn from_config(config: &HyprTileConfig, config_path: Option<&std::path::Path>) -> Self {
        Self {
            tiling: config.tiling,
            workspace_names: config.workspace_names.clone(),
            exceptions_path: config.exceptions_path(config_path),
        }
    }
}

impl From<&LoadedConfig> for TilerSettings {
    fn from(loaded: &LoadedConfig) -> Self { Self::from_config(&loaded.config, loaded.path.as_deref()) }
}

/// The tiling engine for one host.
pub struct Tiler<H: Host> {
    /// The host window manager.
    host: H,

    /// Current layout configuration snapshot.
    config: TilingConfig,

    /// Workspace names for name-addressed commands.
    workspace_names: Vec<String>,

    /// Where exceptions are read from on enable.
    exceptions_path: Option<PathBuf>,

    /// The exception set in effect.
    exceptions: ExceptionSet,

    /// Managed windows, master first.
    windows: ManagedWindows,

    /// Managed windows that are minimized and out of the layout.
    parked: Vec<WindowId>,

    /// The window being dragged, if any.
    drag: DragState,

    /// Reflow debounce state.
    scheduler: ReflowScheduler,

    /// Live host subscriptions.
    subscriptions: SubscriptionTable,

    /// Pending timers.
    tasks: TaskSet,

    /// The workspace being tiled while enabled.
    current_workspace: Option<WorkspaceIndex>,

    /// Whether tiling is enabled.
    enabled: bool,

    /// Number of layout passes executed.
    passes: u64,

    /// Handle given to the host and to timers.
    handle: TilerHandle,

    /// Receiver for incoming messages.
    receiver: mpsc::UnboundedReceiver<TilerMessage>,
}

impl<H: Host> std::fmt::Debug for Tiler<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tiler")
            .field("enabled", &self.enabled)
            .field("windows", &self.windows)
            .field("parked", &self.parked)
            .field("scheduler", &self.scheduler.state())
            .finish_non_exhaustive()
    }
}

impl<H: Host> Tiler<H> {
    /// Creates a disabled tiler.
    #[must_use]
    pub fn new(host: H, settings: TilerSettings) -> Self {
        let (handle, receiver) = TilerHandle::channel();
        Self {
            host,
            config: settings.tiling,
            workspace_names: settings.workspace_names,
            exceptions_path: settings.exceptions_path,
            exceptions: ExceptionSet::new(),
            windows: ManagedWindows::new(),
            parked: Vec::new(),
            drag: DragState::new(),
            scheduler: ReflowScheduler::new(),
            subscriptions: SubscriptionTable::new(),
            tasks: TaskSet::new(),
            current_workspace: None,
            enabled: false,
            passes: 0,
            handle,
            receiver,
        }
    }

    /// Uses a fixed exception set instead of reading a file on enable.
    #[must_use]
    pub fn with_exceptions(mut self, exceptions: ExceptionSet) -> Self {
        self.exceptions = exceptions;
        self.exceptions_path = None;
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Returns a handle for sending messages to this tiler.
    #[must_use]
    pub fn handle(&self) -> TilerHandle { self.handle.clone() }

    /// Returns the host.
    #[must_use]
    pub const fn host(&self) -> &H { &self.host }

    /// Returns the managed windows, master first.
    #[must_use]
    pub fn managed_windows(&self) -> &[WindowId] { self.windows.as_slice() }

    /// Returns the parked (minimized) windows.
    #[must_use]
    pub fn parked_windows(&self) -> &[WindowId] { &self.parked }

    /// Returns the window being dragged.
    #[must_use]
    pub const fn grabbed_window(&self) -> Option<WindowId> { self.drag.grabbed() }

    /// Returns the reflow scheduler state.
    #[must_use]
    pub const fn scheduler_state(&self) -> ReflowState { self.scheduler.state() }

    /// Returns the number of layout passes executed.
    #[must_use]
    pub const fn pass_count(&self) -> u64 { self.passes }

    /// Returns whether tiling is enabled.
    #[must_use]
    pub const fn is_enabled(&self) -> bool { self.enabled }

    /// Returns the current layout configuration.
    #[must_use]
    pub const fn config(&self) -> &TilingConfig { &self.config }

    /// Returns the exception set in effect.
    #[must_use]
    pub const fn exceptions(&self) -> &ExceptionSet { &self.exceptions }

    /// Returns the number of pending timers.
    #[must_use]
    pub fn pending_tasks(&self) -> usize { self.tasks.len() }

    /// Returns the number of live host subscriptions.
    #[must_use]
    pub fn subscription_count(&self) -> usize { self.subscriptions.len() }

    /// Returns the workspace being tiled.
    #[must_use]
    pub const fn current_workspace(&self) -> Option<WorkspaceIndex> { self.current_workspace }

    // ========================================================================
    // Message loop
    // ========================================================================

    /// Runs the message loop until a shutdown message arrives.
    ///
    /// Tiling is disabled before the loop returns.
    pub async fn run(mut self) {
        tracing::debug!("tiler started");

        while let Some(msg) = self.receiver.recv().await {
            if matches!(msg, TilerMessage::Shutdown) {
                tracing::debug!("tiler received shutdown message");
                break;
            }
            self.dispatch(msg);
        }

        self.disable();
        tracing::debug!("tiler stopped");
    }

    /// Spawns the message loop on the current tokio runtime.
    pub fn spawn(self) -> (TilerHandle, tokio::task::JoinHandle<()>)
    where
        H: Send + 'static,
    {
        let handle = self.handle();
        let join = tokio::spawn(self.run());
        (handle, join)
    }

    /// Handles every message already queued, without waiting for more.
    ///
    /// A shutdown message disables the tiler and stops draining. Returns the
    /// number of messages handled.
    pub fn process_pending(&mut self) -> usize {
        let mut handled = 0;

        while let Ok(msg) = self.receiver.try_recv() {
            handled += 1;
            if matches!(msg, TilerMessage::Shutdown) {
                self.disable();
                break;
            }
            self.dispatch(msg);
        }

        handled
    }

    /// Handles one message, recovering from panics in handlers.
    ///
    /// A pass interrupted by a panic is ended, so the scheduler accepts the
    /// next request.
    fn dispatch(&mut self, msg: TilerMessage) {
        let msg_name = msg.name();
        let result = catch_unwind(AssertUnwindSafe(|| {
            self.handle_message(msg);
        }));

        if let Err(panic_info) = result {
            let panic_msg = panic_info
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| panic_info.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());

            tracing::error!(message = msg_name, panic = %panic_msg, "tiler recovered from panic");
            self.release_interrupted_pass();
        }
    }

    /// Handle a single message.
    fn handle_message(&mut self, msg: TilerMessage) {
        match msg {
            TilerMessage::Enable => self.enable(),
            TilerMessage::Disable => self.disable(),
            TilerMessage::ConfigChanged(config) => self.on_config_changed(config),
            TilerMessage::Query { query, respond_to } => {
                let _ = respond_to.send(self.execute_query(query));
            }
            TilerMessage::Shutdown => self.disable(),

            // Everything below only matters while enabled; late timer
            // messages after a disable land here and are dropped.
            msg if !self.enabled => {
                tracing::trace!(message = msg.name(), "tiler disabled, ignoring message");
            }

            TilerMessage::Host(event) => self.on_host_event(event),
            TilerMessage::Command(command) => {
                let name = command.to_string();
                if let Err(err) = self.execute(command) {
                    handlers::log_error(&name, &err);
                }
            }
            TilerMessage::ReflowDue { task } => self.on_reflow_due(task),
            TilerMessage::CenterDue { task, window } => {
                if let Err(err) = self.on_center_due(task, window) {
                    handlers::log_error("center-window", &err);
                }
            }
            TilerMessage::PinAbove { window } => {
                if let Err(err) = self.on_pin_above(window) {
                    handlers::log_error("keep-above", &err);
                }
            }
        }
    }

    // ========================================================================
    // Query Execution
    // ========================================================================

    fn execute_query(&self, query: TilerQuery) -> QueryResult {
        match query {
            TilerQuery::ManagedWindows => QueryResult::Windows(self.windows.as_slice().to_vec()),
            TilerQuery::ParkedWindows => QueryResult::Windows(self.parked.clone()),
            TilerQuery::GrabbedWindow => QueryResult::Window(self.drag.grabbed()),
            TilerQuery::SchedulerState => QueryResult::Scheduler(self.scheduler.state()),
            TilerQuery::PassCount => QueryResult::Count(self.passes),
            TilerQuery::Enabled => QueryResult::Bool(self.enabled),
            TilerQuery::CurrentWorkspace => QueryResult::Workspace(self.current_workspace),
        }
    }
}
