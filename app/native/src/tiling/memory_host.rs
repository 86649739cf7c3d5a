//! An in-memory [`Host`].
//!
//! `MemoryHost` models just enough of a window manager to drive the tiler
//! without a compositor: windows with frames, workspaces, a stacking order,
//! focus, a pointer, and signal subscriptions. It backs `hyprtile layout`
//! and the test suites.
//!
//! The host is a cheap handle around shared state, so a test can keep one
//! clone to simulate user actions while the tiler owns another. Simulation
//! methods emit the same events a real window manager would, delivered to
//! whichever tiler subscribed to them.
//!
//! # Example
//!
//! ```ignore
//! let host = MemoryHost::new(Rect::new(0, 0, 1920, 1080));
//! let mut tiler = Tiler::new(host.clone(), TilerSettings::default());
//! tiler.enable();
//! host.open_window(WindowInfo::new(1, Rect::new(100, 100, 800, 600)));
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;

use super::actor::TilerHandle;
use super::host::{Host, HostError, HostEvent, HostResult, SignalKind, SignalTarget, SubscriptionId};
use super::state::{MonitorIndex, Point, Rect, WindowId, WindowInfo, WorkspaceIndex};

/// Number of workspaces a new host starts with.
pub const DEFAULT_WORKSPACE_COUNT: usize = 4;

#[derive(Debug)]
struct MemoryWindow {
    info: WindowInfo,
    workspace: WorkspaceIndex,
    keep_above: bool,
}

#[derive(Debug)]
struct Subscription {
    target: SignalTarget,
    kind: SignalKind,
    sink: TilerHandle,
}

#[derive(Debug)]
struct MemoryHostState {
    windows: BTreeMap<WindowId, MemoryWindow>,
    /// Bottom to top.
    stack: Vec<WindowId>,
    focused: Option<WindowId>,
    pointer: Point,
    work_areas: Vec<Rect>,
    active_workspace: WorkspaceIndex,
    workspace_count: usize,
    keep_above_supported: bool,
    subscriptions: BTreeMap<SubscriptionId, Subscription>,
    next_subscription: u64,
    activations: Vec<WindowId>,
    placements: u64,
}

impl MemoryHostState {
    fn window_mut(&mut self, id: WindowId) -> HostResult<&mut MemoryWindow> {
        self.windows.get_mut(&id).ok_or(HostError::WindowGone)
    }

    fn raise(&mut self, id: WindowId) {
        self.stack.retain(|&w| w != id);
        self.stack.push(id);
    }

    fn sinks(&self, target: SignalTarget, kind: SignalKind) -> Vec<TilerHandle> {
        self.subscriptions
            .values()
            .filter(|sub| sub.target == target && sub.kind == kind)
            .map(|sub| sub.sink.clone())
            .collect()
    }
}

/// Shared, in-memory window manager.
#[derive(Debug, Clone)]
pub struct MemoryHost {
    state: Arc<Mutex<MemoryHostState>>,
}

impl MemoryHost {
    /// Creates a host with one monitor and [`DEFAULT_WORKSPACE_COUNT`]
    /// workspaces.
    #[must_use]
    pub fn new(work_area: Rect) -> Self {
        let state = MemoryHostState {
            windows: BTreeMap::new(),
            stack: Vec::new(),
            focused: None,
            pointer: Point::default(),
            work_areas: vec![work_area],
            active_workspace: 0,
            workspace_count: DEFAULT_WORKSPACE_COUNT,
            keep_above_supported: true,
            subscriptions: BTreeMap::new(),
            next_subscription: 1,
            activations: Vec::new(),
            placements: 0,
        };
        Self { state: Arc::new(Mutex::new(state)) }
    }

    /// Sets the number of workspaces.
    #[must_use]
    pub fn with_workspaces(self, count: usize) -> Self {
        self.state.lock().workspace_count = count.max(1);
        self
    }

    /// Adds a secondary monitor.
    #[must_use]
    pub fn with_monitor(self, work_area: Rect) -> Self {
        self.state.lock().work_areas.push(work_area);
        self
    }

    /// Removes the keep-above capability.
    #[must_use]
    pub fn without_keep_above(self) -> Self {
        self.state.lock().keep_above_supported = false;
        self
    }

    // ========================================================================
    // Event delivery
    // ========================================================================

    /// Delivers `event` to every subscriber of `(target, event.kind())`.
    ///
    /// The lock is released before sending.
    fn emit(&self, target: SignalTarget, event: HostEvent) {
        let sinks = self.state.lock().sinks(target, event.kind());
        for sink in sinks {
            let _ = sink.host_event(event.clone());
        }
    }

    // ========================================================================
    // Simulation
    // ========================================================================

    /// Opens a window on the active workspace, raised and focused.
    pub fn open_window(&self, info: WindowInfo) -> WindowId {
        let workspace = self.state.lock().active_workspace;
        self.open_window_on(workspace, info)
    }

    /// Opens a window on a workspace, raised and focused.
    pub fn open_window_on(&self, workspace: WorkspaceIndex, info: WindowInfo) -> WindowId {
        let id = info.id;
        {
            let mut state = self.state.lock();
            state.windows.insert(id, MemoryWindow { info, workspace, keep_above: false });
            state.raise(id);
            state.focused = Some(id);
        }
        self.emit(SignalTarget::Workspace(workspace), HostEvent::WindowAdded { workspace, window: id });
        id
    }

    /// Closes a window.
    ///
    /// Subscriptions on the window die with it, so later disconnects fail.
    pub fn close_window(&self, id: WindowId) {
        let (workspace, sinks) = {
            let mut state = self.state.lock();
            let Some(window) = state.windows.remove(&id) else {
                return;
            };
            state.stack.retain(|&w| w != id);
            if state.focused == Some(id) {
                state.focused = state.stack.last().copied();
            }
            let sinks = state.sinks(SignalTarget::Window(id), SignalKind::Unmanaged);
            state.subscriptions.retain(|_, sub| sub.target != SignalTarget::Window(id));
            (window.workspace, sinks)
        };

        for sink in sinks {
            let _ = sink.host_event(HostEvent::Unmanaged { window: id });
        }
        self.emit(SignalTarget::Workspace(workspace), HostEvent::WindowRemoved { workspace, window: id });
    }

    /// Minimizes or restores a window.
    pub fn set_minimized(&self, id: WindowId, minimized: bool) {
        {
            let mut state = self.state.lock();
            let Ok(window) = state.window_mut(id) else {
                return;
            };
            if window.info.minimized == minimized {
                return;
            }
            window.info.minimized = minimized;
        }
        self.emit(SignalTarget::Window(id), HostEvent::MinimizedChanged { window: id });
    }

    /// Marks a window maximized or not.
    pub fn set_maximized(&self, id: WindowId, maximized: bool) {
        if let Ok(window) = self.state.lock().window_mut(id) {
            window.info.maximized = maximized;
        }
    }

    /// Moves or resizes a window the way a user would.
    pub fn set_frame(&self, id: WindowId, frame: Rect) {
        let changed = {
            let mut state = self.state.lock();
            let Ok(window) = state.window_mut(id) else {
                return;
            };
            let resized = window.info.frame.width != frame.width || window.info.frame.height != frame.height;
            window.info.frame = frame;
            resized
        };
        if changed {
            self.emit(SignalTarget::Window(id), HostEvent::SizeChanged { window: id });
        }
    }

    /// Gives a window keyboard focus without raising it.
    pub fn focus(&self, id: WindowId) {
        let mut state = self.state.lock();
        if state.windows.contains_key(&id) {
            state.focused = Some(id);
        }
    }

    /// Raises a window to the top of the stack.
    pub fn raise(&self, id: WindowId) {
        let mut state = self.state.lock();
        if state.windows.contains_key(&id) {
            state.raise(id);
        }
    }

    /// Moves the pointer.
    pub fn set_pointer(&self, pointer: Point) { self.state.lock().pointer = pointer; }

    /// Starts a grab on a window.
    pub fn begin_grab(&self, id: WindowId) {
        self.raise(id);
        self.emit(SignalTarget::Display, HostEvent::GrabBegin { window: id });
    }

    /// Ends the current grab.
    pub fn end_grab(&self) { self.emit(SignalTarget::Display, HostEvent::GrabEnd); }

    /// Switches workspace the way a user would.
    pub fn switch_workspace(&self, index: WorkspaceIndex) {
        {
            let mut state = self.state.lock();
            if index >= state.workspace_count || index == state.active_workspace {
                return;
            }
            state.active_workspace = index;
        }
        self.emit(SignalTarget::WorkspaceManager, HostEvent::ActiveWorkspaceChanged);
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// Returns a window's frame.
    #[must_use]
    pub fn frame(&self, id: WindowId) -> Option<Rect> { self.state.lock().windows.get(&id).map(|w| w.info.frame) }

    /// Returns the workspace a window is on.
    #[must_use]
    pub fn workspace_of(&self, id: WindowId) -> Option<WorkspaceIndex> {
        self.state.lock().windows.get(&id).map(|w| w.workspace)
    }

    /// Returns whether a window was pinned above others.
    #[must_use]
    pub fn is_kept_above(&self, id: WindowId) -> bool {
        self.state.lock().windows.get(&id).is_some_and(|w| w.keep_above)
    }

    /// Returns every window activated through [`Host::activate`], in order.
    #[must_use]
    pub fn activations(&self) -> Vec<WindowId> { self.state.lock().activations.clone() }

    /// Returns the number of live subscriptions.
    #[must_use]
    pub fn subscription_count(&self) -> usize { self.state.lock().subscriptions.len() }

    /// Returns the number of successful [`Host::move_resize_frame`] calls.
    #[must_use]
    pub fn placement_count(&self) -> u64 { self.state.lock().placements }
}

impl Host for MemoryHost {
    fn windows_on_workspace(&self, workspace: WorkspaceIndex) -> Vec<WindowId> {
        self.state
            .lock()
            .windows
            .iter()
            .filter(|(_, w)| w.workspace == workspace)
            .map(|(id, _)| *id)
            .collect()
    }

    fn window(&self, id: WindowId) -> Option<WindowInfo> { self.state.lock().windows.get(&id).map(|w| w.info.clone()) }

    fn focused_window(&self) -> Option<WindowId> { self.state.lock().focused }

    fn window_stack(&self) -> Vec<WindowId> { self.state.lock().stack.clone() }

    fn pointer_position(&self) -> Point { self.state.lock().pointer }

    fn primary_work_area(&self) -> Option<Rect> { self.state.lock().work_areas.first().copied() }

    fn work_area_for_monitor(&self, monitor: MonitorIndex) -> Option<Rect> {
        self.state.lock().work_areas.get(monitor).copied()
    }

    fn move_resize_frame(&mut self, id: WindowId, frame: Rect) -> HostResult<()> {
        let resized = {
            let mut state = self.state.lock();
            let window = state.window_mut(id)?;
            let resized = window.info.frame.width != frame.width || window.info.frame.height != frame.height;
            window.info.frame = frame;
            state.placements += 1;
            resized
        };
        if resized {
            self.emit(SignalTarget::Window(id), HostEvent::SizeChanged { window: id });
        }
        Ok(())
    }

    fn move_frame(&mut self, id: WindowId, origin: Point) -> HostResult<()> {
        let mut state = self.state.lock();
        let window = state.window_mut(id)?;
        window.info.frame.x = origin.x;
        window.info.frame.y = origin.y;
        Ok(())
    }

    fn unmaximize(&mut self, id: WindowId) -> HostResult<()> {
        self.state.lock().window_mut(id)?.info.maximized = false;
        Ok(())
    }

    fn activate(&mut self, id: WindowId) -> HostResult<()> {
        let mut state = self.state.lock();
        if !state.windows.contains_key(&id) {
            return Err(HostError::WindowGone);
        }
        state.raise(id);
        state.focused = Some(id);
        state.activations.push(id);
        Ok(())
    }

    fn supports_keep_above(&self) -> bool { self.state.lock().keep_above_supported }

    fn set_keep_above(&mut self, id: WindowId) -> HostResult<()> {
        let mut state = self.state.lock();
        if !state.keep_above_supported {
            return Err(HostError::Unsupported);
        }
        state.window_mut(id)?.keep_above = true;
        Ok(())
    }

    fn active_workspace_index(&self) -> WorkspaceIndex { self.state.lock().active_workspace }

    fn workspace_count(&self) -> usize { self.state.lock().workspace_count }

    fn activate_workspace(&mut self, index: WorkspaceIndex) -> HostResult<()> {
        if index >= self.workspace_count() {
            return Err(HostError::failed(format!("no workspace at index {index}")));
        }
        self.switch_workspace(index);
        Ok(())
    }

    fn move_window_to_workspace(&mut self, id: WindowId, index: WorkspaceIndex) -> HostResult<()> {
        let previous = {
            let mut state = self.state.lock();
            if index >= state.workspace_count {
                return Err(HostError::failed(format!("no workspace at index {index}")));
            }
            let window = state.window_mut(id)?;
            let previous = window.workspace;
            window.workspace = index;
            previous
        };

        if previous != index {
            self.emit(
                SignalTarget::Workspace(previous),
                HostEvent::WindowRemoved { workspace: previous, window: id },
            );
            self.emit(SignalTarget::Workspace(index), HostEvent::WindowAdded { workspace: index, window: id });
        }
        Ok(())
    }

    fn connect(&mut self, target: SignalTarget, kind: SignalKind, sink: TilerHandle) -> HostResult<SubscriptionId> {
        let mut state = self.state.lock();
        let exists = match target {
            SignalTarget::Window(id) => state.windows.contains_key(&id),
            SignalTarget::Workspace(index) => index < state.workspace_count,
            SignalTarget::Display | SignalTarget::WorkspaceManager => true,
        };
        if !exists {
            return Err(HostError::WindowGone);
        }

        let id = SubscriptionId(state.next_subscription);
        state.next_subscription += 1;
        state.subscriptions.insert(id, Subscription { target, kind, sink });
        Ok(id)
    }

    fn disconnect(&mut self, id: SubscriptionId) -> HostResult<()> {
        self.state.lock().subscriptions.remove(&id).map(|_| ()).ok_or(HostError::WindowGone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Rect = Rect::new(0, 0, 1920, 1080);

    fn window(id: WindowId) -> WindowInfo { WindowInfo::new(id, Rect::new(10, 10, 300, 200)) }

    #[test]
    fn test_open_window_focuses_and_raises() {
        let host = MemoryHost::new(SCREEN);
        host.open_window(window(1));
        host.open_window(window(2));

        assert_eq!(host.focused_window(), Some(2));
        assert_eq!(host.window_stack(), vec![1, 2]);
        assert_eq!(host.windows_on_workspace(0), vec![1, 2]);
        assert!(host.windows_on_workspace(1).is_empty());
    }

    #[test]
    fn test_events_reach_subscribers_only() {
        let mut host = MemoryHost::new(SCREEN);
        let (handle, mut receiver) = TilerHandle::channel();
        host.connect(SignalTarget::Workspace(0), SignalKind::WindowAdded, handle).unwrap();

        host.open_window(window(1));
        host.open_window_on(1, window(2));

        assert!(matches!(
            receiver.try_recv(),
            Ok(crate::tiling::actor::TilerMessage::Host(HostEvent::WindowAdded { workspace: 0, window: 1 }))
        ));
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn test_size_changed_only_when_size_differs() {
        let mut host = MemoryHost::new(SCREEN);
        host.open_window(window(1));
        let (handle, mut receiver) = TilerHandle::channel();
        host.connect(SignalTarget::Window(1), SignalKind::SizeChanged, handle).unwrap();

        host.move_resize_frame(1, Rect::new(50, 50, 300, 200)).unwrap();
        assert!(receiver.try_recv().is_err());

        host.move_resize_frame(1, Rect::new(50, 50, 400, 200)).unwrap();
        assert!(receiver.try_recv().is_ok());
        assert_eq!(host.placement_count(), 2);
    }

    #[test]
    fn test_closed_window_subscriptions_die() {
        let mut host = MemoryHost::new(SCREEN);
        host.open_window(window(1));
        let (handle, _receiver) = TilerHandle::channel();
        let id = host.connect(SignalTarget::Window(1), SignalKind::SizeChanged, handle.clone()).unwrap();

        host.close_window(1);

        assert_eq!(host.disconnect(id), Err(HostError::WindowGone));
        assert_eq!(
            host.connect(SignalTarget::Window(1), SignalKind::SizeChanged, handle),
            Err(HostError::WindowGone)
        );
    }

    #[test]
    fn test_keep_above_capability() {
        let mut host = MemoryHost::new(SCREEN).without_keep_above();
        host.open_window(window(1));

        assert!(!host.supports_keep_above());
        assert_eq!(host.set_keep_above(1), Err(HostError::Unsupported));
        assert!(!host.is_kept_above(1));
    }

    #[test]
    fn test_move_window_to_workspace() {
        let mut host = MemoryHost::new(SCREEN).with_workspaces(2);
        host.open_window(window(1));

        host.move_window_to_workspace(1, 1).unwrap();
        assert_eq!(host.workspace_of(1), Some(1));
        assert!(host.move_window_to_workspace(1, 5).is_err());
        assert_eq!(host.move_window_to_workspace(9, 0), Err(HostError::WindowGone));
    }

    #[test]
    fn test_work_areas_per_monitor() {
        let host = MemoryHost::new(SCREEN).with_monitor(Rect::new(1920, 0, 1280, 1024));
        assert_eq!(host.primary_work_area(), Some(SCREEN));
        assert_eq!(host.work_area_for_monitor(1), Some(Rect::new(1920, 0, 1280, 1024)));
        assert_eq!(host.work_area_for_monitor(2), None);
    }
}
