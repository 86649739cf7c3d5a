//! Reflow scheduling state machine.
//!
//! ```text
//!  request()            fire(task)           finish()
//! Idle ───────▶ Scheduled ────────▶ Running ────────▶ Idle
//!   └────────────── begin_now() ──────┘
//! ```
//!
//! Requests while `Scheduled` or `Running` are absorbed, so a burst of
//! window events arms exactly one debounce timer and yields one pass. An
//! immediate pass (`begin_now`) taken while a timer is armed leaves the
//! timer armed; it still fires later and runs one more pass.
//!
//! The scheduler only tracks state. Arming the timer and running the pass
//! are up to the caller.

use super::tasks::TaskId;

/// Scheduler state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReflowState {
    /// No pass requested.
    #[default]
    Idle,
    /// A debounce timer is armed.
    Scheduled,
    /// A pass is executing.
    Running,
}

/// Coalesces reflow requests into debounced passes.
#[derive(Debug, Default)]
pub struct ReflowScheduler {
    state: ReflowState,
    armed: Option<TaskId>,
    resume_scheduled: bool,
}

impl ReflowScheduler {
    /// Creates an idle scheduler.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> ReflowState { self.state }

    /// Returns `true` while a pass is executing.
    #[must_use]
    pub fn is_running(&self) -> bool { self.state == ReflowState::Running }

    /// Requests a debounced pass.
    ///
    /// Returns `true` if the caller must arm a timer and report it with
    /// [`armed`](Self::armed); `false` if the request was absorbed.
    pub fn request(&mut self) -> bool {
        match self.state {
            ReflowState::Idle => {
                self.state = ReflowState::Scheduled;
                true
            }
            ReflowState::Scheduled | ReflowState::Running => false,
        }
    }

    /// Records the timer armed for the pending request.
    pub const fn armed(&mut self, task: TaskId) { self.armed = Some(task); }

    /// Handles a timer expiry.
    ///
    /// Returns `true` (and enters `Running`) if `task` is the armed timer.
    /// Stale timers return `false`.
    pub fn fire(&mut self, task: TaskId) -> bool {
        if self.state != ReflowState::Scheduled || self.armed != Some(task) {
            return false;
        }
        self.armed = None;
        self.state = ReflowState::Running;
        true
    }

    /// Starts an immediate pass.
    ///
    /// Returns `false` if a pass is already running.
    pub fn begin_now(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.resume_scheduled = self.state == ReflowState::Scheduled;
        self.state = ReflowState::Running;
        true
    }

    /// Ends the running pass.
    pub const fn finish(&mut self) {
        self.state = if self.resume_scheduled {
            ReflowState::Scheduled
        } else {
            ReflowState::Idle
        };
        self.resume_scheduled = false;
    }

    /// Returns to `Idle`, handing back the armed timer so it can be cancelled.
    pub const fn reset(&mut self) -> Option<TaskId> {
        self.state = ReflowState::Idle;
        self.resume_scheduled = false;
        self.armed.take()
    }
}
