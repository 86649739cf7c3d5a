//! Scheduled one-shot timers owned by the tiler.
//!
//! Every timer is a tokio task that sleeps and then posts a single message
//! back to the tiler. The task set keeps their abort handles so teardown can
//! cancel all of them at once.

use std::collections::HashMap;
use std::time::Duration;

use tokio::task::AbortHandle;

use super::actor::{TilerHandle, TilerMessage};

/// Identifier of a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    #[cfg(test)]
    pub(crate) const fn from_raw(raw: u64) -> Self { Self(raw) }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "task-{}", self.0) }
}

/// The set of pending timers.
#[derive(Debug, Default)]
pub struct TaskSet {
    tasks: HashMap<TaskId, AbortHandle>,
    next_id: u64,
}

impl TaskSet {
    /// Creates an empty task set.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Returns the number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize { self.tasks.len() }

    /// Returns `true` if no timer is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.tasks.is_empty() }

    /// Returns whether `id` is still pending.
    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool { self.tasks.contains_key(&id) }

    /// Schedules `make(id)` to be delivered to `sink` after `delay`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&mut self, delay: Duration, sink: &TilerHandle, make: F) -> TaskId
    where
        F: FnOnce(TaskId) -> TilerMessage,
    {
        let id = TaskId(self.next_id);
        self.next_id += 1;

        let message = make(id);
        let sink = sink.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // A closed channel means the tiler is gone; nothing to deliver to.
            let _ = sink.send(message);
        });

        self.tasks.insert(id, handle.abort_handle());
        id
    }

    /// Marks a timer as delivered. Returns `false` if it was not pending
    /// (already completed or cancelled).
    pub fn complete(&mut self, id: TaskId) -> bool { self.tasks.remove(&id).is_some() }

    /// Cancels one timer. Returns `false` if it was not pending.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        self.tasks.remove(&id).is_some_and(|handle| {
            handle.abort();
            true
        })
    }

    /// Cancels every pending timer.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.tasks.len();
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_scheduled_message_is_delivered_after_delay() {
        let (handle, mut receiver) = TilerHandle::channel();
        let mut tasks = TaskSet::new();

        let id = tasks.schedule(Duration::from_millis(20), &handle, |task| TilerMessage::ReflowDue { task });
        assert!(tasks.contains(id));
        assert!(receiver.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(25)).await;
        match receiver.try_recv() {
            Ok(TilerMessage::ReflowDue { task }) => assert_eq!(task, id),
            other => panic!("expected ReflowDue, got {other:?}"),
        }
        assert!(tasks.complete(id));
        assert!(!tasks.complete(id));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_prevents_delivery() {
        let (handle, mut receiver) = TilerHandle::channel();
        let mut tasks = TaskSet::new();

        tasks.schedule(Duration::from_millis(5), &handle, |task| TilerMessage::ReflowDue { task });
        tasks.schedule(Duration::from_millis(5), &handle, |task| TilerMessage::ReflowDue { task });
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks.cancel_all(), 2);
        assert!(tasks.is_empty());

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_single_task() {
        let (handle, mut receiver) = TilerHandle::channel();
        let mut tasks = TaskSet::new();

        let first = tasks.schedule(Duration::from_millis(5), &handle, |task| TilerMessage::ReflowDue { task });
        let second = tasks.schedule(Duration::from_millis(5), &handle, |task| TilerMessage::ReflowDue { task });
        assert_ne!(first, second);
        assert!(tasks.cancel(first));
        assert!(!tasks.cancel(first));

        tokio::time::sleep(Duration::from_millis(10)).await;
        match receiver.try_recv() {
            Ok(TilerMessage::ReflowDue { task }) => assert_eq!(task, second),
            other => panic!("expected ReflowDue, got {other:?}"),
        }
        assert!(receiver.try_recv().is_err());
    }
}
