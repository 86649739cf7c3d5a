//! Owned table of host signal subscriptions.
//!
//! Each `(target, kind)` pair has at most one live subscription. Entries are
//! removed per target when an entity goes away and wholesale on teardown;
//! actually disconnecting from the host is the caller's job.

use std::collections::HashMap;

use super::host::{SignalKind, SignalTarget, SubscriptionId};

/// Map of `(target, kind)` to the host subscription.
#[derive(Debug, Default)]
pub struct SubscriptionTable {
    entries: HashMap<(SignalTarget, SignalKind), SubscriptionId>,
}

impl SubscriptionTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Returns the number of live subscriptions.
    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    /// Returns `true` if there are no live subscriptions.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Returns whether `(target, kind)` is subscribed.
    #[must_use]
    pub fn contains(&self, target: SignalTarget, kind: SignalKind) -> bool {
        self.entries.contains_key(&(target, kind))
    }

    /// Returns whether any subscription is attached to `target`.
    #[must_use]
    pub fn has_target(&self, target: SignalTarget) -> bool { self.entries.keys().any(|(t, _)| *t == target) }

    /// Records a subscription, returning the one it replaced.
    pub fn insert(&mut self, target: SignalTarget, kind: SignalKind, id: SubscriptionId) -> Option<SubscriptionId> {
        self.entries.insert((target, kind), id)
    }

    /// Removes one subscription.
    pub fn remove(&mut self, target: SignalTarget, kind: SignalKind) -> Option<SubscriptionId> {
        self.entries.remove(&(target, kind))
    }

    /// Removes every subscription attached to `target`.
    pub fn remove_target(&mut self, target: SignalTarget) -> Vec<SubscriptionId> {
        let mut removed = Vec::new();
        self.entries.retain(|(t, _), id| {
            if *t == target {
                removed.push(*id);
                false
            } else {
                true
            }
        });
        removed.sort_unstable();
        removed
    }

    /// Removes every subscription.
    pub fn drain(&mut self) -> Vec<SubscriptionId> {
        let mut removed: Vec<SubscriptionId> = self.entries.drain().map(|(_, id)| id).collect();
        removed.sort_unstable();
        removed
    }
}
