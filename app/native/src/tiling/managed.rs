//! The ordered list of managed windows.
//!
//! Index 0 is the master; the rest form the stack in layout order. The list
//! never holds duplicates and is only reordered by explicit swaps.

use smallvec::SmallVec;

use super::layout::LAYOUT_INLINE_CAP;
use super::state::WindowId;
use crate::config::NewWindowBehavior;

/// Ordered, duplicate-free list of managed window ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManagedWindows {
    ids: SmallVec<[WindowId; LAYOUT_INLINE_CAP]>,
}

impl ManagedWindows {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self { Self { ids: SmallVec::new_const() } }

    /// Returns the number of managed windows.
    #[must_use]
    pub fn len(&self) -> usize { self.ids.len() }

    /// Returns `true` if no window is managed.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.ids.is_empty() }

    /// Returns the ids in layout order.
    #[must_use]
    pub fn as_slice(&self) -> &[WindowId] { &self.ids }

    /// Returns the master window, if any.
    #[must_use]
    pub fn master(&self) -> Option<WindowId> { self.ids.first().copied() }

    /// Returns the id at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<WindowId> { self.ids.get(index).copied() }

    /// Returns whether `id` is managed.
    #[must_use]
    pub fn contains(&self, id: WindowId) -> bool { self.ids.contains(&id) }

    /// Returns the position of `id` in the list.
    #[must_use]
    pub fn position(&self, id: WindowId) -> Option<usize> { self.ids.iter().position(|&w| w == id) }

    /// Inserts `id` according to the new-window policy.
    ///
    /// Returns `false` (and leaves the list untouched) if `id` is already
    /// managed.
    pub fn insert(&mut self, id: WindowId, behavior: NewWindowBehavior) -> bool {
        if self.contains(id) {
            return false;
        }

        match behavior {
            NewWindowBehavior::Master => self.ids.insert(0, id),
            NewWindowBehavior::Stack => self.ids.push(id),
        }
        true
    }

    /// Removes `id` by identity. Returns `true` if it was managed.
    pub fn remove(&mut self, id: WindowId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.ids.remove(index);
        true
    }

    /// Swaps the windows at two indices.
    ///
    /// Returns `false` if either index is out of bounds.
    pub fn swap(&mut self, a: usize, b: usize) -> bool {
        if a >= self.ids.len() || b >= self.ids.len() {
            return false;
        }
        self.ids.swap(a, b);
        true
    }

    /// Swaps two windows by identity.
    ///
    /// Returns `false` if either window is not managed.
    pub fn swap_ids(&mut self, a: WindowId, b: WindowId) -> bool {
        match (self.position(a), self.position(b)) {
            (Some(ia), Some(ib)) => self.swap(ia, ib),
            _ => false,
        }
    }

    /// Removes every window, returning the ids that were managed.
    pub fn clear(&mut self) -> Vec<WindowId> { self.ids.drain(..).collect() }

    /// Iterates over the ids in layout order.
    pub fn iter(&self) -> impl Iterator<Item = WindowId> + '_ { self.ids.iter().copied() }
}

impl FromIterator<WindowId> for ManagedWindows {
    fn from_iter<I: IntoIterator<Item = WindowId>>(iter: I) -> Self {
        let mut windows = Self::new();
        for id in iter {
            windows.insert(id, NewWindowBehavior::Stack);
        }
        windows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_stack_appends() {
        let mut windows = ManagedWindows::new();
        assert!(windows.insert(1, NewWindowBehavior::Stack));
        assert!(windows.insert(2, NewWindowBehavior::Stack));
        assert_eq!(windows.as_slice(), &[1, 2]);
        assert_eq!(windows.master(), Some(1));
    }

    #[test]
    fn test_insert_master_prepends() {
        let mut windows: ManagedWindows = [1, 2].into_iter().collect();
        assert!(windows.insert(3, NewWindowBehavior::Master));
        assert_eq!(windows.as_slice(), &[3, 1, 2]);
    }

    #[test]
    fn test_insert_duplicate_is_rejected() {
        let mut windows: ManagedWindows = [1, 2].into_iter().collect();
        assert!(!windows.insert(2, NewWindowBehavior::Master));
        assert_eq!(windows.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_from_iter_skips_duplicates() {
        let windows: ManagedWindows = [1, 2, 1, 3].into_iter().collect();
        assert_eq!(windows.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_remove_by_identity() {
        let mut windows: ManagedWindows = [1, 2, 3].into_iter().collect();
        assert!(windows.remove(2));
        assert!(!windows.remove(2));
        assert_eq!(windows.as_slice(), &[1, 3]);
    }

    #[test]
    fn test_swap_indices_and_ids() {
        let mut windows: ManagedWindows = [1, 2, 3].into_iter().collect();
        assert!(windows.swap(0, 2));
        assert_eq!(windows.as_slice(), &[3, 2, 1]);
        assert!(windows.swap_ids(2, 3));
        assert_eq!(windows.as_slice(), &[2, 3, 1]);
        assert!(!windows.swap(0, 3));
        assert!(!windows.swap_ids(1, 99));
    }

    #[test]
    fn test_clear_returns_members() {
        let mut windows: ManagedWindows = [4, 5].into_iter().collect();
        assert_eq!(windows.clear(), vec![4, 5]);
        assert!(windows.is_empty());
    }
}
