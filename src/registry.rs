//! The set of windows this application has made topmost.
//!
//! An entry exists iff we set the attribute ourselves; windows that are
//! topmost for other reasons (system dialogs, other tools) are never tracked.
//! Stale entries are dropped lazily whenever an operation discovers them.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::directory::WindowDirectory;
use crate::model::WindowId;

#[derive(Debug, Default)]
pub struct PinRegistry {
    pinned: HashSet<WindowId>,
}

impl PinRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `id` topmost and track it.
    ///
    /// Pinning a tracked window repeats the (idempotent) OS call so the
    /// attribute is restored if something else cleared it. Returns `false`
    /// when the handle is stale.
    pub fn pin<D: WindowDirectory>(&mut self, dir: &D, id: WindowId) -> bool {
        if !dir.is_alive(id) {
            self.forget_stale(id);
            return false;
        }
        if !dir.set_pinned(id, true) {
            self.forget_stale(id);
            return false;
        }
        if self.pinned.insert(id) {
            debug!(window = %id, "pinned");
        }
        true
    }

    /// Clear the topmost attribute on `id` and stop tracking it.
    ///
    /// A stale handle makes no OS call; its entry, if any, is dropped.
    pub fn unpin<D: WindowDirectory>(&mut self, dir: &D, id: WindowId) -> bool {
        if !dir.is_alive(id) {
            self.forget_stale(id);
            return false;
        }
        let applied = dir.set_pinned(id, false);
        if self.pinned.remove(&id) {
            debug!(window = %id, "unpinned");
        }
        applied
    }

    pub fn is_tracked(&self, id: WindowId) -> bool {
        self.pinned.contains(&id)
    }

    /// Release every tracked window and empty the set.
    ///
    /// Returns how many live windows were actually unpinned; stale entries
    /// are dropped without counting. Safe on an empty registry.
    pub fn unlock_all<D: WindowDirectory>(&mut self, dir: &D) -> usize {
        let mut released = 0;
        for id in self.pinned.drain() {
            if dir.is_alive(id) && dir.set_pinned(id, false) {
                released += 1;
            } else {
                trace!(window = %id, "dropping stale entry");
            }
        }
        released
    }

    /// Drop entries whose window has closed. Returns how many were dropped.
    pub fn prune<D: WindowDirectory>(&mut self, dir: &D) -> usize {
        let before = self.pinned.len();
        self.pinned.retain(|&id| dir.is_alive(id));
        before - self.pinned.len()
    }

    /// Snapshot of tracked windows in a stable order.
    pub fn tracked(&self) -> Vec<WindowId> {
        let mut ids: Vec<WindowId> = self.pinned.iter().copied().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.pinned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pinned.is_empty()
    }

    fn forget_stale(&mut self, id: WindowId) {
        if self.pinned.remove(&id) {
            trace!(window = %id, "dropping stale entry");
        }
    }
}
