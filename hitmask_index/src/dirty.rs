// Copyright 2026 the Hitmask Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pending-change tracking for the index.

use hashbrown::HashSet;
use smallvec::SmallVec;

use hitmask_raster::ObjectId;

/// Set of objects whose cached render and index contributions are stale.
///
/// Besides per-object marks there is a single `all` flag for bulk
/// invalidation (cold start, stride change, reorder); when it is set the
/// per-object set is irrelevant and the next update must be a full rebuild.
/// The set is cleared exactly when a rebuild completes.
#[derive(Clone, Debug, Default)]
pub struct DirtySet {
    ids: HashSet<ObjectId>,
    all: bool,
}

impl DirtySet {
    /// Create an empty (clean) set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark one object dirty. Returns `true` if it was newly marked.
    pub fn mark(&mut self, id: ObjectId) -> bool {
        self.ids.insert(id)
    }

    /// Mark everything dirty.
    pub fn mark_all(&mut self) {
        self.all = true;
    }

    /// True if `id` is marked (individually or via `all`).
    pub fn is_dirty(&self, id: ObjectId) -> bool {
        self.all || self.ids.contains(&id)
    }

    /// True when the whole index is invalidated.
    pub fn is_all(&self) -> bool {
        self.all
    }

    /// Number of individually marked objects.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when nothing is pending.
    pub fn is_empty(&self) -> bool {
        !self.all && self.ids.is_empty()
    }

    /// Snapshot the individually marked ids.
    ///
    /// Order is unspecified; callers that need determinism sort by id.
    pub fn ids(&self) -> SmallVec<[ObjectId; 8]> {
        self.ids.iter().copied().collect()
    }

    /// Return to the clean state.
    pub fn clear(&mut self) {
        self.ids.clear();
        self.all = false;
    }
}
