// Copyright 2026 the Hitmask Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sparse pixel-to-owner mapping.

use hashbrown::HashMap;

use hitmask_raster::{ObjectId, PixelRect};

/// Sparse mapping from a sampled pixel position to the object owning it.
///
/// Keys are canvas pixel coordinates on the stride-aligned sample grid; the
/// value is the topmost object with non-zero alpha at that sample. Only the
/// rebuild engines write here: precedence is realized by stamping objects in
/// paint order and letting the last writer win, so the map itself carries no
/// z information.
///
/// Two stores compare equal when they contain the same keys with the same
/// owners, which is the equivalence the incremental engine is tested
/// against.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PixelIndexStore {
    cells: HashMap<(i32, i32), ObjectId>,
}

impl PixelIndexStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Owner of the sample at `(x, y)`, if any.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<ObjectId> {
        self.cells.get(&(x, y)).copied()
    }

    /// Record `id` as the owner of the sample at `(x, y)`, replacing any
    /// previous owner.
    #[inline]
    pub fn insert(&mut self, x: i32, y: i32, id: ObjectId) {
        self.cells.insert((x, y), id);
    }

    /// Delete every key inside `region` (half-open).
    pub fn remove_region(&mut self, region: PixelRect) {
        if region.is_empty() {
            return;
        }
        self.cells.retain(|&(x, y), _| !region.contains(x, y));
    }

    /// True if any key references `id`. Used to audit eviction.
    pub fn references(&self, id: ObjectId) -> bool {
        self.cells.values().any(|&v| v == id)
    }

    /// Number of occupied samples.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when no sample is occupied.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Iterate `((x, y), owner)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = ((i32, i32), ObjectId)> + '_ {
        self.cells.iter().map(|(&k, &v)| (k, v))
    }
}
