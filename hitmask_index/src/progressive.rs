// Copyright 2026 the Hitmask Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Batched full rebuilds that never block the interactive thread for long.

use alloc::vec::Vec;

use hashbrown::HashMap;
use tracing::debug;

use hitmask_raster::{ObjectId, PixelRect, RasterObject, RenderCache};

use crate::rebuild::{Recorded, record, stamp_object};
use crate::store::PixelIndexStore;

/// Objects stamped per cooperative tick.
pub(crate) const REBUILD_BATCH: usize = 5;

/// Progress of an in-flight progressive rebuild.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RebuildProgress {
    /// True while a rebuild is in flight.
    pub is_loading: bool,
    /// Completed share, `0..=100`.
    pub percent: u8,
}

impl RebuildProgress {
    /// Progress of a finished (or never started) rebuild.
    pub const IDLE: Self = Self {
        is_loading: false,
        percent: 100,
    };
}

/// A full rebuild split across cooperative ticks.
///
/// The run stamps into a private staging store; the live store keeps serving
/// queries untouched until the final batch completes and the owner swaps the
/// staging results in. Dropping the run (because a newer rebuild request
/// superseded it) therefore publishes nothing, which is exactly the
/// cancellation contract.
///
/// The object set is snapshotted as ids at schedule time. An id whose object
/// has disappeared by the time its batch runs is skipped; the change
/// notification that removed it has marked the index dirty anyway, so a
/// follow-up update reconciles the difference.
#[derive(Debug)]
pub(crate) struct ProgressiveRebuild {
    queue: Vec<ObjectId>,
    cursor: usize,
    staging: PixelIndexStore,
    order: Vec<ObjectId>,
    geometry: HashMap<ObjectId, Recorded>,
}

impl ProgressiveRebuild {
    /// Snapshot the current object stack and start a run.
    pub(crate) fn new(objects: &[&dyn RasterObject]) -> Self {
        Self {
            queue: objects.iter().map(|o| o.id()).collect(),
            cursor: 0,
            staging: PixelIndexStore::new(),
            order: Vec::with_capacity(objects.len()),
            geometry: HashMap::with_capacity(objects.len()),
        }
    }

    /// True once every scheduled object has been processed.
    pub(crate) fn is_done(&self) -> bool {
        self.cursor >= self.queue.len()
    }

    /// Completed share, `0..=100`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "The quotient is clamped to the 0..=100 range."
    )]
    pub(crate) fn percent(&self) -> u8 {
        if self.queue.is_empty() {
            return 100;
        }
        ((self.cursor * 100) / self.queue.len()).min(100) as u8
    }

    /// Process one batch of scheduled objects.
    pub(crate) fn tick(
        &mut self,
        cache: &mut RenderCache,
        objects: &[&dyn RasterObject],
        canvas: PixelRect,
        stride: i32,
    ) {
        if self.is_done() {
            return;
        }
        let by_id: HashMap<ObjectId, &dyn RasterObject> =
            objects.iter().map(|o| (o.id(), *o)).collect();
        let end = (self.cursor + REBUILD_BATCH).min(self.queue.len());
        for &id in &self.queue[self.cursor..end] {
            let Some(object) = by_id.get(&id) else {
                debug!(id = id.0, "scheduled object vanished, skipping");
                continue;
            };
            let rec = record(*object);
            self.order.push(id);
            self.geometry.insert(id, rec);
            if rec.hit_testable() {
                stamp_object(&mut self.staging, cache, *object, rec.px, canvas, stride);
            }
        }
        self.cursor = end;
    }

    /// Consume the finished run and hand its results to the owner.
    ///
    /// Must only be called once [`Self::is_done`] returns true.
    pub(crate) fn into_parts(self) -> (PixelIndexStore, Vec<ObjectId>, HashMap<ObjectId, Recorded>) {
        debug_assert!(self.cursor >= self.queue.len(), "rebuild still in flight");
        (self.staging, self.order, self.geometry)
    }
}
