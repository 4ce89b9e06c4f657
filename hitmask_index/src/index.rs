// Copyright 2026 the Hitmask Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The owned index context and its public API.

use alloc::vec::Vec;

use hashbrown::HashMap;
use tracing::debug;

use hitmask_raster::{ObjectId, PixelRect, RasterObject, RenderCache};

use crate::debounce::Debounce;
use crate::dirty::DirtySet;
use crate::progressive::{ProgressiveRebuild, RebuildProgress};
use crate::rebuild::{Recorded, build_full, update_incremental};
use crate::store::PixelIndexStore;

/// Dirty sets of this size or larger are routed to a full rebuild.
pub const INCREMENTAL_LIMIT: usize = 5;

/// Supported sampling stride range.
pub const STRIDE_RANGE: core::ops::RangeInclusive<i32> = 1..=8;

/// Default settle delay for coalescing modification bursts, in milliseconds.
pub const DEFAULT_SETTLE_MS: u64 = 100;

/// Pixel-accurate hit-testing index over an ordered object stack.
///
/// One `HitIndex` owns every piece of mutable state of the subsystem: the
/// sparse pixel store, the render cache, the dirty set, the mirrored paint
/// order, and the scheduling bits. External code holds it by value or behind
/// whatever handle it likes; there is no process-wide singleton. All
/// mutation goes through `&mut self`, so there is exactly one logical writer
/// by construction, and queries take `&self`.
///
/// The external object system is consumed purely as a back-to-front slice of
/// [`RasterObject`] trait objects passed to the update entry points; the
/// index never stores references to objects, only their ids, recorded
/// geometry, and cached rasterizations.
#[derive(Debug)]
pub struct HitIndex {
    canvas: PixelRect,
    stride: i32,
    store: PixelIndexStore,
    cache: RenderCache,
    dirty: DirtySet,
    order: Vec<ObjectId>,
    geometry: HashMap<ObjectId, Recorded>,
    progressive: Option<ProgressiveRebuild>,
    debounce: Debounce,
}

impl HitIndex {
    /// Create an index for a canvas of `width × height` pixels, sampling
    /// every pixel.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_stride(width, height, 1)
    }

    /// Create an index with an explicit sampling stride (clamped to
    /// [`STRIDE_RANGE`]).
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Canvas dimensions beyond i32::MAX pixels are not meaningful."
    )]
    pub fn with_stride(width: u32, height: u32, stride: i32) -> Self {
        Self {
            canvas: PixelRect::new(0, 0, width.min(i32::MAX as u32) as i32, height.min(i32::MAX as u32) as i32),
            stride: stride.clamp(*STRIDE_RANGE.start(), *STRIDE_RANGE.end()),
            store: PixelIndexStore::new(),
            cache: RenderCache::new(),
            dirty: DirtySet::new(),
            order: Vec::new(),
            geometry: HashMap::new(),
            progressive: None,
            debounce: Debounce::new(DEFAULT_SETTLE_MS),
        }
    }

    /// Canvas bounds in pixel space.
    pub const fn canvas(&self) -> PixelRect {
        self.canvas
    }

    /// Current sampling stride.
    pub const fn stride(&self) -> i32 {
        self.stride
    }

    /// Change the settle delay used to coalesce modification bursts.
    pub fn set_settle_delay(&mut self, delay_ms: u64) {
        self.debounce = Debounce::new(delay_ms);
    }

    /// Resize the canvas. Invalidates everything, since the clip that bounded
    /// every previous stamp has changed.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Canvas dimensions beyond i32::MAX pixels are not meaningful."
    )]
    pub fn set_canvas_size(&mut self, width: u32, height: u32) {
        self.canvas = PixelRect::new(0, 0, width.min(i32::MAX as u32) as i32, height.min(i32::MAX as u32) as i32);
        self.dirty.mark_all();
    }

    /// True when no rebuild is pending.
    pub fn is_clean(&self) -> bool {
        self.dirty.is_empty()
    }

    /// Read-only view of the sparse store, for diagnostics and tests.
    pub fn store(&self) -> &PixelIndexStore {
        &self.store
    }

    // --- change notifications ---

    /// Mark one object dirty, or everything when `id` is `None`.
    pub fn mark_dirty(&mut self, id: Option<ObjectId>) {
        match id {
            Some(id) => {
                self.dirty.mark(id);
            }
            None => self.dirty.mark_all(),
        }
    }

    /// An object was added to the stack.
    pub fn notify_added(&mut self, id: ObjectId) {
        self.dirty.mark(id);
    }

    /// An object was removed from the stack.
    pub fn notify_removed(&mut self, id: ObjectId) {
        self.dirty.mark(id);
    }

    /// An object's content or transform settled on a new state.
    ///
    /// Marks it dirty and arms the debounce so a burst of modifications
    /// coalesces into one recompute; drive [`Self::poll`] with the same
    /// clock to let it fire.
    pub fn notify_modified(&mut self, id: ObjectId, now_ms: u64) {
        self.dirty.mark(id);
        self.debounce.schedule(now_ms);
    }

    /// An object is mid-drag.
    ///
    /// Marks it dirty but schedules nothing: the index is not recomputed for
    /// every intermediate frame, and queries serve the pre-drag state as
    /// documented best-effort data until the motion settles.
    pub fn notify_moving(&mut self, id: ObjectId) {
        self.dirty.mark(id);
    }

    /// The stack was reordered. Order is global state, so everything is
    /// invalidated.
    pub fn notify_reordered(&mut self) {
        self.dirty.mark_all();
    }

    // --- rebuilds ---

    /// Run the debounce clock; rebuilds via [`Self::update_if_needed`] when
    /// the settle deadline has passed.
    pub fn poll(&mut self, now_ms: u64, objects: &[&dyn RasterObject]) {
        if self.debounce.fire(now_ms) {
            self.update_if_needed(objects);
        }
    }

    /// Bring the store up to date if anything is dirty; no-op when clean.
    ///
    /// Small dirty sets (fewer than [`INCREMENTAL_LIMIT`] objects, on a warm
    /// index) take the incremental path; everything else is a synchronous
    /// full rebuild, which supersedes any progressive run in flight. A run
    /// in flight always forces the full path: the live store may already
    /// have been dropped for it (a stride change does exactly that), so it
    /// is not a valid baseline to patch incrementally.
    pub fn update_if_needed(&mut self, objects: &[&dyn RasterObject]) {
        if self.dirty.is_empty() {
            return;
        }
        let cold = self.geometry.is_empty();
        let rebuilding = self.progressive.is_some();
        if self.dirty.is_all() || cold || rebuilding || self.dirty.len() >= INCREMENTAL_LIMIT {
            self.rebuild_full(objects);
        } else {
            let mut ids = self.dirty.ids();
            ids.sort_unstable();
            update_incremental(
                &mut self.store,
                &mut self.cache,
                &mut self.order,
                &mut self.geometry,
                &ids,
                objects,
                self.canvas,
                self.stride,
            );
            self.dirty.clear();
        }
    }

    /// Synchronous full rebuild, superseding any progressive run.
    pub fn rebuild_full(&mut self, objects: &[&dyn RasterObject]) {
        self.progressive = None;
        let (store, order, geometry) = build_full(&mut self.cache, objects, self.canvas, self.stride);
        self.store = store;
        self.order = order;
        self.geometry = geometry;
        self.dirty.clear();
        self.debounce.cancel_pending();
    }

    /// Start (or restart) a progressive full rebuild.
    ///
    /// Cancels and replaces any rebuild already in flight. The snapshot
    /// covers the whole stack, so the dirty set is cleared here; changes
    /// arriving while the run is ticking re-mark it and are reconciled by
    /// the next update. Queries keep answering from the previous store until
    /// the final [`Self::tick`] commits.
    pub fn schedule_full_rebuild(&mut self, objects: &[&dyn RasterObject]) {
        self.progressive = Some(ProgressiveRebuild::new(objects));
        self.dirty.clear();
        self.debounce.cancel_pending();
        debug!(objects = objects.len(), "progressive rebuild scheduled");
    }

    /// Advance the progressive rebuild by one batch and report progress.
    ///
    /// The final batch atomically swaps the staged results in. Without a run
    /// in flight this is a no-op that reports idle.
    pub fn tick(&mut self, objects: &[&dyn RasterObject]) -> RebuildProgress {
        if let Some(run) = self.progressive.as_mut() {
            run.tick(&mut self.cache, objects, self.canvas, self.stride);
        }
        if let Some(run) = self.progressive.take_if(|run| run.is_done()) {
            let (store, order, geometry) = run.into_parts();
            self.store = store;
            self.order = order;
            self.geometry = geometry;
            debug!(samples = self.store.len(), "progressive rebuild committed");
        }
        self.progress()
    }

    /// Progress of the in-flight progressive rebuild, if any.
    pub fn progress(&self) -> RebuildProgress {
        match &self.progressive {
            Some(run) => RebuildProgress {
                is_loading: true,
                percent: run.percent(),
            },
            None => RebuildProgress::IDLE,
        }
    }

    /// Change the sampling stride (clamped to [`STRIDE_RANGE`]).
    ///
    /// A stride change alters what every existing key means, so partial
    /// invalidation is unsound: the render cache and the store are dropped
    /// wholesale and a progressive full rebuild is scheduled. Drive
    /// [`Self::tick`] to completion (or call [`Self::rebuild_full`]) to
    /// repopulate; until then pixel-accurate queries answer `None`.
    pub fn set_sampling_resolution(&mut self, stride: i32, objects: &[&dyn RasterObject]) {
        let stride = stride.clamp(*STRIDE_RANGE.start(), *STRIDE_RANGE.end());
        if stride == self.stride {
            return;
        }
        self.stride = stride;
        self.cache.clear();
        self.store.clear();
        self.schedule_full_rebuild(objects);
    }

    // --- queries ---

    /// Topmost visually opaque, pickable object at `(x, y)`.
    ///
    /// Looks up the exact key first; with a stride above one, a miss probes
    /// the stride-aligned cell and its eight neighbors, because a query
    /// coordinate need not land on a sampled grid point. Before any build
    /// completes this simply answers `None`.
    pub fn object_at_point(&self, x: i32, y: i32) -> Option<ObjectId> {
        if let Some(id) = self.hit(x, y) {
            return Some(id);
        }
        if self.stride > 1 {
            let qx = x - x.rem_euclid(self.stride);
            let qy = y - y.rem_euclid(self.stride);
            if let Some(id) = self.hit(qx, qy) {
                return Some(id);
            }
            for dy in -1..=1 {
                for dx in -1..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    if let Some(id) = self.hit(qx + dx * self.stride, qy + dy * self.stride) {
                        return Some(id);
                    }
                }
            }
        }
        None
    }

    /// Every pickable object whose recorded bounds contain `(x, y)`, top to
    /// bottom.
    ///
    /// This is the geometric path: containment is tested against reported
    /// bounds only, independent of the sparse index, for callers that do not
    /// need transparency-aware precision.
    pub fn objects_at_point(&self, x: i32, y: i32) -> Vec<ObjectId> {
        self.order
            .iter()
            .rev()
            .copied()
            .filter(|id| {
                self.geometry
                    .get(id)
                    .is_some_and(|rec| rec.hit_testable() && rec.px.contains(x, y))
            })
            .collect()
    }

    /// Topmost object at `(x, y)`, choosing the strategy per caller need.
    ///
    /// With `include_transparent_geometry` the geometric containment test is
    /// used, so fully transparent pixels inside an object's bounds still
    /// hit; without it the pixel-accurate store decides.
    pub fn top_object_at_point(
        &self,
        x: i32,
        y: i32,
        include_transparent_geometry: bool,
    ) -> Option<ObjectId> {
        if include_transparent_geometry {
            self.objects_at_point(x, y).first().copied()
        } else {
            self.object_at_point(x, y)
        }
    }

    /// The mirrored paint order, back to front.
    pub fn render_order(&self) -> &[ObjectId] {
        &self.order
    }

    /// Position of `id` in the paint order (0 = backmost).
    pub fn z_index_of(&self, id: ObjectId) -> Option<usize> {
        self.order.iter().position(|&o| o == id)
    }

    #[inline]
    fn hit(&self, x: i32, y: i32) -> Option<ObjectId> {
        let id = self.store.get(x, y)?;
        // Flags may have changed since the stamp; stale entries resolve on
        // the next rebuild, but picking must respect the recorded flags.
        self.geometry
            .get(&id)
            .is_some_and(Recorded::hit_testable)
            .then_some(id)
    }
}
