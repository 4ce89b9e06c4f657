// Copyright 2026 the Hitmask Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Full and incremental rebuild engines.
//!
//! Both engines share one stamping primitive and differ only in how much of
//! the canvas they touch. The incremental path must leave the store in
//! exactly the state a full rebuild would produce for the same object set;
//! that equivalence is the central contract of the crate and is exercised by
//! the `equivalence` integration suite.

use alloc::vec::Vec;

use hashbrown::HashMap;
use tracing::debug;

use hitmask_raster::{ObjectFlags, ObjectId, PixelRect, RasterObject, RenderCache};

use crate::store::PixelIndexStore;

/// Geometry and flags recorded for an object at its last (re)stamp.
///
/// The previous pixel bounds are what the incremental engine erases before
/// re-stamping, and what the geometric query path tests containment against.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Recorded {
    /// Pixel bounds at the last build that saw the object.
    pub(crate) px: PixelRect,
    /// Flags at the last build that saw the object.
    pub(crate) flags: ObjectFlags,
}

impl Recorded {
    /// Whether the object participates in hit testing at all.
    ///
    /// Hidden objects render nothing, and visible-but-unpickable objects
    /// must not swallow clicks, so neither is stamped into the store.
    pub(crate) fn hit_testable(&self) -> bool {
        self.flags
            .contains(ObjectFlags::VISIBLE | ObjectFlags::PICKABLE)
    }
}

/// Smallest sample coordinate `>= v` on the global stride grid.
#[inline]
pub(crate) fn align_up(v: i32, stride: i32) -> i32 {
    v + (stride - v.rem_euclid(stride)) % stride
}

/// Stamp `object`'s non-transparent samples into `store`, clipped to `clip`.
///
/// Sample positions are multiples of `stride` in canvas space, so the same
/// pixel always maps to the same key no matter which engine writes it.
/// Objects the cache refuses (empty or oversized bounds) contribute nothing.
pub(crate) fn stamp_object(
    store: &mut PixelIndexStore,
    cache: &mut RenderCache,
    object: &dyn RasterObject,
    bounds: PixelRect,
    clip: PixelRect,
    stride: i32,
) {
    let clip = bounds.intersect(&clip);
    if clip.is_empty() {
        return;
    }
    let Some(entry) = cache.get_or_render(object, bounds) else {
        return;
    };
    let id = object.id();
    let mut y = align_up(clip.y0, stride);
    while y < clip.y1 {
        let mut x = align_up(clip.x0, stride);
        while x < clip.x1 {
            let local_x = (x - bounds.x0) as u32;
            let local_y = (y - bounds.y0) as u32;
            if entry.buffer.alpha_at(local_x, local_y) > 0 {
                store.insert(x, y, id);
            }
            x += stride;
        }
        y += stride;
    }
}

/// Rebuild everything from scratch.
///
/// Walks `objects` back to front and stamps every visible one, clipped to
/// the canvas. Later writes overwrite earlier ones at the same sample, which
/// is how z-order precedence is realized; no comparisons are needed because
/// iteration order already matches paint order. Deterministic and
/// idempotent.
pub(crate) fn build_full(
    cache: &mut RenderCache,
    objects: &[&dyn RasterObject],
    canvas: PixelRect,
    stride: i32,
) -> (PixelIndexStore, Vec<ObjectId>, HashMap<ObjectId, Recorded>) {
    let mut store = PixelIndexStore::new();
    let mut order = Vec::with_capacity(objects.len());
    let mut geometry = HashMap::with_capacity(objects.len());
    for object in objects {
        let rec = record(*object);
        order.push(object.id());
        geometry.insert(object.id(), rec);
        if rec.hit_testable() {
            stamp_object(&mut store, cache, *object, rec.px, canvas, stride);
        }
    }
    debug!(objects = order.len(), samples = store.len(), "full rebuild");
    (store, order, geometry)
}

/// Bring the store up to date after a small set of dirty objects changed.
///
/// The affected region is the union of each dirty object's previously
/// recorded bounds and its current bounds, clipped to the canvas. Every key
/// inside it is deleted and every object intersecting it, dirty or not, is
/// re-stamped over the overlap in paint order, so precedence inside the
/// region comes out exactly as a full rebuild would produce it. Keys outside
/// the region were not affected by any change and stay untouched.
///
/// Dirty ids with no counterpart in `objects` are evictions: their cache
/// entry and geometry record are dropped here, and their keys fall inside
/// the affected region by construction.
pub(crate) fn update_incremental(
    store: &mut PixelIndexStore,
    cache: &mut RenderCache,
    order: &mut Vec<ObjectId>,
    geometry: &mut HashMap<ObjectId, Recorded>,
    dirty_ids: &[ObjectId],
    objects: &[&dyn RasterObject],
    canvas: PixelRect,
    stride: i32,
) {
    let by_id: HashMap<ObjectId, &dyn RasterObject> =
        objects.iter().map(|o| (o.id(), *o)).collect();

    // Affected region: old and new bounds of everything dirty.
    let mut affected = PixelRect::ZERO;
    for &id in dirty_ids {
        if let Some(old) = geometry.get(&id) {
            affected = affected.union(&old.px);
        }
        match by_id.get(&id) {
            Some(object) => affected = affected.union(&record(*object).px),
            None => {
                // Evicted while dirty.
                cache.remove(id);
                geometry.remove(&id);
            }
        }
    }

    // Mirror the external paint order.
    order.clear();
    order.extend(objects.iter().map(|o| o.id()));

    let affected = affected.intersect(&canvas);
    if affected.is_empty() {
        // Nothing indexed changed (e.g. everything dirty was off-canvas),
        // but geometry records still need to reflect current state.
        for &id in dirty_ids {
            if let Some(object) = by_id.get(&id) {
                geometry.insert(id, record(*object));
            }
        }
        return;
    }

    store.remove_region(affected);

    for object in objects {
        let id = object.id();
        let dirty = dirty_ids.contains(&id);
        let rec = if dirty || !geometry.contains_key(&id) {
            let rec = record(*object);
            geometry.insert(id, rec);
            rec
        } else {
            geometry[&id]
        };
        if !rec.hit_testable() {
            continue;
        }
        if rec.px.intersect(&affected).is_empty() {
            continue;
        }
        stamp_object(store, cache, *object, rec.px, affected, stride);
    }
    debug!(
        dirty = dirty_ids.len(),
        region = ?affected,
        "incremental update"
    );
}

pub(crate) fn record(object: &dyn RasterObject) -> Recorded {
    Recorded {
        px: PixelRect::from_rect(object.bounds()),
        flags: object.flags(),
    }
}
