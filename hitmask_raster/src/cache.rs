// Copyright 2026 the Hitmask Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Versioned per-object render cache.

use hashbrown::HashMap;
use tracing::warn;

use crate::buffer::PixelBuffer;
use crate::object::RasterObject;
use crate::types::{ObjectId, PixelRect};

/// Hard ceiling on the pixel area of a single cached rasterization.
///
/// Objects whose bounds exceed this are never rasterized or cached and are
/// skipped by the index; they simply stop participating in pixel-accurate
/// hit testing. This bounds worst-case memory, it is not a correctness
/// guarantee.
pub const MAX_RASTER_AREA: i64 = 4096 * 4096;

/// One memoized rasterization.
#[derive(Clone, Debug)]
pub struct RenderEntry {
    /// The object's pixels in buffer-local coordinates.
    pub buffer: PixelBuffer,
    /// Canvas-space pixel bounds the buffer was rendered for.
    pub bounds: PixelRect,
    /// Object version the buffer corresponds to.
    pub version: u64,
}

/// Memoizes per-object rasterizations keyed by [`ObjectId`].
///
/// An entry is reused only while its version matches the object's current
/// version and its buffer dimensions match the requested bounds; any
/// mismatch discards it and re-rasterizes. A pure translation (same size,
/// same version, different origin) reuses the pixels and refreshes the
/// recorded bounds.
#[derive(Debug, Default)]
pub struct RenderCache {
    entries: HashMap<ObjectId, RenderEntry>,
}

impl RenderCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a valid rasterization of `object` for `bounds`, rendering one
    /// if necessary.
    ///
    /// Returns `None` for empty bounds and for bounds whose area exceeds
    /// [`MAX_RASTER_AREA`]; the caller must treat such objects as
    /// contributing nothing to the index.
    pub fn get_or_render(
        &mut self,
        object: &dyn RasterObject,
        bounds: PixelRect,
    ) -> Option<&RenderEntry> {
        if bounds.is_empty() {
            return None;
        }
        if bounds.area() > MAX_RASTER_AREA {
            warn!(
                id = object.id().0,
                area = bounds.area(),
                "object exceeds raster area ceiling, skipping"
            );
            return None;
        }
        let id = object.id();
        let version = object.version();
        let reusable = self.entries.get(&id).is_some_and(|e| {
            e.version == version
                && e.bounds.width() == bounds.width()
                && e.bounds.height() == bounds.height()
        });
        if reusable {
            // Refresh the recorded origin so translations stay cheap.
            if let Some(entry) = self.entries.get_mut(&id) {
                entry.bounds = bounds;
            }
        } else {
            let mut buffer = PixelBuffer::new(bounds.width() as u32, bounds.height() as u32);
            object.render_into(&mut buffer, (-bounds.x0, -bounds.y0));
            self.entries.insert(
                id,
                RenderEntry {
                    buffer,
                    bounds,
                    version,
                },
            );
        }
        self.entries.get(&id)
    }

    /// Look up a cached entry without validating or rendering.
    pub fn peek(&self, id: ObjectId) -> Option<&RenderEntry> {
        self.entries.get(&id)
    }

    /// Drop the entry for a removed object.
    pub fn remove(&mut self, id: ObjectId) {
        self.entries.remove(&id);
    }

    /// Drop every entry (bulk invalidation, e.g. a stride change).
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
