// Copyright 2026 the Hitmask Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive pixel-space types shared by the raster and index layers.

use kurbo::Rect;

/// Identifier for a renderable object.
///
/// Ids are supplied by the external object system and are never generated
/// here. They are expected to stay stable for the lifetime of the object and
/// to not be reused while any index still references them.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(pub u64);

bitflags::bitflags! {
    /// Object flags controlling rendering and picking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ObjectFlags: u8 {
        /// Object is visible (rasterized and indexed).
        const VISIBLE  = 0b0000_0001;
        /// Object is pickable (participates in hit testing).
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for ObjectFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// Axis-aligned rectangle in integer canvas pixel space.
///
/// Half-open on both axes: a pixel `(x, y)` is inside when
/// `x0 <= x < x1 && y0 <= y < y1`. A rect with `x1 <= x0` or `y1 <= y0` is
/// empty and contributes nothing anywhere.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PixelRect {
    /// Left edge (inclusive).
    pub x0: i32,
    /// Top edge (inclusive).
    pub y0: i32,
    /// Right edge (exclusive).
    pub x1: i32,
    /// Bottom edge (exclusive).
    pub y1: i32,
}

impl PixelRect {
    /// The empty rect at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create a rect from edges.
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Create a rect from origin and size.
    pub const fn from_xywh(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self::new(x, y, x.saturating_add(w), y.saturating_add(h))
    }

    /// Smallest pixel rect covering a canvas-space [`Rect`].
    ///
    /// The float rect is expanded outward (floor/ceil), so partially covered
    /// pixels along the edges are included.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Canvas coordinates fit comfortably in i32; larger inputs are already rejected upstream."
    )]
    pub fn from_rect(r: Rect) -> Self {
        let e = r.expand();
        Self::new(e.x0 as i32, e.y0 as i32, e.x1 as i32, e.y1 as i32)
    }

    /// Width in pixels (zero when empty).
    pub const fn width(&self) -> i32 {
        if self.x1 > self.x0 { self.x1 - self.x0 } else { 0 }
    }

    /// Height in pixels (zero when empty).
    pub const fn height(&self) -> i32 {
        if self.y1 > self.y0 { self.y1 - self.y0 } else { 0 }
    }

    /// Pixel area. Empty rects have area zero.
    pub const fn area(&self) -> i64 {
        self.width() as i64 * self.height() as i64
    }

    /// True when the rect encloses no pixels.
    pub const fn is_empty(&self) -> bool {
        self.x1 <= self.x0 || self.y1 <= self.y0
    }

    /// Whether the rect contains the pixel `(x, y)`.
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        self.x0 <= x && x < self.x1 && self.y0 <= y && y < self.y1
    }

    /// Intersection of two rects (possibly empty).
    pub fn intersect(&self, other: &Self) -> Self {
        Self::new(
            self.x0.max(other.x0),
            self.y0.max(other.y0),
            self.x1.min(other.x1),
            self.y1.min(other.y1),
        )
    }

    /// Union of two rects. Empty rects are treated as identities.
    pub fn union(&self, other: &Self) -> Self {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Self::new(
            self.x0.min(other.x0),
            self.y0.min(other.y0),
            self.x1.max(other.x1),
            self.y1.max(other.y1),
        )
    }
}
