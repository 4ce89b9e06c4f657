// Copyright 2026 the Hitmask Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Test-only sprite implementing [`RasterObject`].

use alloc::vec::Vec;

use kurbo::Rect;

use hitmask_raster::{ObjectFlags, ObjectId, PixelBuffer, PixelRect, RasterObject};

/// Solid rectangle with an optional transparent hole.
///
/// The hole is in bounds-local pixel coordinates so it travels with the
/// sprite when it moves. Every mutation bumps the version, as the trait
/// contract demands.
#[derive(Clone, Debug)]
pub(crate) struct Sprite {
    pub(crate) id: ObjectId,
    pub(crate) rect: Rect,
    pub(crate) version: u64,
    pub(crate) flags: ObjectFlags,
    pub(crate) alpha: u8,
    hole: Option<PixelRect>,
}

impl Sprite {
    pub(crate) fn opaque(id: u64, x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            id: ObjectId(id),
            rect: Rect::new(
                f64::from(x),
                f64::from(y),
                f64::from(x + w),
                f64::from(y + h),
            ),
            version: 1,
            flags: ObjectFlags::default(),
            alpha: 255,
            hole: None,
        }
    }

    /// Punch a transparent hole, in bounds-local pixel coordinates.
    pub(crate) fn with_hole(mut self, x: i32, y: i32, w: i32, h: i32) -> Self {
        self.hole = Some(PixelRect::from_xywh(x, y, w, h));
        self.version += 1;
        self
    }

    /// Move the top-left corner, keeping the size.
    pub(crate) fn move_to(&mut self, x: i32, y: i32) {
        let (w, h) = (self.rect.width(), self.rect.height());
        self.rect = Rect::new(f64::from(x), f64::from(y), f64::from(x) + w, f64::from(y) + h);
        self.version += 1;
    }

    /// Bump the version without changing geometry (simulates a repaint).
    pub(crate) fn repaint(&mut self) {
        self.version += 1;
    }
}

impl RasterObject for Sprite {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn bounds(&self) -> Rect {
        self.rect
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn flags(&self) -> ObjectFlags {
        self.flags
    }

    fn render_into(&self, buffer: &mut PixelBuffer, origin: (i32, i32)) {
        let px = PixelRect::from_rect(self.rect);
        buffer.fill_rect(
            px.x0 + origin.0,
            px.y0 + origin.1,
            px.width() as u32,
            px.height() as u32,
            [200, 200, 200, self.alpha],
        );
        if let Some(hole) = self.hole {
            buffer.fill_rect(
                px.x0 + origin.0 + hole.x0,
                px.y0 + origin.1 + hole.y0,
                hole.width() as u32,
                hole.height() as u32,
                [0, 0, 0, 0],
            );
        }
    }
}

/// Borrow a sprite slice as the trait-object slice the index consumes.
pub(crate) fn refs(sprites: &[Sprite]) -> Vec<&dyn RasterObject> {
    sprites.iter().map(|s| s as &dyn RasterObject).collect()
}
