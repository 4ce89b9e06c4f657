// Copyright 2026 the Hitmask Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! RGBA8 pixel buffers that objects rasterize themselves into.

use alloc::vec;
use alloc::vec::Vec;

/// An offscreen RGBA8 buffer of `width × height` pixels.
///
/// A freshly allocated buffer is zeroed, which in RGBA8 means fully
/// transparent. Rows are stored top to bottom with no padding, so the byte
/// offset of pixel `(x, y)` is `(y * width + x) * 4`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a zeroed (fully transparent) buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Buffer width in pixels.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels.
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw RGBA bytes, row-major.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }

    /// Alpha channel at `(x, y)`, or `0` outside the buffer.
    #[inline]
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.offset(x, y).map(|o| self.data[o + 3]).unwrap_or(0)
    }

    /// Write one RGBA pixel. Out-of-bounds writes are ignored.
    #[inline]
    pub fn put_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if let Some(o) = self.offset(x, y) {
            self.data[o..o + 4].copy_from_slice(&rgba);
        }
    }

    /// Fill an axis-aligned rectangle with one RGBA value, clipped to the
    /// buffer. Coordinates are buffer-local; `w`/`h` of zero fill nothing.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, rgba: [u8; 4]) {
        let x0 = x.max(0) as u32;
        let y0 = y.max(0) as u32;
        let x1 = x
            .saturating_add_unsigned(w)
            .clamp(0, self.width as i32) as u32;
        let y1 = y
            .saturating_add_unsigned(h)
            .clamp(0, self.height as i32) as u32;
        for py in y0..y1 {
            for px in x0..x1 {
                self.put_pixel(px, py, rgba);
            }
        }
    }
}
