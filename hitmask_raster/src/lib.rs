// Copyright 2026 the Hitmask Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=hitmask_raster --heading-base-level=0

//! Hitmask Raster: the rendering boundary of the hitmask stack.
//!
//! This crate defines the types that sit between an external object/render
//! system and the pixel-accurate hit-testing index in `hitmask_index`:
//!
//! - [`PixelBuffer`]: plain RGBA8 offscreen buffers objects paint into.
//! - [`RasterObject`]: the capability interface every hit-testable object
//!   implements (stable id, canvas-space bounds, monotonic version, and a
//!   rasterize-into-buffer operation).
//! - [`RenderCache`]: memoizes one rasterization per object, keyed by the
//!   object's version counter, with a hard area ceiling for pathological
//!   bounds ([`MAX_RASTER_AREA`]).
//! - [`PixelRect`] / [`ObjectId`] / [`ObjectFlags`]: the integer pixel-space
//!   vocabulary shared with the index layer.
//!
//! The actual renderer is a black box: objects are handed a buffer and an
//! origin offset and paint themselves in buffer-local coordinates. Nothing
//! here composites, blends, or interprets pixels beyond the alpha channel.
//!
//! # Example
//!
//! ```rust
//! use hitmask_raster::{ObjectId, PixelBuffer, PixelRect, RasterObject, RenderCache};
//! use kurbo::Rect;
//!
//! struct Square(ObjectId);
//!
//! impl RasterObject for Square {
//!     fn id(&self) -> ObjectId {
//!         self.0
//!     }
//!     fn bounds(&self) -> Rect {
//!         Rect::new(10.0, 10.0, 20.0, 20.0)
//!     }
//!     fn version(&self) -> u64 {
//!         1
//!     }
//!     fn render_into(&self, buffer: &mut PixelBuffer, origin: (i32, i32)) {
//!         buffer.fill_rect(10 + origin.0, 10 + origin.1, 10, 10, [0, 0, 0, 255]);
//!     }
//! }
//!
//! let square = Square(ObjectId(7));
//! let mut cache = RenderCache::new();
//! let bounds = PixelRect::from_rect(square.bounds());
//! let entry = cache.get_or_render(&square, bounds).unwrap();
//! assert_eq!(entry.buffer.alpha_at(0, 0), 255);
//! ```

#![no_std]

extern crate alloc;

pub mod buffer;
pub mod cache;
pub mod object;
pub mod types;

pub use buffer::PixelBuffer;
pub use cache::{MAX_RASTER_AREA, RenderCache, RenderEntry};
pub use object::RasterObject;
pub use types::{ObjectFlags, ObjectId, PixelRect};
