// Copyright 2026 the Hitmask Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=hitmask_index --heading-base-level=0

//! Hitmask Index: a pixel-accurate, alpha-aware hit-testing index.
//!
//! Given an ordered, back-to-front stack of renderable, possibly
//! transparent, possibly overlapping objects on a canvas, the index answers
//! "which object is the topmost visually opaque one at this pixel?", and
//! stays cheap to maintain while objects are added, removed, moved, or
//! repainted at interactive rates.
//!
//! - Correctness depends on actual alpha content, not bounding boxes:
//!   objects rasterize themselves through
//!   [`hitmask_raster::RasterObject`] and only non-transparent samples
//!   claim pixels.
//! - Per-object rasterizations are memoized in a
//!   [`hitmask_raster::RenderCache`] keyed by a monotonic version counter.
//! - Small change sets are applied incrementally, touching only the
//!   affected region, with a hard contract: the result is identical,
//!   key for key, to a full rebuild of the same object set.
//! - Large or cold rebuilds run progressively in small batches across
//!   cooperative ticks, so the interactive thread never stalls; a newer
//!   rebuild request supersedes an in-flight run without publishing its
//!   partial results.
//! - A configurable sampling stride (1 through 8) trades index memory and build
//!   cost against pixel-level accuracy; off-grid queries fall back to
//!   probing the stride-aligned cell and its neighbors.
//!
//! All state lives in one explicitly constructed [`HitIndex`]; there is no
//! global store, no ambient timer, and no internal locking; `&mut self` is
//! the single-writer discipline (see the crate docs on concurrency below).
//!
//! # Example
//!
//! ```rust
//! use hitmask_index::HitIndex;
//! use hitmask_raster::{ObjectId, PixelBuffer, RasterObject};
//! use kurbo::Rect;
//!
//! struct Square {
//!     id: ObjectId,
//!     rect: Rect,
//! }
//!
//! impl RasterObject for Square {
//!     fn id(&self) -> ObjectId {
//!         self.id
//!     }
//!     fn bounds(&self) -> Rect {
//!         self.rect
//!     }
//!     fn version(&self) -> u64 {
//!         1
//!     }
//!     fn render_into(&self, buffer: &mut PixelBuffer, origin: (i32, i32)) {
//!         buffer.fill_rect(
//!             self.rect.x0 as i32 + origin.0,
//!             self.rect.y0 as i32 + origin.1,
//!             self.rect.width() as u32,
//!             self.rect.height() as u32,
//!             [0, 0, 0, 255],
//!         );
//!     }
//! }
//!
//! let a = Square { id: ObjectId(1), rect: Rect::new(0.0, 0.0, 100.0, 100.0) };
//! let b = Square { id: ObjectId(2), rect: Rect::new(50.0, 50.0, 150.0, 150.0) };
//! let objects: Vec<&dyn RasterObject> = vec![&a, &b];
//!
//! let mut index = HitIndex::new(512, 512);
//! index.mark_dirty(None);
//! index.update_if_needed(&objects);
//!
//! assert_eq!(index.object_at_point(75, 75), Some(ObjectId(2)));
//! assert_eq!(index.object_at_point(10, 10), Some(ObjectId(1)));
//! assert_eq!(index.object_at_point(200, 200), None);
//! ```
//!
//! # Concurrency
//!
//! The index assumes one cooperative thread of control. The only voluntary
//! suspension point is between progressive [`HitIndex::tick`] calls; every
//! other operation is synchronous and bounded by the incremental threshold.
//! A multi-threaded embedder must serialize writers itself (for example a
//! single-writer actor, or a mutex never held across a yield point); the
//! `&mut self` API makes anything else fail to compile rather than race.
//!
//! # Degradation policy
//!
//! Hit testing is a best-effort spatial approximation, so every failure
//! inside the index degrades accuracy instead of propagating: oversized
//! objects are skipped (and logged), stale cache entries are re-rendered,
//! superseded rebuilds are discarded, and queries on an empty index answer
//! "none".

#![no_std]

extern crate alloc;

pub mod debounce;
pub mod dirty;
pub mod index;
pub mod progressive;
pub mod store;

mod rebuild;

#[cfg(test)]
pub(crate) mod fixture;

pub use debounce::Debounce;
pub use dirty::DirtySet;
pub use index::{DEFAULT_SETTLE_MS, HitIndex, INCREMENTAL_LIMIT, STRIDE_RANGE};
pub use progressive::RebuildProgress;
pub use store::PixelIndexStore;
