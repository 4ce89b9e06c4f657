// Copyright 2026 the Hitmask Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability interface renderable objects expose to the index.

use kurbo::Rect;

use crate::buffer::PixelBuffer;
use crate::types::{ObjectFlags, ObjectId};

/// Capability interface for an object that can be hit-tested.
///
/// The external object system exposes its stack (images, paths, text,
/// shapes) through this one trait rather than through runtime type probing.
/// The index never inspects object internals; it only reads the reported
/// geometry and asks the object to paint itself into an offscreen buffer.
///
/// Implementations must keep `version` monotonically increasing: any change
/// that affects the rendered pixels or the bounds must bump it, which is what
/// invalidates the render cache entry for the object.
pub trait RasterObject {
    /// Stable identifier, supplied by the object system.
    fn id(&self) -> ObjectId;

    /// Post-transform axis-aligned bounds in canvas space.
    fn bounds(&self) -> Rect;

    /// Monotonically increasing content/transform version.
    fn version(&self) -> u64;

    /// Visibility and picking flags.
    fn flags(&self) -> ObjectFlags {
        ObjectFlags::default()
    }

    /// Paint the object into `buffer`.
    ///
    /// `origin` is the translation from canvas space into buffer-local
    /// space, i.e. the negated pixel-bounds origin. An object whose bounds
    /// start at canvas `(bx, by)` receives `origin = (-bx, -by)` and paints
    /// its top-left corner at buffer `(0, 0)`.
    fn render_into(&self, buffer: &mut PixelBuffer, origin: (i32, i32));
}
