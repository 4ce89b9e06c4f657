// Copyright 2026 the Hitmask Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit index basics.
//!
//! Build an index over a small object stack, query a few points, move an
//! object, and update incrementally.
//!
//! Run:
//! - `cargo run -p hitmask_examples --example hit_basics`

use hitmask_index::HitIndex;
use hitmask_raster::{ObjectFlags, ObjectId, PixelBuffer, PixelRect, RasterObject};
use kurbo::Rect;

struct Square {
    id: ObjectId,
    rect: Rect,
    version: u64,
    color: [u8; 4],
}

impl RasterObject for Square {
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
        ObjectFlags::default()
    }
    fn render_into(&self, buffer: &mut PixelBuffer, origin: (i32, i32)) {
        let px = PixelRect::from_rect(self.rect);
        buffer.fill_rect(
            px.x0 + origin.0,
            px.y0 + origin.1,
            px.width() as u32,
            px.height() as u32,
            self.color,
        );
    }
}

fn main() {
    let mut below = Square {
        id: ObjectId(1),
        rect: Rect::new(10.0, 10.0, 110.0, 110.0),
        version: 1,
        color: [220, 60, 60, 255],
    };
    let above = Square {
        id: ObjectId(2),
        rect: Rect::new(60.0, 60.0, 160.0, 160.0),
        version: 1,
        color: [60, 60, 220, 255],
    };

    let mut index = HitIndex::new(400, 400);
    {
        let objects: Vec<&dyn RasterObject> = vec![&below, &above];
        index.rebuild_full(&objects);
    }

    // In the overlap the later object wins.
    println!("at (80, 80): {:?}", index.object_at_point(80, 80));
    // Outside the overlap the lower object is exposed.
    println!("at (20, 20): {:?}", index.object_at_point(20, 20));
    // Empty canvas.
    println!("at (300, 300): {:?}", index.object_at_point(300, 300));

    // Move the lower square out from under the upper one and update only
    // the affected region.
    below.rect = Rect::new(200.0, 200.0, 300.0, 300.0);
    below.version += 1;
    let objects: Vec<&dyn RasterObject> = vec![&below, &above];
    index.mark_dirty(Some(below.id));
    index.update_if_needed(&objects);

    println!("after move, at (250, 250): {:?}", index.object_at_point(250, 250));
    assert_eq!(index.object_at_point(250, 250), Some(ObjectId(1)));
    assert_eq!(index.object_at_point(20, 20), None);
}
