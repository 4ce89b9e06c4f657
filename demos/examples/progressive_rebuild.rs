// Copyright 2026 the Hitmask Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Progressive rebuild.
//!
//! Schedule a batched rebuild over a larger stack and drive it tick by
//! tick, printing progress. Queries keep answering from the previous
//! index until the run commits.
//!
//! Run:
//! - `cargo run -p hitmask_examples --example progressive_rebuild`

use hitmask_index::HitIndex;
use hitmask_raster::{ObjectFlags, ObjectId, PixelBuffer, PixelRect, RasterObject};
use kurbo::Rect;

struct Chip {
    id: ObjectId,
    rect: Rect,
}

impl RasterObject for Chip {
    fn id(&self) -> ObjectId {
        self.id
    }
    fn bounds(&self) -> Rect {
        self.rect
    }
    fn version(&self) -> u64 {
        1
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
            [128, 128, 128, 255],
        );
    }
}

fn main() {
    // A 6x6 grid of chips, 36 objects, rebuilt in batches of five.
    let chips: Vec<Chip> = (0..36u32)
        .map(|i| {
            let x = f64::from(i % 6) * 60.0;
            let y = f64::from(i / 6) * 60.0;
            Chip {
                id: ObjectId(u64::from(i) + 1),
                rect: Rect::new(x, y, x + 50.0, y + 50.0),
            }
        })
        .collect();
    let objects: Vec<&dyn RasterObject> = chips.iter().map(|c| c as &dyn RasterObject).collect();

    let mut index = HitIndex::new(400, 400);
    index.schedule_full_rebuild(&objects);

    // Nothing is published until the run finishes.
    assert_eq!(index.object_at_point(10, 10), None);

    let mut progress = index.progress();
    while progress.is_loading {
        progress = index.tick(&objects);
        println!("rebuild at {}%", progress.percent);
    }

    println!("at (10, 10): {:?}", index.object_at_point(10, 10));
    assert_eq!(index.object_at_point(10, 10), Some(ObjectId(1)));
    assert_eq!(index.object_at_point(370, 370), None);
}
