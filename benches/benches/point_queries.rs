// Copyright 2026 the Hitmask Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use hitmask_index::HitIndex;
use hitmask_raster::{ObjectFlags, ObjectId, PixelBuffer, PixelRect, RasterObject};
use kurbo::Rect;

struct Tile {
    id: ObjectId,
    rect: Rect,
}

impl RasterObject for Tile {
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
            [90, 90, 90, 255],
        );
    }
}

fn gen_tile_grid(n: usize, cell: f64) -> Vec<Tile> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(Tile {
                id: ObjectId((y * n + x) as u64 + 1),
                rect: Rect::new(x0, y0, x0 + cell, y0 + cell),
            });
        }
    }
    out
}

fn built_index(tiles: &[Tile], canvas: u32, stride: i32) -> HitIndex {
    let objects: Vec<&dyn RasterObject> = tiles.iter().map(|t| t as &dyn RasterObject).collect();
    let mut index = HitIndex::with_stride(canvas, canvas, stride);
    index.rebuild_full(&objects);
    index
}

fn bench_object_at_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("object_at_point");
    for &stride in &[1i32, 4] {
        let tiles = gen_tile_grid(32, 16.0);
        let index = built_index(&tiles, 512, stride);
        group.throughput(Throughput::Elements(1024));
        group.bench_function(format!("sweep_s{stride}"), |b| {
            b.iter(|| {
                let mut hits = 0usize;
                for q in 0..1024 {
                    let x = (q * 37) % 512;
                    let y = (q * 91) % 512;
                    if index.object_at_point(x, y).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits);
            })
        });
    }
    group.finish();
}

fn bench_objects_at_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("objects_at_point");
    let tiles = gen_tile_grid(32, 16.0);
    let index = built_index(&tiles, 512, 1);
    group.bench_function("geometric_stack", |b| {
        b.iter_batched(
            || (),
            |()| {
                let mut total = 0usize;
                for q in 0..256 {
                    let x = (q * 53) % 512;
                    let y = (q * 29) % 512;
                    total += index.objects_at_point(x, y).len();
                }
                black_box(total);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_object_at_point, bench_objects_at_point);
criterion_main!(benches);
