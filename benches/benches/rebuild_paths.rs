// Copyright 2026 the Hitmask Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use hitmask_index::HitIndex;
use hitmask_raster::{ObjectFlags, ObjectId, PixelBuffer, PixelRect, RasterObject};
use kurbo::Rect;

#[derive(Clone)]
struct Card {
    id: ObjectId,
    rect: Rect,
    version: u64,
}

impl Card {
    fn new(id: u64, x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            id: ObjectId(id),
            rect: Rect::new(x, y, x + w, y + h),
            version: 1,
        }
    }
}

impl RasterObject for Card {
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
            [200, 200, 200, 255],
        );
    }
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_scattered_cards(count: usize, canvas: f64, size: f64) -> Vec<Card> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for i in 0..count {
        let x = rng.next_f64() * (canvas - size);
        let y = rng.next_f64() * (canvas - size);
        out.push(Card::new(i as u64 + 1, x, y, size, size));
    }
    out
}

fn refs(cards: &[Card]) -> Vec<&dyn RasterObject> {
    cards.iter().map(|c| c as &dyn RasterObject).collect()
}

fn bench_full_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_rebuild");
    for &n in &[16usize, 64, 256] {
        let cards = gen_scattered_cards(n, 2000.0, 48.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("cold_n{n}"), |b| {
            b.iter_batched(
                || HitIndex::new(2000, 2000),
                |mut index| {
                    let objects = refs(&cards);
                    index.rebuild_full(&objects);
                    black_box(index.store().len());
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("warm_cache_n{n}"), |b| {
            b.iter_batched(
                || {
                    let mut index = HitIndex::new(2000, 2000);
                    let objects = refs(&cards);
                    index.rebuild_full(&objects);
                    index
                },
                |mut index| {
                    let objects = refs(&cards);
                    index.rebuild_full(&objects);
                    black_box(index.store().len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_incremental_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("incremental");
    for &n in &[64usize, 256] {
        let cards = gen_scattered_cards(n, 2000.0, 48.0);
        group.bench_function(format!("single_move_n{n}"), |b| {
            b.iter_batched(
                || {
                    let mut index = HitIndex::new(2000, 2000);
                    let objects = refs(&cards);
                    index.rebuild_full(&objects);
                    let mut moved = cards.clone();
                    moved[0].rect = moved[0].rect + kurbo::Vec2::new(17.0, 9.0);
                    moved[0].version += 1;
                    (index, moved)
                },
                |(mut index, moved)| {
                    let objects = refs(&moved);
                    index.mark_dirty(Some(moved[0].id));
                    index.update_if_needed(&objects);
                    black_box(index.store().len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_coarse_stride(c: &mut Criterion) {
    let mut group = c.benchmark_group("stride");
    let cards = gen_scattered_cards(256, 2000.0, 48.0);
    for &stride in &[1i32, 2, 4, 8] {
        group.bench_function(format!("full_rebuild_s{stride}"), |b| {
            b.iter_batched(
                || HitIndex::with_stride(2000, 2000, stride),
                |mut index| {
                    let objects = refs(&cards);
                    index.rebuild_full(&objects);
                    black_box(index.store().len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_full_rebuild,
    bench_incremental_move,
    bench_coarse_stride,
);
criterion_main!(benches);
