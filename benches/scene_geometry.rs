// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the pure comparison-scene geometry.
//!
//! The scene is recomposed on every pointer move while the loupe is open,
//! so `compose` sits on the hottest interaction path.

use criterion::{criterion_group, criterion_main, Criterion};
use iced::{Point, Size};
use iced_reveal::ui::comparison::geometry::{self, LensDiameter};
use iced_reveal::ui::comparison::navigator::PairCursor;
use iced_reveal::ui::state::{MagnifierZoom, PointerState, RevealPercent};
use std::hint::black_box;

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_geometry");

    let viewport = Size::new(1920.0, 1080.0);
    let reveal = RevealPercent::new(42);
    let mut zoom = MagnifierZoom::default();
    zoom.zoom_in();
    zoom.zoom_in();
    let mut pointer = PointerState::default();
    pointer.move_to(Point::new(811.0, 377.0));
    pointer.press();
    let lens = LensDiameter::default();

    group.bench_function("compose_with_lens", |b| {
        b.iter(|| {
            let scene = geometry::compose(
                black_box(viewport),
                black_box(reveal),
                black_box(zoom),
                black_box(&pointer),
                black_box(lens),
            );
            black_box(scene);
        });
    });

    pointer.release();
    group.bench_function("compose_without_lens", |b| {
        b.iter(|| {
            let scene = geometry::compose(
                black_box(viewport),
                black_box(reveal),
                black_box(zoom),
                black_box(&pointer),
                black_box(lens),
            );
            black_box(scene);
        });
    });

    group.finish();
}

fn bench_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_geometry");

    group.bench_function("cursor_full_cycle", |b| {
        b.iter(|| {
            let mut cursor = PairCursor::default();
            for _ in 0..64 {
                cursor.advance(black_box(7));
            }
            black_box(cursor.index());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_compose, bench_navigation);
criterion_main!(benches);
