// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the per-frame card pipeline.
//!
//! Measures the performance of:
//! - Transform composition (tilt to three layer transforms)
//! - Matrix building and projection of the card outline
//! - A full return-to-rest settle at 60 fps

use criterion::{criterion_group, criterion_main, Criterion};
use glam::Vec2;
use iced_tilt::card::{compose, TiltCard};
use iced_tilt::domain::card::{CardConfig, TiltState};
use iced_tilt::motion::project;
use std::hint::black_box;

/// Benchmark composing the layer transforms for one frame.
fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    let config = CardConfig::default();
    let tilt = TiltState::new(7.5, -18.0);

    group.bench_function("compose", |b| {
        b.iter(|| black_box(compose(black_box(tilt), &config)));
    });

    let composed = compose(tilt, &config);
    group.bench_function("content_matrix", |b| {
        b.iter(|| black_box(composed.content_in_card().matrix()));
    });

    let matrix = composed.card.transform().matrix();
    let corners = [
        Vec2::new(-150.0, -225.0),
        Vec2::new(150.0, -225.0),
        Vec2::new(150.0, 225.0),
        Vec2::new(-150.0, 225.0),
    ];
    group.bench_function("project_corners", |b| {
        b.iter(|| {
            for corner in corners {
                black_box(project(&matrix, black_box(corner)));
            }
        });
    });

    group.finish();
}

/// Benchmark a release from full tilt until the card is back at rest.
fn bench_settle(c: &mut Criterion) {
    let mut group = c.benchmark_group("settle");

    group.bench_function("release_to_rest", |b| {
        b.iter(|| {
            let mut card = TiltCard::default();
            card.on_drag_update(black_box(60.0), black_box(-60.0));
            card.on_drag_end();
            while card.tick(1.0 / 60.0) {}
            black_box(card.tilt());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_compose, bench_settle);
criterion_main!(benches);
