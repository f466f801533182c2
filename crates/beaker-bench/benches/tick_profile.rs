//! Criterion benchmarks for the world tick loop.

use beaker_bench::{reference_world, stress_world};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_tick_reference(c: &mut Criterion) {
    let mut world = reference_world(42);

    // Warm up: one tick so initial allocation is done.
    world.tick();

    c.bench_function("tick_reference", |b| {
        b.iter(|| {
            world.tick();
            black_box(world.stats());
        });
    });
}

fn bench_tick_stress(c: &mut Criterion) {
    let mut world = stress_world(42);

    world.tick();

    c.bench_function("tick_stress", |b| {
        b.iter(|| {
            world.tick();
            black_box(world.stats());
        });
    });
}

fn bench_100_ticks_reference(c: &mut Criterion) {
    c.bench_function("100_ticks_reference", |b| {
        b.iter(|| {
            let mut world = reference_world(42);
            for _ in 0..100 {
                world.tick();
            }
            black_box(world.stats().population);
        });
    });
}

criterion_group!(
    benches,
    bench_tick_reference,
    bench_tick_stress,
    bench_100_ticks_reference
);
criterion_main!(benches);
