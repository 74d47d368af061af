//! Benchmarks for the fire automaton.
//!
//! Run with: cargo bench -p emberdeck-fire --bench fire_bench

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use emberdeck_fire::{FireAutomaton, FireConfig};
use std::hint::black_box;

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("fire/step");
    for (w, h) in [(80, 40), (200, 140), (400, 280)] {
        let mut fire = FireAutomaton::new(FireConfig::with_size(w, h));
        group.bench_with_input(BenchmarkId::from_parameter(format!("{w}x{h}")), &(), |b, _| {
            b.iter(|| {
                fire.step();
                black_box(fire.grid().cells().len());
            })
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut fire = FireAutomaton::default();
    for _ in 0..140 {
        fire.step();
    }
    c.bench_function("fire/render/200x140", |b| {
        b.iter(|| {
            fire.render();
            black_box(fire.pixels().as_bytes()[0]);
        })
    });
}

fn bench_update_60hz(c: &mut Criterion) {
    let mut fire = FireAutomaton::default();
    c.bench_function("fire/update/60hz_frame", |b| {
        b.iter(|| black_box(fire.update(black_box(1.0 / 60.0))))
    });
}

criterion_group!(benches, bench_step, bench_render, bench_update_60hz);
criterion_main!(benches);
