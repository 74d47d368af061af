//! Benchmarks for stack layout and transfers.
//!
//! Run with: cargo bench -p emberdeck-stack --bench layout_bench

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use emberdeck_core::geometry::Point;
use emberdeck_stack::{Align, StackBoard, StackConfig, calculate_layout};
use std::hint::black_box;
use std::time::Duration;

fn bench_calculate(c: &mut Criterion) {
    let bounds = StackConfig::default().bounds();
    c.bench_function("stack/calculate_layout", |b| {
        b.iter(|| black_box(calculate_layout(bounds, black_box(144), Align::Center, 6.0)))
    });
}

fn bench_relayout(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack/relayout");
    for n in [12u32, 144, 1000] {
        let mut board = StackBoard::new(StackConfig::default());
        let id = board.add_stack(Align::Center);
        board.deal(id, n).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &id, |b, &id| {
            b.iter(|| black_box(board.relayout(id).unwrap()))
        });
    }
    group.finish();
}

fn bench_shuffle_frame(c: &mut Criterion) {
    // 144 cards, a transfer every second, 60 fps: about two cards in flight.
    let mut board = StackBoard::new(StackConfig::default());
    let top = board.add_stack(Align::Center);
    let bottom = board.add_stack(Align::Left);
    board.set_stack_origin(top, Point::new(400.0, 210.0));
    board.set_stack_origin(bottom, Point::new(400.0, 390.0));
    board.deal(top, 144).unwrap();
    let frame = Duration::from_micros(16_667);
    let mut frames = 0u32;

    c.bench_function("stack/advance/60hz_frame", |b| {
        b.iter(|| {
            if frames % 60 == 0 {
                let (from, to) = if board.stack(top).unwrap().is_empty() {
                    (bottom, top)
                } else {
                    (top, bottom)
                };
                board.transfer_card(from, to).unwrap();
            }
            frames = frames.wrapping_add(1);
            black_box(board.advance(frame));
            board.drain_events();
        })
    });
}

criterion_group!(benches, bench_calculate, bench_relayout, bench_shuffle_frame);
criterion_main!(benches);
