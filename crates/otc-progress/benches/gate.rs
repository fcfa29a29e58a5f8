// Rust guideline compliant 2026-10-12

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use otc_progress::{
    format_estimate, plan, LineSink, ManualClock, Precision, ProgressConfig, ProgressTracker,
    Renderer,
};
use std::io;

fn bench_tick_miss(c: &mut Criterion) {
    let sink = LineSink::new(io::sink(), Renderer::new(false));
    let mut tracker = ProgressTracker::with_parts(
        1_000_000,
        &ProgressConfig::default(),
        ManualClock::new(),
        sink,
    )
    .expect("Failed to create tracker");
    c.bench_function("tick_unplanned_index", |b| {
        b.iter(|| black_box(tracker.tick(black_box(500_001), "bench")))
    });
}

fn bench_full_loop(c: &mut Criterion) {
    c.bench_function("tick_loop_100000", |b| {
        b.iter(|| {
            let sink = LineSink::new(io::sink(), Renderer::new(false));
            let clock = ManualClock::new();
            let mut tracker =
                ProgressTracker::with_parts(100_000, &ProgressConfig::default(), clock, sink)
                    .expect("Failed to create tracker");
            for i in 0..100_000 {
                black_box(tracker.tick(i, "bench"));
            }
        })
    });
}

fn bench_plan(c: &mut Criterion) {
    c.bench_function("plan_1e9_9_decades", |b| {
        b.iter(|| black_box(plan(black_box(1_000_000_000), 9)))
    });
}

fn bench_format(c: &mut Criterion) {
    c.bench_function("format_estimate_one_figure", |b| {
        b.iter(|| black_box(format_estimate(black_box(4_000), true, Precision::One)))
    });
}

criterion_group!(benches, bench_tick_miss, bench_full_loop, bench_plan, bench_format);
criterion_main!(benches);
