//! Window computation benchmarks.
//!
//! The calculator runs on every scroll event with no debouncing, so each
//! call must stay cheap even for large item sets and wide overscan.
//!
//! Run with: cargo bench --bench window_benchmark

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use viewcore::window::{compute, Viewport};

fn bench_compute_by_item_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_by_item_count");
    for item_count in [1_000usize, 100_000, 10_000_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(item_count),
            &item_count,
            |b, &count| {
                let mut vp = Viewport::new(count, 40.0, 800.0, 4).unwrap();
                vp.set_scroll_offset(vp.max_scroll_offset() / 2.0).unwrap();
                b.iter(|| compute(black_box(&vp)));
            },
        );
    }
    group.finish();
}

fn bench_scroll_sweep(c: &mut Criterion) {
    // Simulates a full-page fling: one recomputation per scroll event.
    c.bench_function("scroll_sweep_1000_events", |b| {
        let mut vp = Viewport::new(1_000_000, 32.0, 960.0, 8).unwrap();
        b.iter(|| {
            for event in 0..1_000u32 {
                vp.set_scroll_offset(f64::from(event) * 33.0).unwrap();
                black_box(compute(&vp));
            }
        });
    });
}

fn bench_wide_overscan(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_by_overscan");
    for overscan in [0usize, 8, 64] {
        group.bench_with_input(
            BenchmarkId::from_parameter(overscan),
            &overscan,
            |b, &overscan| {
                let mut vp = Viewport::new(500_000, 24.0, 1_200.0, overscan).unwrap();
                vp.set_scroll_offset(6_000_000.0).unwrap();
                b.iter(|| compute(black_box(&vp)));
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_compute_by_item_count,
    bench_scroll_sweep,
    bench_wide_overscan
);
criterion_main!(benches);
