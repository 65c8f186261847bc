//! Unobserved marker overhead.
//!
//! The contract is that an untraced probe costs a nop plus register
//! pinning - these benches put a number on that against an empty baseline,
//! and on the enabled pre-check callers use to gate expensive arguments.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use qtrace::{define_semaphore, marker, marker_enabled, marker_with_features, PlanState};

define_semaphore!(bench_gate);

struct BenchPlan;

impl PlanState for BenchPlan {
    fn query_id(&self) -> u64 {
        77
    }
    fn estimated_num_rows(&self) -> f64 {
        1024.0
    }
    fn estimated_row_width_bytes(&self) -> i32 {
        48
    }
}

fn bench_markers(c: &mut Criterion) {
    c.bench_function("baseline_empty", |b| {
        b.iter(|| black_box(0u64));
    });

    c.bench_function("marker_no_args", |b| {
        b.iter(|| {
            marker!(bench_fire);
        });
    });

    c.bench_function("marker_three_args", |b| {
        b.iter(|| {
            marker!(
                bench_fire_args,
                black_box(42u64),
                black_box(3.5f64),
                black_box(128i32)
            );
        });
    });

    c.bench_function("marker_enabled_check", |b| {
        b.iter(|| black_box(marker_enabled!(bench_gate)));
    });

    c.bench_function("marker_with_features", |b| {
        let plan = BenchPlan;
        b.iter(|| {
            marker_with_features!(bench_features, &plan, black_box(7u64));
        });
    });
}

criterion_group!(benches, bench_markers);
criterion_main!(benches);
