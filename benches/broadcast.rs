//! Broadcast Performance Benchmarks
//!
//! Compares each sequence call form against a hand-written loop over the
//! same data.
//!
//! Run with: cargo bench --bench broadcast

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use minbroadcast::{Broadcaster, Call};

const SIZES: [usize; 3] = [1_000, 100_000, 1_000_000];

fn benchmark_sequence_forms(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence_forms");
    let plus = Broadcaster::from_fns(|x: &f64| -x, |a: &f64, b: &f64| a + b);

    for &n in SIZES.iter() {
        let lhs: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let rhs: Vec<f64> = (0..n).map(|i| (i * 2) as f64).collect();

        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("unary_seq", n), &lhs, |b, lhs| {
            b.iter(|| black_box(plus.call(black_box(lhs))));
        });

        group.bench_with_input(BenchmarkId::new("seq_scalar", n), &lhs, |b, lhs| {
            b.iter(|| black_box(plus.call((black_box(lhs), 1.5))));
        });

        group.bench_with_input(BenchmarkId::new("seq_seq", n), &(&lhs, &rhs), |b, (lhs, rhs)| {
            b.iter(|| black_box(plus.call((black_box(*lhs), black_box(*rhs)))));
        });

        group.bench_with_input(BenchmarkId::new("manual_zip", n), &(&lhs, &rhs), |b, (lhs, rhs)| {
            b.iter(|| {
                let out: Vec<f64> = lhs.iter().zip(rhs.iter()).map(|(a, b)| a + b).collect();
                black_box(out)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_sequence_forms);
criterion_main!(benches);
