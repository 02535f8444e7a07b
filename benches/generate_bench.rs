//! Benchmark for fixture generation
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use test_tensors::generate_cross_3d;

fn generate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_cross_3d");

    for extent in [16usize, 64, 128] {
        group.bench_function(format!("cubic_{extent}"), |b| {
            b.iter(|| generate_cross_3d(black_box(extent)).unwrap())
        });
    }

    group.bench_function("rect_64x32x16", |b| {
        b.iter(|| generate_cross_3d(black_box((64usize, 32, 16))).unwrap())
    });

    group.finish();
}

criterion_group!(benches, generate_benchmark);
criterion_main!(benches);
