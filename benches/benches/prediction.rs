//! Benchmarks for plane prediction
//!
//! Run with: cargo bench --bench prediction

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use zrun_transform::Predictor;

fn create_plane(width: usize, height: usize) -> Vec<u8> {
    (0..width * height)
        .map(|i| ((i % width) * 3 + (i / width) * 2) as u8)
        .collect()
}

fn bench_predict(c: &mut Criterion) {
    let mut group = c.benchmark_group("Prediction");

    for size in [64usize, 256, 1024] {
        let plane = create_plane(size, size);
        group.throughput(Throughput::Bytes(plane.len() as u64));

        for predictor in [Predictor::Delta, Predictor::Gradient] {
            group.bench_with_input(
                BenchmarkId::new(format!("predict_{}", predictor.name()), size),
                &plane,
                |b, plane| b.iter(|| predictor.predict(black_box(plane), size).unwrap()),
            );

            let residual = predictor.predict(&plane, size).unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("unpredict_{}", predictor.name()), size),
                &residual,
                |b, residual| b.iter(|| predictor.unpredict(black_box(residual), size).unwrap()),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_predict);
criterion_main!(benches);
