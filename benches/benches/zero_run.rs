//! Benchmarks for the zero-run codec
//!
//! Run with: cargo bench --bench zero_run

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use zrun_codec::{decode, encode};

/// Residual-like data: mostly zeros with scattered literals and isolated zeros
fn create_residuals(len: usize, density: usize) -> Vec<u8> {
    (0..len)
        .map(|i| {
            if (i * 37 + 17) % 100 < density {
                ((i * 13) % 255 + 1) as u8
            } else {
                0
            }
        })
        .collect()
}

fn bench_zero_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("Zero-Run Codec");
    let len = 256 * 1024;
    group.throughput(Throughput::Bytes(len as u64));

    for density in [5usize, 30, 90] {
        let data = create_residuals(len, density);
        group.bench_with_input(BenchmarkId::new("encode", density), &data, |b, data| {
            b.iter(|| encode(black_box(data)))
        });

        let encoded = encode(&data);
        group.bench_with_input(BenchmarkId::new("decode", density), &encoded, |b, encoded| {
            b.iter(|| decode(black_box(encoded)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_zero_run);
criterion_main!(benches);
