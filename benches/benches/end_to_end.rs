//! End-to-end plane packing benchmarks
//!
//! Run with: cargo bench --bench end_to_end

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use zrun::{decode_bands, encode_bands, split_bands, Plane, PlaneDecoder, PlaneEncoder};

fn create_rgba(width: usize, height: usize) -> Vec<u8> {
    let mut data = vec![0u8; width * height * 4];
    for y in 0..height {
        for x in 0..width {
            let idx = (y * width + x) * 4;
            data[idx] = ((x * 255) / width) as u8;
            data[idx + 1] = ((y * 255) / height) as u8;
            data[idx + 2] = if (x / 8 + y / 8) % 2 == 0 { 255 } else { 0 };
            data[idx + 3] = 255;
        }
    }
    data
}

fn bench_bands(c: &mut Criterion) {
    let mut group = c.benchmark_group("End-to-End");
    let width = 512;
    let pixels = create_rgba(width, 512);
    let planes: Vec<Plane> = split_bands(&pixels, 4)
        .unwrap()
        .into_iter()
        .map(|band| Plane::new(band, width).unwrap())
        .collect();

    let encoder = PlaneEncoder::default();
    let decoder = PlaneDecoder::default();

    group.bench_function("encode_rgba_512", |b| {
        b.iter(|| encode_bands(&encoder, black_box(&planes)).unwrap())
    });

    let streams = encode_bands(&encoder, &planes).unwrap();
    group.bench_function("decode_rgba_512", |b| {
        b.iter(|| decode_bands(&decoder, black_box(&streams), width).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_bands);
criterion_main!(benches);
