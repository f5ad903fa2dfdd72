//! Multi-band encoding tests

use zrun::{
    decode_bands, encode_bands, interleave_bands, split_bands, Histogram, Plane, PlaneDecoder,
    PlaneEncoder,
};

fn create_rgba(width: usize, height: usize) -> Vec<u8> {
    let mut data = vec![0u8; width * height * 4];
    for y in 0..height {
        for x in 0..width {
            let idx = (y * width + x) * 4;
            data[idx] = ((x * 255) / width.max(1)) as u8;
            data[idx + 1] = ((y * 255) / height.max(1)) as u8;
            data[idx + 2] = (((x + y) * 255) / (width + height).max(1)) as u8;
            data[idx + 3] = 255;
        }
    }
    data
}

#[test]
fn test_rgba_bands_roundtrip() {
    let width = 40;
    let height = 24;
    let pixels = create_rgba(width, height);

    let planes: Vec<Plane> = split_bands(&pixels, 4)
        .unwrap()
        .into_iter()
        .map(|band| Plane::new(band, width).unwrap())
        .collect();
    assert_eq!(planes.len(), 4);
    assert!(planes.iter().all(|p| p.height() == height));

    let streams = encode_bands(&PlaneEncoder::default(), &planes).unwrap();
    assert_eq!(streams.len(), 4);
    // The opaque alpha band is one literal and zero runs
    assert!(streams[3].len() <= 12, "alpha stream: {} bytes", streams[3].len());

    let decoded = decode_bands(&PlaneDecoder::default(), &streams, width).unwrap();
    assert_eq!(decoded, planes);

    let restored = interleave_bands(&decoded).unwrap();
    assert_eq!(restored, pixels);
}

#[test]
fn test_bands_match_sequential_encoding() {
    let width = 16;
    let pixels = create_rgba(width, 16);
    let planes: Vec<Plane> = split_bands(&pixels, 4)
        .unwrap()
        .into_iter()
        .map(|band| Plane::new(band, width).unwrap())
        .collect();

    let encoder = PlaneEncoder::default();
    let parallel = encode_bands(&encoder, &planes).unwrap();
    for (plane, stream) in planes.iter().zip(&parallel) {
        assert_eq!(&encoder.encode(plane).unwrap(), stream);
    }
}

#[test]
fn test_decode_bands_reports_first_error() {
    let streams = vec![vec![0u8], vec![0, 200, 1]];
    assert!(decode_bands(&PlaneDecoder::default(), &streams, 4).is_err());
}

#[test]
fn test_histogram_over_bands() {
    let pixels = create_rgba(32, 32);
    let planes: Vec<Plane> = split_bands(&pixels, 4)
        .unwrap()
        .into_iter()
        .map(|band| Plane::new(band, 32).unwrap())
        .collect();
    let streams = encode_bands(&PlaneEncoder::default(), &planes).unwrap();

    let mut hist = Histogram::new();
    for stream in &streams {
        hist.add(stream);
    }
    let total: usize = streams.iter().map(Vec::len).sum();
    assert_eq!(hist.total(), total as u64);
    assert!(hist.shannon_entropy() <= 8.0);
    assert!(hist.ideal_size() <= total as u64);
}
