//! Multi-band helpers
//!
//! Interleaved pixel data is split into one plane per channel. Planes share no
//! state, so whole sets of them are encoded and decoded in parallel.

use rayon::prelude::*;
use zrun_core::{Plane, ZrunError, ZrunResult};

use crate::{PlaneDecoder, PlaneEncoder};

/// De-interleave `pixels` into `channels` byte vectors
pub fn split_bands(pixels: &[u8], channels: usize) -> ZrunResult<Vec<Vec<u8>>> {
    if channels == 0 {
        return Err(ZrunError::InvalidArgument(
            "channel count must be positive".to_string(),
        ));
    }
    if pixels.len() % channels != 0 {
        return Err(ZrunError::InvalidArgument(format!(
            "{} bytes do not divide into {} channels",
            pixels.len(),
            channels
        )));
    }

    let pixel_count = pixels.len() / channels;
    let mut bands: Vec<Vec<u8>> = (0..channels)
        .map(|_| Vec::with_capacity(pixel_count))
        .collect();
    for pixel in pixels.chunks_exact(channels) {
        for (band, &value) in bands.iter_mut().zip(pixel) {
            band.push(value);
        }
    }
    Ok(bands)
}

/// Inverse of [`split_bands`]
pub fn interleave_bands<B: AsRef<[u8]>>(bands: &[B]) -> ZrunResult<Vec<u8>> {
    let Some(first) = bands.first() else {
        return Ok(Vec::new());
    };
    let pixel_count = first.as_ref().len();
    if bands.iter().any(|b| b.as_ref().len() != pixel_count) {
        return Err(ZrunError::InvalidArgument(
            "bands differ in length".to_string(),
        ));
    }

    let mut pixels = Vec::with_capacity(pixel_count * bands.len());
    for idx in 0..pixel_count {
        pixels.extend(bands.iter().map(|b| b.as_ref()[idx]));
    }
    Ok(pixels)
}

/// Encode independent planes in parallel, keeping their order
pub fn encode_bands(encoder: &PlaneEncoder, planes: &[Plane]) -> ZrunResult<Vec<Vec<u8>>> {
    planes.par_iter().map(|plane| encoder.encode(plane)).collect()
}

/// Decode independent plane streams in parallel, keeping their order
///
/// Every stream is decoded with the same row width.
pub fn decode_bands<S: AsRef<[u8]> + Sync>(
    decoder: &PlaneDecoder,
    streams: &[S],
    width: usize,
) -> ZrunResult<Vec<Plane>> {
    streams
        .par_iter()
        .map(|stream| decoder.decode(stream.as_ref(), width))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_rgb() {
        let pixels = [1, 2, 3, 4, 5, 6];
        let bands = split_bands(&pixels, 3).unwrap();
        assert_eq!(bands, vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
        assert_eq!(interleave_bands(&bands).unwrap(), pixels.to_vec());
    }

    #[test]
    fn test_split_rejects_bad_shapes() {
        assert!(split_bands(&[1, 2, 3], 0).is_err());
        assert!(split_bands(&[1, 2, 3], 2).is_err());
    }

    #[test]
    fn test_interleave_rejects_ragged_bands() {
        let bands = vec![vec![1, 2], vec![3]];
        assert!(interleave_bands(&bands).is_err());
    }

    #[test]
    fn test_interleave_empty() {
        let bands: Vec<Vec<u8>> = Vec::new();
        assert!(interleave_bands(&bands).unwrap().is_empty());
    }
}
