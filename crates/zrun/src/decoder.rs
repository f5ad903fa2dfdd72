//! Plane decoder

use tracing::debug;
use zrun_core::{Plane, ZrunError, ZrunResult};

use crate::encoder::CodecOptions;

/// Reverses [`PlaneEncoder`](crate::PlaneEncoder)
#[derive(Debug, Clone, Default)]
pub struct PlaneDecoder {
    options: CodecOptions,
}

impl PlaneDecoder {
    pub fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    /// Decode one plane stream of row width `width`
    pub fn decode(&self, encoded: &[u8], width: usize) -> ZrunResult<Plane> {
        if width == 0 {
            return Err(ZrunError::zero_width());
        }

        let residual = self.options.encoding.decode(encoded)?;
        let data = self.options.predictor.unpredict(&residual, width)?;

        debug!(
            width,
            encoded = encoded.len(),
            decoded = data.len(),
            "decoded plane"
        );
        Plane::new(data, width)
    }

    /// Decode a plane whose byte length is known in advance
    pub fn decode_exact(&self, encoded: &[u8], width: usize, len: usize) -> ZrunResult<Plane> {
        let plane = self.decode(encoded, width)?;
        if plane.len() != len {
            return Err(ZrunError::InvalidArgument(format!(
                "decoded plane has {} bytes, expected {}",
                plane.len(),
                len
            )));
        }
        Ok(plane)
    }
}
