//! Plane encoder

use std::io::Write;

use tracing::debug;
use zrun_codec::Encoding;
use zrun_core::{Plane, ZrunResult};
use zrun_transform::Predictor;

/// Predictor and encoding used for a plane
///
/// The decoder must be given the same options the encoder used; streams do
/// not record them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodecOptions {
    pub predictor: Predictor,
    pub encoding: Encoding,
}

impl CodecOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn predictor(mut self, predictor: Predictor) -> Self {
        self.predictor = predictor;
        self
    }

    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }
}

/// Predicts and run-length codes planes
#[derive(Debug, Clone, Default)]
pub struct PlaneEncoder {
    options: CodecOptions,
}

impl PlaneEncoder {
    pub fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Encode a plane into a fresh buffer
    pub fn encode(&self, plane: &Plane) -> ZrunResult<Vec<u8>> {
        let residual = self
            .options
            .predictor
            .predict(plane.as_bytes(), plane.width())?;
        let encoded = self.options.encoding.encode(&residual);

        debug!(
            width = plane.width(),
            raw = plane.len(),
            encoded = encoded.len(),
            predictor = self.options.predictor.name(),
            encoding = self.options.encoding.name(),
            "encoded plane"
        );
        Ok(encoded)
    }

    /// Encode a plane and write the stream to `writer`
    pub fn encode_to<W: Write>(&self, plane: &Plane, mut writer: W) -> ZrunResult<usize> {
        let encoded = self.encode(plane)?;
        writer.write_all(&encoded)?;
        writer.flush()?;
        Ok(encoded.len())
    }
}
