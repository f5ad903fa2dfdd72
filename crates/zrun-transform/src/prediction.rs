//! Predictive filters for lossless plane coding
//!
//! Every predictor reads its context (west, north, north-west) from the
//! original plane when predicting and from the reconstructed plane when
//! reversing, so both directions see the same values. Context positions in
//! front of the first byte read as zero.

use zrun_core::{ZrunError, ZrunResult};

/// Prediction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Predictor {
    /// No prediction, residuals are the input bytes
    None,
    /// Previous byte in scan order
    Delta,
    /// Gradient `n + w - nw` clamped to the range of its three inputs
    #[default]
    Gradient,
}

impl Predictor {
    pub fn name(&self) -> &'static str {
        match self {
            Predictor::None => "none",
            Predictor::Delta => "delta",
            Predictor::Gradient => "gradient",
        }
    }

    /// Turn a plane into its residual stream
    pub fn predict(&self, plane: &[u8], width: usize) -> ZrunResult<Vec<u8>> {
        if width == 0 {
            return Err(ZrunError::zero_width());
        }

        let mut residual = Vec::with_capacity(plane.len());
        for (idx, &pixel) in plane.iter().enumerate() {
            let prediction = self.prediction_at(plane, idx, width);
            residual.push(pixel.wrapping_sub(prediction));
        }
        Ok(residual)
    }

    /// Rebuild a plane from its residual stream
    pub fn unpredict(&self, residual: &[u8], width: usize) -> ZrunResult<Vec<u8>> {
        if width == 0 {
            return Err(ZrunError::zero_width());
        }

        let mut plane = Vec::with_capacity(residual.len());
        for (idx, &delta) in residual.iter().enumerate() {
            // `plane` holds exactly the bytes before `idx` here.
            let prediction = self.prediction_at(&plane, idx, width);
            plane.push(delta.wrapping_add(prediction));
        }
        Ok(plane)
    }

    fn prediction_at(&self, data: &[u8], idx: usize, width: usize) -> u8 {
        match self {
            Predictor::None => 0,
            Predictor::Delta => context(data, idx, 1),
            Predictor::Gradient => {
                let w = context(data, idx, 1);
                let n = context(data, idx, width);
                let nw = context(data, idx, width + 1);
                gradient_predictor(w, n, nw)
            }
        }
    }
}

/// Byte `back` positions before `idx`, zero in front of the plane
#[inline]
fn context(data: &[u8], idx: usize, back: usize) -> u8 {
    match idx.checked_sub(back) {
        Some(pos) => data[pos],
        None => 0,
    }
}

/// Clamped gradient predictor (median edge detector)
///
/// Falls back to the nearest neighbour whenever `n + w - nw` overshoots the
/// range spanned by the three neighbours.
#[inline]
pub fn gradient_predictor(w: u8, n: u8, nw: u8) -> u8 {
    let lo = w.min(n).min(nw);
    let hi = w.max(n).max(nw);
    let p = n as i16 + w as i16 - nw as i16;
    p.clamp(lo as i16, hi as i16) as u8
}

/// Apply the gradient predictor to a plane
pub fn predict(plane: &[u8], width: usize) -> ZrunResult<Vec<u8>> {
    Predictor::Gradient.predict(plane, width)
}

/// Reverse [`predict`]
pub fn unpredict(residual: &[u8], width: usize) -> ZrunResult<Vec<u8>> {
    Predictor::Gradient.unpredict(residual, width)
}
