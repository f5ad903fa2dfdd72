//! Run-length coding of residual streams
//!
//! Predicted planes are dominated by zero bytes. The zero-run codec stores them
//! as alternating zero-run and literal-run records; the raw codec passes bytes
//! through untouched and exists for comparison.

pub mod zero_run;

pub use zero_run::{decode, decode_into, encode, encode_into};

use zrun_core::ZrunResult;

/// Stream encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// Bytes are stored verbatim
    Raw,
    /// Alternating zero-run / literal-run records
    #[default]
    ZeroRun,
}

impl Encoding {
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Raw => "raw",
            Encoding::ZeroRun => "zero-run",
        }
    }

    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        match self {
            Encoding::Raw => data.to_vec(),
            Encoding::ZeroRun => encode(data),
        }
    }

    pub fn decode(&self, data: &[u8]) -> ZrunResult<Vec<u8>> {
        match self {
            Encoding::Raw => Ok(data.to_vec()),
            Encoding::ZeroRun => decode(data),
        }
    }
}
