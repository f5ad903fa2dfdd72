//! # zrun - lossless plane packing
//!
//! Packs 8-bit image planes with a clamped gradient predictor followed by a
//! zero-run codec, and unpacks them bit-exactly.
//!
//! ## Quick Start
//!
//! ```
//! use zrun::{CodecOptions, Plane, PlaneDecoder, PlaneEncoder};
//!
//! let plane = Plane::new(vec![10, 12, 11, 13], 2).unwrap();
//!
//! let encoder = PlaneEncoder::new(CodecOptions::default());
//! let encoded = encoder.encode(&plane).unwrap();
//!
//! let decoder = PlaneDecoder::new(CodecOptions::default());
//! let decoded = decoder.decode(&encoded, plane.width()).unwrap();
//! assert_eq!(decoded, plane);
//! ```
//!
//! ## Architecture
//!
//! - `zrun-transform`: predictors (`predict` / `unpredict`)
//! - `zrun-codec`: zero-run records (`encode` / `decode`)
//! - this crate: the plane pipeline, band helpers and stream statistics
//!
//! Streams carry no header. Callers keep each plane's width (and, when several
//! streams are concatenated, their boundaries) on their own.

pub mod bands;
pub mod decoder;
pub mod encoder;
pub mod stats;

// Re-export core types
pub use zrun_core::{consts, Plane, ZrunError, ZrunResult};

// Re-export the two stages
pub use zrun_codec::{decode, encode, Encoding};
pub use zrun_transform::{predict, unpredict, Predictor};

pub use bands::{decode_bands, encode_bands, interleave_bands, split_bands};
pub use decoder::PlaneDecoder;
pub use encoder::{CodecOptions, PlaneEncoder};
pub use stats::Histogram;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
