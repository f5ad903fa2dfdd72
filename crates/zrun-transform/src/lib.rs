//! Spatial prediction for 8-bit planes
//!
//! This crate rewrites each byte of a plane as the wrapped difference to a
//! prediction made from already-seen neighbours, and reverses that exactly.

pub mod prediction;

pub use prediction::*;
