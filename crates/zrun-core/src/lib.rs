//! Core types and utilities for zero-run plane coding
//!
//! This crate provides the fundamental data structures shared by the predictor,
//! the run-length codec and the plane pipeline: the `Plane` type, the run-length
//! limits and the error type.

pub mod consts;
pub mod error;
pub mod plane;

pub use error::{ZrunError, ZrunResult};
pub use plane::Plane;
