//! Constants used throughout the zero-run codec

/// Longest zero run a single zero-run record can describe
pub const MAX_ZERO_RUN: usize = 255;

/// Longest literal run a single literal-run record can describe
pub const MAX_LITERAL_RUN: usize = 255;

/// A literal run may only swallow an embedded zero while shorter than this
pub const MAX_LITERAL_RUN_BEFORE_ZERO: usize = MAX_LITERAL_RUN - 1;
