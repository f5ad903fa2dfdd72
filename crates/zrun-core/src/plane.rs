//! Plane data structure

use crate::{ZrunError, ZrunResult};

/// One 8-bit raster channel stored as a flat byte sequence with a known row width
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPlane"))]
pub struct Plane {
    data: Vec<u8>,
    width: usize,
}

impl Plane {
    /// Wrap `data` as a plane of `width` bytes per row.
    ///
    /// The length does not have to be a multiple of `width`; a trailing partial
    /// row is carried along untouched.
    pub fn new(data: Vec<u8>, width: usize) -> ZrunResult<Self> {
        if width == 0 {
            return Err(ZrunError::zero_width());
        }
        Ok(Self { data, width })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of complete rows
    pub fn height(&self) -> usize {
        self.data.len() / self.width
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

/// Unchecked wire form of [`Plane`], validated through `Plane::new`
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPlane {
    data: Vec<u8>,
    width: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPlane> for Plane {
    type Error = ZrunError;

    fn try_from(raw: RawPlane) -> ZrunResult<Self> {
        Plane::new(raw.data, raw.width)
    }
}

impl AsRef<[u8]> for Plane {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
