//! Share coordinates.
//!
//! A share is the value of the secret polynomial at some x. The x value is
//! the share's identity: a non-zero field element, unique among the shares
//! of one secret. Zero is excluded because `p(0)` *is* the secret.

use std::num::NonZeroU8;

use crate::error::ShareError;
use crate::field::tables;

/// A validated, non-zero share coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate(NonZeroU8);

impl Coordinate {
    /// Wraps `x`, rejecting zero with [`ShareError::InvalidCoordinate`].
    pub fn new(x: u8) -> Result<Self, ShareError> {
        NonZeroU8::new(x)
            .map(Coordinate)
            .ok_or(ShareError::InvalidCoordinate)
    }

    /// Returns the raw byte value.
    #[inline]
    pub fn get(self) -> u8 {
        self.0.get()
    }

    #[inline]
    pub(crate) fn log(self) -> usize {
        tables::log(self.get())
    }
}

impl TryFrom<u8> for Coordinate {
    type Error = ShareError;

    fn try_from(x: u8) -> Result<Self, Self::Error> {
        Coordinate::new(x)
    }
}

impl From<Coordinate> for u8 {
    fn from(c: Coordinate) -> u8 {
        c.get()
    }
}

/// Validates a coordinate assignment: every entry non-zero, no repeats.
pub(crate) fn distinct(coordinates: &[u8]) -> Result<Vec<Coordinate>, ShareError> {
    let mut seen = [false; 256];
    let mut out = Vec::with_capacity(coordinates.len());

    for &x in coordinates {
        let c = Coordinate::new(x)?;

        if seen[x as usize] {
            return Err(ShareError::DuplicateCoordinate(x));
        }
        seen[x as usize] = true;

        out.push(c);
    }

    Ok(out)
}
