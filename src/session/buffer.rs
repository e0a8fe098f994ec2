//! Owned row storage with scrub-before-release.
//!
//! A [`Matrix`] is a fixed number of rows, each a boxed byte slice of the
//! context's `maxsize`. Rows are addressed by slot index; there is no
//! pointer arithmetic into a shared arena.

use rand_core::RngCore;
use tracing::warn;
use zeroize::Zeroize;

use crate::error::ShareError;

pub(crate) struct Matrix {
    rows: Vec<Box<[u8]>>,
}

impl Matrix {
    /// Allocates `rows × width` zeroed bytes.
    ///
    /// Allocation failure is reported instead of aborting. Rows already
    /// allocated are dropped on the way out; they never held secret data.
    pub(crate) fn allocate(rows: usize, width: usize) -> Result<Self, ShareError> {
        let mut out = Vec::new();
        out.try_reserve_exact(rows)
            .map_err(|_| ShareError::OutOfMemory)?;

        for _ in 0..rows {
            let mut row = Vec::new();
            row.try_reserve_exact(width)
                .map_err(|_| ShareError::OutOfMemory)?;
            row.resize(width, 0u8);

            out.push(row.into_boxed_slice());
        }

        Ok(Self { rows: out })
    }

    #[inline]
    pub(crate) fn rows(&self) -> &[Box<[u8]>] {
        &self.rows
    }

    #[inline]
    pub(crate) fn rows_mut(&mut self) -> &mut [Box<[u8]>] {
        &mut self.rows
    }

    #[inline]
    pub(crate) fn row(&self, index: usize) -> &[u8] {
        &self.rows[index]
    }

    #[inline]
    pub(crate) fn row_mut(&mut self, index: usize) -> &mut [u8] {
        &mut self.rows[index]
    }

    /// Overwrites every row with fresh random bytes.
    pub(crate) fn scrub<R: RngCore>(&mut self, rng: &mut R) {
        for row in self.rows.iter_mut() {
            scrub(row, rng);
        }
    }

    pub(crate) fn scrub_row<R: RngCore>(&mut self, index: usize, rng: &mut R) {
        scrub(&mut self.rows[index], rng);
    }
}

/// Overwrites `buf` with random bytes, or zeroes it if the source fails.
pub(crate) fn scrub<R: RngCore>(buf: &mut [u8], rng: &mut R) {
    if let Err(err) = rng.try_fill_bytes(buf) {
        warn!(%err, "randomness source failed while scrubbing, zeroing instead");
        buf.zeroize();
    }
}
