//! Session state shared by the encoder and decoder.
//!
//! A context moves through two states:
//!
//! ```text
//! Ready(encode | decode) --release()--> Released
//! ```
//!
//! Releasing is irreversible. It overwrites every row and scratch buffer
//! with random bytes; afterwards each operation fails with
//! [`ShareError::Released`]. A context dropped while still `Ready` is
//! scrubbed the same way before its memory is returned to the allocator.

use rand_core::RngCore;
use tracing::debug;

use super::buffer::Matrix;
use super::params::ContextParams;
use crate::error::ShareError;

/// Which half of the scheme a context serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Holds polynomial coefficients and produces shares.
    Encode,
    /// Holds received shares and recombines the secret.
    Decode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Ready,
    Released,
}

pub(crate) struct SessionContext<R: RngCore> {
    params: ContextParams,
    role: Role,
    size: usize,
    rows: Matrix,
    scratch: Matrix,
    rng: R,
    state: State,
}

impl<R: RngCore> SessionContext<R> {
    /// Validates `params` and allocates `rows` primary rows plus
    /// `scratch_rows` working rows, all `maxsize` wide.
    pub(crate) fn new(
        params: ContextParams,
        role: Role,
        rows: usize,
        scratch_rows: usize,
        rng: R,
    ) -> Result<Self, ShareError> {
        params.validate()?;

        let context = Self {
            params,
            role,
            size: params.maxsize,
            rows: Matrix::allocate(rows, params.maxsize)?,
            scratch: Matrix::allocate(scratch_rows, params.maxsize)?,
            rng,
            state: State::Ready,
        };

        debug!(
            ?role,
            sharecount = params.sharecount,
            threshold = params.threshold,
            maxsize = params.maxsize,
            "sharing context created"
        );

        Ok(context)
    }

    #[inline]
    pub(crate) fn ensure_ready(&self) -> Result<(), ShareError> {
        match self.state {
            State::Ready => Ok(()),
            State::Released => Err(ShareError::Released),
        }
    }

    #[inline]
    pub(crate) fn is_released(&self) -> bool {
        self.state == State::Released
    }

    #[inline]
    pub(crate) fn params(&self) -> &ContextParams {
        &self.params
    }

    #[inline]
    pub(crate) fn threshold(&self) -> usize {
        self.params.threshold as usize
    }

    #[inline]
    pub(crate) fn sharecount(&self) -> usize {
        self.params.sharecount as usize
    }

    #[inline]
    pub(crate) fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn set_size(&mut self, size: usize) -> Result<(), ShareError> {
        self.ensure_ready()?;
        self.params.validate_size(size)?;

        debug!(role = ?self.role, from = self.size, to = size, "payload size changed");
        self.size = size;

        Ok(())
    }

    /// Fails with [`ShareError::SlotOutOfRange`] unless `slot < sharecount`.
    pub(crate) fn check_slot(&self, slot: usize) -> Result<(), ShareError> {
        if slot >= self.sharecount() {
            return Err(ShareError::SlotOutOfRange {
                slot,
                sharecount: self.params.sharecount,
            });
        }

        Ok(())
    }

    /// Fails with [`ShareError::LengthMismatch`] unless `len` is the active size.
    pub(crate) fn check_len(&self, len: usize) -> Result<(), ShareError> {
        if len != self.size {
            return Err(ShareError::LengthMismatch {
                expected: self.size,
                actual: len,
            });
        }

        Ok(())
    }

    #[inline]
    pub(crate) fn rows(&self) -> &Matrix {
        &self.rows
    }

    #[inline]
    pub(crate) fn rows_mut(&mut self) -> &mut Matrix {
        &mut self.rows
    }

    #[cfg(test)]
    pub(crate) fn scratch(&self) -> &Matrix {
        &self.scratch
    }

    /// Borrows the primary rows and the scratch rows together.
    #[inline]
    pub(crate) fn rows_and_scratch(&mut self) -> (&Matrix, &mut Matrix) {
        (&self.rows, &mut self.scratch)
    }

    /// Fills the first `size` bytes of each row in `range` from the
    /// randomness source.
    pub(crate) fn randomize_rows(&mut self, range: std::ops::Range<usize>) -> Result<(), ShareError> {
        let size = self.size;

        for row in &mut self.rows.rows_mut()[range] {
            self.rng
                .try_fill_bytes(&mut row[..size])
                .map_err(std::io::Error::from)?;
        }

        Ok(())
    }

    pub(crate) fn scrub_row(&mut self, index: usize) {
        self.rows.scrub_row(index, &mut self.rng);
    }

    pub(crate) fn scrub_scratch(&mut self) {
        self.scratch.scrub(&mut self.rng);
    }

    /// Scrubs all buffers and moves to `Released`.
    pub(crate) fn release(&mut self) -> Result<(), ShareError> {
        self.ensure_ready()?;

        self.scrub();
        self.state = State::Released;

        debug!(role = ?self.role, "sharing context released");

        Ok(())
    }

    fn scrub(&mut self) {
        let Self {
            rows, scratch, rng, ..
        } = self;

        rows.scrub(rng);
        scratch.scrub(rng);
    }
}

impl<R: RngCore> Drop for SessionContext<R> {
    fn drop(&mut self) {
        if self.state == State::Ready {
            self.scrub();
        }
    }
}
