//! Secret recombination.
//!
//! The decoder has one row per slot. A slot is *present* once it has both
//! a coordinate and a share value; vacant or unfilled slots are skipped and
//! never count toward the threshold, so shares can arrive sparsely and in
//! any slot.
//!
//! # Sample order
//!
//! Extraction walks the slots in index order. The first `threshold`
//! present slots form the interpolation basis; the next
//! `integrity - threshold` present slots are checked against it. Which
//! shares end up as checks therefore depends on slot placement, not on
//! coordinate values. The recovered secret does not: any basis of
//! `threshold` consistent shares yields the same `p(0)`.
//!
//! A failed integrity check reports that the set is inconsistent. It does
//! not say which share is wrong.

use rand_core::RngCore;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use super::context::{Role, SessionContext};
use super::params::ContextParams;
use crate::coordinate::{self, Coordinate};
use crate::error::ShareError;
use crate::recombine::{self, Sample};
use crate::rng::Csprng;

#[derive(Clone, Copy, Debug, Default)]
struct Slot {
    coordinate: Option<Coordinate>,
    filled: bool,
}

impl Slot {
    #[inline]
    fn present(&self) -> Option<Coordinate> {
        self.coordinate.filter(|_| self.filled)
    }
}

/// Recombines secrets from shares.
pub struct Decoder<R: RngCore = Csprng> {
    context: SessionContext<R>,
    slots: Vec<Slot>,
}

impl Decoder<Csprng> {
    /// Creates a decoder whose buffers are scrubbed with OS-seeded randomness.
    pub fn new(params: ContextParams) -> Result<Self, ShareError> {
        Self::with_rng(params, Csprng::from_os()?)
    }
}

impl<R: RngCore> Decoder<R> {
    /// Creates a decoder using `rng` to scrub its buffers.
    ///
    /// All slots start vacant.
    pub fn with_rng(params: ContextParams, rng: R) -> Result<Self, ShareError> {
        params.validate()?;

        let sharecount = params.sharecount as usize;
        let checks = sharecount - params.threshold as usize;
        let context = SessionContext::new(params, Role::Decode, sharecount, checks, rng)?;

        Ok(Self {
            context,
            slots: vec![Slot::default(); sharecount],
        })
    }

    /// The share count, threshold and capacity this decoder was built with.
    pub fn params(&self) -> &ContextParams {
        self.context.params()
    }

    /// Active payload size in bytes.
    pub fn size(&self) -> usize {
        self.context.size()
    }

    /// Changes the active payload size. Coordinates are kept; every share
    /// value is discarded, since it was given for the old size.
    pub fn set_size(&mut self, size: usize) -> Result<(), ShareError> {
        self.context.set_size(size)?;

        for slot in self.slots.iter_mut() {
            slot.filled = false;
        }

        Ok(())
    }

    /// Assigns `coordinates` to slots `0..coordinates.len()` and marks the
    /// remaining slots vacant. All share values are discarded.
    ///
    /// Coordinates must be non-zero and distinct.
    pub fn set_coordinates(&mut self, coordinates: &[u8]) -> Result<(), ShareError> {
        self.context.ensure_ready()?;

        if coordinates.len() > self.slots.len() {
            return Err(ShareError::SlotOutOfRange {
                slot: coordinates.len() - 1,
                sharecount: self.context.params().sharecount,
            });
        }

        let coordinates = coordinate::distinct(coordinates)?;

        self.slots.fill(Slot::default());
        for (slot, c) in self.slots.iter_mut().zip(coordinates) {
            slot.coordinate = Some(c);
        }

        Ok(())
    }

    /// Stores the value of the share whose coordinate is assigned to `slot`.
    pub fn give_share(&mut self, slot: usize, share: &[u8]) -> Result<(), ShareError> {
        self.context.ensure_ready()?;
        self.context.check_slot(slot)?;

        if self.slots[slot].coordinate.is_none() {
            return Err(ShareError::VacantSlot(slot));
        }
        self.context.check_len(share.len())?;

        self.context.rows_mut().row_mut(slot)[..share.len()].copy_from_slice(share);
        self.slots[slot].filled = true;

        Ok(())
    }

    /// Binds `coordinate` to `slot` and stores `share` there.
    ///
    /// The coordinate must not already be bound to another slot.
    pub fn give_share_at(&mut self, slot: usize, coordinate: u8, share: &[u8]) -> Result<(), ShareError> {
        self.context.ensure_ready()?;
        self.context.check_slot(slot)?;

        let c = Coordinate::new(coordinate)?;

        let taken = self
            .slots
            .iter()
            .enumerate()
            .any(|(i, s)| i != slot && s.coordinate == Some(c));
        if taken {
            return Err(ShareError::DuplicateCoordinate(coordinate));
        }
        self.context.check_len(share.len())?;

        self.slots[slot] = Slot {
            coordinate: Some(c),
            filled: false,
        };

        self.give_share(slot, share)
    }

    /// Assigns coordinates and share values in one call, slot by slot.
    ///
    /// The batch is validated as a whole before anything is stored: on
    /// error the decoder keeps its previous coordinates and shares.
    pub fn give_shares<S: AsRef<[u8]>>(&mut self, coordinates: &[u8], shares: &[S]) -> Result<(), ShareError> {
        self.context.ensure_ready()?;

        if coordinates.len() != shares.len() {
            return Err(ShareError::LengthMismatch {
                expected: coordinates.len(),
                actual: shares.len(),
            });
        }

        for share in shares {
            self.context.check_len(share.as_ref().len())?;
        }

        self.set_coordinates(coordinates)?;

        for (slot, share) in shares.iter().enumerate() {
            self.give_share(slot, share.as_ref())?;
        }

        Ok(())
    }

    /// Marks `slot` vacant and scrubs its stored value.
    pub fn clear_share(&mut self, slot: usize) -> Result<(), ShareError> {
        self.context.ensure_ready()?;
        self.context.check_slot(slot)?;

        self.context.scrub_row(slot);
        self.slots[slot] = Slot::default();

        Ok(())
    }

    /// Number of slots holding both a coordinate and a share value.
    pub fn present(&self) -> usize {
        self.slots.iter().filter(|s| s.present().is_some()).count()
    }

    /// Recovers the secret from the first `threshold` present shares.
    pub fn extract(&mut self) -> Result<Zeroizing<Vec<u8>>, ShareError> {
        let threshold = self.context.params().threshold;
        self.extract_verified(threshold)
    }

    /// Recovers the secret and cross-checks it against
    /// `integrity - threshold` surplus shares.
    ///
    /// See the [module documentation](self) for how shares are assigned to
    /// the basis and to the checks.
    pub fn extract_verified(&mut self, integrity: u8) -> Result<Zeroizing<Vec<u8>>, ShareError> {
        self.context.ensure_ready()?;

        let mut secret = Zeroizing::new(vec![0u8; self.context.size()]);
        self.extract_into(&mut secret, integrity)?;

        Ok(secret)
    }

    /// Writes the recovered secret into `secret`, which must be exactly
    /// [`size`](Self::size) bytes long.
    ///
    /// On [`ShareError::IntegrityViolation`] the buffer holds the value
    /// interpolated from the basis shares. It must not be trusted.
    pub fn extract_into(&mut self, secret: &mut [u8], integrity: u8) -> Result<(), ShareError> {
        self.context.ensure_ready()?;
        self.context.check_len(secret.len())?;
        self.context.params().validate_integrity(integrity)?;

        let threshold = self.context.threshold();
        let integrity = integrity as usize;

        let picked: Vec<(Coordinate, usize)> = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.present().map(|c| (c, index)))
            .take(integrity)
            .collect();

        if picked.len() < threshold {
            return Err(ShareError::InsufficientShares {
                required: threshold,
                present: picked.len(),
            });
        }
        if picked.len() < integrity {
            return Err(ShareError::InsufficientShares {
                required: integrity,
                present: picked.len(),
            });
        }

        debug!(present = self.present(), threshold, integrity, "extracting secret");

        let size = self.context.size();
        let result = {
            let (rows, scratch) = self.context.rows_and_scratch();
            let samples: Vec<Sample<'_>> = picked
                .iter()
                .map(|&(x, index)| Sample {
                    x,
                    y: &rows.row(index)[..size],
                })
                .collect();

            recombine::interpolate(&samples, threshold, secret, scratch.rows_mut())
        };

        self.context.scrub_scratch();

        if let Err(ShareError::IntegrityViolation) = result {
            warn!(threshold, integrity, "integrity check failed: shares are inconsistent");
        }

        result
    }

    /// Scrubs every stored share and ends the session.
    pub fn release(&mut self) -> Result<(), ShareError> {
        self.context.release()?;
        self.slots.fill(Slot::default());

        Ok(())
    }

    /// Returns `true` once [`release`](Self::release) has succeeded.
    ///
    /// # Notes
    ///
    /// A released decoder holds no shares; every other method fails with
    /// [`ShareError::Released`].
    pub fn is_released(&self) -> bool {
        self.context.is_released()
    }
}
