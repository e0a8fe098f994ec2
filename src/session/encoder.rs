//! Share generation.
//!
//! The encoder holds `threshold` coefficient rows. Row `threshold - 1` is
//! the constant term and carries the secret; rows `0..threshold - 1` are
//! drawn fresh from the randomness source on every [`Encoder::set_secret`],
//! so loading the same secret twice yields unrelated share sets.
//!
//! Producing a share is a pure read of the coefficients: it does not
//! mutate the context, and any number of shares can be taken from one
//! loaded secret.

use rand_core::RngCore;
use tracing::trace;

use super::context::{Role, SessionContext};
use super::params::ContextParams;
use crate::coordinate::{self, Coordinate};
use crate::error::ShareError;
use crate::polynomial;
use crate::rng::Csprng;

/// Splits secrets into shares.
pub struct Encoder<R: RngCore = Csprng> {
    context: SessionContext<R>,
    coordinates: Vec<Coordinate>,
    loaded: bool,
}

impl Encoder<Csprng> {
    /// Creates an encoder seeded from operating system entropy.
    ///
    /// `coordinates` assigns one share identity per slot and must hold
    /// exactly `params.sharecount` distinct, non-zero bytes.
    pub fn new(params: ContextParams, coordinates: &[u8]) -> Result<Self, ShareError> {
        Self::with_rng(params, coordinates, Csprng::from_os()?)
    }
}

impl<R: RngCore> Encoder<R> {
    /// Creates an encoder drawing coefficients from `rng`.
    ///
    /// The source must be cryptographically secure for production use;
    /// nothing here can tell.
    pub fn with_rng(params: ContextParams, coordinates: &[u8], rng: R) -> Result<Self, ShareError> {
        params.validate()?;

        if coordinates.len() != params.sharecount as usize {
            return Err(ShareError::LengthMismatch {
                expected: params.sharecount as usize,
                actual: coordinates.len(),
            });
        }

        let coordinates = coordinate::distinct(coordinates)?;
        let context = SessionContext::new(params, Role::Encode, params.threshold as usize, 0, rng)?;

        Ok(Self {
            context,
            coordinates,
            loaded: false,
        })
    }

    /// The coordinate assigned to each slot, in slot order.
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// The share count, threshold and capacity this encoder was built with.
    pub fn params(&self) -> &ContextParams {
        self.context.params()
    }

    /// Active payload size in bytes.
    pub fn size(&self) -> usize {
        self.context.size()
    }

    /// Changes the active payload size.
    ///
    /// The loaded secret no longer matches the new size and is discarded;
    /// call [`set_secret`](Self::set_secret) again before taking shares.
    pub fn set_size(&mut self, size: usize) -> Result<(), ShareError> {
        self.context.set_size(size)?;
        self.loaded = false;

        Ok(())
    }

    /// Loads a secret of exactly [`size`](Self::size) bytes and draws new
    /// random coefficients for every other row.
    pub fn set_secret(&mut self, secret: &[u8]) -> Result<(), ShareError> {
        self.context.ensure_ready()?;
        self.context.check_len(secret.len())?;

        self.loaded = false;

        let top = self.context.threshold() - 1;
        self.context.randomize_rows(0..top)?;
        self.context.rows_mut().row_mut(top)[..secret.len()].copy_from_slice(secret);

        self.loaded = true;
        trace!(size = secret.len(), "secret loaded");

        Ok(())
    }

    /// Returns the share for `slot`, evaluated at that slot's coordinate.
    pub fn get_share(&self, slot: usize) -> Result<Vec<u8>, ShareError> {
        let mut share = vec![0u8; self.context.size()];
        self.get_share_into(slot, &mut share)?;

        Ok(share)
    }

    /// Writes the share for `slot` into `out`, which must be exactly
    /// [`size`](Self::size) bytes long.
    pub fn get_share_into(&self, slot: usize, out: &mut [u8]) -> Result<(), ShareError> {
        self.context.ensure_ready()?;
        self.context.check_slot(slot)?;

        self.evaluate_into(self.coordinates[slot], out)
    }

    /// Returns the share at an arbitrary non-zero coordinate, whether or
    /// not it is one of the slot assignments.
    pub fn share_at(&self, coordinate: u8) -> Result<Vec<u8>, ShareError> {
        self.context.ensure_ready()?;
        let x = Coordinate::new(coordinate)?;

        let mut share = vec![0u8; self.context.size()];
        self.evaluate_into(x, &mut share)?;

        Ok(share)
    }

    /// Returns one share per coordinate, in order, stopping at the first
    /// failure.
    pub fn get_shares(&self, coordinates: &[u8]) -> Result<Vec<Vec<u8>>, ShareError> {
        coordinates.iter().map(|&x| self.share_at(x)).collect()
    }

    /// Scrubs the coefficients and ends the session.
    pub fn release(&mut self) -> Result<(), ShareError> {
        self.context.release()?;
        self.loaded = false;

        Ok(())
    }

    /// Returns `true` once [`release`](Self::release) has succeeded.
    ///
    /// # Notes
    ///
    /// A released encoder keeps no coefficients; every other method fails
    /// with [`ShareError::Released`].
    pub fn is_released(&self) -> bool {
        self.context.is_released()
    }

    fn evaluate_into(&self, x: Coordinate, out: &mut [u8]) -> Result<(), ShareError> {
        self.context.ensure_ready()?;

        if !self.loaded {
            return Err(ShareError::SecretNotSet);
        }
        self.context.check_len(out.len())?;

        polynomial::evaluate_rows(self.context.rows().rows(), x, out);
        trace!(coordinate = x.get(), size = out.len(), "share evaluated");

        Ok(())
    }
}
