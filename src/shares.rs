//! One-shot splitting, combining and refreshing.
//!
//! These functions wrap a short-lived [`Encoder`] or [`Decoder`] around
//! self-describing [`Share`] values, for callers that hold a whole secret
//! in memory and do not need to reuse a session.

use rand_core::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::coordinate;
use crate::error::ShareError;
use crate::rng::Csprng;
use crate::session::{ContextParams, Decoder, Encoder};

/// A single share together with what is needed to use it.
///
/// Share values are wiped when dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Share {
    /// Non-zero x-coordinate, unique among the shares of one secret.
    pub coordinate: u8,

    /// Number of shares required to recover the secret.
    pub threshold: u8,

    /// Polynomial evaluations, one per secret byte.
    pub data: Vec<u8>,
}

/// Splits `secret` into one share per coordinate, any `threshold` of which
/// recover it. Coefficients come from an OS-seeded [`Csprng`].
pub fn split(secret: &[u8], threshold: u8, coordinates: &[u8]) -> Result<Vec<Share>, ShareError> {
    split_with_rng(secret, threshold, coordinates, Csprng::from_os()?)
}

/// Like [`split`], drawing coefficients from `rng`.
pub fn split_with_rng<R: RngCore>(
    secret: &[u8],
    threshold: u8,
    coordinates: &[u8],
    rng: R,
) -> Result<Vec<Share>, ShareError> {
    let sharecount = share_count(coordinates.len())?;
    let params = ContextParams::new(sharecount, threshold, secret.len())?;

    let mut encoder = Encoder::with_rng(params, coordinates, rng)?;
    encoder.set_secret(secret)?;

    let shares = encoder
        .coordinates()
        .iter()
        .enumerate()
        .map(|(slot, c)| {
            Ok(Share {
                coordinate: c.get(),
                threshold,
                data: encoder.get_share(slot)?,
            })
        })
        .collect::<Result<Vec<_>, ShareError>>()?;

    encoder.release()?;

    Ok(shares)
}

/// Recovers the secret from `shares`.
///
/// The first `threshold` shares are interpolated; every share after them
/// is checked against the result, and any disagreement fails with
/// [`ShareError::IntegrityViolation`]. Pass exactly `threshold` shares to
/// skip the check.
///
/// The decoder's working buffers are scrubbed with an OS-seeded
/// [`Csprng`]; use [`combine_with_rng`] where no OS source exists.
pub fn combine(shares: &[Share]) -> Result<Zeroizing<Vec<u8>>, ShareError> {
    combine_with_rng(shares, Csprng::from_os()?)
}

/// Like [`combine`], scrubbing working buffers with `rng`.
///
/// The recovered secret does not depend on `rng`.
pub fn combine_with_rng<R: RngCore>(shares: &[Share], rng: R) -> Result<Zeroizing<Vec<u8>>, ShareError> {
    let (threshold, len) = consistent(shares)?;

    if shares.len() < threshold as usize {
        return Err(ShareError::InsufficientShares {
            required: threshold as usize,
            present: shares.len(),
        });
    }

    let coordinates: Vec<u8> = shares.iter().map(|s| s.coordinate).collect();
    coordinate::distinct(&coordinates)?;

    let sharecount = share_count(shares.len())?;
    let params = ContextParams::new(sharecount, threshold, len)?;

    let mut decoder = Decoder::with_rng(params, rng)?;
    let data: Vec<&[u8]> = shares.iter().map(|s| s.data.as_slice()).collect();
    decoder.give_shares(&coordinates, &data)?;

    let secret = decoder.extract_verified(sharecount)?;
    decoder.release()?;

    Ok(secret)
}

/// Re-randomises `shares` without reconstructing the secret.
///
/// A fresh polynomial `g` with `g(0) = 0` is evaluated at every share's
/// coordinate and added to its value:
///
/// ```text
/// y' = y + g(x)
/// ```
///
/// The refreshed shares recover the same secret, but cannot be mixed with
/// the old ones. At least `threshold` shares must take part.
pub fn refresh(shares: &[Share]) -> Result<Vec<Share>, ShareError> {
    refresh_with_rng(shares, Csprng::from_os()?)
}

/// Like [`refresh`], drawing the masking polynomial from `rng`.
pub fn refresh_with_rng<R: RngCore>(shares: &[Share], rng: R) -> Result<Vec<Share>, ShareError> {
    let (threshold, len) = consistent(shares)?;

    if shares.len() < threshold as usize {
        return Err(ShareError::InsufficientShares {
            required: threshold as usize,
            present: shares.len(),
        });
    }

    let coordinates: Vec<u8> = shares.iter().map(|s| s.coordinate).collect();
    let sharecount = share_count(coordinates.len())?;
    let params = ContextParams::new(sharecount, threshold, len)?;

    // Sharing an all-zero secret yields exactly g(x).
    let mut encoder = Encoder::with_rng(params, &coordinates, rng)?;
    encoder.set_secret(&vec![0u8; len])?;

    let refreshed = shares
        .iter()
        .enumerate()
        .map(|(slot, old)| {
            let mut data = encoder.get_share(slot)?;
            for (d, &o) in data.iter_mut().zip(&old.data) {
                *d ^= o;
            }

            Ok(Share {
                coordinate: old.coordinate,
                threshold,
                data,
            })
        })
        .collect::<Result<Vec<_>, ShareError>>()?;

    encoder.release()?;

    Ok(refreshed)
}

/// Returns the common threshold and length of `shares`.
fn consistent(shares: &[Share]) -> Result<(u8, usize), ShareError> {
    let first = shares.first().ok_or(ShareError::InsufficientShares {
        required: 1,
        present: 0,
    })?;

    let threshold = first.threshold;
    let len = first.data.len();

    if shares
        .iter()
        .any(|s| s.threshold != threshold || s.data.len() != len)
    {
        return Err(ShareError::InconsistentShares);
    }

    Ok((threshold, len))
}

/// At most 255 distinct non-zero coordinates exist.
fn share_count(len: usize) -> Result<u8, ShareError> {
    u8::try_from(len).map_err(|_| ShareError::SlotOutOfRange {
        slot: len - 1,
        sharecount: u8::MAX,
    })
}
