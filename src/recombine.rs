//! Lagrange interpolation at zero, in the log domain.
//!
//! For a basis of `t` samples `(x_i, y_i)` the secret is
//!
//! ```text
//! p(0) = Σ_i y_i · L_i(0),   L_i(0) = Π_{j≠i} x_j / (x_i - x_j)
//! ```
//!
//! Subtraction in GF(256) is XOR, and every product and quotient becomes a
//! sum or difference of logarithms:
//!
//! ```text
//! log L_i(0) = (Σ_{j≠i} log x_j  -  Σ_{j≠i} log(x_i ^ x_j))  mod 255
//! ```
//!
//! The same weights evaluated at a check coordinate `x_k` instead of zero
//! predict what that surplus share should hold:
//!
//! ```text
//! log L_i(x_k) = (Σ_{j≠i} log(x_k ^ x_j)  -  Σ_{j≠i} log(x_i ^ x_j))  mod 255
//! ```
//!
//! Each check's residual starts as its supplied value and has every
//! predicted contribution XORed in. A consistent set leaves every residual
//! at zero.

use crate::coordinate::Coordinate;
use crate::error::ShareError;
use crate::field::tables::{log, mul_by_log};

/// One present share: its coordinate and `size` bytes of value.
pub(crate) struct Sample<'a> {
    pub(crate) x: Coordinate,
    pub(crate) y: &'a [u8],
}

/// Interpolates `secret` from `samples[..threshold]` and verifies
/// `samples[threshold..]` against it, using `residuals` as scratch.
///
/// Callers guarantee distinct coordinates, `samples.len() >= threshold`,
/// at least one residual row per check sample and every `y` exactly
/// `secret.len()` bytes long.
pub(crate) fn interpolate(
    samples: &[Sample<'_>],
    threshold: usize,
    secret: &mut [u8],
    residuals: &mut [Box<[u8]>],
) -> Result<(), ShareError> {
    let size = secret.len();
    let (basis, checks) = samples.split_at(threshold);
    let residuals = &mut residuals[..checks.len()];

    for (residual, check) in residuals.iter_mut().zip(checks) {
        residual[..size].copy_from_slice(check.y);
    }

    secret.fill(0);

    let mut check_weights = vec![0usize; checks.len()];

    for (i, sample) in basis.iter().enumerate() {
        let mut top = 0usize;
        let mut bottom = 0usize;
        check_weights.fill(0);

        for (j, other) in basis.iter().enumerate() {
            if i == j {
                continue;
            }

            top += other.x.log();
            bottom += log(sample.x.get() ^ other.x.get());

            for (weight, check) in check_weights.iter_mut().zip(checks) {
                *weight += log(check.x.get() ^ other.x.get());
            }
        }

        let bottom = bottom % 255;
        let weight = (top + 255 - bottom) % 255;

        for w in check_weights.iter_mut() {
            *w = (*w + 255 - bottom) % 255;
        }

        // Zero bytes contribute nothing; mul_by_log masks them out.
        for (pos, &y) in sample.y.iter().enumerate() {
            secret[pos] ^= mul_by_log(y, weight);

            for (residual, &w) in residuals.iter_mut().zip(&check_weights) {
                residual[pos] ^= mul_by_log(y, w);
            }
        }
    }

    let mismatch = residuals
        .iter()
        .flat_map(|r| r[..size].iter())
        .fold(0u8, |acc, &b| acc | b);

    if mismatch != 0 {
        return Err(ShareError::IntegrityViolation);
    }

    Ok(())
}
