//! Polynomial evaluation over GF(256).
//!
//! A sharing polynomial is stored as `t` coefficient rows, each `size`
//! bytes wide. Byte position `i` of every row belongs to the independent
//! polynomial protecting secret byte `i`, so one evaluation produces a
//! whole share at once.
//!
//! Rows are ordered from the highest degree down:
//!
//! ```text
//! p(x) = c[0]·x^(t-1) + c[1]·x^(t-2) + ... + c[t-2]·x + c[t-1]
//! ```
//!
//! The last row is the constant term `p(0)`, which is where the secret
//! lives. Evaluation uses Horner's method:
//!
//! ```text
//! acc = c[0]
//! acc = acc·x + c[i]   for i in 1..t
//! ```

use crate::coordinate::Coordinate;
use crate::error::ShareError;
use crate::field::Gf256;

/// Evaluates the coefficient rows at `x`, writing one share into `out`.
///
/// Only the first `out.len()` bytes of every row are read.
///
/// # Errors
///
/// - [`ShareError::InvalidCoordinate`] if `x` is zero.
/// - [`ShareError::LengthMismatch`] if a row is shorter than `out`.
pub fn evaluate<C: AsRef<[u8]>>(
    coefficients: &[C],
    x: u8,
    out: &mut [u8],
) -> Result<(), ShareError> {
    let x = Coordinate::new(x)?;

    if let Some(short) = coefficients
        .iter()
        .map(|row| row.as_ref().len())
        .find(|&len| len < out.len())
    {
        return Err(ShareError::LengthMismatch {
            expected: out.len(),
            actual: short,
        });
    }

    evaluate_rows(coefficients, x, out);

    Ok(())
}

/// Horner evaluation without argument checks.
///
/// Callers guarantee that every row holds at least `out.len()` bytes.
pub(crate) fn evaluate_rows<C: AsRef<[u8]>>(coefficients: &[C], x: Coordinate, out: &mut [u8]) {
    let size = out.len();
    let x = Gf256::from(x.get());

    let Some((first, rest)) = coefficients.split_first() else {
        out.fill(0);
        return;
    };

    out.copy_from_slice(&first.as_ref()[..size]);

    for row in rest {
        for (acc, &c) in out.iter_mut().zip(&row.as_ref()[..size]) {
            *acc = (Gf256(*acc) * x + Gf256(c)).into();
        }
    }
}
