//! A byte with GF(256) semantics.

use std::ops::{Add, AddAssign, Mul, MulAssign};

use super::tables::{exp, log, mul_by_log};

/// An element of the finite field GF(256).
///
/// `+` is bitwise XOR (the field has characteristic 2, so subtraction is
/// the same operation) and `*` is table-driven multiplication modulo
/// [`POLYNOMIAL`](super::POLYNOMIAL).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Gf256(pub u8);

impl Gf256 {
    /// The additive identity.
    pub const ZERO: Self = Gf256(0);

    /// The multiplicative identity.
    pub const ONE: Self = Gf256(1);

    /// Returns the discrete logarithm base 2, or `None` for zero.
    #[inline]
    pub fn log(self) -> Option<u8> {
        (self.0 != 0).then(|| log(self.0) as u8)
    }

    /// Returns `2^e`.
    #[inline]
    pub fn exp(e: u8) -> Self {
        Gf256(exp(e as usize))
    }

    /// Returns the multiplicative inverse, or `None` for zero.
    ///
    /// Since `2^255 = 1`, the inverse of `2^l` is `2^(255 - l)`.
    #[inline]
    pub fn inverse(self) -> Option<Self> {
        self.log().map(|l| Gf256(exp(255 - l as usize)))
    }

    /// Divides by `rhs`, or returns `None` when `rhs` is zero.
    #[inline]
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        rhs.inverse().map(|inv| self * inv)
    }
}

impl From<u8> for Gf256 {
    #[inline(always)]
    fn from(value: u8) -> Self {
        Gf256(value)
    }
}

impl From<Gf256> for u8 {
    #[inline(always)]
    fn from(value: Gf256) -> u8 {
        value.0
    }
}

impl Add for Gf256 {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Gf256(self.0 ^ rhs.0)
    }
}

impl AddAssign for Gf256 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul for Gf256 {
    type Output = Self;

    /// `exp[log a + log b]`, or zero when either side is zero.
    ///
    /// The only data-dependent decision is the zero mask; there is no
    /// branch on operand values.
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        let rhs_mask = 0u8.wrapping_sub((rhs.0 != 0) as u8);

        Gf256(mul_by_log(self.0, log(rhs.0)) & rhs_mask)
    }
}

impl MulAssign for Gf256 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
