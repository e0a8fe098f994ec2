//! Discrete logarithm and antilogarithm tables for GF(256).

/// Reduction polynomial `x⁸ + x⁴ + x³ + x² + 1`.
pub const POLYNOMIAL: u16 = 0x11d;

/// Length of the antilog table.
///
/// Two logarithms are at most 254 each, so their sum never exceeds 508.
/// Extending the table past 255 removes the `mod 255` from every
/// multiplication.
pub(crate) const EXP_LEN: usize = 510;

const TABLES: ([u8; 256], [u8; EXP_LEN]) = generate();

/// `LOG[v]` is the discrete logarithm of `v` base 2. `LOG[0]` is unused.
pub(crate) static LOG: [u8; 256] = TABLES.0;

/// `EXP[e]` is `2^e`, with `EXP[e] == EXP[e % 255]` for every `e`.
pub(crate) static EXP: [u8; EXP_LEN] = TABLES.1;

const fn generate() -> ([u8; 256], [u8; EXP_LEN]) {
    let mut log = [0u8; 256];
    let mut exp = [0u8; EXP_LEN];

    let mut x: u16 = 1;
    let mut i = 0;

    while i < 255 {
        exp[i] = x as u8;
        log[x as usize] = i as u8;

        x <<= 1;
        if x & 0x100 != 0 {
            x ^= POLYNOMIAL;
        }

        i += 1;
    }

    while i < EXP_LEN {
        exp[i] = exp[i - 255];
        i += 1;
    }

    (log, exp)
}

/// Logarithm of a non-zero element, widened for index arithmetic.
#[inline(always)]
pub(crate) fn log(v: u8) -> usize {
    LOG[v as usize] as usize
}

/// Antilogarithm of an exponent below [`EXP_LEN`].
#[inline(always)]
pub(crate) fn exp(e: usize) -> u8 {
    EXP[e]
}

/// Multiplies `value` by the element whose logarithm is `log_factor`.
///
/// Zero has no logarithm, so the table result is masked out when `value`
/// is zero instead of branching on it.
#[inline(always)]
pub(crate) fn mul_by_log(value: u8, log_factor: usize) -> u8 {
    let product = EXP[LOG[value as usize] as usize + log_factor];
    let mask = 0u8.wrapping_sub((value != 0) as u8);

    product & mask
}
