//! Finite field arithmetic over GF(256).
//!
//! Every byte of a secret is shared independently, so all arithmetic in
//! this crate happens on single bytes interpreted as elements of GF(2⁸),
//! reduced modulo the irreducible polynomial
//!
//! ```text
//! x⁸ + x⁴ + x³ + x² + 1   (0x11D)
//! ```
//!
//! with `2` as the multiplicative generator.
//!
//! Multiplication is carried out through precomputed discrete-logarithm
//! tables: `a·b = exp[log a + log b]` for non-zero operands. The tables are
//! evaluated at compile time, live in read-only memory and are shared by
//! every context and thread without synchronisation.
//!
//! The table contents fix the field representation. Two implementations
//! using the same polynomial and generator produce identical shares for
//! identical coefficients, so they must never change.
//!
//! - `tables` holds the raw log/antilog tables used by the log-domain
//!   interpolation code.
//! - [`Gf256`] wraps a byte with field semantics for `+` and `*`.

mod element;
pub(crate) mod tables;

pub use element::Gf256;
pub use tables::POLYNOMIAL;
