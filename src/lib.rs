//! Threshold secret sharing over GF(256).
//!
//! This crate splits a secret byte string into `n` shares such that any
//! `k` of them recover it exactly, while `k - 1` or fewer reveal nothing
//! about it. Every byte of the secret is protected by its own random
//! polynomial of degree `k - 1` whose constant term is that byte.
//!
//! The focus is on **predictable, auditable arithmetic** and on keeping
//! secret material out of memory once it is no longer needed. Storage,
//! transport and share encoding are left to the caller.
//!
//! # Module overview
//!
//! - `field`
//!   GF(256) with the `0x11D` reduction polynomial. Multiplication goes
//!   through compile-time log/antilog tables shared by every thread.
//!
//! - `polynomial`
//!   Horner evaluation of a whole block of byte-wise polynomials at one
//!   coordinate. This is how shares are produced.
//!
//! - `session`
//!   Reusable [`Encoder`] and [`Decoder`] contexts. They own their row
//!   buffers, accept an injected randomness source and overwrite every
//!   buffer with random bytes on release.
//!
//!   The decoder tolerates missing shares (vacant slots are skipped) and
//!   can use surplus shares beyond the threshold as an integrity check:
//!   if the extra shares disagree with the polynomial interpolated from
//!   the first `k`, extraction fails instead of returning a wrong secret.
//!
//! - `shares`
//!   One-shot [`split`], [`combine`] and [`refresh`] over self-describing
//!   [`Share`] values, each with a `_with_rng` variant.
//!
//! - `rng`
//!   Randomness sources implementing [`rand_core::RngCore`]: an OS-seeded
//!   ChaCha20 [`Csprng`] and a deterministic [`WeakRng`] for tests.
//!
//! # Example
//!
//! ```
//! use gfshare::{ContextParams, Decoder, Encoder};
//!
//! let params = ContextParams::new(3, 2, 5)?;
//!
//! let mut encoder = Encoder::new(params, &[1, 2, 3])?;
//! encoder.set_secret(b"hello")?;
//! let a = encoder.get_share(0)?;
//! let c = encoder.get_share(2)?;
//! encoder.release()?;
//!
//! let mut decoder = Decoder::new(params)?;
//! decoder.give_shares(&[1, 3], &[a, c])?;
//! assert_eq!(decoder.extract()?.as_slice(), b"hello");
//! decoder.release()?;
//! # Ok::<(), gfshare::ShareError>(())
//! ```
//!
//! # Randomness
//!
//! Coefficients are only as unpredictable as the source they are drawn
//! from. Production callers use [`Csprng`] (the default) or inject another
//! [`rand_core::CryptoRng`].

mod coordinate;
mod error;
mod recombine;

pub mod field;
pub mod polynomial;
pub mod rng;
pub mod session;
pub mod shares;

pub(crate) mod os;

pub use coordinate::Coordinate;
pub use error::ShareError;
pub use rng::{Csprng, WeakRng};
pub use session::{ContextParams, Decoder, Encoder, Role};
pub use shares::{Share, combine, combine_with_rng, refresh, refresh_with_rng, split, split_with_rng};
