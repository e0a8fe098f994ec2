//! Randomness sources.
//!
//! Every context draws from a source injected at construction. The
//! capability is expressed as [`rand_core::RngCore`], so any generator
//! from the `rand` ecosystem plugs in directly. Two are provided here:
//!
//! - [`Csprng`]: a ChaCha20-based generator seeded from the operating
//!   system, with forward secrecy through rekeying after every request.
//!   This is the default for [`Encoder::new`](crate::Encoder::new) and
//!   [`Decoder::new`](crate::Decoder::new).
//! - [`WeakRng`]: a fast deterministic generator for tests and
//!   reproducible fixtures. It is not cryptographically secure.

pub(crate) mod chacha20;
mod csprng;
mod weak;

pub use csprng::Csprng;
pub use weak::WeakRng;
