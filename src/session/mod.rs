//! Stateful sharing sessions.
//!
//! A session binds a share count, a threshold and a buffer capacity to
//! owned row storage and a randomness source. It is reused across
//! secrets (and across payload sizes up to its capacity) and ends with an
//! explicit [`release`](Encoder::release) that scrubs every buffer.
//!
//! - [`Encoder`] loads a secret and produces shares.
//! - [`Decoder`] collects shares and recovers the secret, optionally
//!   cross-checking surplus shares for tampering.
//!
//! A session belongs to one caller at a time. It performs no locking;
//! independent sessions share nothing mutable and can run on separate
//! threads freely.

mod buffer;
mod context;
mod decoder;
mod encoder;
mod params;

pub use context::Role;
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use params::ContextParams;
