//! Error conditions reported by the sharing engine.
//!
//! Every operation returns its failure to the immediate caller. Nothing is
//! retried internally: the arithmetic is deterministic, and "not enough
//! shares" can only be fixed by the caller supplying more of them.

use thiserror::Error;

/// Errors that may occur while splitting or recombining a secret.
#[derive(Debug, Error)]
pub enum ShareError {
    /// The threshold is zero or larger than the share count.
    #[error("invalid threshold {threshold} for {sharecount} shares")]
    InvalidThreshold { threshold: u8, sharecount: u8 },

    /// The payload size is outside `1..=maxsize` (or `maxsize` is zero).
    #[error("invalid size {size} (maximum {maxsize})")]
    InvalidSize { size: usize, maxsize: usize },

    /// A zero coordinate was supplied where a share identity is required.
    #[error("share coordinate must be non-zero")]
    InvalidCoordinate,

    /// The same coordinate was assigned to more than one slot.
    #[error("coordinate {0} is assigned more than once")]
    DuplicateCoordinate(u8),

    /// A slot index beyond the share count.
    #[error("slot {slot} is out of range for {sharecount} slots")]
    SlotOutOfRange { slot: usize, sharecount: u8 },

    /// A share was given to a slot that has no coordinate assigned.
    #[error("slot {0} has no coordinate assigned")]
    VacantSlot(usize),

    /// A secret, share or output buffer does not match the active size.
    #[error("expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// The integrity count is outside `threshold..=sharecount`.
    #[error("integrity {integrity} must lie within {threshold}..={sharecount}")]
    InvalidIntegrity {
        integrity: u8,
        threshold: u8,
        sharecount: u8,
    },

    /// Fewer present shares than the operation requires.
    #[error("{required} shares required, {present} present")]
    InsufficientShares { required: usize, present: usize },

    /// Surplus shares disagree with the polynomial interpolated from the
    /// first `threshold` shares. The faulty share is not identified.
    #[error("shares are mutually inconsistent")]
    IntegrityViolation,

    /// Standalone shares disagree on threshold or payload length.
    #[error("shares have inconsistent thresholds or lengths")]
    InconsistentShares,

    /// The encoder has no secret loaded for the active size.
    #[error("no secret loaded")]
    SecretNotSet,

    /// The context was released; it holds no usable state anymore.
    #[error("context has been released")]
    Released,

    /// Buffer allocation failed while building a context.
    #[error("out of memory")]
    OutOfMemory,

    /// The operating system could not provide seed entropy.
    #[error("operating system entropy unavailable: {0}")]
    Entropy(#[from] std::io::Error),
}
