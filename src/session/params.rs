//! Context configuration and validation.

use crate::error::ShareError;

/// Shape of a sharing session.
///
/// # Defaults
///
/// Five shares, any three of which recover the secret, processed in blocks
/// of up to 4096 bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContextParams {
    /// Number of coordinate slots (`n`). Bounded by 255 through the type,
    /// since coordinates are distinct non-zero bytes.
    pub sharecount: u8,
    /// Minimum number of shares needed to recover the secret (`k`),
    /// `1..=sharecount`.
    pub threshold: u8,
    /// Capacity of every row, in bytes. The active size may shrink below
    /// this but never grow past it.
    pub maxsize: usize,
}

impl ContextParams {
    /// Builds a parameter set and validates it.
    pub fn new(sharecount: u8, threshold: u8, maxsize: usize) -> Result<Self, ShareError> {
        let params = Self {
            sharecount,
            threshold,
            maxsize,
        };
        params.validate()?;

        Ok(params)
    }

    /// Checks `1 <= threshold <= sharecount` and `maxsize >= 1`.
    pub fn validate(&self) -> Result<(), ShareError> {
        if self.threshold == 0 || self.threshold > self.sharecount {
            return Err(ShareError::InvalidThreshold {
                threshold: self.threshold,
                sharecount: self.sharecount,
            });
        }

        if self.maxsize == 0 {
            return Err(ShareError::InvalidSize {
                size: 0,
                maxsize: 0,
            });
        }

        Ok(())
    }

    pub(crate) fn validate_size(&self, size: usize) -> Result<(), ShareError> {
        if size == 0 || size > self.maxsize {
            return Err(ShareError::InvalidSize {
                size,
                maxsize: self.maxsize,
            });
        }

        Ok(())
    }

    pub(crate) fn validate_integrity(&self, integrity: u8) -> Result<(), ShareError> {
        if integrity < self.threshold || integrity > self.sharecount {
            return Err(ShareError::InvalidIntegrity {
                integrity,
                threshold: self.threshold,
                sharecount: self.sharecount,
            });
        }

        Ok(())
    }
}

impl Default for ContextParams {
    fn default() -> Self {
        Self {
            sharecount: 5,
            threshold: 3,
            maxsize: 4096,
        }
    }
}
