//! Deterministic, non-cryptographic randomness.

use rand_core::{Error, RngCore, impls};

/// SplitMix64 generator.
///
/// Same seed, same stream. Useful for reproducible tests and fixtures;
/// shares produced with it are predictable and must never protect real
/// secrets.
#[derive(Clone, Debug)]
pub struct WeakRng {
    state: u64,
}

impl WeakRng {
    /// Starts a stream from `seed`.
    ///
    /// Any seed is valid, including zero: the state is advanced before the
    /// first output is mixed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl RngCore for WeakRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);

        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
