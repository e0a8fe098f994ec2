//! ChaCha20-based CSPRNG.
//!
//! The generator keeps a 256-bit key and a block counter. Output is the
//! ChaCha20 keystream for that key; after every request one extra block
//! replaces the key, so a later compromise of the state does not expose
//! earlier output.

use rand_core::{CryptoRng, Error, RngCore, impls};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::chacha20;
use crate::error::ShareError;
use crate::os::sys_random;

/// Cryptographically secure pseudorandom number generator.
///
/// Key material is wiped when the generator is dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Csprng {
    key: [u8; 32],
    nonce: [u8; 12],
    counter: u32,
}

impl Csprng {
    /// Seeds a generator from operating system entropy.
    pub fn from_os() -> Result<Self, ShareError> {
        let mut seed = [0u8; 32];
        sys_random(&mut seed)?;

        Ok(Self::from_seed(seed))
    }

    /// Seeds a generator from caller-provided bytes.
    ///
    /// The seed must be uniformly random and secret. The local copy is
    /// wiped once consumed.
    pub fn from_seed(mut seed: [u8; 32]) -> Self {
        let key = seed;
        seed.zeroize();

        Self {
            key,
            nonce: [0u8; 12],
            counter: 0,
        }
    }

    fn generate(&mut self, out: &mut [u8]) {
        for chunk in out.chunks_mut(64) {
            let mut block = chacha20::block(&self.key, self.counter, &self.nonce);
            self.counter = self.counter.wrapping_add(1);

            chunk.copy_from_slice(&block[..chunk.len()]);
            block.zeroize();
        }

        self.rekey();
    }

    fn rekey(&mut self) {
        let mut block = chacha20::block(&self.key, self.counter, &self.nonce);
        self.counter = self.counter.wrapping_add(1);

        self.key.copy_from_slice(&block[..32]);
        block.zeroize();
    }
}

impl RngCore for Csprng {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.generate(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.generate(dest);
        Ok(())
    }
}

impl CryptoRng for Csprng {}
