//! Seeded deterministic source: HMAC-SHA256 in counter mode.
//!
//! Block `i` of the stream is `HMAC-SHA256(key = seed, msg = i as u64 big-endian)`.
//! A request for `n` bytes consumes `ceil(n / 32)` blocks starting at the
//! current counter and returns the first `n` bytes of their concatenation. The
//! unused tail of the last block is dropped, not carried into the next request.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::fmt;

use crate::{RandomError, RandomSource, Seed};

type HmacSha256 = Hmac<Sha256>;

/// Size of one generated block in bytes.
pub const BLOCK_LEN: usize = 32;

/// Replayable byte stream keyed by a [`Seed`].
#[derive(Clone)]
pub struct SeededRandom {
    keyed: HmacSha256,
    counter: u64,
}

impl SeededRandom {
    pub fn new(seed: &Seed) -> Result<Self, RandomError> {
        let keyed = HmacSha256::new_from_slice(seed.as_bytes())
            .map_err(|e| RandomError::InvalidSeed(e.to_string()))?;
        Ok(Self { keyed, counter: 0 })
    }

    /// Parse `hex` as a [`Seed`] and key a new stream with it.
    pub fn from_hex(hex: &str) -> Result<Self, RandomError> {
        Self::new(&Seed::parse(hex)?)
    }

    fn next_block(&mut self) -> [u8; BLOCK_LEN] {
        let mut mac = self.keyed.clone();
        mac.update(&self.counter.to_be_bytes());
        let digest = mac.finalize().into_bytes();
        self.counter += 1;

        let mut block = [0u8; BLOCK_LEN];
        block.copy_from_slice(&digest);
        block
    }
}

impl RandomSource for SeededRandom {
    fn next_bytes(&mut self, len: usize) -> Result<Vec<u8>, RandomError> {
        let mut out = Vec::with_capacity(len);
        while out.len() < len {
            let block = self.next_block();
            let take = (len - out.len()).min(BLOCK_LEN);
            out.extend_from_slice(&block[..take]);
        }
        Ok(out)
    }

    fn name(&self) -> &str {
        "hmac-sha256-counter"
    }
}

impl fmt::Debug for SeededRandom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeededRandom").finish_non_exhaustive()
    }
}
