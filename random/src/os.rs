//! Non-deterministic source backed by the operating system CSPRNG.

use crate::{RandomError, RandomSource};

#[derive(Clone, Copy, Debug, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn next_bytes(&mut self, len: usize) -> Result<Vec<u8>, RandomError> {
        let mut buf = vec![0u8; len];
        if len > 0 {
            getrandom::getrandom(&mut buf).map_err(|e| RandomError::Entropy(e.to_string()))?;
        }
        Ok(buf)
    }

    fn name(&self) -> &str {
        "os-entropy"
    }
}
