//! Nullable random byte sources.

use std::collections::VecDeque;

use tide_random::{RandomError, RandomSource};

/// A random source that replays pre-configured byte chunks in order.
///
/// Each `next_bytes` call pops one chunk. The chunk is truncated or
/// zero-padded to the requested length. Once the script runs out, every
/// further request is answered with zeros.
#[derive(Debug, Default)]
pub struct NullRandom {
    chunks: VecDeque<Vec<u8>>,
    requests: Vec<usize>,
}

impl NullRandom {
    /// Create with a sequence of chunks, one per request.
    pub fn new<I, C>(chunks: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Vec<u8>>,
    {
        Self {
            chunks: chunks.into_iter().map(Into::into).collect(),
            requests: Vec::new(),
        }
    }

    /// Lengths of every request made so far, in order.
    pub fn requests(&self) -> &[usize] {
        &self.requests
    }

    /// Number of scripted chunks not yet consumed.
    pub fn remaining(&self) -> usize {
        self.chunks.len()
    }
}

impl RandomSource for NullRandom {
    fn next_bytes(&mut self, len: usize) -> Result<Vec<u8>, RandomError> {
        self.requests.push(len);
        let mut chunk = self.chunks.pop_front().unwrap_or_default();
        chunk.resize(len, 0);
        Ok(chunk)
    }

    fn name(&self) -> &str {
        "null-random"
    }
}

/// A random source that only ever returns zero bytes.
///
/// Every sample drawn from it is 0, so a weighted draw always picks the first
/// weight-bearing entry of the remaining pool.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroRandom;

impl RandomSource for ZeroRandom {
    fn next_bytes(&mut self, len: usize) -> Result<Vec<u8>, RandomError> {
        Ok(vec![0u8; len])
    }

    fn name(&self) -> &str {
        "zero-random"
    }
}
