//! Random byte sources for reproducible draws.
//!
//! Two sources are provided:
//! - [`OsRandom`] reads the operating system CSPRNG; its output cannot be replayed.
//! - [`SeededRandom`] hashes an incrementing counter under a caller-supplied seed
//!   (HMAC-SHA256 in counter mode), so anyone holding the seed can replay a draw
//!   byte for byte.
//!
//! [`sample_below`] turns either stream into uniformly distributed integers.

pub mod error;
pub mod os;
pub mod sampler;
pub mod seed;
pub mod seeded;

pub use error::RandomError;
pub use os::OsRandom;
pub use sampler::sample_below;
pub use seed::Seed;
pub use seeded::SeededRandom;

/// A stateful source of random bytes.
///
/// Sources are owned by a single caller and borrowed mutably for every request;
/// interleaving requests from two draws would change both outcomes.
pub trait RandomSource: Send {
    /// Return exactly `len` bytes.
    fn next_bytes(&mut self, len: usize) -> Result<Vec<u8>, RandomError>;

    /// Human-readable name of this source.
    fn name(&self) -> &str;
}

/// Build the source for a draw.
///
/// `None` selects OS entropy. `Some(hex)` parses the seed (optionally
/// `0x`-prefixed) and fails with [`RandomError::InvalidSeed`] if it is empty,
/// of odd length, or not hexadecimal.
pub fn create_source(seed: Option<&str>) -> Result<Box<dyn RandomSource>, RandomError> {
    match seed {
        None => Ok(Box::new(OsRandom)),
        Some(hex) => {
            let seed = Seed::parse(hex)?;
            Ok(Box::new(SeededRandom::new(&seed)?))
        }
    }
}
