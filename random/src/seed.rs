//! Draw seeds: hex strings that key the deterministic source.

use std::fmt;
use std::str::FromStr;

use crate::RandomError;

/// Raw key bytes of a draw seed.
///
/// Seeds are published alongside draw results, so `Debug` and `Display` both
/// print the hex form.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Seed(Vec<u8>);

impl Seed {
    /// Length in bytes of seeds produced by [`Seed::generate`].
    pub const GENERATED_LEN: usize = 32;

    /// Parse a hex seed, with or without a `0x` prefix.
    pub fn parse(text: &str) -> Result<Self, RandomError> {
        let cleaned = text.strip_prefix("0x").unwrap_or(text);

        if cleaned.is_empty()
            || cleaned.len() % 2 != 0
            || !cleaned.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Err(RandomError::InvalidSeed(
                "seed must be a non-empty hex string with even length".into(),
            ));
        }

        hex::decode(cleaned)
            .map(Self)
            .map_err(|e| RandomError::InvalidSeed(e.to_string()))
    }

    /// Draw a fresh seed from OS entropy.
    pub fn generate() -> Result<Self, RandomError> {
        let mut bytes = vec![0u8; Self::GENERATED_LEN];
        getrandom::getrandom(&mut bytes).map_err(|e| RandomError::Entropy(e.to_string()))?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Lowercase hex without prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl FromStr for Seed {
    type Err = RandomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed({})", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_is_optional() {
        let bare = Seed::parse(&"d4".repeat(32)).unwrap();
        let prefixed = Seed::parse(&format!("0x{}", "d4".repeat(32))).unwrap();
        assert_eq!(bare.as_bytes(), prefixed.as_bytes());
        assert_eq!(bare.as_bytes(), &[0xd4u8; 32][..]);
    }

    #[test]
    fn mixed_case_hex_is_accepted() {
        let seed = Seed::parse("AbCd").unwrap();
        assert_eq!(seed.as_bytes(), &[0xab, 0xcd]);
        assert_eq!(seed.to_hex(), "abcd");
    }

    #[test]
    fn odd_length_is_rejected() {
        assert!(matches!(Seed::parse("abc"), Err(RandomError::InvalidSeed(_))));
    }

    #[test]
    fn non_hex_is_rejected() {
        assert!(matches!(Seed::parse("zz"), Err(RandomError::InvalidSeed(_))));
        assert!(matches!(Seed::parse("0xg0"), Err(RandomError::InvalidSeed(_))));
    }

    #[test]
    fn empty_after_prefix_is_rejected() {
        assert!(Seed::parse("").is_err());
        assert!(Seed::parse("0x").is_err());
    }

    #[test]
    fn uppercase_prefix_is_not_stripped() {
        assert!(Seed::parse("0Xab").is_err());
    }

    #[test]
    fn generated_seed_is_64_hex_chars() {
        let seed = Seed::generate().unwrap();
        let hex = seed.to_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
        assert_eq!(Seed::parse(&hex).unwrap(), seed);
    }

    #[test]
    fn generated_seeds_differ() {
        assert_ne!(Seed::generate().unwrap(), Seed::generate().unwrap());
    }
}
