//! Unbiased integer sampling by rejection.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::{RandomError, RandomSource};

/// Draw an integer uniformly from `[0, max)`.
///
/// Reads `ceil(bits(max) / 8)` bytes per candidate, interprets them as a
/// big-endian unsigned integer and redraws until the candidate is below
/// `max`. No modulo reduction and no retry cap: either would bias the result.
pub fn sample_below(max: &BigUint, source: &mut dyn RandomSource) -> Result<BigUint, RandomError> {
    if max.is_zero() {
        return Err(RandomError::InvalidBound);
    }

    let byte_len = max.bits().div_ceil(8) as usize;
    loop {
        let bytes = source.next_bytes(byte_len)?;
        let candidate = BigUint::from_bytes_be(&bytes);
        if &candidate < max {
            return Ok(candidate);
        }
        tracing::trace!(%candidate, %max, "rejected sample");
    }
}
