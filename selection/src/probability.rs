//! Winning probability as a percentage of the remaining pool.

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use tide_types::Weight;

/// Fixed-point scale: results carry six decimal places.
const SCALE: u32 = 1_000_000;

/// `weight / total * 100`, truncated to six decimal places.
///
/// The division happens on integers after scaling, so huge weights lose no
/// precision before the final conversion. Returns 0 when `total` is zero.
pub fn probability_percent(weight: &Weight, total: &Weight) -> f64 {
    if total.is_zero() {
        return 0.0;
    }

    let scaled = weight.raw() * BigUint::from(100 * SCALE) / total.raw();
    scaled.to_f64().unwrap_or(f64::INFINITY) / f64::from(SCALE)
}
