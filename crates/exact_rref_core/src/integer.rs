//! Overflow-checked gcd / lcm over `i64`
//!
//! Magnitudes are handled as `u64` so that `i64::MIN` never has to be negated;
//! results that do not fit back into `i64` surface as
//! [`RationalError::ArithmeticOverflow`].

use crate::error::RationalError;
use num_integer::Integer;

/// Greatest common divisor of `|a|` and `|b|`
///
/// `gcd(0, n) == |n|` and `gcd(0, 0) == 0`.
pub fn gcd(a: i64, b: i64) -> Result<i64, RationalError> {
    let g = a.unsigned_abs().gcd(&b.unsigned_abs());
    i64::try_from(g).map_err(|_| RationalError::ArithmeticOverflow)
}

/// Least common multiple of `|a|` and `|b|`, zero if either is zero
pub fn lcm(a: i64, b: i64) -> Result<i64, RationalError> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    let (a, b) = (a.unsigned_abs(), b.unsigned_abs());
    let g = a.gcd(&b);
    (a / g)
        .checked_mul(b)
        .and_then(|l| i64::try_from(l).ok())
        .ok_or(RationalError::ArithmeticOverflow)
}

/// gcd folded over a slice (0 for an empty slice)
pub fn gcd_all(values: &[i64]) -> Result<i64, RationalError> {
    values.iter().try_fold(0, |acc, &v| gcd(acc, v))
}

/// lcm folded over a slice (1 for an empty slice)
pub fn lcm_all(values: &[i64]) -> Result<i64, RationalError> {
    values.iter().try_fold(1, |acc, &v| lcm(acc, v))
}
