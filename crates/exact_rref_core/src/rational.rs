//! Exact rational number type
//!
//! A fixed-width fraction over `i64`. Intermediate products are formed in
//! `i128` and reduced before narrowing, so a result only overflows when its
//! lowest-terms form does not fit in `i64`.

use crate::error::RationalError;
use num_integer::Integer;
use num_traits::ToPrimitive;
use std::fmt;
use std::str::FromStr;

/// Exact rational number (numerator / denominator)
///
/// Always kept in lowest terms with a strictly positive denominator; the
/// numerator carries the sign and zero is stored as `0/1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

impl Rational {
    pub const ZERO: Rational = Rational {
        numerator: 0,
        denominator: 1,
    };

    pub const ONE: Rational = Rational {
        numerator: 1,
        denominator: 1,
    };

    /// Create a new rational number from numerator and denominator
    ///
    /// Fails with [`RationalError::DivisionByZero`] when `den == 0`.
    pub fn new(num: i64, den: i64) -> Result<Self, RationalError> {
        Self::from_wide(i128::from(num), i128::from(den))
    }

    /// Create a rational from an integer
    pub const fn from_int(n: i64) -> Self {
        Self {
            numerator: n,
            denominator: 1,
        }
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Check if this rational is zero
    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Check if this rational is exactly one
    pub fn is_one(&self) -> bool {
        *self == Self::ONE
    }

    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    /// `1 / self`
    pub fn reciprocal(self) -> Result<Self, RationalError> {
        if self.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        Self::new(self.denominator, self.numerator)
    }

    pub fn checked_neg(self) -> Result<Self, RationalError> {
        let numerator = self
            .numerator
            .checked_neg()
            .ok_or(RationalError::ArithmeticOverflow)?;
        Ok(Self {
            numerator,
            denominator: self.denominator,
        })
    }

    /// `self + other`, scaling both numerators to the lcm of the denominators
    pub fn checked_add(self, other: Self) -> Result<Self, RationalError> {
        let (lhs, rhs, den) = self.common_denominator(other);
        let num = lhs
            .checked_add(rhs)
            .ok_or(RationalError::ArithmeticOverflow)?;
        Self::from_wide(num, den)
    }

    /// `self - other`, scaling both numerators to the lcm of the denominators
    pub fn checked_sub(self, other: Self) -> Result<Self, RationalError> {
        let (lhs, rhs, den) = self.common_denominator(other);
        let num = lhs
            .checked_sub(rhs)
            .ok_or(RationalError::ArithmeticOverflow)?;
        Self::from_wide(num, den)
    }

    /// `self * other`
    pub fn checked_mul(self, other: Self) -> Result<Self, RationalError> {
        let num = i128::from(self.numerator) * i128::from(other.numerator);
        let den = i128::from(self.denominator) * i128::from(other.denominator);
        Self::from_wide(num, den)
    }

    /// `self / other`, failing with [`RationalError::DivisionByZero`] when
    /// `other` is zero
    pub fn checked_div(self, other: Self) -> Result<Self, RationalError> {
        if other.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        let num = i128::from(self.numerator) * i128::from(other.denominator);
        let den = i128::from(self.denominator) * i128::from(other.numerator);
        Self::from_wide(num, den)
    }

    /// Both numerators rewritten over `lcm(self.den, other.den)`
    fn common_denominator(self, other: Self) -> (i128, i128, i128) {
        let (a_den, b_den) = (i128::from(self.denominator), i128::from(other.denominator));
        let lcm = a_den.lcm(&b_den);
        (
            i128::from(self.numerator) * (lcm / a_den),
            i128::from(other.numerator) * (lcm / b_den),
            lcm,
        )
    }

    /// Reduce to lowest terms, move the sign onto the numerator and narrow
    fn from_wide(num: i128, den: i128) -> Result<Self, RationalError> {
        if den == 0 {
            return Err(RationalError::DivisionByZero);
        }
        if num == 0 {
            return Ok(Self::ZERO);
        }

        let negative = (num < 0) != (den < 0);
        let (num, den) = (num.unsigned_abs(), den.unsigned_abs());
        let g = num.gcd(&den);

        let magnitude = i128::try_from(num / g).map_err(|_| RationalError::ArithmeticOverflow)?;
        let signed = if negative { -magnitude } else { magnitude };

        Ok(Self {
            numerator: i64::try_from(signed).map_err(|_| RationalError::ArithmeticOverflow)?,
            denominator: i64::try_from(den / g).map_err(|_| RationalError::ArithmeticOverflow)?,
        })
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_int(n)
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_int(i64::from(n))
    }
}

/// Parses `"n"` or `"n/d"`
impl FromStr for Rational {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| {
            part.trim()
                .parse::<i64>()
                .map_err(|_| RationalError::Parse(s.to_string()))
        };
        match s.split_once('/') {
            Some((num, den)) => Self::new(parse(num)?, parse(den)?),
            None => Ok(Self::from_int(parse(s)?)),
        }
    }
}

impl ToPrimitive for Rational {
    fn to_i64(&self) -> Option<i64> {
        self.is_integer().then_some(self.numerator)
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_i64().and_then(|n| u64::try_from(n).ok())
    }

    /// Lossy conversion, for display only
    fn to_f64(&self) -> Option<f64> {
        Some(self.numerator as f64 / self.denominator as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(num: i64, den: i64) -> Rational {
        Rational::new(num, den).unwrap()
    }

    #[test]
    fn test_rational_arithmetic() {
        let a = r(1, 2);
        let b = r(1, 3);

        assert_eq!(a.checked_add(b), Ok(r(5, 6)));
        assert_eq!(a.checked_sub(b), Ok(r(1, 6)));
        assert_eq!(a.checked_mul(b), Ok(r(1, 6)));
        assert_eq!(a.checked_div(b), Ok(r(3, 2)));
    }

    #[test]
    fn test_rational_reduction() {
        let x = r(4, 8);
        assert_eq!((x.numerator(), x.denominator()), (1, 2));

        let zero = r(0, -7);
        assert_eq!(zero, Rational::ZERO);
        assert_eq!(zero.denominator(), 1);
    }

    #[test]
    fn test_sign_normalization() {
        let x = r(3, -6);
        assert_eq!((x.numerator(), x.denominator()), (-1, 2));

        let y = r(-3, -6);
        assert_eq!((y.numerator(), y.denominator()), (1, 2));

        // Negative denominators that are not -1 after reduction
        let z = r(2, 3).checked_div(r(-5, 7)).unwrap();
        assert_eq!((z.numerator(), z.denominator()), (-14, 15));
    }

    #[test]
    fn test_zero_denominator() {
        assert_eq!(Rational::new(1, 0), Err(RationalError::DivisionByZero));
        assert_eq!(
            Rational::ONE.checked_div(Rational::ZERO),
            Err(RationalError::DivisionByZero)
        );
        assert_eq!(Rational::ZERO.reciprocal(), Err(RationalError::DivisionByZero));
    }

    #[test]
    fn test_reciprocal() {
        assert_eq!(r(-2, 3).reciprocal(), Ok(r(-3, 2)));
        assert_eq!(Rational::from_int(i64::MIN).reciprocal(), Err(RationalError::ArithmeticOverflow));
    }

    #[test]
    fn test_overflow_is_reported() {
        let max = Rational::from_int(i64::MAX);
        assert_eq!(max.checked_add(Rational::ONE), Err(RationalError::ArithmeticOverflow));
        assert_eq!(max.checked_mul(Rational::from_int(2)), Err(RationalError::ArithmeticOverflow));
        assert_eq!(Rational::from_int(i64::MIN).checked_neg(), Err(RationalError::ArithmeticOverflow));
        assert_eq!(
            r(1, i64::MAX).checked_add(r(1, i64::MAX - 1)),
            Err(RationalError::ArithmeticOverflow)
        );
    }

    #[test]
    fn test_wide_intermediate_reduces_before_narrowing() {
        // The raw numerator 2 * MAX does not fit in i64
        let x = r(i64::MAX, 2).checked_mul(Rational::from_int(2)).unwrap();
        assert_eq!(x, Rational::from_int(i64::MAX));

        let y = r(i64::MAX, 3).checked_mul(r(3, i64::MAX)).unwrap();
        assert!(y.is_one());
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(r(-3, 4).to_string(), "-3/4");
        assert_eq!(Rational::from_int(7).to_string(), "7");

        assert_eq!("6/-8".parse::<Rational>(), Ok(r(-3, 4)));
        assert_eq!(" 12 ".parse::<Rational>(), Ok(Rational::from_int(12)));
        assert_eq!("1/0".parse::<Rational>(), Err(RationalError::DivisionByZero));
        assert!(matches!("x/2".parse::<Rational>(), Err(RationalError::Parse(_))));
    }

    #[test]
    fn test_to_primitive() {
        assert_eq!(ToPrimitive::to_i64(&r(6, 3)), Some(2));
        assert_eq!(ToPrimitive::to_i64(&r(1, 3)), None);
        assert_eq!(ToPrimitive::to_u64(&r(-4, 1)), None);
        assert_eq!(r(1, 4).to_f64(), Some(0.25));
    }
}
