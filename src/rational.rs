/*!
    Rational number type for time bases and frame rates.
*/

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use crate::ParseRationalError;

/**
    A rational number represented as a numerator and denominator.

    Used for time bases (e.g., 1/90000 for MPEG-TS) and frame rates
    (e.g., 24000/1001 for 23.976 fps).

    Values are never reduced automatically: `2/4` and `1/2` are distinct
    values under `==` (equality is field-wise) even though they denote the
    same fraction. Downstream code may depend on unreduced components
    surviving arithmetic bit-for-bit, so reduction is strictly opt-in via
    [`Rational::reduced`]. Mathematical comparison that treats `2/4` and
    `1/2` as equal is available through [`Rational::compare`].
*/
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rational {
    pub num: i32,
    pub den: i32,
}

impl Rational {
    /**
        Create a new rational number.

        # Panics

        Panics if `den` is zero.
    */
    #[inline]
    pub const fn new(num: i32, den: i32) -> Self {
        assert!(den != 0, "denominator cannot be zero");
        Self { num, den }
    }

    /**
        Convert to f64.
    */
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /**
        Approximate an f64 as a rational with a bounded denominator.

        Useful for frame rates given as floats (e.g. 23.976). The result is
        reduced to lowest terms; values outside the 32-bit component range
        are clamped.
    */
    pub fn from_f64(value: f64) -> Self {
        const PRECISION: i32 = 1_000_000;
        let num = (value * PRECISION as f64).round();
        let num = num.clamp(i32::MIN as f64, i32::MAX as f64) as i32;
        Self::new(num, PRECISION).reduced()
    }

    /**
        Invert the rational (swap numerator and denominator).

        # Panics

        Panics if numerator is zero.
    */
    #[inline]
    pub const fn invert(self) -> Self {
        assert!(self.num != 0, "cannot invert zero");
        Self {
            num: self.den,
            den: self.num,
        }
    }

    /**
        Reduce to lowest terms with a positive denominator.

        Arithmetic operators deliberately never call this; callers that need
        canonical form opt in.

        # Panics

        Panics if a component of the sign-normalized result does not fit in
        32 bits (only possible when a component is `i32::MIN`).
    */
    pub const fn reduced(self) -> Self {
        let mut num = self.num as i64;
        let mut den = self.den as i64;
        if den < 0 {
            num = -num;
            den = -den;
        }
        let g = gcd(num.unsigned_abs(), den as u64) as i64;
        if g > 1 {
            num /= g;
            den /= g;
        }
        Self {
            num: component(num),
            den: component(den),
        }
    }

    /**
        Mathematical three-way comparison by cross-multiplication.

        Unlike `==`, this treats `2/4` and `1/2` as equal. The products are
        formed in 64-bit arithmetic, so any pair of 32-bit rationals compares
        exactly.
    */
    pub fn compare(self, other: Rational) -> Ordering {
        let lhs = self.num as i64 * other.den as i64;
        let rhs = other.num as i64 * self.den as i64;
        let ord = lhs.cmp(&rhs);
        if (self.den as i64) * (other.den as i64) < 0 {
            ord.reverse()
        } else {
            ord
        }
    }
}

/// Euclidean GCD on magnitudes.
const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Narrow an intermediate back to a 32-bit component.
const fn component(value: i64) -> i32 {
    assert!(
        value >= i32::MIN as i64 && value <= i32::MAX as i64,
        "rational component does not fit in 32 bits"
    );
    value as i32
}

impl Add for Rational {
    type Output = Rational;

    /**
        Add two rationals: `a/b + c/d = (a·d + c·b) / (b·d)`.

        The result is not reduced to lowest terms.

        # Panics

        Panics if a component of the unreduced result does not fit in 32 bits.
    */
    fn add(self, other: Rational) -> Rational {
        let num = self.num as i64 * other.den as i64 + other.num as i64 * self.den as i64;
        let den = self.den as i64 * other.den as i64;
        Rational {
            num: component(num),
            den: component(den),
        }
    }
}

impl Sub for Rational {
    type Output = Rational;

    /**
        Subtract two rationals: `a/b - c/d = (a·d - c·b) / (b·d)`.

        The result is not reduced to lowest terms.

        # Panics

        Panics if a component of the unreduced result does not fit in 32 bits.
    */
    fn sub(self, other: Rational) -> Rational {
        let num = self.num as i64 * other.den as i64 - other.num as i64 * self.den as i64;
        let den = self.den as i64 * other.den as i64;
        Rational {
            num: component(num),
            den: component(den),
        }
    }
}

impl Mul for Rational {
    type Output = Rational;

    /**
        Multiply two rationals: `(a/b) · (c/d) = (a·c) / (b·d)`.

        The result is not reduced to lowest terms.

        # Panics

        Panics if a component of the unreduced result does not fit in 32 bits.
    */
    fn mul(self, other: Rational) -> Rational {
        let num = self.num as i64 * other.num as i64;
        let den = self.den as i64 * other.den as i64;
        Rational {
            num: component(num),
            den: component(den),
        }
    }
}

impl Div for Rational {
    type Output = Rational;

    /**
        Divide two rationals: `(a/b) / (c/d) = (a·d) / (b·c)`.

        The result is not reduced to lowest terms.

        # Panics

        Panics with a division-by-zero message if the divisor numerator is
        zero, or if a component of the unreduced result does not fit in
        32 bits.
    */
    fn div(self, other: Rational) -> Rational {
        assert!(other.num != 0, "division by zero: divisor numerator is zero");
        let num = self.num as i64 * other.den as i64;
        let den = self.den as i64 * other.num as i64;
        Rational {
            num: component(num),
            den: component(den),
        }
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl From<(i32, i32)> for Rational {
    fn from((num, den): (i32, i32)) -> Self {
        Self::new(num, den)
    }
}

impl From<i32> for Rational {
    fn from(num: i32) -> Self {
        Self::new(num, 1)
    }
}

impl FromStr for Rational {
    type Err = ParseRationalError;

    /**
        Parse a rational from `num/den` or bare `num` form.

        These are the shapes stream probes report frame rates in:
        `"24000/1001"`, `"30/1"`, `"25"`.
    */
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (num, den) = match s.split_once('/') {
            Some((num, den)) => (num, den),
            None => (s, "1"),
        };
        let num: i64 = num
            .trim()
            .parse()
            .map_err(|_| ParseRationalError::Malformed)?;
        let den: i64 = den
            .trim()
            .parse()
            .map_err(|_| ParseRationalError::Malformed)?;
        if num < i32::MIN as i64 || num > i32::MAX as i64 || den < i32::MIN as i64 || den > i32::MAX as i64 {
            return Err(ParseRationalError::OutOfRange);
        }
        if den == 0 {
            return Err(ParseRationalError::ZeroDenominator);
        }
        Ok(Self {
            num: num as i32,
            den: den as i32,
        })
    }
}

// Ensure Rational is Send + Sync
static_assertions::assert_impl_all!(Rational: Send, Sync, Copy);
