/*!
    Exact rescaling and comparison of integer timestamps across time bases.

    A timestamp is an `i64` tick count whose meaning comes from the
    [`Rational`] time base it is paired with at the call site. Converting
    ticks from one time base to another multiplies by a ratio of two
    fractions, and the exact result is generally not an integer; the
    functions here form that ratio in 128-bit intermediates (so in-range
    inputs can never overflow) and round it under a selectable
    [`Rounding`] policy.

    Everything in this module is a pure function: no state is retained
    between calls and inputs are never mutated.
*/

use std::cmp::Ordering;

use crate::Rational;

/**
    Rounding policy applied when an exact rational result must become an
    integer.
*/
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rounding {
    /// Round toward zero (truncate).
    Zero,
    /// Round toward negative infinity.
    Down,
    /// Round toward positive infinity.
    Up,
    /// Round to the nearest integer; ties round away from zero.
    #[default]
    Nearest,
}

/**
    Convert `a` from units of `from` into units of `to`.

    Computes the exact value of `a · (from.num/from.den) · (to.den/to.num)`
    in 128-bit arithmetic and rounds it under `rounding`. Intermediate
    products cannot overflow for any 64-bit `a` and 32-bit time base
    components.

    If the rounded result itself does not fit in 64 bits, `i64::MIN` is
    returned to mark the value unrepresentable.

    # Panics

    Panics with a division-by-zero message if `to.num` or `from.den` is
    zero.
*/
pub fn rescale(a: i64, from: Rational, to: Rational, rounding: Rounding) -> i64 {
    assert!(
        from.den != 0,
        "division by zero: source time base denominator is zero"
    );
    assert!(
        to.num != 0,
        "division by zero: destination time base numerator is zero"
    );

    let mut num = a as i128 * from.num as i128 * to.den as i128;
    let mut den = from.den as i128 * to.num as i128;
    if den < 0 {
        num = -num;
        den = -den;
    }

    // i128 division truncates toward zero; rem carries the sign of num
    let quot = num / den;
    let rem = num % den;

    let rounded = match rounding {
        Rounding::Zero => quot,
        Rounding::Down => {
            if rem != 0 && num < 0 {
                quot - 1
            } else {
                quot
            }
        }
        Rounding::Up => {
            if rem != 0 && num > 0 {
                quot + 1
            } else {
                quot
            }
        }
        Rounding::Nearest => {
            if 2 * rem.abs() >= den {
                if num < 0 { quot - 1 } else { quot + 1 }
            } else {
                quot
            }
        }
    };

    if rounded < i64::MIN as i128 || rounded > i64::MAX as i128 {
        return i64::MIN;
    }
    rounded as i64
}

/**
    [`rescale`] with the sentinel-preserving modifier.

    `i64::MIN` and `i64::MAX` conventionally mean "unknown" and "unbounded"
    timestamps; this variant returns them unchanged instead of attempting
    the conversion, so the sentinel survives a chain of time base changes.
    Any base `rounding` mode may be combined with the modifier.
*/
pub fn rescale_pass_minmax(a: i64, from: Rational, to: Rational, rounding: Rounding) -> i64 {
    if a == i64::MIN || a == i64::MAX {
        return a;
    }
    rescale(a, from, to, rounding)
}

/**
    Convert a timestamp between time bases, rounding to nearest.

    This is the conventional policy for presentation and decode timestamps.

    # Panics

    Panics with a division-by-zero message if `to.num` or `from.den` is
    zero.
*/
#[inline]
pub fn rescale_timestamp(ts: i64, from: Rational, to: Rational) -> i64 {
    rescale(ts, from, to, Rounding::Nearest)
}

/**
    Compare two timestamps that live in different time bases.

    Rescaling one timestamp into the other's time base before comparing
    could round, and rounding can flip the comparison near ties. Instead
    the two quantities are cross-multiplied into a common scale in 128-bit
    arithmetic and compared exactly.

    Time bases are expected to carry positive denominators (the library
    convention).
*/
pub fn compare_timestamps(ts1: i64, tb1: Rational, ts2: i64, tb2: Rational) -> Ordering {
    let lhs = ts1 as i128 * tb1.num as i128 * tb2.den as i128;
    let rhs = ts2 as i128 * tb2.num as i128 * tb1.den as i128;
    lhs.cmp(&rhs)
}
