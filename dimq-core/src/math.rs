//! Dimension-preserving math helpers.
//!
//! Every function here takes and returns quantities of one dimension `D` and delegates to the scalar operation on
//! the base-unit values. The rounding helpers (`ceil`, `floor`, `trunc`, `round`) round to a multiple of a step of
//! the same dimension, so `round(Length::new(1.26), Length::new(0.1))` is `1.3 m` whatever unit the step was
//! entered in.

use crate::{float, Dimension, Quantity};

/// Absolute value.
#[inline]
pub fn abs<D: Dimension>(q: Quantity<D>) -> Quantity<D> {
    q.abs()
}

/// The larger of two quantities.
#[inline]
pub fn max<D: Dimension>(a: Quantity<D>, b: Quantity<D>) -> Quantity<D> {
    a.max(b)
}

/// The smaller of two quantities.
#[inline]
pub fn min<D: Dimension>(a: Quantity<D>, b: Quantity<D>) -> Quantity<D> {
    a.min(b)
}

/// `sqrt(a² + b²)` without intermediate overflow.
#[inline]
pub fn hypot<D: Dimension>(a: Quantity<D>, b: Quantity<D>) -> Quantity<D> {
    Quantity::new(float::hypot(a.value(), b.value()))
}

/// Truncated remainder of `a / b`; the result has the sign of `a`.
#[inline]
pub fn modulo<D: Dimension>(a: Quantity<D>, b: Quantity<D>) -> Quantity<D> {
    a % b
}

/// Magnitude of `magnitude` with the sign of `sign`, which may have any dimension.
#[inline]
pub fn copysign<D: Dimension, S: Dimension>(magnitude: Quantity<D>, sign: Quantity<S>) -> Quantity<D> {
    Quantity::new(float::copysign(magnitude.value(), sign.value()))
}

/// `-1` for negative values, `1` otherwise (zero and NaN included).
#[inline]
pub fn sgn<D: Dimension>(q: Quantity<D>) -> i32 {
    if q.value() < 0.0 {
        -1
    } else {
        1
    }
}

/// `true` if the sign bit is set, including `-0.0` and negative NaN.
#[inline]
pub fn signbit<D: Dimension>(q: Quantity<D>) -> bool {
    q.value().is_sign_negative()
}

/// Restricts `q` to `[lo, hi]`.
///
/// Unlike `f64::clamp` this does not panic when `lo > hi`; the result is then `hi` for values above `hi` and `lo`
/// otherwise.
#[inline]
pub fn clamp<D: Dimension>(q: Quantity<D>, lo: Quantity<D>, hi: Quantity<D>) -> Quantity<D> {
    if hi < q {
        hi
    } else if q < lo {
        lo
    } else {
        q
    }
}

macro_rules! to_multiple {
    ($($(#[$meta:meta])* $name:ident;)+) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name<D: Dimension>(q: Quantity<D>, step: Quantity<D>) -> Quantity<D> {
                Quantity::new(float::$name(q.value() / step.value()) * step.value())
            }
        )+
    };
}

to_multiple! {
    /// Smallest multiple of `step` not below `q`.
    ceil;
    /// Largest multiple of `step` not above `q`.
    floor;
    /// Multiple of `step` nearest to `q` in the direction of zero.
    trunc;
    /// Multiple of `step` nearest to `q`; halfway cases round away from zero.
    round;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    type Length = Quantity<dimension!(Z0, P1, Z0, Z0, Z0, Z0, Z0, Z0)>;
    type Time = Quantity<dimension!(Z0, Z0, P1, Z0, Z0, Z0, Z0, Z0)>;

    #[test]
    fn abs_min_max() {
        assert_eq!(abs(Length::new(-2.0)), Length::new(2.0));
        assert_eq!(min(Length::new(1.0), Length::new(2.0)), Length::new(1.0));
        assert_eq!(max(Length::new(1.0), Length::new(2.0)), Length::new(2.0));
    }

    #[test]
    fn hypot_of_three_four() {
        assert_eq!(hypot(Length::new(3.0), Length::new(4.0)), Length::new(5.0));
    }

    #[test]
    fn modulo_is_truncated() {
        assert_eq!(modulo(Length::new(5.5), Length::new(2.0)), Length::new(1.5));
        assert_eq!(modulo(Length::new(-5.5), Length::new(2.0)), Length::new(-1.5));
    }

    #[test]
    fn copysign_across_dimensions() {
        assert_eq!(copysign(Length::new(3.0), Time::new(-1.0)), Length::new(-3.0));
        assert_eq!(copysign(Length::new(-3.0), Time::new(1.0)), Length::new(3.0));
    }

    #[test]
    fn sgn_and_signbit() {
        assert_eq!(sgn(Length::new(-0.1)), -1);
        assert_eq!(sgn(Length::new(0.0)), 1);
        assert_eq!(sgn(Length::new(4.0)), 1);
        assert!(signbit(Length::new(-0.0)));
        assert!(!signbit(Length::new(0.0)));
    }

    #[test]
    fn clamp_bounds() {
        let lo = Length::new(-1.0);
        let hi = Length::new(1.0);
        assert_eq!(clamp(Length::new(5.0), lo, hi), hi);
        assert_eq!(clamp(Length::new(-5.0), lo, hi), lo);
        assert_eq!(clamp(Length::new(0.5), lo, hi), Length::new(0.5));
    }

    #[test]
    fn clamp_inverted_bounds() {
        let lo = Length::new(5.0);
        let hi = Length::new(1.0);
        assert_eq!(clamp(Length::new(3.0), lo, hi), hi);
        assert_eq!(clamp(Length::new(7.0), lo, hi), hi);
        assert_eq!(clamp(Length::new(0.0), lo, hi), lo);
    }

    #[test]
    fn rounding_to_multiple() {
        let step = Length::new(0.25);
        assert_abs_diff_eq!(ceil(Length::new(1.1), step).value(), 1.25);
        assert_abs_diff_eq!(floor(Length::new(1.1), step).value(), 1.0);
        assert_abs_diff_eq!(trunc(Length::new(-1.1), step).value(), -1.0);
        assert_abs_diff_eq!(round(Length::new(1.2), step).value(), 1.25);
        assert_abs_diff_eq!(round(Length::new(1.26), Length::new(0.1)).value(), 1.3, epsilon = 1e-12);
    }

    proptest! {
        #[test]
        fn prop_round_lands_on_multiple(v in -1e4..1e4f64, step in 0.01..10.0f64) {
            let r = round(Length::new(v), Length::new(step)).value() / step;
            prop_assert!((r - r.round()).abs() < 1e-6);
        }

        #[test]
        fn prop_floor_not_above_ceil(v in -1e4..1e4f64, step in 0.01..10.0f64) {
            let f = floor(Length::new(v), Length::new(step));
            let c = ceil(Length::new(v), Length::new(step));
            prop_assert!(f <= c);
            prop_assert!(c - f <= Length::new(step * (1.0 + 1e-9)));
        }
    }
}
