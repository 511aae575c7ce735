//! Type-level rational exponents.
//!
//! Every slot of a dimension vector is a [`Ratio<N, D>`]: a fraction of two [`typenum`] integers that only exists
//! at compile time. Arithmetic on exponents is expressed as type operators ([`RatioAdd`], [`RatioSub`],
//! [`RatioMul`]) whose `Output` is always brought back to lowest terms by [`Reduce`]. Because every ratio the crate
//! produces is reduced and has a positive denominator, two exponents are equal exactly when their types are equal,
//! which is what lets the compiler reject `metre + second`.
//!
//! [`Rational`] is the runtime mirror of a ratio. It never takes part in arithmetic on quantities; it exists so that
//! dimension vectors can be printed and inspected in tests.

use core::fmt::{Display, Formatter, Result as FmtResult};
use core::marker::PhantomData;
use core::ops::{Add, Div, Mul, Neg, Sub};
use typenum::{Diff, Gcd, Gcf, Integer, NonZero, Prod, Quot, Sum, P1, Z0};

/// A compile-time fraction `N / D` of typenum integers.
///
/// `D` must be a positive integer. The crate only ever produces ratios in lowest terms; writing a non-reduced ratio
/// by hand (e.g. `Ratio<P2, P4>`) yields a type that is *not* equal to `Ratio<P1, P2>`.
pub struct Ratio<N, D = P1>(PhantomData<(N, D)>);

/// The zero exponent.
pub type Zero = Ratio<Z0, P1>;

/// An integral exponent `N / 1`.
pub type Whole<N> = Ratio<N, P1>;

/// Reflection of a type-level ratio into a runtime [`Rational`].
pub trait Exponent: 'static {
    /// The value of this exponent.
    const VALUE: Rational;
}

impl<N, D> Exponent for Ratio<N, D>
where
    N: Integer + 'static,
    D: Integer + NonZero + 'static,
{
    const VALUE: Rational = Rational::new(N::I32, D::I32);
}

/// Brings a ratio to lowest terms.
pub trait Reduce {
    /// The reduced ratio.
    type Output: Exponent;
}

impl<N, D> Reduce for Ratio<N, D>
where
    N: Integer + Gcd<D> + Div<Gcf<N, D>>,
    D: Integer + NonZero + Div<Gcf<N, D>>,
    Quot<N, Gcf<N, D>>: Integer + 'static,
    Quot<D, Gcf<N, D>>: Integer + NonZero + 'static,
{
    type Output = Ratio<Quot<N, Gcf<N, D>>, Quot<D, Gcf<N, D>>>;
}

/// Sum of two exponents.
pub trait RatioAdd<Rhs> {
    /// `Self + Rhs`, reduced.
    type Output: Exponent;
}

impl<N1, D1, N2, D2> RatioAdd<Ratio<N2, D2>> for Ratio<N1, D1>
where
    N1: Mul<D2>,
    N2: Mul<D1>,
    D1: Mul<D2>,
    Prod<N1, D2>: Add<Prod<N2, D1>>,
    Ratio<Sum<Prod<N1, D2>, Prod<N2, D1>>, Prod<D1, D2>>: Reduce,
{
    type Output = <Ratio<Sum<Prod<N1, D2>, Prod<N2, D1>>, Prod<D1, D2>> as Reduce>::Output;
}

/// Difference of two exponents.
pub trait RatioSub<Rhs> {
    /// `Self - Rhs`, reduced.
    type Output: Exponent;
}

impl<N1, D1, N2, D2> RatioSub<Ratio<N2, D2>> for Ratio<N1, D1>
where
    N1: Mul<D2>,
    N2: Mul<D1>,
    D1: Mul<D2>,
    Prod<N1, D2>: Sub<Prod<N2, D1>>,
    Ratio<Diff<Prod<N1, D2>, Prod<N2, D1>>, Prod<D1, D2>>: Reduce,
{
    type Output = <Ratio<Diff<Prod<N1, D2>, Prod<N2, D1>>, Prod<D1, D2>> as Reduce>::Output;
}

/// Product of two exponents.
///
/// Raising a quantity to the power `k` multiplies every exponent by `k / 1`; taking the `k`-th root multiplies
/// every exponent by `1 / k`.
pub trait RatioMul<Rhs> {
    /// `Self * Rhs`, reduced.
    type Output: Exponent;
}

impl<N1, D1, N2, D2> RatioMul<Ratio<N2, D2>> for Ratio<N1, D1>
where
    N1: Mul<N2>,
    D1: Mul<D2>,
    Ratio<Prod<N1, N2>, Prod<D1, D2>>: Reduce,
{
    type Output = <Ratio<Prod<N1, N2>, Prod<D1, D2>> as Reduce>::Output;
}

// ─────────────────────────────────────────────────────────────────────────────
// Runtime mirror
// ─────────────────────────────────────────────────────────────────────────────

/// A reduced fraction with a positive denominator, evaluated at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    num: i32,
    den: i32,
}

const fn gcd(mut a: i32, mut b: i32) -> i32 {
    a = a.abs();
    b = b.abs();
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

impl Rational {
    /// Zero.
    pub const ZERO: Rational = Rational { num: 0, den: 1 };
    /// One.
    pub const ONE: Rational = Rational { num: 1, den: 1 };

    /// Builds `num / den` in lowest terms.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero.
    pub const fn new(num: i32, den: i32) -> Self {
        assert!(den != 0, "rational with zero denominator");
        let g = gcd(num, den);
        let sign = if den < 0 { -1 } else { 1 };
        Self {
            num: sign * num / g,
            den: sign * den / g,
        }
    }

    /// An integral rational.
    pub const fn integer(n: i32) -> Self {
        Self { num: n, den: 1 }
    }

    /// Numerator.
    pub const fn numer(self) -> i32 {
        self.num
    }

    /// Denominator, always positive.
    pub const fn denom(self) -> i32 {
        self.den
    }

    /// `true` if this is zero.
    pub const fn is_zero(self) -> bool {
        self.num == 0
    }

    /// `true` if the denominator is one.
    pub const fn is_integer(self) -> bool {
        self.den == 1
    }

    /// Nearest `f64`.
    pub fn to_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for Rational {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.num * rhs.den + rhs.num * self.den, self.den * rhs.den)
    }
}

impl Sub for Rational {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Mul for Rational {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.num * rhs.num, self.den * rhs.den)
    }
}

impl Neg for Rational {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            num: -self.num,
            den: self.den,
        }
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use typenum::{N1, N2, P2, P3, P4, P6};

    fn value<R: Exponent>() -> Rational {
        R::VALUE
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Type-level operators
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn reduce_brings_to_lowest_terms() {
        assert_eq!(value::<<Ratio<P2, P4> as Reduce>::Output>(), Rational::new(1, 2));
        assert_eq!(value::<<Ratio<Z0, P6> as Reduce>::Output>(), Rational::ZERO);
        assert_eq!(value::<<Ratio<N2, P6> as Reduce>::Output>(), Rational::new(-1, 3));
    }

    #[test]
    fn reduced_zero_is_the_canonical_zero_type() {
        fn same<A, B>()
        where
            A: Reduce<Output = B>,
        {
        }
        same::<Ratio<Z0, P4>, Zero>();
        same::<Ratio<P4, P2>, Whole<P2>>();
    }

    #[test]
    fn add_and_sub_whole_exponents() {
        assert_eq!(value::<<Whole<P1> as RatioAdd<Whole<P2>>>::Output>(), Rational::integer(3));
        assert_eq!(value::<<Whole<P1> as RatioSub<Whole<P3>>>::Output>(), Rational::integer(-2));
        assert_eq!(value::<<Whole<N1> as RatioAdd<Whole<P1>>>::Output>(), Rational::ZERO);
    }

    #[test]
    fn add_fractional_exponents() {
        // 1/2 + 1/3 = 5/6
        type Half = Ratio<P1, P2>;
        type Third = Ratio<P1, P3>;
        assert_eq!(value::<<Half as RatioAdd<Third>>::Output>(), Rational::new(5, 6));
        // 1/2 + 1/2 = 1
        assert_eq!(value::<<Half as RatioAdd<Half>>::Output>(), Rational::ONE);
    }

    #[test]
    fn mul_scales_exponents() {
        assert_eq!(value::<<Whole<P3> as RatioMul<Ratio<P1, P2>>>::Output>(), Rational::new(3, 2));
        assert_eq!(value::<<Whole<N2> as RatioMul<Ratio<P1, P2>>>::Output>(), Rational::integer(-1));
        assert_eq!(value::<<Whole<P2> as RatioMul<Whole<Z0>>>::Output>(), Rational::ZERO);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Runtime mirror
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn rational_new_normalizes_sign() {
        let r = Rational::new(3, -6);
        assert_eq!(r.numer(), -1);
        assert_eq!(r.denom(), 2);
    }

    #[test]
    fn rational_display() {
        assert_eq!(Rational::integer(-2).to_string(), "-2");
        assert_eq!(Rational::new(1, 2).to_string(), "1/2");
        assert_eq!(Rational::new(0, 5).to_string(), "0");
    }

    #[test]
    #[should_panic(expected = "zero denominator")]
    fn rational_zero_denominator_panics() {
        let _ = Rational::new(1, 0);
    }

    proptest! {
        #[test]
        fn prop_rational_add_sub_inverse(a in -50i32..50, b in 1i32..50, c in -50i32..50, d in 1i32..50) {
            let x = Rational::new(a, b);
            let y = Rational::new(c, d);
            prop_assert_eq!((x + y) - y, x);
        }

        #[test]
        fn prop_rational_is_reduced(a in -100i32..100, b in 1i32..100) {
            let r = Rational::new(a, b);
            prop_assert!(r.denom() > 0);
            prop_assert_eq!(gcd(r.numer(), r.denom()).max(1), 1);
        }
    }
}
