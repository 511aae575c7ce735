//! Dimension vectors and their derivation rules.
//!
//! A dimension is a type [`Dim<M, L, T, I, A, O, J, N>`] whose eight parameters are the exponents of the base
//! dimensions, in this order: mass, length, time, current, angle, temperature, luminosity, amount of substance.
//! Each exponent is a type-level [`Ratio`](crate::Ratio).
//!
//! The derivation traits compute a new dimension type from existing ones:
//!
//! | operation         | trait               | rule                                  |
//! |-------------------|---------------------|---------------------------------------|
//! | `a * b`           | [`DimMul`]          | component-wise exponent sum           |
//! | `a / b`           | [`DimDiv`]          | component-wise exponent difference    |
//! | `a.powi::<K>()`   | [`DimScale`]        | every exponent times `K`              |
//! | `a.root::<K>()`   | [`DimScale`]        | every exponent times `1 / K`          |
//! | angular ↔ linear  | [`SwapAngleLength`] | angle and length exponents exchanged  |
//!
//! ```rust
//! use dimq_core::{dimension, Dimension, MulDim, Quantity};
//!
//! type Length = dimension!(Z0, P1, Z0, Z0, Z0, Z0, Z0, Z0);
//! type Time = dimension!(Z0, Z0, P1, Z0, Z0, Z0, Z0, Z0);
//! type Speed = dimension!(Z0, P1, N1, Z0, Z0, Z0, Z0, Z0);
//!
//! // Speed * Time is a length, and the compiler knows it.
//! let d: Quantity<Length> = Quantity::<MulDim<Speed, Time>>::new(3.0);
//! assert_eq!(<MulDim<Speed, Time>>::EXPONENTS, Length::EXPONENTS);
//! assert_eq!(d.value(), 3.0);
//! ```

use crate::ratio::{Exponent, Ratio, RatioAdd, RatioMul, RatioSub, Zero};
use crate::Rational;
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::marker::PhantomData;
use typenum::{PInt, P1};

/// Number of base dimensions tracked by a dimension vector.
pub const BASE_DIMENSIONS: usize = 8;

/// Marker trait for **dimension vectors**.
///
/// Implemented for every [`Dim`] whose eight slots are [`Exponent`]s. [`Quantity<D>`](crate::Quantity) requires
/// `D: Dimension`.
pub trait Dimension: 'static {
    /// Runtime view of the eight exponents, in [`BaseDimension`] order.
    const EXPONENTS: [Rational; BASE_DIMENSIONS];

    /// `true` when every exponent is zero.
    const DIMENSIONLESS: bool = all_zero(&Self::EXPONENTS);

    /// The exponents wrapped in a printable [`DimensionVector`].
    fn vector() -> DimensionVector {
        DimensionVector::new(Self::EXPONENTS)
    }
}

const fn all_zero(exponents: &[Rational; BASE_DIMENSIONS]) -> bool {
    let mut i = 0;
    while i < BASE_DIMENSIONS {
        if !exponents[i].is_zero() {
            return false;
        }
        i += 1;
    }
    true
}

/// A dimension vector: mass, length, time, current, angle, temperature, luminosity, amount.
///
/// Never instantiated; it only exists as a type tag.
pub struct Dim<M, L, T, I, A, O, J, N>(PhantomData<(M, L, T, I, A, O, J, N)>);

impl<M, L, T, I, A, O, J, N> Dimension for Dim<M, L, T, I, A, O, J, N>
where
    M: Exponent,
    L: Exponent,
    T: Exponent,
    I: Exponent,
    A: Exponent,
    O: Exponent,
    J: Exponent,
    N: Exponent,
{
    const EXPONENTS: [Rational; BASE_DIMENSIONS] = [
        M::VALUE,
        L::VALUE,
        T::VALUE,
        I::VALUE,
        A::VALUE,
        O::VALUE,
        J::VALUE,
        N::VALUE,
    ];
}

/// The dimension of pure numbers.
pub type Dimensionless = Dim<Zero, Zero, Zero, Zero, Zero, Zero, Zero, Zero>;

/// Builds a [`Dim`] from eight typenum integer names (`Z0`, `P1`, `N2`, …).
///
/// The slots are, in order: mass, length, time, current, angle, temperature, luminosity, amount.
///
/// ```rust
/// use dimq_core::{dimension, Dimension, Rational};
///
/// type Force = dimension!(P1, P1, N2, Z0, Z0, Z0, Z0, Z0);
/// assert_eq!(Force::EXPONENTS[2], Rational::integer(-2));
/// ```
#[macro_export]
macro_rules! dimension {
    ($m:ident, $l:ident, $t:ident, $i:ident, $a:ident, $o:ident, $j:ident, $n:ident $(,)?) => {
        $crate::Dim<
            $crate::Ratio<$crate::typenum::$m>,
            $crate::Ratio<$crate::typenum::$l>,
            $crate::Ratio<$crate::typenum::$t>,
            $crate::Ratio<$crate::typenum::$i>,
            $crate::Ratio<$crate::typenum::$a>,
            $crate::Ratio<$crate::typenum::$o>,
            $crate::Ratio<$crate::typenum::$j>,
            $crate::Ratio<$crate::typenum::$n>,
        >
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// Derivation rules
// ─────────────────────────────────────────────────────────────────────────────

/// Dimension of a product.
pub trait DimMul<Rhs: Dimension>: Dimension {
    /// `Self ⊕ Rhs`.
    type Output: Dimension;
}

impl<M1, L1, T1, I1, A1, O1, J1, N1, M2, L2, T2, I2, A2, O2, J2, N2> DimMul<Dim<M2, L2, T2, I2, A2, O2, J2, N2>>
    for Dim<M1, L1, T1, I1, A1, O1, J1, N1>
where
    Self: Dimension,
    Dim<M2, L2, T2, I2, A2, O2, J2, N2>: Dimension,
    M1: RatioAdd<M2>,
    L1: RatioAdd<L2>,
    T1: RatioAdd<T2>,
    I1: RatioAdd<I2>,
    A1: RatioAdd<A2>,
    O1: RatioAdd<O2>,
    J1: RatioAdd<J2>,
    N1: RatioAdd<N2>,
{
    type Output = Dim<
        <M1 as RatioAdd<M2>>::Output,
        <L1 as RatioAdd<L2>>::Output,
        <T1 as RatioAdd<T2>>::Output,
        <I1 as RatioAdd<I2>>::Output,
        <A1 as RatioAdd<A2>>::Output,
        <O1 as RatioAdd<O2>>::Output,
        <J1 as RatioAdd<J2>>::Output,
        <N1 as RatioAdd<N2>>::Output,
    >;
}

/// Dimension of a quotient.
pub trait DimDiv<Rhs: Dimension>: Dimension {
    /// `Self ⊖ Rhs`.
    type Output: Dimension;
}

impl<M1, L1, T1, I1, A1, O1, J1, N1, M2, L2, T2, I2, A2, O2, J2, N2> DimDiv<Dim<M2, L2, T2, I2, A2, O2, J2, N2>>
    for Dim<M1, L1, T1, I1, A1, O1, J1, N1>
where
    Self: Dimension,
    Dim<M2, L2, T2, I2, A2, O2, J2, N2>: Dimension,
    M1: RatioSub<M2>,
    L1: RatioSub<L2>,
    T1: RatioSub<T2>,
    I1: RatioSub<I2>,
    A1: RatioSub<A2>,
    O1: RatioSub<O2>,
    J1: RatioSub<J2>,
    N1: RatioSub<N2>,
{
    type Output = Dim<
        <M1 as RatioSub<M2>>::Output,
        <L1 as RatioSub<L2>>::Output,
        <T1 as RatioSub<T2>>::Output,
        <I1 as RatioSub<I2>>::Output,
        <A1 as RatioSub<A2>>::Output,
        <O1 as RatioSub<O2>>::Output,
        <J1 as RatioSub<J2>>::Output,
        <N1 as RatioSub<N2>>::Output,
    >;
}

/// Dimension scaled by a rational factor `R`.
///
/// Powers use `R = K / 1` and roots use `R = 1 / K`; see [`PowDim`] and [`RootDim`].
pub trait DimScale<R>: Dimension {
    /// Every exponent of `Self` multiplied by `R`.
    type Output: Dimension;
}

impl<M, L, T, I, A, O, J, N, R> DimScale<R> for Dim<M, L, T, I, A, O, J, N>
where
    Self: Dimension,
    M: RatioMul<R>,
    L: RatioMul<R>,
    T: RatioMul<R>,
    I: RatioMul<R>,
    A: RatioMul<R>,
    O: RatioMul<R>,
    J: RatioMul<R>,
    N: RatioMul<R>,
{
    type Output = Dim<
        <M as RatioMul<R>>::Output,
        <L as RatioMul<R>>::Output,
        <T as RatioMul<R>>::Output,
        <I as RatioMul<R>>::Output,
        <A as RatioMul<R>>::Output,
        <O as RatioMul<R>>::Output,
        <J as RatioMul<R>>::Output,
        <N as RatioMul<R>>::Output,
    >;
}

/// Exchanges the angle and length exponents.
///
/// This is the dimension-level half of turning a rotational quantity into a linear one through a radius; see
/// [`to_linear`](crate::to_linear).
pub trait SwapAngleLength: Dimension {
    /// `Self` with the length and angle slots exchanged.
    type Output: Dimension;
}

impl<M, L, T, I, A, O, J, N> SwapAngleLength for Dim<M, L, T, I, A, O, J, N>
where
    Self: Dimension,
    Dim<M, A, T, I, L, O, J, N>: Dimension,
{
    type Output = Dim<M, A, T, I, L, O, J, N>;
}

/// Dimension of `A * B`.
pub type MulDim<A, B> = <A as DimMul<B>>::Output;
/// Dimension of `A / B`.
pub type DivDim<A, B> = <A as DimDiv<B>>::Output;
/// Dimension of `D` scaled by the rational `R`.
pub type ScaleDim<D, R> = <D as DimScale<R>>::Output;
/// Dimension of `D` raised to the integer power `K`.
pub type PowDim<D, K> = <D as DimScale<Ratio<K, P1>>>::Output;
/// Dimension of the `K`-th root of `D` (`K` is a typenum unsigned).
pub type RootDim<D, K> = <D as DimScale<Ratio<P1, PInt<K>>>>::Output;
/// Dimension `D` with angle and length exchanged.
pub type Swapped<D> = <D as SwapAngleLength>::Output;

// ─────────────────────────────────────────────────────────────────────────────
// Runtime view
// ─────────────────────────────────────────────────────────────────────────────

/// The base dimensions, in slot order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BaseDimension {
    /// Mass (kilogram).
    Mass,
    /// Length (metre).
    Length,
    /// Time (second).
    Time,
    /// Electric current (ampere).
    Current,
    /// Plane angle (radian).
    Angle,
    /// Thermodynamic temperature (kelvin).
    Temperature,
    /// Luminous intensity (candela).
    Luminosity,
    /// Amount of substance (mole).
    Amount,
}

impl BaseDimension {
    /// All base dimensions in slot order.
    pub const ALL: [BaseDimension; BASE_DIMENSIONS] = [
        BaseDimension::Mass,
        BaseDimension::Length,
        BaseDimension::Time,
        BaseDimension::Current,
        BaseDimension::Angle,
        BaseDimension::Temperature,
        BaseDimension::Luminosity,
        BaseDimension::Amount,
    ];

    /// Slot index inside a dimension vector.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Symbol of the base unit.
    pub const fn symbol(self) -> &'static str {
        match self {
            BaseDimension::Mass => "kg",
            BaseDimension::Length => "m",
            BaseDimension::Time => "s",
            BaseDimension::Current => "A",
            BaseDimension::Angle => "rad",
            BaseDimension::Temperature => "K",
            BaseDimension::Luminosity => "cd",
            BaseDimension::Amount => "mol",
        }
    }
}

/// Runtime copy of a dimension vector, for display and inspection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DimensionVector {
    exponents: [Rational; BASE_DIMENSIONS],
}

impl DimensionVector {
    /// Wraps eight exponents.
    pub const fn new(exponents: [Rational; BASE_DIMENSIONS]) -> Self {
        Self { exponents }
    }

    /// Exponent of one base dimension.
    pub const fn exponent(&self, base: BaseDimension) -> Rational {
        self.exponents[base.index()]
    }

    /// All exponents in slot order.
    pub const fn exponents(&self) -> [Rational; BASE_DIMENSIONS] {
        self.exponents
    }

    /// `true` when every exponent is zero.
    pub const fn is_dimensionless(&self) -> bool {
        all_zero(&self.exponents)
    }
}

impl Display for DimensionVector {
    /// Formats as space-separated base symbols, e.g. `kg m s^-2`; a dimensionless vector prints as `1`.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.is_dimensionless() {
            return f.write_str("1");
        }
        let mut first = true;
        for base in BaseDimension::ALL {
            let e = self.exponent(base);
            if e.is_zero() {
                continue;
            }
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            f.write_str(base.symbol())?;
            if e != Rational::ONE {
                write!(f, "^{}", e)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typenum::{U2, U3};

    type Mass = dimension!(P1, Z0, Z0, Z0, Z0, Z0, Z0, Z0);
    type Length = dimension!(Z0, P1, Z0, Z0, Z0, Z0, Z0, Z0);
    type Time = dimension!(Z0, Z0, P1, Z0, Z0, Z0, Z0, Z0);
    type Angle = dimension!(Z0, Z0, Z0, Z0, P1, Z0, Z0, Z0);
    type Area = dimension!(Z0, P2, Z0, Z0, Z0, Z0, Z0, Z0);
    type Velocity = dimension!(Z0, P1, N1, Z0, Z0, Z0, Z0, Z0);
    type Force = dimension!(P1, P1, N2, Z0, Z0, Z0, Z0, Z0);
    type AngularVelocity = dimension!(Z0, Z0, N1, Z0, P1, Z0, Z0, Z0);

    fn assert_same<A: Dimension, B: Dimension>()
    where
        A: DimDiv<B, Output = Dimensionless>,
    {
    }

    fn expected(values: [i32; BASE_DIMENSIONS]) -> [Rational; BASE_DIMENSIONS] {
        values.map(Rational::integer)
    }

    #[test]
    fn exponents_reflect_slots() {
        assert_eq!(Force::EXPONENTS, expected([1, 1, -2, 0, 0, 0, 0, 0]));
        assert!(Dimensionless::DIMENSIONLESS);
        assert!(!Force::DIMENSIONLESS);
    }

    #[test]
    fn mul_adds_exponents() {
        assert_same::<MulDim<Length, Length>, Area>();
        assert_same::<MulDim<Velocity, Time>, Length>();
        assert_eq!(
            <MulDim<Force, Length>>::EXPONENTS,
            expected([1, 2, -2, 0, 0, 0, 0, 0])
        );
    }

    #[test]
    fn div_subtracts_exponents() {
        assert_same::<DivDim<Length, Time>, Velocity>();
        assert_same::<DivDim<Force, Mass>, DivDim<Velocity, Time>>();
        assert_same::<DivDim<Length, Length>, Dimensionless>();
    }

    #[test]
    fn power_and_root_scale_exponents() {
        assert_same::<PowDim<Length, typenum::P2>, Area>();
        assert_same::<RootDim<Area, U2>, Length>();
        assert_eq!(
            <RootDim<Length, U2>>::EXPONENTS[BaseDimension::Length.index()],
            Rational::new(1, 2)
        );
        assert_eq!(
            <RootDim<Force, U3>>::EXPONENTS[BaseDimension::Time.index()],
            Rational::new(-2, 3)
        );
    }

    #[test]
    fn fractional_exponents_recombine() {
        type SqrtLength = RootDim<Length, U2>;
        assert_same::<MulDim<SqrtLength, SqrtLength>, Length>();
    }

    #[test]
    fn swap_exchanges_angle_and_length() {
        assert_same::<Swapped<AngularVelocity>, Velocity>();
        assert_same::<Swapped<Velocity>, AngularVelocity>();
        assert_same::<Swapped<Swapped<Force>>, Force>();
        assert_same::<Swapped<Angle>, Length>();
    }

    #[test]
    fn display_dimension_vector() {
        assert_eq!(Force::vector().to_string(), "kg m s^-2");
        assert_eq!(Dimensionless::vector().to_string(), "1");
        assert_eq!(<RootDim<Length, U2>>::vector().to_string(), "m^1/2");
    }

    #[test]
    fn base_dimension_indices_follow_slot_order() {
        for (i, base) in BaseDimension::ALL.iter().enumerate() {
            assert_eq!(base.index(), i);
        }
        assert_eq!(Force::vector().exponent(BaseDimension::Mass), Rational::ONE);
    }
}
