//! Quantity type and its implementations.

use crate::dimension::{
    DimDiv, DimMul, DimScale, Dimension, Dimensionless, DivDim, MulDim, PowDim, RootDim, ScaleDim,
};
use crate::float;
use crate::ratio::{Exponent, Ratio};
use core::cmp::Ordering;
use core::fmt::{Debug, Display, Formatter, Result as FmtResult};
use core::marker::PhantomData;
use core::ops::*;
use typenum::{Integer, NonZero, PInt, Unsigned, P1, P2, P3, U2, U3};

/// A physical quantity of dimension `D`.
///
/// `Quantity<D>` wraps an `f64` holding the value **in the base unit of `D`** (metres, seconds, kilograms, …)
/// together with the phantom dimension vector `D`. The dimension only exists at compile time: a quantity is exactly
/// as large as an `f64` and every operator compiles down to the plain floating-point operation.
///
/// # Examples
///
/// ```rust
/// use dimq_core::length::{Length, Meter};
/// use dimq_core::Unit;
///
/// let a = Length::new(3.0);
/// let b = Meter::new(2.0);
/// assert_eq!(a + b, Length::new(5.0));
/// ```
///
/// Quantities of different dimensions cannot be added:
///
/// ```compile_fail
/// use dimq_core::length::Length;
/// use dimq_core::time::Time;
///
/// let _ = Length::new(1.0) + Time::new(1.0);
/// ```
///
/// Nor compared:
///
/// ```compile_fail
/// use dimq_core::length::Length;
/// use dimq_core::mass::Mass;
///
/// let _ = Length::new(1.0) < Mass::new(1.0);
/// ```
pub struct Quantity<D: Dimension>(f64, PhantomData<D>);

/// A pure number.
pub type Number = Quantity<Dimensionless>;

/// Result type of multiplying two quantity types.
pub type Multiplied<A, B> = <A as Mul<B>>::Output;
/// Result type of dividing two quantity types.
pub type Divided<A, B> = <A as Div<B>>::Output;

impl<D: Dimension> Quantity<D> {
    /// A constant representing NaN for this quantity type.
    ///
    /// ```rust
    /// use dimq_core::length::Length;
    /// assert!(Length::NAN.value().is_nan());
    /// ```
    pub const NAN: Self = Self::new(f64::NAN);

    /// Zero in this dimension.
    pub const ZERO: Self = Self::new(0.0);

    /// Creates a quantity from a value expressed in the base unit of `D`.
    ///
    /// ```rust
    /// use dimq_core::mass::Mass;
    /// let m = Mass::new(5.0);
    /// assert_eq!(m.value(), 5.0);
    /// ```
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw value in the base unit.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Expresses this quantity as a multiple of `unit`.
    ///
    /// ```rust
    /// use dimq_core::length::{Foot, Mile};
    /// use dimq_core::Unit;
    ///
    /// assert!((Mile::ONE.convert(Foot::ONE) - 5280.0).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn convert(self, unit: Self) -> f64 {
        self.0 / unit.0
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(float::abs(self.0))
    }

    /// The smaller of two quantities.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if self < other {
            self
        } else {
            other
        }
    }

    /// The larger of two quantities.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if self > other {
            self
        } else {
            other
        }
    }

    /// `true` if the value is neither infinite nor NaN.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// `true` if the value is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// Reinterprets this quantity as another dimension without any check.
    ///
    /// The value is kept as-is. This deliberately bypasses dimensional analysis; the caller asserts that the two
    /// dimensions are interchangeable in context. See also [`unit_cast`].
    #[inline]
    pub const fn cast<D2: Dimension>(self) -> Quantity<D2> {
        Quantity::new(self.0)
    }

    /// Raises this quantity to the integer power `K` (a typenum integer).
    ///
    /// ```rust
    /// use dimq_core::length::{Area, Length};
    /// use dimq_core::typenum::P2;
    ///
    /// let a: Area = Length::new(3.0).powi::<P2>();
    /// assert_eq!(a.value(), 9.0);
    /// ```
    #[inline]
    pub fn powi<K: Integer>(self) -> Quantity<PowDim<D, K>>
    where
        D: DimScale<Ratio<K, P1>>,
    {
        Quantity::new(float::powi(self.0, K::I32))
    }

    /// Square of this quantity.
    #[inline]
    pub fn square(self) -> Quantity<PowDim<D, P2>>
    where
        D: DimScale<Ratio<P2, P1>>,
    {
        Quantity::new(self.0 * self.0)
    }

    /// Cube of this quantity.
    #[inline]
    pub fn cube(self) -> Quantity<PowDim<D, P3>>
    where
        D: DimScale<Ratio<P3, P1>>,
    {
        Quantity::new(self.0 * self.0 * self.0)
    }

    /// `K`-th root of this quantity (`K` a typenum unsigned).
    ///
    /// Every exponent is divided by `K`; the result may carry fractional exponents. Odd roots of negative values
    /// keep their sign, even roots of negative values are NaN.
    #[inline]
    pub fn root<K: Unsigned + NonZero>(self) -> Quantity<RootDim<D, K>>
    where
        D: DimScale<Ratio<P1, PInt<K>>>,
    {
        let k = K::U32;
        let value = match k {
            1 => self.0,
            2 => float::sqrt(self.0),
            3 => float::cbrt(self.0),
            _ if k % 2 == 1 => float::copysign(float::powf(float::abs(self.0), 1.0 / f64::from(k)), self.0),
            _ => float::powf(self.0, 1.0 / f64::from(k)),
        };
        Quantity::new(value)
    }

    /// Square root of this quantity.
    ///
    /// ```rust
    /// use dimq_core::length::{Area, Length};
    ///
    /// let side: Length = Area::new(16.0).sqrt();
    /// assert_eq!(side.value(), 4.0);
    /// ```
    #[inline]
    pub fn sqrt(self) -> Quantity<RootDim<D, U2>>
    where
        D: DimScale<Ratio<P1, P2>>,
    {
        Quantity::new(float::sqrt(self.0))
    }

    /// Cube root of this quantity.
    #[inline]
    pub fn cbrt(self) -> Quantity<RootDim<D, U3>>
    where
        D: DimScale<Ratio<P1, P3>>,
    {
        Quantity::new(float::cbrt(self.0))
    }

    /// Raises this quantity to the rational power `R`.
    ///
    /// A negative value raised to an exponent with an odd denominator takes the real root, as [`cbrt`](Self::cbrt)
    /// does; an even denominator gives NaN.
    ///
    /// ```rust
    /// use dimq_core::length::Length;
    /// use dimq_core::typenum::{P2, P3};
    /// use dimq_core::{BaseDimension, Ratio};
    ///
    /// let q = Length::new(4.0).powr::<Ratio<P3, P2>>();
    /// assert!((q.value() - 8.0).abs() < 1e-12);
    /// assert_eq!(q.dimension().exponent(BaseDimension::Length).to_string(), "3/2");
    /// ```
    #[inline]
    pub fn powr<R: Exponent>(self) -> Quantity<ScaleDim<D, R>>
    where
        D: DimScale<R>,
    {
        let r = R::VALUE;
        if self.0 < 0.0 && r.denom() % 2 == 1 {
            let magnitude = float::powf(float::abs(self.0), r.to_f64());
            return Quantity::new(if r.numer() % 2 == 0 { magnitude } else { -magnitude });
        }
        Quantity::new(float::powf(self.0, r.to_f64()))
    }

    /// Runtime view of this quantity's dimension vector.
    #[inline]
    pub fn dimension(&self) -> crate::DimensionVector {
        D::vector()
    }
}

impl Quantity<Dimensionless> {
    /// Overwrites the value with a bare number.
    ///
    /// Only pure numbers accept bare `f64`s:
    ///
    /// ```compile_fail
    /// use dimq_core::length::Length;
    /// let mut l = Length::new(1.0);
    /// l.set(2.0);
    /// ```
    #[inline]
    pub fn set(&mut self, value: f64) {
        self.0 = value;
    }
}

/// Unchecked reinterpretation of a quantity as another quantity type.
///
/// The raw base-unit value is carried over untouched. Nothing verifies that `Q` and `Quantity<D>` describe
/// compatible physics; use it only where the dimension system cannot express a legitimate identity.
///
/// ```rust
/// use dimq_core::angular::Angle;
/// use dimq_core::length::Length;
/// use dimq_core::unit_cast;
///
/// let l: Length = unit_cast(Angle::new(2.0));
/// assert_eq!(l.value(), 2.0);
/// ```
#[inline]
pub fn unit_cast<Q: IsQuantity, D: Dimension>(quantity: Quantity<D>) -> Q {
    Q::from_raw(quantity.value())
}

// ─────────────────────────────────────────────────────────────────────────────
// Capability traits
// ─────────────────────────────────────────────────────────────────────────────

mod sealed {
    pub trait Sealed {}
    impl<D: crate::Dimension> Sealed for super::Quantity<D> {}
}

/// Compile-time predicate "is a quantity".
///
/// Implemented for every [`Quantity<D>`] and nothing else. Use it as a bound on generic code that must accept any
/// quantity type, as [`Vector3D`](crate::Vector3D) does.
pub trait IsQuantity:
    sealed::Sealed
    + Copy
    + Debug
    + Default
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign<f64>
    + DivAssign<f64>
{
    /// Dimension vector of this quantity type.
    type Dim: Dimension;

    /// Raw value in the base unit.
    fn raw(self) -> f64;

    /// Builds the quantity from a raw base-unit value.
    fn from_raw(value: f64) -> Self;

    /// Absolute value.
    fn abs(self) -> Self {
        Self::from_raw(float::abs(self.raw()))
    }

    /// `self` as a multiple of `unit`.
    fn convert(self, unit: Self) -> f64 {
        self.raw() / unit.raw()
    }
}

impl<D: Dimension> IsQuantity for Quantity<D> {
    type Dim = D;

    #[inline]
    fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    fn from_raw(value: f64) -> Self {
        Self::new(value)
    }
}

/// Quantities whose square has a square root of the same type.
///
/// This is what [`Vector3D::magnitude`](crate::Vector3D::magnitude) needs: `sqrt(x² + y² + z²)` must land back on
/// the component type. It holds for every dimension, and the compiler proves it per dimension through the
/// derivation rules.
pub trait Squarable: IsQuantity {
    /// Type of `self * self`.
    type Squared: IsQuantity;

    /// `self * self`.
    fn squared(self) -> Self::Squared;

    /// Square root of a squared value.
    fn sqrt_of(squared: Self::Squared) -> Self;
}

impl<D> Squarable for Quantity<D>
where
    D: DimScale<Ratio<P2, P1>>,
    PowDim<D, P2>: DimScale<Ratio<P1, P2>, Output = D>,
{
    type Squared = Quantity<PowDim<D, P2>>;

    #[inline]
    fn squared(self) -> Self::Squared {
        self.square()
    }

    #[inline]
    fn sqrt_of(squared: Self::Squared) -> Self {
        squared.sqrt()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Standard trait implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Clone for Quantity<D> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Dimension> Copy for Quantity<D> {}

impl<D: Dimension> Default for Quantity<D> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<D: Dimension> PartialEq for Quantity<D> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<D: Dimension> PartialOrd for Quantity<D> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<D: Dimension> Debug for Quantity<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_tuple("Quantity")
            .field(&self.0)
            .field(&format_args!("{}", D::vector()))
            .finish()
    }
}

impl<D: Dimension> Display for Quantity<D> {
    /// Formats the base-unit value followed by the dimension vector, e.g. `9.81 m s^-2`.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)?;
        if !D::DIMENSIONLESS {
            write!(f, " {}", D::vector())?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Add for Quantity<D> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl<D: Dimension> AddAssign for Quantity<D> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<D: Dimension> Sub for Quantity<D> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl<D: Dimension> SubAssign for Quantity<D> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<D: Dimension> Neg for Quantity<D> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl<D: Dimension> Mul<f64> for Quantity<D> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.0 * rhs)
    }
}

impl<D: Dimension> Mul<Quantity<D>> for f64 {
    type Output = Quantity<D>;
    #[inline]
    fn mul(self, rhs: Quantity<D>) -> Self::Output {
        rhs * self
    }
}

impl<D: Dimension> MulAssign<f64> for Quantity<D> {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.0 *= rhs;
    }
}

impl<D: Dimension> Div<f64> for Quantity<D> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.0 / rhs)
    }
}

impl<D: Dimension> DivAssign<f64> for Quantity<D> {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.0 /= rhs;
    }
}

impl<D: Dimension> Div<Quantity<D>> for f64
where
    Dimensionless: DimDiv<D>,
{
    type Output = Quantity<DivDim<Dimensionless, D>>;
    #[inline]
    fn div(self, rhs: Quantity<D>) -> Self::Output {
        Quantity::new(self / rhs.0)
    }
}

impl<D1: Dimension, D2: Dimension> Mul<Quantity<D2>> for Quantity<D1>
where
    D1: DimMul<D2>,
{
    type Output = Quantity<MulDim<D1, D2>>;
    #[inline]
    fn mul(self, rhs: Quantity<D2>) -> Self::Output {
        Quantity::new(self.0 * rhs.0)
    }
}

impl<D1: Dimension, D2: Dimension> Div<Quantity<D2>> for Quantity<D1>
where
    D1: DimDiv<D2>,
{
    type Output = Quantity<DivDim<D1, D2>>;
    #[inline]
    fn div(self, rhs: Quantity<D2>) -> Self::Output {
        Quantity::new(self.0 / rhs.0)
    }
}

impl<D: Dimension> Rem for Quantity<D> {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: Self) -> Self {
        Self::new(float::fmod(self.0, rhs.0))
    }
}

impl<D: Dimension> core::iter::Sum for Quantity<D> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a, D: Dimension> core::iter::Sum<&'a Quantity<D>> for Quantity<D> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Pure numbers
// ─────────────────────────────────────────────────────────────────────────────

impl From<f64> for Quantity<Dimensionless> {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Quantity<Dimensionless>> for f64 {
    #[inline]
    fn from(value: Quantity<Dimensionless>) -> Self {
        value.0
    }
}

impl PartialEq<f64> for Quantity<Dimensionless> {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}
