//! Three-dimensional vectors of quantities.
//!
//! [`Vector3D<T>`] holds three components of one quantity type `T`. Vector-space operations keep `T`; products
//! between two vectors derive their component type from `T * Q` through the quantity derivation rules, so the dot
//! product of a position and a force is an energy-dimensioned quantity without any extra annotation.
//!
//! Polar form uses per-axis **direction cosines**: an angle vector holds, for each axis, the angle between that
//! axis and the vector, and [`Vector3D::from_polar`] rebuilds each component as `|m| · cos(angle)`.
//! [`Vector3D::theta`] is its inverse.
//!
//! ```rust
//! use dimq_core::length::{Area, Meter};
//! use dimq_core::vector::{V3Force, V3Position, Vector3D};
//! use dimq_core::mechanics::{Newton, Torque};
//! use dimq_core::Unit;
//!
//! let r = V3Position::new(Meter::new(1.0), Meter::new(0.0), Meter::new(0.0));
//! let f = V3Force::new(Newton::new(0.0), Newton::new(1.0), Newton::new(0.0));
//!
//! let work: Torque = r.dot(&f);
//! assert_eq!(work.value(), 0.0);
//!
//! let y = V3Position::new(Meter::new(0.0), Meter::new(1.0), Meter::new(0.0));
//! let normal: Vector3D<Area> = r.cross(&y);
//! assert_eq!(normal.z.value(), 1.0);
//! ```

use crate::angular::{acos, Angle};
use crate::length::Length;
use crate::mechanics::Force;
use crate::number::Number;
use crate::quantity::{IsQuantity, Squarable};
use crate::velocity::{LinearAcceleration, LinearVelocity};
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::ops::*;

/// A 3D vector whose components share the quantity type `T`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vector3D<T> {
    /// x component.
    pub x: T,
    /// y component.
    pub y: T,
    /// z component.
    pub z: T,
}

/// A position in space.
pub type V3Position = Vector3D<Length>;
/// A linear velocity vector.
pub type V3Velocity = Vector3D<LinearVelocity>;
/// A linear acceleration vector.
pub type V3Acceleration = Vector3D<LinearAcceleration>;
/// A force vector.
pub type V3Force = Vector3D<Force>;

impl<T> Vector3D<T> {
    /// Builds a vector from its three components.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: IsQuantity> Vector3D<T> {
    /// The zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Builds a vector from per-axis direction angles and a magnitude.
    ///
    /// Each component is `|magnitude| · cos(angle)`; the sign of `magnitude` is ignored.
    pub fn from_polar(angles: &Vector3D<Angle>, magnitude: T) -> Self {
        let m = magnitude.abs();
        Self::new(m * angles.x.cos(), m * angles.y.cos(), m * angles.z.cos())
    }

    /// A vector of one base unit along the given direction angles.
    #[inline]
    pub fn unit_vector(angles: &Vector3D<Angle>) -> Self {
        Self::from_polar(angles, T::from_raw(1.0))
    }

    /// Dot product with a vector of any quantity type.
    ///
    /// The result type is the product of the two component types.
    #[inline]
    pub fn dot<Q, R>(&self, other: &Vector3D<Q>) -> R
    where
        Q: IsQuantity,
        T: Mul<Q, Output = R>,
        R: Add<Output = R>,
    {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product with a vector of any quantity type.
    ///
    /// `a × b = (a.y·b.z − a.z·b.y, a.z·b.x − a.x·b.z, a.x·b.y − a.y·b.x)`.
    #[inline]
    pub fn cross<Q, R>(&self, other: &Vector3D<Q>) -> Vector3D<R>
    where
        Q: IsQuantity,
        T: Mul<Q, Output = R>,
        R: Sub<Output = R>,
    {
        Vector3D::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Multiplies every component by a quantity.
    ///
    /// ```rust
    /// use dimq_core::time::Time;
    /// use dimq_core::vector::{V3Position, V3Velocity};
    /// use dimq_core::velocity::LinearVelocity;
    ///
    /// let v = V3Velocity::new(LinearVelocity::new(1.0), LinearVelocity::new(2.0), LinearVelocity::new(0.0));
    /// let travelled: V3Position = v.scale_by(Time::new(3.0));
    /// assert_eq!(travelled.y.value(), 6.0);
    /// ```
    #[inline]
    pub fn scale_by<Q, R>(&self, factor: Q) -> Vector3D<R>
    where
        Q: IsQuantity,
        T: Mul<Q, Output = R>,
    {
        Vector3D::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Displacement from `self` to `other` (`other - self`).
    #[inline]
    pub fn vector_to(&self, other: &Self) -> Self {
        *other - *self
    }
}

impl<T: Squarable> Vector3D<T> {
    /// `x² + y² + z²`.
    #[inline]
    pub fn magnitude_squared(&self) -> T::Squared {
        self.x.squared() + self.y.squared() + self.z.squared()
    }

    /// Euclidean length, in the component type.
    #[inline]
    pub fn magnitude(&self) -> T {
        T::sqrt_of(self.magnitude_squared())
    }

    /// Per-axis direction angles: `acos(component / magnitude)`.
    ///
    /// The zero vector has no direction; its angles are NaN.
    pub fn theta(&self) -> Vector3D<Angle> {
        let m = self.magnitude();
        Vector3D::new(
            acos(Number::new(self.x.convert(m))),
            acos(Number::new(self.y.convert(m))),
            acos(Number::new(self.z.convert(m))),
        )
    }

    /// Distance between two points.
    #[inline]
    pub fn distance_to(&self, other: &Self) -> T {
        self.vector_to(other).magnitude()
    }

    /// Angle between two vectors, in `[0, π]`.
    pub fn angle_to(&self, other: &Self) -> Angle
    where
        T: Mul<T, Output = T::Squared>,
    {
        let cos = self.dot(other).convert(self.magnitude() * other.magnitude());
        acos(Number::new(cos))
    }

    /// The unit vector along `self`.
    ///
    /// Dividing a quantity by its own magnitude gives a pure number, so the result is dimensionless whatever `T` is.
    ///
    /// ```rust
    /// use dimq_core::length::Length;
    /// use dimq_core::vector::V3Position;
    ///
    /// let v = V3Position::new(Length::new(3.0), Length::new(0.0), Length::new(4.0));
    /// let n = v.normalize();
    /// assert_eq!(n.x, 0.6);
    /// assert_eq!(n.z, 0.8);
    /// ```
    pub fn normalize(&self) -> Vector3D<Number> {
        let m = self.magnitude();
        Vector3D::new(
            Number::new(self.x.convert(m)),
            Number::new(self.y.convert(m)),
            Number::new(self.z.convert(m)),
        )
    }

    /// Rotates in place by adding `delta` to the direction angles.
    #[inline]
    pub fn rotate_by(&mut self, delta: &Vector3D<Angle>) {
        *self = self.rotated_by(delta);
    }

    /// Points `self` along `angles`, keeping its magnitude.
    #[inline]
    pub fn rotate_to(&mut self, angles: &Vector3D<Angle>) {
        *self = self.rotated_to(angles);
    }

    /// Copy rotated by adding `delta` to the direction angles.
    #[inline]
    pub fn rotated_by(&self, delta: &Vector3D<Angle>) -> Self {
        Self::from_polar(&(self.theta() + *delta), self.magnitude())
    }

    /// Copy pointed along `angles`, with the same magnitude.
    #[inline]
    pub fn rotated_to(&self, angles: &Vector3D<Angle>) -> Self {
        Self::from_polar(angles, self.magnitude())
    }
}

impl<T: Display> Display for Vector3D<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<T: IsQuantity> Add for Vector3D<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: IsQuantity> AddAssign for Vector3D<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl<T: IsQuantity> Sub for Vector3D<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: IsQuantity> SubAssign for Vector3D<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl<T: IsQuantity> Neg for Vector3D<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: IsQuantity> Mul<f64> for Vector3D<T> {
    type Output = Self;
    #[inline]
    fn mul(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }
}

impl<T: IsQuantity> Mul<Vector3D<T>> for f64 {
    type Output = Vector3D<T>;
    #[inline]
    fn mul(self, v: Vector3D<T>) -> Vector3D<T> {
        v * self
    }
}

impl<T: IsQuantity> MulAssign<f64> for Vector3D<T> {
    #[inline]
    fn mul_assign(&mut self, factor: f64) {
        self.x *= factor;
        self.y *= factor;
        self.z *= factor;
    }
}

impl<T: IsQuantity> Div<f64> for Vector3D<T> {
    type Output = Self;
    #[inline]
    fn div(self, divisor: f64) -> Self {
        Self::new(self.x / divisor, self.y / divisor, self.z / divisor)
    }
}

impl<T: IsQuantity> DivAssign<f64> for Vector3D<T> {
    #[inline]
    fn div_assign(&mut self, divisor: f64) {
        self.x /= divisor;
        self.y /= divisor;
        self.z /= divisor;
    }
}
