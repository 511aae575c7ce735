//! Angles, angular velocity and angular acceleration.
//!
//! The base unit for angle is [`Radian`] (`Radian::RATIO == 1.0`); angle is a base dimension of its own, so an
//! angular velocity (`rad s^-1`) is never confused with a frequency (`s^-1`).
//!
//! Angle quantities get trigonometry (`sin`, `cos`, `tan`, `sin_cos`) and range wrapping (`wrap_pos`,
//! `wrap_signed`). The inverse functions [`acos`], [`asin`], [`atan`] and [`atan2`] return angles.
//!
//! ## Edge cases
//!
//! Wrapping and trig operations follow IEEE‑754 semantics: `NaN` or `±∞` inputs generally produce `NaN`. `acos` and
//! `asin` of an argument slightly outside `[-1, 1]` (e.g. from rounding) return `NaN`.
//!
//! ```rust
//! use dimq_core::angular::{Angle, Degree};
//! use dimq_core::Unit;
//!
//! let a = Degree::new(90.0);
//! assert!((a.sin() - 1.0).abs() < 1e-12);
//! assert!((Degree::new(370.0).wrap_signed().get::<Degree>() - 10.0).abs() < 1e-9);
//! ```

use crate::macros::units;
use crate::number::Number;
use crate::{dimension, float, Dimension, Quantity};
use core::f64::consts::{PI, TAU};

/// Dimension vector of plane angle.
pub type AngleDim = dimension!(Z0, Z0, Z0, Z0, P1, Z0, Z0, Z0);
/// A plane angle.
pub type Angle = Quantity<AngleDim>;

/// Dimension vector of angular velocity.
pub type AngularVelocityDim = dimension!(Z0, Z0, N1, Z0, P1, Z0, Z0, Z0);
/// An angular velocity.
pub type AngularVelocity = Quantity<AngularVelocityDim>;

/// Dimension vector of angular acceleration.
pub type AngularAccelerationDim = dimension!(Z0, Z0, N2, Z0, P1, Z0, Z0, Z0);
/// An angular acceleration.
pub type AngularAcceleration = Quantity<AngularAccelerationDim>;

units! {
    AngleDim;
    /// Radian (base unit).
    Radian = "rad", 1.0;
    /// Degree (`π / 180 rad`).
    Degree = "deg", PI / 180.0;
    /// Full rotation (`2π rad`).
    Rotation = "rot", TAU;
}

units! {
    AngularVelocityDim;
    /// Radian per second.
    RadianPerSecond = "radps", 1.0;
    /// Degree per second.
    DegreePerSecond = "degps", <Degree as crate::Unit>::RATIO;
    /// Rotation per second.
    RotationPerSecond = "rps", <Rotation as crate::Unit>::RATIO;
    /// Rotation per minute.
    RotationPerMinute = "rpm", <Rotation as crate::Unit>::RATIO / 60.0;
}

units! {
    AngularAccelerationDim;
    /// Radian per second squared.
    RadianPerSecondSquared = "radps2", 1.0;
    /// Degree per second squared.
    DegreePerSecondSquared = "degps2", <Degree as crate::Unit>::RATIO;
    /// Rotation per second squared.
    RotationPerSecondSquared = "rps2", <Rotation as crate::Unit>::RATIO;
}

impl Quantity<AngleDim> {
    /// One full revolution.
    pub const FULL_TURN: Angle = Angle::new(TAU);
    /// Half a revolution.
    pub const HALF_TURN: Angle = Angle::new(PI);
    /// A quarter revolution.
    pub const QUARTER_TURN: Angle = Angle::new(PI / 2.0);

    /// Sine of the angle.
    #[inline]
    pub fn sin(self) -> f64 {
        float::sin(self.value())
    }

    /// Cosine of the angle.
    #[inline]
    pub fn cos(self) -> f64 {
        float::cos(self.value())
    }

    /// Tangent of the angle.
    #[inline]
    pub fn tan(self) -> f64 {
        float::tan(self.value())
    }

    /// Sine and cosine together.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        (self.sin(), self.cos())
    }

    /// Wrap into `[0, FULL_TURN)` using the Euclidean remainder.
    #[inline]
    pub fn wrap_pos(self) -> Self {
        Self::new(float::rem_euclid(self.value(), TAU))
    }

    /// Wrap into `(-HALF_TURN, HALF_TURN]`.
    ///
    /// Upper bound inclusive, lower bound exclusive.
    #[inline]
    pub fn wrap_signed(self) -> Self {
        let y = float::rem_euclid(self.value() + PI, TAU) - PI;
        Self::new(if y <= -PI { y + TAU } else { y })
    }

    /// Signed smallest rotation from `other` to `self`, in `(-HALF_TURN, HALF_TURN]`.
    #[inline]
    pub fn signed_separation(self, other: Self) -> Self {
        (self - other).wrap_signed()
    }

    /// Unsigned smallest rotation between two angles.
    #[inline]
    pub fn abs_separation(self, other: Self) -> Self {
        self.signed_separation(other).abs()
    }
}

/// Arc cosine, as an angle in `[0, π]`.
#[inline]
pub fn acos(x: Number) -> Angle {
    Angle::new(float::acos(x.value()))
}

/// Arc sine, as an angle in `[-π/2, π/2]`.
#[inline]
pub fn asin(x: Number) -> Angle {
    Angle::new(float::asin(x.value()))
}

/// Arc tangent, as an angle in `[-π/2, π/2]`.
#[inline]
pub fn atan(x: Number) -> Angle {
    Angle::new(float::atan(x.value()))
}

/// Four-quadrant arc tangent of `y / x`, as an angle in `(-π, π]`.
///
/// Both arguments share any one dimension, so positions can be passed directly.
///
/// ```rust
/// use dimq_core::angular::{atan2, Degree};
/// use dimq_core::length::Length;
/// use dimq_core::Unit;
///
/// let heading = atan2(Length::new(1.0), Length::new(-1.0));
/// assert!((heading.get::<Degree>() - 135.0).abs() < 1e-9);
/// ```
#[inline]
pub fn atan2<D: Dimension>(y: Quantity<D>, x: Quantity<D>) -> Angle {
    Angle::new(float::atan2(y.value(), x.value()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Unit;
    use crate::time::{Second, Time};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Units
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn turn_constants() {
        assert_abs_diff_eq!(Angle::FULL_TURN.get::<Degree>(), 360.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Angle::HALF_TURN.get::<Degree>(), 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Angle::QUARTER_TURN.get::<Degree>(), 90.0, epsilon = 1e-9);
        assert_eq!(Rotation::ONE, Angle::FULL_TURN);
    }

    #[test]
    fn conversion_degrees_to_radians() {
        assert_abs_diff_eq!(Degree::new(180.0).value(), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(Angle::new(PI).get::<Degree>(), 180.0, epsilon = 1e-12);
    }

    #[test]
    fn angular_velocity_units() {
        let w: AngularVelocity = Rotation::new(1.0) / Time::new(1.0);
        assert_relative_eq!(w.get::<RotationPerMinute>(), 60.0, max_relative = 1e-12);
        assert_relative_eq!(w.get::<DegreePerSecond>(), 360.0, max_relative = 1e-12);
        assert_relative_eq!(RadianPerSecond::ONE.get::<RotationPerSecond>(), 1.0 / TAU, max_relative = 1e-12);
    }

    #[test]
    fn angular_acceleration_units() {
        let alpha: AngularAcceleration = DegreePerSecond::new(90.0) / Second::new(2.0);
        assert_relative_eq!(alpha.get::<DegreePerSecondSquared>(), 45.0, max_relative = 1e-12);
        assert_relative_eq!(RotationPerSecondSquared::ONE.value(), TAU, max_relative = 1e-12);
    }

    #[test]
    fn angular_velocity_is_not_a_frequency() {
        let w = AngularVelocity::new(1.0);
        assert_eq!(w.to_string(), "1 s^-1 rad");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Trigonometry
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn trig_of_known_angles() {
        assert_abs_diff_eq!(Degree::new(30.0).sin(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(Degree::new(60.0).cos(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(Degree::new(45.0).tan(), 1.0, epsilon = 1e-12);
        let (s, c) = Angle::QUARTER_TURN.sin_cos();
        assert_abs_diff_eq!(s, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn inverse_trig_returns_angles() {
        assert_abs_diff_eq!(acos(Number::new(0.0)).value(), PI / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(asin(Number::new(1.0)).value(), PI / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(atan(Number::new(1.0)).get::<Degree>(), 45.0, epsilon = 1e-9);
        assert_abs_diff_eq!(atan2(Time::new(-1.0), Time::new(0.0)).value(), -PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn acos_out_of_domain_is_nan() {
        assert!(acos(Number::new(1.0 + 1e-9)).is_nan());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Wrapping
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn wrap_pos_basic() {
        assert_abs_diff_eq!(Degree::new(370.0).wrap_pos().get::<Degree>(), 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Degree::new(-10.0).wrap_pos().get::<Degree>(), 350.0, epsilon = 1e-9);
        assert_eq!(Angle::new(0.0).wrap_pos().value(), 0.0);
    }

    #[test]
    fn wrap_signed_boundary() {
        assert_abs_diff_eq!(Angle::new(PI).wrap_signed().value(), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(Angle::new(-PI).wrap_signed().value(), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(Degree::new(190.0).wrap_signed().get::<Degree>(), -170.0, epsilon = 1e-9);
    }

    #[test]
    fn separation() {
        let a = Degree::new(350.0);
        let b = Degree::new(10.0);
        assert_abs_diff_eq!(a.signed_separation(b).get::<Degree>(), -20.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.signed_separation(a).get::<Degree>(), 20.0, epsilon = 1e-9);
        assert_abs_diff_eq!(a.abs_separation(b).get::<Degree>(), 20.0, epsilon = 1e-9);
    }

    proptest! {
        #[test]
        fn prop_wrap_pos_range(angle in -1e6..1e6f64) {
            let w = Angle::new(angle).wrap_pos().value();
            prop_assert!((0.0..TAU).contains(&w));
        }

        #[test]
        fn prop_wrap_signed_range(angle in -1e6..1e6f64) {
            let w = Angle::new(angle).wrap_signed().value();
            prop_assert!(w > -PI && w <= PI);
        }

        #[test]
        fn prop_pythagorean_identity(angle in -10.0..10.0f64) {
            let (s, c) = Angle::new(angle).sin_cos();
            prop_assert!((s * s + c * c - 1.0).abs() < 1e-12);
        }

        #[test]
        fn prop_abs_separation_symmetric(a in -TAU..TAU, b in -TAU..TAU) {
            let x = Angle::new(a);
            let y = Angle::new(b);
            prop_assert!((x.abs_separation(y) - y.abs_separation(x)).abs().value() < 1e-9);
        }
    }
}
