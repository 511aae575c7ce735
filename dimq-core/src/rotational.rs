//! Conversions between rotational and linear quantities through a wheel diameter.
//!
//! A wheel of diameter `d` turning by `θ` rolls its rim over `θ · d / 2`. [`to_linear`] applies that relation to
//! any quantity with an angle exponent (angles, angular velocities, angular accelerations, …) and [`to_angular`]
//! inverts it. The value arithmetic is the real content; the result type is obtained by exchanging the angle and
//! length slots of the dimension vector with an unchecked cast.

use crate::dimension::{DimDiv, DimMul, DivDim, MulDim, SwapAngleLength, Swapped};
use crate::length::{Length, LengthDim};
use crate::{unit_cast, Quantity};

/// Rim travel of a wheel of `diameter` turning by `angular`.
///
/// ```rust
/// use dimq_core::angular::{AngularVelocity, RadianPerSecond};
/// use dimq_core::length::Meter;
/// use dimq_core::velocity::LinearVelocity;
/// use dimq_core::{to_linear, Unit};
///
/// let v: LinearVelocity = to_linear(RadianPerSecond::new(2.0), Meter::new(0.5));
/// assert!((v.value() - 0.5).abs() < 1e-12);
/// ```
#[inline]
pub fn to_linear<D>(angular: Quantity<D>, diameter: Length) -> Quantity<Swapped<D>>
where
    D: SwapAngleLength + DimMul<LengthDim>,
{
    unit_cast::<_, MulDim<D, LengthDim>>(angular * (diameter / 2.0))
}

/// Rotation of a wheel of `diameter` whose rim travels by `linear`.
///
/// ```rust
/// use dimq_core::angular::{Angle, Rotation};
/// use dimq_core::length::Meter;
/// use dimq_core::{to_angular, Unit};
///
/// let turn: Angle = to_angular(Meter::new(core::f64::consts::PI), Meter::new(1.0));
/// assert!((turn.get::<Rotation>() - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn to_angular<D>(linear: Quantity<D>, diameter: Length) -> Quantity<Swapped<D>>
where
    D: SwapAngleLength + DimDiv<LengthDim>,
{
    unit_cast::<_, DivDim<D, LengthDim>>(linear / (diameter / 2.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angular::{Angle, AngularAcceleration, AngularVelocity, Degree};
    use crate::velocity::{LinearAcceleration, LinearVelocity};
    use crate::Unit;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn angle_to_arc_length() {
        let arc: Length = to_linear(Degree::new(180.0), Length::new(2.0));
        assert_relative_eq!(arc.value(), core::f64::consts::PI, max_relative = 1e-12);
    }

    #[test]
    fn angular_velocity_to_linear_velocity() {
        let v: LinearVelocity = to_linear(AngularVelocity::new(4.0), Length::new(0.5));
        assert_relative_eq!(v.value(), 1.0);
    }

    #[test]
    fn linear_acceleration_to_angular_acceleration() {
        let alpha: AngularAcceleration = to_angular(LinearAcceleration::new(3.0), Length::new(2.0));
        assert_relative_eq!(alpha.value(), 3.0);
    }

    proptest! {
        #[test]
        fn prop_linear_angular_round_trip(theta in -100.0..100.0f64, d in 0.01..10.0f64) {
            let diameter = Length::new(d);
            let back: Angle = to_angular(to_linear(Angle::new(theta), diameter), diameter);
            prop_assert!((back.value() - theta).abs() <= 1e-9 * theta.abs().max(1.0));
        }
    }
}
