//! Linear velocity, acceleration and jerk.
//!
//! Each dimension gets the metre-per-second family with metric prefixes, the metre-per-hour family with metric
//! prefixes, and the inch/second and mile/hour units. Note that `mph` is *metres* per hour; miles per hour is
//! `miph`.
//!
//! ```rust
//! use dimq_core::length::Meter;
//! use dimq_core::time::Second;
//! use dimq_core::velocity::{KilometerPerHour, LinearVelocity};
//! use dimq_core::Unit;
//!
//! let v: LinearVelocity = Meter::new(100.0) / Second::new(20.0);
//! assert!((v.get::<KilometerPerHour>() - 18.0).abs() < 1e-9);
//! ```

use crate::length::{Inch, Meter, Mile};
use crate::macros::{metric_prefixes, units};
use crate::time::{Hour, Second};
use crate::{dimension, Quantity, Unit};

/// Dimension vector of linear velocity.
pub type LinearVelocityDim = dimension!(Z0, P1, N1, Z0, Z0, Z0, Z0, Z0);
/// A linear velocity.
pub type LinearVelocity = Quantity<LinearVelocityDim>;

/// Dimension vector of linear acceleration.
pub type LinearAccelerationDim = dimension!(Z0, P1, N2, Z0, Z0, Z0, Z0, Z0);
/// A linear acceleration.
pub type LinearAcceleration = Quantity<LinearAccelerationDim>;

/// Dimension vector of linear jerk.
pub type LinearJerkDim = dimension!(Z0, P1, N3, Z0, Z0, Z0, Z0, Z0);
/// A linear jerk.
pub type LinearJerk = Quantity<LinearJerkDim>;

const HOUR: f64 = Hour::RATIO;
const SECOND: f64 = Second::RATIO;

// ─────────────────────────────────────────────────────────────────────────────
// Velocity
// ─────────────────────────────────────────────────────────────────────────────

units! {
    LinearVelocityDim;
    /// Metre per second.
    MeterPerSecond = "mps", 1.0;
    /// Metre per hour.
    MeterPerHour = "mph", Meter::RATIO / HOUR;
    /// Inch per second.
    InchPerSecond = "inps", Inch::RATIO / SECOND;
    /// Mile per hour.
    MilePerHour = "miph", Mile::RATIO / HOUR;
}

metric_prefixes! {
    LinearVelocityDim, MeterPerSecond, "mps" =>
    TerameterPerSecond, GigameterPerSecond, MegameterPerSecond, KilometerPerSecond,
    CentimeterPerSecond, MillimeterPerSecond, MicrometerPerSecond, NanometerPerSecond,
}

metric_prefixes! {
    LinearVelocityDim, MeterPerHour, "mph" =>
    TerameterPerHour, GigameterPerHour, MegameterPerHour, KilometerPerHour,
    CentimeterPerHour, MillimeterPerHour, MicrometerPerHour, NanometerPerHour,
}

// ─────────────────────────────────────────────────────────────────────────────
// Acceleration
// ─────────────────────────────────────────────────────────────────────────────

units! {
    LinearAccelerationDim;
    /// Metre per second squared.
    MeterPerSecondSquared = "mps2", 1.0;
    /// Metre per hour squared.
    MeterPerHourSquared = "mph2", Meter::RATIO / (HOUR * HOUR);
    /// Inch per second squared.
    InchPerSecondSquared = "inps2", Inch::RATIO / (SECOND * SECOND);
    /// Mile per hour squared.
    MilePerHourSquared = "miph2", Mile::RATIO / (HOUR * HOUR);
}

metric_prefixes! {
    LinearAccelerationDim, MeterPerSecondSquared, "mps2" =>
    TerameterPerSecondSquared, GigameterPerSecondSquared, MegameterPerSecondSquared, KilometerPerSecondSquared,
    CentimeterPerSecondSquared, MillimeterPerSecondSquared, MicrometerPerSecondSquared, NanometerPerSecondSquared,
}

metric_prefixes! {
    LinearAccelerationDim, MeterPerHourSquared, "mph2" =>
    TerameterPerHourSquared, GigameterPerHourSquared, MegameterPerHourSquared, KilometerPerHourSquared,
    CentimeterPerHourSquared, MillimeterPerHourSquared, MicrometerPerHourSquared, NanometerPerHourSquared,
}

// ─────────────────────────────────────────────────────────────────────────────
// Jerk
// ─────────────────────────────────────────────────────────────────────────────

units! {
    LinearJerkDim;
    /// Metre per second cubed.
    MeterPerSecondCubed = "mps3", 1.0;
    /// Metre per hour cubed.
    MeterPerHourCubed = "mph3", Meter::RATIO / (HOUR * HOUR * HOUR);
    /// Inch per second cubed.
    InchPerSecondCubed = "inps3", Inch::RATIO / (SECOND * SECOND * SECOND);
    /// Mile per hour cubed.
    MilePerHourCubed = "miph3", Mile::RATIO / (HOUR * HOUR * HOUR);
}

metric_prefixes! {
    LinearJerkDim, MeterPerSecondCubed, "mps3" =>
    TerameterPerSecondCubed, GigameterPerSecondCubed, MegameterPerSecondCubed, KilometerPerSecondCubed,
    CentimeterPerSecondCubed, MillimeterPerSecondCubed, MicrometerPerSecondCubed, NanometerPerSecondCubed,
}

metric_prefixes! {
    LinearJerkDim, MeterPerHourCubed, "mph3" =>
    TerameterPerHourCubed, GigameterPerHourCubed, MegameterPerHourCubed, KilometerPerHourCubed,
    CentimeterPerHourCubed, MillimeterPerHourCubed, MicrometerPerHourCubed, NanometerPerHourCubed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::{Kilometer, Length};
    use crate::time::Time;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn derived_from_length_over_time() {
        let v: LinearVelocity = Length::new(10.0) / Time::new(4.0);
        assert_eq!(v.value(), 2.5);
        let a: LinearAcceleration = v / Time::new(2.5);
        assert_eq!(a.value(), 1.0);
        let j: LinearJerk = a / Time::new(0.5);
        assert_eq!(j.value(), 2.0);
    }

    #[test]
    fn unit_ratios_match_their_parts() {
        assert_relative_eq!(
            KilometerPerHour::ONE.value(),
            (Kilometer::ONE / Hour::ONE).value(),
            max_relative = 1e-12
        );
        assert_relative_eq!(MilePerHour::ONE.value(), 0.44704, max_relative = 1e-12);
        assert_relative_eq!(InchPerSecondSquared::ONE.value(), 0.0254, max_relative = 1e-12);
        assert_relative_eq!(MeterPerHourCubed::ONE.value() * 3600f64.powi(3), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn prefixed_symbols() {
        assert_eq!(KilometerPerHour::SYMBOL, "kmph");
        assert_eq!(MillimeterPerSecondSquared::SYMBOL, "mmps2");
        assert_eq!(NanometerPerHourCubed::SYMBOL, "nmph3");
    }

    proptest! {
        #[test]
        fn prop_velocity_times_time_is_length(v in -1e3..1e3f64, t in 1e-3..1e3f64) {
            let d: Length = MeterPerSecond::new(v) * Time::new(t);
            prop_assert!((d.value() - v * t).abs() <= 1e-9 * (v * t).abs().max(1.0));
        }
    }
}
