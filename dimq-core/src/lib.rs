//! Core type system for dimensionally checked physical quantities.
//!
//! `dimq-core` tracks physical dimensions at compile time:
//!
//! - A *dimension* is a type [`Dim`] holding eight type-level rational exponents, one per base dimension (mass,
//!   length, time, current, angle, temperature, luminosity, amount).
//! - A value of some dimension is a [`Quantity<D>`], backed by an `f64` in the base unit of `D`.
//! - Multiplying, dividing, raising to a power or taking a root of quantities derives the result dimension through
//!   type-level exponent arithmetic ([`DimMul`], [`DimDiv`], [`DimScale`]).
//! - A *unit* is a zero-sized marker implementing [`Unit`]: a symbol and a ratio to the base unit. Units only matter
//!   at the edges, when a number enters or leaves the type system.
//!
//! Most users should depend on `dimq` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Adding, subtracting or comparing quantities of different dimensions is a compile error.
//! - Products, quotients, integer powers and rational roots carry the right dimension without annotations:
//!   `sqrt(m²·s⁻²)` is a velocity.
//! - Zero runtime overhead: `Quantity<D>` is exactly an `f64`.
//! - Three-dimensional vectors of any quantity type ([`Vector3D`]) whose dot and cross products derive their
//!   component type the same way.
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic (`Quantity` is `f64`).
//! - Affine units: temperature offsets such as Celsius are not modelled, only absolute kelvin.
//! - Telling apart quantities with the same dimension vector (torque and energy are the same type).
//!
//! # Quick start
//!
//! Enter and read values in any unit of a dimension:
//!
//! ```rust
//! use dimq_core::length::{Foot, Length, Mile};
//! use dimq_core::Unit;
//!
//! let d: Length = Mile::new(1.0);
//! assert!((d.get::<Foot>() - 5280.0).abs() < 1e-9);
//! ```
//!
//! Derive new dimensions through arithmetic:
//!
//! ```rust
//! use dimq_core::length::Meter;
//! use dimq_core::time::Second;
//! use dimq_core::velocity::LinearVelocity;
//! use dimq_core::Unit;
//!
//! let v: LinearVelocity = Meter::new(100.0) / Second::new(20.0);
//! assert_eq!(v.value(), 5.0);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `dimq-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! dimq-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in `core` is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//!
//! # Panics and errors
//!
//! Arithmetic and conversions are pure `f64` computations: they do not panic, and NaN and infinities propagate
//! according to IEEE-754. The only fallible operation is text parsing ([`Quantity::parse_in`]), which returns a
//! [`ParseQuantityError`].
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

/// Type-level integers used to spell exponents.
pub use typenum;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod dimension;
mod error;
mod float;
mod macros;
mod quantity;
mod ratio;
mod rotational;
mod unit;

pub mod math;
pub mod vector;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{
    BaseDimension, Dim, DimDiv, DimMul, DimScale, Dimension, DimensionVector, Dimensionless, DivDim, MulDim, PowDim,
    RootDim, ScaleDim, SwapAngleLength, Swapped, BASE_DIMENSIONS,
};
pub use error::ParseQuantityError;
pub use quantity::{unit_cast, Divided, IsQuantity, Multiplied, Number, Quantity, Squarable};
pub use ratio::{Exponent, Ratio, RatioAdd, RatioMul, RatioSub, Rational, Reduce, Whole, Zero};
pub use rotational::{to_angular, to_linear};
pub use unit::{Unit, WithUnit};
pub use vector::{V3Acceleration, V3Force, V3Position, V3Velocity, Vector3D};

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined dimensions and units, one module per family.
///
/// These are defined in `dimq-core` so the unit derive can implement [`Unit`] for them without running into Rust's
/// orphan rules.
pub mod units;

pub use units::angular;
pub use units::base;
pub use units::electric;
pub use units::length;
pub use units::mass;
pub use units::mechanics;
pub use units::number;
pub use units::time;
pub use units::velocity;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::{Area, Centimeter, Foot, Kilometer, Length, Meter, Mile};
    use crate::mass::{Gram, Kilogram, Mass};
    use crate::mechanics::{Force, Newton, Torque};
    use crate::time::{Hour, Second, Time};
    use crate::velocity::{KilometerPerHour, LinearAcceleration, LinearVelocity, MeterPerSecond};
    use approx::assert_relative_eq;

    // ─────────────────────────────────────────────────────────────────────────────
    // Entering and reading values through units
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn kilogram_is_base_unit() {
        let m: Mass = Kilogram::new(5.0);
        assert_eq!(m.value(), 5.0);
        assert_eq!(m.get::<Gram>(), 5000.0);
    }

    #[test]
    fn mile_in_feet() {
        assert_relative_eq!(Mile::new(1.0).get::<Foot>(), 5280.0, max_relative = 1e-12);
    }

    #[test]
    fn unit_one_constant() {
        assert_eq!(Kilometer::ONE, Length::new(1000.0));
        assert_eq!(Kilometer::of(Meter::new(2500.0)), 2.5);
    }

    #[test]
    fn mixed_unit_sum() {
        let total: Length = Meter::new(1.0) + Centimeter::new(50.0) + Kilometer::new(0.001);
        assert_relative_eq!(total.value(), 2.5, max_relative = 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Derived dimensions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn velocity_from_length_over_time() {
        let v: LinearVelocity = Kilometer::new(36.0) / Hour::new(1.0);
        assert_relative_eq!(v.get::<MeterPerSecond>(), 10.0, max_relative = 1e-12);
        assert_relative_eq!(v.get::<KilometerPerHour>(), 36.0, max_relative = 1e-12);
    }

    #[test]
    fn newton_second_law() {
        let a: LinearAcceleration = Meter::new(2.0) / Second::new(1.0) / Second::new(1.0);
        let f: Force = Kilogram::new(3.0) * a;
        assert_eq!(f, Newton::new(6.0));
        assert_eq!(f.dimension().to_string(), "kg m s^-2");
    }

    #[test]
    fn work_is_force_times_distance() {
        let w: Torque = Newton::new(2.0) * Meter::new(3.0);
        assert_eq!(w.value(), 6.0);
    }

    #[test]
    fn square_root_of_area_is_length() {
        let side: Length = Area::new(16.0).sqrt();
        assert_eq!(side, Meter::new(4.0));
    }

    #[test]
    fn time_divided_by_time_is_number() {
        let ratio: Number = Second::new(90.0) / Time::new(60.0);
        let raw: f64 = ratio.into();
        assert_eq!(raw, 1.5);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Text round trip
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn display_then_parse_in_unit() {
        let d = Kilometer::new(1.5);
        let text = d.display::<Kilometer>().to_string();
        assert_eq!(text, "1.5_km");
        let back = Length::parse_in::<Kilometer>(&text).unwrap();
        assert_relative_eq!(back.value(), 1500.0, max_relative = 1e-12);
    }

    #[test]
    fn parse_rejects_foreign_suffix() {
        let err = Length::parse_in::<Meter>("3_ft").unwrap_err();
        assert_eq!(err, ParseQuantityError::UnitMismatch { expected: "m" });
    }
}
