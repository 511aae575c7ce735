//! Compile-time dimensional analysis for physical quantities.
//!
//! `dimq` is the user-facing crate in this workspace. It re-exports the full API from `dimq-core` plus the predefined
//! dimensions and units (lengths, times, velocities, forces, electrical units, …).
//!
//! The core idea is: a value is always a `Quantity<D>`, where `D` is a type-level vector of eight rational exponents
//! over the base dimensions. Units are only a way to enter and read values; internally every quantity is stored in
//! the base unit of its dimension, with no runtime overhead beyond an `f64`.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to seconds).
//! - Derives the dimension of products, quotients, powers and roots at compile time (`N·m` is `kg m^2 s^-2`).
//! - Converts between units of one dimension through their ratios to the base unit.
//! - Provides 3D vectors of quantities whose dot and cross products carry derived dimensions.
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic: quantities are backed by `f64`.
//! - Affine units (Celsius, Fahrenheit).
//! - Distinguishing quantities that share a dimension vector, such as torque and energy.
//!
//! # Quick start
//!
//! Convert miles to feet:
//!
//! ```rust
//! use dimq::{Foot, Length, Mile, Unit};
//!
//! let d: Length = Mile::new(1.0);
//! assert!((d.get::<Foot>() - 5280.0).abs() < 1e-9);
//! ```
//!
//! Compose derived dimensions (velocity = length / time):
//!
//! ```rust
//! use dimq::{Kilometer, LinearVelocity, MeterPerSecond, Second, Unit};
//!
//! let v: LinearVelocity = Kilometer::new(1.0) / Second::new(100.0);
//! assert!((v.get::<MeterPerSecond>() - 10.0).abs() < 1e-12);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use dimq::{Meter, Second, Unit};
//!
//! let _ = Meter::new(1.0) + Second::new(1.0); // cannot add different dimensions
//! ```
//!
//! # Modules
//!
//! Units are grouped under modules (also re-exported at the crate root for convenience):
//!
//! - `dimq::number` (pure numbers, percent)
//! - `dimq::mass` (kilograms, grams, pounds)
//! - `dimq::length` (metres with metric prefixes, inches, feet, miles, areas, curvature)
//! - `dimq::time` (seconds with metric prefixes, minutes, hours, days)
//! - `dimq::angular` (radians, degrees, rotations and their rates, trigonometry helpers)
//! - `dimq::velocity` (linear velocity, acceleration and jerk)
//! - `dimq::mechanics` (force, torque and energy, power, moment of inertia)
//! - `dimq::electric` (current, charge, voltage, resistance, conductance)
//! - `dimq::base` (temperature, luminosity, amount of substance)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `dimq-core`.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! dimq = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Arithmetic and conversions do not panic and follow IEEE-754 for NaN and infinities. Parsing text with
//! `Quantity::parse_in` returns a [`ParseQuantityError`] on malformed input.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use dimq_core::*;

/// Derive macro used by `dimq-core` to define unit marker types.
///
/// This macro expands in terms of `crate::Unit`, so it is intended for use inside `dimq-core` (or crates exposing
/// the same crate-root API). Most users should not need this.
pub use dimq_derive::Unit;

pub use dimq_core::units::angular;
pub use dimq_core::units::base;
pub use dimq_core::units::electric;
pub use dimq_core::units::length;
pub use dimq_core::units::mass;
pub use dimq_core::units::mechanics;
pub use dimq_core::units::number;
pub use dimq_core::units::time;
pub use dimq_core::units::velocity;

pub use dimq_core::units::angular::*;
pub use dimq_core::units::base::*;
pub use dimq_core::units::electric::*;
pub use dimq_core::units::length::*;
pub use dimq_core::units::mass::*;
pub use dimq_core::units::mechanics::*;
pub use dimq_core::units::number::*;
pub use dimq_core::units::time::*;
pub use dimq_core::units::velocity::*;

/// The traits and core types most code needs, for glob import.
///
/// ```rust
/// use dimq::prelude::*;
/// use dimq::{Meter, Newton};
///
/// let w: Quantity<_> = Newton::new(2.0) * Meter::new(3.0);
/// assert_eq!(w.value(), 6.0);
/// ```
pub mod prelude {
    pub use dimq_core::{
        to_angular, to_linear, IsQuantity, Number, ParseQuantityError, Quantity, Squarable, Unit, Vector3D, WithUnit,
    };
}
