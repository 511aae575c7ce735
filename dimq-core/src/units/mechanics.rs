//! Mechanical quantities: moment of inertia, force, torque, energy and power.
//!
//! Torque and energy share the dimension `kg m^2 s^-2`; they are the same quantity type and only differ by the unit
//! used to print them.
//!
//! ```rust
//! use dimq_core::length::Meter;
//! use dimq_core::mechanics::{Newton, Torque};
//! use dimq_core::Unit;
//!
//! let t: Torque = Newton::new(10.0) * Meter::new(0.5);
//! assert_eq!(t.value(), 5.0);
//! ```

use crate::macros::units;
use crate::{dimension, Quantity};

/// Dimension vector of moment of inertia.
pub type InertiaDim = dimension!(P1, P2, Z0, Z0, Z0, Z0, Z0, Z0);
/// A moment of inertia.
pub type Inertia = Quantity<InertiaDim>;

/// Dimension vector of force.
pub type ForceDim = dimension!(P1, P1, N2, Z0, Z0, Z0, Z0, Z0);
/// A force.
pub type Force = Quantity<ForceDim>;

/// Dimension vector of torque and energy.
pub type TorqueDim = dimension!(P1, P2, N2, Z0, Z0, Z0, Z0, Z0);
/// A torque.
pub type Torque = Quantity<TorqueDim>;
/// An energy.
pub type Energy = Quantity<TorqueDim>;

/// Dimension vector of power.
pub type PowerDim = dimension!(P1, P2, N3, Z0, Z0, Z0, Z0, Z0);
/// A power.
pub type Power = Quantity<PowerDim>;

units! {
    InertiaDim;
    /// Kilogram square metre.
    KilogramSquareMeter = "kgm2", 1.0;
}

units! {
    ForceDim;
    /// Newton.
    Newton = "N", 1.0;
}

units! {
    TorqueDim;
    /// Newton metre.
    NewtonMeter = "Nm", 1.0;
    /// Joule.
    Joule = "J", 1.0;
}

units! {
    PowerDim;
    /// Watt.
    Watt = "watt", 1.0;
}
