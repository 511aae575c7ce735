//! Electrical quantities.
//!
//! ```rust
//! use dimq_core::electric::{Ampere, Ohm, Voltage, Volt};
//! use dimq_core::Unit;
//!
//! let v: Voltage = Ampere::new(2.0) * Ohm::new(3.0);
//! assert!((v.get::<Volt>() - 6.0).abs() < 1e-12);
//! ```

use crate::macros::{metric_prefixes, units};
use crate::{dimension, Quantity};

/// Dimension vector of electric current.
pub type CurrentDim = dimension!(Z0, Z0, Z0, P1, Z0, Z0, Z0, Z0);
/// An electric current.
pub type Current = Quantity<CurrentDim>;

/// Dimension vector of electric charge.
pub type ChargeDim = dimension!(Z0, Z0, P1, P1, Z0, Z0, Z0, Z0);
/// An electric charge.
pub type Charge = Quantity<ChargeDim>;

/// Dimension vector of voltage.
pub type VoltageDim = dimension!(P1, P2, N3, N1, Z0, Z0, Z0, Z0);
/// A voltage.
pub type Voltage = Quantity<VoltageDim>;

/// Dimension vector of resistance.
pub type ResistanceDim = dimension!(P1, P2, N3, N2, Z0, Z0, Z0, Z0);
/// An electrical resistance.
pub type Resistance = Quantity<ResistanceDim>;

/// Dimension vector of conductance.
pub type ConductanceDim = dimension!(N1, N2, P3, P2, Z0, Z0, Z0, Z0);
/// An electrical conductance.
pub type Conductance = Quantity<ConductanceDim>;

units! {
    CurrentDim;
    /// Ampere (SI base unit).
    Ampere = "amp", 1.0;
}

units! {
    ChargeDim;
    /// Coulomb.
    Coulomb = "coulomb", 1.0;
}

units! {
    VoltageDim;
    /// Volt.
    Volt = "volt", 1.0;
}

metric_prefixes! {
    VoltageDim, Volt, "volt" =>
    Teravolt, Gigavolt, Megavolt, Kilovolt,
    Centivolt, Millivolt, Microvolt, Nanovolt,
}

units! {
    ResistanceDim;
    /// Ohm.
    Ohm = "ohm", 1.0;
}

metric_prefixes! {
    ResistanceDim, Ohm, "ohm" =>
    Teraohm, Gigaohm, Megaohm, Kiloohm,
    Centiohm, Milliohm, Microohm, Nanoohm,
}

units! {
    ConductanceDim;
    /// Siemens.
    Siemens = "siemen", 1.0;
}

metric_prefixes! {
    ConductanceDim, Siemens, "siemen" =>
    Terasiemens, Gigasiemens, Megasiemens, Kilosiemens,
    Centisiemens, Millisiemens, Microsiemens, Nanosiemens,
}
