//! The remaining SI base dimensions: temperature, luminous intensity and amount of substance.
//!
//! Each has a single unit in this catalog.

use crate::macros::units;
use crate::{dimension, Quantity};

/// Dimension vector of thermodynamic temperature.
pub type TemperatureDim = dimension!(Z0, Z0, Z0, Z0, Z0, P1, Z0, Z0);
/// A thermodynamic temperature.
pub type Temperature = Quantity<TemperatureDim>;

/// Dimension vector of luminous intensity.
pub type LuminosityDim = dimension!(Z0, Z0, Z0, Z0, Z0, Z0, P1, Z0);
/// A luminous intensity.
pub type Luminosity = Quantity<LuminosityDim>;

/// Dimension vector of amount of substance.
pub type AmountDim = dimension!(Z0, Z0, Z0, Z0, Z0, Z0, Z0, P1);
/// An amount of substance.
pub type Amount = Quantity<AmountDim>;

units! {
    TemperatureDim;
    /// Kelvin (SI base unit).
    Kelvin = "kelvin", 1.0;
}

units! {
    LuminosityDim;
    /// Candela (SI base unit).
    Candela = "candela", 1.0;
}

units! {
    AmountDim;
    /// Mole (SI base unit).
    Mole = "mol", 1.0;
}
