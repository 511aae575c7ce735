//! Length, area and curvature units.
//!
//! The base unit for length is [`Meter`] (`Meter::RATIO == 1.0`). Imperial units follow the international
//! definitions (`1 in = 2.54 cm`, `1 ft = 12 in`, `1 mi = 5280 ft`).
//!
//! ```rust
//! use dimq_core::length::{Foot, Meter, Mile};
//! use dimq_core::Unit;
//!
//! let sum = Meter::new(3.0) + Meter::new(2.0);
//! assert_eq!(sum, Meter::new(5.0));
//! assert!((Mile::ONE.convert(Foot::ONE) - 5280.0).abs() < 1e-9);
//! ```

use crate::macros::{metric_prefixes, units};
use crate::{dimension, Quantity};

/// Dimension vector of length.
pub type LengthDim = dimension!(Z0, P1, Z0, Z0, Z0, Z0, Z0, Z0);
/// A length.
pub type Length = Quantity<LengthDim>;

/// Dimension vector of area.
pub type AreaDim = dimension!(Z0, P2, Z0, Z0, Z0, Z0, Z0, Z0);
/// An area.
pub type Area = Quantity<AreaDim>;

/// Dimension vector of path curvature (inverse length).
pub type CurvatureDim = dimension!(Z0, N1, Z0, Z0, Z0, Z0, Z0, Z0);
/// A path curvature.
pub type Curvature = Quantity<CurvatureDim>;

// ─────────────────────────────────────────────────────────────────────────────
// Length
// ─────────────────────────────────────────────────────────────────────────────

units! {
    LengthDim;
    /// Metre (SI base unit).
    Meter = "m", 1.0;
}

metric_prefixes! {
    LengthDim, Meter, "m" =>
    Terameter, Gigameter, Megameter, Kilometer,
    Centimeter, Millimeter, Micrometer, Nanometer,
}

units! {
    LengthDim;
    /// International inch (`2.54 cm`).
    Inch = "in", <Centimeter as crate::Unit>::RATIO * 2.54;
    /// International foot (`12 in`).
    Foot = "ft", <Inch as crate::Unit>::RATIO * 12.0;
    /// Yard (`3 ft`).
    Yard = "yd", <Foot as crate::Unit>::RATIO * 3.0;
    /// Statute mile (`5280 ft`).
    Mile = "mi", <Foot as crate::Unit>::RATIO * 5280.0;
    /// Field tile (`600 mm`).
    Tile = "tile", <Millimeter as crate::Unit>::RATIO * 600.0;
}

// ─────────────────────────────────────────────────────────────────────────────
// Area
// ─────────────────────────────────────────────────────────────────────────────

units! {
    AreaDim;
    /// Square metre.
    SquareMeter = "m2", 1.0;
    /// Square terametre.
    SquareTerameter = "Tm2", <Terameter as crate::Unit>::RATIO * <Terameter as crate::Unit>::RATIO;
    /// Square gigametre.
    SquareGigameter = "Gm2", <Gigameter as crate::Unit>::RATIO * <Gigameter as crate::Unit>::RATIO;
    /// Square megametre.
    SquareMegameter = "Mm2", <Megameter as crate::Unit>::RATIO * <Megameter as crate::Unit>::RATIO;
    /// Square kilometre.
    SquareKilometer = "km2", <Kilometer as crate::Unit>::RATIO * <Kilometer as crate::Unit>::RATIO;
    /// Square centimetre.
    SquareCentimeter = "cm2", <Centimeter as crate::Unit>::RATIO * <Centimeter as crate::Unit>::RATIO;
    /// Square millimetre.
    SquareMillimeter = "mm2", <Millimeter as crate::Unit>::RATIO * <Millimeter as crate::Unit>::RATIO;
    /// Square micrometre.
    SquareMicrometer = "um2", <Micrometer as crate::Unit>::RATIO * <Micrometer as crate::Unit>::RATIO;
    /// Square nanometre.
    SquareNanometer = "nm2", <Nanometer as crate::Unit>::RATIO * <Nanometer as crate::Unit>::RATIO;
    /// Square inch.
    SquareInch = "in2", <Inch as crate::Unit>::RATIO * <Inch as crate::Unit>::RATIO;
}

// ─────────────────────────────────────────────────────────────────────────────
// Curvature
// ─────────────────────────────────────────────────────────────────────────────

units! {
    CurvatureDim;
    /// Turning per metre of path.
    RadianPerMeter = "radpm", 1.0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Unit;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn metric_ladder() {
        assert_relative_eq!(Kilometer::ONE.value(), 1000.0);
        assert_relative_eq!(Centimeter::ONE.value(), 0.01);
        assert_relative_eq!(Millimeter::ONE.value(), 0.001);
        assert_relative_eq!(Terameter::ONE.get::<Gigameter>(), 1000.0, max_relative = 1e-12);
        assert_eq!(Kilometer::SYMBOL, "km");
    }

    #[test]
    fn imperial_chain() {
        assert_relative_eq!(Inch::ONE.value(), 0.0254, max_relative = 1e-12);
        assert_relative_eq!(Foot::ONE.value(), 0.3048, max_relative = 1e-12);
        assert_relative_eq!(Yard::ONE.get::<Inch>(), 36.0, max_relative = 1e-12);
        assert_relative_eq!(Mile::ONE.convert(Foot::ONE), 5280.0, max_relative = 1e-12);
    }

    #[test]
    fn tile_is_600_mm() {
        assert_relative_eq!(Tile::ONE.value(), 0.6, max_relative = 1e-12);
    }

    #[test]
    fn square_units_match_squared_lengths() {
        let a: Area = Centimeter::ONE * Centimeter::ONE;
        assert_relative_eq!(a.value(), SquareCentimeter::ONE.value(), max_relative = 1e-12);
        assert_relative_eq!(SquareInch::ONE.value(), Inch::ONE.square().value(), max_relative = 1e-12);
    }

    #[test]
    fn curvature_is_inverse_length() {
        let k: Curvature = 1.0 / Length::new(4.0);
        assert_eq!(k.get::<RadianPerMeter>(), 0.25);
    }

    #[test]
    fn display_with_suffix() {
        assert_eq!(Meter::new(5.0).display::<Meter>().to_string(), "5_m");
        assert_eq!(Length::new(1.0).to_string(), "1 m");
        assert_eq!(Area::new(2.0).to_string(), "2 m^2");
    }

    proptest! {
        #[test]
        fn prop_foot_inch_roundtrip(v in -1e6..1e6f64) {
            let inches = Foot::new(v).get::<Inch>();
            prop_assert!((inches - 12.0 * v).abs() <= 1e-9 * v.abs().max(1.0));
        }
    }
}
