//! Mass units.
//!
//! The base unit for this dimension is [`Kilogram`] (`Kilogram::RATIO == 1.0`).
//!
//! ```rust
//! use dimq_core::mass::{Gram, Kilogram, Pound};
//! use dimq_core::Unit;
//!
//! let m = Kilogram::new(5.0);
//! assert_eq!(m.value(), 5.0);
//! assert!((m.get::<Gram>() - 5000.0).abs() < 1e-9);
//! assert!((Pound::ONE.get::<Gram>() - 453.6).abs() < 1e-9);
//! ```

use crate::macros::units;
use crate::{dimension, Quantity};

/// Dimension vector of mass.
pub type MassDim = dimension!(P1, Z0, Z0, Z0, Z0, Z0, Z0, Z0);
/// A mass.
pub type Mass = Quantity<MassDim>;

units! {
    MassDim;
    /// Kilogram (SI base unit).
    Kilogram = "kg", 1.0;
    /// Gram.
    Gram = "g", <Kilogram as crate::Unit>::RATIO / 1000.0;
    /// Avoirdupois pound, rounded to `453.6 g`.
    Pound = "lb", <Gram as crate::Unit>::RATIO * 453.6;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Unit;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn kilogram_is_base() {
        assert_eq!(Kilogram::new(5.0).value(), 5.0);
    }

    #[test]
    fn gram_and_pound() {
        assert_relative_eq!(Gram::new(250.0).get::<Kilogram>(), 0.25);
        assert_relative_eq!(Pound::new(10.0).value(), 4.536, max_relative = 1e-12);
    }

    #[test]
    fn display_in_unit() {
        assert_eq!(Mass::new(1.5).display::<Kilogram>().to_string(), "1.5_kg");
        assert_eq!(format!("{}", Kilogram), "kg");
    }

    proptest! {
        #[test]
        fn prop_gram_roundtrip(v in -1e9..1e9f64) {
            let back = Gram::new(v).get::<Gram>();
            prop_assert!((back - v).abs() <= 1e-9 * v.abs().max(1.0));
        }
    }
}
