//! Pure numbers.
//!
//! `Number` is the quantity type of every dimensionless result: ratios of two quantities of one dimension,
//! direction cosines, normalized vector components. It is the only quantity that converts to and from a bare `f64`.
//!
//! ```rust
//! use dimq_core::length::Length;
//! use dimq_core::number::{Number, Percent};
//! use dimq_core::Unit;
//!
//! let ratio: Number = Length::new(1.0) / Length::new(4.0);
//! assert_eq!(ratio.get::<Percent>(), 25.0);
//! ```

use crate::macros::units;
use crate::Dimensionless;

pub use crate::quantity::Number;

units! {
    Dimensionless;
    /// A plain count of one.
    Unity = "num", 1.0;
    /// One hundredth.
    Percent = "percent", 1.0 / 100.0;
}
