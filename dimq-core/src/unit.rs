//! Named units.
//!
//! A quantity always stores its value in the base unit of its dimension. A [`Unit`] is a zero-sized marker that
//! gives a name, a symbol and a scale factor to one particular multiple of that base unit, so that values can be
//! entered, read back and printed in it.

use crate::error::ParseQuantityError;
use crate::{Dimension, Quantity};
use core::fmt::{Debug, Display, Formatter, Result as FmtResult};
use core::marker::PhantomData;

/// Trait implemented by every **unit** marker.
///
/// * `RATIO` is the size of one of this unit in the base unit of `Dim`. Example: metres are the base length unit
///   (`Meter::RATIO == 1.0`), and `Foot::RATIO == 0.3048` because `1 ft = 0.3048 m`.
/// * `SYMBOL` is the printable suffix (e.g. `"m"` or `"ft"`).
/// * `Dim` is the dimension vector the unit measures.
///
/// # Invariants
///
/// - Implementations should be zero-sized marker types.
/// - `RATIO` should be finite and non-zero.
pub trait Unit: Copy + Debug + 'static {
    /// Base units per one of this unit.
    const RATIO: f64;

    /// Printable symbol.
    const SYMBOL: &'static str;

    /// Dimension measured by this unit.
    type Dim: Dimension;

    /// One of this unit.
    ///
    /// ```rust
    /// use dimq_core::length::{Foot, Inch};
    /// use dimq_core::Unit;
    ///
    /// assert!((Foot::ONE.convert(Inch::ONE) - 12.0).abs() < 1e-12);
    /// ```
    const ONE: Quantity<Self::Dim> = Quantity::new(Self::RATIO);

    /// A quantity of `value` of this unit.
    #[inline]
    fn new(value: f64) -> Quantity<Self::Dim> {
        Quantity::new(value * Self::RATIO)
    }

    /// `quantity` expressed in this unit.
    #[inline]
    fn of(quantity: Quantity<Self::Dim>) -> f64 {
        quantity.value() / Self::RATIO
    }
}

impl<D: Dimension> Quantity<D> {
    /// Value of this quantity in unit `U`.
    ///
    /// ```rust
    /// use dimq_core::time::{Minute, Second};
    /// use dimq_core::Unit;
    ///
    /// let t = Minute::new(2.0);
    /// assert_eq!(t.get::<Second>(), 120.0);
    /// ```
    #[inline]
    pub fn get<U: Unit<Dim = D>>(self) -> f64 {
        U::of(self)
    }

    /// Formats this quantity in unit `U` as `<value>_<symbol>`.
    ///
    /// ```rust
    /// use dimq_core::length::{Length, Meter};
    ///
    /// assert_eq!(Length::new(5.0).display::<Meter>().to_string(), "5_m");
    /// ```
    #[inline]
    pub fn display<U: Unit<Dim = D>>(self) -> WithUnit<U> {
        WithUnit::new(U::of(self))
    }

    /// Reads a quantity printed as `<value>_<symbol>` in unit `U`.
    ///
    /// Surrounding whitespace is ignored. The suffix must be exactly `U::SYMBOL`.
    ///
    /// ```rust
    /// use dimq_core::length::{Foot, Length};
    /// use dimq_core::{ParseQuantityError, Unit};
    ///
    /// let l = Length::parse_in::<Foot>(" 3_ft ").unwrap();
    /// assert!((l.value() - 0.9144).abs() < 1e-12);
    ///
    /// assert_eq!(
    ///     Length::parse_in::<Foot>("3_m"),
    ///     Err(ParseQuantityError::UnitMismatch { expected: "ft" })
    /// );
    /// ```
    pub fn parse_in<U: Unit<Dim = D>>(text: &str) -> Result<Self, ParseQuantityError> {
        let Some((number, symbol)) = text.trim().rsplit_once('_') else {
            log::debug!("rejecting {text:?}: no unit suffix");
            return Err(ParseQuantityError::MissingSuffix);
        };
        if symbol != U::SYMBOL {
            log::debug!("rejecting {text:?}: expected suffix `{}`", U::SYMBOL);
            return Err(ParseQuantityError::UnitMismatch { expected: U::SYMBOL });
        }
        let value: f64 = number.trim().parse().map_err(|err| {
            log::debug!("rejecting {text:?}: {err}");
            ParseQuantityError::from(err)
        })?;
        Ok(U::new(value))
    }
}

/// A value expressed in unit `U`, printed as `<value>_<symbol>`.
///
/// Formatting flags apply to the number: `format!("{:.2}", q.display::<Meter>())` gives `1.50_m`.
pub struct WithUnit<U: Unit> {
    value: f64,
    _unit: PhantomData<U>,
}

impl<U: Unit> WithUnit<U> {
    /// Wraps a value already expressed in `U`.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            value,
            _unit: PhantomData,
        }
    }

    /// The number, in `U`.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Back to a base-unit quantity.
    #[inline]
    pub fn quantity(&self) -> Quantity<U::Dim> {
        U::new(self.value)
    }
}

impl<U: Unit> Clone for WithUnit<U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: Unit> Copy for WithUnit<U> {}

impl<U: Unit> Debug for WithUnit<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("WithUnit")
            .field("value", &self.value)
            .field("unit", &U::SYMBOL)
            .finish()
    }
}

impl<U: Unit> Display for WithUnit<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.value, f)?;
        write!(f, "_{}", U::SYMBOL)
    }
}
