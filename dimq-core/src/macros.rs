//! Declarative tables for the unit catalog.

/// Emits one `#[derive(Unit)]` marker per row of a dimension's unit table.
///
/// ```text
/// units! {
///     LengthDim;
///     /// Metre.
///     Meter = "m", 1.0;
///     /// International foot.
///     Foot = "ft", <Inch as crate::Unit>::RATIO * 12.0;
/// }
/// ```
macro_rules! units {
    ($dim:ident; $($(#[$meta:meta])* $name:ident = $symbol:expr, $ratio:expr;)+) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, dimq_derive::Unit)]
            #[unit(symbol = $symbol, dimension = $dim, ratio = $ratio)]
            pub struct $name;
        )+
    };
}

/// Emits the `T G M k c m u n` prefixed family of an existing unit.
///
/// Names are given explicitly, in prefix order; symbols are the prefix letter glued to the base symbol.
macro_rules! metric_prefixes {
    (
        $dim:ident, $base:ident, $symbol:literal =>
        $tera:ident, $giga:ident, $mega:ident, $kilo:ident,
        $centi:ident, $milli:ident, $micro:ident, $nano:ident $(,)?
    ) => {
        $crate::macros::units! {
            $dim;
            #[doc = concat!("`1e12 ", $symbol, "`.")]
            $tera = concat!("T", $symbol), <$base as $crate::Unit>::RATIO * 1e12;
            #[doc = concat!("`1e9 ", $symbol, "`.")]
            $giga = concat!("G", $symbol), <$base as $crate::Unit>::RATIO * 1e9;
            #[doc = concat!("`1e6 ", $symbol, "`.")]
            $mega = concat!("M", $symbol), <$base as $crate::Unit>::RATIO * 1e6;
            #[doc = concat!("`1e3 ", $symbol, "`.")]
            $kilo = concat!("k", $symbol), <$base as $crate::Unit>::RATIO * 1e3;
            #[doc = concat!("`1e-2 ", $symbol, "`.")]
            $centi = concat!("c", $symbol), <$base as $crate::Unit>::RATIO / 1e2;
            #[doc = concat!("`1e-3 ", $symbol, "`.")]
            $milli = concat!("m", $symbol), <$base as $crate::Unit>::RATIO / 1e3;
            #[doc = concat!("`1e-6 ", $symbol, "`.")]
            $micro = concat!("u", $symbol), <$base as $crate::Unit>::RATIO / 1e6;
            #[doc = concat!("`1e-9 ", $symbol, "`.")]
            $nano = concat!("n", $symbol), <$base as $crate::Unit>::RATIO / 1e9;
        }
    };
}

pub(crate) use metric_prefixes;
pub(crate) use units;
