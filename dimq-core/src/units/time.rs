//! Time units.
//!
//! The base unit for this dimension is [`Second`] (`Second::RATIO == 1.0`). Civil units use the conventional
//! mapping `1 day = 86_400 s` (leap seconds ignored).
//!
//! ```rust
//! use dimq_core::time::{Hour, Second};
//! use dimq_core::Unit;
//!
//! let half_hour = Hour::new(0.5);
//! assert!((half_hour.get::<Second>() - 1800.0).abs() < 1e-12);
//! ```

use crate::macros::{metric_prefixes, units};
use crate::{dimension, Quantity};

/// Dimension vector of time.
pub type TimeDim = dimension!(Z0, Z0, P1, Z0, Z0, Z0, Z0, Z0);
/// A duration.
pub type Time = Quantity<TimeDim>;

/// Conventional civil mapping used by this module: seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

units! {
    TimeDim;
    /// Second (SI base unit).
    Second = "sec", 1.0;
    /// Minute (`60 s`).
    Minute = "min", <Second as crate::Unit>::RATIO * 60.0;
    /// Hour (`60 min`).
    Hour = "hr", <Minute as crate::Unit>::RATIO * 60.0;
    /// Day (`24 hr`).
    Day = "day", <Hour as crate::Unit>::RATIO * 24.0;
}

metric_prefixes! {
    TimeDim, Second, "sec" =>
    Terasecond, Gigasecond, Megasecond, Kilosecond,
    Centisecond, Millisecond, Microsecond, Nanosecond,
}
