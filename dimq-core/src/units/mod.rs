//! Predefined unit modules grouped by dimension.
//!
//! `dimq-core` ships the catalog itself so that the unit markers can implement the crate's traits without running
//! into Rust's orphan rules.
//!
//! ## Modules
//!
//! - [`number`]: pure numbers and percentages.
//! - [`mass`]: kilogram (base), gram, pound.
//! - [`time`]: second (base) with metric prefixes, minute, hour, day.
//! - [`length`]: metre (base) with metric prefixes, imperial units, area and curvature.
//! - [`velocity`]: linear velocity, acceleration and jerk.
//! - [`angular`]: angle, angular velocity and angular acceleration, plus trig and wrapping helpers.
//! - [`mechanics`]: inertia, force, torque, energy, power.
//! - [`electric`]: current, charge, voltage, resistance, conductance.
//! - [`base`]: temperature, luminous intensity, amount of substance.

pub mod angular;
pub mod base;
pub mod electric;
pub mod length;
pub mod mass;
pub mod mechanics;
pub mod number;
pub mod time;
pub mod velocity;
