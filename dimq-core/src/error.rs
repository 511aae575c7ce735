//! Error types.

use core::num::ParseFloatError;

/// Failure to read a quantity printed as `<value>_<symbol>`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseQuantityError {
    /// The text has no `_<symbol>` suffix.
    #[error("missing `_<symbol>` unit suffix")]
    MissingSuffix,

    /// The part before the suffix is not a number.
    #[error("invalid numeric value: {0}")]
    InvalidNumber(#[from] ParseFloatError),

    /// The suffix names another unit.
    #[error("unit suffix does not match `{expected}`")]
    UnitMismatch {
        /// Symbol of the unit the caller asked for.
        expected: &'static str,
    },
}
