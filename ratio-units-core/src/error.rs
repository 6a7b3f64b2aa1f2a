//! Error type for range-checked conversions.
//!
//! Plain [`Unit::convert`](crate::Unit::convert) never fails: narrowing follows `as` semantics. These errors are only
//! produced by the opt-in [`Unit::try_convert`](crate::Unit::try_convert) path.

use crate::rational::Rational;

/// Result type for checked conversions.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Reasons a checked conversion can reject a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// An integer payload overflowed while being multiplied by the scale factor.
    #[error("Overflow: rescaling a {value_type} payload by {factor} exceeds i128")]
    Overflow {
        /// Source payload type.
        value_type: &'static str,
        /// Factor that was being applied.
        factor: Rational,
    },

    /// NaN or an infinity was narrowed into an integer type.
    #[error("Not finite: NaN or infinity cannot be represented as {target}")]
    NotFinite {
        /// Target payload type.
        target: &'static str,
    },

    /// The rescaled value lies outside the target type's range.
    #[error("Out of range: value does not fit in {target}")]
    OutOfRange {
        /// Target payload type.
        target: &'static str,
    },
}
