//! Constructor functions for the built-in scales.
//!
//! Each function wraps a raw payload verbatim and is named after the scale's display suffix, which is what the
//! [`unit!`](crate::unit) macro expands to. They are also handy on their own to pick a payload type:
//!
//! ```rust
//! use ratio_units::literals::{cm, mm};
//!
//! let a = mm(50_u16);
//! let b = cm(5_u8);
//! assert!(a == b);
//! ```
#![allow(non_snake_case)]

use crate::{CentiGray, Centimeters, Degrees, Gray, Meters, Millimeters, Numeric, Radians, Unit};

/// Metres.
#[inline]
pub const fn m<V: Numeric>(value: V) -> Meters<V> {
    Unit::new(value)
}

/// Centimetres.
#[inline]
pub const fn cm<V: Numeric>(value: V) -> Centimeters<V> {
    Unit::new(value)
}

/// Millimetres.
#[inline]
pub const fn mm<V: Numeric>(value: V) -> Millimeters<V> {
    Unit::new(value)
}

/// Degrees.
#[inline]
pub const fn deg<V: Numeric>(value: V) -> Degrees<V> {
    Unit::new(value)
}

/// Radians.
#[inline]
pub const fn rad<V: Numeric>(value: V) -> Radians<V> {
    Unit::new(value)
}

/// Gray.
#[inline]
pub const fn Gy<V: Numeric>(value: V) -> Gray<V> {
    Unit::new(value)
}

/// Centigray.
#[inline]
pub const fn cGy<V: Numeric>(value: V) -> CentiGray<V> {
    Unit::new(value)
}
