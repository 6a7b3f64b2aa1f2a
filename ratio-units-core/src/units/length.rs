//! Length units.
//!
//! The base scale for this category is [`CentimeterScale`] (`RATIO == 1/1`). Metres and millimetres are exact
//! decimal multiples of it.
//!
//! ```rust
//! use ratio_units_core::length::{Centimeters, Millimeters};
//!
//! let cm: Centimeters<f64> = Millimeters::new(41.0_f64).convert();
//! assert_eq!(cm.value(), 4.1);
//!
//! // Integer payloads truncate toward zero.
//! let cm: Centimeters<i32> = Millimeters::new(41_i32).convert();
//! assert_eq!(cm.value(), 4);
//! ```

use crate::Category;
use ratio_units_macros::Scale;

/// Category tag for lengths.
pub enum Length {}
impl Category for Length {
    const NAME: &'static str = "length";
}

/// Metre (`100 cm`).
#[derive(Debug, Scale)]
#[scale(ratio = 100, category = Length, suffix = "m", alias = Meters)]
pub enum MeterScale {}

/// Centimetre (base scale).
#[derive(Debug, Scale)]
#[scale(ratio = 1, category = Length, suffix = "cm", alias = Centimeters)]
pub enum CentimeterScale {}

/// Millimetre (`1/10 cm`).
#[derive(Debug, Scale)]
#[scale(ratio = 1 / 10, category = Length, suffix = "mm", alias = Millimeters)]
pub enum MillimeterScale {}
