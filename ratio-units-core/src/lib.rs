//! Core type system for numeric values tagged with a scale and a category.
//!
//! `ratio-units-core` provides a small, zero-cost units model:
//!
//! - A *category* (length, angle, dose …) is an uninhabited marker type implementing [`Category`].
//! - A *scale* is a marker type implementing [`Scale`], carrying an exact [`Rational`] ratio to the category's base
//!   scale.
//! - A value tagged with both is a [`Unit<V, S, C>`], where `V` is any primitive [`Numeric`] payload.
//! - Conversion multiplies by the exact factor `S::RATIO / T::RATIO`, folded into a constant at build time.
//!
//! Most users should depend on `ratio-units` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time separation of categories: a length never mixes with an angle.
//! - Exact scale factors: ratios are reduced `i128` fractions, never rounded floats.
//! - Integer and floating-point payloads side by side, with C-like promotion in mixed arithmetic.
//!
//! # What this crate does not try to solve
//!
//! - Derived dimensions (`m/s`, `m^2`); multiplying two units is not supported.
//! - Offset scales such as Celsius/Fahrenheit.
//! - Automatic range checking on the default conversion path; see [`Unit::try_convert`] for the checked variant.
//!
//! # Quick start
//!
//! ```rust
//! use ratio_units_core::length::{Centimeters, Millimeters};
//!
//! let a = Millimeters::new(50_i64);
//! let b = Centimeters::new(5_i64);
//! assert!(a == b);
//!
//! let mut total = Millimeters::new(15_i32);
//! total += Centimeters::new(1_i32);
//! assert_eq!(total.value(), 25);
//! ```
//!
//! Declaring a new scale for an existing category:
//!
//! ```rust
//! use ratio_units_core::{Ratio, Unit};
//! use ratio_units_core::length::{Length, Meters};
//!
//! // A kilometre is 100 000 cm; the centimetre is the base length scale.
//! type Kilometers<V> = Unit<V, Ratio<100_000, 1>, Length>;
//!
//! let m: Meters<f64> = Kilometers::new(1.25_f64).convert();
//! assert_eq!(m.value(), 1250.0);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build without `std`:
//!
//! ```toml
//! [dependencies]
//! ratio-units-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for `Unit`; the compact form is the raw payload only, and
//!   [`serde_with_unit`] adds the suffix.
//!
//! # Panics and errors
//!
//! Category and scale mismatches are trait-bound errors, and invalid ratios panic during constant evaluation, which is
//! a build error. At runtime the operators behave like the primitive operations they wrap: integer division by a
//! zero (or truncated-to-zero) operand panics. Narrowing follows `as` semantics; the opt-in
//! [`try_convert`] path reports [`ConversionError`] instead.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "serde")]
extern crate alloc;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod category;
mod error;
mod macros;
mod numeric;
mod rational;
mod scale;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use category::Category;
pub use error::{ConversionError, ConversionResult};
pub use numeric::{Numeric, Promote};
pub use rational::Rational;
pub use scale::{Ratio, Scale, ScaleFactor, Suffix};
pub use unit::{convert, make_unit, try_convert, Unit, UnitType};

#[doc(hidden)]
pub use numeric::{Kind, Widened};

#[cfg(feature = "serde")]
pub use unit::serde_with_unit;

/// Payload type produced by integer literals in `unit!`.
pub type LiteralInt = i64;

/// Payload type produced by floating-point literals in `unit!`.
pub type LiteralFloat = f64;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by category)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit modules (grouped by category).
///
/// These are defined in `ratio-units-core` so they can implement [`Suffix`] without running into Rust's orphan
/// rules.
pub mod units;

pub use units::angle;
pub use units::dose;
pub use units::length;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::{Degrees, Radians};
    use crate::dose::{CentiGray, Gray};
    use crate::length::{Centimeters, Meters, Millimeters};
    use approx::assert_abs_diff_eq;

    // ─────────────────────────────────────────────────────────────────────────────
    // Cross-module behaviour of the built-in tables
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn literal_payload_types() {
        assert_eq!(<LiteralInt as Numeric>::NAME, "i64");
        assert_eq!(<LiteralFloat as Numeric>::NAME, "f64");
    }

    #[test]
    fn make_unit_matches_alias() {
        let a = make_unit::<i32, length::MillimeterScale, length::Length>(7);
        let b: Millimeters<i32> = Millimeters::new(7);
        assert!(a == b);
    }

    #[test]
    fn chained_conversion_through_three_scales() {
        let m = Meters::new(1.5_f64);
        let cm: Centimeters<f64> = m.convert();
        let mm: Millimeters<f64> = cm.convert();
        assert_eq!(mm.value(), 1500.0);
    }

    #[test]
    fn categories_are_independent() {
        assert_eq!(Degrees::<f64>::category_name(), "angle");
        assert_eq!(Gray::<f64>::category_name(), "dose");
        assert_eq!(Meters::<f64>::category_name(), "length");
    }

    #[test]
    fn angle_and_dose_conversions() {
        let rad: Radians<f64> = Degrees::new(90.0_f64).convert();
        assert_abs_diff_eq!(rad.value(), core::f64::consts::FRAC_PI_2, epsilon = 1e-10);

        let cgy: CentiGray<i32> = Gray::new(2_i32).convert();
        assert_eq!(cgy.value(), 200);
    }

    #[test]
    fn checked_conversion_surface() {
        let ok = try_convert::<Millimeters<i16>>(Meters::new(3_i64));
        assert_eq!(ok.map(|u| u.value()), Ok(3000));

        let err = try_convert::<Millimeters<i16>>(Meters::new(40_i64));
        assert_eq!(err, Err(ConversionError::OutOfRange { target: "i16" }));
    }
}
