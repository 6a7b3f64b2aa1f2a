//! Compile-time checked units with exact rational scale conversion.
//!
//! `ratio-units` is the user-facing crate in this workspace. It re-exports the full API from `ratio-units-core`, the
//! predefined length, angle and dose units, the [`literals`] constructors and the [`unit!`] literal macro.
//!
//! The core idea is: a value is always a `Unit<V, S, C>`, where `V` is a primitive numeric payload, `S` a scale
//! marker with an exact ratio, and `C` a category marker. Scales and categories live only in the type, so a unit
//! costs exactly as much as its payload.
//!
//! # What this crate solves
//!
//! - Prevents mixing categories (you can't add millimetres to degrees).
//! - Converts between scales of one category with an exact rational factor computed at build time.
//! - Keeps integer payloads integral: `41 mm` converted to integer centimetres is `4 cm`.
//!
//! # What this crate does not try to solve
//!
//! - Derived units (`m/s`, `m^2`) or any unit algebra between categories.
//! - Offset scales such as temperatures.
//! - Parsing units from strings.
//!
//! # Quick start
//!
//! ```rust
//! use ratio_units::{unit, Centimeters, Millimeters};
//!
//! let a = unit!(50 mm);
//! let b = unit!(5 cm);
//! assert!(a == b);
//!
//! let mut total = unit!(15 mm);
//! total += unit!(1 cm);
//! assert!(total == unit!(25 mm));
//! assert!(total == unit!(2.5 cm));
//!
//! let mm: Millimeters<f64> = Centimeters::new(1.25_f64).convert();
//! assert_eq!(format!("{}", mm), "12.5 [mm]");
//! ```
//!
//! Mixed payloads promote like C arithmetic:
//!
//! ```rust
//! use ratio_units::{unit, Millimeters};
//!
//! let sum: Millimeters<f64> = unit!(5.0 mm) + unit!(10 mm);
//! assert_eq!(sum.value(), 15.0);
//! ```
//!
//! # Incorrect usage (type errors)
//!
//! Binary `+` requires the same scale on both sides:
//!
//! ```compile_fail
//! use ratio_units::unit;
//!
//! let _ = unit!(5 cm) + unit!(10 mm);
//! ```
//!
//! Lengths and angles never mix:
//!
//! ```compile_fail
//! use ratio_units::{Centimeters, Degrees};
//!
//! let _ = Centimeters::new(1.0_f64) + Degrees::new(1.0_f64);
//! ```
//!
//! ```compile_fail
//! use ratio_units::{Centimeters, Degrees};
//!
//! let _ = Centimeters::new(1.0_f64) == Degrees::new(1.0_f64);
//! ```
//!
//! ```compile_fail
//! use ratio_units::{Gray, Meters};
//!
//! let _: Gray<f64> = Meters::new(1.0_f64).convert();
//! ```
//!
//! Scalars must be primitive numbers, and two units never multiply:
//!
//! ```compile_fail
//! use ratio_units::Centimeters;
//!
//! let _ = Centimeters::new(1.0_f64) * "2";
//! ```
//!
//! ```compile_fail
//! use ratio_units::Centimeters;
//!
//! let _ = Centimeters::new(1.0_f64) * Centimeters::new(2.0_f64);
//! ```
//!
//! A scale ratio must be positive:
//!
//! ```compile_fail
//! use ratio_units::{Length, Millimeters, Ratio, Unit};
//!
//! let _: Millimeters<f64> = Unit::<f64, Ratio<0, 1>, Length>::new(1.0).convert();
//! ```
//!
//! Only scales with a suffix can be displayed:
//!
//! ```compile_fail
//! use ratio_units::{Length, Ratio, Unit};
//!
//! let _ = format!("{}", Unit::<f64, Ratio<254, 100>, Length>::new(1.0));
//! ```
//!
//! # Modules
//!
//! Units are grouped by category under modules (also re-exported at the crate root for convenience):
//!
//! - `ratio_units::length` (metres, centimetres, millimetres)
//! - `ratio_units::angle` (degrees, radians)
//! - `ratio_units::dose` (gray, centigray)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `ratio-units-core`.
//! - `serde`: enables `serde` support for `Unit`; the compact form is the raw payload only, and
//!   [`serde_with_unit`] stores the suffix alongside it.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! ratio-units = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Every compatibility rule is checked by the compiler. At runtime the operators behave like the primitive operations
//! they wrap, so integer unit division panics when the right operand truncates to zero in the left operand's scale. Narrowing conversions use
//! `as` semantics. [`try_convert`] is the range-checked alternative and returns [`ConversionError`].
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate self as ratio_units;

pub use ratio_units_core::*;

/// Builds a unit from a literal and a suffix: `unit!(12.3 mm)`, `unit!(-5 cm)`, `unit!(2 Gy)`.
///
/// Integer literals produce a [`LiteralInt`] payload and floating-point literals a [`LiteralFloat`] payload. The
/// suffix names a function in [`literals`].
///
/// ```rust
/// use ratio_units::{unit, Millimeters, Radians};
///
/// let a: Millimeters<f64> = unit!(12.3 mm);
/// let b: Radians<i64> = unit!(-3 rad);
/// assert_eq!(a.to_string(), "12.3 [mm]");
/// assert_eq!(b.value(), -3);
/// ```
///
/// Typed literals are rejected:
///
/// ```compile_fail
/// let _ = ratio_units::unit!(5u8 mm);
/// ```
pub use ratio_units_macros::unit;

pub mod literals;

pub use ratio_units_core::units::angle::*;
pub use ratio_units_core::units::dose::*;
pub use ratio_units_core::units::length::*;
