//! Angle units.
//!
//! The base scale for this category is [`DegreeScale`]. A radian is `180/π` degrees, approximated by the exact
//! fraction `18_000_000_000_000 / 314_159_265_359` (π to eleven decimal places), so conversions stay rational.
//!
//! ```rust
//! use ratio_units_core::angle::{Degrees, Radians};
//!
//! let r: Radians<f64> = Degrees::new(180.0_f64).convert();
//! assert!((r.value() - core::f64::consts::PI).abs() < 1e-10);
//! ```

use crate::Category;
use ratio_units_macros::Scale;

/// Category tag for plane angles.
pub enum Angle {}
impl Category for Angle {
    const NAME: &'static str = "angle";
}

/// Degree (base scale).
#[derive(Debug, Scale)]
#[scale(ratio = 1, category = Angle, suffix = "deg", alias = Degrees)]
pub enum DegreeScale {}

/// Radian (`180/π deg`).
#[derive(Debug, Scale)]
#[scale(ratio = 18_000_000_000_000 / 314_159_265_359, category = Angle, suffix = "rad", alias = Radians)]
pub enum RadianScale {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::Meters;
    use crate::{Rational, Scale};
    use approx::assert_abs_diff_eq;
    use core::f64::consts::PI;
    use proptest::prelude::*;

    #[test]
    fn radian_ratio_is_reduced() {
        assert_eq!(
            RadianScale::RATIO,
            Rational::new(18_000_000_000_000, 314_159_265_359)
        );
        assert_eq!(RadianScale::RATIO.den(), 314_159_265_359);
    }

    #[test]
    fn half_turn() {
        let r: Radians<f64> = Degrees::new(180_i32).convert();
        assert_abs_diff_eq!(r.value(), PI, epsilon = 1e-10);

        let d: Degrees<f64> = Radians::new(PI).convert();
        assert_abs_diff_eq!(d.value(), 180.0, epsilon = 1e-8);
    }

    #[test]
    fn integer_radians_truncate() {
        let r: Radians<i32> = Degrees::new(180_i32).convert();
        assert_eq!(r.value(), 3);
    }

    #[test]
    fn same_payload_different_category() {
        assert_eq!(Degrees::<f64>::category_name(), "angle");
        assert_ne!(Degrees::<f64>::category_name(), Meters::<f64>::category_name());
    }

    #[test]
    fn display() {
        assert_eq!(Degrees::new(90_i32).to_string(), "90 [deg]");
        assert_eq!(format!("{:.3}", Radians::new(PI)), "3.142 [rad]");
    }

    proptest! {
        #[test]
        fn prop_deg_rad_roundtrip(v in -720.0..720.0f64) {
            let r: Radians<f64> = Degrees::new(v).convert();
            let back: Degrees<f64> = r.convert();
            prop_assert!((back.value() - v).abs() < 1e-9);
        }
    }
}
