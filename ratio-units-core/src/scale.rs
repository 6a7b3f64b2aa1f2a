//! Scale traits and the compile-time conversion factor.

use crate::category::Category;
use crate::rational::Rational;
use core::marker::PhantomData;

/// Trait implemented by every **scale** type.
///
/// `RATIO` is the number of base units of the category that one unit of this scale represents. Within a category
/// one scale is chosen as the base (`RATIO == 1/1`); for example with centimetres as the base length, metres use
/// `100/1` and millimetres `1/10`.
///
/// # Invariants
///
/// - `RATIO` must be strictly positive. This is checked while evaluating [`ScaleFactor::RATIO`], so a bad ratio
///   fails the build as soon as the scale takes part in a conversion.
/// - Implementations should be uninhabited or zero-sized marker types.
///
/// Built-in scales are declared with `#[derive(Scale)]`; ad-hoc scales can use [`Ratio`].
pub trait Scale: 'static {
    /// Ratio of this scale to the category's base scale.
    const RATIO: Rational;
}

/// Display suffix for a (scale, category) pair.
///
/// Only pairs present in this table can be formatted with [`core::fmt::Display`].
pub trait Suffix<C: Category>: Scale {
    /// Short symbol, e.g. `"mm"` or `"rad"`.
    const SUFFIX: &'static str;
}

/// Anonymous type-level scale `NUM / DEN`.
///
/// Useful for one-off scales that do not need a name or a display suffix:
///
/// ```rust
/// use ratio_units_core::{Ratio, Unit};
/// use ratio_units_core::length::{Length, Millimeters};
///
/// // An inch is 2.54 cm, and the centimetre is the base length scale.
/// type Inches<V> = Unit<V, Ratio<254, 100>, Length>;
///
/// let mm: Millimeters<f64> = Inches::new(1.0).convert();
/// assert!((mm.value() - 25.4).abs() < 1e-12);
/// ```
///
/// A zero denominator is rejected at build time:
///
/// ```compile_fail
/// use ratio_units_core::{Ratio, Unit};
/// use ratio_units_core::length::{Length, Millimeters};
///
/// let broken = Unit::<f64, Ratio<1, 0>, Length>::new(1.0);
/// let _: Millimeters<f64> = broken.convert();
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Ratio<const NUM: i128, const DEN: i128>;

impl<const NUM: i128, const DEN: i128> Scale for Ratio<NUM, DEN> {
    const RATIO: Rational = Rational::new(NUM, DEN);
}

/// Exact factor that converts a payload expressed in `Src` into `Dst`: `dst = src * RATIO`.
///
/// ```rust
/// use ratio_units_core::{Rational, ScaleFactor};
/// use ratio_units_core::length::{CentimeterScale, MillimeterScale};
///
/// assert_eq!(ScaleFactor::<CentimeterScale, MillimeterScale>::RATIO, Rational::new(10, 1));
/// ```
pub struct ScaleFactor<Src, Dst>(PhantomData<(Src, Dst)>);

impl<Src: Scale, Dst: Scale> ScaleFactor<Src, Dst> {
    /// `Src::RATIO / Dst::RATIO`, reduced.
    pub const RATIO: Rational = positive(Src::RATIO).divide(positive(Dst::RATIO));
}

const fn positive(ratio: Rational) -> Rational {
    assert!(ratio.is_positive(), "scale ratio must be positive");
    ratio
}

#[cfg(test)]
mod tests {
    use super::*;

    enum Widget {}
    impl Category for Widget {
        const NAME: &'static str = "widget";
    }

    enum Dozen {}
    impl Scale for Dozen {
        const RATIO: Rational = Rational::new(12, 1);
    }
    impl Suffix<Widget> for Dozen {
        const SUFFIX: &'static str = "dz";
    }

    type Each = Ratio<1, 1>;
    type Gross = Ratio<144, 1>;

    #[test]
    fn ratio_type_reduces() {
        assert_eq!(<Ratio<10, 100> as Scale>::RATIO, Rational::new(1, 10));
    }

    #[test]
    fn factor_identity() {
        assert!(ScaleFactor::<Dozen, Dozen>::RATIO.is_one());
        assert!(ScaleFactor::<Each, Ratio<3, 3>>::RATIO.is_one());
    }

    #[test]
    fn factor_between_scales() {
        assert_eq!(ScaleFactor::<Dozen, Each>::RATIO, Rational::new(12, 1));
        assert_eq!(ScaleFactor::<Each, Dozen>::RATIO, Rational::new(1, 12));
        assert_eq!(ScaleFactor::<Gross, Dozen>::RATIO, Rational::new(12, 1));
    }

    #[test]
    fn factor_composes_to_identity() {
        let there = ScaleFactor::<Gross, Dozen>::RATIO;
        let back = ScaleFactor::<Dozen, Gross>::RATIO;
        assert!(there.mul(back).is_one());
    }

    #[test]
    fn suffix_table_lookup() {
        assert_eq!(<Dozen as Suffix<Widget>>::SUFFIX, "dz");
        assert_eq!(Widget::NAME, "widget");
    }
}
