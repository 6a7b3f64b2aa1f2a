//! Exact rational numbers used as scale factors.
//!
//! Every operation here is a `const fn`, so the factor between two scales is folded into a constant when the
//! conversion is monomorphised. Invalid ratios (zero denominator, overflow while composing) panic during constant
//! evaluation, which surfaces as a build error rather than a runtime failure.

use core::fmt;

/// An exact ratio `num / den`, always stored in lowest terms with `den > 0`.
///
/// ```rust
/// use ratio_units_core::Rational;
///
/// let r = Rational::new(10, -4);
/// assert_eq!((r.num(), r.den()), (-5, 2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    num: i128,
    den: i128,
}

impl Rational {
    /// The multiplicative identity, `1/1`.
    pub const ONE: Self = Self { num: 1, den: 1 };

    /// Creates a reduced ratio.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero. Inside a constant (for example a [`Scale::RATIO`](crate::Scale::RATIO)) this is a
    /// compile error.
    #[inline]
    pub const fn new(num: i128, den: i128) -> Self {
        assert!(den != 0, "rational denominator must be non-zero");
        let g = gcd(num, den);
        let (num, den) = (num / g, den / g);
        if den < 0 {
            Self {
                num: -num,
                den: -den,
            }
        } else {
            Self { num, den }
        }
    }

    /// Numerator (carries the sign).
    #[inline]
    pub const fn num(&self) -> i128 {
        self.num
    }

    /// Denominator, always positive.
    #[inline]
    pub const fn den(&self) -> i128 {
        self.den
    }

    /// `true` for `1/1`.
    #[inline]
    pub const fn is_one(&self) -> bool {
        self.num == 1 && self.den == 1
    }

    /// `true` when the ratio is strictly greater than zero.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.num > 0
    }

    /// Returns `den / num`.
    ///
    /// # Panics
    ///
    /// Panics if the ratio is zero.
    #[inline]
    pub const fn recip(self) -> Self {
        Self::new(self.den, self.num)
    }

    /// Exact product of two ratios.
    ///
    /// Operands are cross-reduced before multiplying so intermediate values stay as small as possible.
    ///
    /// # Panics
    ///
    /// Panics if the reduced product does not fit in `i128`.
    pub const fn mul(self, rhs: Self) -> Self {
        let g1 = gcd(self.num, rhs.den);
        let g2 = gcd(rhs.num, self.den);
        let num = match (self.num / g1).checked_mul(rhs.num / g2) {
            Some(n) => n,
            None => panic!("rational numerator overflow"),
        };
        let den = match (self.den / g2).checked_mul(rhs.den / g1) {
            Some(d) => d,
            None => panic!("rational denominator overflow"),
        };
        Self::new(num, den)
    }

    /// Exact quotient `self / rhs`.
    ///
    /// ```rust
    /// use ratio_units_core::Rational;
    ///
    /// // millimetres (1/10 cm) expressed in metres (100 cm)
    /// let mm_to_m = Rational::new(1, 10).divide(Rational::new(100, 1));
    /// assert_eq!(mm_to_m, Rational::new(1, 1000));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero or the result overflows `i128`.
    #[inline]
    pub const fn divide(self, rhs: Self) -> Self {
        self.mul(rhs.recip())
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

/// Greatest common divisor; never zero as long as one argument is non-zero.
const fn gcd(a: i128, b: i128) -> i128 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    if a == 0 {
        1
    } else {
        a as i128
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_reduces_to_lowest_terms() {
        let r = Rational::new(100, 1000);
        assert_eq!(r.num(), 1);
        assert_eq!(r.den(), 10);
    }

    #[test]
    fn new_moves_sign_to_numerator() {
        assert_eq!(Rational::new(3, -6), Rational::new(-1, 2));
        assert_eq!(Rational::new(-3, -6), Rational::new(1, 2));
    }

    #[test]
    fn zero_numerator_normalises_denominator() {
        let r = Rational::new(0, 42);
        assert_eq!((r.num(), r.den()), (0, 1));
        assert!(!r.is_positive());
    }

    #[test]
    #[should_panic(expected = "denominator must be non-zero")]
    fn zero_denominator_panics() {
        let _ = Rational::new(1, 0);
    }

    #[test]
    fn const_evaluation() {
        const MM_PER_M: Rational = Rational::new(100, 1).divide(Rational::new(1, 10));
        assert_eq!(MM_PER_M, Rational::new(1000, 1));
    }

    #[test]
    fn divide_radian_by_degree() {
        let rad = Rational::new(18_000_000_000_000, 314_159_265_359);
        let r = rad.divide(Rational::ONE);
        assert_eq!(r, rad);
        assert_eq!(Rational::ONE.divide(rad), rad.recip());
    }

    #[test]
    fn is_one() {
        assert!(Rational::new(7, 7).is_one());
        assert!(!Rational::new(7, 8).is_one());
        assert!(Rational::default().is_one());
    }

    #[test]
    #[should_panic(expected = "overflow")]
    fn mul_overflow_panics() {
        let big = Rational::new(i128::MAX / 3, 1);
        let _ = big.mul(big);
    }

    #[test]
    fn display() {
        assert_eq!(Rational::new(2, 4).to_string(), "1/2");
        assert_eq!(Rational::new(-9, 3).to_string(), "-3/1");
    }

    proptest! {
        #[test]
        fn prop_divide_by_self_is_one(n in 1i128..1_000_000, d in 1i128..1_000_000) {
            let r = Rational::new(n, d);
            prop_assert!(r.divide(r).is_one());
        }

        #[test]
        fn prop_denominator_positive(n in -1_000_000i128..1_000_000, d in -1_000_000i128..1_000_000) {
            prop_assume!(d != 0);
            prop_assert!(Rational::new(n, d).den() > 0);
        }

        #[test]
        fn prop_mul_recip_roundtrip(n in 1i128..1_000_000, d in 1i128..1_000_000, m in 1i128..1_000_000) {
            let a = Rational::new(n, d);
            let b = Rational::new(m, 7);
            prop_assert_eq!(a.mul(b).divide(b), a);
        }
    }
}
