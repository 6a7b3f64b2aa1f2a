//! Numeric payload types: widening, `as`-style narrowing and type promotion.

use crate::error::ConversionError;
use crate::rational::Rational;
use core::fmt::{Debug, Display};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

mod sealed {
    pub trait Sealed {}
}

/// A payload in the type used for exact rescaling.
///
/// Integers widen to `i128` (`u128` keeps its own lane); floating-point values keep their own width. Rescaling multiplies by the factor
/// numerator first and divides by the denominator second, so integer results truncate toward zero.
#[doc(hidden)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Widened {
    /// Any integer payload except `u128`.
    Int(i128),
    /// A `u128` payload.
    UInt(u128),
    /// An `f32` payload.
    F32(f32),
    /// An `f64` payload.
    F64(f64),
}

/// Arithmetic domain a payload type computes in.
#[doc(hidden)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// Integer arithmetic.
    Int,
    /// `f32` arithmetic.
    F32,
    /// `f64` arithmetic.
    F64,
}

impl Widened {
    /// Moves the payload into `target`'s domain when that domain is wider.
    ///
    /// An integer converted into a floating-point unit is rescaled as a float, so `250 cm` becomes `2.5 m`
    /// rather than `2.0 m`. Floating-point payloads never drop to the integer domain here.
    #[inline]
    pub(crate) fn join(self, target: Kind) -> Self {
        match (self, target) {
            (Widened::Int(v), Kind::F32) => Widened::F32(v as f32),
            (Widened::Int(v), Kind::F64) => Widened::F64(v as f64),
            (Widened::UInt(v), Kind::F32) => Widened::F32(v as f32),
            (Widened::UInt(v), Kind::F64) => Widened::F64(v as f64),
            (Widened::F32(v), Kind::F64) => Widened::F64(v as f64),
            (other, _) => other,
        }
    }

    /// Applies `factor`; integer overflow wraps.
    #[inline]
    pub(crate) fn rescale(self, factor: Rational) -> Self {
        if factor.is_one() {
            return self;
        }
        match self {
            Widened::Int(v) => Widened::Int(v.wrapping_mul(factor.num()) / factor.den()),
            Widened::UInt(v) => Widened::UInt(v.wrapping_mul(factor.num() as u128) / factor.den() as u128),
            Widened::F32(v) => Widened::F32((factor.num() as f32 * v) / factor.den() as f32),
            Widened::F64(v) => Widened::F64((factor.num() as f64 * v) / factor.den() as f64),
        }
    }

    /// Applies `factor`, returning `None` if an integer payload overflows.
    #[inline]
    pub(crate) fn checked_rescale(self, factor: Rational) -> Option<Self> {
        match self {
            Widened::Int(v) => v
                .checked_mul(factor.num())
                .map(|scaled| Widened::Int(scaled / factor.den())),
            Widened::UInt(v) => v
                .checked_mul(factor.num() as u128)
                .map(|scaled| Widened::UInt(scaled / factor.den() as u128)),
            other => Some(other.rescale(factor)),
        }
    }
}

/// Primitive numeric types that can be carried by a [`Unit`](crate::Unit).
///
/// Implemented for every primitive integer (`i8` through `i128`, `isize`, `u8` through `u128`, `usize`) and for
/// `f32` and `f64`. The trait is sealed; the set is closed so that [`Promote`] can be total.
pub trait Numeric:
    sealed::Sealed
    + Copy
    + Default
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + 'static
{
    /// Name of the primitive type, used in error messages.
    const NAME: &'static str;

    #[doc(hidden)]
    const KIND: Kind;

    #[doc(hidden)]
    fn widen(self) -> Widened;

    #[doc(hidden)]
    fn narrow(wide: Widened) -> Self;

    #[doc(hidden)]
    fn try_narrow(wide: Widened) -> Result<Self, ConversionError>;

    /// Converts to another numeric type with the semantics of an `as` cast.
    ///
    /// ```rust
    /// use ratio_units_core::Numeric;
    ///
    /// assert_eq!(2.9f64.cast::<i32>(), 2);
    /// assert_eq!(300i32.cast::<u8>(), 44);
    /// ```
    #[inline]
    fn cast<T: Numeric>(self) -> T {
        T::narrow(self.widen())
    }
}

/// Result type of a binary operation between two payload types.
///
/// Promotion follows the usual arithmetic conversions over the total order
/// `i8 < u8 < i16 < u16 < i32 < u32 < i64 < u64 < i128 < u128 < f32 < f64`: floating-point beats integral, the wider
/// type wins, and at equal width the unsigned type wins. Small integers are not promoted to a wider type on their own.
///
/// `isize` and `usize` rank right after the fixed-width pair of the target's pointer width, so on a 64-bit target
/// `i64 < isize < u64 < usize`. Mixing `i64` with `isize` gives `isize`; mixing `isize` with `u64` gives `u64`.
///
/// ```rust
/// use ratio_units_core::Promote;
///
/// fn output<A: Promote<B>, B: ratio_units_core::Numeric>(_: A, _: B) -> &'static str {
///     <<A as Promote<B>>::Output as ratio_units_core::Numeric>::NAME
/// }
///
/// assert_eq!(output(5.0f64, 10i64), "f64");
/// assert_eq!(output(1i32, 1u32), "u32");
/// assert_eq!(output(1u64, 1i128), "i128");
/// assert_eq!(output(3usize, 1i8), "usize");
/// ```
pub trait Promote<Rhs: Numeric>: Numeric {
    /// The promoted type.
    type Output: Numeric;
}

fn float_to_int_in_range(v: f64, min: f64, max: f64) -> bool {
    (v > min - 1.0 || v == min) && v < max + 1.0
}

macro_rules! impl_numeric_int {
    ($($t:ty => $variant:ident($wide:ty)),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Numeric for $t {
                const NAME: &'static str = stringify!($t);
                const KIND: Kind = Kind::Int;

                #[inline]
                fn widen(self) -> Widened {
                    Widened::$variant(self as $wide)
                }

                #[inline]
                fn narrow(wide: Widened) -> Self {
                    match wide {
                        Widened::Int(v) => v as $t,
                        Widened::UInt(v) => v as $t,
                        Widened::F32(v) => v as $t,
                        Widened::F64(v) => v as $t,
                    }
                }

                fn try_narrow(wide: Widened) -> Result<Self, ConversionError> {
                    let out_of_range = ConversionError::OutOfRange { target: Self::NAME };
                    let float = match wide {
                        Widened::Int(v) => return <$t>::try_from(v).map_err(|_| out_of_range),
                        Widened::UInt(v) => return <$t>::try_from(v).map_err(|_| out_of_range),
                        Widened::F32(v) => v as f64,
                        Widened::F64(v) => v,
                    };
                    if !float.is_finite() {
                        return Err(ConversionError::NotFinite { target: Self::NAME });
                    }
                    if float_to_int_in_range(float, <$t>::MIN as f64, <$t>::MAX as f64) {
                        Ok(float as $t)
                    } else {
                        Err(out_of_range)
                    }
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($t:ident => $variant:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Numeric for $t {
                const NAME: &'static str = stringify!($t);
                const KIND: Kind = Kind::$variant;

                #[inline]
                fn widen(self) -> Widened {
                    Widened::$variant(self)
                }

                #[inline]
                fn narrow(wide: Widened) -> Self {
                    match wide {
                        Widened::Int(v) => v as $t,
                        Widened::UInt(v) => v as $t,
                        Widened::F32(v) => v as $t,
                        Widened::F64(v) => v as $t,
                    }
                }

                fn try_narrow(wide: Widened) -> Result<Self, ConversionError> {
                    // Non-finite floats stay non-finite; only a finite value that cannot be represented is an error.
                    let finite = match wide {
                        Widened::F64(v) if v.is_finite() => Some(v),
                        Widened::UInt(v) => Some(v as f64),
                        _ => None,
                    };
                    if let Some(v) = finite {
                        if v > <$t>::MAX as f64 || v < <$t>::MIN as f64 {
                            return Err(ConversionError::OutOfRange { target: Self::NAME });
                        }
                    }
                    Ok(Self::narrow(wide))
                }
            }
        )*
    };
}

impl_numeric_int!(
    i8 => Int(i128),
    i16 => Int(i128),
    i32 => Int(i128),
    i64 => Int(i128),
    i128 => Int(i128),
    isize => Int(i128),
    u8 => Int(i128),
    u16 => Int(i128),
    u32 => Int(i128),
    u64 => Int(i128),
    usize => Int(i128),
    u128 => UInt(u128),
);
impl_numeric_float!(f32 => F32, f64 => F64);

// `isize`/`usize` rank right after the fixed-width types of the same size.
#[cfg(target_pointer_width = "64")]
crate::impl_promote!(i8, u8, i16, u16, i32, u32, i64, isize, u64, usize, i128, u128, f32, f64);
#[cfg(target_pointer_width = "32")]
crate::impl_promote!(i8, u8, i16, u16, i32, isize, u32, usize, i64, u64, i128, u128, f32, f64);
#[cfg(target_pointer_width = "16")]
crate::impl_promote!(i8, u8, i16, isize, u16, usize, i32, u32, i64, u64, i128, u128, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn promoted<A: Promote<B>, B: Numeric>() -> &'static str {
        <<A as Promote<B>>::Output as Numeric>::NAME
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Promotion table
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn float_beats_integer() {
        assert_eq!(promoted::<f64, i64>(), "f64");
        assert_eq!(promoted::<i64, f64>(), "f64");
        assert_eq!(promoted::<u64, f32>(), "f32");
    }

    #[test]
    fn wider_float_wins() {
        assert_eq!(promoted::<f32, f64>(), "f64");
        assert_eq!(promoted::<f64, f32>(), "f64");
    }

    #[test]
    fn wider_integer_wins() {
        assert_eq!(promoted::<i8, i64>(), "i64");
        assert_eq!(promoted::<u32, i64>(), "i64");
        assert_eq!(promoted::<i128, u64>(), "i128");
    }

    #[test]
    fn unsigned_wins_at_equal_width() {
        assert_eq!(promoted::<i32, u32>(), "u32");
        assert_eq!(promoted::<u64, i64>(), "u64");
    }

    #[test]
    fn pointer_sized_integers_rank_by_width() {
        assert_eq!(promoted::<usize, u8>(), "usize");
        assert_eq!(promoted::<isize, i16>(), "isize");
        assert_eq!(promoted::<usize, f32>(), "f32");
        assert_eq!(promoted::<usize, i128>(), "i128");
        #[cfg(target_pointer_width = "64")]
        {
            assert_eq!(promoted::<i64, isize>(), "isize");
            assert_eq!(promoted::<isize, u64>(), "u64");
            assert_eq!(promoted::<usize, i64>(), "usize");
            assert_eq!(promoted::<u32, isize>(), "isize");
        }
        #[cfg(target_pointer_width = "32")]
        {
            assert_eq!(promoted::<i32, isize>(), "isize");
            assert_eq!(promoted::<usize, i64>(), "i64");
        }
    }

    #[test]
    fn u128_ranks_above_i128() {
        assert_eq!(promoted::<i128, u128>(), "u128");
        assert_eq!(promoted::<u128, u8>(), "u128");
        assert_eq!(promoted::<u128, f32>(), "f32");
    }

    #[test]
    fn same_type_is_identity() {
        assert_eq!(promoted::<i16, i16>(), "i16");
        assert_eq!(promoted::<f32, f32>(), "f32");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Rescaling
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn integer_rescale_truncates_toward_zero() {
        let factor = Rational::new(1, 10);
        assert_eq!(Widened::Int(41).rescale(factor), Widened::Int(4));
        assert_eq!(Widened::Int(-41).rescale(factor), Widened::Int(-4));
    }

    #[test]
    fn float_rescale_multiplies_then_divides() {
        let factor = Rational::new(10, 1);
        assert_eq!(Widened::F64(1.5).rescale(factor), Widened::F64(15.0));
        assert_eq!(Widened::F32(0.25).rescale(Rational::new(1, 2)), Widened::F32(0.125));
    }

    #[test]
    fn join_only_widens() {
        assert_eq!(Widened::Int(250).join(Kind::F64), Widened::F64(250.0));
        assert_eq!(Widened::Int(3).join(Kind::F32), Widened::F32(3.0));
        assert_eq!(Widened::F32(0.5).join(Kind::F64), Widened::F64(0.5));
        assert_eq!(Widened::F64(2.5).join(Kind::Int), Widened::F64(2.5));
        assert_eq!(Widened::F64(2.5).join(Kind::F32), Widened::F64(2.5));
    }

    #[test]
    fn u128_lane() {
        assert_eq!(u128::MAX.widen(), Widened::UInt(u128::MAX));
        assert_eq!(7usize.widen(), Widened::Int(7));
        assert_eq!(Widened::UInt(41).rescale(Rational::new(1, 10)), Widened::UInt(4));
        assert_eq!(Widened::UInt(3).join(Kind::F64), Widened::F64(3.0));
        assert_eq!(Widened::UInt(u128::MAX).checked_rescale(Rational::new(10, 1)), None);
        assert_eq!(
            Widened::UInt(u128::MAX / 10).checked_rescale(Rational::new(10, 1)),
            Some(Widened::UInt(u128::MAX / 10 * 10))
        );
    }

    #[test]
    fn checked_rescale_detects_overflow() {
        let factor = Rational::new(1_000, 1);
        assert_eq!(Widened::Int(i128::MAX / 10).checked_rescale(factor), None);
        assert_eq!(Widened::Int(7).checked_rescale(factor), Some(Widened::Int(7_000)));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Casting
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn cast_matches_as() {
        assert_eq!((-1i32).cast::<u8>(), -1i32 as u8);
        assert_eq!(1e10f64.cast::<i32>(), 1e10f64 as i32);
        assert_eq!(u64::MAX.cast::<f32>(), u64::MAX as f32);
        assert_eq!(3.75f32.cast::<i64>(), 3);
    }

    #[test]
    fn cast_pointer_sized_and_u128() {
        assert_eq!(5usize.cast::<f64>(), 5.0);
        assert_eq!((-3isize).cast::<i8>(), -3);
        assert_eq!(u128::MAX.cast::<u64>(), u128::MAX as u64);
        assert_eq!(u128::MAX.cast::<f64>(), u128::MAX as f64);
        assert_eq!((-1i32).cast::<u128>(), -1i32 as u128);
    }

    #[test]
    fn try_narrow_u128_lane() {
        assert_eq!(usize::try_narrow(Widened::UInt(12)), Ok(12));
        assert_eq!(
            i128::try_narrow(Widened::UInt(u128::MAX)),
            Err(ConversionError::OutOfRange { target: "i128" })
        );
        assert_eq!(
            u128::try_narrow(Widened::Int(-1)),
            Err(ConversionError::OutOfRange { target: "u128" })
        );
        assert_eq!(
            f32::try_narrow(Widened::UInt(u128::MAX)),
            Err(ConversionError::OutOfRange { target: "f32" })
        );
        assert!(f64::try_narrow(Widened::UInt(u128::MAX)).is_ok());
    }

    #[test]
    fn try_narrow_integer_range() {
        assert_eq!(u8::try_narrow(Widened::Int(255)), Ok(255));
        assert_eq!(
            u8::try_narrow(Widened::Int(256)),
            Err(ConversionError::OutOfRange { target: "u8" })
        );
        assert_eq!(
            u32::try_narrow(Widened::Int(-1)),
            Err(ConversionError::OutOfRange { target: "u32" })
        );
    }

    #[test]
    fn try_narrow_float_into_integer() {
        assert_eq!(i8::try_narrow(Widened::F64(-128.5)), Ok(-128));
        assert_eq!(i8::try_narrow(Widened::F64(127.9)), Ok(127));
        assert_eq!(
            i8::try_narrow(Widened::F64(128.0)),
            Err(ConversionError::OutOfRange { target: "i8" })
        );
        assert_eq!(
            i64::try_narrow(Widened::F64(f64::NAN)),
            Err(ConversionError::NotFinite { target: "i64" })
        );
        assert_eq!(i64::try_narrow(Widened::F64(-9.223372036854776e18)), Ok(i64::MIN));
    }

    #[test]
    fn try_narrow_f64_into_f32() {
        assert_eq!(f32::try_narrow(Widened::F64(1.5)), Ok(1.5));
        assert_eq!(
            f32::try_narrow(Widened::F64(1e300)),
            Err(ConversionError::OutOfRange { target: "f32" })
        );
        assert!(f32::try_narrow(Widened::F64(f64::INFINITY)).unwrap().is_infinite());
    }

    proptest! {
        #[test]
        fn prop_cast_i32_roundtrips_through_f64(v in any::<i32>()) {
            prop_assert_eq!(v.cast::<f64>().cast::<i32>(), v);
        }

        #[test]
        fn prop_try_narrow_agrees_with_try_from(v in any::<i64>()) {
            prop_assert_eq!(i16::try_narrow(Widened::Int(v as i128)).ok(), i16::try_from(v).ok());
        }
    }
}
