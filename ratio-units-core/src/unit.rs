//! The `Unit` value type and its operator implementations.

use crate::category::Category;
use crate::error::{ConversionError, ConversionResult};
use crate::numeric::{Numeric, Promote};
use crate::rational::Rational;
use crate::scale::{Scale, ScaleFactor, Suffix};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A numeric value tagged with a scale and a category.
///
/// `Unit<V, S, C>` stores a `V` payload; `S` and `C` exist only at the type level. Two units interact only when they
/// share the category `C`, and binary `+`/`-` additionally require the exact same scale `S` so the result's scale is
/// never ambiguous.
///
/// # Examples
///
/// ```rust
/// use ratio_units_core::length::{Centimeters, Millimeters};
///
/// let a = Millimeters::new(50_i64);
/// let b = Centimeters::new(5_i64);
/// assert!(a == b);
///
/// let mm: Millimeters<f64> = Centimeters::new(1.25).convert();
/// assert_eq!(mm.value(), 12.5);
/// ```
///
/// Mixing scales in a binary addition does not compile; convert one operand first:
///
/// ```compile_fail
/// use ratio_units_core::length::{Centimeters, Millimeters};
///
/// let _ = Centimeters::new(5.0) + Millimeters::new(10.0);
/// ```
pub struct Unit<V: Numeric, S: Scale, C: Category> {
    value: V,
    _tag: PhantomData<(S, C)>,
}

/// Type-level description of a [`Unit`], used to name conversion targets.
///
/// Only [`Unit`] implements this trait.
pub trait UnitType: Copy {
    /// Payload type.
    type Value: Numeric;
    /// Scale marker.
    type Scale: Scale;
    /// Category marker.
    type Category: Category;

    /// Wraps a raw payload.
    fn from_value(value: Self::Value) -> Self;

    /// Returns the raw payload.
    fn into_value(self) -> Self::Value;
}

impl<V: Numeric, S: Scale, C: Category> UnitType for Unit<V, S, C> {
    type Value = V;
    type Scale = S;
    type Category = C;

    #[inline]
    fn from_value(value: V) -> Self {
        Self::new(value)
    }

    #[inline]
    fn into_value(self) -> V {
        self.value
    }
}

/// Wraps `raw` verbatim as a `Unit<V, S, C>`; no scaling is applied.
///
/// ```rust
/// use ratio_units_core::make_unit;
/// use ratio_units_core::angle::{Angle, DegreeScale, Degrees};
///
/// let a: Degrees<f32> = make_unit::<f32, DegreeScale, Angle>(90.0);
/// assert_eq!(a.value(), 90.0);
/// ```
#[inline]
pub const fn make_unit<V: Numeric, S: Scale, C: Category>(raw: V) -> Unit<V, S, C> {
    Unit::new(raw)
}

/// Converts `unit` into `T`, which must belong to the same category.
///
/// ```rust
/// use ratio_units_core::convert;
/// use ratio_units_core::length::{Centimeters, Millimeters};
///
/// let mm = convert::<Millimeters<f64>>(Centimeters::new(1_i64));
/// assert_eq!(mm.value(), 10.0);
/// ```
///
/// ```compile_fail
/// use ratio_units_core::convert;
/// use ratio_units_core::angle::Radians;
/// use ratio_units_core::length::Centimeters;
///
/// let _ = convert::<Radians<f64>>(Centimeters::new(1.0));
/// ```
#[inline]
pub fn convert<T: UnitType>(unit: impl UnitType<Category = T::Category>) -> T {
    rescale(unit)
}

/// Range-checked variant of [`convert`].
#[inline]
pub fn try_convert<T: UnitType>(unit: impl UnitType<Category = T::Category>) -> ConversionResult<T> {
    try_rescale(unit)
}

#[inline]
fn rescale<T, U>(unit: U) -> T
where
    T: UnitType,
    U: UnitType<Category = T::Category>,
{
    let factor = ScaleFactor::<U::Scale, T::Scale>::RATIO;
    let wide = unit.into_value().widen().join(T::Value::KIND).rescale(factor);
    T::from_value(T::Value::narrow(wide))
}

fn try_rescale<T, U>(unit: U) -> ConversionResult<T>
where
    T: UnitType,
    U: UnitType<Category = T::Category>,
{
    let factor = ScaleFactor::<U::Scale, T::Scale>::RATIO;
    let wide = unit
        .into_value()
        .widen()
        .join(T::Value::KIND)
        .checked_rescale(factor)
        .ok_or(ConversionError::Overflow {
            value_type: U::Value::NAME,
            factor,
        })?;
    T::Value::try_narrow(wide).map(T::from_value)
}

impl<V: Numeric, S: Scale, C: Category> Unit<V, S, C> {
    /// Creates a new unit holding `value` verbatim.
    ///
    /// ```rust
    /// use ratio_units_core::dose::Gray;
    /// let d = Gray::new(2_i32);
    /// assert_eq!(d.value(), 2);
    /// ```
    #[inline]
    pub const fn new(value: V) -> Self {
        Self {
            value,
            _tag: PhantomData,
        }
    }

    /// Returns the raw payload, unchanged.
    #[inline]
    pub const fn value(&self) -> V {
        self.value
    }

    /// Converts to another unit of the same category.
    ///
    /// The payload is multiplied by the exact ratio `S / T::Scale` and then narrowed to the target payload type with
    /// `as` semantics: integer results truncate toward zero and out-of-range values are not reported. Use
    /// [`Unit::try_convert`] when range errors matter.
    ///
    /// ```rust
    /// use ratio_units_core::length::{Centimeters, Meters};
    ///
    /// let m: Meters<f64> = Centimeters::new(250_i64).convert();
    /// assert_eq!(m.value(), 2.5);
    /// ```
    #[inline]
    pub fn convert<T>(self) -> T
    where
        T: UnitType<Category = C>,
    {
        rescale(self)
    }

    /// Converts to another unit of the same category, rejecting values that overflow during rescaling or do not
    /// fit the target payload type.
    ///
    /// ```rust
    /// use ratio_units_core::ConversionError;
    /// use ratio_units_core::length::{Centimeters, Millimeters};
    ///
    /// let ok: Millimeters<u8> = Centimeters::new(25_i32).try_convert().unwrap();
    /// assert_eq!(ok.value(), 250);
    ///
    /// let err = Centimeters::new(26_i32).try_convert::<Millimeters<u8>>().unwrap_err();
    /// assert_eq!(err, ConversionError::OutOfRange { target: "u8" });
    /// ```
    #[inline]
    pub fn try_convert<T>(self) -> ConversionResult<T>
    where
        T: UnitType<Category = C>,
    {
        try_rescale(self)
    }

    /// Changes the payload type only, with `as` semantics; scale and category are kept.
    ///
    /// ```rust
    /// use ratio_units_core::length::Millimeters;
    /// assert_eq!(Millimeters::new(1.9_f64).cast::<i32>().value(), 1);
    /// ```
    #[inline]
    pub fn cast<V2: Numeric>(self) -> Unit<V2, S, C> {
        Unit::new(self.value.cast())
    }

    /// Name of the category, e.g. `"length"`.
    #[inline]
    pub const fn category_name() -> &'static str {
        C::NAME
    }

    /// Ratio of this unit's scale to the category's base scale.
    #[inline]
    pub const fn scale_ratio() -> Rational {
        S::RATIO
    }

    /// Display suffix of this (scale, category) pair.
    #[inline]
    pub const fn suffix() -> &'static str
    where
        S: Suffix<C>,
    {
        S::SUFFIX
    }

    /// Brings `other` into this unit's scale, with both payloads in the promoted type.
    #[inline]
    fn align<V2, S2>(
        self,
        other: Unit<V2, S2, C>,
    ) -> (<V as Promote<V2>>::Output, <V as Promote<V2>>::Output)
    where
        V: Promote<V2>,
        V2: Numeric,
        S2: Scale,
    {
        let rhs: Unit<<V as Promote<V2>>::Output, S, C> =
            other.cast::<<V as Promote<V2>>::Output>().convert();
        (self.value.cast(), rhs.value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Value semantics
// ─────────────────────────────────────────────────────────────────────────────

impl<V: Numeric, S: Scale, C: Category> Clone for Unit<V, S, C> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: Numeric, S: Scale, C: Category> Copy for Unit<V, S, C> {}

impl<V: Numeric, S: Scale, C: Category> Default for Unit<V, S, C> {
    #[inline]
    fn default() -> Self {
        Self::new(V::default())
    }
}

impl<V: Numeric, S: Scale, C: Category> From<V> for Unit<V, S, C> {
    #[inline]
    fn from(value: V) -> Self {
        Self::new(value)
    }
}

impl<V: Numeric, S: Scale, C: Category> fmt::Debug for Unit<V, S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unit")
            .field("value", &self.value)
            .field("scale", &format_args!("{}", S::RATIO))
            .field("category", &C::NAME)
            .finish()
    }
}

/// Formats as `<value> [<suffix>]`; formatter flags apply to the value.
///
/// ```rust
/// use ratio_units_core::length::Millimeters;
///
/// assert_eq!(format!("{}", Millimeters::new(12.3)), "12.3 [mm]");
/// assert_eq!(format!("{:.2}", Millimeters::new(1.0 / 3.0)), "0.33 [mm]");
/// ```
impl<V: Numeric, S: Suffix<C>, C: Category> fmt::Display for Unit<V, S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)?;
        write!(f, " [{}]", S::SUFFIX)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison (any scale, same category)
// ─────────────────────────────────────────────────────────────────────────────

impl<V1, S1, C, V2, S2> PartialEq<Unit<V2, S2, C>> for Unit<V1, S1, C>
where
    V1: Promote<V2>,
    V2: Numeric,
    S1: Scale,
    S2: Scale,
    C: Category,
{
    #[inline]
    fn eq(&self, other: &Unit<V2, S2, C>) -> bool {
        let (lhs, rhs) = self.align(*other);
        lhs == rhs
    }
}

impl<V1, S1, C, V2, S2> PartialOrd<Unit<V2, S2, C>> for Unit<V1, S1, C>
where
    V1: Promote<V2>,
    V2: Numeric,
    S1: Scale,
    S2: Scale,
    C: Category,
{
    #[inline]
    fn partial_cmp(&self, other: &Unit<V2, S2, C>) -> Option<Ordering> {
        let (lhs, rhs) = self.align(*other);
        lhs.partial_cmp(&rhs)
    }
}

impl<V, S, C> Eq for Unit<V, S, C>
where
    V: Promote<V> + Eq,
    S: Scale,
    C: Category,
{
}

impl<V, S, C> Hash for Unit<V, S, C>
where
    V: Numeric + Hash,
    S: Scale,
    C: Category,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit ⊕ unit
// ─────────────────────────────────────────────────────────────────────────────

impl<V, S, C> Neg for Unit<V, S, C>
where
    V: Numeric + Neg,
    <V as Neg>::Output: Numeric,
    S: Scale,
    C: Category,
{
    type Output = Unit<<V as Neg>::Output, S, C>;

    #[inline]
    fn neg(self) -> Self::Output {
        Unit::new(-self.value)
    }
}

impl<V1, V2, S, C> Add<Unit<V2, S, C>> for Unit<V1, S, C>
where
    V1: Promote<V2>,
    V2: Numeric,
    S: Scale,
    C: Category,
{
    type Output = Unit<<V1 as Promote<V2>>::Output, S, C>;

    #[inline]
    fn add(self, rhs: Unit<V2, S, C>) -> Self::Output {
        let lhs: <V1 as Promote<V2>>::Output = self.value.cast();
        let rhs: <V1 as Promote<V2>>::Output = rhs.value.cast();
        Unit::new(lhs + rhs)
    }
}

impl<V1, V2, S, C> Sub<Unit<V2, S, C>> for Unit<V1, S, C>
where
    V1: Promote<V2>,
    V2: Numeric,
    S: Scale,
    C: Category,
{
    type Output = Unit<<V1 as Promote<V2>>::Output, S, C>;

    #[inline]
    fn sub(self, rhs: Unit<V2, S, C>) -> Self::Output {
        let lhs: <V1 as Promote<V2>>::Output = self.value.cast();
        let rhs: <V1 as Promote<V2>>::Output = rhs.value.cast();
        Unit::new(lhs - rhs)
    }
}

impl<V1, S1, C, V2, S2> AddAssign<Unit<V2, S2, C>> for Unit<V1, S1, C>
where
    V1: Numeric,
    V2: Numeric,
    S1: Scale,
    S2: Scale,
    C: Category,
{
    #[inline]
    fn add_assign(&mut self, rhs: Unit<V2, S2, C>) {
        let rhs: Self = rhs.convert();
        self.value += rhs.value;
    }
}

impl<V1, S1, C, V2, S2> SubAssign<Unit<V2, S2, C>> for Unit<V1, S1, C>
where
    V1: Numeric,
    V2: Numeric,
    S1: Scale,
    S2: Scale,
    C: Category,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Unit<V2, S2, C>) {
        let rhs: Self = rhs.convert();
        self.value -= rhs.value;
    }
}

/// Dividing two units of one category cancels the dimension and yields a plain number.
///
/// The right operand is brought into the left operand's scale first, then the promoted payloads are divided.
///
/// # Panics
///
/// With an integer promoted type, panics if the right operand is zero once expressed in the left operand's scale.
/// That includes non-zero values that truncate to zero, such as `5 mL` divided into litres.
impl<V1, S1, C, V2, S2> Div<Unit<V2, S2, C>> for Unit<V1, S1, C>
where
    V1: Promote<V2>,
    V2: Numeric,
    S1: Scale,
    S2: Scale,
    C: Category,
{
    type Output = <V1 as Promote<V2>>::Output;

    #[inline]
    fn div(self, rhs: Unit<V2, S2, C>) -> Self::Output {
        let (lhs, rhs) = self.align(rhs);
        lhs / rhs
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit ⊗ dimensionless scalar
// ─────────────────────────────────────────────────────────────────────────────

impl<V, R, S, C> Mul<R> for Unit<V, S, C>
where
    V: Promote<R>,
    R: Numeric,
    S: Scale,
    C: Category,
{
    type Output = Unit<<V as Promote<R>>::Output, S, C>;

    #[inline]
    fn mul(self, rhs: R) -> Self::Output {
        let lhs: <V as Promote<R>>::Output = self.value.cast();
        let rhs: <V as Promote<R>>::Output = rhs.cast();
        Unit::new(lhs * rhs)
    }
}

impl<V, R, S, C> Div<R> for Unit<V, S, C>
where
    V: Promote<R>,
    R: Numeric,
    S: Scale,
    C: Category,
{
    type Output = Unit<<V as Promote<R>>::Output, S, C>;

    #[inline]
    fn div(self, rhs: R) -> Self::Output {
        let lhs: <V as Promote<R>>::Output = self.value.cast();
        let rhs: <V as Promote<R>>::Output = rhs.cast();
        Unit::new(lhs / rhs)
    }
}

impl<V, R, S, C> MulAssign<R> for Unit<V, S, C>
where
    V: Promote<R>,
    R: Numeric,
    S: Scale,
    C: Category,
{
    #[inline]
    fn mul_assign(&mut self, rhs: R) {
        let lhs: <V as Promote<R>>::Output = self.value.cast();
        let rhs: <V as Promote<R>>::Output = rhs.cast();
        self.value = (lhs * rhs).cast();
    }
}

impl<V, R, S, C> DivAssign<R> for Unit<V, S, C>
where
    V: Promote<R>,
    R: Numeric,
    S: Scale,
    C: Category,
{
    #[inline]
    fn div_assign(&mut self, rhs: R) {
        let lhs: <V as Promote<R>>::Output = self.value.cast();
        let rhs: <V as Promote<R>>::Output = rhs.cast();
        self.value = (lhs / rhs).cast();
    }
}

crate::macros::impl_scalar_lhs_mul!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<V: Numeric, S: Scale, C: Category> Sum for Unit<V, S, C> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, u| Self::new(acc.value + u.value))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<V, S, C> Serialize for Unit<V, S, C>
where
    V: Numeric + Serialize,
    S: Scale,
    C: Category,
{
    fn serialize<Ser>(&self, serializer: Ser) -> core::result::Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, V, S, C> Deserialize<'de> for Unit<V, S, C>
where
    V: Numeric + Deserialize<'de>,
    S: Scale,
    C: Category,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        V::deserialize(deserializer).map(Unit::new)
    }
}

/// Serde helper module for serializing units together with their suffix.
///
/// Use with `#[serde(with = "...")]` to make the scale explicit in serialized data:
///
/// ```rust
/// use ratio_units_core::length::Millimeters;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Collimator {
///     #[serde(with = "ratio_units_core::serde_with_unit")]
///     aperture: Millimeters<f64>, // {"value": 12.5, "unit": "mm"}
///
///     offset: Millimeters<f64>, // 0.5 (default, compact)
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use alloc::string::String;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeStruct;

    /// Serializes a unit as a struct with `value` and `unit` fields.
    pub fn serialize<V, S, C, Ser>(unit: &Unit<V, S, C>, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        V: Numeric + Serialize,
        S: Suffix<C>,
        C: Category,
        Ser: Serializer,
    {
        let mut state = serializer.serialize_struct("Unit", 2)?;
        state.serialize_field("value", &unit.value())?;
        state.serialize_field("unit", S::SUFFIX)?;
        state.end()
    }

    /// Deserializes a unit from a struct with `value` and an optional `unit` field.
    ///
    /// When `unit` is present it must equal the suffix of the target type; no implicit rescaling happens.
    pub fn deserialize<'de, V, S, C, D>(deserializer: D) -> Result<Unit<V, S, C>, D::Error>
    where
        V: Numeric + Deserialize<'de>,
        S: Suffix<C>,
        C: Category,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct UnitVisitor<V, S, C>(PhantomData<(V, S, C)>);

        impl<'de, V, S, C> Visitor<'de> for UnitVisitor<V, S, C>
        where
            V: Numeric + Deserialize<'de>,
            S: Suffix<C>,
            C: Category,
        {
            type Value = Unit<V, S, C>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("struct Unit with value and unit fields")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Unit<V, S, C>, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut value: Option<V> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                if let Some(found) = unit {
                    if found != S::SUFFIX {
                        return Err(de::Error::custom(format_args!(
                            "unit mismatch: expected '{}', found '{}'",
                            S::SUFFIX,
                            found
                        )));
                    }
                }

                Ok(Unit::new(value))
            }
        }

        deserializer.deserialize_struct("Unit", &["value", "unit"], UnitVisitor(PhantomData))
    }
}
