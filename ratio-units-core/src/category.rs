//! Category (physical dimension) marker trait.

/// Marker trait for **categories** (length, angle, dose …).
///
/// A category partitions units into groups that never interconvert: a length can be converted between metres and
/// millimetres, but never into an angle. Categories carry no data; compatibility is plain type identity.
///
/// Model each category as an empty enum:
///
/// ```rust
/// use ratio_units_core::Category;
///
/// pub enum Time {}
/// impl Category for Time {
///     const NAME: &'static str = "time";
/// }
/// ```
pub trait Category: 'static {
    /// Human-readable category name.
    const NAME: &'static str;
}
