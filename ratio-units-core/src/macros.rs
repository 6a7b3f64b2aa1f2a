//! Macros for generating the promotion table and the scalar operators.

/// Generates [`Promote`](crate::Promote) impls for every pair of types in a rank-ordered list.
///
/// For any two entries the later one is the promoted type.
#[macro_export]
#[doc(hidden)]
macro_rules! impl_promote {
    // Base case: single type, promotes to itself
    ($last:ty) => {
        impl $crate::Promote<$last> for $last {
            type Output = $last;
        }
    };

    // Recursive case: the head loses against everything after it, then recurse
    ($first:ty, $($rest:ty),+ $(,)?) => {
        impl $crate::Promote<$first> for $first {
            type Output = $first;
        }

        $(
            impl $crate::Promote<$rest> for $first {
                type Output = $rest;
            }

            impl $crate::Promote<$first> for $rest {
                type Output = $rest;
            }
        )+

        $crate::impl_promote!($($rest),+);
    };
}

/// Implements `scalar * unit` for each listed primitive.
///
/// The unit-on-the-left operators are generic over any [`Numeric`](crate::Numeric) scalar; this side needs one impl
/// per primitive because the receiver is a foreign type. Scale and category are preserved.
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),* $(,)?) => {
        $(
            impl<V, S, C> core::ops::Mul<$crate::Unit<V, S, C>> for $t
            where
                V: $crate::Numeric,
                $t: $crate::Promote<V>,
                S: $crate::Scale,
                C: $crate::Category,
            {
                type Output = $crate::Unit<<$t as $crate::Promote<V>>::Output, S, C>;

                #[inline]
                fn mul(self, rhs: $crate::Unit<V, S, C>) -> Self::Output {
                    $crate::Unit::new(
                        $crate::Numeric::cast::<<$t as $crate::Promote<V>>::Output>(self)
                            * $crate::Numeric::cast::<<$t as $crate::Promote<V>>::Output>(rhs.value()),
                    )
                }
            }
        )*
    };
}

pub(crate) use impl_scalar_lhs_mul;
