//! Newtype wrappers selecting a combining operation.
//!
//! The same number can be combined by addition or multiplication, and any
//! ordered value by keeping the larger or the smaller. Each wrapper picks one:
//!
//! - [`Sum`]: addition, identity `0`
//! - [`Product`]: multiplication, identity `1`
//! - [`Max`]: keeps the larger value (semigroup only)
//! - [`Min`]: keeps the smaller value (semigroup only)
//!
//! `Max` and `Min` have no identity in general, which is exactly why
//! `Reducible::maximum` and `Reducible::minimum` exist: a non-empty
//! container never needs one.

use std::fmt;

macro_rules! wrapper {
    ($(#[$attribute:meta])* $name:ident, $label:literal) => {
        $(#[$attribute])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name<A>(pub A);

        impl<A> $name<A> {
            #[doc = concat!("Wraps `value` in `", $label, "`.")]
            #[inline]
            pub const fn new(value: A) -> Self {
                Self(value)
            }

            /// Unwraps the value.
            #[inline]
            pub fn into_inner(self) -> A {
                self.0
            }

            /// Borrows the wrapped value.
            #[inline]
            pub const fn as_inner(&self) -> &A {
                &self.0
            }
        }

        impl<A> From<A> for $name<A> {
            fn from(value: A) -> Self {
                Self::new(value)
            }
        }

        impl<A: fmt::Display> fmt::Display for $name<A> {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(formatter, concat!($label, "({})"), self.0)
            }
        }
    };
}

wrapper!(
    /// Additive semigroup and monoid.
    ///
    /// ```rust
    /// use lawful::typeclass::{Semigroup, Sum};
    ///
    /// assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
    /// ```
    Sum,
    "Sum"
);

wrapper!(
    /// Multiplicative semigroup and monoid.
    ///
    /// ```rust
    /// use lawful::typeclass::{Product, Semigroup};
    ///
    /// assert_eq!(Product(3).combine(Product(5)), Product(15));
    /// ```
    Product,
    "Product"
);

wrapper!(
    /// Semigroup keeping the larger value.
    Max,
    "Max"
);

wrapper!(
    /// Semigroup keeping the smaller value.
    Min,
    "Min"
);

impl<A: Default> Default for Sum<A> {
    fn default() -> Self {
        Self(A::default())
    }
}
