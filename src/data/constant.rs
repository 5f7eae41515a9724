//! The constant functor.
//!
//! `Const<A, T>` stores a value of type `A` and only pretends to hold a `T`.
//! Mapping over it never runs the function; it merely changes the phantom
//! type. Combined with `Applicative`, this makes `Const` the accumulator of
//! choice for traversals that collect a summary instead of rebuilding the
//! structure.
//!
//! # Examples
//!
//! ```rust
//! use lawful::data::Const;
//! use lawful::typeclass::{Applicative, Functor};
//!
//! let tagged: Const<String, i32> = Const::new(String::from("log"));
//! let mapped: Const<String, bool> = tagged.fmap(|n| n > 0);
//! assert_eq!(mapped.value(), "log");
//!
//! let combined = Const::<String, i32>::new(String::from("a"))
//!     .map2(Const::<String, i32>::new(String::from("b")), |x, y| x + y);
//! assert_eq!(combined.into_value(), "ab");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::typeclass::{
    Applicative, Foldable, Functor, FunctorFilter, Monoid, Semigroup, Traversable,
    TraverseFilter, TypeConstructor,
};

/// A value of type `A` tagged with a phantom element type `T`.
///
/// Equality, ordering, hashing, formatting, cloning and thread-safety all
/// depend on `A` alone.
///
/// # Laws
///
/// `Const::new(a).into_value() == a` for every `T`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Const<A, T> {
    value: A,
    #[cfg_attr(feature = "serde", serde(skip))]
    marker: PhantomData<fn() -> T>,
}

impl<A, T> Const<A, T> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self {
            value,
            marker: PhantomData,
        }
    }

    /// Borrows the stored value.
    #[inline]
    pub const fn value(&self) -> &A {
        &self.value
    }

    /// Unwraps the stored value.
    #[inline]
    pub fn into_value(self) -> A {
        self.value
    }

    /// Changes the phantom type, keeping the stored value.
    ///
    /// ```rust
    /// use lawful::data::Const;
    ///
    /// let numbers: Const<&str, i32> = Const::new("kept");
    /// let letters: Const<&str, char> = numbers.retag();
    /// assert_eq!(*letters.value(), "kept");
    /// ```
    #[inline]
    pub fn retag<U>(self) -> Const<A, U> {
        Const::new(self.value)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<A: Clone, T> Clone for Const<A, T> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<A: Copy, T> Copy for Const<A, T> {}

impl<A: PartialEq, T> PartialEq for Const<A, T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<A: Eq, T> Eq for Const<A, T> {}

impl<A: PartialOrd, T> PartialOrd for Const<A, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<A: Ord, T> Ord for Const<A, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<A: Hash, T> Hash for Const<A, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<A: fmt::Debug, T> fmt::Debug for Const<A, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Const").field(&self.value).finish()
    }
}

impl<A: fmt::Display, T> fmt::Display for Const<A, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Const({})", self.value)
    }
}

impl<A: Default, T> Default for Const<A, T> {
    fn default() -> Self {
        Self::new(A::default())
    }
}

static_assertions::assert_impl_all!(Const<i32, std::rc::Rc<i32>>: Send, Sync, Copy);

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A: Semigroup, T> Semigroup for Const<A, T> {
    fn combine(self, other: Self) -> Self {
        Self::new(self.value.combine(other.value))
    }
}

impl<A: Monoid, T> Monoid for Const<A, T> {
    fn empty() -> Self {
        Self::new(A::empty())
    }
}

impl<A, T> TypeConstructor for Const<A, T> {
    type Inner = T;
    type WithType<B> = Const<A, B>;
}

impl<A: Clone, T> Functor for Const<A, T> {
    #[inline]
    fn fmap<B, F>(self, _function: F) -> Const<A, B>
    where
        F: FnOnce(T) -> B,
    {
        self.retag()
    }

    #[inline]
    fn fmap_ref<B, F>(&self, _function: F) -> Const<A, B>
    where
        F: FnOnce(&T) -> B,
    {
        Const::new(self.value.clone())
    }
}

/// `pure` ignores its argument and `map2` combines the stored values.
impl<A: Monoid + Clone, T> Applicative for Const<A, T> {
    #[inline]
    fn pure<B>(_value: B) -> Const<A, B> {
        Const::new(A::empty())
    }

    #[inline]
    fn map2<B, C, F>(self, other: Const<A, B>, _function: F) -> Const<A, C>
    where
        F: FnOnce(T, B) -> C,
    {
        Const::new(self.value.combine(other.value))
    }
}

/// A `Const` holds no elements of its phantom type.
impl<A, T> Foldable for Const<A, T> {
    #[inline]
    fn fold_left<B, F>(self, init: B, _function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        init
    }

    #[inline]
    fn fold_right<B, F>(self, init: B, _function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        init
    }

    #[inline]
    fn is_empty(&self) -> bool {
        true
    }

    #[inline]
    fn size(&self) -> usize {
        0
    }
}

impl<A, T> Traversable for Const<A, T> {
    #[inline]
    fn traverse_option<B, F>(self, _function: F) -> Option<Const<A, B>>
    where
        F: FnMut(T) -> Option<B>,
    {
        Some(self.retag())
    }

    #[inline]
    fn traverse_result<B, E, F>(self, _function: F) -> Result<Const<A, B>, E>
    where
        F: FnMut(T) -> Result<B, E>,
    {
        Ok(self.retag())
    }
}

impl<A, T> FunctorFilter for Const<A, T> {
    #[inline]
    fn map_filter<B, F>(self, _function: F) -> Const<A, B>
    where
        F: FnMut(T) -> Option<B>,
    {
        self.retag()
    }
}

impl<A, T> TraverseFilter for Const<A, T> {
    #[inline]
    fn traverse_filter_option<B, F>(self, _function: F) -> Option<Const<A, B>>
    where
        F: FnMut(T) -> Option<Option<B>>,
    {
        Some(self.retag())
    }

    #[inline]
    fn traverse_filter_result<B, E, F>(self, _function: F) -> Result<Const<A, B>, E>
    where
        F: FnMut(T) -> Result<Option<B>, E>,
    {
        Ok(self.retag())
    }
}
