//! Applicative type class - combining independent computations.
//!
//! # Laws
//!
//! ```text
//! F::pure(a).fmap(f) == F::pure(f(a))                               (homomorphism)
//! F::pure(()).map2(fb, |_, b| b) == fb                              (left identity)
//! fa.map2(F::pure(()), |a, _| a) == fa                              (right identity)
//! fa.map2(F::pure(b), f) == fa.fmap(|a| f(a, b))                    (map2 / fmap)
//! fa.map2(fb, f).map2(fc, g) ~ fa.map2(fb.map2(fc, ..), ..)         (associativity)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::Applicative;
//!
//! let lifted: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(lifted, Some(42));
//! assert_eq!(Some(1).map2(Some(2), |x, y| x + y), Some(3));
//! ```

use super::functor::Functor;

/// A functor that can lift values and combine two independent containers.
pub trait Applicative: Functor {
    /// Lifts `value` into the context.
    ///
    /// Called through any instance of the constructor, for example
    /// `<Option<()>>::pure(1)`.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines `self` and `other` with `function`.
    ///
    /// Whether `function` runs depends on the context: `None`, `Err` or a
    /// failed `Try` short-circuit, and `Const` never runs it at all.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs the two elements.
    ///
    /// ```rust
    /// use lawful::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product(Some("a")), Some((1, "a")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Keeps the left element once both sides succeed.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Keeps the right element once both sides succeed.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Some(function(self?, other?))
    }
}

/// The first error wins.
impl<T, E: Clone> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        Ok(function(self?, other?))
    }
}
