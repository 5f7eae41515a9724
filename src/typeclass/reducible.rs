//! Reducible type class - folding structures that are never empty.
//!
//! A `Reducible` always holds at least one element, so it can be reduced
//! with only a [`Semigroup`]: the first (or last) element seeds the
//! reduction instead of a monoid identity.
//!
//! # Laws
//!
//! In addition to every [`Foldable`] law:
//!
//! ```text
//! fa.reduce_left_to(f, |b, a| b.combine(f(a))) == fa.reduce_map(f)
//! fa.reduce_right_to(f, |a, lb| lb.map(|b| f(a).combine(b))).value() == fa.reduce_map(f)
//! Some(fa.reduce_right_to(f, g).value()) == fa.reduce_right_to_option(f, g).value()
//! Some(fa.reduce_right(g).value()) == fa.reduce_right_option(g).value()
//! fa.reduce() == fa.reduce_left(Semigroup::combine)
//! fa.size() == fa.reduce_map(|_| Sum(1)).0
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawful::data::NonEmptyVec;
//! use lawful::typeclass::{Reducible, Sum};
//!
//! let numbers = NonEmptyVec::new(Sum(1), vec![Sum(2), Sum(3)]);
//! assert_eq!(numbers.clone().reduce(), Sum(6));
//! assert_eq!(numbers.reduce_left(|a, b| Sum(a.0 * b.0)), Sum(6));
//! ```

use super::foldable::Foldable;
use super::semigroup::Semigroup;
use super::wrappers::{Max, Min};
use crate::control::Eval;

/// A [`Foldable`] with at least one element.
///
/// Rather than implementing this trait by hand, implement
/// [`NonEmptyReducible`](super::NonEmptyReducible), which derives both
/// `Foldable` and `Reducible` from a head/tail split.
pub trait Reducible: Foldable {
    /// Left reduction: `function` maps the first element, then `combine`
    /// folds the remaining elements in.
    fn reduce_left_to<B, F, G>(self, function: F, combine: G) -> B
    where
        F: FnOnce(Self::Inner) -> B,
        G: FnMut(B, Self::Inner) -> B,
        Self: Sized;

    /// Lazy right reduction: `function` maps the last element, then
    /// `combine` receives each earlier element with the lazily reduced
    /// remainder.
    fn reduce_right_to<B, F, G>(self, function: F, combine: G) -> Eval<B>
    where
        Self: Sized,
        Self::Inner: 'static,
        B: 'static,
        F: Fn(Self::Inner) -> B + 'static,
        G: Fn(Self::Inner, Eval<B>) -> Eval<B> + 'static;

    /// Combines all elements with their semigroup, left to right.
    fn reduce(self) -> Self::Inner
    where
        Self::Inner: Semigroup,
        Self: Sized,
    {
        self.reduce_left(Semigroup::combine)
    }

    /// Maps every element into a semigroup and combines the results.
    ///
    /// ```rust
    /// use lawful::data::NonEmptyVec;
    /// use lawful::typeclass::Reducible;
    ///
    /// let words = NonEmptyVec::new("fold", vec!["ed"]);
    /// assert_eq!(words.reduce_map(String::from), "folded");
    /// ```
    fn reduce_map<B, F>(self, function: F) -> B
    where
        B: Semigroup,
        F: Fn(Self::Inner) -> B,
        Self: Sized,
    {
        let function = &function;
        self.reduce_left_to(
            |element| function(element),
            |accumulator, element| accumulator.combine(function(element)),
        )
    }

    /// Left reduction with `combine`.
    fn reduce_left<G>(self, combine: G) -> Self::Inner
    where
        G: FnMut(Self::Inner, Self::Inner) -> Self::Inner,
        Self: Sized,
    {
        self.reduce_left_to(|element| element, combine)
    }

    /// Lazy right reduction with `combine`.
    ///
    /// ```rust
    /// use lawful::data::NonEmptyVec;
    /// use lawful::typeclass::Reducible;
    ///
    /// let numbers = NonEmptyVec::new(10, vec![3, 2]);
    /// let reduced = numbers.reduce_right(|a, rest| rest.map(move |b| a - b));
    /// assert_eq!(reduced.value(), 9);
    /// ```
    fn reduce_right<G>(self, combine: G) -> Eval<Self::Inner>
    where
        Self: Sized,
        Self::Inner: 'static,
        G: Fn(Self::Inner, Eval<Self::Inner>) -> Eval<Self::Inner> + 'static,
    {
        self.reduce_right_to(|element| element, combine)
    }

    /// The largest element. Ties keep the first.
    fn maximum(self) -> Self::Inner
    where
        Self::Inner: Ord,
        Self: Sized,
    {
        self.reduce_map(Max::new).into_inner()
    }

    /// The smallest element. Ties keep the first.
    fn minimum(self) -> Self::Inner
    where
        Self::Inner: Ord,
        Self: Sized,
    {
        self.reduce_map(Min::new).into_inner()
    }
}
