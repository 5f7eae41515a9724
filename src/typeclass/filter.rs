//! Filtering type classes: `FunctorFilter` and `TraverseFilter`.
//!
//! `FunctorFilter` maps and drops in one pass. `TraverseFilter` does the
//! same while threading an effect, so that the decision to keep an element
//! may itself fail.
//!
//! # Laws
//!
//! ```text
//! fa.map_filter(Some) == fa                                              (identity)
//! fa.map_filter(|a| Some(f(a))) == fa.fmap(f)                            (map consistency)
//! fa.filter(p) == fa.map_filter(|a| p(&a).then_some(a))                  (filter consistency)
//! fa.traverse_filter_option(|a| Some(Some(a))) == Some(fa)               (traverse identity)
//! fa.traverse_filter_option(|a| Some(f(a))) == Some(fa.map_filter(f))
//! fa.filter_option(|a| Some(p(a))) == Some(fa.filter(p))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::{FunctorFilter, TraverseFilter};
//!
//! let evens = vec![1, 2, 3, 4].map_filter(|n| (n % 2 == 0).then_some(n * 10));
//! assert_eq!(evens, vec![20, 40]);
//!
//! let checked = vec![1, 2, 3].filter_option(|n| (*n < 10).then_some(*n != 2));
//! assert_eq!(checked, Some(vec![1, 3]));
//! ```

use super::higher::TypeConstructor;
use super::traversable::Traversable;

/// Containers that can drop elements while mapping.
pub trait FunctorFilter: TypeConstructor {
    /// Maps every element, keeping only the `Some` results.
    fn map_filter<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Option<B>;

    /// Keeps the elements satisfying `predicate`.
    fn filter<P>(self, mut predicate: P) -> Self::WithType<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.map_filter(|element| predicate(&element).then_some(element))
    }
}

/// Effectful filtering: [`Traversable`] and [`FunctorFilter`] at once.
pub trait TraverseFilter: Traversable + FunctorFilter {
    /// Like `traverse_option`, but an inner `None` drops the element while an
    /// outer `None` aborts the whole traversal.
    fn traverse_filter_option<B, F>(self, function: F) -> Option<<Self as TypeConstructor>::WithType<B>>
    where
        F: FnMut(Self::Inner) -> Option<Option<B>>;

    /// Like `traverse_result`, but `Ok(None)` drops the element.
    fn traverse_filter_result<B, E, F>(self, function: F) -> Result<<Self as TypeConstructor>::WithType<B>, E>
    where
        F: FnMut(Self::Inner) -> Result<Option<B>, E>;

    /// Filters with a predicate that may itself be absent.
    fn filter_option<P>(self, mut predicate: P) -> Option<<Self as TypeConstructor>::WithType<Self::Inner>>
    where
        P: FnMut(&Self::Inner) -> Option<bool>,
        Self: Sized,
    {
        self.traverse_filter_option(|element| {
            predicate(&element).map(|keep| keep.then_some(element))
        })
    }

    /// Filters with a predicate that may fail.
    fn filter_result<E, P>(self, mut predicate: P) -> Result<<Self as TypeConstructor>::WithType<Self::Inner>, E>
    where
        P: FnMut(&Self::Inner) -> Result<bool, E>,
        Self: Sized,
    {
        self.traverse_filter_result(|element| {
            predicate(&element).map(|keep| keep.then_some(element))
        })
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> FunctorFilter for Option<A> {
    #[inline]
    fn map_filter<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> Option<B>,
    {
        self.and_then(function)
    }
}

impl<A> TraverseFilter for Option<A> {
    fn traverse_filter_option<B, F>(self, function: F) -> Option<Option<B>>
    where
        F: FnMut(A) -> Option<Option<B>>,
    {
        self.map_or(Some(None), function)
    }

    fn traverse_filter_result<B, E, F>(self, function: F) -> Result<Option<B>, E>
    where
        F: FnMut(A) -> Result<Option<B>, E>,
    {
        self.map_or(Ok(None), function)
    }
}

// =============================================================================
// Vec<A> Implementation
// =============================================================================

impl<A> FunctorFilter for Vec<A> {
    #[inline]
    fn map_filter<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(A) -> Option<B>,
    {
        self.into_iter().filter_map(function).collect()
    }
}

impl<A> TraverseFilter for Vec<A> {
    fn traverse_filter_option<B, F>(self, function: F) -> Option<Vec<B>>
    where
        F: FnMut(A) -> Option<Option<B>>,
    {
        let decided: Option<Vec<Option<B>>> = self.into_iter().map(function).collect();
        decided.map(|kept| kept.into_iter().flatten().collect())
    }

    fn traverse_filter_result<B, E, F>(self, function: F) -> Result<Vec<B>, E>
    where
        F: FnMut(A) -> Result<Option<B>, E>,
    {
        let decided: Result<Vec<Option<B>>, E> = self.into_iter().map(function).collect();
        decided.map(|kept| kept.into_iter().flatten().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(4), Some(2))]
    #[case(Some(3), None)]
    #[case(None, None)]
    fn option_map_filter(#[case] value: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(value.map_filter(|n| (n % 2 == 0).then_some(n / 2)), expected);
    }

    #[rstest]
    fn vec_filter_keeps_order() {
        assert_eq!(FunctorFilter::filter(vec![5, 1, 4, 2], |n| *n > 1), vec![5, 4, 2]);
    }

    #[rstest]
    fn vec_traverse_filter_option_aborts_on_outer_none() {
        let aborted = vec![1, -1, 2].traverse_filter_option(|n| {
            if n < 0 { None } else { Some((n > 1).then_some(n)) }
        });
        assert_eq!(aborted, None);

        let kept = vec![1, 2, 3].traverse_filter_option(|n| Some((n > 1).then_some(n)));
        assert_eq!(kept, Some(vec![2, 3]));
    }

    #[rstest]
    fn vec_filter_result_reports_first_error() {
        let checked: Result<Vec<i32>, String> = vec![1, 2, 30, 40].filter_result(|n| {
            if *n > 10 { Err(format!("too big: {n}")) } else { Ok(*n % 2 == 1) }
        });
        assert_eq!(checked, Err(String::from("too big: 30")));
    }

    #[rstest]
    fn option_traverse_filter_keeps_absence() {
        assert_eq!(None::<i32>.traverse_filter_option(|n| Some(Some(n))), Some(None));
        assert_eq!(Some(1).filter_option(|_| Some(false)), Some(None));
        assert_eq!(Some(1).filter_result(|_| Err::<bool, &str>("no")), Err("no"));
    }
}
