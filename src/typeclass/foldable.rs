//! Foldable type class - folding a structure down to a summary value.
//!
//! A `Foldable` may hold any number of elements, including none. Every
//! operation is derived from two folds: `fold_left` and `fold_right`. Right
//! folds also come in a lazy flavour, [`Foldable::fold_right_lazy`], where
//! the folding function receives the rest of the fold as an unevaluated
//! [`Eval`] and may stop without ever forcing it.
//!
//! # Laws
//!
//! ```text
//! fa.fold_left(M::empty(), |b, a| b.combine(f(a))) == fa.fold_map(f)
//! fa.fold_right(M::empty(), |a, b| f(a).combine(b)) == fa.fold_map(f)
//! fa.fold_right_lazy(Eval::now(b), lifted(g)).value() == fa.fold_right(b, g)
//! fa.exists(p) == fa.find(p).is_some()
//! fa.for_all(p) == !fa.exists(|a| !p(a))
//! fa.get(i) == fa.to_list().get(i)
//! fa.size() == fa.to_list().len()
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::{Foldable, Sum};
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//! assert_eq!(numbers.clone().fold_left(0, |total, n| total + n), 15);
//! assert_eq!(numbers.fold_map(Sum::new), Sum(15));
//! assert_eq!(None::<i32>.fold_left(5, |total, n| total + n), 5);
//! ```

use std::rc::Rc;

use super::higher::TypeConstructor;
use super::monoid::Monoid;
use super::semigroup::Semigroup;
use crate::control::Eval;

/// Data structures that can be folded to a summary value.
///
/// # Required Methods
///
/// - `fold_left`: left-associative fold
/// - `fold_right`: right-associative fold
///
/// Everything else has a default built on those two and may be overridden
/// when a structure can answer more directly.
pub trait Foldable: TypeConstructor {
    /// Folds from the first element to the last.
    ///
    /// ```rust
    /// use lawful::typeclass::Foldable;
    ///
    /// let letters = vec!["a", "b", "c"];
    /// let joined = letters.fold_left(String::new(), |accumulator, element| accumulator + element);
    /// assert_eq!(joined, "abc");
    /// ```
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds from the last element to the first.
    ///
    /// ```rust
    /// use lawful::typeclass::Foldable;
    ///
    /// let letters = vec!["a", "b", "c"];
    /// let joined = letters.fold_right(String::new(), |element, accumulator| accumulator + element);
    /// assert_eq!(joined, "cba");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Lazy right fold.
    ///
    /// `function` receives each element together with the not-yet-computed
    /// fold of everything to its right. Returning without forcing that
    /// `Eval` stops the fold there.
    ///
    /// ```rust
    /// use lawful::control::Eval;
    /// use lawful::typeclass::Foldable;
    ///
    /// // Stops at the first negative number; the tail is never inspected.
    /// let first_negative = vec![3, -1, 4, -1, 5].fold_right_lazy(
    ///     Eval::now(None),
    ///     |element, rest| if element < 0 { Eval::now(Some(element)) } else { rest },
    /// );
    /// assert_eq!(first_negative.value(), Some(-1));
    /// ```
    fn fold_right_lazy<B, F>(self, init: Eval<B>, function: F) -> Eval<B>
    where
        Self: Sized,
        Self::Inner: 'static,
        B: 'static,
        F: Fn(Self::Inner, Eval<B>) -> Eval<B> + 'static,
    {
        lazy_fold_right(self.to_list().into_iter(), init, Rc::new(function))
    }

    /// Maps every element into a monoid and combines the results.
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Combines every element with the element type's monoid.
    fn combine_all(self) -> Self::Inner
    where
        Self::Inner: Monoid,
        Self: Sized,
    {
        self.fold_left(Self::Inner::empty(), Semigroup::combine)
    }

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns `true` if there is at least one element.
    fn non_empty(&self) -> bool
    where
        Self: Clone,
    {
        !self.is_empty()
    }

    /// Number of elements.
    fn size(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects the elements, first to last.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut list, element| {
            list.push(element);
            list
        })
    }

    /// The element at `index`, counting from the first.
    ///
    /// ```rust
    /// use lawful::typeclass::Foldable;
    ///
    /// assert_eq!(vec!['a', 'b'].get(1), Some('b'));
    /// assert_eq!(Some('a').get(1), None);
    /// ```
    fn get(self, index: usize) -> Option<Self::Inner>
    where
        Self: Sized,
    {
        let mut position = 0;
        self.fold_left(None, |found, element| {
            let found = match found {
                None if position == index => Some(element),
                other => other,
            };
            position += 1;
            found
        })
    }

    /// The first element satisfying `predicate`.
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |accumulator, element| match accumulator {
            None if predicate(&element) => Some(element),
            other => other,
        })
    }

    /// Returns `true` if any element satisfies `predicate`.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(|element| predicate(element)).is_some()
    }

    /// Returns `true` if every element satisfies `predicate`. Vacuously
    /// `true` when there are no elements.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }

    /// Left reduction that seeds with `function(first)`; `None` when empty.
    fn reduce_left_to_option<B, F, G>(self, function: F, mut combine: G) -> Option<B>
    where
        F: FnOnce(Self::Inner) -> B,
        G: FnMut(B, Self::Inner) -> B,
        Self: Sized,
    {
        let mut seed = Some(function);
        self.fold_left(None, |accumulator, element| match accumulator {
            Some(reduced) => Some(combine(reduced, element)),
            None => seed.take().map(|function| function(element)),
        })
    }

    /// Left reduction with `combine`; `None` when empty.
    fn reduce_left_option<G>(self, combine: G) -> Option<Self::Inner>
    where
        G: FnMut(Self::Inner, Self::Inner) -> Self::Inner,
        Self: Sized,
    {
        self.reduce_left_to_option(|element| element, combine)
    }

    /// Lazy right reduction that seeds with `function(last)`; `None` when
    /// empty.
    ///
    /// ```rust
    /// use lawful::control::Eval;
    /// use lawful::typeclass::Foldable;
    ///
    /// let joined = vec![1, 2, 3].reduce_right_to_option(
    ///     |last| last.to_string(),
    ///     |element, rest| rest.map(move |text| format!("{element}{text}")),
    /// );
    /// assert_eq!(joined.value(), Some(String::from("123")));
    /// ```
    fn reduce_right_to_option<B, F, G>(self, function: F, combine: G) -> Eval<Option<B>>
    where
        Self: Sized,
        Self::Inner: 'static,
        B: 'static,
        F: Fn(Self::Inner) -> B + 'static,
        G: Fn(Self::Inner, Eval<B>) -> Eval<B> + 'static,
    {
        let function = Rc::new(function);
        let combine = Rc::new(combine);
        self.fold_right_lazy(Eval::now(None), move |element, later: Eval<Option<B>>| {
            let function = Rc::clone(&function);
            let combine = Rc::clone(&combine);
            later.flat_map(move |reduced| match reduced {
                Some(right) => combine(element, Eval::now(right)).map(Some),
                None => Eval::later(move || Some(function(element))),
            })
        })
    }

    /// Lazy right reduction with `combine`; `None` when empty.
    fn reduce_right_option<G>(self, combine: G) -> Eval<Option<Self::Inner>>
    where
        Self: Sized,
        Self::Inner: 'static,
        G: Fn(Self::Inner, Eval<Self::Inner>) -> Eval<Self::Inner> + 'static,
    {
        self.reduce_right_to_option(|element| element, combine)
    }
}

/// Builds the lazy right fold of `elements` one `defer` at a time, so that
/// neither building nor forcing it grows the call stack.
fn lazy_fold_right<I, B, F>(mut elements: I, init: Eval<B>, function: Rc<F>) -> Eval<B>
where
    I: Iterator + 'static,
    I::Item: 'static,
    B: 'static,
    F: Fn(I::Item, Eval<B>) -> Eval<B> + 'static,
{
    Eval::defer(move || match elements.next() {
        Some(element) => {
            let rest = lazy_fold_right(elements, init, Rc::clone(&function));
            function(element, rest)
        }
        None => init,
    })
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(element) => function(init, element),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(element) => function(element, init),
            None => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn size(&self) -> usize {
        usize::from(self.is_some())
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E> Foldable for Result<T, E> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Ok(element) => function(init, element),
            Err(_) => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        match self {
            Ok(element) => function(element, init),
            Err(_) => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_err()
    }

    #[inline]
    fn size(&self) -> usize {
        usize::from(self.is_ok())
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> Foldable for Vec<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_empty()
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn to_list(self) -> Self {
        self
    }

    #[inline]
    fn get(self, index: usize) -> Option<T> {
        self.into_iter().nth(index)
    }

    fn find<P>(self, predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.into_iter().find(predicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::{Product, Sum};
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(Some(10), 15)]
    #[case(None, 5)]
    fn option_fold_left(#[case] value: Option<i32>, #[case] expected: i32) {
        assert_eq!(value.fold_left(5, |total, n| total + n), expected);
    }

    #[rstest]
    fn result_error_folds_to_seed() {
        let failed: Result<i32, &str> = Err("nope");
        assert_eq!(failed.fold_right(1, |n, total| n * total), 1);
        assert!(Foldable::is_empty(&failed));
        assert_eq!(failed.size(), 0);
    }

    #[rstest]
    fn vec_fold_right_runs_back_to_front() {
        let order = vec![1, 2, 3].fold_right(Vec::new(), |n, mut seen| {
            seen.push(n);
            seen
        });
        assert_eq!(order, vec![3, 2, 1]);
    }

    #[rstest]
    fn fold_map_and_combine_all() {
        assert_eq!(vec![2, 3, 4].fold_map(Product::new), Product(24));
        assert_eq!(vec![Sum(1), Sum(2)].combine_all(), Sum(3));
        assert_eq!(Vec::<Sum<i32>>::new().combine_all(), Sum(0));
    }

    #[rstest]
    #[case(vec![], 0, None)]
    #[case(vec![7, 8, 9], 0, Some(7))]
    #[case(vec![7, 8, 9], 2, Some(9))]
    #[case(vec![7, 8, 9], 3, None)]
    fn vec_get(#[case] values: Vec<i32>, #[case] index: usize, #[case] expected: Option<i32>) {
        assert_eq!(values.get(index), expected);
    }

    #[rstest]
    fn default_get_on_option() {
        assert_eq!(Some(4).get(0), Some(4));
        assert_eq!(Some(4).get(1), None);
    }

    #[rstest]
    fn find_exists_for_all() {
        let values = vec![1, 2, 3, 4];
        assert_eq!(values.clone().find(|n| *n > 2), Some(3));
        assert!(values.exists(|n| *n == 4));
        assert!(!values.for_all(|n| *n < 4));
        assert!(Vec::<i32>::new().for_all(|_| false));
    }

    #[rstest]
    fn reduce_left_option_on_empty_and_non_empty() {
        assert_eq!(Vec::<i32>::new().reduce_left_option(|a, b| a - b), None);
        assert_eq!(vec![10, 3, 2].reduce_left_option(|a, b| a - b), Some(5));
    }

    #[rstest]
    fn reduce_left_to_option_seeds_once() {
        let reduced = vec![1, 2, 3].reduce_left_to_option(|n| vec![n], |mut list, n| {
            list.insert(0, n);
            list
        });
        assert_eq!(reduced, Some(vec![3, 2, 1]));
    }

    #[rstest]
    fn reduce_right_option_associates_to_the_right() {
        let reduced = vec![10, 3, 2].reduce_right_option(|a, rest| rest.map(move |b| a - b));
        assert_eq!(reduced.value(), Some(9));
        let empty = Vec::<i32>::new().reduce_right_option(|a, rest| rest.map(move |b| a - b));
        assert_eq!(empty.value(), None);
    }

    #[rstest]
    fn fold_right_lazy_matches_strict_fold() {
        let lazy = vec![1, 2, 3]
            .fold_right_lazy(Eval::now(String::new()), |n, rest| {
                rest.map(move |text| format!("{n}{text}"))
            })
            .value();
        let strict = vec![1, 2, 3].fold_right(String::new(), |n, text| format!("{n}{text}"));
        assert_eq!(lazy, strict);
    }

    #[rstest]
    fn fold_right_lazy_stops_early() {
        let visited = Rc::new(Cell::new(0));
        let counter = Rc::clone(&visited);
        let found = (0..1_000)
            .collect::<Vec<i32>>()
            .fold_right_lazy(Eval::now(false), move |n, rest| {
                counter.set(counter.get() + 1);
                if n == 2 { Eval::now(true) } else { rest }
            })
            .value();
        assert!(found);
        assert_eq!(visited.get(), 3);
    }

    #[rstest]
    fn fold_right_lazy_is_stack_safe_on_long_vectors() {
        let total = (0..200_000_u64)
            .collect::<Vec<_>>()
            .fold_right_lazy(Eval::now(0_u64), |n, rest| rest.map(move |sum| sum + n))
            .value();
        assert_eq!(total, 199_999 * 200_000 / 2);
    }
}
