//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ```text
//! fa.fmap(|x| x) == fa                          (identity)
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))    (composition)
//! ```
//!
//! `Functor::fmap` takes a `FnOnce`, so it only fits containers holding at
//! most one element (`Option`, `Result`, `Try`) or none at all (`Const`).
//! Multi-element containers (`Vec`, `NonEmptyVec`) implement [`FunctorMut`]
//! instead.
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::{Functor, FunctorMut};
//!
//! assert_eq!(Some(5).fmap(|n| n.to_string()), Some(String::from("5")));
//! assert_eq!(vec![1, 2, 3].fmap_mut(|n| n * 2), vec![2, 4, 6]);
//! ```

use super::higher::TypeConstructor;

/// Containers whose (at most one) element can be transformed in place.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the element, keeping the structure.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B + 'static,
        B: 'static;

    /// Like [`Functor::fmap`] but borrows the container.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces the element with `value`.
    ///
    /// ```rust
    /// use lawful::typeclass::Functor;
    ///
    /// assert_eq!(Some(1).replace("x"), Some("x"));
    /// assert_eq!(None::<i32>.replace("x"), None);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: 'static,
    {
        self.fmap(|_| value)
    }

    /// Discards the element, keeping only the structure.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

/// Containers with any number of elements, mapped with a `FnMut`.
pub trait FunctorMut: TypeConstructor {
    /// Applies `function` to every element, in order.
    fn fmap_mut<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Like [`FunctorMut::fmap_mut`] but borrows the container.
    fn fmap_ref_mut<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Result<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().map(function).map_err(Clone::clone)
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> FunctorMut for Vec<T> {
    #[inline]
    fn fmap_mut<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    #[inline]
    fn fmap_ref_mut<B, F>(&self, function: F) -> Vec<B>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(function).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(3), Some(6))]
    #[case(None, None)]
    fn option_fmap(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(input.fmap(|n| n * 2), expected);
    }

    #[rstest]
    fn option_fmap_ref_keeps_original() {
        let value = Some(String::from("hello"));
        assert_eq!(value.fmap_ref(String::len), Some(5));
        assert_eq!(value, Some(String::from("hello")));
    }

    #[rstest]
    fn result_fmap_leaves_error_untouched() {
        let failed: Result<i32, String> = Err(String::from("boom"));
        assert_eq!(failed.fmap(|n| n + 1), Err(String::from("boom")));
        assert_eq!(Ok::<i32, String>(1).fmap(|n| n + 1), Ok(2));
    }

    #[rstest]
    fn result_fmap_ref_clones_error() {
        let failed: Result<i32, String> = Err(String::from("boom"));
        assert_eq!(failed.fmap_ref(|n| n + 1), Err(String::from("boom")));
    }

    #[rstest]
    fn void_and_replace() {
        assert_eq!(Some(1).void(), Some(()));
        assert_eq!(Ok::<i32, ()>(1).replace('a'), Ok('a'));
    }

    #[rstest]
    fn vec_fmap_mut_visits_in_order() {
        let mut seen = Vec::new();
        let doubled = vec![1, 2, 3].fmap_mut(|n| {
            seen.push(n);
            n * 2
        });
        assert_eq!(doubled, vec![2, 4, 6]);
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[rstest]
    fn vec_fmap_ref_mut_borrows() {
        let words = vec![String::from("a"), String::from("bc")];
        assert_eq!(words.fmap_ref_mut(String::len), vec![1, 2]);
    }

    #[rstest]
    fn option_functor_laws_hold_for_examples() {
        let value = Some(7);
        assert_eq!(value.fmap(|x| x), value);
        assert_eq!(
            value.fmap(|x| x + 1).fmap(|x| x * 3),
            value.fmap(|x| (x + 1) * 3)
        );
    }
}
