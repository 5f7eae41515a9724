//! Traversable type class - mapping with effects and collecting results.
//!
//! Without higher-kinded types there is no single `traverse` over every
//! applicative, so the two effects that matter in practice get their own
//! methods:
//!
//! - `traverse_option`: stops at the first `None`
//! - `traverse_result`: stops at the first `Err`
//!
//! # Laws
//!
//! ```text
//! fa.traverse_option(Some) == Some(fa)                                  (identity)
//! fa.traverse_option(f) == fa.traverse_result(|a| f(a).ok_or(())).ok()  (effects agree)
//! fa.traverse_option(f).and_then(|fb| fb.traverse_option(g))
//!     == fa.traverse_option(|a| f(a).and_then(g))                       (composition)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::Traversable;
//!
//! let parsed: Option<Vec<i32>> = vec!["1", "2", "3"].traverse_option(|s| s.parse().ok());
//! assert_eq!(parsed, Some(vec![1, 2, 3]));
//!
//! let failed: Result<Vec<i32>, String> =
//!     vec!["1", "x"].traverse_result(|s| s.parse().map_err(|_| format!("bad: {s}")));
//! assert_eq!(failed, Err(String::from("bad: x")));
//! ```

use super::foldable::Foldable;

/// Structures that can apply an effectful function to every element and
/// collect the results inside the effect.
pub trait Traversable: Foldable {
    /// Applies `function` to every element in order; `None` as soon as any
    /// call returns `None`.
    fn traverse_option<B, F>(self, function: F) -> Option<Self::WithType<B>>
    where
        F: FnMut(Self::Inner) -> Option<B>;

    /// Applies `function` to every element in order; the first `Err` wins.
    fn traverse_result<B, E, F>(self, function: F) -> Result<Self::WithType<B>, E>
    where
        F: FnMut(Self::Inner) -> Result<B, E>;

    /// Turns a structure of options into an optional structure.
    ///
    /// ```rust
    /// use lawful::typeclass::Traversable;
    ///
    /// let complete: Option<Vec<i32>> = vec![Some(1), Some(2)].sequence_option();
    /// assert_eq!(complete, Some(vec![1, 2]));
    ///
    /// let partial: Option<Vec<i32>> = vec![Some(1), None].sequence_option();
    /// assert_eq!(partial, None);
    /// ```
    fn sequence_option<B>(self) -> Option<Self::WithType<B>>
    where
        Self: Sized,
        Self::Inner: Into<Option<B>>,
    {
        self.traverse_option(Into::into)
    }

    /// Turns a structure of results into a result of a structure.
    fn sequence_result<B, E>(self) -> Result<Self::WithType<B>, E>
    where
        Self: Sized,
        Self::Inner: Into<Result<B, E>>,
    {
        self.traverse_result(Into::into)
    }
}

impl<A> Traversable for Option<A> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Option<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        match self {
            Some(element) => function(element).map(Some),
            None => Some(None),
        }
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Option<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        self.map(&mut function).transpose()
    }
}

impl<T, E> Traversable for Result<T, E> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Result<B, E>>
    where
        F: FnMut(T) -> Option<B>,
    {
        match self {
            Ok(element) => function(element).map(Ok),
            Err(error) => Some(Err(error)),
        }
    }

    fn traverse_result<B, E2, F>(self, mut function: F) -> Result<Result<B, E>, E2>
    where
        F: FnMut(T) -> Result<B, E2>,
    {
        match self {
            Ok(element) => function(element).map(Ok),
            Err(error) => Ok(Err(error)),
        }
    }
}

impl<A> Traversable for Vec<A> {
    fn traverse_option<B, F>(self, function: F) -> Option<Vec<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        self.into_iter().map(function).collect()
    }

    fn traverse_result<B, E, F>(self, function: F) -> Result<Vec<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        self.into_iter().map(function).collect()
    }
}
