//! Either type - a value of one of two types.
//!
//! `Try::to_either` produces `Either<TryError, A>`, and the law generators
//! use `Either` as the two-variant tagged union.
//!
//! # Examples
//!
//! ```rust
//! use lawful::control::Either;
//!
//! let right: Either<i32, String> = Either::Right(String::from("hello"));
//! let rendered = right.fold(|n| format!("Number: {n}"), |s| format!("String: {s}"));
//! assert_eq!(rendered, "String: hello");
//! ```

use std::fmt;

/// A value that is either `Left(L)` or `Right(R)`.
///
/// By convention `Left` carries the failure or first alternative and
/// `Right` the success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left alternative.
    Left(L),
    /// The right alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` for `Left`.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` for `Right`.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// The left value, if any.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// The right value, if any.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Transforms the left value.
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transforms the right value.
    ///
    /// ```rust
    /// use lawful::control::Either;
    ///
    /// let success: Either<String, i32> = Either::Right(21);
    /// assert_eq!(success.map_right(|x| x * 2), Either::Right(42));
    /// ```
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Collapses both alternatives into one type.
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Exchanges the alternatives.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn variant_queries() {
        let left: Either<i32, String> = Either::Left(42);
        assert!(left.is_left());
        assert!(!left.is_right());
        assert_eq!(left.left(), Some(42));
    }

    #[rstest]
    fn swap_exchanges_sides() {
        let right: Either<i32, char> = Either::Right('r');
        assert_eq!(right.swap(), Either::Left('r'));
    }

    #[rstest]
    fn map_left_leaves_right_alone() {
        let right: Either<i32, char> = Either::Right('r');
        assert_eq!(right.map_left(|n| n + 1), Either::Right('r'));
        assert_eq!(Either::<i32, char>::Left(1).map_left(|n| n + 1), Either::Left(2));
    }

    #[rstest]
    fn result_round_trip() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<String, i32> = ok.into();
        assert_eq!(Result::from(either), Ok::<i32, String>(42));

        let err: Either<String, i32> = Err::<i32, String>(String::from("e")).into();
        assert_eq!(err, Either::Left(String::from("e")));
    }

    #[rstest]
    fn display_names_the_side() {
        assert_eq!(Either::<i32, &str>::Right("ok").to_string(), "Right(ok)");
        assert_eq!(Either::<i32, &str>::Left(3).to_string(), "Left(3)");
    }
}
