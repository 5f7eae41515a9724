//! Inclusive-or: a left value, a right value, or both.
//!
//! # Examples
//!
//! ```rust
//! use lawful::control::Either;
//! use lawful::data::Ior;
//!
//! let both: Ior<&str, i32> = Ior::Both("warning", 3);
//! assert_eq!(both.clone().pad(), (Some("warning"), Some(3)));
//! assert_eq!(both.to_either(), Either::Right(3));
//! ```

use std::fmt;

use crate::control::Either;

/// `Left(L)`, `Right(R)` or `Both(L, R)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ior<L, R> {
    /// Only a left value.
    Left(L),
    /// Only a right value.
    Right(R),
    /// A left and a right value.
    Both(L, R),
}

impl<L, R> Ior<L, R> {
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

    /// Returns `true` for `Both`.
    #[inline]
    pub const fn is_both(&self) -> bool {
        matches!(self, Self::Both(..))
    }

    /// The left value of `Left` or `Both`.
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(left) | Self::Both(left, _) => Some(left),
            Self::Right(_) => None,
        }
    }

    /// The right value of `Right` or `Both`.
    pub fn right(self) -> Option<R> {
        match self {
            Self::Right(right) | Self::Both(_, right) => Some(right),
            Self::Left(_) => None,
        }
    }

    /// Collapses each of the three shapes into one type.
    pub fn fold<T, F, G, H>(self, on_left: F, on_right: G, on_both: H) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
        H: FnOnce(L, R) -> T,
    {
        match self {
            Self::Left(left) => on_left(left),
            Self::Right(right) => on_right(right),
            Self::Both(left, right) => on_both(left, right),
        }
    }

    /// Transforms the right value, if present.
    pub fn map<T, F>(self, function: F) -> Ior<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(left) => Ior::Left(left),
            Self::Right(right) => Ior::Right(function(right)),
            Self::Both(left, right) => Ior::Both(left, function(right)),
        }
    }

    /// Transforms the left value, if present.
    pub fn map_left<T, F>(self, function: F) -> Ior<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(left) => Ior::Left(function(left)),
            Self::Right(right) => Ior::Right(right),
            Self::Both(left, right) => Ior::Both(function(left), right),
        }
    }

    /// Exchanges the sides.
    pub fn swap(self) -> Ior<R, L> {
        match self {
            Self::Left(left) => Ior::Right(left),
            Self::Right(right) => Ior::Left(right),
            Self::Both(left, right) => Ior::Both(right, left),
        }
    }

    /// Both sides as options.
    pub fn pad(self) -> (Option<L>, Option<R>) {
        match self {
            Self::Left(left) => (Some(left), None),
            Self::Right(right) => (None, Some(right)),
            Self::Both(left, right) => (Some(left), Some(right)),
        }
    }

    /// Drops the left side of `Both`.
    pub fn to_either(self) -> Either<L, R> {
        match self {
            Self::Left(left) => Either::Left(left),
            Self::Right(right) | Self::Both(_, right) => Either::Right(right),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Ior<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(left) => write!(formatter, "Left({left})"),
            Self::Right(right) => write!(formatter, "Right({right})"),
            Self::Both(left, right) => write!(formatter, "Both({left}, {right})"),
        }
    }
}
