//! A computation that either succeeded with a value or failed with an error.
//!
//! [`Try`] is a data-level result: a failure is an ordinary value of type
//! [`TryError`], never an unwinding panic. [`Try::catching`] is the one
//! bridge from panics, turning them into `TryError::Panicked`.
//!
//! # Examples
//!
//! ```rust
//! use lawful::data::{Try, TryError};
//!
//! let parsed = Try::from("42".parse::<i32>()).map(|n| n * 2);
//! assert_eq!(parsed, Try::success(84));
//!
//! let recovered = Try::<i32>::raise("no value").recover_with(|_| Try::success(42));
//! assert_eq!(recovered, Try::success(42));
//!
//! let untouched = Try::success(7).recover_with(|_| Try::success(42));
//! assert_eq!(untouched, Try::success(7));
//!
//! let caught: Try<i32> = Try::catching(|| panic!("boom"));
//! assert_eq!(caught, Try::failure(TryError::Panicked(String::from("boom"))));
//! ```

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

use crate::control::Either;
use crate::typeclass::{Applicative, Foldable, Functor, Monad, Traversable, TypeConstructor};

/// Why a [`Try`] failed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TryError {
    /// An error raised explicitly or converted from a `std::error::Error`.
    #[error("{0}")]
    Raised(String),

    /// The computation panicked.
    #[error("computation panicked: {0}")]
    Panicked(String),

    /// A success was rejected by `Try::filter`.
    #[error("predicate does not hold for {0}")]
    PredicateFailed(String),

    /// `Try::failed` was called on a success.
    #[error("Try::failed called on a success")]
    NotAFailure,
}

/// Either `Success(A)` or `Failure(TryError)`.
///
/// # Laws
///
/// `Try` is a lawful monad; its applicative keeps the first failure.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Try<A> {
    /// The computation produced a value.
    Success(A),
    /// The computation failed.
    Failure(TryError),
}

impl<A> Try<A> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// A successful computation.
    #[inline]
    pub const fn success(value: A) -> Self {
        Self::Success(value)
    }

    /// A failed computation.
    #[inline]
    pub const fn failure(error: TryError) -> Self {
        Self::Failure(error)
    }

    /// A failure carrying `message`.
    pub fn raise(message: impl Into<String>) -> Self {
        Self::Failure(TryError::Raised(message.into()))
    }

    /// Runs `computation`, turning a panic into `TryError::Panicked`.
    pub fn catching<F>(computation: F) -> Self
    where
        F: FnOnce() -> A,
    {
        panic::catch_unwind(AssertUnwindSafe(computation))
            .map_or_else(|payload| Self::Failure(TryError::Panicked(panic_message(&*payload))), Self::Success)
    }

    /// Runs a fallible `computation`, converting its error to
    /// `TryError::Raised`.
    ///
    /// ```rust
    /// use lawful::data::Try;
    ///
    /// let parsed = Try::invoke(|| "x".parse::<u8>());
    /// assert!(parsed.is_failure());
    /// ```
    pub fn invoke<E, F>(computation: F) -> Self
    where
        E: StdError,
        F: FnOnce() -> Result<A, E>,
    {
        Self::from(computation())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` for `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` for a success whose value satisfies `predicate`.
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Success(value) => predicate(value),
            Self::Failure(_) => false,
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// The value, or the error that prevented it.
    ///
    /// # Errors
    ///
    /// Returns the stored [`TryError`] for a failure.
    pub fn get(self) -> Result<A, TryError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// The value, or `default()` for a failure.
    pub fn get_or_else<F>(self, default: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default(),
        }
    }

    /// The value, discarding any error.
    pub fn ok(self) -> Option<A> {
        self.get().ok()
    }

    /// `Right` for a success, `Left` for a failure.
    pub fn to_either(self) -> Either<TryError, A> {
        self.get().into()
    }

    /// Collapses both outcomes into one type.
    pub fn fold<B, F, G>(self, on_failure: F, on_success: G) -> B
    where
        F: FnOnce(TryError) -> B,
        G: FnOnce(A) -> B,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Transforms a success.
    pub fn map<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Success(value) => Try::Success(function(value)),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Chains a computation that may itself fail.
    pub fn flat_map<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(A) -> Try<B>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Turns a success that fails `predicate` into
    /// `TryError::PredicateFailed`.
    ///
    /// ```rust
    /// use lawful::data::{Try, TryError};
    ///
    /// assert_eq!(Try::success(4).filter(|n| n % 2 == 0), Try::success(4));
    /// assert_eq!(
    ///     Try::success(3).filter(|n| n % 2 == 0),
    ///     Try::failure(TryError::PredicateFailed(String::from("3")))
    /// );
    /// ```
    pub fn filter<P>(self, predicate: P) -> Self
    where
        A: fmt::Debug,
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Success(value) if !predicate(&value) => {
                Self::Failure(TryError::PredicateFailed(format!("{value:?}")))
            }
            other => other,
        }
    }

    /// Continues with `on_success` or `on_failure` depending on the outcome.
    pub fn transform<B, F, G>(self, on_success: G, on_failure: F) -> Try<B>
    where
        G: FnOnce(A) -> Try<B>,
        F: FnOnce(TryError) -> Try<B>,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Inverts the outcome: the error of a failure becomes the value.
    pub fn failed(self) -> Try<TryError> {
        match self {
            Self::Success(_) => Try::Failure(TryError::NotAFailure),
            Self::Failure(error) => Try::Success(error),
        }
    }

    // =========================================================================
    // Recovery
    // =========================================================================

    /// Replaces a failure with the value produced from its error.
    pub fn recover<F>(self, function: F) -> Self
    where
        F: FnOnce(TryError) -> A,
    {
        match self {
            Self::Failure(error) => Self::Success(function(error)),
            success => success,
        }
    }

    /// Replaces a failure with the outcome of `fallback`. A success passes
    /// through and `fallback` never runs.
    pub fn recover_with<F>(self, fallback: F) -> Self
    where
        F: FnOnce(TryError) -> Self,
    {
        match self {
            Self::Failure(error) => fallback(error),
            success => success,
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| String::from("non-string panic payload"))
}

impl<A, E: StdError> From<Result<A, E>> for Try<A> {
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(TryError::Raised(error.to_string())),
        }
    }
}

impl<A: fmt::Display> fmt::Display for Try<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(error) => write!(formatter, "Failure({error})"),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Try<A> {
    type Inner = A;
    type WithType<B> = Try<B>;
}

impl<A> Functor for Try<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    fn fmap_ref<B, F>(&self, function: F) -> Try<B>
    where
        F: FnOnce(&A) -> B,
    {
        match self {
            Self::Success(value) => Try::Success(function(value)),
            Self::Failure(error) => Try::Failure(error.clone()),
        }
    }
}

/// The first failure wins.
impl<A> Applicative for Try<A> {
    #[inline]
    fn pure<B>(value: B) -> Try<B> {
        Try::Success(value)
    }

    fn map2<B, C, F>(self, other: Try<B>, function: F) -> Try<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Success(left), Try::Success(right)) => Try::Success(function(left, right)),
            (Self::Failure(error), _) | (_, Try::Failure(error)) => Try::Failure(error),
        }
    }
}

impl<A> Monad for Try<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(A) -> Try<B>,
    {
        Self::flat_map(self, function)
    }
}

/// A success holds one element, a failure none.
impl<A> Foldable for Try<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Self::Success(value) => function(init, value),
            Self::Failure(_) => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Self::Success(value) => function(value, init),
            Self::Failure(_) => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_failure()
    }

    #[inline]
    fn size(&self) -> usize {
        usize::from(self.is_success())
    }
}

impl<A> Traversable for Try<A> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Try<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        match self {
            Self::Success(value) => function(value).map(Try::Success),
            Self::Failure(error) => Some(Try::Failure(error)),
        }
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Try<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        match self {
            Self::Success(value) => function(value).map(Try::Success),
            Self::Failure(error) => Ok(Try::Failure(error)),
        }
    }
}
