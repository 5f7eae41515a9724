//! Control structures.
//!
//! - [`Eval`]: stack-safe lazy evaluation, used by lazy right folds
//! - [`Either`]: a value of one of two types
//!
//! # Examples
//!
//! ```rust
//! use lawful::control::{Either, Eval};
//!
//! let deferred = Eval::later(|| 6).map(|n| n * 7);
//! assert_eq!(deferred.value(), 42);
//!
//! let either: Either<String, i32> = Ok::<i32, String>(1).into();
//! assert!(either.is_right());
//! ```

mod either;
mod eval;

pub use either::Either;
pub use eval::Eval;
