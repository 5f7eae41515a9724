//! Functional data types.
//!
//! - [`Const`]: a constant functor carrying a value and a phantom element type
//! - [`Try`]: a computation that succeeded or failed with a [`TryError`]
//! - [`NonEmptyVec`]: a vector with at least one element
//! - [`Ior`]: a left value, a right value, or both
//!
//! # Examples
//!
//! ```rust
//! use lawful::data::{Const, NonEmptyVec, Try};
//! use lawful::typeclass::{Reducible, Product};
//!
//! assert_eq!(Const::<i32, String>::new(5).into_value(), 5);
//! assert_eq!(NonEmptyVec::new(Product(2), vec![Product(3)]).reduce(), Product(6));
//! assert_eq!(Try::success(1).map(|n| n + 1), Try::success(2));
//! ```

mod constant;
mod ior;
mod non_empty_vec;
mod try_value;

pub use constant::Const;
pub use ior::Ior;
pub use non_empty_vec::NonEmptyVec;
pub use try_value::{Try, TryError};
