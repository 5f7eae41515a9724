//! Type class traits.
//!
//! - [`Semigroup`] / [`Monoid`]: combining values
//! - [`Functor`] / [`FunctorMut`]: mapping over contents
//! - [`Applicative`] / [`Monad`]: combining and sequencing computations
//! - [`Foldable`]: folding possibly-empty structures
//! - [`Reducible`]: reducing structures that are never empty
//! - [`NonEmptyReducible`]: deriving `Foldable` and `Reducible` from a
//!   head/tail split
//! - [`Traversable`]: mapping with `Option` or `Result` effects
//! - [`FunctorFilter`] / [`TraverseFilter`]: mapping while dropping elements
//!
//! ## Kind Encoding
//!
//! Rust has no higher-kinded types. [`TypeConstructor`] uses Generic
//! Associated Types so that each trait can talk about "the same container
//! with a different element type".
//!
//! ## Wrappers
//!
//! [`Sum`], [`Product`], [`Max`] and [`Min`] pick which semigroup a value
//! takes part in.
//!
//! # Examples
//!
//! ```rust
//! use lawful::data::NonEmptyVec;
//! use lawful::typeclass::{Foldable, Monoid, Reducible, Semigroup, Sum};
//!
//! assert_eq!(Sum::combine_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
//!
//! let numbers = NonEmptyVec::new(1, vec![2, 3]);
//! assert_eq!(numbers.clone().reduce_map(Sum::new), Sum(6));
//! assert_eq!(numbers.size(), 3);
//! assert_eq!(String::from("ab").combine(String::from("c")), "abc");
//! ```

mod applicative;
mod filter;
mod foldable;
mod functor;
mod higher;
mod monad;
mod monoid;
mod non_empty_reducible;
mod reducible;
mod semigroup;
mod traversable;
mod wrappers;

pub use applicative::Applicative;
pub use filter::{FunctorFilter, TraverseFilter};
pub use foldable::Foldable;
pub use functor::{Functor, FunctorMut};
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use non_empty_reducible::NonEmptyReducible;
pub use reducible::Reducible;
pub use semigroup::Semigroup;
pub use traversable::Traversable;
pub use wrappers::{Max, Min, Product, Sum};
