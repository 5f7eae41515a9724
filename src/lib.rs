//! # lawful
//!
//! Typeclass traits, functional data types, and a harness that checks
//! concrete instances against the algebraic laws of their typeclass.
//!
//! ## Overview
//!
//! - **Type Classes**: `Semigroup`, `Monoid`, `Functor`, `Applicative`,
//!   `Monad`, `Foldable`, `Reducible`, `Traversable`, `TraverseFilter`
//! - **Derivation**: `NonEmptyReducible` turns a head/tail split into a full
//!   `Reducible`
//! - **Control**: `Eval` for stack-safe lazy right folds, `Either`
//! - **Data**: `Const`, `Try`, `NonEmptyVec`, `Ior`
//! - **Laws**: named law lists checked with `proptest`, plus generators
//!
//! ## Feature Flags
//!
//! - `laws`: the law harness and generators (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for the data types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lawful::prelude::*;
//!
//! let numbers = NonEmptyVec::new(1, vec![2, 3]);
//! assert_eq!(numbers.clone().reduce_left(|a, b| a + b), 6);
//! assert_eq!(numbers.size(), 3);
//!
//! let recovered = Try::<i32>::raise("boom").recover_with(|_| Try::success(42));
//! assert_eq!(recovered, Try::success(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use lawful::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::*;
    pub use crate::data::*;
    pub use crate::typeclass::*;

    #[cfg(feature = "laws")]
    pub use crate::laws::{Equality, Law, LawConfig, LawViolation};
}

pub mod control;
pub mod data;
pub mod typeclass;

#[cfg(feature = "laws")]
pub mod laws;
