//! Law checking for typeclass instances.
//!
//! Each typeclass ships a list of named [`Law`]s. A law pairs a name with a
//! check that draws many inputs from a `proptest` strategy, runs two ways of
//! computing the same result, and compares them. The first disagreement is
//! shrunk and reported as a [`LawViolation`].
//!
//! Lists build on each other: [`reducible_laws`] contains every law of
//! [`foldable_laws`], [`monad_laws`] contains [`applicative_laws`], which
//! contains [`functor_laws`], and so on.
//!
//! # Examples
//!
//! ```rust
//! use lawful::laws::{self, Equality, LawConfig, generators};
//!
//! let config = LawConfig::default().with_cases(32);
//!
//! let reducible = laws::reducible_laws(generators::non_empty_vec(generators::printable_string(4), 8), Equality::natural());
//! assert!(laws::verify_with(&reducible, &config).is_ok());
//!
//! let functor = laws::functor_laws(generators::option_of(generators::int_small()), Equality::natural());
//! for law in &functor {
//!     assert!(law.check_with(&config).is_ok(), "{} failed", law.name());
//! }
//! ```

mod algebra;
mod config;
mod equality;
mod foldable;
mod functor;
pub mod generators;
mod law;
mod traverse;
mod violation;

pub use algebra::{eq_laws, monoid_laws, semigroup_laws, show_laws};
pub use config::LawConfig;
pub use equality::Equality;
pub use foldable::{foldable_laws, reducible_laws};
pub use functor::{applicative_laws, functor_laws, monad_laws};
pub use law::{Law, verify, verify_all, verify_with};
pub use traverse::{traverse_filter_laws, traverse_laws};
pub use violation::LawViolation;
