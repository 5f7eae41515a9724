//! Kind encoding through Generic Associated Types.
//!
//! Rust has no higher-kinded types, so a trait cannot abstract over
//! `Option<_>` or `Vec<_>` directly. Instead every concrete container
//! `F<A>` names its element type and how to rebuild itself around another
//! element type. All capability traits in this crate (`Functor`,
//! `Foldable`, `Reducible`, ...) are stated in terms of that pair.
//!
//! # Example
//!
//! ```rust
//! use lawful::typeclass::TypeConstructor;
//!
//! fn empty_like<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none: Option<String> = empty_like(Some(42));
//! assert_eq!(none, None);
//! ```

/// A type constructor applied to some element type.
///
/// # Associated Types
///
/// - `Inner`: the element type this constructor is currently applied to.
/// - `WithType<B>`: the same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself. Law checkers
/// in this crate ask for that equality explicitly through a
/// `WithType<i32> = F` bound.
pub trait TypeConstructor {
    /// The element type. For `Option<i32>` this is `i32`.
    type Inner;

    /// The same constructor applied to `B`. For `Option<i32>`,
    /// `WithType<String>` is `Option<String>`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}
