//! Deriving `Foldable` and `Reducible` from a head/tail split.
//!
//! A non-empty structure is its first element plus a (possibly empty)
//! foldable remainder. Implementing [`NonEmptyReducible::split`] is enough:
//! the blanket implementations below apply each operation to the head and
//! delegate the rest to the tail's own `Foldable` instance.
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::{Foldable, NonEmptyReducible, Reducible, TypeConstructor};
//!
//! #[derive(Clone)]
//! struct Pair<A>(A, A);
//!
//! impl<A> TypeConstructor for Pair<A> {
//!     type Inner = A;
//!     type WithType<B> = Pair<B>;
//! }
//!
//! impl<A> NonEmptyReducible for Pair<A> {
//!     type Tail = Option<A>;
//!
//!     fn split(self) -> (A, Option<A>) {
//!         (self.0, Some(self.1))
//!     }
//! }
//!
//! assert_eq!(Pair(3, 4).reduce_left(|a, b| a * b), 12);
//! assert_eq!(Pair('x', 'y').size(), 2);
//! assert_eq!(Pair('x', 'y').get(1), Some('y'));
//! ```

use std::rc::Rc;

use super::foldable::Foldable;
use super::higher::TypeConstructor;
use super::reducible::Reducible;
use crate::control::Eval;

/// A non-empty structure described by its first element and the rest.
pub trait NonEmptyReducible: TypeConstructor + Sized {
    /// The remainder after the first element. May be empty.
    type Tail: Foldable<Inner = Self::Inner>;

    /// Separates the first element from the rest.
    fn split(self) -> (Self::Inner, Self::Tail);
}

impl<T: NonEmptyReducible> Foldable for T {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B,
    {
        let (head, tail) = self.split();
        let accumulator = function(init, head);
        tail.fold_left(accumulator, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B,
    {
        let (head, tail) = self.split();
        let accumulator = tail.fold_right(init, &mut function);
        function(head, accumulator)
    }

    fn fold_right_lazy<B, F>(self, init: Eval<B>, function: F) -> Eval<B>
    where
        Self::Inner: 'static,
        B: 'static,
        F: Fn(Self::Inner, Eval<B>) -> Eval<B> + 'static,
    {
        let (head, tail) = self.split();
        let function = Rc::new(function);
        let delegate = Rc::clone(&function);
        let rest = tail.fold_right_lazy(init, move |element, later| delegate(element, later));
        Eval::defer(move || function(head, rest))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        false
    }

    fn size(&self) -> usize
    where
        Self: Clone,
    {
        let (_, tail) = self.clone().split();
        tail.fold_left(1, |count, _| count + 1)
    }

    fn get(self, index: usize) -> Option<Self::Inner> {
        let (head, tail) = self.split();
        match index {
            0 => Some(head),
            _ => tail.get(index - 1),
        }
    }

    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        let (head, tail) = self.split();
        if predicate(&head) {
            Some(head)
        } else {
            tail.find(predicate)
        }
    }
}

impl<T: NonEmptyReducible> Reducible for T {
    fn reduce_left_to<B, F, G>(self, function: F, combine: G) -> B
    where
        F: FnOnce(Self::Inner) -> B,
        G: FnMut(B, Self::Inner) -> B,
    {
        let (head, tail) = self.split();
        tail.fold_left(function(head), combine)
    }

    fn reduce_right_to<B, F, G>(self, function: F, combine: G) -> Eval<B>
    where
        Self::Inner: 'static,
        B: 'static,
        F: Fn(Self::Inner) -> B + 'static,
        G: Fn(Self::Inner, Eval<B>) -> Eval<B> + 'static,
    {
        let (head, tail) = self.split();
        let function = Rc::new(function);
        let combine = Rc::new(combine);
        let (tail_function, tail_combine) = (Rc::clone(&function), Rc::clone(&combine));

        tail.reduce_right_to_option(
            move |element| tail_function(element),
            move |element, later| tail_combine(element, later),
        )
        .flat_map(move |reduced| match reduced {
            Some(right) => combine(head, Eval::now(right)),
            None => Eval::later(move || function(head)),
        })
    }
}
