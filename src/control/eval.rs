//! Stack-safe lazy evaluation.
//!
//! This module provides `Eval<A>`, a suspended computation producing an `A`.
//! `Eval` is the currency of lazy right folds: a folding function receives
//! the rest of the fold as an unevaluated `Eval` and decides whether, and
//! when, to force it.
//!
//! # Evaluation
//!
//! An `Eval` is a tree of `now`, `later`, `defer` and `flat_map` nodes.
//! [`Eval::value`] interprets that tree in a loop with an explicit stack of
//! pending continuations, so arbitrarily deep chains of `defer` and
//! `flat_map` (left- or right-nested) run in constant call-stack space.
//!
//! # Examples
//!
//! ```rust
//! use lawful::control::Eval;
//!
//! fn count_down(n: u64) -> Eval<u64> {
//!     if n == 0 {
//!         Eval::now(0)
//!     } else {
//!         Eval::defer(move || count_down(n - 1))
//!     }
//! }
//!
//! assert_eq!(count_down(100_000).value(), 0);
//! ```

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

type Erased = Box<dyn Any>;
type Continuation = Box<dyn FnOnce(Erased) -> Node>;

/// Untyped evaluation tree. The type parameter of `Eval` guarantees that every
/// `Erased` value flowing through a node has the type the next continuation
/// expects.
enum Node {
    Now(Erased),
    Later(Box<dyn FnOnce() -> Erased>),
    Defer(Box<dyn FnOnce() -> Node>),
    FlatMap(Box<Node>, Continuation),
}

/// A lazily evaluated computation producing a value of type `A`.
///
/// # Laws
///
/// `Eval` forms a monad:
///
/// - **Left Identity**: `Eval::now(a).flat_map(f).value() == f(a).value()`
/// - **Right Identity**: `m.flat_map(Eval::now).value() == m.value()`
/// - **Associativity**: `m.flat_map(f).flat_map(g).value() == m.flat_map(|x| f(x).flat_map(g)).value()`
///
/// # Single Use
///
/// `Eval` is not `Clone`, and [`Eval::value`] consumes it, so every thunk
/// runs at most once. There is no separate memoizing variant: a value
/// that several consumers need is forced once and shared as a plain value.
///
/// # Thread Safety
///
/// `Eval` holds boxed closures and is neither `Send` nor `Sync`.
///
/// # Examples
///
/// ```rust
/// use lawful::control::Eval;
///
/// let eval = Eval::later(|| 20).map(|x| x + 1).flat_map(|x| Eval::now(x * 2));
/// assert_eq!(eval.value(), 42);
/// ```
pub struct Eval<A> {
    node: Node,
    marker: PhantomData<fn() -> A>,
}

impl<A: 'static> Eval<A> {
    const fn from_node(node: Node) -> Self {
        Self {
            node,
            marker: PhantomData,
        }
    }

    /// Creates an already evaluated `Eval`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::control::Eval;
    ///
    /// assert_eq!(Eval::now(42).value(), 42);
    /// ```
    #[inline]
    pub fn now(value: A) -> Self {
        Self::from_node(Node::Now(Box::new(value)))
    }

    /// Alias for [`Eval::now`].
    #[inline]
    pub fn pure(value: A) -> Self {
        Self::now(value)
    }

    /// Creates an `Eval` whose value is computed by `thunk` when forced.
    ///
    /// The thunk runs exactly once, when the `Eval` (or a computation built
    /// from it) is forced, and never if it is dropped unforced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::control::Eval;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let calls = Rc::new(Cell::new(0));
    /// let observed = Rc::clone(&calls);
    /// let eval = Eval::later(move || {
    ///     observed.set(observed.get() + 1);
    ///     42
    /// });
    ///
    /// assert_eq!(calls.get(), 0);
    /// assert_eq!(eval.value(), 42);
    /// assert_eq!(calls.get(), 1);
    /// ```
    #[inline]
    pub fn later<F>(thunk: F) -> Self
    where
        F: FnOnce() -> A + 'static,
    {
        Self::from_node(Node::Later(Box::new(move || Box::new(thunk()) as Erased)))
    }

    /// Creates an `Eval` that is produced by `thunk` when forced.
    ///
    /// This is the building block for stack-safe recursion.
    #[inline]
    pub fn defer<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Self + 'static,
    {
        Self::from_node(Node::Defer(Box::new(move || thunk().node)))
    }

    /// Sequences a computation that depends on the value of this one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lawful::control::Eval;
    ///
    /// let eval = Eval::now(21).flat_map(|x| Eval::later(move || x * 2));
    /// assert_eq!(eval.value(), 42);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Eval<B>
    where
        B: 'static,
        F: FnOnce(A) -> Eval<B> + 'static,
    {
        let continuation: Continuation =
            Box::new(move |erased| function(downcast::<A>(erased)).node);
        Eval::from_node(Node::FlatMap(Box::new(self.node), continuation))
    }

    /// Transforms the value once it is computed.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Eval<B>
    where
        B: 'static,
        F: FnOnce(A) -> B + 'static,
    {
        self.flat_map(move |value| Eval::now(function(value)))
    }

    /// Combines this computation with another one.
    #[inline]
    pub fn map2<B, C, F>(self, other: Eval<B>, function: F) -> Eval<C>
    where
        B: 'static,
        C: 'static,
        F: FnOnce(A, B) -> C + 'static,
    {
        self.flat_map(move |left| other.map(move |right| function(left, right)))
    }

    /// Returns `true` if the value is available without running any thunk.
    #[inline]
    pub const fn is_evaluated(&self) -> bool {
        matches!(self.node, Node::Now(_))
    }

    /// Forces the computation and returns its value.
    ///
    /// Uses constant call-stack space regardless of how the computation was
    /// built.
    pub fn value(self) -> A {
        let mut current = self.node;
        let mut continuations: Vec<Continuation> = Vec::new();

        loop {
            let produced = match current {
                Node::Now(value) => value,
                Node::Later(thunk) => thunk(),
                Node::Defer(thunk) => {
                    current = thunk();
                    continue;
                }
                Node::FlatMap(source, continuation) => {
                    continuations.push(continuation);
                    current = *source;
                    continue;
                }
            };

            match continuations.pop() {
                Some(continuation) => current = continuation(produced),
                None => return downcast::<A>(produced),
            }
        }
    }
}

fn downcast<A: 'static>(erased: Erased) -> A {
    match erased.downcast::<A>() {
        Ok(value) => *value,
        Err(_) => unreachable!("Eval continuation received a value of an unexpected type"),
    }
}

impl<A> fmt::Debug for Eval<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.node {
            Node::Now(_) => "Now",
            Node::Later(_) => "Later",
            Node::Defer(_) => "Defer",
            Node::FlatMap(..) => "FlatMap",
        };
        formatter.debug_tuple("Eval").field(&state).finish()
    }
}

static_assertions::assert_not_impl_any!(Eval<i32>: Send, Sync, Clone);
