//! A vector with at least one element.
//!
//! `NonEmptyVec` is the canonical [`NonEmptyReducible`]: it splits into its
//! head and a plain `Vec` tail, and so picks up `Foldable` and `Reducible`
//! from the blanket derivation.
//!
//! # Examples
//!
//! ```rust
//! use lawful::data::NonEmptyVec;
//! use lawful::typeclass::{Foldable, Reducible, Sum};
//!
//! let numbers = NonEmptyVec::new(1, vec![2, 3]);
//! assert_eq!(numbers.clone().reduce_map(Sum::new), Sum(6));
//! assert_eq!(numbers.clone().maximum(), 3);
//! assert_eq!(numbers.size(), 3);
//!
//! assert!(NonEmptyVec::from_vec(Vec::<i32>::new()).is_none());
//! ```

use std::fmt;
use std::iter::{Chain, Once, once};

use crate::typeclass::{FunctorMut, NonEmptyReducible, Semigroup, Traversable, TypeConstructor};

/// A head element followed by a possibly empty tail.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NonEmptyVec<A> {
    head: A,
    tail: Vec<A>,
}

impl<A> NonEmptyVec<A> {
    /// Builds a vector from its first element and the rest.
    #[inline]
    pub const fn new(head: A, tail: Vec<A>) -> Self {
        Self { head, tail }
    }

    /// A vector of exactly one element.
    #[inline]
    pub const fn singleton(head: A) -> Self {
        Self::new(head, Vec::new())
    }

    /// Converts a `Vec`, or `None` if it is empty.
    pub fn from_vec(mut elements: Vec<A>) -> Option<Self> {
        if elements.is_empty() {
            None
        } else {
            let head = elements.remove(0);
            Some(Self::new(head, elements))
        }
    }

    /// The first element.
    #[inline]
    pub const fn head(&self) -> &A {
        &self.head
    }

    /// Every element after the first.
    #[inline]
    pub fn tail(&self) -> &[A] {
        &self.tail
    }

    /// Number of elements; always at least one.
    #[inline]
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Borrowing iterator, first to last.
    pub fn iter(&self) -> Chain<Once<&A>, std::slice::Iter<'_, A>> {
        once(&self.head).chain(self.tail.iter())
    }

    /// Appends an element at the end.
    pub fn push(&mut self, element: A) {
        self.tail.push(element);
    }

    /// Converts into a plain `Vec`.
    pub fn into_vec(self) -> Vec<A> {
        let mut elements = Vec::with_capacity(self.len());
        elements.push(self.head);
        elements.extend(self.tail);
        elements
    }
}

impl<A> From<NonEmptyVec<A>> for Vec<A> {
    fn from(elements: NonEmptyVec<A>) -> Self {
        elements.into_vec()
    }
}

impl<A> IntoIterator for NonEmptyVec<A> {
    type Item = A;
    type IntoIter = Chain<Once<A>, std::vec::IntoIter<A>>;

    fn into_iter(self) -> Self::IntoIter {
        once(self.head).chain(self.tail)
    }
}

impl<'a, A> IntoIterator for &'a NonEmptyVec<A> {
    type Item = &'a A;
    type IntoIter = Chain<Once<&'a A>, std::slice::Iter<'a, A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A: fmt::Display> fmt::Display for NonEmptyVec<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "NonEmptyVec(")?;
        for (position, element) in self.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, ")")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for NonEmptyVec<A> {
    type Inner = A;
    type WithType<B> = NonEmptyVec<B>;
}

impl<A> NonEmptyReducible for NonEmptyVec<A> {
    type Tail = Vec<A>;

    #[inline]
    fn split(self) -> (A, Vec<A>) {
        (self.head, self.tail)
    }
}

impl<A> FunctorMut for NonEmptyVec<A> {
    fn fmap_mut<B, F>(self, mut function: F) -> NonEmptyVec<B>
    where
        F: FnMut(A) -> B,
    {
        let head = function(self.head);
        NonEmptyVec::new(head, self.tail.into_iter().map(function).collect())
    }

    fn fmap_ref_mut<B, F>(&self, mut function: F) -> NonEmptyVec<B>
    where
        F: FnMut(&A) -> B,
    {
        let head = function(&self.head);
        NonEmptyVec::new(head, self.tail.iter().map(function).collect())
    }
}

/// Concatenation.
impl<A> Semigroup for NonEmptyVec<A> {
    fn combine(mut self, other: Self) -> Self {
        self.tail.push(other.head);
        self.tail.extend(other.tail);
        self
    }
}

impl<A> Traversable for NonEmptyVec<A> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<NonEmptyVec<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        let head = function(self.head)?;
        let tail = self.tail.into_iter().map(function).collect::<Option<Vec<B>>>()?;
        Some(NonEmptyVec::new(head, tail))
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<NonEmptyVec<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        let head = function(self.head)?;
        let tail = self.tail.into_iter().map(function).collect::<Result<Vec<B>, E>>()?;
        Ok(NonEmptyVec::new(head, tail))
    }
}
