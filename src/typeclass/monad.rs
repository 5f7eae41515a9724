//! Monad type class - sequencing dependent computations.
//!
//! # Laws
//!
//! ```text
//! F::pure(a).flat_map(f) == f(a)                                        (left identity)
//! m.flat_map(F::pure) == m                                              (right identity)
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))         (associativity)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lawful::typeclass::Monad;
//!
//! let halve = |n: i32| if n % 2 == 0 { Some(n / 2) } else { None };
//! assert_eq!(Monad::flat_map(Some(8), halve), Some(4));
//! assert_eq!(Monad::flat_map(Some(3), halve), None);
//! ```

use super::applicative::Applicative;

/// An applicative whose next computation may depend on the previous result.
pub trait Monad: Applicative {
    /// Feeds the element to `function` and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences `next` after `self`, discarding the first element.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.and_then(function)
    }
}

impl<T, E: Clone> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        self.and_then(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(text: &str) -> Result<i32, String> {
        text.parse().map_err(|_| format!("not a number: {text}"))
    }

    #[rstest]
    fn option_flat_map_short_circuits() {
        assert_eq!(Monad::flat_map(None::<i32>, |n| Some(n + 1)), None);
        assert_eq!(Monad::flat_map(Some(1), |_| None::<i32>), None);
    }

    #[rstest]
    fn result_flat_map_chains() {
        let parsed = Monad::flat_map(Ok::<&str, String>("21"), parse);
        assert_eq!(parsed, Ok(21));
        let failed = Monad::flat_map(Ok::<&str, String>("x"), parse);
        assert_eq!(failed, Err(String::from("not a number: x")));
    }

    #[rstest]
    fn then_discards_first_element() {
        assert_eq!(Some(1).then(Some("next")), Some("next"));
        assert_eq!(None::<i32>.then(Some("next")), None);
    }

    #[rstest]
    fn option_monad_laws_hold_for_examples() {
        let f = |x: i32| if x > 0 { Some(x * 2) } else { None };
        let g = |x: i32| Some(x - 1);
        assert_eq!(Monad::flat_map(<Option<()>>::pure(3), f), f(3));
        assert_eq!(Monad::flat_map(Some(3), Some), Some(3));
        assert_eq!(
            Monad::flat_map(Monad::flat_map(Some(3), f), g),
            Monad::flat_map(Some(3), |x| Monad::flat_map(f(x), g))
        );
    }
}
