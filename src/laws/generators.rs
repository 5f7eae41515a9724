//! Strategies for the values laws are checked against.
//!
//! Every function returns a `proptest` strategy; randomness, shrinking and
//! seeding all belong to `proptest`.
//!
//! ```rust
//! use lawful::laws::generators::{int_small, non_empty_vec, try_of};
//! use proptest::strategy::{Strategy, ValueTree};
//! use proptest::test_runner::TestRunner;
//!
//! let mut runner = TestRunner::deterministic();
//! let numbers = non_empty_vec(int_small(), 4).new_tree(&mut runner).unwrap().current();
//! assert!((1..=4).contains(&numbers.len()));
//!
//! let attempt = try_of(int_small()).new_tree(&mut runner).unwrap().current();
//! assert!(attempt.is_success() || attempt.is_failure());
//! ```

use proptest::prelude::*;

use crate::control::Either;
use crate::data::{Const, Ior, NonEmptyVec, Try};

/// Integers small enough that sums over a generated container cannot
/// overflow: `[i32::MIN / 10_000, i32::MAX / 10_000]`.
pub fn int_small() -> impl Strategy<Value = i32> + Clone {
    (i32::MIN / 10_000)..=(i32::MAX / 10_000)
}

/// Any `i32` except zero.
pub fn non_zero_int() -> impl Strategy<Value = i32> + Clone {
    any::<i32>().prop_filter("zero is excluded", |n| *n != 0)
}

/// Printable ASCII characters, `' '` through `'~'`.
pub fn printable_char() -> impl Strategy<Value = char> + Clone {
    proptest::char::range(' ', '~')
}

/// Strings of printable ASCII characters, at most `max_len` long.
pub fn printable_string(max_len: usize) -> impl Strategy<Value = String> + Clone {
    proptest::collection::vec(printable_char(), 0..=max_len).prop_map(|chars| chars.into_iter().collect())
}

macro_rules! tuple_generator {
    ($arity:literal => $($strategy:ident $name:ident),+) => {
        paste::paste! {
            #[doc = "Strategy for " $arity "-tuples, drawing each component from its own strategy."]
            pub fn [<tuple $arity>]<$($strategy: Strategy),+>($($name: $strategy),+) -> ($($strategy,)+) {
                ($($name,)+)
            }
        }
    };
}

tuple_generator!(2 => A first, B second);
tuple_generator!(3 => A first, B second, C third);
tuple_generator!(4 => A first, B second, C third, D fourth);
tuple_generator!(5 => A first, B second, C third, D fourth, E fifth);

/// Present or absent values.
pub fn option_of<S: Strategy>(strategy: S) -> impl Strategy<Value = Option<S::Value>> + Clone
where
    S: Clone,
    S::Value: Clone,
{
    proptest::option::of(strategy)
}

/// `Left` or `Right`, equally often.
pub fn either_of<L, R>(left: L, right: R) -> impl Strategy<Value = Either<L::Value, R::Value>> + Clone
where
    L: Strategy + Clone + 'static,
    R: Strategy + Clone + 'static,
{
    prop_oneof![left.prop_map(Either::Left), right.prop_map(Either::Right)]
}

/// `Left`, `Right` or `Both`, equally often.
pub fn ior_of<L, R>(left: L, right: R) -> impl Strategy<Value = Ior<L::Value, R::Value>> + Clone
where
    L: Strategy + Clone + 'static,
    R: Strategy + Clone + 'static,
{
    prop_oneof![
        left.clone().prop_map(Ior::Left),
        right.clone().prop_map(Ior::Right),
        (left, right).prop_map(|(left, right)| Ior::Both(left, right)),
    ]
}

/// Mostly successes, with one failure in four.
pub fn try_of<S>(strategy: S) -> impl Strategy<Value = Try<S::Value>> + Clone
where
    S: Strategy + Clone + 'static,
{
    prop_oneof![
        3 => strategy.prop_map(Try::success),
        1 => printable_string(12).prop_map(|message| Try::raise(message)),
    ]
}

/// `Const` values wrapping whatever `strategy` produces, tagged with `T`.
pub fn const_of<S, T>(strategy: S) -> impl Strategy<Value = Const<S::Value, T>> + Clone
where
    S: Strategy + Clone,
{
    strategy.prop_map(Const::new)
}

/// Non-empty vectors of at most `max_len` elements (and at least one,
/// whatever `max_len` is).
pub fn non_empty_vec<S>(strategy: S, max_len: usize) -> impl Strategy<Value = NonEmptyVec<S::Value>> + Clone
where
    S: Strategy + Clone,
{
    let tail = proptest::collection::vec(strategy.clone(), 0..=max_len.saturating_sub(1));
    (strategy, tail).prop_map(|(head, tail)| NonEmptyVec::new(head, tail))
}

/// Possibly empty vectors of at most `max_len` elements.
pub fn vec_of<S>(strategy: S, max_len: usize) -> impl Strategy<Value = Vec<S::Value>> + Clone
where
    S: Strategy + Clone,
{
    proptest::collection::vec(strategy, 0..=max_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::strategy::ValueTree;
    use proptest::test_runner::TestRunner;
    use rstest::rstest;

    fn samples<S: Strategy>(strategy: &S, count: usize) -> Vec<S::Value> {
        let mut runner = TestRunner::deterministic();
        (0..count)
            .map(|_| strategy.new_tree(&mut runner).unwrap().current())
            .collect()
    }

    #[rstest]
    fn int_small_stays_in_range() {
        for n in samples(&int_small(), 200) {
            assert!((i32::MIN / 10_000..=i32::MAX / 10_000).contains(&n));
        }
    }

    #[rstest]
    fn non_zero_int_never_yields_zero() {
        assert!(samples(&non_zero_int(), 200).into_iter().all(|n| n != 0));
    }

    #[rstest]
    fn printable_string_respects_length_and_alphabet() {
        for text in samples(&printable_string(5), 100) {
            assert!(text.len() <= 5);
            assert!(text.chars().all(|c| (' '..='~').contains(&c)));
        }
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(6)]
    fn non_empty_vec_is_never_empty(#[case] max_len: usize) {
        for elements in samples(&non_empty_vec(int_small(), max_len), 100) {
            assert!(elements.len() >= 1);
            assert!(elements.len() <= max_len.max(1));
        }
    }

    #[rstest]
    fn ior_of_produces_every_shape() {
        let drawn = samples(&ior_of(int_small(), printable_char()), 300);
        assert!(drawn.iter().any(Ior::is_left));
        assert!(drawn.iter().any(Ior::is_right));
        assert!(drawn.iter().any(Ior::is_both));
    }

    #[rstest]
    fn try_of_produces_both_variants() {
        let drawn = samples(&try_of(int_small()), 300);
        assert!(drawn.iter().any(Try::is_success));
        assert!(drawn.iter().any(Try::is_failure));
    }

    #[rstest]
    fn tuples_draw_each_component() {
        let (letter, number, flag) = samples(&tuple3(printable_char(), non_zero_int(), any::<bool>()), 1)
            .pop()
            .unwrap();
        assert!(letter.is_ascii());
        assert_ne!(number, 0);
        let _: bool = flag;
    }
}
