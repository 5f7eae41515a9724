//! Laws for equality, display, semigroups and monoids.

use std::fmt::{Debug, Display};

use proptest::strategy::Strategy;

use super::{Equality, Law};
use crate::typeclass::{Monoid, Semigroup};

/// Reflexivity, symmetry and transitivity of `PartialEq`.
pub fn eq_laws<T, S>(strategy: S) -> Vec<Law>
where
    T: PartialEq + Clone + Debug + 'static,
    S: Strategy<Value = T> + Clone + 'static,
{
    vec![
        Law::property("eq_reflexivity", strategy.clone(), |value: T| value == value.clone()),
        Law::property(
            "eq_symmetry",
            (strategy.clone(), strategy.clone()),
            |(left, right): (T, T)| (left == right) == (right == left),
        ),
        Law::property(
            "eq_transitivity",
            (strategy.clone(), strategy.clone(), strategy),
            |(first, second, third): (T, T, T)| {
                let copy = first.clone();
                let chained = !(first == second && second == third) || first == third;
                let through_copy = first == copy && copy == first;
                chained && through_copy
            },
        ),
    ]
}

/// Equal values render equal strings, and rendering is repeatable.
pub fn show_laws<T, S>(strategy: S) -> Vec<Law>
where
    T: Display + PartialEq + Clone + Debug + 'static,
    S: Strategy<Value = T> + Clone + 'static,
{
    vec![
        Law::property("show_is_repeatable", strategy.clone(), |value: T| {
            value.to_string() == value.to_string()
        }),
        Law::property(
            "show_equal_values_render_equally",
            (strategy.clone(), strategy),
            |(left, right): (T, T)| {
                let copy = left.clone();
                let copies_agree = left.to_string() == copy.to_string();
                let equal_agree = left != right || left.to_string() == right.to_string();
                copies_agree && equal_agree
            },
        ),
    ]
}

/// Associativity of `combine`, and consistency of the derived operations.
pub fn semigroup_laws<T, S>(strategy: S, equality: Equality<T>) -> Vec<Law>
where
    T: Semigroup + Clone + Debug + 'static,
    S: Strategy<Value = T> + Clone + 'static,
{
    let associativity = equality.clone();
    let by_reference = equality.clone();
    vec![
        Law::equation(
            "semigroup_associativity",
            (strategy.clone(), strategy.clone(), strategy.clone()),
            associativity,
            |(first, second, third): (T, T, T)| {
                let left = first.clone().combine(second.clone()).combine(third.clone());
                let right = first.combine(second.combine(third));
                (left, right)
            },
        ),
        Law::equation(
            "semigroup_combine_ref_consistent",
            (strategy.clone(), strategy.clone()),
            by_reference,
            |(left, right): (T, T)| {
                (left.combine_ref(&right), left.combine(right))
            },
        ),
        Law::equation(
            "semigroup_combine_n_consistent",
            (strategy, 1_usize..4),
            equality,
            |(value, count): (T, usize)| {
                let repeated = (1..count).fold(value.clone(), |total, _| total.combine(value.clone()));
                (value.combine_n(count), repeated)
            },
        ),
    ]
}

/// Semigroup laws plus left and right identity.
pub fn monoid_laws<T, S>(strategy: S, equality: Equality<T>) -> Vec<Law>
where
    T: Monoid + Clone + Debug + 'static,
    S: Strategy<Value = T> + Clone + 'static,
{
    let mut laws = semigroup_laws(strategy.clone(), equality.clone());
    let left_identity = equality.clone();
    let right_identity = equality.clone();
    laws.extend([
        Law::equation("monoid_left_identity", strategy.clone(), left_identity, |value: T| {
            (T::empty().combine(value.clone()), value)
        }),
        Law::equation("monoid_right_identity", strategy.clone(), right_identity, |value: T| {
            (value.clone().combine(T::empty()), value)
        }),
        Law::equation(
            "monoid_combine_all_consistent",
            proptest::collection::vec(strategy, 0..6),
            equality,
            |values: Vec<T>| {
                let folded = values.iter().cloned().fold(T::empty(), Semigroup::combine);
                (T::combine_all(values), folded)
            },
        ),
    ]);
    laws
}
