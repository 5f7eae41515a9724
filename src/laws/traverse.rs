//! Laws for `Traversable` and `TraverseFilter`, stated for containers of
//! `i32`.

use std::fmt::Debug;

use proptest::strategy::Strategy;

use super::{Equality, Law};
use crate::typeclass::{FunctorFilter, Traversable, TraverseFilter, TypeConstructor};

fn halve(n: i32) -> Option<i32> {
    (n % 2 == 0).then_some(n / 2)
}

fn decrement_positive(n: i32) -> Option<i32> {
    (n > 0).then(|| n - 1)
}

fn is_even(n: &i32) -> bool {
    n % 2 == 0
}

/// Identity effects, sequential composition, and agreement between the
/// `Option` and `Result` traversals.
pub fn traverse_laws<F, S>(strategy: S, equality: Equality<F>) -> Vec<Law>
where
    F: Traversable + TypeConstructor<Inner = i32, WithType<i32> = F> + Clone + Debug + 'static,
    S: Strategy<Value = F> + Clone + 'static,
{
    let optional = equality.lift_option();
    let fallible = equality.lift_result::<String>();
    let composition = optional.clone();
    let consistency = optional.clone();
    vec![
        Law::equation("traverse_option_identity", strategy.clone(), optional, |fa: F| {
            let traversed: Option<F> = fa.clone().traverse_option(Some);
            (traversed, Some(fa))
        }),
        Law::equation("traverse_result_identity", strategy.clone(), fallible, |fa: F| {
            let traversed: Result<F, String> = fa.clone().traverse_result(Ok);
            (traversed, Ok(fa))
        }),
        Law::equation("traverse_sequential_composition", strategy.clone(), composition, |fa: F| {
            let stepwise: Option<F> = fa
                .clone()
                .traverse_option(halve)
                .and_then(|fb: F| fb.traverse_option(decrement_positive));
            let composed: Option<F> = fa.traverse_option(|n| halve(n).and_then(decrement_positive));
            (stepwise, composed)
        }),
        Law::equation("traverse_option_consistent_with_traverse_result", strategy, consistency, |fa: F| {
            let optional: Option<F> = fa.clone().traverse_option(halve);
            let fallible: Result<F, i32> = fa.traverse_result(|n| halve(n).ok_or(n));
            (optional, fallible.ok())
        }),
    ]
}

/// Traverse laws plus identity and consistency of the filtering variants.
pub fn traverse_filter_laws<F, S>(strategy: S, equality: Equality<F>) -> Vec<Law>
where
    F: TraverseFilter + TypeConstructor<Inner = i32, WithType<i32> = F> + Clone + Debug + 'static,
    S: Strategy<Value = F> + Clone + 'static,
{
    let mut laws = traverse_laws(strategy.clone(), equality.clone());
    let optional = equality.lift_option();
    let identity = optional.clone();
    let with_traverse = optional.clone();
    let with_map_filter = optional.clone();
    let filter_option = optional;
    let fallible = equality.lift_result::<String>();
    let filter = equality;
    laws.extend([
        Law::equation("traverse_filter_identity", strategy.clone(), identity, |fa: F| {
            let traversed: Option<F> = fa.clone().traverse_filter_option(|n| Some(Some(n)));
            (traversed, Some(fa))
        }),
        Law::equation("traverse_filter_consistent_with_traverse", strategy.clone(), with_traverse, |fa: F| {
            let filtered: Option<F> = fa.clone().traverse_filter_option(|n| halve(n).map(Some));
            let traversed: Option<F> = fa.traverse_option(halve);
            (filtered, traversed)
        }),
        Law::equation("traverse_filter_consistent_with_map_filter", strategy.clone(), with_map_filter, |fa: F| {
            let traversed: Option<F> = fa.clone().traverse_filter_option(|n| Some(halve(n)));
            let mapped: F = fa.map_filter(halve);
            (traversed, Some(mapped))
        }),
        Law::equation("traverse_filter_result_consistent_with_map_filter", strategy.clone(), fallible, |fa: F| {
            let traversed: Result<F, String> = fa.clone().traverse_filter_result(|n| Ok(halve(n)));
            let mapped: F = fa.map_filter(halve);
            (traversed, Ok(mapped))
        }),
        Law::equation("filter_consistent_with_map_filter", strategy.clone(), filter, |fa: F| {
            let kept: F = FunctorFilter::filter(fa.clone(), is_even);
            let mapped: F = fa.map_filter(|n| is_even(&n).then_some(n));
            (kept, mapped)
        }),
        Law::equation("filter_option_consistent_with_filter", strategy, filter_option, |fa: F| {
            let traversed: Option<F> = fa.clone().filter_option(|n| Some(is_even(n)));
            let kept: F = FunctorFilter::filter(fa, is_even);
            (traversed, Some(kept))
        }),
    ]);
    laws
}
