//! Laws for `Functor`, `Applicative` and `Monad`.
//!
//! The laws are stated for containers of `i32`. The bound
//! `TypeConstructor<Inner = i32, WithType<i32> = F>` lets the checker compare
//! a mapped container with the original one.

use std::fmt::Debug;

use proptest::strategy::Strategy;

use super::generators::int_small;
use super::{Equality, Law};
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

fn triple(n: i32) -> i32 {
    n.wrapping_mul(3)
}

fn shift(n: i32) -> i32 {
    n.wrapping_add(7)
}

fn subtract(left: i32, right: i32) -> i32 {
    left.wrapping_sub(right)
}

/// Identity, composition, and agreement of `fmap_ref` with `fmap`.
pub fn functor_laws<F, S>(strategy: S, equality: Equality<F>) -> Vec<Law>
where
    F: Functor + TypeConstructor<Inner = i32, WithType<i32> = F> + Clone + Debug + 'static,
    S: Strategy<Value = F> + Clone + 'static,
{
    let identity = equality.clone();
    let composition = equality.clone();
    vec![
        Law::equation("functor_identity", strategy.clone(), identity, |fa: F| {
            (fa.clone().fmap(|n| n), fa)
        }),
        Law::equation("functor_composition", strategy.clone(), composition, |fa: F| {
            let stepwise: F = fa.clone().fmap(triple).fmap(shift);
            let composed: F = fa.fmap(|n| shift(triple(n)));
            (stepwise, composed)
        }),
        Law::equation("functor_fmap_ref_consistent", strategy, equality, |fa: F| {
            let borrowed: F = fa.fmap_ref(|n| triple(*n));
            (borrowed, fa.fmap(triple))
        }),
    ]
}

/// Functor laws plus the laws relating `pure`, `map2` and `fmap`.
pub fn applicative_laws<F, S>(strategy: S, equality: Equality<F>) -> Vec<Law>
where
    F: Applicative + TypeConstructor<Inner = i32, WithType<i32> = F> + Clone + Debug + 'static,
    S: Strategy<Value = F> + Clone + 'static,
{
    let mut laws = functor_laws(strategy.clone(), equality.clone());
    let homomorphism = equality.clone();
    let left_identity = equality.clone();
    let right_identity = equality.clone();
    let with_fmap = equality.clone();
    let associativity = equality.clone();
    let product_left = equality.clone();
    laws.extend([
        Law::equation("applicative_homomorphism", int_small(), homomorphism, |value: i32| {
            let mapped: F = F::pure(value).fmap(triple);
            (mapped, F::pure(triple(value)))
        }),
        Law::equation(
            "applicative_left_identity",
            (strategy.clone(), int_small()),
            left_identity,
            |(fa, value): (F, i32)| {
                let combined: F = F::pure(value).map2::<i32, i32, _>(fa.clone(), |_, n| n);
                (combined, fa)
            },
        ),
        Law::equation(
            "applicative_right_identity",
            (strategy.clone(), int_small()),
            right_identity,
            |(fa, value): (F, i32)| {
                let combined: F = fa.clone().map2::<i32, i32, _>(F::pure(value), |n, _| n);
                (combined, fa)
            },
        ),
        Law::equation(
            "applicative_map2_consistent_with_fmap",
            (strategy.clone(), int_small()),
            with_fmap,
            |(fa, value): (F, i32)| {
                let combined: F = fa.clone().map2::<i32, i32, _>(F::pure(value), subtract);
                (combined, fa.fmap(move |n| subtract(n, value)))
            },
        ),
        Law::equation(
            "applicative_map2_associativity",
            (strategy.clone(), strategy.clone(), strategy.clone()),
            associativity,
            |(first, second, third): (F, F, F)| {
                let inner: F = first
                    .clone()
                    .map2::<i32, i32, _>(second.clone(), i32::wrapping_add);
                let left: F = inner.map2::<i32, i32, _>(third.clone(), i32::wrapping_add);
                let nested: F = second.map2::<i32, i32, _>(third, i32::wrapping_add);
                let right: F = first.map2::<i32, i32, _>(nested, i32::wrapping_add);
                (left, right)
            },
        ),
        Law::equation(
            "applicative_product_left_consistent_with_map2",
            (strategy.clone(), strategy.clone()),
            product_left,
            |(fa, fb): (F, F)| {
                let kept: F = fa.clone().product_left::<i32>(fb.clone());
                (kept, fa.map2::<i32, i32, _>(fb, |n, _| n))
            },
        ),
        Law::equation(
            "applicative_product_right_consistent_with_map2",
            (strategy.clone(), strategy),
            equality,
            |(fa, fb): (F, F)| {
                let kept: F = fa.clone().product_right::<i32>(fb.clone());
                (kept, fa.map2::<i32, i32, _>(fb, |_, n| n))
            },
        ),
    ]);
    laws
}

/// Applicative laws plus left identity, right identity and associativity
/// of `flat_map`.
pub fn monad_laws<F, S>(strategy: S, equality: Equality<F>) -> Vec<Law>
where
    F: Monad + TypeConstructor<Inner = i32, WithType<i32> = F> + Clone + Debug + 'static,
    S: Strategy<Value = F> + Clone + 'static,
{
    let mut laws = applicative_laws(strategy.clone(), equality.clone());
    let left_identity = equality.clone();
    let right_identity = equality.clone();
    let associativity = equality.clone();
    laws.extend([
        Law::equation(
            "monad_left_identity",
            (int_small(), strategy.clone()),
            left_identity,
            |(value, fb): (i32, F)| {
                let follow = |n: i32| -> F { fb.clone().fmap(move |m| subtract(n, m)) };
                let bound: F = F::pure(value).flat_map::<i32, _>(follow);
                (bound, follow(value))
            },
        ),
        Law::equation("monad_right_identity", strategy.clone(), right_identity, |fa: F| {
            let bound: F = fa.clone().flat_map::<i32, _>(|n| F::pure(n));
            (bound, fa)
        }),
        Law::equation(
            "monad_associativity",
            (strategy.clone(), strategy.clone(), strategy.clone()),
            associativity,
            |(fa, fb, fc): (F, F, F)| {
                let first = move |n: i32| -> F { fb.clone().fmap(move |m| subtract(n, m)) };
                let second = move |n: i32| -> F { fc.clone().fmap(move |m| triple(n).wrapping_add(m)) };
                let stepwise: F = fa.clone().flat_map::<i32, _>(first.clone());
                let left: F = stepwise.flat_map::<i32, _>(second.clone());
                let right: F = fa.flat_map::<i32, _>(move |n| first(n).flat_map::<i32, _>(second));
                (left, right)
            },
        ),
        Law::equation(
            "monad_flat_map_consistent_with_map2",
            (strategy.clone(), strategy),
            equality,
            |(fa, fb): (F, F)| {
                let inner = fb.clone();
                let bound: F = fa.clone().flat_map::<i32, _>(move |n| inner.fmap(move |m| subtract(n, m)));
                (bound, fa.map2::<i32, i32, _>(fb, subtract))
            },
        ),
    ]);
    laws
}
