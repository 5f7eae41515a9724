//! Laws for `Foldable` and `Reducible`.
//!
//! Both lists are generic in the element type and compare elements with the
//! supplied [`Equality`]. Order-sensitive checks fold into `Vec`, whose
//! concatenation is not commutative, so a fold that visits elements in the
//! wrong order is caught.

use std::cell::Cell;
use std::fmt::Debug;
use std::rc::Rc;

use proptest::strategy::Strategy;

use super::{Equality, Law};
use crate::control::Eval;
use crate::typeclass::{Foldable, Monoid, Reducible, Semigroup, Sum};

fn singleton<A>(element: A) -> Vec<A> {
    vec![element]
}

fn prepend<A: 'static>(element: A, rest: Eval<Vec<A>>) -> Eval<Vec<A>> {
    rest.map(move |tail| singleton(element).combine(tail))
}

fn combine_lazily<A: Semigroup + 'static>(element: A, rest: Eval<A>) -> Eval<A> {
    rest.map(move |tail| element.combine(tail))
}

/// The element in the middle of `elements`, used as a search target that is
/// present whenever the structure is non-empty.
fn pivot<A: Clone>(elements: &[A]) -> Option<A> {
    elements.get(elements.len() / 2).cloned()
}

/// Consistency of the folds with each other and with the derived queries.
///
/// `equality` compares elements; folded lists are compared position by
/// position with it.
pub fn foldable_laws<F, S>(strategy: S, equality: Equality<F::Inner>) -> Vec<Law>
where
    F: Foldable + Clone + Debug + 'static,
    F::Inner: Clone + Debug + 'static,
    S: Strategy<Value = F> + Clone + 'static,
{
    let lists = equality.lift_vec();
    let lookups = equality.lift_option().lift_vec();
    let search = equality.clone();
    let universal = equality;
    vec![
        Law::equation("foldable_left_fold_consistent_with_fold_map", strategy.clone(), lists.clone(), |fa: F| {
            let folded = fa.clone().fold_left(Vec::empty(), |list, element| list.combine(singleton(element)));
            (folded, fa.fold_map(singleton))
        }),
        Law::equation("foldable_right_fold_consistent_with_fold_map", strategy.clone(), lists.clone(), |fa: F| {
            let folded = fa.clone().fold_right(Vec::empty(), |element, list| singleton(element).combine(list));
            (folded, fa.fold_map(singleton))
        }),
        Law::equation("foldable_lazy_right_fold_consistent_with_fold_right", strategy.clone(), lists, |fa: F| {
            let lazy = fa.clone().fold_right_lazy(Eval::now(Vec::new()), prepend).value();
            (lazy, fa.fold_right(Vec::new(), |element, list| singleton(element).combine(list)))
        }),
        Law::equation("foldable_lazy_right_fold_stops_early", strategy.clone(), Equality::natural(), |fa: F| {
            let expected = fa.non_empty();
            let visited = Rc::new(Cell::new(0_usize));
            let counter = Rc::clone(&visited);
            let stopped = fa
                .fold_right_lazy(Eval::now(false), move |_, _| {
                    counter.set(counter.get() + 1);
                    Eval::now(true)
                })
                .value();
            ((stopped, visited.get()), (expected, usize::from(expected)))
        }),
        Law::equation("foldable_exists_consistent_with_find", strategy.clone(), Equality::natural(), move |fa: F| {
            let target = pivot(&fa.clone().to_list());
            let matches = |element: &F::Inner| target.as_ref().is_some_and(|target| search.holds(element, target));
            (fa.exists(matches), fa.clone().find(matches).is_some())
        }),
        Law::equation("foldable_for_all_consistent_with_exists", strategy.clone(), Equality::natural(), move |fa: F| {
            let target = pivot(&fa.clone().to_list());
            let differs = |element: &F::Inner| !target.as_ref().is_some_and(|target| universal.holds(element, target));
            (fa.for_all(differs), !fa.exists(|element| !differs(element)))
        }),
        Law::equation("foldable_get_consistent_with_to_list", strategy.clone(), lookups, |fa: F| {
            let list = fa.clone().to_list();
            let indices = 0..=list.len();
            let looked_up = indices.clone().map(|index| Foldable::get(fa.clone(), index)).collect();
            let listed = indices.map(|index| list.as_slice().get(index).cloned()).collect();
            (looked_up, listed)
        }),
        Law::equation("foldable_size_consistent_with_to_list", strategy.clone(), Equality::natural(), |fa: F| {
            (fa.size(), fa.clone().to_list().len())
        }),
        Law::equation("foldable_is_empty_consistent_with_size", strategy, Equality::natural(), |fa: F| {
            let size = fa.size();
            ((fa.is_empty(), fa.non_empty()), (size == 0, size != 0))
        }),
    ]
}

/// Foldable laws plus the six laws tying the reductions together.
///
/// `equality` compares elements, both of the reduced value and of the
/// lists the order-sensitive laws reduce into.
pub fn reducible_laws<F, S>(strategy: S, equality: Equality<F::Inner>) -> Vec<Law>
where
    F: Reducible + Clone + Debug + 'static,
    F::Inner: Semigroup + Clone + Debug + 'static,
    S: Strategy<Value = F> + Clone + 'static,
{
    let mut laws = foldable_laws(strategy.clone(), equality.clone());
    let lists = equality.lift_vec();
    let optional_lists = lists.lift_option();
    let optional = equality.lift_option();
    laws.extend([
        Law::equation("reduce_left_to_consistent_with_reduce_map", strategy.clone(), lists.clone(), |fa: F| {
            let reduced = fa.clone().reduce_left_to(singleton, |list, element| list.combine(singleton(element)));
            (reduced, fa.reduce_map(singleton))
        }),
        Law::equation("reduce_right_to_consistent_with_reduce_map", strategy.clone(), lists, |fa: F| {
            let reduced = fa.clone().reduce_right_to(singleton, prepend).value();
            (reduced, fa.reduce_map(singleton))
        }),
        Law::equation(
            "reduce_right_to_consistent_with_reduce_right_to_option",
            strategy.clone(),
            optional_lists,
            |fa: F| {
                let reduced = fa.clone().reduce_right_to(singleton, prepend).value();
                (Some(reduced), fa.reduce_right_to_option(singleton, prepend).value())
            },
        ),
        Law::equation("reduce_right_consistent_with_reduce_right_option", strategy.clone(), optional, |fa: F| {
            let reduced = fa.clone().reduce_right(combine_lazily).value();
            (Some(reduced), fa.reduce_right_option(combine_lazily).value())
        }),
        Law::equation("reduce_reduce_left_consistent", strategy.clone(), equality, |fa: F| {
            (fa.clone().reduce(), fa.reduce_left(Semigroup::combine))
        }),
        Law::equation("reduce_size_consistent", strategy, Equality::natural(), |fa: F| {
            (fa.size(), fa.reduce_map(|_| Sum(1_usize)).into_inner())
        }),
    ]);
    laws
}
