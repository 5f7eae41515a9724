#![cfg(feature = "laws")]
//! Law checks for `Foldable` and `Reducible` instances.
//!
//! ## Reducible Laws
//!
//! 1. `reduce_left_to(f, combine)` agrees with `reduce_map(f)`
//! 2. `reduce_right_to(f, combine)` agrees with `reduce_map(f)`
//! 3. `reduce_right_to` agrees with `reduce_right_to_option`
//! 4. `reduce_right` agrees with `reduce_right_option`, which is never `None`
//! 5. `reduce` agrees with `reduce_left(combine)`
//! 6. `size` agrees with `reduce_map(|_| 1)`

use lawful::data::NonEmptyVec;
use lawful::laws::{self, Equality, LawConfig, generators};
use lawful::typeclass::{NonEmptyReducible, Sum, TypeConstructor};
use proptest::prelude::*;
use rstest::rstest;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn config() -> LawConfig {
    LawConfig::default().with_cases(64)
}

/// Exactly one or two elements: a head and an optional second element.
#[derive(Debug, Clone, PartialEq)]
struct OneOrTwo<A>(A, Option<A>);

impl<A> TypeConstructor for OneOrTwo<A> {
    type Inner = A;
    type WithType<B> = OneOrTwo<B>;
}

impl<A> NonEmptyReducible for OneOrTwo<A> {
    type Tail = Option<A>;

    fn split(self) -> (A, Option<A>) {
        (self.0, self.1)
    }
}

fn one_or_two() -> impl Strategy<Value = OneOrTwo<String>> + Clone {
    (generators::printable_string(3), generators::option_of(generators::printable_string(3)))
        .prop_map(|(first, second)| OneOrTwo(first, second))
}

#[rstest]
fn non_empty_vec_of_sums_obeys_reducible_laws() {
    init_tracing();
    let strategy = generators::non_empty_vec(generators::int_small().prop_map(Sum), 20);
    laws::verify_with(&laws::reducible_laws(strategy, Equality::natural()), &config()).unwrap();
}

#[rstest]
fn non_empty_vec_of_strings_obeys_reducible_laws() {
    init_tracing();
    let strategy = generators::non_empty_vec(generators::printable_string(4), 12);
    laws::verify_with(&laws::reducible_laws(strategy, Equality::natural()), &config()).unwrap();
}

#[rstest]
fn split_derivation_obeys_reducible_laws() {
    init_tracing();
    laws::verify_with(&laws::reducible_laws(one_or_two(), Equality::natural()), &config()).unwrap();
}

#[rstest]
fn reducible_laws_extend_foldable_laws() {
    let strategy = generators::non_empty_vec(generators::int_small().prop_map(Sum), 4);
    let foldable: Vec<_> = laws::foldable_laws(strategy.clone(), Equality::natural()).iter().map(|law| law.name()).collect();
    let reducible: Vec<_> = laws::reducible_laws(strategy, Equality::natural()).iter().map(|law| law.name()).collect();
    assert_eq!(reducible.len(), foldable.len() + 6);
    assert_eq!(&reducible[..foldable.len()], foldable.as_slice());
    assert!(reducible.contains(&"reduce_size_consistent"));
}

#[rstest]
#[case::vec(laws::foldable_laws(generators::vec_of(generators::int_small(), 16), Equality::natural()))]
#[case::option(laws::foldable_laws(generators::option_of(generators::int_small()), Equality::natural()))]
#[case::strings(laws::foldable_laws(generators::vec_of(generators::printable_string(3), 8), Equality::natural()))]
fn standard_containers_obey_foldable_laws(#[case] laws: Vec<laws::Law>) {
    init_tracing();
    let violations = laws::verify_all(&laws, &config());
    assert!(violations.is_empty(), "{violations:?}");
}

#[rstest]
fn result_obeys_foldable_laws() {
    init_tracing();
    let strategy = prop_oneof![
        generators::int_small().prop_map(Ok),
        generators::printable_string(4).prop_map(Err),
    ];
    laws::verify_with(&laws::foldable_laws::<Result<i32, String>, _>(strategy, Equality::natural()), &config()).unwrap();
}

#[rstest]
fn every_law_is_checked_individually() {
    init_tracing();
    let strategy = generators::non_empty_vec(generators::int_small().prop_map(Sum), 10);
    for law in laws::reducible_laws(strategy, Equality::natural()) {
        assert!(law.check_with(&config()).is_ok(), "{} failed", law.name());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_reduce_agrees_with_sum_of_elements(elements in generators::non_empty_vec(generators::int_small(), 20)) {
        use lawful::typeclass::Reducible;
        let expected: i32 = elements.iter().sum();
        let reduced = elements.clone().reduce_map(Sum::new).into_inner();
        prop_assert_eq!(reduced, expected);
        prop_assert_eq!(elements.reduce_left(|a, b| a + b), expected);
    }

    #[test]
    fn prop_reduce_right_option_is_never_absent(elements in generators::non_empty_vec(generators::int_small(), 20)) {
        use lawful::control::Eval;
        use lawful::typeclass::Foldable;
        let reduced = elements.reduce_right_option(|a, rest: Eval<i32>| rest.map(move |b| a - b)).value();
        prop_assert!(reduced.is_some());
    }

    #[test]
    fn prop_split_round_trips_through_into_vec(elements in generators::non_empty_vec(generators::int_small(), 20)) {
        let (head, tail) = elements.clone().split();
        let mut rebuilt = vec![head];
        rebuilt.extend(tail);
        prop_assert_eq!(rebuilt, elements.into_vec());
    }
}

#[rstest]
fn single_element_vector_is_reducible() {
    init_tracing();
    let strategy = generators::int_small().prop_map(|n| NonEmptyVec::singleton(Sum(n)));
    laws::verify_with(&laws::reducible_laws(strategy, Equality::natural()), &config()).unwrap();
}

/// Sums of whole numbers and NaN: `PartialEq` never equates NaN with itself,
/// so the laws only hold under a comparison that does.
fn sums_with_nan() -> impl Strategy<Value = NonEmptyVec<Sum<f64>>> + Clone {
    let element = prop_oneof![(-1_000_i32..1_000).prop_map(f64::from), Just(f64::NAN)];
    generators::non_empty_vec(element.prop_map(Sum), 6)
}

fn nan_aware() -> Equality<Sum<f64>> {
    Equality::new(|left: &Sum<f64>, right: &Sum<f64>| {
        (left.0.is_nan() && right.0.is_nan()) || left.0 == right.0
    })
}

#[rstest]
fn reducible_laws_compare_with_the_supplied_equality() {
    init_tracing();
    let violations = laws::verify_all(&laws::reducible_laws(sums_with_nan(), nan_aware()), &config());
    assert!(violations.is_empty(), "{violations:?}");
}

#[rstest]
fn structural_equality_rejects_nan_elements() {
    let all_nan = generators::non_empty_vec(Just(Sum(f64::NAN)), 3);
    let violations = laws::verify_all(&laws::reducible_laws(all_nan, Equality::natural()), &config());
    let names: Vec<_> = violations.iter().map(laws::LawViolation::law).collect();
    assert!(names.contains(&"reduce_reduce_left_consistent"), "{names:?}");
    assert!(names.contains(&"foldable_left_fold_consistent_with_fold_map"), "{names:?}");
}
