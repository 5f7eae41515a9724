#![cfg(feature = "laws")]
//! Law checks for `Const`.
//!
//! `Const<A, T>` ignores its element type, so every functor-like law holds
//! trivially on the element side and reduces to a law about `A`: the
//! applicative laws become the monoid laws of `A`, and traversals always
//! succeed.

use lawful::data::Const;
use lawful::laws::{self, Equality, LawConfig, generators};
use lawful::typeclass::{Functor, Sum};
use proptest::prelude::*;
use rstest::rstest;
use tracing_subscriber::EnvFilter;

type Tagged = Const<String, i32>;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn config() -> LawConfig {
    LawConfig::default().with_cases(64)
}

fn tagged() -> impl Strategy<Value = Tagged> + Clone {
    generators::const_of(generators::printable_string(6))
}

#[rstest]
fn const_obeys_eq_and_show_laws() {
    init_tracing();
    let mut all = laws::eq_laws(tagged());
    all.extend(laws::show_laws(tagged()));
    all.extend(laws::eq_laws(generators::const_of::<_, String>(generators::int_small())));
    laws::verify_with(&all, &config()).unwrap();
}

#[rstest]
fn const_obeys_monoid_laws() {
    init_tracing();
    laws::verify_with(&laws::monoid_laws(tagged(), Equality::natural()), &config()).unwrap();
}

#[rstest]
fn const_obeys_applicative_laws() {
    init_tracing();
    laws::verify_with(&laws::applicative_laws(tagged(), Equality::natural()), &config()).unwrap();
}

#[rstest]
fn const_over_sums_obeys_applicative_laws() {
    init_tracing();
    let strategy = generators::const_of::<_, i32>(generators::int_small().prop_map(Sum));
    laws::verify_with(&laws::applicative_laws(strategy, Equality::natural()), &config()).unwrap();
}

#[rstest]
fn const_obeys_traverse_filter_laws() {
    init_tracing();
    laws::verify_with(&laws::traverse_filter_laws(tagged(), Equality::natural()), &config()).unwrap();
}

#[rstest]
fn const_obeys_foldable_laws() {
    init_tracing();
    laws::verify_with(&laws::foldable_laws(tagged(), Equality::natural()), &config()).unwrap();
}

#[rstest]
fn equality_by_length_is_coarser_than_natural() {
    let by_length = Equality::by(|constant: &Tagged| constant.value().len());
    assert!(by_length.holds(&Const::new(String::from("ab")), &Const::new(String::from("cd"))));
    assert!(!Equality::<Tagged>::natural().holds(&Const::new(String::from("ab")), &Const::new(String::from("cd"))));
}

proptest! {
    #[test]
    fn prop_round_trip_ignores_the_phantom(value in generators::int_small()) {
        prop_assert_eq!(Const::<i32, String>::new(value).into_value(), value);
        prop_assert_eq!(Const::<i32, Vec<u8>>::new(value).into_value(), value);
        prop_assert_eq!(Const::<i32, ()>::new(value).retag::<char>().into_value(), value);
    }

    #[test]
    fn prop_equality_depends_only_on_the_value(left in generators::int_small(), right in generators::int_small()) {
        let first: Const<i32, String> = Const::new(left);
        let second: Const<i32, String> = Const::new(right);
        prop_assert_eq!(first == second, left == right);
    }

    #[test]
    fn prop_fmap_keeps_the_value(value in generators::printable_string(8)) {
        let mapped: Const<String, bool> = Const::<String, i32>::new(value.clone()).fmap(|n| n > 0);
        prop_assert_eq!(mapped.into_value(), value);
    }

    #[test]
    fn prop_display_shows_only_the_value(value in generators::int_small()) {
        prop_assert_eq!(Const::<i32, String>::new(value).to_string(), format!("Const({value})"));
    }
}
