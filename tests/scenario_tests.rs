//! Concrete scenarios for reductions, `Const` and `Try`.

use lawful::control::Eval;
use lawful::data::{Const, NonEmptyVec, Try, TryError};
use lawful::typeclass::{Foldable, Product, Reducible, Sum, Traversable};
use rstest::rstest;

#[rstest]
fn reducing_one_two_three_with_addition() {
    let numbers = NonEmptyVec::new(Sum(1), vec![Sum(2), Sum(3)]);
    assert_eq!(numbers.clone().reduce(), Sum(6));
    assert_eq!(numbers.clone().reduce_left(|a, b| Sum(a.0 + b.0)), Sum(6));
    assert_eq!(numbers.clone().reduce_map(|n| n), Sum(6));
    assert_eq!(numbers.size(), 3);
}

#[rstest]
fn reducing_plain_integers_one_two_three() {
    let numbers = NonEmptyVec::new(1, vec![2, 3]);
    assert_eq!(numbers.clone().reduce_left(|a, b| a + b), 6);
    assert_eq!(numbers.clone().reduce_map(|n| Sum(n)), Sum(6));
    assert_eq!(numbers.clone().reduce_left_to(|n| n, |total, n| total + n), 6);
    assert_eq!(numbers.clone().reduce_right(|a, rest| rest.map(move |b| a + b)).value(), 6);
    assert_eq!(numbers.size(), 3);
}

#[rstest]
fn multiplying_a_single_plain_five() {
    let single = NonEmptyVec::singleton(5);
    let multiply = |a: i32, rest: Eval<i32>| rest.map(move |b| a * b);
    assert_eq!(Some(single.clone().reduce_right(multiply).value()), Some(5));
    assert_eq!(single.reduce_right_option(multiply).value(), Some(5));
}

#[rstest]
fn reducing_a_single_five_with_multiplication() {
    let single = NonEmptyVec::singleton(Product(5));
    let multiply = |a: Product<i32>, rest: Eval<Product<i32>>| rest.map(move |b| Product(a.0 * b.0));
    assert_eq!(Some(single.clone().reduce_right(multiply).value()), Some(Product(5)));
    assert_eq!(single.reduce_right_option(multiply).value(), Some(Product(5)));
}

#[rstest]
#[case(NonEmptyVec::new(2, vec![3, 4]), 24)]
#[case(NonEmptyVec::singleton(7), 7)]
#[case(NonEmptyVec::new(-1, vec![-1, -1]), -1)]
fn reduce_map_into_product(#[case] numbers: NonEmptyVec<i32>, #[case] expected: i32) {
    assert_eq!(numbers.reduce_map(Product::new).into_inner(), expected);
}

#[rstest]
fn lazy_fold_skips_the_tail_once_the_answer_is_known() {
    let numbers: NonEmptyVec<i32> = NonEmptyVec::new(0, (1..10_000).collect());
    // Forcing the tail would overflow; a zero head decides the product alone.
    let product = numbers
        .fold_right_lazy(Eval::now(1), |a, rest| {
            if a == 0 { Eval::now(0) } else { rest.map(move |b| a * b) }
        })
        .value();
    assert_eq!(product, 0);
}

#[rstest]
fn right_reduction_on_a_long_vector_does_not_overflow_the_stack() {
    let numbers = NonEmptyVec::new(1_u64, (2..=200_000).collect());
    let total = numbers.reduce_right_to(|n| n, |a, rest| rest.map(move |b| a + b)).value();
    assert_eq!(total, 200_000 * 200_001 / 2);
}

#[rstest]
fn const_round_trip_and_equality() {
    let kept: Const<&str, u8> = Const::new("kept");
    assert_eq!(kept.into_value(), "kept");
    assert_eq!(Const::<i32, String>::new(3), Const::new(3));
    assert_ne!(Const::<i32, String>::new(3), Const::new(4));
    assert_eq!(Const::<i32, char>::new(3).traverse_option(|_| None::<u8>), Some(Const::new(3)));
}

#[rstest]
#[case(Try::raise("lost"), Try::success(42))]
#[case(Try::success(7), Try::success(7))]
#[case(Try::failure(TryError::Panicked(String::from("boom"))), Try::success(42))]
fn recover_with_fallback(#[case] attempt: Try<i32>, #[case] expected: Try<i32>) {
    assert_eq!(attempt.recover_with(|_| Try::success(42)), expected);
}

#[rstest]
fn try_chains_parse_and_validate() {
    let parsed = Try::invoke(|| "21".parse::<i32>())
        .map(|n| n * 2)
        .filter(|n| *n > 0)
        .fold(|error| error.to_string(), |n| n.to_string());
    assert_eq!(parsed, "42");

    let rejected = Try::invoke(|| "-5".parse::<i32>()).filter(|n| *n > 0);
    assert_eq!(
        rejected.get(),
        Err(TryError::PredicateFailed(String::from("-5")))
    );
}

#[rstest]
fn try_catches_panics_as_data() {
    let attempt: Try<i32> = Try::catching(|| panic!("division by zero"));
    assert_eq!(attempt, Try::failure(TryError::Panicked(String::from("division by zero"))));
    assert_eq!(attempt.get_or_else(|| -1), -1);
}
