#![cfg(feature = "laws")]
//! Property tests for the value generators.

use lawful::control::Either;
use lawful::data::{Const, Ior};
use lawful::laws::generators::*;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_int_small_sums_cannot_overflow(values in vec_of(int_small(), 10_000)) {
        let total = values.iter().try_fold(0_i32, |total, n| total.checked_add(*n));
        prop_assert!(total.is_some());
    }

    #[test]
    fn prop_non_zero_int_is_never_zero(n in non_zero_int()) {
        prop_assert_ne!(n, 0);
    }

    #[test]
    fn prop_printable_string_is_printable_ascii(text in printable_string(16)) {
        prop_assert!(text.len() <= 16);
        prop_assert!(text.bytes().all(|byte| (0x20..=0x7e).contains(&byte)));
    }

    #[test]
    fn prop_tuples_keep_component_order((number, letter, text, flag, small) in tuple5(
        non_zero_int(),
        printable_char(),
        printable_string(3),
        any::<bool>(),
        0_u8..4,
    )) {
        prop_assert_ne!(number, 0);
        prop_assert!(letter.is_ascii_graphic() || letter == ' ');
        prop_assert!(text.len() <= 3);
        prop_assert!(small < 4);
        let _ = flag;
    }

    #[test]
    fn prop_pairs_and_quadruples((left, right) in tuple2(int_small(), int_small()), quad in tuple4(0_u8..2, 0_u8..2, 0_u8..2, 0_u8..2)) {
        prop_assert!(left.checked_add(right).is_some());
        prop_assert!(quad.0 < 2 && quad.3 < 2);
    }

    #[test]
    fn prop_either_sides_come_from_their_strategies(value in either_of(non_zero_int(), printable_char())) {
        match value {
            Either::Left(n) => prop_assert_ne!(n, 0),
            Either::Right(c) => prop_assert!((' '..='~').contains(&c)),
        }
    }

    #[test]
    fn prop_ior_both_carries_both_sides(value in ior_of(non_zero_int(), non_zero_int())) {
        let (left, right) = value.pad();
        prop_assert!(left.is_some() || right.is_some());
        prop_assert_eq!(value.is_both(), left.is_some() && right.is_some());
        if let Ior::Both(l, r) = value {
            prop_assert!(l != 0 && r != 0);
        }
    }

    #[test]
    fn prop_non_empty_vec_respects_bounds(elements in non_empty_vec(int_small(), 5)) {
        prop_assert!((1..=5).contains(&elements.len()));
    }

    #[test]
    fn prop_const_of_wraps_generated_values(constant in const_of::<_, String>(non_zero_int())) {
        let copy: Const<i32, String> = constant.clone();
        prop_assert_ne!(copy.into_value(), 0);
    }

    #[test]
    fn prop_option_of_and_try_of_keep_their_values(
        optional in option_of(non_zero_int()),
        attempt in try_of(non_zero_int()),
    ) {
        prop_assert!(optional.is_none_or(|n| n != 0));
        prop_assert!(attempt.ok().is_none_or(|n| n != 0));
    }
}
