//! Property-based tests for the `Option` laws the crate relies on.
//!
//! - **Functor**: identity and composition of `map`
//! - **Monad**: left identity, right identity and associativity of `and_then`
//! - **Transpose**: involution between `Option<Result<_, _>>` and `Result<Option<_>, _>`
//! - **Folds**: `collect_options` and `fold_options` agree with a plain loop

use optres::prelude::*;
use proptest::prelude::*;

fn halve(n: i32) -> Option<i32> {
    (n % 2 == 0).then_some(n / 2)
}

fn decrement(n: i32) -> Option<i32> {
    n.checked_sub(1)
}

// =============================================================================
// Functor and Monad Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_option_map_identity(value in any::<Option<i32>>()) {
        prop_assert_eq!(value.map(|x| x), value);
    }

    #[test]
    fn prop_option_map_composition(value in any::<Option<i32>>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(3);

        let left = value.map(function1).map(function2);
        let right = value.map(|x| function2(function1(x)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_option_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Some(value).and_then(halve), halve(value));
    }

    #[test]
    fn prop_option_right_identity(value in any::<Option<i32>>()) {
        prop_assert_eq!(value.and_then(Some), value);
    }

    #[test]
    fn prop_option_associativity(value in any::<Option<i32>>()) {
        let left = value.and_then(halve).and_then(decrement);
        let right = value.and_then(|x| halve(x).and_then(decrement));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_option_tap_is_identity(value in any::<Option<i32>>()) {
        prop_assert_eq!(value.tap(|_| ()), value);
    }

    #[test]
    fn prop_option_zip_map_matches_zip(
        left in any::<Option<i16>>(),
        right in any::<Option<i16>>(),
    ) {
        let zipped = left.zip(right).map(|(a, b)| i32::from(a) + i32::from(b));
        prop_assert_eq!(left.zip_map(right, |a, b| i32::from(a) + i32::from(b)), zipped);
    }
}

// =============================================================================
// Transpose
// =============================================================================

proptest! {
    #[test]
    fn prop_option_transpose_involution(
        value in proptest::option::of(prop::result::maybe_ok(any::<i32>(), any::<u8>()))
    ) {
        prop_assert_eq!(value.transpose().transpose(), value);
    }
}

// =============================================================================
// Folds
// =============================================================================

proptest! {
    #[test]
    fn prop_collect_options_matches_loop(
        items in prop::collection::vec(any::<Option<i32>>(), 0..16)
    ) {
        let expected = items
            .iter()
            .all(Option::is_some)
            .then(|| items.iter().flatten().copied().collect::<Vec<_>>());
        prop_assert_eq!(items.into_iter().collect_options(), expected);
    }

    #[test]
    fn prop_sum_options_matches_wrapping_sum(
        items in prop::collection::vec(any::<i32>(), 0..16)
    ) {
        let wrapped = items.iter().map(|&n| Some(std::num::Wrapping(n)));
        let expected = items
            .iter()
            .fold(std::num::Wrapping(0_i32), |total, &n| total + std::num::Wrapping(n));
        prop_assert_eq!(wrapped.sum_options(), Some(expected));
    }

    #[test]
    fn prop_fold_options_with_none_is_none(
        prefix in prop::collection::vec(any::<i16>(), 0..8),
        suffix in prop::collection::vec(any::<i16>(), 0..8),
    ) {
        let items = prefix
            .into_iter()
            .map(Some)
            .chain(std::iter::once(None))
            .chain(suffix.into_iter().map(Some));
        prop_assert_eq!(items.fold_options(0_i64, |acc, n| acc + i64::from(n)), None);
    }
}
