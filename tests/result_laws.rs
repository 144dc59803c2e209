//! Property-based tests for the `Result` laws the crate relies on.

use optres::prelude::*;
use proptest::prelude::*;
use std::cmp::Ordering;

fn checked_double(n: i32) -> Result<i32, String> {
    n.checked_mul(2).ok_or_else(|| format!("{n} overflows"))
}

fn non_negative(n: i32) -> Result<i32, String> {
    if n >= 0 { Ok(n) } else { Err(format!("{n} is negative")) }
}

fn any_result() -> impl Strategy<Value = Result<i32, String>> {
    prop::result::maybe_ok(any::<i32>(), "[a-z]{0,8}")
}

// =============================================================================
// Functor and Monad Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_result_map_identity(value in any_result()) {
        prop_assert_eq!(value.clone().map(|x| x), value);
    }

    #[test]
    fn prop_result_map_composition(value in any_result()) {
        let function1 = |n: i32| n.wrapping_sub(7);
        let function2 = |n: i32| n.wrapping_mul(5);

        let left = value.clone().map(function1).map(function2);
        let right = value.map(|x| function2(function1(x)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_result_map_err_identity(value in any_result()) {
        prop_assert_eq!(value.clone().map_err(|e| e), value);
    }

    #[test]
    fn prop_result_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Ok(value).and_then(checked_double), checked_double(value));
    }

    #[test]
    fn prop_result_right_identity(value in any_result()) {
        prop_assert_eq!(value.clone().and_then(Ok), value);
    }

    #[test]
    fn prop_result_associativity(value in any_result()) {
        let left = value.clone().and_then(checked_double).and_then(non_negative);
        let right = value.and_then(|x| checked_double(x).and_then(non_negative));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Transpose and Ordering
// =============================================================================

proptest! {
    #[test]
    fn prop_result_transpose_involution(
        value in prop::result::maybe_ok(proptest::option::of(any::<i32>()), any::<u8>())
    ) {
        prop_assert_eq!(value.transpose().transpose(), value);
    }

    #[test]
    fn prop_cmp_success_is_antisymmetric(left in any_result(), right in any_result()) {
        prop_assert_eq!(left.cmp_success(&right), right.cmp_success(&left).reverse());
    }

    #[test]
    fn prop_cmp_success_puts_err_below_ok(value in any::<i32>(), error in "[a-z]{0,8}") {
        let failed: Result<i32, String> = Err(error);
        prop_assert_eq!(failed.cmp_success(&Ok(value)), Ordering::Less);
    }
}

// =============================================================================
// Folds
// =============================================================================

proptest! {
    #[test]
    fn prop_collect_results_agrees_with_std(
        items in prop::collection::vec(any_result(), 0..16)
    ) {
        let expected: Result<Vec<i32>, String> = items.clone().into_iter().collect();
        prop_assert_eq!(items.into_iter().collect_results(), expected);
    }

    #[test]
    fn prop_fold_results_returns_first_error(
        prefix in prop::collection::vec(any::<i16>(), 0..8),
        first in "[a-z]{1,4}",
        second in "[A-Z]{1,4}",
    ) {
        let items = prefix
            .into_iter()
            .map(Ok)
            .chain([Err(first.clone()), Err(second)]);
        prop_assert_eq!(items.fold_results(0_i64, |acc, n| acc + i64::from(n)), Err(first));
    }
}
