#![cfg(feature = "async")]
//! Integration tests for `PendingOption` and `OptionAsyncExt`.
//!
//! This module covers:
//! - Every receiver/callback combination of sync and async
//! - Short-circuit: callbacks on the absent path are never called
//! - Ordering: the receiver is awaited before any callback runs
//! - Agreement with the synchronous combinators

use optres::prelude::*;
use rstest::rstest;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

async fn delayed<T>(value: T) -> T {
    tokio::time::sleep(Duration::from_millis(5)).await;
    value
}

fn pending(option: Option<i32>) -> PendingOption<impl Future<Output = Option<i32>>> {
    delayed(option).pending_option()
}

// =============================================================================
// Scenarios Lifted
// =============================================================================

#[rstest]
#[tokio::test]
async fn pending_map_then_unwrap_state() {
    assert_eq!(pending(Some(5)).map(|x| x * 2).unwrap_state().await, 10);
}

#[rstest]
#[tokio::test]
async fn pending_none_unwrap_or() {
    assert_eq!(pending(None).unwrap_or(-1).await, -1);
}

// =============================================================================
// Receiver / Callback Combinations
// =============================================================================

#[rstest]
#[tokio::test]
async fn sync_receiver_async_callback() {
    let mapped = Some(3).map_async(|x| delayed(x + 1)).await;
    assert_eq!(mapped, Some(4));
}

#[rstest]
#[tokio::test]
async fn async_receiver_sync_callback() {
    let mapped = pending(Some(3)).map(|x| x + 1).await;
    assert_eq!(mapped, Some(4));
}

#[rstest]
#[tokio::test]
async fn async_receiver_async_callback() {
    let mapped = pending(Some(3)).map_async(|x| delayed(x + 1)).await;
    assert_eq!(mapped, Some(4));
}

#[rstest]
#[tokio::test]
async fn chained_pipeline() {
    let outcome = pending(Some(12))
        .filter(|x| x % 2 == 0)
        .and_then_async(|x| delayed((x > 10).then_some(x / 2)))
        .tap(|x| assert_eq!(*x, 6))
        .ok_or("too small")
        .map(|x| x.to_string())
        .await;
    assert_eq!(outcome.as_deref(), Ok("6"));
}

// =============================================================================
// Short-Circuit
// =============================================================================

#[rstest]
#[tokio::test]
async fn and_then_async_never_creates_future_on_none() {
    let calls = Arc::new(AtomicUsize::new(0));
    let probe = Arc::clone(&calls);
    let chained = pending(None)
        .and_then_async(move |x| {
            probe.fetch_add(1, Ordering::SeqCst);
            delayed(Some(x))
        })
        .await;
    assert_eq!(chained, None);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[rstest]
#[tokio::test]
async fn or_else_async_never_called_on_some() {
    let calls = AtomicUsize::new(0);
    let kept = pending(Some(1))
        .or_else_async(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            delayed(Some(2))
        })
        .await;
    assert_eq!(kept, Some(1));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[rstest]
#[tokio::test]
async fn short_circuit_for_sync_receiver_with_async_callbacks() {
    let calls = AtomicUsize::new(0);
    let count = || {
        calls.fetch_add(1, Ordering::SeqCst);
    };

    let _ = None::<i32>
        .map_async(|x| {
            count();
            delayed(x)
        })
        .await;
    let _ = None::<i32>
        .filter_async(|_| {
            count();
            delayed(true)
        })
        .await;
    let _ = None::<i32>
        .tap_async(|_| {
            count();
            delayed(())
        })
        .await;
    let _ = None::<i32>
        .is_some_and_async(|_| {
            count();
            delayed(true)
        })
        .await;
    let _ = Some(1)
        .unwrap_or_else_async(|| {
            count();
            delayed(0)
        })
        .await;
    let _ = Some(1)
        .ok_or_else_async(|| {
            count();
            delayed("missing")
        })
        .await;

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[rstest]
#[tokio::test]
async fn zip_map_async_skips_callback_when_either_side_is_none() {
    let calls = AtomicUsize::new(0);
    let combine = |a: i32, b: i32| {
        calls.fetch_add(1, Ordering::SeqCst);
        delayed(a + b)
    };

    assert_eq!(pending(None).zip_map_async(Some(2), combine).await, None);
    assert_eq!(Some(1).zip_map_async(None::<i32>, combine).await, None);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[rstest]
#[tokio::test]
async fn fold_options_async_stops_at_first_none() {
    let pulled = AtomicUsize::new(0);
    let calls = AtomicUsize::new(0);
    let items = [Some(1), Some(2), None, Some(4)].into_iter().inspect(|_| {
        pulled.fetch_add(1, Ordering::SeqCst);
    });

    let folded = items
        .fold_options_async(0, |total, value| {
            calls.fetch_add(1, Ordering::SeqCst);
            delayed(total + value)
        })
        .await;

    assert_eq!(folded, None);
    assert_eq!(pulled.load(Ordering::SeqCst), 3);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[rstest]
#[tokio::test]
async fn aggregate_options_async_skips_selector_after_none() {
    let calls = AtomicUsize::new(0);
    let aggregated = [Some(5), None, Some(9)]
        .into_iter()
        .aggregate_options_async(|a, b| {
            calls.fetch_add(1, Ordering::SeqCst);
            delayed(a.max(b))
        })
        .await;
    assert_eq!(aggregated, None);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

// =============================================================================
// Callbacks That Run
// =============================================================================

#[rstest]
#[tokio::test]
async fn zip_map_async_combines_both_payloads() {
    assert_eq!(pending(Some(3)).zip_map_async(Some(4), |a, b| delayed(a * b)).await, Some(12));
    assert_eq!(Some(3).zip_map_async(Some(4), |a, b| delayed(a + b)).await, Some(7));
}

#[rstest]
#[tokio::test]
async fn tap_async_awaits_observer_and_keeps_value() {
    let seen = Arc::new(AtomicUsize::new(0));

    let probe = Arc::clone(&seen);
    let observed = pending(Some(7))
        .tap_async(move |x| {
            let value = usize::try_from(*x).unwrap_or(0);
            async move {
                tokio::time::sleep(Duration::from_millis(5)).await;
                probe.store(value, Ordering::SeqCst);
            }
        })
        .await;
    assert_eq!(observed, Some(7));
    assert_eq!(seen.load(Ordering::SeqCst), 7);

    let probe = Arc::clone(&seen);
    let observed = Some(2)
        .tap_async(move |x| {
            let value = usize::try_from(*x).unwrap_or(0);
            async move {
                probe.fetch_add(value, Ordering::SeqCst);
            }
        })
        .await;
    assert_eq!(observed, Some(2));
    assert_eq!(seen.load(Ordering::SeqCst), 9);
}

#[rstest]
#[case(Some(4), Some(4))]
#[case(Some(3), None)]
#[tokio::test]
async fn filter_async_keeps_payload_only_when_predicate_holds(
    #[case] value: Option<i32>,
    #[case] expected: Option<i32>,
) {
    assert_eq!(pending(value).filter_async(|x| delayed(*x % 2 == 0)).await, expected);
    assert_eq!(value.filter_async(|x| delayed(*x % 2 == 0)).await, expected);
}

#[rstest]
#[tokio::test]
async fn async_folds_over_present_payloads() {
    let folded = [Some("a"), Some("bc")]
        .into_iter()
        .fold_options_async(String::new(), |acc, word| delayed(acc + word))
        .await;
    assert_eq!(folded.as_deref(), Some("abc"));

    let aggregated = [Some(3), Some(9), Some(4)]
        .into_iter()
        .aggregate_options_async(|a, b| delayed(a.max(b)))
        .await;
    assert_eq!(aggregated, Some(9));
}

#[rstest]
#[tokio::test]
async fn aggregate_options_async_on_empty_raises_invalid_state() {
    let reported = std::iter::empty::<Option<i32>>()
        .try_aggregate_options_async(|a, b| delayed(a + b))
        .await;
    assert_eq!(reported, Err(InvalidState::empty_sequence()));

    let caught = try_catch_async_as::<InvalidState, _, _, _>(|| {
        std::iter::empty::<Option<i32>>().aggregate_options_async(|a, b| delayed(a + b))
    })
    .await;
    assert_eq!(caught, Err(InvalidState::empty_sequence()));
}

// =============================================================================
// Ordering
// =============================================================================

#[rstest]
#[tokio::test]
async fn receiver_is_awaited_before_callback() {
    let log = Arc::new(Mutex::new(Vec::new()));

    let receiver_log = Arc::clone(&log);
    let receiver = async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        receiver_log.lock().await.push("receiver");
        Some(1)
    };

    let callback_log = Arc::clone(&log);
    let mapped = receiver
        .pending_option()
        .map_async(move |x| async move {
            callback_log.lock().await.push("callback");
            x + 1
        })
        .await;

    assert_eq!(mapped, Some(2));
    assert_eq!(*log.lock().await, vec!["receiver", "callback"]);
}

#[rstest]
#[tokio::test]
async fn combinators_are_lazy_until_awaited() {
    let calls = Arc::new(AtomicUsize::new(0));
    let probe = Arc::clone(&calls);
    let mapped = PendingOption::ready(Some(1)).map(move |x| {
        probe.fetch_add(1, Ordering::SeqCst);
        x
    });
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(mapped.await, Some(1));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Agreement with the Synchronous Surface
// =============================================================================

#[rstest]
#[case(Some(1), Some(2))]
#[case(Some(1), None)]
#[case(None, Some(2))]
#[case(None, None)]
#[tokio::test]
async fn binary_combinators_agree(#[case] left: Option<i32>, #[case] right: Option<i32>) {
    assert_eq!(pending(left).xor(right).await, left.xor(right));
    assert_eq!(pending(left).and(right).await, left.and(right));
    assert_eq!(pending(left).or(right).await, left.or(right));
    assert_eq!(pending(left).zip(right).await, left.zip(right));
    assert_eq!(
        pending(left).zip_map(right, |a, b| a - b).await,
        left.zip_map(right, |a, b| a - b)
    );
}

#[rstest]
#[case(Some(4))]
#[case(None)]
#[tokio::test]
async fn map_or_else_forms_agree(#[case] value: Option<i32>) {
    let expected = value.map_or_else(|| -1, |x| x * 3);
    assert_eq!(pending(value).map_or_else(|| -1, |x| x * 3).await, expected);
    assert_eq!(
        pending(value)
            .map_or_else_async(|| delayed(-1), |x| delayed(x * 3))
            .await,
        expected
    );
    assert_eq!(
        value
            .map_or_else_async(|| std::future::ready(-1), |x| delayed(x * 3))
            .await,
        expected
    );
    assert_eq!(pending(value).map_or(-1, |x| x * 3).await, value.map_or(-1, |x| x * 3));
}

#[rstest]
#[tokio::test]
async fn nested_shapes() {
    let nested = delayed(Some(Some(3))).pending_option().flatten().await;
    assert_eq!(nested, Some(3));

    let (left, right) = delayed(Some((1, 'a'))).pending_option().unzip().await;
    assert_eq!((left, right), (Some(1), Some('a')));

    let transposed = delayed(Some(Err::<i32, &str>("e")))
        .pending_option()
        .transpose()
        .await;
    assert_eq!(transposed, Err("e"));
}

#[rstest]
#[tokio::test]
async fn predicates_and_extraction() {
    assert!(pending(Some(2)).is_some().await);
    assert!(pending(None).is_none().await);
    assert!(pending(Some(2)).is_some_and(|x| x > 1).await);
    assert!(!pending(Some(2)).is_some_and_async(|x| delayed(x > 5)).await);
    assert_eq!(pending(None).unwrap_or_default().await, 0);
    assert_eq!(pending(None).unwrap_or_else_async(|| delayed(9)).await, 9);
    assert_eq!(pending(Some(8)).to_vec().await, vec![8]);
}

#[rstest]
#[tokio::test]
async fn unwrap_state_on_pending_none_raises_invalid_state() {
    let caught =
        try_catch_async_as::<InvalidState, _, _, _>(|| pending(None).unwrap_state()).await;
    assert_eq!(
        caught.unwrap_err().message(),
        "called `Option::unwrap_state()` on a `None` value"
    );
}

#[rstest]
#[tokio::test]
async fn dropping_pending_option_cancels_upstream() {
    let completed = Arc::new(AtomicUsize::new(0));
    let probe = Arc::clone(&completed);
    let upstream = async move {
        tokio::time::sleep(Duration::from_millis(5)).await;
        probe.fetch_add(1, Ordering::SeqCst);
        Some(1)
    };
    drop(upstream.pending_option().map(|x| x + 1));
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(completed.load(Ordering::SeqCst), 0);
}
