//! Integration tests for the counter slice running in a Store
//!
//! Covers the async increment lifecycle end to end, including actions that
//! land while a request is in flight.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use composable_slice_runtime::{Store, StoreError};
use counter_slice::mocks::{MockCountApi, MockGate};
use counter_slice::{
    AsyncIncrement, CounterAction, CounterEnvironment, CounterReducer, CounterState,
    CounterStatus, CounterStore, FetchError, SliceContext, counter_store, select_count,
};
use std::sync::Arc;
use std::time::Duration;

const WAIT: Duration = Duration::from_secs(1);

fn gated_store(initial: CounterState) -> (CounterStore, MockCountApi, MockGate) {
    let (api, gate) = MockCountApi::echo().gated();
    let env = CounterEnvironment::new(Arc::new(api.clone()));
    (Store::new(initial, CounterReducer::new(), env), api, gate)
}

#[tokio::test]
async fn test_initial_state() {
    let store = counter_store(CounterEnvironment::new(Arc::new(MockCountApi::echo())));
    let state = store.state(|s| *s).await;
    assert_eq!(state, CounterState { value: 0, status: CounterStatus::Idle });
}

#[tokio::test]
async fn test_sync_sequence() {
    let store = counter_store(CounterEnvironment::new(Arc::new(MockCountApi::echo())));

    for action in [
        CounterAction::increment(),
        CounterAction::increment(),
        CounterAction::decrement(),
        CounterAction::increment_by_amount(5),
        CounterAction::increment_if_odd(10),
        CounterAction::increment_if_odd(10),
    ] {
        store.send(action).await.unwrap();
    }

    // 0 → 1 → 2 → 1 → 6 → (even, skip) → (even, skip)
    assert_eq!(store.state(select_count).await, 6);
}

#[tokio::test]
async fn test_async_increment_lifecycle() {
    let (store, api, gate) = gated_store(CounterState::with_value(10));

    let mut handle = store.send(CounterAction::increment_async(7)).await.unwrap();
    assert_eq!(
        store.state(|s| *s).await,
        CounterState { value: 10, status: CounterStatus::Loading }
    );

    gate.release(1);
    handle.wait_with_timeout(WAIT).await.unwrap();
    assert_eq!(api.calls(), vec![7]);

    assert_eq!(
        store.state(|s| *s).await,
        CounterState { value: 17, status: CounterStatus::Idle }
    );
}

#[tokio::test]
async fn test_interleaved_actions_are_not_lost() {
    let (store, _api, gate) = gated_store(CounterState::with_value(10));

    let mut handle = store.send(CounterAction::increment_async(7)).await.unwrap();
    store.send(CounterAction::increment()).await.unwrap();
    store.send(CounterAction::increment_by_amount(100)).await.unwrap();
    assert_eq!(
        store.state(|s| *s).await,
        CounterState { value: 111, status: CounterStatus::Loading }
    );

    gate.release(1);
    handle.wait_with_timeout(WAIT).await.unwrap();
    assert_eq!(
        store.state(|s| *s).await,
        CounterState { value: 118, status: CounterStatus::Idle }
    );
}

#[tokio::test]
async fn test_increment_if_odd_sees_value_at_dispatch() {
    let (store, _api, gate) = gated_store(CounterState::with_value(2));

    let mut handle = store.send(CounterAction::increment_async(1)).await.unwrap();

    // Still even while the request is held
    store.send(CounterAction::increment_if_odd(50)).await.unwrap();
    assert_eq!(store.state(select_count).await, 2);

    gate.release(1);
    handle.wait_with_timeout(WAIT).await.unwrap();

    store.send(CounterAction::increment_if_odd(50)).await.unwrap();
    assert_eq!(store.state(select_count).await, 53);
}

#[tokio::test]
async fn test_rejected_request_marks_failed() {
    let env = CounterEnvironment::new(Arc::new(MockCountApi::failing(
        FetchError::Unavailable("connection refused".into()),
    )));
    let store = Store::new(CounterState::with_value(4), CounterReducer::new(), env);

    let outcome = store
        .send_and_wait_for(
            CounterAction::increment_async(3),
            CounterAction::is_async_outcome,
            WAIT,
        )
        .await
        .unwrap();

    assert_eq!(
        outcome,
        CounterAction::IncrementAsync(AsyncIncrement::Rejected {
            reason: "count service unavailable: connection refused".into(),
        })
    );
    assert_eq!(
        store.state(|s| *s).await,
        CounterState { value: 4, status: CounterStatus::Failed }
    );
}

#[tokio::test]
async fn test_send_and_wait_for_fulfilled() {
    let store = counter_store(CounterEnvironment::new(Arc::new(MockCountApi::returning(9))));

    let outcome = store
        .send_and_wait_for(
            CounterAction::increment_async(1),
            CounterAction::is_async_outcome,
            WAIT,
        )
        .await
        .unwrap();

    assert_eq!(outcome, CounterAction::IncrementAsync(AsyncIncrement::Fulfilled { value: 9 }));
    assert_eq!(store.state(select_count).await, 9);
}

#[tokio::test]
async fn test_overlapping_async_increments_both_apply() {
    let (store, api, gate) = gated_store(CounterState::new());

    let mut first = store.send(CounterAction::increment_async(2)).await.unwrap();
    let mut second = store.send(CounterAction::increment_async(3)).await.unwrap();

    gate.release(2);
    first.wait_with_timeout(WAIT).await.unwrap();
    second.wait_with_timeout(WAIT).await.unwrap();

    let mut calls = api.calls();
    calls.sort_unstable();
    assert_eq!(calls, vec![2, 3]);

    assert_eq!(
        store.state(|s| *s).await,
        CounterState { value: 5, status: CounterStatus::Idle }
    );
}

#[tokio::test]
async fn test_shutdown_still_applies_in_flight_completion() {
    let (store, _api, gate) = gated_store(CounterState::with_value(1));

    let _handle = store.send(CounterAction::increment_async(4)).await.unwrap();

    let shutdown = {
        let store = store.clone();
        tokio::spawn(async move { store.shutdown(WAIT).await })
    };
    tokio::time::sleep(Duration::from_millis(20)).await;

    assert!(matches!(
        store.send(CounterAction::increment()).await,
        Err(StoreError::ShutdownInProgress)
    ));

    gate.release(1);
    shutdown.await.unwrap().unwrap();
    assert_eq!(store.state(select_count).await, 5);
}

#[tokio::test]
async fn test_concurrent_increments() {
    let store = counter_store(CounterEnvironment::new(Arc::new(MockCountApi::echo())));

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let store = store.clone();
            tokio::spawn(async move {
                let _ = store.send(CounterAction::increment()).await;
            })
        })
        .collect();

    for handle in handles {
        if let Err(e) = handle.await {
            panic!("concurrent increment task panicked: {e}");
        }
    }

    assert_eq!(store.state(select_count).await, 10);
}

#[tokio::test]
async fn test_slice_context_over_standalone_store() {
    let (store, _api, gate) = gated_store(CounterState::new());
    let ctx = SliceContext::standalone(store);

    ctx.dispatch(CounterAction::increment()).await.unwrap();
    let mut handle = ctx.dispatch(CounterAction::increment_async(5)).await.unwrap();
    assert_eq!(ctx.status().await, CounterStatus::Loading);

    gate.release(1);
    handle.wait_with_timeout(WAIT).await.unwrap();

    assert_eq!(ctx.count().await, 6);
    assert!(!ctx.select(CounterState::is_loading).await);
}
