//! Reducer logic for the counter slice.
//!
//! Synchronous mutations apply directly. The async increment is split into
//! a `Pending` action that starts the count request and a `Fulfilled` or
//! `Rejected` action that the store feeds back once the request settles.
//! The settling action adds to whatever value the counter holds at that
//! moment, so mutations dispatched in between are never lost.

use crate::api::{CountApi, SimulatedCountApi};
use crate::types::{AsyncIncrement, CounterAction, CounterState, CounterStatus};
use composable_slice_core::{SmallVec, async_effect, effect::Effect, reducer::Reducer, smallvec};
use std::sync::Arc;
use std::time::Duration;

/// Environment dependencies for the counter reducer
#[derive(Clone)]
pub struct CounterEnvironment {
    /// Count service used by the async increment
    pub api: Arc<dyn CountApi>,
}

impl CounterEnvironment {
    /// Creates a new `CounterEnvironment`
    #[must_use]
    pub fn new(api: Arc<dyn CountApi>) -> Self {
        Self { api }
    }

    /// Environment backed by [`SimulatedCountApi`] with the given latency
    #[must_use]
    pub fn simulated(latency: Duration) -> Self {
        Self::new(Arc::new(SimulatedCountApi::new(latency)))
    }
}

impl std::fmt::Debug for CounterEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CounterEnvironment").finish_non_exhaustive()
    }
}

/// Reducer for the counter slice
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterReducer;

impl CounterReducer {
    /// Creates a new `CounterReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Truncated remainder, matching `value % 2 == 1`: negative odd values do not qualify
    const fn is_odd(value: i64) -> bool {
        value % 2 == 1
    }

    /// Starts the count request and maps its result onto a settling action
    fn fetch(env: &CounterEnvironment, amount: i64) -> Effect<CounterAction> {
        let api = Arc::clone(&env.api);
        async_effect! {
            let outcome = match api.fetch_count(amount).await {
                Ok(response) => AsyncIncrement::Fulfilled { value: response.data },
                Err(error) => AsyncIncrement::Rejected { reason: error.to_string() },
            };
            Some(CounterAction::IncrementAsync(outcome))
        }
    }

    fn apply_async(
        state: &mut CounterState,
        phase: AsyncIncrement,
        env: &CounterEnvironment,
    ) -> SmallVec<[Effect<CounterAction>; 4]> {
        match phase {
            AsyncIncrement::Pending { amount } => {
                tracing::debug!(amount, "Async increment started");
                state.status = CounterStatus::Loading;
                smallvec![Self::fetch(env, amount)]
            },
            AsyncIncrement::Fulfilled { value } => {
                tracing::debug!(value, current = state.value, "Async increment fulfilled");
                state.status = CounterStatus::Idle;
                state.value = state.value.wrapping_add(value);
                smallvec![Effect::None]
            },
            AsyncIncrement::Rejected { reason } => {
                tracing::warn!(%reason, "Async increment rejected");
                state.status = CounterStatus::Failed;
                smallvec![Effect::None]
            },
        }
    }
}

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;
    type Environment = CounterEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            CounterAction::Increment => {
                state.value = state.value.wrapping_add(1);
            },
            CounterAction::Decrement => {
                state.value = state.value.wrapping_sub(1);
            },
            CounterAction::IncrementByAmount { amount } => {
                state.value = state.value.wrapping_add(amount);
            },
            CounterAction::IncrementIfOdd { amount } => {
                if Self::is_odd(state.value) {
                    return self.reduce(state, CounterAction::IncrementByAmount { amount }, env);
                }
                tracing::trace!(value = state.value, "Value is not odd, skipping increment");
            },
            CounterAction::IncrementAsync(phase) => return Self::apply_async(state, phase, env),
        }

        smallvec![Effect::None]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockCountApi;
    use crate::api::FetchError;
    use composable_slice_testing::{ReducerTest, assertions, resolve_effects};

    fn env() -> CounterEnvironment {
        CounterEnvironment::new(Arc::new(MockCountApi::echo()))
    }

    #[test]
    fn test_increment() {
        ReducerTest::new(CounterReducer::new())
            .with_env(env())
            .given_state(CounterState::default())
            .when_action(CounterAction::increment())
            .then_state(|state| assert_eq!(state.value, 1))
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_decrement_goes_negative() {
        ReducerTest::new(CounterReducer::new())
            .with_env(env())
            .given_state(CounterState::default())
            .when_action(CounterAction::decrement())
            .when_action(CounterAction::decrement())
            .then_state(|state| assert_eq!(state.value, -2))
            .run();
    }

    #[test]
    fn test_increment_by_negative_amount() {
        ReducerTest::new(CounterReducer::new())
            .with_env(env())
            .given_state(CounterState::with_value(2))
            .when_action(CounterAction::increment_by_amount(-3))
            .then_state(|state| assert_eq!(state.value, -1))
            .run();
    }

    #[test]
    fn test_increment_if_odd_applies_on_odd() {
        ReducerTest::new(CounterReducer::new())
            .with_env(env())
            .given_state(CounterState::with_value(3))
            .when_action(CounterAction::increment_if_odd(5))
            .then_state(|state| assert_eq!(state.value, 8))
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_increment_if_odd_skips_on_even() {
        ReducerTest::new(CounterReducer::new())
            .with_env(env())
            .given_state(CounterState::with_value(4))
            .when_action(CounterAction::increment_if_odd(5))
            .then_state(|state| assert_eq!(state.value, 4))
            .run();
    }

    #[test]
    fn test_increment_if_odd_uses_truncated_remainder() {
        // -3 % 2 == -1, so a negative odd value is left alone
        ReducerTest::new(CounterReducer::new())
            .with_env(env())
            .given_state(CounterState::with_value(-3))
            .when_action(CounterAction::increment_if_odd(5))
            .then_state(|state| assert_eq!(state.value, -3))
            .run();
    }

    #[test]
    fn test_increment_if_odd_reads_current_value() {
        // The parity check sees the value left by the previous action
        ReducerTest::new(CounterReducer::new())
            .with_env(env())
            .given_state(CounterState::with_value(4))
            .when_action(CounterAction::increment())
            .when_action(CounterAction::increment_if_odd(10))
            .then_state(|state| assert_eq!(state.value, 15))
            .run();
    }

    #[test]
    fn test_sync_mutations_leave_status_alone() {
        ReducerTest::new(CounterReducer::new())
            .with_env(env())
            .given_state(CounterState { value: 1, status: CounterStatus::Loading })
            .when_action(CounterAction::increment())
            .then_state(|state| {
                assert_eq!(state.value, 2);
                assert_eq!(state.status, CounterStatus::Loading);
            })
            .run();
    }

    #[test]
    fn test_async_pending_marks_loading_and_starts_fetch() {
        ReducerTest::new(CounterReducer::new())
            .with_env(env())
            .given_state(CounterState::with_value(10))
            .when_action(CounterAction::increment_async(7))
            .then_state(|state| {
                assert_eq!(*state, CounterState { value: 10, status: CounterStatus::Loading });
            })
            .then_effects(|effects| {
                assertions::assert_effects_count(effects, 1);
                assertions::assert_has_future_effect(effects);
            })
            .run();
    }

    #[tokio::test]
    async fn test_async_lifecycle_resolves_to_idle() {
        let env = env();
        let reducer = CounterReducer::new();
        let mut state = CounterState::with_value(10);

        let effects = reducer.reduce(&mut state, CounterAction::increment_async(7), &env);
        assert_eq!(state, CounterState { value: 10, status: CounterStatus::Loading });

        let produced = resolve_effects(effects).await;
        assert_eq!(
            produced,
            vec![CounterAction::IncrementAsync(AsyncIncrement::Fulfilled { value: 7 })]
        );

        for action in produced {
            let _ = reducer.reduce(&mut state, action, &env);
        }
        assert_eq!(state, CounterState { value: 17, status: CounterStatus::Idle });
    }

    #[tokio::test]
    async fn test_completion_adds_to_value_at_resolution_time() {
        let env = env();
        let reducer = CounterReducer::new();
        let mut state = CounterState::with_value(10);

        let effects = reducer.reduce(&mut state, CounterAction::increment_async(7), &env);

        // Unrelated mutations land before the request settles
        let _ = reducer.reduce(&mut state, CounterAction::increment_by_amount(100), &env);
        let _ = reducer.reduce(&mut state, CounterAction::decrement(), &env);

        for action in resolve_effects(effects).await {
            let _ = reducer.reduce(&mut state, action, &env);
        }
        assert_eq!(state, CounterState { value: 116, status: CounterStatus::Idle });
    }

    #[tokio::test]
    async fn test_rejection_marks_failed_and_keeps_value() {
        let env = CounterEnvironment::new(Arc::new(MockCountApi::failing(
            FetchError::Unavailable("offline".into()),
        )));
        let reducer = CounterReducer::new();
        let mut state = CounterState::with_value(10);

        let effects = reducer.reduce(&mut state, CounterAction::increment_async(7), &env);
        let produced = resolve_effects(effects).await;
        assert_eq!(
            produced,
            vec![CounterAction::IncrementAsync(AsyncIncrement::Rejected {
                reason: "count service unavailable: offline".into(),
            })]
        );

        for action in produced {
            let _ = reducer.reduce(&mut state, action, &env);
        }
        assert_eq!(state, CounterState { value: 10, status: CounterStatus::Failed });
    }

    #[test]
    fn test_failed_status_recovers_on_next_async_increment() {
        ReducerTest::new(CounterReducer::new())
            .with_env(env())
            .given_state(CounterState { value: 3, status: CounterStatus::Failed })
            .when_action(CounterAction::increment_async(1))
            .when_action(CounterAction::IncrementAsync(AsyncIncrement::Fulfilled { value: 1 }))
            .then_state(|state| {
                assert_eq!(*state, CounterState { value: 4, status: CounterStatus::Idle });
            })
            .run();
    }

    #[test]
    fn test_overflow_wraps_instead_of_panicking() {
        ReducerTest::new(CounterReducer::new())
            .with_env(env())
            .given_state(CounterState::with_value(i64::MAX))
            .when_action(CounterAction::increment())
            .then_state(|state| assert_eq!(state.value, i64::MIN))
            .run();
    }
}
