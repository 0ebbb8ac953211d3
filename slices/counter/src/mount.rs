//! Mounting the counter slice into a host store.
//!
//! A host satisfies three small contracts, one per axis of the store:
//! [`HasCounter`] for its state, [`WrapsCounterAction`] for its actions and
//! [`HasCounterEnvironment`] for its dependencies. [`mount_counter`] then
//! yields a reducer over the host's types that forwards counter actions to
//! [`CounterReducer`] and ignores everything else.

use crate::reducer::{CounterEnvironment, CounterReducer};
use crate::selectors::HasCounter;
use crate::types::{CounterAction, CounterState};
use composable_slice_core::composition::{Scope, ScopedReducer, scope_reducer};

/// Host actions that can carry a counter action
pub trait WrapsCounterAction: From<CounterAction> {
    /// The wrapped counter action, if this is one
    fn into_counter_action(self) -> Option<CounterAction>;
}

impl WrapsCounterAction for CounterAction {
    fn into_counter_action(self) -> Option<CounterAction> {
        Some(self)
    }
}

/// Host environments that carry the counter's dependencies
pub trait HasCounterEnvironment {
    /// The counter environment
    fn counter_environment(&self) -> &CounterEnvironment;
}

impl HasCounterEnvironment for CounterEnvironment {
    fn counter_environment(&self) -> &CounterEnvironment {
        self
    }
}

/// Projections that place the counter slice inside host types `S`, `A`, `E`
#[must_use]
pub fn counter_scope<S, A, E>() -> Scope<S, CounterState, A, CounterAction, E, CounterEnvironment>
where
    S: HasCounter,
    A: WrapsCounterAction,
    E: HasCounterEnvironment,
{
    Scope {
        state: S::counter_mut,
        extract: A::into_counter_action,
        embed: <A as From<CounterAction>>::from,
        environment: E::counter_environment,
    }
}

/// The counter reducer mounted into host types `S`, `A`, `E`
#[must_use]
pub fn mount_counter<S, A, E>() -> ScopedReducer<CounterReducer, S, A, E>
where
    S: HasCounter,
    A: WrapsCounterAction,
    E: HasCounterEnvironment,
{
    scope_reducer(CounterReducer::new(), counter_scope())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockCountApi;
    use composable_slice_core::reducer::Reducer;
    use std::sync::Arc;

    #[derive(Default)]
    struct Host {
        counter: CounterState,
        renamed: bool,
    }

    impl HasCounter for Host {
        fn counter(&self) -> &CounterState {
            &self.counter
        }

        fn counter_mut(&mut self) -> &mut CounterState {
            &mut self.counter
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum HostAction {
        Counter(CounterAction),
        Rename,
    }

    impl From<CounterAction> for HostAction {
        fn from(action: CounterAction) -> Self {
            Self::Counter(action)
        }
    }

    impl WrapsCounterAction for HostAction {
        fn into_counter_action(self) -> Option<CounterAction> {
            match self {
                Self::Counter(action) => Some(action),
                Self::Rename => None,
            }
        }
    }

    struct HostEnv {
        counter: CounterEnvironment,
    }

    impl HasCounterEnvironment for HostEnv {
        fn counter_environment(&self) -> &CounterEnvironment {
            &self.counter
        }
    }

    fn host_env() -> HostEnv {
        HostEnv {
            counter: CounterEnvironment::new(Arc::new(MockCountApi::echo())),
        }
    }

    #[test]
    fn test_mounted_reducer_updates_counter_field() {
        let reducer = mount_counter::<Host, HostAction, HostEnv>();
        let env = host_env();
        let mut state = Host::default();

        let _ = reducer.reduce(&mut state, CounterAction::increment_by_amount(4).into(), &env);
        assert_eq!(state.counter.value, 4);
        assert!(!state.renamed);
    }

    #[test]
    fn test_mounted_reducer_ignores_host_actions() {
        let reducer = mount_counter::<Host, HostAction, HostEnv>();
        let env = host_env();
        let mut state = Host::default();

        let effects = reducer.reduce(&mut state, HostAction::Rename, &env);
        assert!(effects.is_empty());
        assert_eq!(state.counter, CounterState::default());
    }

    #[tokio::test]
    async fn test_mounted_async_effect_produces_host_action() {
        let reducer = mount_counter::<Host, HostAction, HostEnv>();
        let env = host_env();
        let mut state = Host::default();

        let effects = reducer.reduce(&mut state, CounterAction::increment_async(3).into(), &env);
        assert!(state.counter.is_loading());

        let produced = composable_slice_testing::resolve_effects(effects).await;
        assert_eq!(
            produced,
            vec![HostAction::Counter(CounterAction::IncrementAsync(
                crate::types::AsyncIncrement::Fulfilled { value: 3 }
            ))]
        );
    }
}
