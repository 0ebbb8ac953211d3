//! Reducer composition utilities
//!
//! This module provides utilities for composing reducers:
//! - **`combine_reducers`**: Run multiple reducers on the same state/action
//! - **`scope_reducer`**: Mount a child reducer inside a larger parent state,
//!   action, and environment
//!
//! # Examples
//!
//! ## Mounting a slice
//!
//! ```
//! use composable_slice_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//! use composable_slice_core::composition::{scope_reducer, Scope};
//!
//! #[derive(Clone, Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! #[derive(Clone)]
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut CounterState, action: CounterAction, _env: &()) -> SmallVec<[Effect<CounterAction>; 4]> {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! #[derive(Clone, Default)]
//! struct AppState {
//!     counter: CounterState,
//!     title: String,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum AppAction {
//!     Counter(CounterAction),
//!     Rename(String),
//! }
//!
//! fn counter(state: &mut AppState) -> &mut CounterState {
//!     &mut state.counter
//! }
//!
//! fn extract(action: AppAction) -> Option<CounterAction> {
//!     match action {
//!         AppAction::Counter(action) => Some(action),
//!         AppAction::Rename(_) => None,
//!     }
//! }
//!
//! fn unit(env: &()) -> &() {
//!     env
//! }
//!
//! let scoped = scope_reducer(
//!     CounterReducer,
//!     Scope {
//!         state: counter,
//!         extract,
//!         embed: AppAction::Counter,
//!         environment: unit,
//!     },
//! );
//!
//! let mut state = AppState::default();
//! let _ = scoped.reduce(&mut state, AppAction::Counter(CounterAction::Increment), &());
//! assert_eq!(state.counter.count, 1);
//! ```

use crate::effect::Effect;
use crate::reducer::Reducer;
use smallvec::SmallVec;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer is run in sequence, and all effects are collected and concatenated.
/// This is how a host assembles its root reducer from the reducers of the slices
/// it mounts.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `A`: The action type
/// - `E`: The environment type
#[must_use]
pub fn combine_reducers<S, A, E>(
    reducers: Vec<Box<dyn Reducer<State = S, Action = A, Environment = E> + Send + Sync>>,
) -> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    reducers: Vec<Box<dyn Reducer<State = S, Action = A, Environment = E> + Send + Sync>>,
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let mut all_effects = SmallVec::new();

        for reducer in &self.reducers {
            let effects = reducer.reduce(state, action.clone(), env);
            all_effects.extend(effects);
        }

        all_effects
    }
}

/// Projections that mount a child reducer inside a parent.
///
/// - `state`: borrow the child's state out of the parent's state
/// - `extract`: recover the child action from a parent action, if it is one
/// - `embed`: wrap a child action (produced by child effects) as a parent action
/// - `environment`: borrow the child's dependencies out of the parent's environment
pub struct Scope<S, SubS, A, SubA, E, SubE> {
    /// Parent state to child state
    pub state: fn(&mut S) -> &mut SubS,
    /// Parent action to child action
    pub extract: fn(A) -> Option<SubA>,
    /// Child action to parent action
    pub embed: fn(SubA) -> A,
    /// Parent environment to child environment
    pub environment: fn(&E) -> &SubE,
}

impl<S, SubS, A, SubA, E, SubE> Clone for Scope<S, SubS, A, SubA, E, SubE> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, SubS, A, SubA, E, SubE> Copy for Scope<S, SubS, A, SubA, E, SubE> {}

/// Scopes a reducer to operate on a subset of a larger state.
///
/// Parent actions that are not child actions are ignored and produce no
/// effects. Effects returned by the child are mapped back into the parent
/// action space through `scope.embed`.
///
/// # Type Parameters
///
/// - `R`: The child reducer
/// - `S`: The parent state type
/// - `A`: The parent action type
/// - `E`: The parent environment type
pub const fn scope_reducer<R, S, A, E>(
    reducer: R,
    scope: Scope<S, R::State, A, R::Action, E, R::Environment>,
) -> ScopedReducer<R, S, A, E>
where
    R: Reducer,
{
    ScopedReducer { reducer, scope }
}

/// A scoped reducer that operates on a subset of state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<R, S, A, E>
where
    R: Reducer,
{
    reducer: R,
    scope: Scope<S, R::State, A, R::Action, E, R::Environment>,
}

impl<R, S, A, E> Clone for ScopedReducer<R, S, A, E>
where
    R: Reducer + Clone,
{
    fn clone(&self) -> Self {
        Self {
            reducer: self.reducer.clone(),
            scope: self.scope,
        }
    }
}

impl<R, S, A, E> Reducer for ScopedReducer<R, S, A, E>
where
    R: Reducer,
    R::Action: Send + 'static,
    A: Send + 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let Some(child_action) = (self.scope.extract)(action) else {
            return SmallVec::new();
        };

        let child_state = (self.scope.state)(state);
        let child_env = (self.scope.environment)(env);

        self.reducer
            .reduce(child_state, child_action, child_env)
            .into_iter()
            .map(|effect| effect.map(self.scope.embed))
            .collect()
    }
}
