//! Dispatch and select hooks, and the context that routes through them.
//!
//! The slice never reaches for a global store. Presentation code talks to a
//! [`SliceContext`], which forwards every call to whatever [`DispatchHook`]
//! and [`SelectHook`] it was last bound to. A standalone [`CounterStore`]
//! provides both hooks, and so does any host store whose types satisfy the
//! mounting contracts in [`crate::mount`].
//!
//! # Example
//!
//! ```ignore
//! let ctx = initialize_slice_package(host_dispatch, host_select);
//! ctx.dispatch(CounterAction::increment()).await?;
//! assert_eq!(ctx.count().await, 1);
//! ```

use crate::CounterStore;
use crate::mount::WrapsCounterAction;
use crate::selectors::{HasCounter, select_count, select_status};
use crate::types::{CounterAction, CounterState, CounterStatus};
use composable_slice_core::reducer::Reducer;
use composable_slice_runtime::{EffectHandle, Store, StoreError};
use futures::future::BoxFuture;
use std::sync::Arc;

/// Delivers counter actions to a store
pub trait DispatchHook: Send + Sync {
    /// Dispatch `action`, returning a handle to the effects it started
    fn dispatch(&self, action: CounterAction) -> BoxFuture<'_, Result<EffectHandle, StoreError>>;
}

/// Reads the counter slice out of a store
pub trait SelectHook: Send + Sync {
    /// A snapshot of the slice
    fn select(&self) -> BoxFuture<'_, CounterState>;
}

impl<S, A, E, R> DispatchHook for Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
    A: WrapsCounterAction + Send + Clone + 'static,
    S: Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    fn dispatch(&self, action: CounterAction) -> BoxFuture<'_, Result<EffectHandle, StoreError>> {
        Box::pin(self.send(A::from(action)))
    }
}

impl<S, A, E, R> SelectHook for Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
    A: Send + Clone + 'static,
    S: HasCounter + Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    fn select(&self) -> BoxFuture<'_, CounterState> {
        Box::pin(self.state(|state| *state.counter()))
    }
}

/// The slice's view of its hosting store
///
/// Cloning is cheap; clones share the hooks they were created with but are
/// rebound independently.
#[derive(Clone)]
pub struct SliceContext {
    dispatch_hook: Arc<dyn DispatchHook>,
    select_hook: Arc<dyn SelectHook>,
}

impl SliceContext {
    /// Context bound to the given hooks
    #[must_use]
    pub fn new(dispatch: Arc<dyn DispatchHook>, select: Arc<dyn SelectHook>) -> Self {
        Self {
            dispatch_hook: dispatch,
            select_hook: select,
        }
    }

    /// Context bound to a standalone counter store
    #[must_use]
    pub fn standalone(store: CounterStore) -> Self {
        let store = Arc::new(store);
        Self::new(store.clone(), store)
    }

    /// Replace both hooks; later calls go to the new bindings
    pub fn rebind(&mut self, dispatch: Arc<dyn DispatchHook>, select: Arc<dyn SelectHook>) {
        tracing::debug!("Rebinding counter slice hooks");
        self.dispatch_hook = dispatch;
        self.select_hook = select;
    }

    /// Dispatch a counter action through the bound hook
    ///
    /// # Errors
    ///
    /// Propagates the hosting store's error, e.g. [`StoreError::ShutdownInProgress`].
    pub async fn dispatch(&self, action: CounterAction) -> Result<EffectHandle, StoreError> {
        self.dispatch_hook.dispatch(action).await
    }

    /// Apply `selector` to the current slice
    pub async fn select<T>(&self, selector: impl FnOnce(&CounterState) -> T) -> T {
        let state = self.select_hook.select().await;
        selector(&state)
    }

    /// Current value
    pub async fn count(&self) -> i64 {
        self.select(select_count).await
    }

    /// Current async status
    pub async fn status(&self) -> CounterStatus {
        self.select(select_status).await
    }
}

impl std::fmt::Debug for SliceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SliceContext").finish_non_exhaustive()
    }
}

/// Bind the slice to a host's dispatch and select hooks
///
/// Every dispatch and select made through the returned context is delegated
/// to these hooks. Initializing again produces a fresh context with the new
/// bindings; use [`SliceContext::rebind`] to redirect an existing one.
#[must_use]
pub fn initialize_slice_package(
    dispatch: Arc<dyn DispatchHook>,
    select: Arc<dyn SelectHook>,
) -> SliceContext {
    tracing::info!("Counter slice package initialized");
    SliceContext::new(dispatch, select)
}
