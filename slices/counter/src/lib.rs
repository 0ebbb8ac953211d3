//! # Counter Slice
//!
//! A self-contained counter: an integer value, the status of an async
//! increment, and the mutations on both.
//!
//! ## Architecture
//!
//! ```text
//! CounterAction → CounterReducer → (CounterState, Effects) → CountApi → CounterAction
//! ```
//!
//! Synchronous actions (`increment`, `decrement`, `increment_by_amount`,
//! `increment_if_odd`) mutate the value in place. `increment_async` marks the
//! slice as loading and asks the [`CountApi`] for a value; the settled result
//! is fed back as a tagged [`AsyncIncrement`] outcome.
//!
//! ## Standalone
//!
//! ```ignore
//! use counter_slice::*;
//!
//! let store = counter_store(CounterEnvironment::simulated(Duration::from_millis(500)));
//! let mut handle = store.send(CounterAction::increment_async(2)).await?;
//! handle.wait().await;
//! assert_eq!(store.state(select_count).await, 2);
//! ```
//!
//! ## Mounted in a host
//!
//! A host implements [`HasCounter`], [`WrapsCounterAction`] and
//! [`HasCounterEnvironment`], adds [`mount_counter`] to its reducer list and
//! hands its store to [`initialize_slice_package`].

pub mod api;
pub mod hooks;
pub mod mocks;
pub mod mount;
pub mod reducer;
pub mod selectors;
pub mod types;

pub use api::{CountApi, CountResponse, FetchError, SimulatedCountApi};
pub use hooks::{DispatchHook, SelectHook, SliceContext, initialize_slice_package};
pub use mount::{HasCounterEnvironment, WrapsCounterAction, counter_scope, mount_counter};
pub use reducer::{CounterEnvironment, CounterReducer};
pub use selectors::{HasCounter, select_count, select_counter, select_status};
pub use types::{AsyncIncrement, CounterAction, CounterState, CounterStatus};

use composable_slice_runtime::Store;

/// A store running the counter slice on its own
pub type CounterStore = Store<CounterState, CounterAction, CounterEnvironment, CounterReducer>;

/// Standalone store starting from the initial state (value 0, idle)
#[must_use]
pub fn counter_store(environment: CounterEnvironment) -> CounterStore {
    Store::new(CounterState::new(), CounterReducer::new(), environment)
}
