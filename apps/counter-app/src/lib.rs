//! # Counter App
//!
//! A host application that mounts the counter slice next to its own state.
//!
//! The host owns a single [`AppStore`]. The counter slice lives under
//! `AppState::counter` and reaches the store only through the hooks handed to
//! [`counter_slice::initialize_slice_package`] by [`CounterPanel::mount`].

pub mod config;
pub mod panel;
pub mod state;

pub use config::{AppConfig, ConfigError};
pub use panel::CounterPanel;
pub use state::{AmountField, AmountReducer, AppAction, AppEnvironment, AppReducer, AppState, app_reducer};

use composable_slice_runtime::{Store, StoreConfig};
use counter_slice::CounterEnvironment;

/// The host store
pub type AppStore = Store<AppState, AppAction, AppEnvironment, AppReducer>;

/// Build the host store described by `config`
///
/// The counter talks to a simulated count service with the configured latency.
#[must_use]
pub fn build_store(config: &AppConfig) -> AppStore {
    let environment = AppEnvironment {
        counter: CounterEnvironment::simulated(config.fetch_latency()),
    };
    build_store_with(AppState::with_amount(config.initial_amount.clone()), environment, config)
}

/// Build the host store from explicit state and dependencies
#[must_use]
pub fn build_store_with(state: AppState, environment: AppEnvironment, config: &AppConfig) -> AppStore {
    let store_config = StoreConfig::default().with_shutdown_timeout(config.shutdown_timeout());
    Store::with_config(state, app_reducer(), environment, store_config)
}
