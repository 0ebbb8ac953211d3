//! Store metrics for observability.
//!
//! The store records through the [`metrics`] facade. Nothing is exported
//! unless the embedding application installs a recorder; this module only
//! names and describes what the store emits.
//!
//! # Example
//!
//! ```
//! use composable_slice_runtime::metrics::describe_store_metrics;
//!
//! // Call once after installing a recorder
//! describe_store_metrics();
//! ```

use metrics::{Unit, describe_counter, describe_histogram};

/// Actions reduced by a store (sent or fed back by effects)
pub const COMMANDS_TOTAL: &str = "store.commands.total";

/// Time spent inside the reducer per action
pub const REDUCER_DURATION_SECONDS: &str = "store.reducer.duration_seconds";

/// Effects started, labelled by `type`
pub const EFFECTS_EXECUTED: &str = "store.effects.executed";

/// Shutdown lifecycle counters
pub const SHUTDOWN_COUNTERS: [&str; 4] = [
    "store.shutdown.initiated",
    "store.shutdown.completed",
    "store.shutdown.timeout",
    "store.shutdown.rejected_actions",
];

/// Register descriptions for every metric the store emits.
pub fn describe_store_metrics() {
    describe_counter!(COMMANDS_TOTAL, "Total number of actions processed by the store");
    describe_histogram!(
        REDUCER_DURATION_SECONDS,
        Unit::Seconds,
        "Time taken to execute the reducer for one action"
    );
    describe_counter!(EFFECTS_EXECUTED, "Total number of effects started, by type");

    describe_counter!(SHUTDOWN_COUNTERS[0], "Graceful shutdowns initiated");
    describe_counter!(SHUTDOWN_COUNTERS[1], "Graceful shutdowns that drained all effects");
    describe_counter!(SHUTDOWN_COUNTERS[2], "Graceful shutdowns that timed out");
    describe_counter!(SHUTDOWN_COUNTERS[3], "Actions rejected because the store was shutting down");
}
