//! State and action types for the counter slice.

use serde::{Deserialize, Serialize};

/// Lifecycle of the asynchronous increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterStatus {
    /// No async increment in flight (or the last one resolved)
    #[default]
    Idle,
    /// An async increment has started and not yet settled
    Loading,
    /// The last async increment was rejected by the count service
    Failed,
}

/// Counter slice state
///
/// `value` is unbounded in both directions. It is only changed by the
/// counter reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CounterState {
    /// Current counter value
    pub value: i64,
    /// Status of the async increment
    pub status: CounterStatus,
}

impl CounterState {
    /// Fresh slice state: `{ value: 0, status: idle }`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: 0,
            status: CounterStatus::Idle,
        }
    }

    /// Idle state holding `value`
    #[must_use]
    pub const fn with_value(value: i64) -> Self {
        Self {
            value,
            status: CounterStatus::Idle,
        }
    }

    /// Whether an async increment is in flight
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.status, CounterStatus::Loading)
    }
}

/// The three phases of one async increment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsyncIncrement {
    /// Dispatched: mark the slice as loading and call the count service
    Pending {
        /// Amount passed to the count service
        amount: i64,
    },
    /// The count service resolved with `value`
    Fulfilled {
        /// Value to add to the counter
        value: i64,
    },
    /// The count service failed
    Rejected {
        /// Human-readable failure reason
        reason: String,
    },
}

/// Counter actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterAction {
    /// Add 1
    Increment,
    /// Subtract 1
    Decrement,
    /// Add `amount` (may be zero or negative)
    IncrementByAmount {
        /// Amount to add
        amount: i64,
    },
    /// Add `amount` only if the current value is odd
    IncrementIfOdd {
        /// Amount to add
        amount: i64,
    },
    /// Async increment lifecycle
    IncrementAsync(AsyncIncrement),
}

impl CounterAction {
    /// `increment()`
    #[must_use]
    pub const fn increment() -> Self {
        Self::Increment
    }

    /// `decrement()`
    #[must_use]
    pub const fn decrement() -> Self {
        Self::Decrement
    }

    /// `incrementByAmount(amount)`
    #[must_use]
    pub const fn increment_by_amount(amount: i64) -> Self {
        Self::IncrementByAmount { amount }
    }

    /// `incrementIfOdd(amount)`
    #[must_use]
    pub const fn increment_if_odd(amount: i64) -> Self {
        Self::IncrementIfOdd { amount }
    }

    /// `incrementAsync(amount)`: starts the async lifecycle
    #[must_use]
    pub const fn increment_async(amount: i64) -> Self {
        Self::IncrementAsync(AsyncIncrement::Pending { amount })
    }

    /// Whether this action settles an async increment
    #[must_use]
    pub const fn is_async_outcome(&self) -> bool {
        matches!(
            self,
            Self::IncrementAsync(AsyncIncrement::Fulfilled { .. } | AsyncIncrement::Rejected { .. })
        )
    }
}
