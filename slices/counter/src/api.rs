//! The count service: the slice's only external collaborator.
//!
//! The service resolves an amount into a value after some latency. The
//! production binding is simulated; tests substitute [`crate::mocks::MockCountApi`].

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Response body of a count request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResponse {
    /// Resolved value
    pub data: i64,
}

/// Errors returned by a [`CountApi`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The service could not be reached
    #[error("count service unavailable: {0}")]
    Unavailable(String),

    /// The service refused the request
    #[error("count request rejected: {0}")]
    Rejected(String),
}

/// Resolves an amount into a value
pub trait CountApi: Send + Sync {
    /// Fetch the value for `amount`
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] when the service cannot produce a value.
    fn fetch_count(&self, amount: i64) -> BoxFuture<'_, Result<CountResponse, FetchError>>;
}

/// Simulated count service that echoes the amount after a fixed latency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedCountApi {
    latency: Duration,
}

impl SimulatedCountApi {
    /// Latency used by [`SimulatedCountApi::default`]
    pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

    /// Create a simulated service with the given latency
    #[must_use]
    pub const fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Configured latency
    #[must_use]
    pub const fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for SimulatedCountApi {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LATENCY)
    }
}

impl CountApi for SimulatedCountApi {
    fn fetch_count(&self, amount: i64) -> BoxFuture<'_, Result<CountResponse, FetchError>> {
        let latency = self.latency;
        Box::pin(async move {
            tracing::debug!(amount, ?latency, "Simulating count fetch");
            tokio::time::sleep(latency).await;
            Ok(CountResponse { data: amount })
        })
    }
}
