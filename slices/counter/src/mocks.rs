//! Mock count service for testing.

use crate::api::{CountApi, CountResponse, FetchError};
use futures::future::BoxFuture;
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

#[derive(Debug, Clone)]
enum Reply {
    Echo,
    Value(i64),
    Fail(FetchError),
}

/// In-memory count service.
///
/// Replies immediately unless gated, and records every requested amount.
/// Clones share the call log and the gate.
#[derive(Debug, Clone)]
pub struct MockCountApi {
    reply: Reply,
    calls: Arc<Mutex<Vec<i64>>>,
    gate: Option<Arc<Semaphore>>,
}

/// Releases requests held by a gated [`MockCountApi`]
#[derive(Debug, Clone)]
pub struct MockGate {
    permits: Arc<Semaphore>,
}

impl MockGate {
    /// Let `n` more requests settle
    pub fn release(&self, n: usize) {
        self.permits.add_permits(n);
    }

    /// Fail every held and future request
    pub fn close(&self) {
        self.permits.close();
    }
}

impl MockCountApi {
    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            calls: Arc::new(Mutex::new(Vec::new())),
            gate: None,
        }
    }

    /// Resolves every request to the requested amount
    #[must_use]
    pub fn echo() -> Self {
        Self::with_reply(Reply::Echo)
    }

    /// Resolves every request to `value`, whatever the amount
    #[must_use]
    pub fn returning(value: i64) -> Self {
        Self::with_reply(Reply::Value(value))
    }

    /// Fails every request with `error`
    #[must_use]
    pub fn failing(error: FetchError) -> Self {
        Self::with_reply(Reply::Fail(error))
    }

    /// Hold each request until the returned gate releases it
    #[must_use]
    pub fn gated(mut self) -> (Self, MockGate) {
        let permits = Arc::new(Semaphore::new(0));
        self.gate = Some(Arc::clone(&permits));
        (self, MockGate { permits })
    }

    /// Amounts requested so far, in call order
    #[must_use]
    pub fn calls(&self) -> Vec<i64> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    fn record(&self, amount: i64) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(amount);
        }
    }
}

impl Default for MockCountApi {
    fn default() -> Self {
        Self::echo()
    }
}

impl CountApi for MockCountApi {
    fn fetch_count(&self, amount: i64) -> BoxFuture<'_, Result<CountResponse, FetchError>> {
        self.record(amount);
        let gate = self.gate.clone();
        let reply = self.reply.clone();

        Box::pin(async move {
            if let Some(gate) = gate {
                match gate.acquire().await {
                    Ok(permit) => permit.forget(),
                    Err(_) => return Err(FetchError::Unavailable("mock gate closed".into())),
                }
            }

            tracing::debug!(amount, "Mock count fetch settled");
            match reply {
                Reply::Echo => Ok(CountResponse { data: amount }),
                Reply::Value(data) => Ok(CountResponse { data }),
                Reply::Fail(error) => Err(error),
            }
        })
    }
}
