//! The counter panel: buttons, an amount box and a one-line view.

use crate::AppStore;
use crate::state::AppAction;
use composable_slice_runtime::{EffectHandle, StoreError};
use counter_slice::{CounterAction, CounterState, CounterStatus, SliceContext, initialize_slice_package};
use std::sync::Arc;

/// Counter controls bound to a host store
///
/// Counter traffic goes through the slice's [`SliceContext`]; only the
/// amount box talks to the host store directly.
#[derive(Clone)]
pub struct CounterPanel {
    ctx: SliceContext,
    host: AppStore,
}

impl CounterPanel {
    /// Panel over an existing slice context
    #[must_use]
    pub const fn new(ctx: SliceContext, host: AppStore) -> Self {
        Self { ctx, host }
    }

    /// Initialize the slice package with `host` as both hooks and build a panel
    #[must_use]
    pub fn mount(host: AppStore) -> Self {
        let hooks = Arc::new(host.clone());
        let ctx = initialize_slice_package(hooks.clone(), hooks);
        Self::new(ctx, host)
    }

    /// The slice context this panel dispatches through
    #[must_use]
    pub const fn context(&self) -> &SliceContext {
        &self.ctx
    }

    /// Mutable access to the context, e.g. to rebind it
    pub fn context_mut(&mut self) -> &mut SliceContext {
        &mut self.ctx
    }

    /// Type into the amount box
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShutdownInProgress`] if the host store is shutting down.
    pub async fn set_amount_text(&self, text: impl Into<String>) -> Result<(), StoreError> {
        self.host.send(AppAction::SetAmountText(text.into())).await?;
        Ok(())
    }

    /// The amount box parsed as a number
    pub async fn amount(&self) -> i64 {
        self.host.state(|s| s.amount.value()).await
    }

    /// `-` button
    ///
    /// # Errors
    ///
    /// Propagates the hosting store's error.
    pub async fn decrement(&self) -> Result<EffectHandle, StoreError> {
        self.ctx.dispatch(CounterAction::decrement()).await
    }

    /// `+` button
    ///
    /// # Errors
    ///
    /// Propagates the hosting store's error.
    pub async fn increment(&self) -> Result<EffectHandle, StoreError> {
        self.ctx.dispatch(CounterAction::increment()).await
    }

    /// "Add Amount" button
    ///
    /// # Errors
    ///
    /// Propagates the hosting store's error.
    pub async fn add_amount(&self) -> Result<EffectHandle, StoreError> {
        let amount = self.amount().await;
        self.ctx.dispatch(CounterAction::increment_by_amount(amount)).await
    }

    /// "Add Async" button; the returned handle resolves once the value lands
    ///
    /// # Errors
    ///
    /// Propagates the hosting store's error.
    pub async fn add_async(&self) -> Result<EffectHandle, StoreError> {
        let amount = self.amount().await;
        self.ctx.dispatch(CounterAction::increment_async(amount)).await
    }

    /// "Add If Odd" button
    ///
    /// # Errors
    ///
    /// Propagates the hosting store's error.
    pub async fn add_if_odd(&self) -> Result<EffectHandle, StoreError> {
        let amount = self.amount().await;
        self.ctx.dispatch(CounterAction::increment_if_odd(amount)).await
    }

    /// One-line view of the panel
    pub async fn render(&self) -> String {
        let counter = self.ctx.select(|s: &CounterState| *s).await;
        let text = self.host.state(|s| s.amount.text.clone()).await;
        render_line(counter, &text)
    }
}

impl std::fmt::Debug for CounterPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CounterPanel")
            .field("ctx", &self.ctx)
            .finish_non_exhaustive()
    }
}

fn render_line(counter: CounterState, amount_text: &str) -> String {
    let marker = match counter.status {
        CounterStatus::Idle => "",
        CounterStatus::Loading => " (loading)",
        CounterStatus::Failed => " (failed)",
    };
    format!("[-] {} [+]  amount: [{amount_text}]{marker}", counter.value)
}
