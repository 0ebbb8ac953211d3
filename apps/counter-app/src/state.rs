//! Host state, actions and reducer.
//!
//! The counter slice is mounted under `AppState::counter`. The amount text
//! box is host-owned state that the slice knows nothing about.

use composable_slice_core::composition::{CombinedReducer, combine_reducers};
use composable_slice_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use counter_slice::{
    CounterAction, CounterEnvironment, CounterState, HasCounter, HasCounterEnvironment,
    WrapsCounterAction, mount_counter,
};
use serde::{Deserialize, Serialize};

/// The amount text box
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountField {
    /// Raw text as typed
    pub text: String,
}

impl AmountField {
    /// Text the field starts with
    pub const DEFAULT_TEXT: &'static str = "2";

    /// Field holding `text`
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The text as an amount, or 0 when it is not an integer
    #[must_use]
    pub fn value(&self) -> i64 {
        self.text.trim().parse().unwrap_or(0)
    }
}

impl Default for AmountField {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TEXT)
    }
}

/// Root state of the app
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Mounted counter slice
    pub counter: CounterState,
    /// Amount text box
    pub amount: AmountField,
}

impl AppState {
    /// Fresh state with the amount field seeded with `amount_text`
    #[must_use]
    pub fn with_amount(amount_text: impl Into<String>) -> Self {
        Self {
            counter: CounterState::new(),
            amount: AmountField::new(amount_text),
        }
    }
}

impl HasCounter for AppState {
    fn counter(&self) -> &CounterState {
        &self.counter
    }

    fn counter_mut(&mut self) -> &mut CounterState {
        &mut self.counter
    }
}

/// Root actions of the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// An action for the counter slice
    Counter(CounterAction),
    /// The amount text box changed
    SetAmountText(String),
}

impl From<CounterAction> for AppAction {
    fn from(action: CounterAction) -> Self {
        Self::Counter(action)
    }
}

impl WrapsCounterAction for AppAction {
    fn into_counter_action(self) -> Option<CounterAction> {
        match self {
            Self::Counter(action) => Some(action),
            Self::SetAmountText(_) => None,
        }
    }
}

/// Root environment of the app
#[derive(Debug, Clone)]
pub struct AppEnvironment {
    /// Dependencies of the counter slice
    pub counter: CounterEnvironment,
}

impl HasCounterEnvironment for AppEnvironment {
    fn counter_environment(&self) -> &CounterEnvironment {
        &self.counter
    }
}

/// Reducer for the host-owned amount field
#[derive(Debug, Clone, Copy, Default)]
pub struct AmountReducer;

impl Reducer for AmountReducer {
    type State = AppState;
    type Action = AppAction;
    type Environment = AppEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            AppAction::SetAmountText(text) => {
                tracing::trace!(%text, "Amount field changed");
                state.amount.text = text;
                smallvec![Effect::None]
            },
            AppAction::Counter(_) => SmallVec::new(),
        }
    }
}

/// Root reducer: the mounted counter plus the amount field
pub type AppReducer = CombinedReducer<AppState, AppAction, AppEnvironment>;

/// Build the root reducer
#[must_use]
pub fn app_reducer() -> AppReducer {
    combine_reducers(vec![
        Box::new(mount_counter::<AppState, AppAction, AppEnvironment>()),
        Box::new(AmountReducer),
    ])
}
