//! # Composable Slice Testing
//!
//! Testing utilities and helpers for composable state slices.
//!
//! This crate provides:
//! - [`ReducerTest`]: a Given-When-Then builder for reducer unit tests
//! - [`assertions`]: helpers for inspecting returned effects
//! - [`effects`]: inline resolution of effects without a running store
//!
//! ## Example
//!
//! ```ignore
//! use composable_slice_testing::{ReducerTest, assertions};
//!
//! ReducerTest::new(CounterReducer::new())
//!     .with_env(test_environment())
//!     .given_state(CounterState::default())
//!     .when_action(CounterAction::increment())
//!     .then_state(|state| assert_eq!(state.value, 1))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```


/// Inline effect resolution
pub mod effects;

// Re-export commonly used items
pub use effects::resolve_effects;
pub use reducer_test::{ReducerTest, assertions};
