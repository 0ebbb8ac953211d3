//! Selectors over any state that carries a counter slice.

use crate::types::{CounterState, CounterStatus};

/// State that carries a counter slice
///
/// Hosts implement this for their root state to mount the slice. The
/// standalone slice state implements it by returning itself.
pub trait HasCounter {
    /// The counter slice
    fn counter(&self) -> &CounterState;

    /// The counter slice, mutably
    fn counter_mut(&mut self) -> &mut CounterState;
}

impl HasCounter for CounterState {
    fn counter(&self) -> &CounterState {
        self
    }

    fn counter_mut(&mut self) -> &mut CounterState {
        self
    }
}

/// `selectCount(state)`: the counter's current value
pub fn select_count<S: HasCounter + ?Sized>(state: &S) -> i64 {
    state.counter().value
}

/// The status of the async increment
pub fn select_status<S: HasCounter + ?Sized>(state: &S) -> CounterStatus {
    state.counter().status
}

/// A copy of the whole slice
pub fn select_counter<S: HasCounter + ?Sized>(state: &S) -> CounterState {
    *state.counter()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Host {
        counter: CounterState,
        label: &'static str,
    }

    impl HasCounter for Host {
        fn counter(&self) -> &CounterState {
            &self.counter
        }

        fn counter_mut(&mut self) -> &mut CounterState {
            &mut self.counter
        }
    }

    #[test]
    fn test_select_count_through_host() {
        let mut host = Host {
            counter: CounterState::with_value(5),
            label: "host",
        };
        assert_eq!(select_count(&host), 5);

        host.counter_mut().value = 6;
        assert_eq!(select_count(&host), 6);
        assert_eq!(select_status(&host), CounterStatus::Idle);
        assert_eq!(host.label, "host");
    }

    #[test]
    fn test_standalone_slice_selects_itself() {
        let state = CounterState {
            value: -4,
            status: CounterStatus::Loading,
        };
        assert_eq!(select_count(&state), -4);
        assert_eq!(select_status(&state), CounterStatus::Loading);
        assert_eq!(select_counter(&state), state);
    }
}
