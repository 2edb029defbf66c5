//! Model-View-Intent primitives shared by the animation state machines.
//!
//! ```text
//! Intent (tick, frame, pointer, scroll) ──→ Reducer ──→ State ──→ render
//! ```
//!
//! Reducers own every state transition. Scheduling (frames, timers) is a
//! side effect and stays in the component wrapping the reducer.

/// Marker trait for animation state.
///
/// Implementors are plain values: cloned to snapshot, compared to detect
/// whether a frame changed anything visible.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for the events a reducer consumes.
pub trait Intent: Send + 'static {}

/// Pure transition function `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Run `intent` through `R` in place, reporting whether the state changed.
pub fn dispatch<R: Reducer>(state: &mut R::State, intent: R::Intent) -> bool {
    let previous = std::mem::take(state);
    let next = R::reduce(previous.clone(), intent);
    let changed = next != previous;
    *state = next;
    changed
}
