//! Reducer trait and the identity pass-through for unrecognized events.

use std::sync::Arc;

use super::event::Event;
use super::state::Model;

/// Reducer transforms state based on events.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Event) -> State
pub trait Reducer: 'static {
    /// The state type this reducer operates on.
    type State: Model;

    /// The event type this reducer handles.
    type Event: Event;

    /// Process an event and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: &Self::State, event: Self::Event) -> Self::State;
}

/// Apply an event that may not have been recognized.
///
/// `None` stands for an event whose kind is outside the reducer's closed set.
/// It leaves the state untouched and hands back the same allocation, so
/// `Arc::ptr_eq(old, new)` tells callers nothing changed.
pub fn apply<R: Reducer>(state: &Arc<R::State>, event: Option<R::Event>) -> Arc<R::State> {
    match event {
        Some(event) => Arc::new(R::reduce(state, event)),
        None => Arc::clone(state),
    }
}
