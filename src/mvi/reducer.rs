//! Reducer trait: the only place where state transitions happen.

use super::intent::Intent;
use super::state::State;

/// Reducer transforms state based on intents.
///
/// Must be a pure function: (State, Intent) -> State. Side effects
/// (fetching, persistence) live in interactors, never here.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
