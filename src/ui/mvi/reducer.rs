//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where form state changes. It must be a
/// pure function: (State, Intent) -> State. Anything impure, such as
/// running the validator or calling the submit handler, happens in the
/// host around it.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
