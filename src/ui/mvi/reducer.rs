//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Follow-up work produced by a reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Effect<E> {
    None,
    Emit(E),
}

impl<E> Effect<E> {
    pub fn into_option(self) -> Option<E> {
        match self {
            Effect::None => None,
            Effect::Emit(effect) => Some(effect),
        }
    }
}

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> (State, Effect).
/// Effects are described, never executed, here.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Effects this reducer can request.
    type Effect;

    /// Process an intent and return the new state with any effect.
    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Effect<Self::Effect>);
}
