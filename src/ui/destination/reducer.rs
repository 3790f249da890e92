//! Reducer for the destination alert screen.

use crate::alert::PresentationAction;
use crate::ui::mvi::{Effect, Reducer};

use super::intent::{DestinationAction, DestinationEffect, DestinationIntent};
use super::state::{custom_alert, Destination, DestinationScreenState};

pub struct DestinationReducer;

impl Reducer for DestinationReducer {
    type State = DestinationScreenState;
    type Intent = DestinationIntent;
    type Effect = DestinationEffect;

    fn reduce(
        mut state: Self::State,
        intent: Self::Intent,
    ) -> (Self::State, Effect<DestinationEffect>) {
        match intent {
            DestinationIntent::ShowAlertButtonTapped => {
                if state.destination.is_none() {
                    state.destination = Some(Destination::CustomAlert(custom_alert(
                        state.dismiss_on_action,
                    )));
                }
                (state, Effect::None)
            }

            DestinationIntent::Destination(PresentationAction::Presented(
                DestinationAction::CustomAlert(action),
            )) => {
                // Stale action from an alert that is no longer presented.
                let Some(alert) = state.custom_alert() else {
                    return (state, Effect::None);
                };
                if alert.dismisses_on(&action) {
                    state.destination = None;
                }
                (state, Effect::Emit(DestinationEffect::Performed(action)))
            }

            DestinationIntent::Destination(PresentationAction::Dismissed) => {
                state.destination = None;
                (state, Effect::None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::destination::CustomAlertAction;

    fn presented(action: CustomAlertAction) -> DestinationIntent {
        DestinationIntent::Destination(PresentationAction::Presented(
            DestinationAction::CustomAlert(action),
        ))
    }

    #[test]
    fn show_twice_keeps_first_alert() {
        let (state, _) = DestinationReducer::reduce(
            DestinationScreenState::default(),
            DestinationIntent::ShowAlertButtonTapped,
        );
        let before = state.clone();
        let (state, effect) =
            DestinationReducer::reduce(state, DestinationIntent::ShowAlertButtonTapped);
        assert_eq!(state, before);
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn dismiss_on_action_policy_clears_destination() {
        let (state, _) = DestinationReducer::reduce(
            DestinationScreenState::new(true),
            DestinationIntent::ShowAlertButtonTapped,
        );
        let (state, effect) =
            DestinationReducer::reduce(state, presented(CustomAlertAction::Action3));
        assert!(state.destination.is_none());
        assert_eq!(
            effect,
            Effect::Emit(DestinationEffect::Performed(CustomAlertAction::Action3))
        );
    }

    #[test]
    fn dismissed_clears_destination() {
        let (state, _) = DestinationReducer::reduce(
            DestinationScreenState::default(),
            DestinationIntent::ShowAlertButtonTapped,
        );
        let (state, effect) = DestinationReducer::reduce(
            state,
            DestinationIntent::Destination(PresentationAction::Dismissed),
        );
        assert!(state.destination.is_none());
        assert_eq!(effect, Effect::None);
    }
}
