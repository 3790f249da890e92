//! Reducer for the simple alert screen.

use std::convert::Infallible;

use crate::ui::mvi::{Effect, Reducer};

use super::intent::{SimpleAlertIntent, SimpleIntent};
use super::state::{SimpleAlertState, SimpleScreenState, SIMPLE_ALERT_TITLE};

pub struct SimpleReducer;

impl Reducer for SimpleReducer {
    type State = SimpleScreenState;
    type Intent = SimpleIntent;
    type Effect = Infallible;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> (Self::State, Effect<Infallible>) {
        match intent {
            SimpleIntent::ButtonTapped { dim_tap_closes } => {
                if state.alert.is_none() {
                    state.alert = Some(SimpleAlertState::new(SIMPLE_ALERT_TITLE, dim_tap_closes));
                }
            }

            SimpleIntent::Alert(SimpleAlertIntent::CloseAlert) => {
                state.alert = None;
            }

            SimpleIntent::Alert(SimpleAlertIntent::DimmingTapped) => {
                if state.alert.as_ref().is_some_and(|alert| alert.dim_tap_closes) {
                    state.alert = None;
                }
            }
        }
        (state, Effect::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: SimpleScreenState, intent: SimpleIntent) -> SimpleScreenState {
        SimpleReducer::reduce(state, intent).0
    }

    #[test]
    fn button_tap_presents_alert() {
        let state = reduce(
            SimpleScreenState::default(),
            SimpleIntent::ButtonTapped {
                dim_tap_closes: true,
            },
        );
        assert_eq!(
            state.alert,
            Some(SimpleAlertState::new(SIMPLE_ALERT_TITLE, true))
        );
    }

    #[test]
    fn dimming_tap_respects_flag() {
        let kept = reduce(
            SimpleScreenState {
                alert: Some(SimpleAlertState::new("T", false)),
            },
            SimpleIntent::Alert(SimpleAlertIntent::DimmingTapped),
        );
        assert!(kept.is_alert_visible());

        let cleared = reduce(
            SimpleScreenState {
                alert: Some(SimpleAlertState::new("T", true)),
            },
            SimpleIntent::Alert(SimpleAlertIntent::DimmingTapped),
        );
        assert!(!cleared.is_alert_visible());
    }
}
