//! State for the destination alert screen.

use crate::alert::{Animation, AlertState, Button, ButtonAction};
use crate::ui::mvi::UiState;

use super::intent::CustomAlertAction;

pub const CUSTOM_ALERT_TITLE: &str = "Custom alert";

/// Children this screen can present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    CustomAlert(AlertState<CustomAlertAction>),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DestinationScreenState {
    pub destination: Option<Destination>,
    /// Alert-wide dismissal policy applied to alerts this screen presents.
    pub dismiss_on_action: bool,
}

impl UiState for DestinationScreenState {}

impl DestinationScreenState {
    pub fn new(dismiss_on_action: bool) -> Self {
        Self {
            destination: None,
            dismiss_on_action,
        }
    }

    /// The presented custom alert, if that is the active destination.
    pub fn custom_alert(&self) -> Option<&AlertState<CustomAlertAction>> {
        match &self.destination {
            Some(Destination::CustomAlert(alert)) => Some(alert),
            None => None,
        }
    }
}

/// The alert presented by `ShowAlertButtonTapped`, one action and animation
/// per button.
pub fn custom_alert(dismiss_on_action: bool) -> AlertState<CustomAlertAction> {
    AlertState::new(
        Some(CUSTOM_ALERT_TITLE.to_string()),
        Some("Pick an action; tap outside to close".to_string()),
        vec![
            Button::new(
                "Action 1",
                Some(ButtonAction::with_animation(
                    CustomAlertAction::Action1,
                    Some(Animation::Default),
                )),
            ),
            Button::new(
                "Action 2",
                Some(ButtonAction::with_animation(CustomAlertAction::Action2, None)),
            ),
            Button::new("Action 3", Some(ButtonAction::new(CustomAlertAction::Action3))),
        ],
        Some(Button::new(
            "Bottom action",
            Some(ButtonAction::with_animation(
                CustomAlertAction::BottomAction,
                Some(Animation::Spring),
            )),
        )),
    )
    .with_dismiss_on_action(dismiss_on_action)
}
