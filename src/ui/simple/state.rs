//! State for the simple alert screen.

use crate::alert::{AlertState, Button, ButtonAction};
use crate::ui::mvi::UiState;

use super::intent::SimpleAlertIntent;

pub const SIMPLE_ALERT_TITLE: &str = "This is a custom alert";

/// Child state: exists only while the alert is on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleAlertState {
    pub title: String,
    pub dim_tap_closes: bool,
}

impl SimpleAlertState {
    pub fn new(title: impl Into<String>, dim_tap_closes: bool) -> Self {
        Self {
            title: title.into(),
            dim_tap_closes,
        }
    }

    /// Describe the child as a generic alert the host can present.
    pub fn alert_state(&self) -> AlertState<SimpleAlertIntent> {
        let message = if self.dim_tap_closes {
            "Tap the dimmed area to close"
        } else {
            "Only the close button dismisses this alert"
        };
        AlertState::new(
            Some(self.title.clone()),
            Some(message.to_string()),
            Vec::new(),
            Some(Button::new(
                "Close",
                Some(ButtonAction::new(SimpleAlertIntent::CloseAlert)),
            )),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SimpleScreenState {
    pub alert: Option<SimpleAlertState>,
}

impl UiState for SimpleScreenState {}

impl SimpleScreenState {
    pub fn is_alert_visible(&self) -> bool {
        self.alert.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_is_default() {
        assert!(!SimpleScreenState::default().is_alert_visible());
    }

    #[test]
    fn alert_state_has_single_close_button() {
        let alert = SimpleAlertState::new("T", false).alert_state();
        assert_eq!(alert.title.as_deref(), Some("T"));
        assert!(alert.buttons.is_empty());
        let bottom = alert.bottom_button.expect("close button");
        assert_eq!(bottom.text, "Close");
        assert_eq!(
            bottom.action.map(|a| a.action),
            Some(SimpleAlertIntent::CloseAlert)
        );
    }
}
