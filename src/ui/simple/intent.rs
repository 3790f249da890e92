//! Intents for the simple alert screen.

use crate::ui::mvi::Intent;

/// Actions produced by the alert itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleAlertIntent {
    /// The alert's close button was pressed.
    CloseAlert,
    /// The dimmed backdrop was tapped.
    DimmingTapped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleIntent {
    /// One of the screen's "show alert" buttons was pressed.
    ButtonTapped {
        /// Whether a tap on the backdrop should close the alert.
        dim_tap_closes: bool,
    },
    /// Action from the presented alert.
    Alert(SimpleAlertIntent),
}

impl Intent for SimpleIntent {}
