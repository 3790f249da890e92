//! Intents and effects for the destination alert screen.

use crate::alert::PresentationAction;
use crate::ui::mvi::Intent;

/// Domain actions carried by the custom alert's buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomAlertAction {
    Action1,
    Action2,
    Action3,
    BottomAction,
}

impl CustomAlertAction {
    pub fn label(self) -> &'static str {
        match self {
            CustomAlertAction::Action1 => "action1",
            CustomAlertAction::Action2 => "action2",
            CustomAlertAction::Action3 => "action3",
            CustomAlertAction::BottomAction => "bottomAction",
        }
    }
}

/// Actions of whichever destination is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationAction {
    CustomAlert(CustomAlertAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationIntent {
    ShowAlertButtonTapped,
    Destination(PresentationAction<DestinationAction>),
}

impl Intent for DestinationIntent {}

/// Parent-level side effects triggered by the child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationEffect {
    /// A custom alert button's action was received.
    Performed(CustomAlertAction),
}
