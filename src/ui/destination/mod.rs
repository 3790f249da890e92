//! Destination alert screen.
//!
//! The presented child is one case of the [`Destination`] sum type, so at most
//! one child can be active. Child actions reach the parent wrapped in
//! [`PresentationAction`](crate::alert::PresentationAction).

mod intent;
mod reducer;
mod state;

pub use intent::{CustomAlertAction, DestinationAction, DestinationEffect, DestinationIntent};
pub use reducer::DestinationReducer;
pub use state::{custom_alert, Destination, DestinationScreenState, CUSTOM_ALERT_TITLE};
