//! Simple alert screen.
//!
//! The parent holds `Option<SimpleAlertState>` directly; the child reports
//! `CloseAlert` and `DimmingTapped` and the parent decides what clears it.
//!
//! - `state.rs` - screen and child state
//! - `intent.rs` - parent and child intents
//! - `reducer.rs` - state transitions

mod intent;
mod reducer;
mod state;

pub use intent::{SimpleAlertIntent, SimpleIntent};
pub use reducer::SimpleReducer;
pub use state::{SimpleAlertState, SimpleScreenState, SIMPLE_ALERT_TITLE};
