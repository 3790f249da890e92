//! Custom alert component.
//!
//! - `state.rs` - reducer-owned [`AlertState`] with domain actions
//! - `model.rs` - render-ready [`AlertModel`] with callbacks
//! - `dispatch.rs` - the [`AlertDispatch`] capability used by conversion
//! - `host.rs` - the overlay binding ([`AlertHost`])
//! - `presentation.rs` - [`PresentationAction`] for optional children
//! - `animation.rs` - animation hints and panel transitions

mod animation;
mod dispatch;
mod host;
mod model;
mod presentation;
mod state;

pub use animation::{Animation, AnimationHint, Transition, TransitionKind};
pub use dispatch::{AlertDispatch, FnDispatch};
pub use host::{AlertHost, Visibility};
pub use model::{AlertButton, AlertContent, AlertModel, ButtonSlot};
pub use presentation::PresentationAction;
pub use state::{AlertState, Button, ButtonAction};
