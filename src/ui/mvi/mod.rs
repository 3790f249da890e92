//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the UI layer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑          │                   │
//!    │          └──→ Effect         │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Effect**: Work the reducer asks the shell to perform afterwards

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{Effect, Reducer};
pub use state::UiState;
