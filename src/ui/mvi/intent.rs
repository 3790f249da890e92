//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (button presses, backdrop taps)
/// - Child actions routed back to their parent
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
