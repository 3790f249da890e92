//! Capability used by converted buttons to reach the parent's action space.

use super::animation::Animation;

/// The two ways a button can hand its action back to the owner of the state.
pub trait AlertDispatch<A> {
    /// Dispatch with whatever animation the context applies.
    fn send(&self, action: A);

    /// Dispatch with an explicit animation; `None` disables animation.
    fn send_with_animation(&self, action: A, animation: Option<Animation>);
}

/// [`AlertDispatch`] backed by a pair of closures.
pub struct FnDispatch<S, W> {
    send: S,
    send_with_animation: W,
}

impl<S, W> FnDispatch<S, W> {
    pub fn new(send: S, send_with_animation: W) -> Self {
        Self {
            send,
            send_with_animation,
        }
    }
}

impl<A, S, W> AlertDispatch<A> for FnDispatch<S, W>
where
    S: Fn(A),
    W: Fn(A, Option<Animation>),
{
    fn send(&self, action: A) {
        (self.send)(action);
    }

    fn send_with_animation(&self, action: A, animation: Option<Animation>) {
        (self.send_with_animation)(action, animation);
    }
}
