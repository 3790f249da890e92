//! Wrapper for actions of a child that a parent presents optionally.

/// A child action as seen by its presenting parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationAction<A> {
    /// The child is on screen and produced `A`.
    Presented(A),
    /// The child's binding was cleared from outside (backdrop tap, Esc).
    Dismissed,
}

impl<A> PresentationAction<A> {
    pub fn map<B>(self, f: impl FnOnce(A) -> B) -> PresentationAction<B> {
        match self {
            PresentationAction::Presented(action) => PresentationAction::Presented(f(action)),
            PresentationAction::Dismissed => PresentationAction::Dismissed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_wraps_presented_and_keeps_dismissed() {
        let presented = PresentationAction::Presented(2).map(|n| n * 10);
        assert_eq!(presented, PresentationAction::Presented(20));
        let dismissed = PresentationAction::<i32>::Dismissed.map(|n| n * 10);
        assert_eq!(dismissed, PresentationAction::Dismissed);
    }
}
