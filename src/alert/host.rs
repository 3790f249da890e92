//! Presentation host: the overlay bound to an optional alert.
//!
//! The host is rebuilt from the parent's state on every pass. It owns the
//! bound `Option<AlertModel>` for that pass and knows one way to write back:
//! clearing the binding, which it reports through `on_dismiss`. Domain actions
//! never go through the host; they flow from the converted buttons straight
//! into the parent's dispatch.

use std::rc::Rc;

use super::dispatch::AlertDispatch;
use super::model::{AlertContent, AlertModel, ButtonSlot};
use super::state::AlertState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
}

pub struct AlertHost {
    item: Option<AlertModel>,
    on_dismiss: Box<dyn Fn()>,
}

impl AlertHost {
    /// Bind an optional model. `on_dismiss` runs when the host clears it.
    pub fn bind(item: Option<AlertModel>, on_dismiss: impl Fn() + 'static) -> Self {
        Self {
            item,
            on_dismiss: Box::new(on_dismiss),
        }
    }

    /// Bind the parent's optional alert state, converting it for this pass.
    pub fn scoped<A: Clone + 'static>(
        state: Option<&AlertState<A>>,
        dispatch: Rc<dyn AlertDispatch<A>>,
        on_dismiss: impl Fn() + 'static,
    ) -> Self {
        Self::bind(state.map(|state| state.converted(dispatch)), on_dismiss)
    }

    pub fn visibility(&self) -> Visibility {
        if self.item.is_some() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visibility() == Visibility::Visible
    }

    pub fn content(&self) -> Option<AlertContent> {
        self.item.as_ref().map(AlertModel::content)
    }

    pub fn slots(&self) -> Vec<ButtonSlot> {
        self.item.as_ref().map(AlertModel::slots).unwrap_or_default()
    }

    /// Tap on the dimmed backdrop: clear the binding without firing any
    /// button. Returns whether anything was dismissed.
    pub fn tap_backdrop(&mut self) -> bool {
        if self.item.take().is_none() {
            return false;
        }
        tracing::debug!("alert dismissed from backdrop");
        (self.on_dismiss)();
        true
    }

    /// Press the button in `slot`. Returns whether a button was found.
    pub fn press(&self, slot: ButtonSlot) -> bool {
        let Some(button) = self.item.as_ref().and_then(|item| item.button(slot)) else {
            return false;
        };
        tracing::debug!(text = %button.text, id = %button.id, "alert button pressed");
        button.press();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::model::AlertButton;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, Rc<Cell<u32>>) {
        (Rc::new(Cell::new(0)), Rc::new(Cell::new(0)))
    }

    #[test]
    fn absent_binding_is_hidden() {
        let mut host = AlertHost::bind(None, || {});
        assert_eq!(host.visibility(), Visibility::Hidden);
        assert!(host.slots().is_empty());
        assert!(!host.tap_backdrop());
        assert!(!host.press(ButtonSlot::Bottom));
    }

    #[test]
    fn backdrop_clears_without_firing_buttons() {
        let (pressed, dismissed) = counter();
        let p = Rc::clone(&pressed);
        let d = Rc::clone(&dismissed);
        let model = AlertModel::new(
            Some("Title".into()),
            None,
            vec![AlertButton::new("A", move || p.set(p.get() + 1))],
            None,
        );
        let mut host = AlertHost::bind(Some(model), move || d.set(d.get() + 1));
        assert!(host.is_visible());
        assert_eq!(
            host.content().map(|c| c.buttons),
            Some(vec!["A".to_string()])
        );

        assert!(host.tap_backdrop());
        assert_eq!(host.visibility(), Visibility::Hidden);
        assert!(host.content().is_none());
        assert_eq!(dismissed.get(), 1);
        assert_eq!(pressed.get(), 0);

        // A second tap has nothing left to dismiss.
        assert!(!host.tap_backdrop());
        assert_eq!(dismissed.get(), 1);
    }

    #[test]
    fn press_runs_only_the_chosen_button() {
        let (first, bottom) = counter();
        let f = Rc::clone(&first);
        let b = Rc::clone(&bottom);
        let model = AlertModel::new(
            None,
            None,
            vec![AlertButton::new("A", move || f.set(f.get() + 1))],
            Some(AlertButton::new("Cancel", move || b.set(b.get() + 1))),
        );
        let host = AlertHost::bind(Some(model), || {});

        assert!(host.press(ButtonSlot::Bottom));
        assert_eq!((first.get(), bottom.get()), (0, 1));
        assert!(!host.press(ButtonSlot::Content(3)));
        assert!(host.press(ButtonSlot::Content(0)));
        assert_eq!((first.get(), bottom.get()), (1, 1));
    }
}
