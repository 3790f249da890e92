//! Render-ready alert description.
//!
//! An [`AlertModel`] is what the presentation host draws. Its buttons carry
//! plain callbacks, so a model is built fresh for every pass from the
//! reducer-owned [`AlertState`](super::AlertState) and thrown away afterwards.

use std::fmt;
use uuid::Uuid;

/// Dialog content with live callbacks.
#[derive(Debug)]
pub struct AlertModel {
    pub title: Option<String>,
    pub message: Option<String>,
    pub buttons: Vec<AlertButton>,
    pub bottom_button: Option<AlertButton>,
}

impl AlertModel {
    pub fn new(
        title: Option<String>,
        message: Option<String>,
        buttons: Vec<AlertButton>,
        bottom_button: Option<AlertButton>,
    ) -> Self {
        Self {
            title,
            message,
            buttons,
            bottom_button,
        }
    }

    /// Look up the button behind a slot.
    pub fn button(&self, slot: ButtonSlot) -> Option<&AlertButton> {
        match slot {
            ButtonSlot::Content(index) => self.buttons.get(index),
            ButtonSlot::Bottom => self.bottom_button.as_ref(),
        }
    }

    /// Pressable slots in display order: content buttons, then the bottom one.
    pub fn slots(&self) -> Vec<ButtonSlot> {
        let mut slots: Vec<ButtonSlot> = (0..self.buttons.len()).map(ButtonSlot::Content).collect();
        if self.bottom_button.is_some() {
            slots.push(ButtonSlot::Bottom);
        }
        slots
    }

    /// Text-only snapshot for drawing.
    pub fn content(&self) -> AlertContent {
        AlertContent {
            title: self.title.clone(),
            message: self.message.clone(),
            buttons: self.buttons.iter().map(|b| b.text.clone()).collect(),
            bottom_button: self.bottom_button.as_ref().map(|b| b.text.clone()),
        }
    }
}

/// A button with a zero-argument side effect.
pub struct AlertButton {
    pub id: Uuid,
    pub text: String,
    action: Box<dyn Fn()>,
}

impl AlertButton {
    pub fn new(text: impl Into<String>, action: impl Fn() + 'static) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            action: Box::new(action),
        }
    }

    /// Button that does nothing when pressed.
    pub fn inert(text: impl Into<String>) -> Self {
        Self::new(text, || {})
    }

    pub fn press(&self) {
        (self.action)();
    }
}

impl fmt::Debug for AlertButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertButton")
            .field("id", &self.id)
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}

/// Position of a button inside the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonSlot {
    Content(usize),
    Bottom,
}

/// What the panel shows, without the callbacks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlertContent {
    pub title: Option<String>,
    pub message: Option<String>,
    pub buttons: Vec<String>,
    pub bottom_button: Option<String>,
}

impl AlertContent {
    pub fn slots(&self) -> Vec<ButtonSlot> {
        let mut slots: Vec<ButtonSlot> = (0..self.buttons.len()).map(ButtonSlot::Content).collect();
        if self.bottom_button.is_some() {
            slots.push(ButtonSlot::Bottom);
        }
        slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn button_ids_are_unique() {
        let a = AlertButton::inert("A");
        let b = AlertButton::inert("A");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn press_runs_action() {
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let button = AlertButton::new("Go", move || counter.set(counter.get() + 1));
        button.press();
        button.press();
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn slots_put_bottom_button_last() {
        let model = AlertModel::new(
            None,
            None,
            vec![AlertButton::inert("One"), AlertButton::inert("Two")],
            Some(AlertButton::inert("Cancel")),
        );
        assert_eq!(
            model.slots(),
            vec![ButtonSlot::Content(0), ButtonSlot::Content(1), ButtonSlot::Bottom]
        );
        assert_eq!(model.content().slots(), model.slots());
        assert_eq!(model.button(ButtonSlot::Bottom).map(|b| b.text.as_str()), Some("Cancel"));
        assert!(model.button(ButtonSlot::Content(5)).is_none());
    }
}
