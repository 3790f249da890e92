//! Reducer-owned alert description.
//!
//! [`AlertState`] mirrors [`AlertModel`] but its buttons carry domain action
//! values instead of callbacks, which keeps it `Clone` and comparable so it can
//! live inside a parent's state. Presence of the alert is presence of the
//! value: the parent stores `Option<AlertState<A>>` and sets it to `None` to
//! dismiss.

use std::rc::Rc;

use super::animation::{Animation, AnimationHint};
use super::dispatch::AlertDispatch;
use super::model::{AlertButton, AlertContent, AlertModel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertState<A> {
    pub title: Option<String>,
    pub message: Option<String>,
    pub buttons: Vec<Button<A>>,
    pub bottom_button: Option<Button<A>>,
    /// Whether pressing a button with an action also dismisses the alert.
    /// Individual buttons may override this.
    pub dismiss_on_action: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button<A> {
    pub text: String,
    pub action: Option<ButtonAction<A>>,
    pub dismiss_on_action: Option<bool>,
}

/// A domain action paired with how its effect should be animated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonAction<A> {
    pub action: A,
    pub animation: AnimationHint,
}

impl<A> ButtonAction<A> {
    /// Action that inherits the surrounding animation.
    pub fn new(action: A) -> Self {
        Self {
            action,
            animation: AnimationHint::Inherited,
        }
    }

    /// Action with an explicit animation, or explicitly none.
    pub fn with_animation(action: A, animation: Option<Animation>) -> Self {
        Self {
            action,
            animation: AnimationHint::Explicit(animation),
        }
    }
}

impl<A> Button<A> {
    pub fn new(text: impl Into<String>, action: Option<ButtonAction<A>>) -> Self {
        Self {
            text: text.into(),
            action,
            dismiss_on_action: None,
        }
    }

    /// Button without an action; pressing it does nothing.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, None)
    }

    /// Override the alert-wide dismissal policy for this button.
    ///
    /// The policy is looked up by action value, so buttons sharing an action
    /// share the override of the first of them. Give buttons that need
    /// different policies distinct actions.
    pub fn with_dismiss_on_action(mut self, dismiss: bool) -> Self {
        self.dismiss_on_action = Some(dismiss);
        self
    }
}

impl<A> AlertState<A> {
    pub fn new(
        title: Option<String>,
        message: Option<String>,
        buttons: Vec<Button<A>>,
        bottom_button: Option<Button<A>>,
    ) -> Self {
        Self {
            title,
            message,
            buttons,
            bottom_button,
            dismiss_on_action: false,
        }
    }

    pub fn with_dismiss_on_action(mut self, dismiss: bool) -> Self {
        self.dismiss_on_action = dismiss;
        self
    }

    /// Text-only snapshot of what the panel shows.
    pub fn content(&self) -> AlertContent {
        AlertContent {
            title: self.title.clone(),
            message: self.message.clone(),
            buttons: self.buttons.iter().map(|b| b.text.clone()).collect(),
            bottom_button: self.bottom_button.as_ref().map(|b| b.text.clone()),
        }
    }

    /// Buttons in display order, bottom button last.
    pub fn all_buttons(&self) -> impl Iterator<Item = &Button<A>> {
        self.buttons.iter().chain(self.bottom_button.iter())
    }
}

impl<A: PartialEq> AlertState<A> {
    /// Whether receiving `action` from this alert should dismiss it.
    ///
    /// The first button carrying `action` decides through its override;
    /// otherwise the alert-wide flag applies.
    pub fn dismisses_on(&self, action: &A) -> bool {
        self.all_buttons()
            .find(|button| {
                button
                    .action
                    .as_ref()
                    .is_some_and(|bound| bound.action == *action)
            })
            .and_then(|button| button.dismiss_on_action)
            .unwrap_or(self.dismiss_on_action)
    }
}

impl<A: Clone + 'static> AlertState<A> {
    /// Build the render model, routing every button through `dispatch`.
    pub fn converted(&self, dispatch: Rc<dyn AlertDispatch<A>>) -> AlertModel {
        AlertModel::new(
            self.title.clone(),
            self.message.clone(),
            self.buttons
                .iter()
                .map(|button| button.converted(&dispatch))
                .collect(),
            self.bottom_button
                .as_ref()
                .map(|button| button.converted(&dispatch)),
        )
    }
}

impl<A: Clone + 'static> Button<A> {
    fn converted(&self, dispatch: &Rc<dyn AlertDispatch<A>>) -> AlertButton {
        let Some(ButtonAction { action, animation }) = self.action.clone() else {
            return AlertButton::inert(self.text.clone());
        };
        let dispatch = Rc::clone(dispatch);
        AlertButton::new(self.text.clone(), move || match animation {
            AnimationHint::Inherited => dispatch.send(action.clone()),
            AnimationHint::Explicit(animation) => {
                dispatch.send_with_animation(action.clone(), animation)
            }
        })
    }
}
