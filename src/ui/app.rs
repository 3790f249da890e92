use crate::alert::{
    AlertContent, AlertDispatch, AlertHost, Animation, AnimationHint, ButtonSlot,
    PresentationAction, Transition, TransitionKind,
};
use crate::config::{AlertConfig, Config, Screen};
use crate::ui::destination::{
    CustomAlertAction, DestinationAction, DestinationEffect, DestinationIntent, DestinationReducer,
    DestinationScreenState,
};
use crate::ui::mvi::{Effect, Reducer};
use crate::ui::overlay::{Hit, OverlayView, PanelLayout};
use crate::ui::simple::{
    SimpleAlertIntent, SimpleAlertState, SimpleIntent, SimpleReducer, SimpleScreenState,
};
use ratatui::layout::Rect;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Number of activity lines kept for display.
pub const MAX_ACTIVITY: usize = 8;

/// An intent addressed to one of the screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppIntent {
    Simple(SimpleIntent),
    Destination(DestinationIntent),
}

/// Intent waiting to be reduced, with the animation it was sent with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueuedIntent {
    pub intent: AppIntent,
    pub animation: AnimationHint,
}

type IntentQueue = Rc<RefCell<VecDeque<QueuedIntent>>>;

/// [`AlertDispatch`] that lifts child actions into [`AppIntent`]s and queues
/// them for the next drain.
struct QueueDispatch<A> {
    queue: IntentQueue,
    lift: fn(A) -> AppIntent,
}

impl<A> AlertDispatch<A> for QueueDispatch<A> {
    fn send(&self, action: A) {
        self.queue.borrow_mut().push_back(QueuedIntent {
            intent: (self.lift)(action),
            animation: AnimationHint::Inherited,
        });
    }

    fn send_with_animation(&self, action: A, animation: Option<Animation>) {
        self.queue.borrow_mut().push_back(QueuedIntent {
            intent: (self.lift)(action),
            animation: AnimationHint::Explicit(animation),
        });
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result,
/// hands back the effect.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {{
        let (state, effect) = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
        $self.$field = state;
        effect
    }};
}

pub struct App {
    should_quit: bool,
    screen: Screen,
    size: Option<(u16, u16)>,
    alert_config: AlertConfig,
    /// State of the simple screen (MVI pattern).
    simple: SimpleScreenState,
    /// State of the destination screen (MVI pattern).
    destination: DestinationScreenState,
    queue: IntentQueue,
    /// Index into the presented alert's slots.
    focus: usize,
    transition: Option<Transition>,
    /// Snapshot of a dismissed alert while its exit transition runs.
    leaving: Option<AlertContent>,
    activity: VecDeque<String>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            screen: config.ui.start_screen,
            size: None,
            alert_config: config.alert.clone(),
            simple: SimpleScreenState::default(),
            destination: DestinationScreenState::new(config.alert.dismiss_on_action),
            queue: Rc::new(RefCell::new(VecDeque::new())),
            focus: 0,
            transition: None,
            leaving: None,
            activity: VecDeque::new(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn simple_state(&self) -> &SimpleScreenState {
        &self.simple
    }

    pub fn destination_state(&self) -> &DestinationScreenState {
        &self.destination
    }

    pub fn activity(&self) -> &VecDeque<String> {
        &self.activity
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// Switch screens. Ignored while an alert is shown.
    pub fn next_screen(&mut self) {
        if self.is_alert_visible() {
            return;
        }
        self.screen = self.screen.next();
        self.focus = 0;
        tracing::debug!(screen = self.screen.title(), "screen switched");
    }

    // ========================================================================
    // Presentation host
    // ========================================================================

    /// Bind the current screen's alert to a host for this pass.
    pub fn host(&self) -> AlertHost {
        match self.screen {
            Screen::Simple => {
                let state = self.simple.alert.as_ref().map(SimpleAlertState::alert_state);
                let dispatch: Rc<dyn AlertDispatch<SimpleAlertIntent>> = Rc::new(QueueDispatch {
                    queue: Rc::clone(&self.queue),
                    lift: |action: SimpleAlertIntent| AppIntent::Simple(SimpleIntent::Alert(action)),
                });
                let queue = Rc::clone(&self.queue);
                AlertHost::scoped(state.as_ref(), dispatch, move || {
                    queue.borrow_mut().push_back(QueuedIntent {
                        intent: AppIntent::Simple(SimpleIntent::Alert(
                            SimpleAlertIntent::DimmingTapped,
                        )),
                        animation: AnimationHint::Inherited,
                    });
                })
            }
            Screen::Destination => {
                let dispatch: Rc<dyn AlertDispatch<CustomAlertAction>> = Rc::new(QueueDispatch {
                    queue: Rc::clone(&self.queue),
                    lift: |action: CustomAlertAction| {
                        AppIntent::Destination(DestinationIntent::Destination(
                            PresentationAction::Presented(DestinationAction::CustomAlert(action)),
                        ))
                    },
                });
                let queue = Rc::clone(&self.queue);
                AlertHost::scoped(self.destination.custom_alert(), dispatch, move || {
                    queue.borrow_mut().push_back(QueuedIntent {
                        intent: AppIntent::Destination(DestinationIntent::Destination(
                            PresentationAction::Dismissed,
                        )),
                        animation: AnimationHint::Inherited,
                    });
                })
            }
        }
    }

    pub fn is_alert_visible(&self) -> bool {
        self.alert_content().is_some()
    }

    /// Content of the alert presented on the current screen.
    pub fn alert_content(&self) -> Option<AlertContent> {
        self.host().content()
    }

    /// What the overlay draws this frame, including a leaving panel.
    pub fn overlay_view(&self) -> Option<OverlayView> {
        let fraction = self
            .transition
            .as_ref()
            .map(Transition::visible_fraction)
            .unwrap_or(1.0);
        if let Some(content) = self.alert_content() {
            return Some(OverlayView {
                content,
                visible_fraction: fraction,
                focus: Some(self.focus),
            });
        }
        self.leaving.as_ref().map(|content| OverlayView {
            content: content.clone(),
            visible_fraction: fraction,
            focus: None,
        })
    }

    // ========================================================================
    // User input
    // ========================================================================

    /// "Show alert" on the current screen.
    pub fn show_alert(&mut self) {
        let intent = match self.screen {
            Screen::Simple => AppIntent::Simple(SimpleIntent::ButtonTapped {
                dim_tap_closes: false,
            }),
            Screen::Destination => AppIntent::Destination(DestinationIntent::ShowAlertButtonTapped),
        };
        self.send(intent);
    }

    /// "Show alert with dimming close" on the simple screen.
    pub fn show_dimming_alert(&mut self) {
        if self.screen == Screen::Simple {
            self.send(AppIntent::Simple(SimpleIntent::ButtonTapped {
                dim_tap_closes: true,
            }));
        }
    }

    pub fn move_focus(&mut self, direction: i32) {
        let len = self.host().slots().len();
        if len == 0 {
            self.focus = 0;
            return;
        }
        let current = self.focus.min(len - 1);
        self.focus = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    /// Press the focused button.
    pub fn press_focused(&mut self) {
        let host = self.host();
        if let Some(slot) = host.slots().get(self.focus).copied() {
            host.press(slot);
        }
        self.drain();
    }

    /// Press a specific slot, moving focus onto it.
    pub fn press_slot(&mut self, slot: ButtonSlot) {
        let host = self.host();
        if let Some(index) = host.slots().iter().position(|s| *s == slot) {
            self.focus = index;
            host.press(slot);
        }
        self.drain();
    }

    pub fn tap_backdrop(&mut self) {
        let mut host = self.host();
        if host.tap_backdrop() {
            self.drain();
        }
    }

    /// Left click at a terminal cell, hit-tested against the panel as
    /// currently drawn.
    pub fn on_click(&mut self, column: u16, row: u16) {
        let Some(view) = self.overlay_view() else {
            return;
        };
        // A leaving panel takes no clicks.
        if view.focus.is_none() {
            return;
        }
        let Some((cols, rows)) = self.size else {
            return;
        };
        let layout = PanelLayout::compute(
            &view.content,
            Rect::new(0, 0, cols, rows),
            view.visible_fraction,
        );
        match layout.hit(column, row) {
            Hit::Slot(slot) => self.press_slot(slot),
            Hit::Backdrop => self.tap_backdrop(),
            Hit::Panel => {}
        }
    }

    pub fn on_tick(&mut self) {
        if let Some(transition) = self.transition.as_mut() {
            if transition.tick() {
                self.transition = None;
                self.leaving = None;
            }
        }
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Queue an intent with the inherited animation and process the queue.
    pub fn send(&mut self, intent: AppIntent) {
        self.queue.borrow_mut().push_back(QueuedIntent {
            intent,
            animation: AnimationHint::Inherited,
        });
        self.drain();
    }

    /// Reduce queued intents one at a time until the queue is empty.
    pub fn drain(&mut self) {
        loop {
            let next = self.queue.borrow_mut().pop_front();
            let Some(queued) = next else {
                break;
            };
            self.apply(queued);
        }
    }

    fn apply(&mut self, queued: QueuedIntent) {
        let before = self.alert_content();
        match queued.intent {
            AppIntent::Simple(intent) => {
                match dispatch_mvi!(self, simple, SimpleReducer, intent) {
                    Effect::None => {}
                    Effect::Emit(never) => match never {},
                }
            }
            AppIntent::Destination(intent) => {
                let effect = dispatch_mvi!(self, destination, DestinationReducer, intent);
                if let Some(effect) = effect.into_option() {
                    self.run_effect(effect, queued.animation);
                }
            }
        }
        let visible_now = self.is_alert_visible();
        self.on_presentation_change(before, visible_now, queued.animation);
    }

    fn run_effect(&mut self, effect: DestinationEffect, animation: AnimationHint) {
        match effect {
            DestinationEffect::Performed(action) => {
                tracing::info!(
                    action = action.label(),
                    animation = %animation.describe(),
                    "custom alert action performed"
                );
                self.log_activity(format!(
                    "{} performed (animation: {})",
                    action.label(),
                    animation.describe()
                ));
            }
        }
    }

    fn on_presentation_change(
        &mut self,
        before: Option<AlertContent>,
        visible_now: bool,
        hint: AnimationHint,
    ) {
        let animation = hint.resolve(self.alert_config.inherited_animation());
        match (before, visible_now) {
            (None, true) => {
                self.focus = 0;
                self.leaving = None;
                self.transition = Transition::start(TransitionKind::Enter, animation);
                tracing::debug!(
                    animation = self.transition.map(|t| t.animation().label()),
                    "enter transition"
                );
                self.log_activity("alert presented".to_string());
            }
            (Some(content), false) => {
                self.focus = 0;
                self.transition = Transition::start(TransitionKind::Exit, animation);
                self.leaving = self.transition.map(|_| content);
                self.log_activity("alert dismissed".to_string());
            }
            _ => {}
        }
    }

    fn log_activity(&mut self, line: String) {
        if self.activity.len() == MAX_ACTIVITY {
            self.activity.pop_front();
        }
        self.activity.push_back(line);
    }
}
