mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::Recorder;
use custom_alert::alert::{
    AlertDispatch, AlertHost, AlertModel, AlertState, Animation, Button, ButtonAction,
    ButtonSlot, FnDispatch, Visibility,
};
use custom_alert::ui::destination::{custom_alert, CustomAlertAction};

fn convert(state: &AlertState<CustomAlertAction>) -> (Rc<Recorder<CustomAlertAction>>, AlertModel) {
    let recorder = Rc::new(Recorder::new());
    let dispatch: Rc<dyn AlertDispatch<CustomAlertAction>> = recorder.clone();
    (recorder, state.converted(dispatch))
}

#[test]
fn explicit_animation_goes_through_send_with_animation() {
    let state = AlertState::new(
        Some("T".to_string()),
        None,
        vec![Button::new(
            "A",
            Some(ButtonAction::with_animation(
                CustomAlertAction::Action1,
                Some(Animation::Default),
            )),
        )],
        None,
    );
    let (recorder, model) = convert(&state);

    assert_eq!(model.buttons.len(), 1);
    model.buttons[0].press();

    assert_eq!(
        *recorder.sent_with_animation.borrow(),
        vec![(CustomAlertAction::Action1, Some(Animation::Default))]
    );
    assert!(recorder.sent.borrow().is_empty());
}

#[test]
fn inherited_animation_goes_through_send() {
    let state = AlertState::new(
        None,
        None,
        vec![Button::new(
            "Three",
            Some(ButtonAction::new(CustomAlertAction::Action3)),
        )],
        None,
    );
    let (recorder, model) = convert(&state);
    model.buttons[0].press();

    assert_eq!(*recorder.sent.borrow(), vec![CustomAlertAction::Action3]);
    assert!(recorder.sent_with_animation.borrow().is_empty());
}

#[test]
fn explicit_no_animation_is_still_explicit() {
    let state = AlertState::new(
        None,
        None,
        Vec::new(),
        Some(Button::new(
            "Bottom",
            Some(ButtonAction::with_animation(CustomAlertAction::BottomAction, None)),
        )),
    );
    let (recorder, model) = convert(&state);
    model.bottom_button.as_ref().unwrap().press();

    assert_eq!(
        *recorder.sent_with_animation.borrow(),
        vec![(CustomAlertAction::BottomAction, None)]
    );
    assert!(recorder.sent.borrow().is_empty());
}

#[test]
fn conversion_preserves_count_order_and_text() {
    let state = custom_alert(false);
    let (_recorder, model) = convert(&state);

    let texts: Vec<&str> = model.buttons.iter().map(|b| b.text.as_str()).collect();
    let expected: Vec<&str> = state.buttons.iter().map(|b| b.text.as_str()).collect();
    assert_eq!(texts, expected);
    assert_eq!(model.title, state.title);
    assert_eq!(model.message, state.message);
    assert_eq!(
        model.bottom_button.as_ref().map(|b| b.text.as_str()),
        state.bottom_button.as_ref().map(|b| b.text.as_str())
    );
    assert_eq!(model.content(), state.content());
}

#[test]
fn button_without_action_dispatches_nothing() {
    let state = AlertState::<CustomAlertAction>::new(None, None, vec![Button::plain("OK")], None);
    let (recorder, model) = convert(&state);
    model.buttons[0].press();
    assert!(recorder.sent.borrow().is_empty());
    assert!(recorder.sent_with_animation.borrow().is_empty());
}

#[test]
fn each_press_dispatches_once() {
    let (recorder, model) = convert(&custom_alert(false));
    model.buttons[1].press();
    model.buttons[1].press();
    assert_eq!(
        *recorder.sent_with_animation.borrow(),
        vec![
            (CustomAlertAction::Action2, None),
            (CustomAlertAction::Action2, None)
        ]
    );
}

#[test]
fn fn_dispatch_routes_to_closures() {
    let sent = Rc::new(RefCell::new(Vec::new()));
    let animated = Rc::new(RefCell::new(Vec::new()));
    let s = Rc::clone(&sent);
    let a = Rc::clone(&animated);
    let dispatch: Rc<dyn AlertDispatch<CustomAlertAction>> = Rc::new(FnDispatch::new(
        move |action: CustomAlertAction| s.borrow_mut().push(action),
        move |action: CustomAlertAction, animation: Option<Animation>| {
            a.borrow_mut().push((action, animation))
        },
    ));
    let model = custom_alert(false).converted(dispatch);
    model.buttons[2].press();
    model.bottom_button.as_ref().unwrap().press();

    assert_eq!(*sent.borrow(), vec![CustomAlertAction::Action3]);
    assert_eq!(
        *animated.borrow(),
        vec![(CustomAlertAction::BottomAction, Some(Animation::Spring))]
    );
}

#[test]
fn equal_states_compare_equal() {
    assert_eq!(custom_alert(false), custom_alert(false));
}

#[test]
fn any_differing_field_breaks_equality() {
    let base = custom_alert(false);

    let mut other = base.clone();
    other.title = Some("Other".to_string());
    assert_ne!(base, other);

    let mut other = base.clone();
    other.message = None;
    assert_ne!(base, other);

    let mut other = base.clone();
    other.buttons[0].text = "Renamed".to_string();
    assert_ne!(base, other);

    let mut other = base.clone();
    other.buttons[0].action = Some(ButtonAction::new(CustomAlertAction::Action2));
    assert_ne!(base, other);

    let mut other = base.clone();
    other.bottom_button = None;
    assert_ne!(base, other);
}

#[test]
fn scoped_host_presses_through_dispatch_and_dismisses_separately() {
    let recorder = Rc::new(Recorder::new());
    let dispatch: Rc<dyn AlertDispatch<CustomAlertAction>> = recorder.clone();
    let dismissed = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&dismissed);
    let state = custom_alert(false);

    let mut host = AlertHost::scoped(Some(&state), dispatch, move || {
        *counter.borrow_mut() += 1;
    });
    assert_eq!(host.visibility(), Visibility::Visible);

    assert!(host.press(ButtonSlot::Content(2)));
    assert_eq!(*recorder.sent.borrow(), vec![CustomAlertAction::Action3]);

    assert!(host.tap_backdrop());
    assert_eq!(host.visibility(), Visibility::Hidden);
    assert_eq!(*dismissed.borrow(), 1);
    // The backdrop never fires a domain action.
    assert_eq!(recorder.sent.borrow().len(), 1);
    assert!(recorder.sent_with_animation.borrow().is_empty());
}

#[test]
fn scoped_host_without_state_is_hidden() {
    let dispatch: Rc<dyn AlertDispatch<CustomAlertAction>> = Rc::new(Recorder::new());
    let host = AlertHost::scoped(None, dispatch, || {});
    assert_eq!(host.visibility(), Visibility::Hidden);
}
