use crate::alert::ButtonSlot;
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.is_alert_visible() {
        match key.code {
            // Esc stands in for a tap on the dimmed backdrop.
            KeyCode::Esc => app.tap_backdrop(),
            KeyCode::Up | KeyCode::BackTab => app.move_focus(-1),
            KeyCode::Down | KeyCode::Tab => app.move_focus(1),
            KeyCode::Enter | KeyCode::Char(' ') => app.press_focused(),
            KeyCode::Char('b') => app.press_slot(ButtonSlot::Bottom),
            KeyCode::Char(ch) if ch.is_ascii_digit() => {
                let number = ch.to_digit(10).unwrap_or(0) as usize;
                if number > 0 {
                    app.press_slot(ButtonSlot::Content(number - 1));
                }
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Tab | KeyCode::BackTab => app.next_screen(),
        KeyCode::Char('s') => app.show_alert(),
        KeyCode::Char('d') => app.show_dimming_alert(),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        app.on_click(mouse.column, mouse.row);
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Screen};
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn make_app() -> App {
        App::new(&Config::default())
    }

    #[test]
    fn ctrl_q_quits_even_with_alert() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('s')));
        assert!(app.is_alert_visible());
        handle_key(
            &mut app,
            KeyEvent {
                modifiers: KeyModifiers::CONTROL,
                ..press(KeyCode::Char('q'))
            },
        );
        assert!(app.should_quit());
    }

    #[test]
    fn plain_q_is_swallowed_by_alert() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('s')));
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.should_quit());
    }

    #[test]
    fn tab_switches_screen_when_idle() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.screen(), Screen::Destination);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = make_app();
        handle_key(
            &mut app,
            KeyEvent {
                kind: KeyEventKind::Release,
                ..press(KeyCode::Char('s'))
            },
        );
        assert!(!app.is_alert_visible());
    }

    #[test]
    fn enter_presses_focused_close_button() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('s')));
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(!app.is_alert_visible());
    }

    #[test]
    fn esc_respects_dimming_flag() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('s')));
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(app.is_alert_visible());

        handle_key(&mut app, press(KeyCode::Enter));
        handle_key(&mut app, press(KeyCode::Char('d')));
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(!app.is_alert_visible());
    }
}
