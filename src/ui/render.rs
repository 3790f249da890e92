use crate::config::Screen;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::overlay::render_alert_overlay;
use crate::ui::theme::{ACCENT, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.screen()), header);
    frame.render_widget(Clear, body);
    frame.render_widget(body_widget(app), body);
    frame.render_widget(
        Footer::new().widget(footer, app.screen(), app.is_alert_visible()),
        footer,
    );

    if let Some(view) = app.overlay_view() {
        render_alert_overlay(frame, &view);
    }
}

fn body_widget(app: &App) -> Paragraph<'static> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let key_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(HEADER_SEPARATOR);

    let mut lines = vec![Line::from("")];
    match app.screen() {
        Screen::Simple => {
            lines.push(Line::from(vec![
                Span::styled("  [s] ", key_style),
                Span::styled("Show alert", text_style),
            ]));
            lines.push(Line::from(vec![
                Span::styled("  [d] ", key_style),
                Span::styled("Show alert with dimming close", text_style),
            ]));
        }
        Screen::Destination => {
            lines.push(Line::from(vec![
                Span::styled("  [s] ", key_style),
                Span::styled("Show alert", text_style),
            ]));
            let policy = if app.destination_state().dismiss_on_action {
                "buttons dismiss the alert"
            } else {
                "buttons keep the alert open"
            };
            lines.push(Line::from(Span::styled(format!("      ({})", policy), dim_style)));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Activity", dim_style)));
    if app.activity().is_empty() {
        lines.push(Line::from(Span::styled("  -", dim_style)));
    }
    for entry in app.activity().iter().rev() {
        lines.push(Line::from(Span::styled(format!("  {}", entry), text_style)));
    }

    Paragraph::new(lines).block(Block::default().borders(Borders::NONE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn draws_alert_panel_when_visible() {
        let mut config = Config::default();
        config.alert.animations = false;
        let mut app = App::new(&config);
        app.show_alert();

        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("This is a custom alert"));
        assert!(text.contains("Close"));
    }

    #[test]
    fn destination_footer_omits_dimming_hint() {
        let mut config = Config::default();
        config.ui.start_screen = Screen::Destination;
        let app = App::new(&config);
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Switch screen"));
        assert!(!text.contains("Dimming close"));
    }

    #[test]
    fn no_panel_when_hidden() {
        let app = App::new(&Config::default());
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Show alert"));
        assert!(!text.contains("This is a custom alert"));
    }
}
