use crate::config::Screen;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const SIMPLE_HINTS: &str = " s: Show alert │ d: Dimming close │ Tab: Switch screen │ q: Quit";
const DESTINATION_HINTS: &str = " s: Show alert │ Tab: Switch screen │ q: Quit";
const ALERT_HINTS: &str = " ↑/↓: Move │ Enter: Press │ 1-9: Button │ b: Bottom │ Esc: Tap backdrop";

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, screen: Screen, alert_visible: bool) -> Paragraph<'static> {
        let hints = hints(screen, alert_visible);
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

/// Key hints for what the current screen accepts.
fn hints(screen: Screen, alert_visible: bool) -> &'static str {
    match (alert_visible, screen) {
        (true, _) => ALERT_HINTS,
        (false, Screen::Simple) => SIMPLE_HINTS,
        (false, Screen::Destination) => DESTINATION_HINTS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimming_hint_only_on_simple_screen() {
        assert!(hints(Screen::Simple, false).contains("Dimming close"));
        assert!(!hints(Screen::Destination, false).contains("Dimming close"));
    }

    #[test]
    fn alert_hints_win_on_both_screens() {
        assert_eq!(hints(Screen::Simple, true), ALERT_HINTS);
        assert_eq!(hints(Screen::Destination, true), ALERT_HINTS);
    }
}
