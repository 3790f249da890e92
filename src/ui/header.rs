use crate::config::Screen;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, active: Screen) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let tab = |screen: Screen| {
            let style = if screen == active {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                text_style
            };
            Span::styled(screen.title(), style)
        };
        let line = Line::from(vec![
            Span::styled("  Custom Alert", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            tab(Screen::Simple),
            Span::styled("  │  ", separator_style),
            tab(Screen::Destination),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
