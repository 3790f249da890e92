//! Bottom-sheet rendering for the alert overlay.
//!
//! Geometry lives in [`PanelLayout`] so drawing and mouse hit-testing agree on
//! where every row is.

use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::alert::{AlertContent, ButtonSlot};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, ALERT_TITLE, BACKDROP, BOTTOM_BUTTON, HEADER_TEXT, PANEL_BG, POPUP_BORDER,
};

/// What the overlay should draw this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayView {
    pub content: AlertContent,
    /// Fraction of the panel on screen, from the running transition.
    pub visible_fraction: f32,
    /// Focused slot index; `None` while the panel is leaving.
    pub focus: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelRow {
    Title,
    Message(usize),
    Slot(ButtonSlot),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Slot(ButtonSlot),
    Panel,
    Backdrop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLayout {
    /// On-screen part of the panel, clipped to the frame.
    pub panel: Rect,
    /// Rows inside the panel, `None` for spacing.
    rows: Vec<Option<PanelRow>>,
}

impl PanelLayout {
    pub fn compute(content: &AlertContent, area: Rect, visible_fraction: f32) -> Self {
        let rows = panel_rows(content);
        // Top border, rows, one row of padding at the bottom edge.
        let full_height = rows.len() as u16 + 2;
        let visible = (full_height as f32 * visible_fraction.clamp(0.0, 1.0)).round() as u16;
        let height = visible.min(full_height).min(area.height);
        let panel = Rect {
            x: area.x,
            y: area.y + area.height - height,
            width: area.width,
            height,
        };
        Self { panel, rows }
    }

    pub fn rows(&self) -> &[Option<PanelRow>] {
        &self.rows
    }

    /// Screen row of the first content row.
    fn first_row_y(&self) -> u16 {
        self.panel.y.saturating_add(1)
    }

    pub fn hit(&self, column: u16, row: u16) -> Hit {
        if !self.panel.contains(Position::new(column, row)) {
            return Hit::Backdrop;
        }
        let Some(index) = row.checked_sub(self.first_row_y()) else {
            return Hit::Panel;
        };
        match self.rows.get(index as usize) {
            Some(Some(PanelRow::Slot(slot))) => Hit::Slot(*slot),
            _ => Hit::Panel,
        }
    }
}

fn panel_rows(content: &AlertContent) -> Vec<Option<PanelRow>> {
    let mut rows = Vec::new();
    if content.title.is_some() {
        rows.push(Some(PanelRow::Title));
    }
    if let Some(message) = &content.message {
        if !rows.is_empty() {
            rows.push(None);
        }
        rows.extend((0..message.lines().count().max(1)).map(|i| Some(PanelRow::Message(i))));
    }
    if !content.buttons.is_empty() {
        if !rows.is_empty() {
            rows.push(None);
        }
        rows.extend((0..content.buttons.len()).map(|i| Some(PanelRow::Slot(ButtonSlot::Content(i)))));
    }
    if content.bottom_button.is_some() {
        if !rows.is_empty() {
            rows.push(None);
        }
        rows.push(Some(PanelRow::Slot(ButtonSlot::Bottom)));
    }
    rows
}

/// Render the dimmed backdrop and the bottom sheet.
pub fn render_alert_overlay(frame: &mut Frame, view: &OverlayView) {
    let area = frame.area();
    if view.visible_fraction <= 0.0 || area.height == 0 {
        return;
    }

    frame.buffer_mut().set_style(
        area,
        Style::default().fg(BACKDROP).add_modifier(Modifier::DIM),
    );

    let layout = PanelLayout::compute(&view.content, area, view.visible_fraction);
    if layout.panel.height == 0 {
        return;
    }

    let focused_slot = view
        .focus
        .and_then(|index| view.content.slots().get(index).copied());
    let message_lines: Vec<&str> = view
        .content
        .message
        .as_deref()
        .map(|m| m.lines().collect())
        .unwrap_or_default();

    let lines: Vec<Line> = layout
        .rows()
        .iter()
        .map(|row| match row {
            None => Line::from(""),
            Some(PanelRow::Title) => Line::from(Span::styled(
                view.content.title.clone().unwrap_or_default(),
                Style::default().fg(ALERT_TITLE).add_modifier(Modifier::BOLD),
            ))
            .centered(),
            Some(PanelRow::Message(i)) => Line::from(Span::styled(
                message_lines.get(*i).copied().unwrap_or_default().to_string(),
                Style::default().fg(HEADER_TEXT),
            ))
            .centered(),
            Some(PanelRow::Slot(slot)) => button_line(&view.content, *slot, focused_slot == Some(*slot)),
        })
        .collect();

    frame.render_widget(Clear, layout.panel);
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(POPUP_BORDER))
        .style(Style::default().bg(PANEL_BG));
    frame.render_widget(Paragraph::new(lines).block(block), layout.panel);
}

fn button_line(content: &AlertContent, slot: ButtonSlot, focused: bool) -> Line<'static> {
    let (text, base) = match slot {
        ButtonSlot::Content(index) => (
            content.buttons.get(index).cloned().unwrap_or_default(),
            Style::default().fg(HEADER_TEXT),
        ),
        ButtonSlot::Bottom => (
            content.bottom_button.clone().unwrap_or_default(),
            Style::default().fg(BOTTOM_BUTTON),
        ),
    };
    let style = if focused {
        base.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD)
    } else {
        base
    };
    Line::from(Span::styled(format!("  {}  ", text), style)).centered()
}
