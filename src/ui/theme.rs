use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const ALERT_TITLE: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const BOTTOM_BUTTON: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const BACKDROP: Color = Color::Rgb(0x4b, 0x4b, 0x4b);
pub const PANEL_BG: Color = Color::Rgb(0x12, 0x12, 0x12);
