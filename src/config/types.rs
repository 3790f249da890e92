use serde::{Deserialize, Serialize};

use crate::alert::Animation;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub alert: AlertConfig,
}

/// Terminal shell settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds; one animation frame per tick (default: 50).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Capture the mouse so clicks can press buttons and tap the backdrop.
    #[serde(default = "default_true")]
    pub mouse: bool,
    /// Screen shown at startup.
    #[serde(default)]
    pub start_screen: Screen,
}

/// Alert presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertConfig {
    /// Dismiss the destination alert whenever one of its buttons fires.
    #[serde(default)]
    pub dismiss_on_action: bool,
    /// Animate panel transitions at all.
    #[serde(default = "default_true")]
    pub animations: bool,
    /// Animation used when a dispatch inherits its animation.
    #[serde(default)]
    pub default_animation: Animation,
}

impl AlertConfig {
    /// The animation an `Inherited` hint resolves to.
    pub fn inherited_animation(&self) -> Option<Animation> {
        self.animations.then_some(self.default_animation)
    }
}

/// The two demo screens.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Simple,
    Destination,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Simple => "Simple",
            Screen::Destination => "Destination",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Screen::Simple => Screen::Destination,
            Screen::Destination => Screen::Simple,
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_true() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            mouse: true,
            start_screen: Screen::default(),
        }
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            dismiss_on_action: false,
            animations: true,
            default_animation: Animation::default(),
        }
    }
}
