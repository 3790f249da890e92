//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError, Screen};

#[derive(Debug, Parser)]
#[command(
    name = "custom-alert",
    version,
    about = "Bottom-sheet alert overlay driven by reducer-owned presentation state"
)]
pub struct Cli {
    /// Config file path (default: ~/.config/custom-alert/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Screen to open at startup
    #[arg(long, value_enum, value_name = "SCREEN")]
    pub screen: Option<Screen>,

    /// Dismiss the destination alert whenever one of its buttons fires
    #[arg(long)]
    pub dismiss_on_action: bool,

    /// Disable panel slide animations
    #[arg(long)]
    pub no_animations: bool,

    /// Do not capture the mouse
    #[arg(long)]
    pub no_mouse: bool,
}

impl Cli {
    /// Load the config file this invocation points at and apply overrides.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        Ok(self.apply(config))
    }

    /// Flags override the file; absent flags leave it untouched.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(screen) = self.screen {
            config.ui.start_screen = screen;
        }
        if self.dismiss_on_action {
            config.alert.dismiss_on_action = true;
        }
        if self.no_animations {
            config.alert.animations = false;
        }
        if self.no_mouse {
            config.ui.mouse = false;
        }
        config
    }
}
