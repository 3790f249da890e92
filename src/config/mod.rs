mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{AlertConfig, Config, Screen, UiConfig};
