//! Shared test utilities.

#![allow(dead_code)]

use custom_alert::alert::{AlertDispatch, Animation};
use custom_alert::config::{Config, Screen};
use custom_alert::ui::app::App;
use std::cell::RefCell;
use std::path::PathBuf;
use tempfile::TempDir;

/// `AlertDispatch` that records every call.
pub struct Recorder<A> {
    pub sent: RefCell<Vec<A>>,
    pub sent_with_animation: RefCell<Vec<(A, Option<Animation>)>>,
}

impl<A> Recorder<A> {
    pub fn new() -> Self {
        Self {
            sent: RefCell::new(Vec::new()),
            sent_with_animation: RefCell::new(Vec::new()),
        }
    }
}

impl<A> AlertDispatch<A> for Recorder<A> {
    fn send(&self, action: A) {
        self.sent.borrow_mut().push(action);
    }

    fn send_with_animation(&self, action: A, animation: Option<Animation>) {
        self.sent_with_animation.borrow_mut().push((action, animation));
    }
}

/// App on `screen` with animations off so presentation changes are instant.
pub fn instant_app(screen: Screen) -> App {
    let mut config = Config::default();
    config.ui.start_screen = screen;
    config.alert.animations = false;
    App::new(&config)
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}
