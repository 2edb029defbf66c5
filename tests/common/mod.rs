//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseEvent, MouseEventKind,
};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use ventured::animation::{Component, Scheduler};
use ventured::config::Config;
use ventured::links::NavigationTarget;
use ventured::navigate::{NavigateError, Opener};
use ventured::ui::app::App;

pub const MS: Duration = Duration::from_millis(1);

/// A key press with no modifiers.
pub fn press(code: KeyCode) -> KeyEvent {
    press_with(code, KeyModifiers::NONE)
}

pub fn press_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn char_key(ch: char) -> KeyEvent {
    press(KeyCode::Char(ch))
}

pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Default configuration without the random backdrop.
pub fn quiet_config() -> Config {
    let mut config = Config::default();
    config.animation.rain = false;
    config
}

/// Mounted page at `width` x `height`.
pub fn mounted_app(config: &Config, width: u16, height: u16) -> App {
    let mut app = App::new(config, None);
    app.on_resize(width, height);
    app.mount();
    app
}

/// Advance `scheduler` by `step` and deliver the frame to `component`.
pub fn frame<C: Component>(scheduler: &mut Scheduler, component: &mut C, step: Duration) -> bool {
    let fired = scheduler.advance_by(step);
    component.on_frame(&fired, scheduler)
}

/// Write `content` to a `config.toml` inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

/// Opener that records what it was asked to open.
#[derive(Default)]
pub struct RecordingOpener {
    opened: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingOpener {
    pub fn failing() -> Self {
        Self {
            opened: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().clone()
    }
}

impl Opener for RecordingOpener {
    async fn open(&self, target: NavigationTarget) -> Result<(), NavigateError> {
        self.opened.lock().push(target.href());
        if self.fail {
            return Err(NavigateError::Spawn {
                program: "recording".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "blocked"),
            });
        }
        Ok(())
    }
}
