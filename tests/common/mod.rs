//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_endpoint;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use std::path::PathBuf;
use tempfile::TempDir;
use termfolio::submit::ContactMessage;
use termfolio::ui::app::App;
use termfolio::ui::input::handle_key;
use termfolio::ui::pages::{Page, PortfolioSettings};

// -- App helpers --------------------------------------------------------------

pub fn make_app() -> App {
    App::new(PortfolioSettings::default())
}

pub fn make_app_on(page: Page) -> App {
    App::new(PortfolioSettings {
        start_page: page,
        ..PortfolioSettings::default()
    })
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn press_ctrl(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Route a key through the same handler the runtime uses.
pub fn press(app: &mut App, code: KeyCode) {
    handle_key(app, press_key(code));
}

pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

/// Open the contact form and fill in a valid message, leaving focus on Send.
pub fn fill_contact_form(app: &mut App) {
    press(app, KeyCode::Char('i'));
    type_text(app, "Ada Lovelace");
    press(app, KeyCode::Tab);
    type_text(app, "ada@example.com");
    press(app, KeyCode::Tab);
    press(app, KeyCode::Tab);
    type_text(app, "Hello from the tests");
    press(app, KeyCode::Tab);
}

pub fn sample_message() -> ContactMessage {
    ContactMessage {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        subject: Some("Collaboration".to_string()),
        message: "Hello from the tests".to_string(),
    }
}

// -- Files --------------------------------------------------------------------

/// Write `content` to a `config.toml` inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
