pub mod clipboard;
pub mod config;
pub mod content;
pub mod logging;
pub mod shutdown;
pub mod submit;
pub mod ui;
