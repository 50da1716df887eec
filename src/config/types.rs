use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::content::PROFILE;
use crate::ui::pages::Page;
use crate::ui::typewriter::DEFAULT_ROLES;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub hero: HeroConfig,
    pub reveal: RevealConfig,
    pub ui: UiConfig,
    pub contact: ContactConfig,
}

/// Home page hero: name and the typewriter role cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub name: String,
    /// Roles typed in rotation; must be non-empty.
    pub roles: Vec<String>,
    pub type_speed_ms: u64,
    /// Must be shorter than `type_speed_ms`.
    pub delete_speed_ms: u64,
    /// Pause with a full role on screen.
    pub dwell_ms: u64,
}

/// Visible fraction at which a section latches as revealed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub about_threshold: f64,
    pub timeline_threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Page shown at start-up (`index`, `about`, `projects`, ...).
    pub start_page: Page,
    /// How long notices stay on screen.
    pub notice_seconds: u64,
    /// Capture the mouse for wheel scrolling.
    pub mouse: bool,
}

/// Where contact form messages go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitterKind {
    #[default]
    Outbox,
    Webhook,
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub submitter: SubmitterKind,
    /// Outbox file; defaults to the platform data dir.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outbox_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    pub timeout_seconds: u64,
}

impl ContactConfig {
    pub fn outbox_path(&self) -> PathBuf {
        self.outbox_path.clone().unwrap_or_else(|| {
            let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
            data_dir.join("termfolio").join("outbox.jsonl")
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            name: PROFILE.name.to_string(),
            roles: DEFAULT_ROLES.iter().map(|role| role.to_string()).collect(),
            type_speed_ms: 100,
            delete_speed_ms: 50,
            dwell_ms: 2000,
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            about_threshold: 0.2,
            timeline_threshold: 0.3,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            start_page: Page::Home,
            notice_seconds: 4,
            mouse: true,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submitter: SubmitterKind::Outbox,
            outbox_path: None,
            webhook_url: None,
            timeout_seconds: 10,
        }
    }
}
