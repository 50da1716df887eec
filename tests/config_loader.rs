mod common;

use std::time::Duration;

use common::temp_config;
use tempfile::TempDir;
use termfolio::config::{Config, ConfigError, SubmitterKind};
use termfolio::ui::pages::Page;

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.hero.type_speed_ms, 100);
    assert_eq!(config.hero.delete_speed_ms, 50);
    assert_eq!(config.hero.dwell_ms, 2000);
    assert!(!config.hero.roles.is_empty());
    assert_eq!(config.reveal.about_threshold, 0.2);
    assert_eq!(config.reveal.timeline_threshold, 0.3);
    assert_eq!(config.ui.start_page, Page::Home);
    assert_eq!(config.ui.notice_seconds, 4);
    assert!(config.ui.mouse);
    assert_eq!(config.contact.submitter, SubmitterKind::Outbox);
    assert!(config.contact.webhook_url.is_none());
    assert!(config.contact.outbox_path().ends_with("termfolio/outbox.jsonl"));
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("termfolio/config.toml"));
}

#[test]
fn test_default_config_validates() {
    let settings = Config::default().settings().expect("defaults are valid");
    assert_eq!(settings.start_page, Page::Home);
    assert_eq!(settings.notice_duration, Duration::from_secs(4));
    assert_eq!(settings.timing.dwell, Duration::from_millis(2000));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let config = Config::load_from(&dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let (_dir, path) = temp_config(
        r#"
[hero]
name = "Grace Hopper"
roles = ["Compiler Writer", "Admiral"]

[ui]
start_page = "projects"
"#,
    );
    let config = Config::load_from(&path).expect("valid config");
    assert_eq!(config.hero.name, "Grace Hopper");
    assert_eq!(config.hero.roles, vec!["Compiler Writer", "Admiral"]);
    assert_eq!(config.hero.type_speed_ms, 100);
    assert_eq!(config.ui.start_page, Page::Projects);
    assert_eq!(config.reveal, Config::default().reveal);

    let settings = config.settings().expect("settings");
    assert_eq!(settings.roles.role(1), "Admiral");
    assert_eq!(settings.roles.role(2), "Compiler Writer");
}

#[test]
fn test_index_route_selects_home() {
    let (_dir, path) = temp_config("[ui]\nstart_page = \"index\"\n");
    let config = Config::load_from(&path).expect("valid config");
    assert_eq!(config.ui.start_page, Page::Home);
}

#[test]
fn test_webhook_section_parses() {
    let (_dir, path) = temp_config(
        r#"
[contact]
submitter = "webhook"
webhook_url = "https://forms.example.com/hook"
timeout_seconds = 3
"#,
    );
    let config = Config::load_from(&path).expect("valid config");
    assert_eq!(config.contact.submitter, SubmitterKind::Webhook);
    assert_eq!(config.contact.timeout(), Duration::from_secs(3));
}

fn validation_message(config: &Config) -> String {
    match config.validate() {
        Err(ConfigError::ValidationError { message }) => message,
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[test]
fn test_validation_rejects_empty_roles() {
    let mut config = Config::default();
    config.hero.roles.clear();
    validation_message(&config);

    config.hero.roles = vec!["Engineer".into(), "   ".into()];
    validation_message(&config);
}

#[test]
fn test_validation_rejects_slow_deleting() {
    let mut config = Config::default();
    config.hero.delete_speed_ms = config.hero.type_speed_ms;
    validation_message(&config);
}

#[test]
fn test_validation_rejects_out_of_range_thresholds() {
    let mut config = Config::default();
    config.reveal.about_threshold = 0.0;
    assert!(validation_message(&config).contains("reveal.about_threshold"));

    let mut config = Config::default();
    config.reveal.timeline_threshold = 1.5;
    assert!(validation_message(&config).contains("reveal.timeline_threshold"));

    let mut config = Config::default();
    config.reveal.timeline_threshold = 1.0;
    assert!(config.validate().is_ok());
}

#[test]
fn test_validation_rejects_blank_name() {
    let mut config = Config::default();
    config.hero.name = "  ".into();
    validation_message(&config);
}

#[test]
fn test_validation_requires_webhook_url() {
    let mut config = Config::default();
    config.contact.submitter = SubmitterKind::Webhook;
    assert!(validation_message(&config).contains("webhook_url"));

    config.contact.webhook_url = Some("ftp://example.com".into());
    validation_message(&config);

    config.contact.webhook_url = Some("http://localhost:8080/contact".into());
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_file_is_rejected_on_load() {
    let (_dir, path) = temp_config("[hero]\nroles = []\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_malformed_toml_is_a_parse_error() {
    let (_dir, path) = temp_config("[hero\nname = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_unknown_submitter_is_a_parse_error() {
    let (_dir, path) = temp_config("[contact]\nsubmitter = \"carrier-pigeon\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_printed_config_loads_back() {
    let mut config = Config::default();
    config.ui.start_page = Page::Certifications;
    config.contact.outbox_path = Some("/tmp/termfolio-outbox.jsonl".into());

    let printed = config.to_toml_string().expect("serializable");
    let (_dir, path) = temp_config(&printed);
    assert_eq!(Config::load_from(&path).expect("reloads"), config);
}
