//! Tests for loading configuration files.

use std::io::Write;
use std::time::Duration;
use tempfile::{NamedTempFile, TempDir};
use tictactoe_rounds::{AppConfig, FirstMoverPolicy, NotificationKind};

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let config = AppConfig::load_or_default(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, AppConfig::default());
    assert_eq!(*config.first_mover_policy(), FirstMoverPolicy::KeepFirstMover);
    assert_eq!(config.tick_rate(), Duration::from_millis(100));
    assert_eq!(
        config.toasts().for_kind(NotificationKind::RoundOver),
        Duration::from_millis(4000)
    );
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "first_mover_policy = \"alternate\"").expect("write");
    writeln!(file, "[toasts]").expect("write");
    writeln!(file, "round_over_ms = 1500").expect("write");

    let config = AppConfig::from_file(file.path()).expect("valid config");
    assert_eq!(*config.first_mover_policy(), FirstMoverPolicy::AlternateFirstMover);
    assert_eq!(
        config.toasts().for_kind(NotificationKind::RoundOver),
        Duration::from_millis(1500)
    );
    assert_eq!(
        config.toasts().for_kind(NotificationKind::NewGame),
        Duration::from_millis(3000)
    );
    assert_eq!(*config.tick_rate_ms(), 100);
}

#[test]
fn test_unknown_policy_is_rejected() {
    let err = AppConfig::from_toml("first_mover_policy = \"sometimes\"").unwrap_err();
    assert!(err.message.contains("Failed to parse config"), "{}", err);
}

#[test]
fn test_serialized_defaults_parse_back() {
    let text = AppConfig::default().to_toml().expect("serialize");
    assert!(text.contains("first_mover_policy = \"keep\""));
    assert_eq!(AppConfig::from_toml(&text).expect("parse"), AppConfig::default());
}

#[test]
fn test_policy_override() {
    let config = AppConfig::default().with_policy(FirstMoverPolicy::AlternateFirstMover);
    assert_eq!(*config.first_mover_policy(), FirstMoverPolicy::AlternateFirstMover);
}
