//! Tests for loading configuration files from disk.

use std::io::Write;

use rewind::AppConfig;
use rewind_tictactoe::SortOrder;

#[test]
fn test_load_explicit_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "log_filter = \"debug\"\nsort_order = \"descending\"\ntick_rate_ms = 50")
        .expect("write config");

    let config = AppConfig::load(Some(file.path())).expect("valid config");
    assert_eq!(config.log_filter(), "debug");
    assert_eq!(*config.sort_order(), SortOrder::Descending);
    assert_eq!(*config.tick_rate_ms(), 50);
    assert!(*config.show_banner());
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("nope.toml");
    let err = AppConfig::load(Some(missing.as_path())).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "show_banner = \"sometimes\"").expect("write config");
    assert!(AppConfig::from_file(file.path()).is_err());
}
