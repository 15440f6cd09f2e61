//! Settings file handling

use tempfile::tempdir;
use vtu_sgpa::config::{Config, API_KEY_ENV};
use vtu_sgpa::error::SgpaError;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.endpoint, "http://localhost:3000");
    assert_eq!(config.timeout_seconds, 120);
    assert!(config.api_key.is_none());
}

#[test]
fn test_save_then_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.set_endpoint("https://sgpa.example.com".to_string()).unwrap();
    config.api_key = Some("abc".to_string());
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"endpoint": "https://x.example"}"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.endpoint, "https://x.example");
    assert_eq!(config.timeout_seconds, 120);
}

#[test]
fn test_broken_file_is_an_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "not json").unwrap();

    assert!(matches!(Config::load_from(&path), Err(SgpaError::JsonParse(_))));
}

#[test]
fn test_set_endpoint_rejects_other_schemes() {
    let mut config = Config::default();
    let err = config.set_endpoint("ftp://host".to_string()).unwrap_err();

    assert!(matches!(err, SgpaError::Config(_)));
    assert_eq!(config.endpoint, "http://localhost:3000");
}

#[test]
fn test_set_endpoint_trims() {
    let mut config = Config::default();
    config.set_endpoint("  https://sgpa.example.com/  ".to_string()).unwrap();
    assert_eq!(config.endpoint, "https://sgpa.example.com/");
    assert_eq!(config.client_config().parse_url(), "https://sgpa.example.com/api/parse_pdf");
}

/// Only test touching the key variable
#[test]
fn test_env_key_takes_precedence() {
    let config = Config {
        api_key: Some("stored".to_string()),
        ..Config::default()
    };

    std::env::set_var(API_KEY_ENV, "from-env");
    assert_eq!(config.get_api_key(), "from-env");

    // An empty variable does not hide the stored key
    std::env::set_var(API_KEY_ENV, "");
    assert_eq!(config.get_api_key(), "stored");

    std::env::remove_var(API_KEY_ENV);
    assert_eq!(config.get_api_key(), "stored");
}

#[test]
fn test_hand_edited_bad_endpoint_fails_on_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"endpoint": "ftp://x"}"#).unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, SgpaError::Config(ref msg) if msg.contains("ftp://x")));
}

#[test]
fn test_endpoint_override_is_not_saved() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");

    let mut config = Config::default();
    config.set_endpoint("https://stored.example".to_string()).unwrap();

    let client = config.client_config_with(Some(" http://one-off.example ")).unwrap();
    assert_eq!(client.endpoint, "http://one-off.example");
    assert_eq!(client.parse_url(), "http://one-off.example/api/parse_pdf");
    assert_eq!(config.endpoint, "https://stored.example");

    config.api_key = Some("K".to_string());
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.endpoint, "https://stored.example");
    assert_eq!(loaded.api_key.as_deref(), Some("K"));
}

#[test]
fn test_endpoint_override_is_validated() {
    let config = Config::default();
    assert!(matches!(
        config.client_config_with(Some("ftp://host")),
        Err(SgpaError::Config(_))
    ));
    assert_eq!(
        config.client_config_with(None).unwrap().endpoint,
        "http://localhost:3000"
    );
}
