//! Integration tests for settings persistence.
//!
//! These tests verify the complete flow of saving and loading provider
//! settings through the file-based repository.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use pretty_assertions::assert_eq;
use spotter_domain::ProviderSettings;
use spotter_infrastructure::SettingsRepository;
use tempfile::tempdir;

#[tokio::test]
async fn save_and_load_round_trips() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let repo = SettingsRepository::with_config_dir(temp_dir.path().join("spotter"));

    let settings = ProviderSettings {
        geolocation_token: Some("tok-123".to_string()),
        visit_store_url: Some("https://store.example".to_string()),
        visit_store_token: Some("bearer-456".to_string()),
        ..ProviderSettings::default()
    };
    settings.validate().expect("settings should be valid");

    repo.save(&settings).await.expect("Failed to save settings");
    let loaded = repo.load().await.expect("Failed to load settings");

    assert_eq!(loaded, settings);
}

#[tokio::test]
async fn missing_file_loads_defaults() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let repo = SettingsRepository::with_config_dir(temp_dir.path().join("spotter"));

    let loaded = repo.load().await.expect("Failed to load settings");

    assert_eq!(loaded, ProviderSettings::default());
    assert_eq!(loaded.geolocation_token, None);
    assert_eq!(loaded.visit_store_url, None);
}

#[tokio::test]
async fn saved_file_is_pretty_printed_json() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_dir = temp_dir.path().join("spotter");
    let repo = SettingsRepository::with_config_dir(config_dir.clone());

    repo.save(&ProviderSettings::default())
        .await
        .expect("Failed to save settings");

    let content = std::fs::read_to_string(config_dir.join("settings.json"))
        .expect("Failed to read settings file");
    assert!(content.ends_with('\n'), "Should have trailing newline");
    assert!(content.contains("  \""), "Should use 2-space indentation");
    assert!(content.contains("ip_echo_url"));
}
