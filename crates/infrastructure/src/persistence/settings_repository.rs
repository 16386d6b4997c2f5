//! Provider settings persistence.
//!
//! Settings live in the platform-specific config directory:
//! - Linux/macOS: `~/.config/spotter/settings.json`
//! - Windows: `%APPDATA%/spotter/settings.json`
//!
//! Environment variables override file values, so credentials never have to
//! be written to disk at all.

use std::path::PathBuf;

use spotter_domain::ProviderSettings;
use tokio::fs;
use tracing::debug;

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Could not determine the config directory.
    #[error("could not determine config directory")]
    NoConfigDir,
}

/// Repository for provider settings persistence.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    config_dir: Option<PathBuf>,
}

impl SettingsRepository {
    /// Creates a repository rooted at the platform config directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_dir: dirs::config_dir().map(|p| p.join("spotter")),
        }
    }

    /// Creates a repository rooted at an explicit directory.
    #[must_use]
    pub const fn with_config_dir(dir: PathBuf) -> Self {
        Self {
            config_dir: Some(dir),
        }
    }

    fn settings_path(&self) -> Option<PathBuf> {
        self.config_dir.as_ref().map(|p| p.join("settings.json"))
    }

    /// Loads settings from disk.
    ///
    /// Returns defaults when the file (or the config directory itself) does
    /// not exist; a missing settings file is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be read or parsed.
    pub async fn load(&self) -> Result<ProviderSettings, SettingsError> {
        let Some(path) = self.settings_path() else {
            return Ok(ProviderSettings::default());
        };

        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(ProviderSettings::default());
        }

        let content = fs::read(&path).await?;
        let settings = serde_json::from_slice(&content)?;
        Ok(settings)
    }

    /// Saves settings to disk, creating the config directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error when no config directory is available or the write
    /// fails.
    pub async fn save(&self, settings: &ProviderSettings) -> Result<(), SettingsError> {
        let Some(config_dir) = self.config_dir.as_ref() else {
            return Err(SettingsError::NoConfigDir);
        };
        let Some(path) = self.settings_path() else {
            return Err(SettingsError::NoConfigDir);
        };

        fs::create_dir_all(config_dir).await?;

        let mut content = serde_json::to_vec_pretty(settings)?;
        content.push(b'\n');
        fs::write(&path, content).await?;

        Ok(())
    }

    /// Applies `SPOTTER_*` environment variables on top of loaded settings.
    pub fn apply_env_overrides(settings: &mut ProviderSettings) {
        apply_overrides(settings, |key| std::env::var(key).ok());
    }
}

impl Default for SettingsRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_overrides(
    settings: &mut ProviderSettings,
    get: impl Fn(&str) -> Option<String>,
) {
    if let Some(value) = get("SPOTTER_IP_ECHO_URL") {
        settings.ip_echo_url = value;
    }
    if let Some(value) = get("SPOTTER_GEOLOCATION_URL") {
        settings.geolocation_url = value;
    }
    if let Some(value) = get("SPOTTER_GEOLOCATION_TOKEN") {
        settings.geolocation_token = Some(value);
    }
    if let Some(value) = get("SPOTTER_VISIT_STORE_URL") {
        settings.visit_store_url = Some(value);
    }
    if let Some(value) = get("SPOTTER_VISIT_STORE_TOKEN") {
        settings.visit_store_token = Some(value);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn overrides_win_over_file_values() {
        let mut settings = ProviderSettings::default();
        let env: HashMap<&str, &str> = HashMap::from([
            ("SPOTTER_GEOLOCATION_TOKEN", "tok-123"),
            ("SPOTTER_VISIT_STORE_URL", "https://store.example"),
            ("SPOTTER_VISIT_STORE_TOKEN", "bearer-456"),
        ]);

        apply_overrides(&mut settings, |key| env.get(key).map(ToString::to_string));

        assert_eq!(settings.geolocation_token.as_deref(), Some("tok-123"));
        assert_eq!(
            settings.visit_store_url.as_deref(),
            Some("https://store.example")
        );
        assert_eq!(settings.visit_store_token.as_deref(), Some("bearer-456"));
        // Untouched fields keep their values.
        assert_eq!(settings.ip_echo_url, "https://api.ipify.org");
    }

    #[test]
    fn no_overrides_leaves_settings_unchanged() {
        let mut settings = ProviderSettings::default();
        apply_overrides(&mut settings, |_| None);
        assert_eq!(settings, ProviderSettings::default());
    }

    #[tokio::test]
    async fn load_returns_defaults_when_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let repo = SettingsRepository::with_config_dir(dir.path().join("spotter"));
        let settings = repo.load().await.unwrap();
        assert_eq!(settings, ProviderSettings::default());
    }

    #[tokio::test]
    async fn load_rejects_unparseable_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join("spotter");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join("settings.json"), b"not json").unwrap();

        let repo = SettingsRepository::with_config_dir(config_dir);
        assert!(matches!(
            repo.load().await,
            Err(SettingsError::Serialization(_))
        ));
    }
}
