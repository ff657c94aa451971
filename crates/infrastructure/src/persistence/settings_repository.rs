//! Client settings persistence.
//!
//! Stores settings in the platform-specific config directory:
//! - Linux: ~/.config/dotalens/settings.json
//! - macOS: ~/Library/Application Support/dotalens/settings.json
//! - Windows: %APPDATA%/dotalens/settings.json
//!
//! `DOTALENS_API_BASE_URL` overrides the stored API base URL.

use std::path::PathBuf;

use dotalens_domain::{ClientSettings, DomainError};
use tokio::fs;
use tracing::{debug, info};

use crate::serialization::{SerializationError, from_json_bytes, to_json_pretty};

/// Environment variable overriding [`ClientSettings::api_base_url`].
pub const BASE_URL_ENV: &str = "DOTALENS_API_BASE_URL";

const SETTINGS_FILE: &str = "settings.json";

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    /// The stored settings are unusable.
    #[error("Invalid settings: {0}")]
    Invalid(#[from] DomainError),

    /// Could not determine config directory.
    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Repository for client settings persistence.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    config_dir: Option<PathBuf>,
}

impl Default for SettingsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsRepository {
    /// Creates a repository backed by the platform config directory.
    #[must_use]
    pub fn new() -> Self {
        dirs::config_dir().map_or(Self { config_dir: None }, |dir| {
            Self::with_dir(dir.join("dotalens"))
        })
    }

    /// Creates a repository backed by an explicit directory.
    #[must_use]
    pub fn with_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: Some(config_dir.into()),
        }
    }

    /// Returns the path to the settings file, if a config directory is known.
    #[must_use]
    pub fn settings_path(&self) -> Option<PathBuf> {
        self.config_dir.as_ref().map(|p| p.join(SETTINGS_FILE))
    }

    /// Loads settings from disk.
    ///
    /// Returns default settings if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// holds values that fail validation.
    pub async fn load(&self) -> Result<ClientSettings, SettingsError> {
        let Some(path) = self.settings_path() else {
            return Ok(ClientSettings::default());
        };

        if !fs::try_exists(&path).await? {
            debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(ClientSettings::default());
        }

        let content = fs::read(&path).await?;
        let settings: ClientSettings = from_json_bytes(&content)?;
        settings.validate()?;
        info!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    /// Loads settings and applies environment overrides.
    ///
    /// # Errors
    ///
    /// Same as [`SettingsRepository::load`], plus validation of the overridden values.
    pub async fn load_with_env(&self) -> Result<ClientSettings, SettingsError> {
        self.load_with_vars(|name| std::env::var(name).ok()).await
    }

    /// Loads settings and applies overrides looked up by variable name.
    ///
    /// # Errors
    ///
    /// Same as [`SettingsRepository::load_with_env`].
    pub async fn load_with_vars(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<ClientSettings, SettingsError> {
        let settings = self.load().await?;
        let settings = apply_overrides(settings, lookup(BASE_URL_ENV));
        settings.validate()?;
        Ok(settings)
    }

    /// Writes default settings when no file exists yet, so there is a file
    /// to edit. Returns true if a file was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be checked or written.
    pub async fn init_if_missing(&self) -> Result<bool, SettingsError> {
        let Some(path) = self.settings_path() else {
            return Err(SettingsError::NoConfigDir);
        };
        if fs::try_exists(&path).await? {
            return Ok(false);
        }

        self.save(&ClientSettings::default()).await?;
        info!(path = %path.display(), "Wrote default settings");
        Ok(true)
    }

    /// Saves settings to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file written.
    pub async fn save(&self, settings: &ClientSettings) -> Result<(), SettingsError> {
        let (Some(config_dir), Some(path)) = (self.config_dir.as_ref(), self.settings_path())
        else {
            return Err(SettingsError::NoConfigDir);
        };

        fs::create_dir_all(config_dir).await?;
        fs::write(&path, to_json_pretty(settings)?).await?;

        Ok(())
    }
}

/// Applies an optional base URL override; blank values are ignored.
#[must_use]
pub fn apply_overrides(mut settings: ClientSettings, base_url: Option<String>) -> ClientSettings {
    if let Some(url) = base_url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
        info!(url, "Using API base URL from {BASE_URL_ENV}");
        settings.api_base_url = url;
    }
    settings
}
