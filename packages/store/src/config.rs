//! # Application configuration: `pulse.toml`
//!
//! Defines the TOML configuration file read at start-up (filename:
//! [`PulseConfig::filename`] = `"pulse.toml"`). On native platforms it lives in
//! the application data directory; in the browser the defaults are used.
//!
//! ## Structure
//!
//! ```toml
//! [storage]
//! notes_key = "localNotes"
//! reminders_key = "localReminders"
//! theme_key = "theme"
//! data_dir = "/var/lib/pulse"     # optional, native only
//!
//! [backend]
//! base_url = "http://localhost:5000"
//! timeout_secs = 30
//! ```
//!
//! All structs derive `Default` (with production defaults) so that a missing or
//! empty config file is equivalent to the default configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::models::{NoteFields, RecordKind, ReminderFields};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PulseConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub backend: BackendConfig,
}

/// Where local records are kept.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_notes_key")]
    pub notes_key: String,
    #[serde(default = "default_reminders_key")]
    pub reminders_key: String,
    #[serde(default = "default_theme_key")]
    pub theme_key: String,
    /// Overrides the platform data directory for the file-backed store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

fn default_notes_key() -> String {
    NoteFields::STORAGE_KEY.to_string()
}

fn default_reminders_key() -> String {
    ReminderFields::STORAGE_KEY.to_string()
}

fn default_theme_key() -> String {
    "theme".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            notes_key: default_notes_key(),
            reminders_key: default_reminders_key(),
            theme_key: default_theme_key(),
            data_dir: None,
        }
    }
}

/// How to reach the backend that proxies contacts, mail, drive and photos.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (native only). 0 disables the timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl PulseConfig {
    /// Builder method to point at a different backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.backend.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "pulse.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Read `pulse.toml` from `dir`. A missing file yields the defaults.
    pub fn read_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(dir.join(Self::filename())) {
            Ok(content) => Ok(Self::from_toml(&content)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = PulseConfig::from_toml("").unwrap();
        assert_eq!(config, PulseConfig::default());
        assert_eq!(config.storage.notes_key, "localNotes");
        assert_eq!(config.storage.reminders_key, "localReminders");
        assert_eq!(config.backend.timeout_secs, 30);
    }

    #[test]
    fn test_partial_sections() {
        let config = PulseConfig::from_toml(
            r#"
            [backend]
            base_url = "https://crm.example.com"
            "#,
        )
        .unwrap();
        assert_eq!(config.backend.base_url, "https://crm.example.com");
        assert_eq!(config.backend.timeout_secs, 30);
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = PulseConfig::default().with_base_url("https://api.example.com");
        let text = config.to_toml().unwrap();
        assert_eq!(PulseConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_read_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            PulseConfig::read_from_dir(dir.path()).unwrap(),
            PulseConfig::default()
        );

        std::fs::write(
            dir.path().join("pulse.toml"),
            "[storage]\nnotes_key = \"crmNotes\"\n",
        )
        .unwrap();
        let config = PulseConfig::read_from_dir(dir.path()).unwrap();
        assert_eq!(config.storage.notes_key, "crmNotes");

        std::fs::write(dir.path().join("pulse.toml"), "[storage\n").unwrap();
        assert!(matches!(
            PulseConfig::read_from_dir(dir.path()),
            Err(ConfigError::Parse(_))
        ));
    }
}
