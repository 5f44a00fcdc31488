//! Persisted predictor settings stored as `config.toml` in the app directory.
//!
//! Config keys: `base_url`, `context`, `fetch_info_on_startup`, and a
//! `[timeouts]` table with `connect_secs`, `read_secs`, `write_secs`.
//! `ML_PREDICTOR_BASE_URL` replaces `base_url` at startup.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;
use crate::http_client::HttpTimeouts;

/// Default filename used to store the settings.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable overriding the prediction service base URL.
pub const BASE_URL_ENV: &str = "ML_PREDICTOR_BASE_URL";
/// Base URL used when neither the config file nor the environment sets one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
/// Context string sent alongside every prediction request.
pub const DEFAULT_CONTEXT: &str = "Looker Extension PoC";

/// Errors that may occur while loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The app directory could not be resolved or created.
    #[error("Unable to resolve config directory: {0}")]
    AppDir(#[from] app_dirs::AppDirError),
    /// Failed to create the config directory.
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to read the config file.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to write the config file.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse TOML config.
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Failed to serialize config to TOML.
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
    /// The configured base URL is not a usable http(s) URL.
    #[error("Invalid base URL {value:?}: {reason}")]
    InvalidBaseUrl { value: String, reason: String },
}

/// Settings for talking to the prediction service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictorSettings {
    /// Root URL of the prediction service, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Free-form context string sent with predictions.
    #[serde(default = "default_context")]
    pub context: String,
    /// Whether the UI requests `/info` and `/health` when it opens.
    #[serde(default = "default_true")]
    pub fetch_info_on_startup: bool,
    #[serde(default)]
    pub timeouts: TimeoutSettings,
}

impl Default for PredictorSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            context: default_context(),
            fetch_info_on_startup: true,
            timeouts: TimeoutSettings::default(),
        }
    }
}

impl PredictorSettings {
    /// Validate and canonicalize user-provided values.
    pub fn normalized(mut self) -> Result<Self, ConfigError> {
        self.base_url = normalize_base_url(&self.base_url)?;
        if self.context.trim().is_empty() {
            self.context = default_context();
        }
        self.timeouts = self.timeouts.clamped();
        Ok(self)
    }

    /// Replace the base URL when an override is present and non-empty.
    pub fn apply_base_url_override(&mut self, value: Option<&str>) -> Result<(), ConfigError> {
        let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) else {
            return Ok(());
        };
        self.base_url = normalize_base_url(value)?;
        Ok(())
    }
}

/// Per-request socket timeouts, in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeoutSettings {
    #[serde(default = "default_connect_secs")]
    pub connect_secs: u64,
    #[serde(default = "default_transfer_secs")]
    pub read_secs: u64,
    #[serde(default = "default_transfer_secs")]
    pub write_secs: u64,
}

impl Default for TimeoutSettings {
    fn default() -> Self {
        Self {
            connect_secs: default_connect_secs(),
            read_secs: default_transfer_secs(),
            write_secs: default_transfer_secs(),
        }
    }
}

impl TimeoutSettings {
    const MIN_SECS: u64 = 1;
    const MAX_SECS: u64 = 600;

    fn clamped(self) -> Self {
        Self {
            connect_secs: self.connect_secs.clamp(Self::MIN_SECS, Self::MAX_SECS),
            read_secs: self.read_secs.clamp(Self::MIN_SECS, Self::MAX_SECS),
            write_secs: self.write_secs.clamp(Self::MIN_SECS, Self::MAX_SECS),
        }
    }

    /// Convert into the agent-level timeout set.
    pub fn to_http_timeouts(self) -> HttpTimeouts {
        HttpTimeouts {
            connect: Duration::from_secs(self.connect_secs),
            read: Duration::from_secs(self.read_secs),
            write: Duration::from_secs(self.write_secs),
        }
    }
}

/// Resolve the config file path inside the app directory.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load settings from disk (defaults if missing) and apply the environment override.
pub fn load_or_default() -> Result<PredictorSettings, ConfigError> {
    let path = config_path()?;
    let mut settings = load_from(&path)?;
    let env_override = std::env::var(BASE_URL_ENV).ok();
    settings.apply_base_url_override(env_override.as_deref())?;
    tracing::info!(base_url = %settings.base_url, "Loaded predictor settings");
    Ok(settings)
}

/// Load settings from a specific file, returning defaults when it does not exist.
pub fn load_from(path: &Path) -> Result<PredictorSettings, ConfigError> {
    if !path.exists() {
        return Ok(PredictorSettings::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: PredictorSettings =
        toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })?;
    settings.normalized()
}

/// Persist settings to the default location.
pub fn save(settings: &PredictorSettings) -> Result<(), ConfigError> {
    save_to_path(settings, &config_path()?)
}

/// Save settings to a specific path, creating parent directories as needed.
pub fn save_to_path(settings: &PredictorSettings, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let text = toml::to_string_pretty(settings).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, text).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Check that `value` is an absolute http(s) URL and drop trailing slashes.
pub fn normalize_base_url(value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        value: value.to_string(),
        reason,
    };
    let parsed = url::Url::parse(trimmed).map_err(|err| invalid(err.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme `{}`", parsed.scheme())));
    }
    if parsed.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_context() -> String {
    DEFAULT_CONTEXT.to_string()
}

fn default_true() -> bool {
    true
}

fn default_connect_secs() -> u64 {
    10
}

fn default_transfer_secs() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let settings = load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings, PredictorSettings::default());
        assert_eq!(settings.base_url, "http://localhost:8080");
    }

    #[test]
    fn partial_file_fills_remaining_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            "base_url = \"https://models.example.com/\"\n[timeouts]\nread_secs = 5\n",
        )
        .unwrap();
        let settings = load_from(&path).unwrap();
        assert_eq!(settings.base_url, "https://models.example.com");
        assert_eq!(settings.context, DEFAULT_CONTEXT);
        assert_eq!(settings.timeouts.read_secs, 5);
        assert_eq!(settings.timeouts.connect_secs, 10);
        assert!(settings.fetch_info_on_startup);
    }

    #[test]
    fn saved_settings_load_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
        let settings = PredictorSettings {
            base_url: "http://10.0.0.5:9000".into(),
            fetch_info_on_startup: false,
            ..PredictorSettings::default()
        };
        save_to_path(&settings, &path).unwrap();
        assert_eq!(load_from(&path).unwrap(), settings);
    }

    #[test]
    fn malformed_toml_is_reported_with_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "base_url = [").unwrap();
        let err = load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
    }

    #[test]
    fn override_replaces_base_url_and_ignores_blank_values() {
        let mut settings = PredictorSettings::default();
        settings.apply_base_url_override(Some("   ")).unwrap();
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        settings
            .apply_base_url_override(Some("https://predict.run.app/"))
            .unwrap();
        assert_eq!(settings.base_url, "https://predict.run.app");
    }

    #[test]
    fn rejects_non_http_base_urls() {
        assert!(matches!(
            normalize_base_url("ftp://example.com"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(normalize_base_url("localhost:8080/").is_err());
        assert!(normalize_base_url("not a url").is_err());
    }

    #[test]
    fn timeouts_are_clamped_to_sane_bounds() {
        let settings = PredictorSettings {
            timeouts: TimeoutSettings {
                connect_secs: 0,
                read_secs: 10_000,
                write_secs: 12,
            },
            ..PredictorSettings::default()
        }
        .normalized()
        .unwrap();
        let timeouts = settings.timeouts.to_http_timeouts();
        assert_eq!(timeouts.connect, Duration::from_secs(1));
        assert_eq!(timeouts.read, Duration::from_secs(600));
        assert_eq!(timeouts.write, Duration::from_secs(12));
    }

    #[test]
    fn config_path_lives_in_app_dir() {
        let base = tempdir().unwrap();
        let _guard = app_dirs::ConfigBaseGuard::set(base.path().to_path_buf());
        let path = config_path().unwrap();
        assert_eq!(
            path,
            base.path().join(app_dirs::APP_DIR_NAME).join(CONFIG_FILE_NAME)
        );
    }
}
