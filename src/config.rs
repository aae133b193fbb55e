//! Configuration management for Study Assistant
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    API_URL_ENV, CONFIG_GENERATED, DEFAULT_ALLOWED_EXTENSIONS, DEFAULT_API_TIMEOUT_SECS, DEFAULT_API_URL,
    DEFAULT_MAX_FILE_SIZE_BYTES, DEFAULT_NOTIFICATION_TIMEOUT_SECS, DEFAULT_TICK_RATE_MS,
};
use crate::icons::IconTheme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub upload: UploadConfig,
    pub logging: LoggingConfig,
}

/// Backend connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the Study Assistant backend.
    /// The `STUDY_ASSISTANT_API_URL` environment variable takes precedence.
    pub base_url: String,
    /// Request timeout in seconds (0 = no timeout)
    pub timeout_secs: u64,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long a notification stays on screen
    pub notification_timeout_secs: u64,
    /// Event loop tick in milliseconds
    pub tick_rate_ms: u64,
    /// Icon theme: "unicode", "emoji" or "ascii"
    pub icon_theme: IconTheme,
}

/// Local checks applied before a file is sent to the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub max_file_size_bytes: u64,
    /// Lowercase extensions without the leading dot
    pub allowed_extensions: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file in the data directory
    pub enabled: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notification_timeout_secs: DEFAULT_NOTIFICATION_TIMEOUT_SECS,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            icon_theme: IconTheme::default(),
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        }
    }
}

impl ApiConfig {
    /// Resolve the backend base URL.
    ///
    /// Precedence: `STUDY_ASSISTANT_API_URL`, then the configured value.
    /// Trailing slashes are stripped so paths can be appended directly.
    pub fn resolve_base_url(&self) -> String {
        Self::pick_base_url(std::env::var(API_URL_ENV).ok(), &self.base_url)
    }

    /// Pure precedence rule behind [`ApiConfig::resolve_base_url`]
    pub fn pick_base_url(env_value: Option<String>, configured: &str) -> String {
        let chosen = env_value
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| configured.to_string());
        chosen.trim().trim_end_matches('/').to_string()
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl UiConfig {
    pub fn notification_timeout(&self) -> Duration {
        Duration::from_secs(self.notification_timeout_secs)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("study-assistant.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("study-assistant").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let base_url = self.api.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            anyhow::bail!(
                "api.base_url must start with http:// or https://, got '{}'",
                self.api.base_url
            );
        }

        if !(1..=300).contains(&self.ui.notification_timeout_secs) {
            anyhow::bail!(
                "ui.notification_timeout_secs must be between 1 and 300, got {}",
                self.ui.notification_timeout_secs
            );
        }

        if !(10..=1000).contains(&self.ui.tick_rate_ms) {
            anyhow::bail!("ui.tick_rate_ms must be between 10 and 1000, got {}", self.ui.tick_rate_ms);
        }

        if self.upload.max_file_size_bytes == 0 {
            anyhow::bail!("upload.max_file_size_bytes must be greater than 0");
        }

        if self.upload.allowed_extensions.is_empty() {
            anyhow::bail!("upload.allowed_extensions cannot be empty");
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# Study Assistant Configuration File\n# Generated on {}\n# {} overrides api.base_url\n\n",
            chrono::Local::now().format("%Y-%m-%d"),
            API_URL_ENV
        );

        let full_content = header + &toml_content;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("study-assistant"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
