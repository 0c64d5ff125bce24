//! # Configuration Management
//!
//! Locates the configuration directory and loads the selector settings,
//! falling back to defaults for anything the config file leaves out.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::search::SimulatedLatency;

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_ORGANIZATION: &str = "ReactionMechanismGenerator";
pub const DEFAULT_PAGE: u32 = 1;
/// GitHub caps `per_page` at 100
pub const MAX_PER_PAGE: u32 = 100;
pub const DEFAULT_MAX_LATENCY_MS: u64 = 1000;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Represents the configuration directories for the selector
#[derive(Debug, Clone)]
pub struct ConfigDirs {
  pub config_dir: PathBuf,
}

impl ConfigDirs {
  /// Create a new ConfigDirs instance
  pub fn new() -> Result<Self> {
    let proj_dirs =
      ProjectDirs::from("", "", "branch-selector").context("Failed to determine project directories")?;

    Ok(Self {
      config_dir: proj_dirs.config_dir().to_path_buf(),
    })
  }

  /// Get the config directory
  pub fn config_dir(&self) -> &PathBuf {
    &self.config_dir
  }

  /// Get the path to the config file
  pub fn config_path(&self) -> PathBuf {
    self.config_dir.join(CONFIG_FILE_NAME)
  }
}

/// Errors found when validating loaded settings
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
  #[error("per_page must be between 1 and {MAX_PER_PAGE}, got {0}")]
  PerPageOutOfRange(u32),
  #[error("page must be at least 1")]
  PageZero,
  #[error("organization must not be empty")]
  EmptyOrganization,
  #[error("api_base_url must not be empty")]
  EmptyBaseUrl,
}

/// Settings for fetching and searching branches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectorConfig {
  /// Root of the GitHub REST API
  pub api_base_url: String,
  /// Owner of the tracked repositories
  pub organization: String,
  pub page: u32,
  pub per_page: u32,
  /// Upper bound of the simulated query latency, in milliseconds
  pub max_latency_ms: u64,
}

impl Default for SelectorConfig {
  fn default() -> Self {
    Self {
      api_base_url: DEFAULT_API_BASE_URL.to_string(),
      organization: DEFAULT_ORGANIZATION.to_string(),
      page: DEFAULT_PAGE,
      per_page: MAX_PER_PAGE,
      max_latency_ms: DEFAULT_MAX_LATENCY_MS,
    }
  }
}

impl SelectorConfig {
  /// Load settings from `path`, or defaults when the file does not exist
  pub fn load_from(path: &Path) -> Result<Self> {
    if !path.exists() {
      return Ok(Self::default());
    }

    let content =
      fs::read_to_string(path).with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: SelectorConfig =
      toml::from_str(&content).with_context(|| format!("Failed to parse config from {}", path.display()))?;
    config
      .validate()
      .with_context(|| format!("Invalid config in {}", path.display()))?;

    Ok(config)
  }

  /// Load settings from the default config location
  pub fn load(dirs: &ConfigDirs) -> Result<Self> {
    Self::load_from(&dirs.config_path())
  }

  /// Save settings to `path`, creating parent directories as needed
  pub fn save_to(&self, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }

    let content = toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;
    fs::write(path, content).with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(())
  }

  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.api_base_url.trim().is_empty() {
      return Err(ConfigError::EmptyBaseUrl);
    }
    if self.organization.trim().is_empty() {
      return Err(ConfigError::EmptyOrganization);
    }
    if self.page == 0 {
      return Err(ConfigError::PageZero);
    }
    if self.per_page == 0 || self.per_page > MAX_PER_PAGE {
      return Err(ConfigError::PerPageOutOfRange(self.per_page));
    }
    Ok(())
  }

  pub const fn latency(&self) -> SimulatedLatency {
    SimulatedLatency::up_to(Duration::from_millis(self.max_latency_ms))
  }
}

/// Get the configuration directories
pub fn get_config_dirs() -> Result<ConfigDirs> {
  ConfigDirs::new()
}

#[cfg(test)]
mod tests {
  use selector_test_utils::EnvTestGuard;
  use tempfile::TempDir;

  use super::*;

  #[test]
  fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = SelectorConfig::load_from(&temp_dir.path().join("config.toml")).unwrap();

    assert_eq!(config, SelectorConfig::default());
    assert_eq!(config.api_base_url, "https://api.github.com");
    assert_eq!(config.organization, "ReactionMechanismGenerator");
    assert_eq!(config.per_page, 100);
    assert_eq!(config.latency().max(), Duration::from_millis(1000));
  }

  #[test]
  fn test_partial_file_fills_in_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "api_base_url = \"http://127.0.0.1:9999\"\nmax_latency_ms = 0\n").unwrap();

    let config = SelectorConfig::load_from(&path).unwrap();
    assert_eq!(config.api_base_url, "http://127.0.0.1:9999");
    assert_eq!(config.organization, DEFAULT_ORGANIZATION);
    assert_eq!(config.latency(), SimulatedLatency::none());
  }

  #[test]
  fn test_invalid_per_page_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "per_page = 250\n").unwrap();

    let error = SelectorConfig::load_from(&path).unwrap_err();
    assert!(format!("{error:#}").contains("per_page must be between 1 and 100, got 250"));
  }

  #[test]
  fn test_malformed_file_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "per_page = \"lots\"\n").unwrap();

    let error = SelectorConfig::load_from(&path).unwrap_err().to_string();
    assert!(error.contains("Failed to parse config"));
    assert!(error.contains("config.toml"));
  }

  #[test]
  fn test_validate() {
    let mut config = SelectorConfig::default();
    assert_eq!(config.validate(), Ok(()));

    config.page = 0;
    assert_eq!(config.validate(), Err(ConfigError::PageZero));

    config.page = 1;
    config.organization = " ".to_string();
    assert_eq!(config.validate(), Err(ConfigError::EmptyOrganization));
  }

  #[test]
  fn test_save_then_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.toml");
    let config = SelectorConfig {
      organization: "octo-org".to_string(),
      per_page: 30,
      ..Default::default()
    };

    config.save_to(&path).unwrap();
    assert_eq!(SelectorConfig::load_from(&path).unwrap(), config);
  }

  #[test]
  fn test_config_path_follows_xdg_config_home() {
    let guard = EnvTestGuard::new();
    let dirs = ConfigDirs::new().unwrap();

    #[cfg(target_os = "linux")]
    assert!(dirs.config_dir().starts_with(guard.config_dir()));
    assert!(dirs.config_path().ends_with("config.toml"));
  }
}
