//! # Application Context
//!
//! Loads settings once and builds the fetcher and runtime handed to the
//! command handlers.

use std::path::PathBuf;

use anyhow::{Context, Result};
use selector_core::{SelectorConfig, get_config_dirs};
use selector_gh::{GitHubBranchSource, create_github_client_from_env};
use tokio::runtime::Runtime;
use tracing::debug;

/// Settings and their origin, shared by every command
#[derive(Debug)]
pub struct AppContext {
  pub config: SelectorConfig,
  pub config_path: PathBuf,
}

impl AppContext {
  /// Load settings from `config_path`, or from the default location
  pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
    let config_path = match config_path {
      Some(path) => path,
      None => get_config_dirs()?.config_path(),
    };
    debug!("Loading config from {}", config_path.display());

    let config = SelectorConfig::load_from(&config_path)?;
    Ok(Self { config, config_path })
  }

  /// Build the GitHub branch source for the configured organization
  pub fn branch_source(&self) -> GitHubBranchSource {
    GitHubBranchSource::from_config(create_github_client_from_env(), &self.config)
  }

  /// Creates a tokio runtime and the branch source
  pub fn runtime_and_source(&self) -> Result<(Runtime, GitHubBranchSource)> {
    let rt = Runtime::new().context("Failed to create async runtime")?;
    Ok((rt, self.branch_source()))
  }
}
