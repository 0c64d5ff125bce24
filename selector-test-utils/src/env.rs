//! Environment variable management for testing
//!
//! Points `XDG_CONFIG_HOME` at a per-test temporary directory and clears
//! `GITHUB_TOKEN`, restoring both when the guard is dropped.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A test environment with its own config home and no GitHub token
pub struct EnvTestGuard {
  /// The temporary directory backing the config home
  pub temp_dir: TempDir,
  original_config_home: Option<String>,
  original_token: Option<String>,
}

impl Default for EnvTestGuard {
  fn default() -> Self {
    Self::new()
  }
}

impl EnvTestGuard {
  pub const XDG_CONFIG_HOME: &'static str = "XDG_CONFIG_HOME";
  pub const GITHUB_TOKEN: &'static str = "GITHUB_TOKEN";

  /// Create a new test environment
  pub fn new() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");

    let original_config_home = env::var(Self::XDG_CONFIG_HOME).ok();
    let original_token = env::var(Self::GITHUB_TOKEN).ok();

    let config_home = temp_dir.path().join("config");
    fs::create_dir_all(&config_home).expect("Failed to create config directory");

    unsafe {
      env::set_var(Self::XDG_CONFIG_HOME, &config_home);
      env::remove_var(Self::GITHUB_TOKEN);
    }

    Self {
      temp_dir,
      original_config_home,
      original_token,
    }
  }

  /// Get the path to the XDG config home
  pub fn config_dir(&self) -> PathBuf {
    self.temp_dir.path().join("config")
  }

  /// Write a selector config file to `path` and return the path
  pub fn write_config(&self, path: &Path, content: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).expect("Failed to create config parent directory");
    }
    fs::write(path, content).expect("Failed to write config file");
    path.to_path_buf()
  }

  /// Write `config.toml` into the temporary directory, outside the config
  /// home, for passing through `--config`
  pub fn write_standalone_config(&self, content: &str) -> PathBuf {
    self.write_config(&self.temp_dir.path().join("config.toml"), content)
  }
}

fn restore(name: &str, value: Option<&String>) {
  match value {
    Some(val) => unsafe {
      env::set_var(name, val);
    },
    None => unsafe {
      env::remove_var(name);
    },
  }
}

impl Drop for EnvTestGuard {
  fn drop(&mut self) {
    restore(Self::XDG_CONFIG_HOME, self.original_config_home.as_ref());
    restore(Self::GITHUB_TOKEN, self.original_token.as_ref());
  }
}
