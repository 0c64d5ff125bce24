//! # Branch Source
//!
//! Binds the GitHub client to an organization and page settings so the
//! controller can fetch branch lists by repository name alone.

use anyhow::{Context, Result};
use selector_core::{BranchList, BranchSource, SelectorConfig};
use tracing::debug;

use crate::client::GitHubClient;

/// Fetches branch lists for repositories of one organization
#[derive(Debug, Clone)]
pub struct GitHubBranchSource {
  client: GitHubClient,
  owner: String,
  page: u32,
  per_page: u32,
}

impl GitHubBranchSource {
  pub fn new(client: GitHubClient, owner: &str, page: u32, per_page: u32) -> Self {
    Self {
      client,
      owner: owner.to_string(),
      page,
      per_page,
    }
  }

  /// Build a source from loaded settings
  pub fn from_config(client: GitHubClient, config: &SelectorConfig) -> Self {
    Self::new(
      client.with_base_url(&config.api_base_url),
      &config.organization,
      config.page,
      config.per_page,
    )
  }

  pub fn owner(&self) -> &str {
    &self.owner
  }

  pub fn client(&self) -> &GitHubClient {
    &self.client
  }
}

impl BranchSource for GitHubBranchSource {
  async fn fetch_branches(&self, repo: &str) -> Result<BranchList> {
    let branches = self
      .client
      .list_branches(&self.owner, repo, self.page, self.per_page)
      .await
      .with_context(|| format!("Failed to retrieve branches of {repo}"))?;

    debug!(repo, count = branches.len(), "Mapped branches");
    Ok(branches.into_iter().map(Into::into).collect())
  }
}
