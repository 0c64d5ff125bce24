//! # GitHub Branch Endpoints
//!
//! Lists the branches of a repository.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::{debug, instrument};

use crate::client::GitHubClient;
use crate::models::GitHubBranch;

/// Pull the `message` field out of a GitHub error body, if there is one
fn github_error_message(body: &str) -> Option<String> {
  let error_json = serde_json::from_str::<serde_json::Value>(body).ok()?;
  error_json.get("message").and_then(|m| m.as_str()).map(str::to_string)
}

impl GitHubClient {
  /// Get one page of branches for a repository
  #[instrument(skip(self), level = "debug")]
  pub async fn list_branches(&self, owner: &str, repo: &str, page: u32, per_page: u32) -> Result<Vec<GitHubBranch>> {
    let url = format!("{}/repos/{owner}/{repo}/branches", self.base_url);
    debug!("Requesting {url}");

    let response = self
      .get(&url)
      .query(&[("page", page), ("per_page", per_page)])
      .send()
      .await
      .with_context(|| format!("Failed to fetch branches for {owner}/{repo}"))?;

    match response.status() {
      StatusCode::OK => {
        // First get the response body as text
        let body = response.text().await.context("Failed to read response body")?;

        // Then try to parse it as JSON
        let branches = match serde_json::from_str::<Vec<GitHubBranch>>(&body) {
          Ok(branches) => branches,
          Err(e) => {
            if let Some(message) = github_error_message(&body) {
              return Err(anyhow::anyhow!("Failed to parse branches: GitHub API error: {}", message));
            }
            return Err(anyhow::anyhow!("Failed to parse branches: {}", e));
          }
        };

        debug!(count = branches.len(), "Fetched branches");
        Ok(branches)
      }
      StatusCode::NOT_FOUND => Err(anyhow::anyhow!("Repository {owner}/{repo} not found")),
      status @ (StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) => {
        let body = response.text().await.unwrap_or_default();
        let message = github_error_message(&body).unwrap_or_else(|| status.to_string());
        Err(anyhow::anyhow!(
          "GitHub rejected the request (authentication or rate limit): {message}"
        ))
      }
      status => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        status,
        response.text().await.unwrap_or_default()
      )),
    }
  }
}

#[cfg(test)]
#[path = "tests/branches_test.rs"]
mod tests;
