use selector_core::Branch;
use serde::Deserialize;

/// Represents GitHub authentication credentials
#[derive(Clone)]
pub struct GitHubAuth {
  pub token: String,
}

impl std::fmt::Debug for GitHubAuth {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("GitHubAuth").field("token", &"<redacted>").finish()
  }
}

/// Represents one entry of the repository branches listing
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubBranch {
  pub name: String,
  pub commit: Option<GitHubCommitRef>,
  #[serde(default)]
  pub protected: bool,
}

/// Represents the commit a branch points at
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubCommitRef {
  pub sha: String,
  pub url: Option<String>,
}

impl From<GitHubBranch> for Branch {
  fn from(branch: GitHubBranch) -> Self {
    Branch::new(branch.name)
  }
}
