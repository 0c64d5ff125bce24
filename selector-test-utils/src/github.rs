//! Mock GitHub branches API for testing

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A running wiremock server that answers branch listing requests
pub struct GitHubMockGuard {
  pub server: MockServer,
}

impl GitHubMockGuard {
  /// Start a mock server with no routes mounted
  pub async fn start() -> Self {
    Self {
      server: MockServer::start().await,
    }
  }

  /// Base URL to configure the client with
  pub fn uri(&self) -> String {
    self.server.uri()
  }

  fn branches_path(owner: &str, repo: &str) -> String {
    format!("/repos/{owner}/{repo}/branches")
  }

  /// Answer the branch listing of `owner/repo` with the given names
  pub async fn mount_branches(&self, owner: &str, repo: &str, names: &[&str]) {
    let body: Vec<Value> = names
      .iter()
      .enumerate()
      .map(|(i, name)| {
        let sha = format!("{:040x}", i + 1);
        json!({
            "name": name,
            "commit": {
                "sha": sha,
                "url": format!("https://api.github.com/repos/{owner}/{repo}/commits/{sha}")
            },
            "protected": false
        })
      })
      .collect();

    self.mount_status(owner, repo, 200, Value::Array(body)).await;
  }

  /// Answer the branch listing of `owner/repo` with an arbitrary status and body
  pub async fn mount_status(&self, owner: &str, repo: &str, status: u16, body: Value) {
    Mock::given(method("GET"))
      .and(path(Self::branches_path(owner, repo)))
      .respond_with(ResponseTemplate::new(status).set_body_json(body))
      .mount(&self.server)
      .await;
  }

  /// Number of requests the server has received so far
  pub async fn request_count(&self) -> usize {
    self.server.received_requests().await.map(|r| r.len()).unwrap_or(0)
  }
}
