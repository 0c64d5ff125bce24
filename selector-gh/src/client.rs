//! # GitHub HTTP Client
//!
//! HTTP client for the GitHub REST API. Requests are anonymous unless a
//! token is supplied.

use reqwest::{Client, RequestBuilder};

use crate::consts::{ACCEPT, API_BASE_URL, ENV_GITHUB_TOKEN, USER_AGENT};
use crate::models::GitHubAuth;

/// Represents a GitHub API client
#[derive(Debug, Clone)]
pub struct GitHubClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: Option<GitHubAuth>,
}

impl GitHubClient {
  /// Create a new GitHub client against the public API
  pub fn new(auth: Option<GitHubAuth>) -> Self {
    Self {
      client: Client::new(),
      base_url: API_BASE_URL.to_string(),
      auth,
    }
  }

  /// Point the client at a different API root
  pub fn with_base_url(mut self, base_url: &str) -> Self {
    self.base_url = base_url.trim_end_matches('/').to_string();
    self
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  pub const fn is_authenticated(&self) -> bool {
    self.auth.is_some()
  }

  /// Start a GET request with the headers every GitHub call needs
  pub(crate) fn get(&self, url: &str) -> RequestBuilder {
    let request = self
      .client
      .get(url)
      .header("Accept", ACCEPT)
      .header("User-Agent", USER_AGENT);

    match &self.auth {
      Some(auth) => request.header("Authorization", format!("token {}", auth.token)),
      None => request,
    }
  }
}

/// Create a GitHub client, authenticated when a token is given
pub fn create_github_client(token: Option<&str>) -> GitHubClient {
  let auth = token.filter(|t| !t.trim().is_empty()).map(|t| GitHubAuth {
    token: t.trim().to_string(),
  });

  GitHubClient::new(auth)
}

/// Create a GitHub client using the token from `GITHUB_TOKEN`, if set
pub fn create_github_client_from_env() -> GitHubClient {
  let token = std::env::var(ENV_GITHUB_TOKEN).ok();
  create_github_client(token.as_deref())
}

#[cfg(test)]
mod tests {
  use anyhow::Result;
  use wiremock::matchers::{header, header_exists, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;

  #[test]
  fn test_github_client_creation() {
    let client = create_github_client(None);

    assert_eq!(client.base_url(), "https://api.github.com");
    assert!(!client.is_authenticated());
  }

  #[test]
  fn test_blank_token_is_anonymous() {
    assert!(!create_github_client(Some("  ")).is_authenticated());
    assert!(create_github_client(Some("gh-token")).is_authenticated());
  }

  #[test]
  fn test_with_base_url_trims_trailing_slash() {
    let client = create_github_client(None).with_base_url("http://localhost:8080/");
    assert_eq!(client.base_url(), "http://localhost:8080");
  }

  /// Authenticated requests carry the token header
  #[tokio::test]
  async fn test_github_client_auth() -> Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_github_client(Some("test_token")).with_base_url(&mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/rate_limit"))
      .and(header("Authorization", "token test_token"))
      .and(header("Accept", ACCEPT))
      .and(header_exists("User-Agent"))
      .respond_with(ResponseTemplate::new(200))
      .mount(&mock_server)
      .await;

    let response = client.get(&format!("{}/rate_limit", client.base_url())).send().await?;

    assert!(response.status().is_success());
    Ok(())
  }
}
