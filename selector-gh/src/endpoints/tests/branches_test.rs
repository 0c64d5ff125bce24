use selector_test_utils::GitHubMockGuard;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::client::create_github_client;
use crate::consts::ACCEPT;

#[tokio::test]
async fn test_list_branches() -> anyhow::Result<()> {
  let mock_server = MockServer::start().await;
  let client = create_github_client(None).with_base_url(&mock_server.uri());

  Mock::given(method("GET"))
    .and(path("/repos/ReactionMechanismGenerator/RMG-Py/branches"))
    .and(query_param("page", "1"))
    .and(query_param("per_page", "100"))
    .and(header("Accept", ACCEPT))
    .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
        { "name": "main", "commit": { "sha": "aaa111", "url": "https://example.invalid/aaa111" }, "protected": true },
        { "name": "master", "commit": { "sha": "bbb222", "url": "https://example.invalid/bbb222" }, "protected": false },
        { "name": "feature-x", "commit": { "sha": "ccc333", "url": "https://example.invalid/ccc333" }, "protected": false }
    ])))
    .expect(1)
    .mount(&mock_server)
    .await;

  let branches = client
    .list_branches("ReactionMechanismGenerator", "RMG-Py", 1, 100)
    .await?;
  let names: Vec<&str> = branches.iter().map(|b| b.name.as_str()).collect();
  assert_eq!(names, vec!["main", "master", "feature-x"]);
  assert!(branches[0].protected);

  Ok(())
}

#[tokio::test]
async fn test_list_branches_with_token() -> anyhow::Result<()> {
  let mock_server = MockServer::start().await;
  let client = create_github_client(Some("gh-token")).with_base_url(&mock_server.uri());

  Mock::given(method("GET"))
    .and(path("/repos/octo-org/widgets/branches"))
    .and(header("Authorization", "token gh-token"))
    .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{ "name": "main" }])))
    .mount(&mock_server)
    .await;

  let branches = client.list_branches("octo-org", "widgets", 1, 30).await?;
  assert_eq!(branches.len(), 1);

  Ok(())
}

#[tokio::test]
async fn test_list_branches_empty_repository() -> anyhow::Result<()> {
  let guard = GitHubMockGuard::start().await;
  guard.mount_branches("ReactionMechanismGenerator", "RMG-database", &[]).await;
  let client = create_github_client(None).with_base_url(&guard.uri());

  let branches = client
    .list_branches("ReactionMechanismGenerator", "RMG-database", 1, 100)
    .await?;
  assert!(branches.is_empty());

  Ok(())
}

#[tokio::test]
async fn test_list_branches_not_found() -> anyhow::Result<()> {
  let guard = GitHubMockGuard::start().await;
  guard
    .mount_status(
      "ReactionMechanismGenerator",
      "RMG-Missing",
      404,
      serde_json::json!({ "message": "Not Found" }),
    )
    .await;
  let client = create_github_client(None).with_base_url(&guard.uri());

  let error = client
    .list_branches("ReactionMechanismGenerator", "RMG-Missing", 1, 100)
    .await
    .unwrap_err();
  assert!(error.to_string().contains("ReactionMechanismGenerator/RMG-Missing not found"));

  Ok(())
}

#[tokio::test]
async fn test_list_branches_rate_limited() -> anyhow::Result<()> {
  let guard = GitHubMockGuard::start().await;
  guard
    .mount_status(
      "ReactionMechanismGenerator",
      "RMG-Py",
      403,
      serde_json::json!({
          "message": "API rate limit exceeded for 127.0.0.1.",
          "documentation_url": "https://docs.github.com/rest/overview/resources-in-the-rest-api#rate-limiting"
      }),
    )
    .await;
  let client = create_github_client(None).with_base_url(&guard.uri());

  let error = client
    .list_branches("ReactionMechanismGenerator", "RMG-Py", 1, 100)
    .await
    .unwrap_err()
    .to_string();
  assert!(error.contains("authentication or rate limit"));
  assert!(error.contains("API rate limit exceeded"));

  Ok(())
}

#[tokio::test]
async fn test_list_branches_server_error() -> anyhow::Result<()> {
  let guard = GitHubMockGuard::start().await;
  guard
    .mount_status("ReactionMechanismGenerator", "RMG-Py", 502, serde_json::json!({}))
    .await;
  let client = create_github_client(None).with_base_url(&guard.uri());

  let error = client
    .list_branches("ReactionMechanismGenerator", "RMG-Py", 1, 100)
    .await
    .unwrap_err();
  assert!(error.to_string().contains("Unexpected error: HTTP 502"));

  Ok(())
}

#[tokio::test]
async fn test_list_branches_rejects_object_body() -> anyhow::Result<()> {
  let mock_server = MockServer::start().await;
  let client = create_github_client(None).with_base_url(&mock_server.uri());

  Mock::given(method("GET"))
    .and(path("/repos/ReactionMechanismGenerator/RMG-Py/branches"))
    .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "message": "Moved Permanently" })))
    .mount(&mock_server)
    .await;

  let error = client
    .list_branches("ReactionMechanismGenerator", "RMG-Py", 1, 100)
    .await
    .unwrap_err();
  assert!(
    error
      .to_string()
      .contains("Failed to parse branches: GitHub API error: Moved Permanently")
  );

  Ok(())
}

#[tokio::test]
async fn test_list_branches_rejects_entries_without_name() -> anyhow::Result<()> {
  let mock_server = MockServer::start().await;
  let client = create_github_client(None).with_base_url(&mock_server.uri());

  Mock::given(method("GET"))
    .and(path("/repos/ReactionMechanismGenerator/RMG-Py/branches"))
    .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{ "name": "main" }, { "label": "x" }])))
    .mount(&mock_server)
    .await;

  let result = client.list_branches("ReactionMechanismGenerator", "RMG-Py", 1, 100).await;
  assert!(result.unwrap_err().to_string().starts_with("Failed to parse branches"));

  Ok(())
}

#[tokio::test]
async fn test_list_branches_connection_refused() -> anyhow::Result<()> {
  // Nothing listens on port 1
  let client = create_github_client(None).with_base_url("http://127.0.0.1:1");

  let error = client
    .list_branches("ReactionMechanismGenerator", "RMG-Py", 1, 100)
    .await
    .unwrap_err();
  assert!(
    error
      .to_string()
      .contains("Failed to fetch branches for ReactionMechanismGenerator/RMG-Py")
  );

  Ok(())
}
