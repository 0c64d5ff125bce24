//! Constants for the selector-gh client

/// Base URL for the official SaaS GitHub API
pub const API_BASE_URL: &str = "https://api.github.com";

/// User-Agent header value; GitHub rejects requests without one
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Accept header value for the GitHub API
pub const ACCEPT: &str = "application/vnd.github.v3+json";

/// Environment variable holding an optional GitHub token
pub const ENV_GITHUB_TOKEN: &str = "GITHUB_TOKEN";
