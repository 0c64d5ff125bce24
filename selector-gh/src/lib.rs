//! # GitHub API Client
//!
//! Fetches repository branch listings from the GitHub REST API and exposes
//! them to the selector as a [`selector_core::BranchSource`].

pub mod client;
pub mod consts;
pub mod endpoints;
pub mod models;
pub mod source;

// Re-export the client
pub use client::{GitHubClient, create_github_client, create_github_client_from_env};
// Re-export models
pub use models::{GitHubAuth, GitHubBranch, GitHubCommitRef};
pub use source::GitHubBranchSource;
