//! Test utilities shared across the branch-selector workspace
//!
//! This crate provides common testing infrastructure including:
//! - XDG config and GitHub token isolation ([`EnvTestGuard`])
//! - A mock GitHub branches API ([`GitHubMockGuard`])
//!
//! The dead_code lint is disabled for this crate because test utilities may
//! not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod env;
pub mod github;

// Re-export commonly used items
pub use env::EnvTestGuard;
pub use github::GitHubMockGuard;
