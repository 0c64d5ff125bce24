//! # GitHub API Endpoints
//!
//! Endpoint implementations used by the branch selector.

pub mod branches;
