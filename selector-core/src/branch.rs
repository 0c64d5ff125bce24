//! # Branch Model
//!
//! Branch values offered by the selector, the per-repository branch lists
//! they are grouped into, and the two repositories the selector tracks.

use std::fmt;
use std::future::Future;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A single selectable branch
///
/// `value` is the raw branch name and `display` is what a view renders. Both
/// are the branch name when built through [`Branch::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Branch {
  pub value: String,
  pub display: String,
}

impl Branch {
  /// Create a branch whose display text is its name
  pub fn new(name: impl Into<String>) -> Self {
    let value = name.into();
    let display = value.clone();
    Self { value, display }
  }
}

impl fmt::Display for Branch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.display)
  }
}

/// Ordered branches of one repository, in the order the API returned them.
///
/// Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BranchList(Vec<Branch>);

impl BranchList {
  /// Build a list from raw branch names
  pub fn from_names<I, S>(names: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    names.into_iter().map(Branch::new).collect()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Branch> {
    self.0.iter()
  }

  pub fn as_slice(&self) -> &[Branch] {
    &self.0
  }

  /// Raw branch names in list order
  pub fn names(&self) -> Vec<&str> {
    self.0.iter().map(|b| b.value.as_str()).collect()
  }
}

impl FromIterator<Branch> for BranchList {
  fn from_iter<T: IntoIterator<Item = Branch>>(iter: T) -> Self {
    Self(iter.into_iter().collect())
  }
}

impl From<Vec<Branch>> for BranchList {
  fn from(branches: Vec<Branch>) -> Self {
    Self(branches)
  }
}

impl IntoIterator for BranchList {
  type Item = Branch;
  type IntoIter = std::vec::IntoIter<Branch>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.into_iter()
  }
}

impl<'a> IntoIterator for &'a BranchList {
  type Item = &'a Branch;
  type IntoIter = std::slice::Iter<'a, Branch>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}

/// The repositories whose branches the selector offers
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackedRepo {
  /// The RMG-Py code repository
  #[value(name = "rmg-py", alias = "RMG-Py")]
  RmgPy,
  /// The RMG-database repository
  #[value(name = "rmg-database", alias = "RMG-database")]
  RmgDatabase,
}

impl TrackedRepo {
  /// Every tracked repository, in display order
  pub const ALL: [TrackedRepo; 2] = [TrackedRepo::RmgPy, TrackedRepo::RmgDatabase];

  /// Repository name as used in GitHub API paths
  pub const fn api_name(self) -> &'static str {
    match self {
      TrackedRepo::RmgPy => "RMG-Py",
      TrackedRepo::RmgDatabase => "RMG-database",
    }
  }
}

impl fmt::Display for TrackedRepo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.api_name())
  }
}

/// Anything that can produce the branch list of a repository.
///
/// The GitHub client implements this; the controller only sees the trait.
pub trait BranchSource {
  /// Fetch the branches of `repo`. Each call performs a fresh lookup.
  fn fetch_branches(&self, repo: &str) -> impl Future<Output = Result<BranchList>> + Send;
}
