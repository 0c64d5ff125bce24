//! # Branch Selector Controller
//!
//! Holds one search slot per tracked repository. Slots are populated by a
//! [`BranchSource`] at load time and afterwards only see query and selection
//! updates coming from the view.

use tracing::{debug, warn};

use crate::branch::{Branch, BranchList, BranchSource, TrackedRepo};
use crate::search::{SimulatedLatency, query_search};

/// Handle for one issued query, used to order results that arrive late
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
  seq: u64,
  text: Option<String>,
}

impl QueryTicket {
  pub const fn seq(&self) -> u64 {
    self.seq
  }

  /// The search text this ticket was issued for
  pub fn text(&self) -> Option<&str> {
    self.text.as_deref()
  }
}

/// Per-repository state bound to one autocomplete field
#[derive(Debug, Clone, Default)]
pub struct SearchSlot {
  branches: Option<BranchList>,
  selected_branch: Option<Branch>,
  search_text: Option<String>,
  matches: Vec<Branch>,
  issued: u64,
  applied: u64,
}

impl SearchSlot {
  /// Fetched branches, or `None` while unset or after a failed fetch
  pub fn branches(&self) -> Option<&BranchList> {
    self.branches.as_ref()
  }

  pub fn selected_branch(&self) -> Option<&Branch> {
    self.selected_branch.as_ref()
  }

  pub fn search_text(&self) -> Option<&str> {
    self.search_text.as_deref()
  }

  /// Results of the newest query applied so far
  pub fn matches(&self) -> &[Branch] {
    &self.matches
  }

  pub(crate) fn populate(&mut self, branches: BranchList) {
    self.branches = Some(branches);
  }

  /// Record new search text and hand out a ticket for its results
  pub fn begin_query(&mut self, text: Option<&str>) -> QueryTicket {
    self.issued += 1;
    self.search_text = text.map(str::to_string);
    QueryTicket {
      seq: self.issued,
      text: self.search_text.clone(),
    }
  }

  /// Apply results for `ticket` unless a newer query already landed.
  ///
  /// Returns whether the results were applied.
  pub fn complete_query(&mut self, ticket: &QueryTicket, results: Vec<Branch>) -> bool {
    if ticket.seq <= self.applied {
      warn!(
        ticket = ticket.seq,
        applied = self.applied,
        "Dropping stale query results"
      );
      return false;
    }
    self.applied = ticket.seq;
    self.matches = results;
    true
  }

  pub fn select(&mut self, branch: Branch) {
    self.selected_branch = Some(branch);
  }

  pub fn clear_selection(&mut self) {
    self.selected_branch = None;
  }
}

/// Search state for both tracked repositories
#[derive(Debug, Clone, Default)]
pub struct BranchSelectorController {
  rmg_py: SearchSlot,
  rmg_database: SearchSlot,
  latency: SimulatedLatency,
}

impl BranchSelectorController {
  /// Create a controller with empty slots
  pub fn new(latency: SimulatedLatency) -> Self {
    Self {
      latency,
      ..Default::default()
    }
  }

  /// Create a controller and fetch both repositories concurrently.
  ///
  /// A failed fetch is logged and leaves its slot unset; it never fails the
  /// load.
  pub async fn load<S: BranchSource>(source: &S, latency: SimulatedLatency) -> Self {
    let mut controller = Self::new(latency);
    let (rmg_py, rmg_database) = tokio::join!(
      source.fetch_branches(TrackedRepo::RmgPy.api_name()),
      source.fetch_branches(TrackedRepo::RmgDatabase.api_name()),
    );

    for (repo, result) in [(TrackedRepo::RmgPy, rmg_py), (TrackedRepo::RmgDatabase, rmg_database)] {
      match result {
        Ok(branches) => {
          debug!(%repo, count = branches.len(), "Loaded branches");
          controller.slot_mut(repo).populate(branches);
        }
        Err(e) => warn!(%repo, "Failed to load branches: {e:#}"),
      }
    }

    controller
  }

  pub const fn latency(&self) -> SimulatedLatency {
    self.latency
  }

  pub const fn slot(&self, repo: TrackedRepo) -> &SearchSlot {
    match repo {
      TrackedRepo::RmgPy => &self.rmg_py,
      TrackedRepo::RmgDatabase => &self.rmg_database,
    }
  }

  pub const fn slot_mut(&mut self, repo: TrackedRepo) -> &mut SearchSlot {
    match repo {
      TrackedRepo::RmgPy => &mut self.rmg_py,
      TrackedRepo::RmgDatabase => &mut self.rmg_database,
    }
  }

  /// Filter an arbitrary branch list with this controller's latency
  pub async fn query(&self, text: Option<&str>, branches: &[Branch]) -> Vec<Branch> {
    query_search(text, branches, self.latency).await
  }

  /// Run a query against a repository's slot and apply the results.
  ///
  /// Returns `None` when the slot has no branches because its fetch failed.
  /// The controller stays borrowed until the results land, so calls through
  /// here are applied in order. Views that keep typing while a query is in
  /// flight drive [`SearchSlot::begin_query`] and [`SearchSlot::complete_query`]
  /// themselves and apply results as they arrive.
  pub async fn search(&mut self, repo: TrackedRepo, text: Option<&str>) -> Option<&[Branch]> {
    let branches = self.slot(repo).branches()?.clone();
    let ticket = self.slot_mut(repo).begin_query(text);
    let results = self.query(ticket.text(), branches.as_slice()).await;
    let slot = self.slot_mut(repo);
    slot.complete_query(&ticket, results);
    Some(slot.matches())
  }
}
