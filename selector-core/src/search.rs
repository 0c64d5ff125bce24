//! # Branch Search
//!
//! Prefix filtering for branch autocomplete, and the delayed query used to
//! emulate a remote lookup.

use std::time::Duration;

use rand::Rng;
use tracing::trace;

use crate::branch::Branch;

/// Upper bound for the artificial delay applied to query results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
  max: Duration,
}

impl SimulatedLatency {
  /// Delay results by a uniformly random duration in `[0, max)`
  pub const fn up_to(max: Duration) -> Self {
    Self { max }
  }

  /// Deliver results immediately
  pub const fn none() -> Self {
    Self { max: Duration::ZERO }
  }

  pub const fn max(&self) -> Duration {
    self.max
  }

  /// Pick the delay for one query
  pub fn sample(&self) -> Duration {
    let max_ms = u64::try_from(self.max.as_millis()).unwrap_or(u64::MAX);
    if max_ms == 0 {
      return Duration::ZERO;
    }
    Duration::from_millis(rand::thread_rng().gen_range(0..max_ms))
  }
}

impl Default for SimulatedLatency {
  fn default() -> Self {
    Self::up_to(Duration::from_millis(1000))
  }
}

/// Build the match predicate for a query.
///
/// Only the query is lowercased. Branch names are compared as stored, so
/// `"MA"` finds `master` while a branch named `Master` is never matched.
pub fn create_filter_for(query: &str) -> impl Fn(&Branch) -> bool + use<> {
  let lowercase_query = query.to_lowercase();
  move |branch: &Branch| branch.value.starts_with(&lowercase_query)
}

/// Filter `branches` down to the ones matching `query`.
///
/// An absent or empty query returns every branch.
pub fn filter_branches(query: Option<&str>, branches: &[Branch]) -> Vec<Branch> {
  match query {
    Some(query) if !query.is_empty() => {
      let matches = create_filter_for(query);
      branches.iter().filter(|b| matches(b)).cloned().collect()
    }
    _ => branches.to_vec(),
  }
}

/// Filter `branches` and hand back the result after a simulated delay.
///
/// Never fails. Overlapping calls are not ordered with respect to each
/// other; callers that care use [`crate::controller::SearchSlot`] tickets.
pub async fn query_search(query: Option<&str>, branches: &[Branch], latency: SimulatedLatency) -> Vec<Branch> {
  let results = filter_branches(query, branches);
  let delay = latency.sample();
  trace!(?query, matches = results.len(), ?delay, "Delivering query results");
  if !delay.is_zero() {
    tokio::time::sleep(delay).await;
  }
  results
}
