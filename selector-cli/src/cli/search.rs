//! # Search Command
//!
//! Loads the controller for both repositories and runs one prefix query
//! against the requested slot.

use anyhow::{Context, Result};
use clap::Args;
use selector_core::output::{format_branch_match, format_repo_name, print_header, print_info, print_warning};
use selector_core::{BranchSelectorController, TrackedRepo};
use tracing::warn;

use crate::context::AppContext;

/// Command for searching the branches of a repository
#[derive(Args)]
pub struct SearchArgs {
  /// Repository to search
  #[arg(value_enum, value_name = "REPO")]
  pub repo: TrackedRepo,

  /// Branch name prefix; omit to show every branch
  #[arg(value_name = "QUERY")]
  pub query: Option<String>,

  /// Output format
  #[arg(long, short = 'f', value_name = "FORMAT", value_parser = ["text", "json"], default_value = "text")]
  pub format: String,
}

pub(crate) fn handle_search_command(ctx: &AppContext, args: SearchArgs) -> Result<()> {
  let (rt, source) = ctx.runtime_and_source()?;
  let query = args.query.as_deref();

  let matches = rt.block_on(async {
    let mut controller = BranchSelectorController::load(&source, ctx.config.latency()).await;
    controller.search(args.repo, query).await.map(<[_]>::to_vec)
  });

  // A repository that failed to load shows up as unavailable, not as an error
  let Some(matches) = matches else {
    if args.format == "json" {
      // stdout stays valid JSON; the notice goes to the log on stderr
      warn!(repo = %args.repo, "Branches are unavailable");
      println!("null");
    } else {
      print_warning(&format!(
        "Branches for {} are unavailable",
        format_repo_name(args.repo)
      ));
    }
    return Ok(());
  };

  match args.format.as_str() {
    "json" => {
      let json = serde_json::to_string_pretty(&matches).context("Failed to serialize branches")?;
      println!("{json}");
    }
    _ => {
      print_header(&format_repo_name(args.repo));
      if matches.is_empty() {
        print_info(&format!("No branches start with '{}'", query.unwrap_or_default()));
      }
      for branch in &matches {
        println!("  {}", format_branch_match(branch, query));
      }
    }
  }

  Ok(())
}
