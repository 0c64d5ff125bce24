//! # List Command
//!
//! Fetches one repository's branches straight from the fetcher and prints
//! them. Unlike `search`, a failed fetch is an error.

use anyhow::{Context, Result};
use clap::Args;
use selector_core::output::{format_branch, format_repo_name, print_header, print_info};
use selector_core::{BranchSource, TrackedRepo};

use crate::context::AppContext;

/// Command for listing the branches of a repository
#[derive(Args)]
pub struct ListArgs {
  /// Repository to list
  #[arg(value_enum, value_name = "REPO")]
  pub repo: TrackedRepo,

  /// Output format
  #[arg(long, short = 'f', value_name = "FORMAT", value_parser = ["text", "json"], default_value = "text")]
  pub format: String,
}

pub(crate) fn handle_list_command(ctx: &AppContext, args: ListArgs) -> Result<()> {
  let (rt, source) = ctx.runtime_and_source()?;

  let branches = rt
    .block_on(source.fetch_branches(args.repo.api_name()))
    .with_context(|| format!("Failed to list branches of {}", args.repo))?;

  match args.format.as_str() {
    "json" => {
      let json = serde_json::to_string_pretty(&branches).context("Failed to serialize branches")?;
      println!("{json}");
    }
    _ => {
      print_header(&format_repo_name(args.repo));
      if branches.is_empty() {
        print_info("No branches found");
      }
      for branch in &branches {
        println!("  {}", format_branch(branch));
      }
    }
  }

  Ok(())
}
