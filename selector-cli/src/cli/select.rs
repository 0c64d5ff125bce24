//! # Select Command
//!
//! Interactive picker: for each repository, prompt for search text, narrow
//! the branch list by prefix and let the user pick one of the matches.

use anyhow::{Context, Result};
use clap::Args;
use dialoguer::{Input, Select};
use selector_core::output::{format_branch, format_repo_name, print_header, print_info, print_success, print_warning};
use selector_core::{BranchSelectorController, TrackedRepo};
use tokio::runtime::Runtime;
use tracing::debug;

use crate::context::AppContext;
use crate::prompts::selector_theme;

/// Command for picking branches interactively
#[derive(Args)]
pub struct SelectArgs {
  /// Only pick a branch for this repository
  #[arg(long, value_enum, value_name = "REPO")]
  pub repo: Option<TrackedRepo>,
}

pub(crate) fn handle_select_command(ctx: &AppContext, args: SelectArgs) -> Result<()> {
  let (rt, source) = ctx.runtime_and_source()?;
  let mut controller = rt.block_on(BranchSelectorController::load(&source, ctx.config.latency()));

  let repos: Vec<TrackedRepo> = match args.repo {
    Some(repo) => vec![repo],
    None => TrackedRepo::ALL.to_vec(),
  };

  for &repo in &repos {
    pick_branch(&rt, &mut controller, repo)?;
  }

  print_header("Selected branches");
  for &repo in &repos {
    match controller.slot(repo).selected_branch() {
      Some(branch) => println!("  {}: {}", format_repo_name(repo), format_branch(branch)),
      None => println!("  {}: -", format_repo_name(repo)),
    }
  }

  Ok(())
}

fn pick_branch(rt: &Runtime, controller: &mut BranchSelectorController, repo: TrackedRepo) -> Result<()> {
  match controller.slot(repo).branches() {
    None => {
      print_warning(&format!("Branches for {} are unavailable", format_repo_name(repo)));
      return Ok(());
    }
    Some(branches) if branches.is_empty() => {
      print_warning(&format!("{} has no branches", format_repo_name(repo)));
      return Ok(());
    }
    Some(_) => {}
  }

  let theme = selector_theme();
  loop {
    let text: String = Input::with_theme(&theme)
      .with_prompt(format!("Search {repo} branches"))
      .allow_empty(true)
      .interact_text()
      .context("Failed to read search text")?;

    let query = Some(text.as_str()).filter(|t| !t.is_empty());
    let matches = rt
      .block_on(controller.search(repo, query))
      .map(<[_]>::to_vec)
      .unwrap_or_default();
    debug!(%repo, ?query, matches = matches.len(), "Search finished");

    if matches.is_empty() {
      print_info(&format!("No branches start with '{text}', try again"));
      continue;
    }

    let items: Vec<&str> = matches.iter().map(|b| b.display.as_str()).collect();
    let choice = Select::with_theme(&theme)
      .with_prompt(format!("Pick a {repo} branch (Esc to search again)"))
      .items(&items)
      .default(0)
      .max_length(15)
      .interact_opt()
      .context("Failed to read branch choice")?;

    if let Some(index) = choice {
      let branch = matches[index].clone();
      print_success(&format!("Selected {} for {}", format_branch(&branch), format_repo_name(repo)));
      controller.slot_mut(repo).select(branch);
      return Ok(());
    }
  }
}
