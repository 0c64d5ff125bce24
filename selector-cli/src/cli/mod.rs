//! # Command Line Interface
//!
//! Defines the CLI structure and dispatches to the command handlers of the
//! branch selector.

mod config;
mod list;
mod search;
mod select;

use std::path::PathBuf;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand};
use selector_core::ColorMode;

use crate::context::AppContext;

/// Top-level CLI command for the branch selector
#[derive(Parser)]
#[command(name = "branch-selector")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Search and pick branches of the RMG repositories")]
#[command(
  long_about = "Fetches the branches of RMG-Py and RMG-database from GitHub and offers\n\
        prefix search over them, either one-shot or through an interactive picker."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    global = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Read settings from this file instead of the default config location
  #[arg(long, global = true, value_name = "PATH")]
  pub config: Option<PathBuf>,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for the branch selector
#[derive(Subcommand)]
pub enum Commands {
  /// List every branch of a repository
  #[command(long_about = "Fetch the branches of one repository and print them.\n\n\
            Only the first page of results is requested (100 branches by default).")]
  #[command(alias = "ls")]
  List(list::ListArgs),

  /// Search the branches of a repository by prefix
  #[command(long_about = "Load both repositories and print the branches of one of them whose\n\
            name starts with the query. The query is lowercased before matching.\n\
            An empty query prints every branch.")]
  #[command(alias = "s")]
  Search(search::SearchArgs),

  /// Interactively pick a branch for each repository
  #[command(long_about = "Prompt for search text for RMG-Py and RMG-database in turn, narrow the\n\
            branch list by prefix and pick a branch from the matches.")]
  Select(select::SelectArgs),

  /// Show the effective configuration
  Config(config::ConfigArgs),
}

pub fn handle_cli(cli: Cli) -> Result<()> {
  cli.colors.apply();

  let ctx = AppContext::load(cli.config)?;

  match cli.command {
    Commands::List(args) => list::handle_list_command(&ctx, args),
    Commands::Search(args) => search::handle_search_command(&ctx, args),
    Commands::Select(args) => select::handle_select_command(&ctx, args),
    Commands::Config(args) => config::handle_config_command(&ctx, args),
  }
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;
  use selector_core::TrackedRepo;

  use super::*;

  #[test]
  fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_parse_search_with_verbosity() {
    let cli = Cli::try_parse_from(["branch-selector", "-vv", "search", "rmg-py", "ma"]).unwrap();
    assert_eq!(cli.verbose, 2);
    match cli.command {
      Commands::Search(args) => {
        assert_eq!(args.repo, TrackedRepo::RmgPy);
        assert_eq!(args.query.as_deref(), Some("ma"));
      }
      _ => panic!("expected search command"),
    }
  }

  #[test]
  fn test_repo_accepts_api_spelling() {
    let cli = Cli::try_parse_from(["branch-selector", "list", "RMG-database"]).unwrap();
    assert!(matches!(cli.command, Commands::List(args) if args.repo == TrackedRepo::RmgDatabase));
  }

  #[test]
  fn test_unknown_repo_is_rejected() {
    assert!(Cli::try_parse_from(["branch-selector", "list", "RMG-Java"]).is_err());
  }
}
