//! # Config Command
//!
//! Shows the effective settings and where they were loaded from.

use anyhow::{Context, Result};
use clap::Args;
use selector_core::output::{print_header, print_info};

use crate::context::AppContext;

/// Command for showing the effective configuration
#[derive(Args)]
pub struct ConfigArgs {
  /// Only print the config file path
  #[arg(long)]
  pub path: bool,
}

pub(crate) fn handle_config_command(ctx: &AppContext, args: ConfigArgs) -> Result<()> {
  if args.path {
    println!("{}", ctx.config_path.display());
    return Ok(());
  }

  if ctx.config_path.exists() {
    print_info(&format!("Loaded from {}", ctx.config_path.display()));
  } else {
    print_info(&format!("No config file at {}, using defaults", ctx.config_path.display()));
  }

  print_header("Effective configuration");
  let content = toml::to_string_pretty(&ctx.config).context("Failed to serialize config to TOML")?;
  println!("{content}");

  Ok(())
}
