//! # Branch Selector Entry Point
//!
//! Command-line front end for searching and picking branches of the RMG
//! repositories.

use anyhow::Result;
use clap::Parser;
use cli::handle_cli;
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

mod cli;
mod context;
mod prompts;

fn main() -> Result<()> {
  let cmd = cli::Cli::parse();

  let level = match cmd.verbose {
    0 => tracing::Level::WARN,  // Default: warnings and errors
    1 => tracing::Level::INFO,  // -v: info, warnings, and errors
    2 => tracing::Level::DEBUG, // -vv: debug, info, warnings, and errors
    _ => tracing::Level::TRACE, // -vvv or more: trace and everything else
  };

  // Logs go to stderr so that --format json output stays parseable
  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr))
    .with(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  debug!("Tracing initialized with level: {}", level);

  handle_cli(cmd)
}
