//! # Output Formatting
//!
//! Colored, emoji-prefixed status messages and branch formatting for the
//! terminal view.

use owo_colors::{OwoColorize, Stream, Style};

use crate::branch::{Branch, TrackedRepo};

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  Never,
}

impl ColorMode {
  /// Set the global color override for this mode
  pub fn apply(self) {
    match self {
      ColorMode::Always => owo_colors::set_override(true),
      ColorMode::Never => owo_colors::set_override(false),
      // owo_colors detects the terminal on its own
      ColorMode::Auto => {}
    }
  }
}

/// Apply `style` when `stream` supports colors and no override disables them
fn paint(text: &str, stream: Stream, style: Style) -> String {
  text.if_supports_color(stream, |t| t.style(style)).to_string()
}

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Print a success message
pub fn print_success(message: &str) {
  let check = get_emoji_or_default("check_mark", "✓");
  println!("{} {}", paint(&check, Stream::Stdout, Style::new().green().bold()), message);
}

/// Print an error message
pub fn print_error(message: &str) {
  let cross = get_emoji_or_default("cross_mark", "✗");
  eprintln!("{} {}", paint(&cross, Stream::Stderr, Style::new().red().bold()), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
  let warning = get_emoji_or_default("warning", "⚠");
  println!("{} {}", paint(&warning, Stream::Stdout, Style::new().yellow().bold()), message);
}

/// Print an info message
pub fn print_info(message: &str) {
  let info = get_emoji_or_default("information", "ℹ");
  println!("{} {}", paint(&info, Stream::Stdout, Style::new().blue().bold()), message);
}

/// Print a section header
pub fn print_header(header: &str) {
  println!("\n{}", paint(header, Stream::Stdout, Style::new().blue().bold()));
}

/// Format a repository name
pub fn format_repo_name(repo: TrackedRepo) -> String {
  paint(repo.api_name(), Stream::Stdout, Style::new().bright_cyan().bold())
}

/// Format a branch for a listing
pub fn format_branch(branch: &Branch) -> String {
  paint(&branch.display, Stream::Stdout, Style::new().bright_green())
}

/// Split `display` into the part matched by `query` and the rest
fn split_match<'a>(display: &'a str, query: Option<&str>) -> Option<(&'a str, &'a str)> {
  // Matching compares against the lowercased query, whose byte length can differ
  let matched_len = query.map(|q| q.to_lowercase().len()).unwrap_or(0);
  if matched_len == 0 {
    return None;
  }
  display.split_at_checked(matched_len)
}

/// Format a branch, highlighting the part matched by `query`
pub fn format_branch_match(branch: &Branch, query: Option<&str>) -> String {
  match split_match(&branch.display, query) {
    Some((head, tail)) => format!("{}{tail}", paint(head, Stream::Stdout, Style::new().bright_green().bold())),
    None => format_branch(branch),
  }
}
