//! # Prompts Module
//!
//! Dialoguer theme used by the interactive branch picker.

use console::Style;
use dialoguer::theme::ColorfulTheme;

/// Cyan prompts with a green `❯` marking the highlighted branch
pub fn selector_theme() -> ColorfulTheme {
  ColorfulTheme {
    prompt_style: Style::new().cyan().bold(),
    active_item_prefix: Style::new().green().apply_to("❯ ".to_string()),
    active_item_style: Style::new().green(),
    ..ColorfulTheme::default()
  }
}
