//! # Selector Core Library
//!
//! Branch model, prefix search and the per-repository controller behind the
//! branch selector, plus the configuration and output helpers shared by its
//! front end.

pub mod branch;
pub mod config;
pub mod controller;
pub mod output;
pub mod search;

pub use branch::{Branch, BranchList, BranchSource, TrackedRepo};
pub use config::{ConfigDirs, SelectorConfig, get_config_dirs};
pub use controller::{BranchSelectorController, QueryTicket, SearchSlot};
pub use output::{ColorMode, print_error, print_info, print_success, print_warning};
pub use search::{SimulatedLatency, create_filter_for, filter_branches, query_search};
