//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod entry;
pub mod report;

pub use entry::{handle_add, handle_edit, handle_show, EntryArgs};
pub use report::{handle_export, handle_list, handle_projects, handle_summary};
