//! Menu presentation, choice and confirmation.
//!
//! This module provides the line-based user interface of xmv: a numbered
//! menu of the patterns whose preview succeeded, a single menu answer, and a
//! y/n confirmation before the real rename.
//!
//! # User Interface
//!
//! The interface supports:
//! - A 1-based number to choose a pattern
//! - `q` or an empty line to quit
//! - `y` to confirm the rename, anything else to decline
//!
//! No prompt is ever repeated; one bad answer ends the run.

// Export public items from submodules
pub mod input;
pub mod types;
pub mod ui;

// Re-exports for convenience
pub use input::{confirm_rename, prompt_for_menu_choice};
pub use types::{MenuChoice, RunChoice};
pub use ui::{present_menu, present_preview, present_rename_output};

/// Answer that quits from the menu, compared case-insensitively
pub const QUIT_OPTION: &str = "q";

/// Answer that confirms the rename, compared case-insensitively
pub const CONFIRM_OPTION: &str = "y";
