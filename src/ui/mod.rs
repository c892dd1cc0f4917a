//! User interface and interaction
//!
//! This module contains all components related to user interaction,
//! including CLI parsing and console output formatting.

pub mod cli;
pub mod color;
pub mod output;

// Re-export commonly used items
pub use cli::{Cli, cli_to_config, validate_cli_args};
