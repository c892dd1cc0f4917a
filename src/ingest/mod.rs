//! Input loading
//!
//! This module reads the sets and sessions tables, repairs malformed
//! numeric cells and joins session dates onto the sets.

pub mod loader;
pub mod paths;
pub mod reader;

// Re-export commonly used items
pub use loader::{LoadReport, SessionsStatus, load_dataset};
pub use paths::{InputPaths, companion_sessions_path};
pub use reader::{load_sessions, load_sets};
