//! Command implementations for the nav CLI.
//!
//! Each command module provides `run` functions that load the graph file,
//! apply one operation and render the result.

pub mod edit;
pub mod path;
pub mod show;
pub mod stats;

use anyhow::{Context, Result};
use nav_core::GraphStore;
use nav_daemon::storage::GraphFile;
use std::path::Path;

/// Load the graph file, failing with the path in the message.
pub fn load_graph(path: &Path) -> Result<GraphStore> {
    GraphFile::new(path)
        .load()
        .with_context(|| format!("Failed to load graph from {}", path.display()))
}
