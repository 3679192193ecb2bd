//! Graph editing commands: add-location, add-path, remove-path,
//! delete-location.
//!
//! Every edit is load, apply, save. A rejected edit leaves the file untouched.

use anyhow::{bail, Context, Result};
use nav_core::GraphStore;
use nav_daemon::storage::GraphFile;
use std::path::Path;
use tracing::{debug, info};

use super::load_graph;
use crate::output::{format_distance, OutputConfig, Outputter, SuccessMessage};

fn apply<T, F>(path: &Path, op: F) -> Result<T>
where
    F: FnOnce(&mut GraphStore) -> nav_core::Result<T>,
{
    let mut store = load_graph(path)?;
    let value = op(&mut store)?;
    GraphFile::new(path)
        .save(&store.snapshot())
        .with_context(|| format!("Failed to save graph to {}", path.display()))?;
    debug!(
        "Saved {} locations, {} paths to {:?}",
        store.node_count(),
        store.edge_count(),
        path
    );
    Ok(value)
}

pub fn add_location(path: &Path, name: &str, config: &OutputConfig) -> Result<()> {
    if name.trim().is_empty() {
        bail!("Location name must not be empty");
    }
    apply(path, |g| g.add_node(name))?;
    info!("Added location '{}'", name);
    SuccessMessage::new(format!("Location '{}' added", name)).output(config);
    Ok(())
}

pub fn add_path(
    path: &Path,
    from: &str,
    to: &str,
    distance: f64,
    config: &OutputConfig,
) -> Result<()> {
    apply(path, |g| g.add_or_update_edge(from, to, distance))?;
    info!("Set path {} <-> {} to {}", from, to, distance);
    SuccessMessage::new(format!(
        "Path added: {} <-> {} ({})",
        from,
        to,
        format_distance(distance)
    ))
    .output(config);
    Ok(())
}

pub fn remove_path(path: &Path, from: &str, to: &str, config: &OutputConfig) -> Result<()> {
    let removed = apply(path, |g| Ok(g.remove_edge(from, to)))?;
    let message = if removed {
        format!("Path removed between {} and {}", from, to)
    } else {
        format!("No path between {} and {}; nothing to remove", from, to)
    };
    SuccessMessage::new(message).output(config);
    Ok(())
}

pub fn delete_location(path: &Path, name: &str, config: &OutputConfig) -> Result<()> {
    apply(path, |g| g.delete_node(name))?;
    info!("Deleted location '{}'", name);
    SuccessMessage::new(format!("Location '{}' deleted", name)).output(config);
    Ok(())
}
