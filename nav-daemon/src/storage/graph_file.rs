//! Whole-graph persistence: `{location: {neighbor: distance}}` JSON.

use nav_core::{Adjacency, GraphStore, Snapshot};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::error::StorageError;
use super::json_file::{read_json, write_json_atomic};

/// The graph's backing file.
///
/// The daemon loads it once before serving and saves a fresh snapshot after
/// every successful mutation.
#[derive(Debug, Clone)]
pub struct GraphFile {
    path: PathBuf,
}

impl GraphFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the graph. A missing or empty file yields an empty graph.
    pub fn load(&self) -> Result<GraphStore, StorageError> {
        let adjacency: Adjacency = match read_json(&self.path)? {
            Some(adjacency) => adjacency,
            None => {
                info!("No graph at {:?}, starting empty", self.path);
                return Ok(GraphStore::new());
            }
        };

        let store =
            GraphStore::from_adjacency(adjacency).map_err(|source| StorageError::InvalidGraph {
                path: self.path.clone(),
                source,
            })?;
        debug!(
            "Loaded {} locations, {} paths from {:?}",
            store.node_count(),
            store.edge_count(),
            self.path
        );
        Ok(store)
    }

    /// Persist a snapshot, replacing the file atomically.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), StorageError> {
        write_json_atomic(&self.path, snapshot)?;
        debug!(
            "Saved {} locations to {:?}",
            snapshot.node_count(),
            self.path
        );
        Ok(())
    }
}
