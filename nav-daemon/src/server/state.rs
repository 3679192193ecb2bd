//! Shared application state for the server.

use chrono::{DateTime, Utc};
use nav_core::{GraphError, GraphStore, Snapshot};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::error;

use crate::storage::{GraphFile, LocationStore, StorageError};

/// Why a graph mutation did not take effect.
#[derive(Error, Debug)]
pub enum MutationError {
    /// Rejected by the graph store; nothing changed.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Applied in memory but could not be saved; rolled back.
    #[error(transparent)]
    Persist(#[from] StorageError),
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Authoritative location graph
    pub store: Arc<RwLock<GraphStore>>,
    /// Backing file for the graph
    pub graph_file: Arc<GraphFile>,
    /// GPS metadata for map rendering
    pub locations: Arc<RwLock<LocationStore>>,
    pub start_time: Instant,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(store: GraphStore, graph_file: GraphFile, locations: LocationStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            graph_file: Arc::new(graph_file),
            locations: Arc::new(RwLock::new(locations)),
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Frozen view of the graph for queries. The read lock is held only long
    /// enough to clone the snapshot handle.
    pub async fn snapshot(&self) -> Snapshot {
        self.store.read().await.snapshot()
    }

    /// Apply a mutation and persist the result.
    ///
    /// Mutations are serialized by the write lock. If saving fails the store
    /// is restored to its pre-mutation snapshot, so memory and disk agree.
    ///
    /// The save (write, fsync, rename) runs inline on the async worker while
    /// the write lock is held. Graph files are a few kilobytes and edits are
    /// rare admin actions; queries only need the read lock for an `Arc`
    /// clone, so they wait at most one save.
    pub async fn mutate<T, F>(&self, op: F) -> Result<T, MutationError>
    where
        F: FnOnce(&mut GraphStore) -> nav_core::Result<T>,
    {
        let mut store = self.store.write().await;
        let before = store.snapshot();
        let value = op(&mut *store)?;

        if let Err(e) = self.graph_file.save(&store.snapshot()) {
            error!("Failed to persist graph, rolling back: {}", e);
            *store = GraphStore::from_snapshot(before);
            return Err(e.into());
        }
        Ok(value)
    }

    pub fn uptime_seconds(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }
}
