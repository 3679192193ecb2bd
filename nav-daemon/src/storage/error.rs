//! Storage error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors reading or writing the daemon's JSON files.
#[derive(Error, Debug)]
pub enum StorageError {
    /// File exists but could not be read.
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File could not be written or moved into place.
    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File contents are not valid JSON of the expected shape.
    #[error("Malformed JSON in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Value could not be serialized.
    #[error("Failed to serialize {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Graph file parsed but breaks a graph invariant.
    #[error("Invalid graph in {path:?}: {source}")]
    InvalidGraph {
        path: PathBuf,
        #[source]
        source: nav_core::GraphError,
    },
}
