//! Storage layer for the navigation daemon.
//!
//! Provides JSON-file persistence with:
//! - Whole-graph snapshot load/save for the location graph
//! - Location metadata (GPS coordinates, campus tag) records
//! - Atomic writes (temp file + rename) so a crash never leaves a torn file

mod error;
mod graph_file;
mod json_file;
mod locations;

pub use error::StorageError;
pub use graph_file::GraphFile;
pub use locations::{Location, LocationError, LocationStore};
