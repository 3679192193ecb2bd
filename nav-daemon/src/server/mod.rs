//! HTTP server for the navigation daemon.
//!
//! Provides REST API for:
//! - Health and status checks
//! - Graph editing (locations and paths)
//! - Shortest-path queries
//! - GPS location metadata

mod http;
pub mod state;

pub use http::create_router;
pub use state::{AppState, MutationError};
