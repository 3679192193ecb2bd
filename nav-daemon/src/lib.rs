//! nav-daemon library - HTTP service around the campus navigation graph.
//!
//! This library provides:
//! - Storage layer (JSON graph file, GPS location metadata)
//! - Axum router and shared application state

pub mod server;
pub mod storage;
