//! nav-core: weighted location graph and shortest-path engine.
//!
//! This crate is the synchronous core behind campus navigation. It owns the
//! location graph, enforces its structural invariants, and answers
//! shortest-path queries. HTTP, persistence and location metadata live in
//! `nav-daemon` and `nav-cli`.
//!
//! # Features
//!
//! - **Graph store**: undirected, positively weighted, symmetric adjacency
//!   with all-or-nothing mutations
//! - **Snapshots**: frozen, cheaply cloned views for concurrent queries
//! - **Dijkstra**: binary min-heap with lazy decrease-key
//!
//! # Usage
//!
//! ```
//! use nav_core::{GraphStore, PathOutcome};
//!
//! let mut store = GraphStore::new();
//! for name in ["Main Gate", "Library", "Canteen"] {
//!     store.add_node(name)?;
//! }
//! store.add_or_update_edge("Main Gate", "Library", 120.0)?;
//! store.add_or_update_edge("Library", "Canteen", 80.0)?;
//!
//! let snapshot = store.snapshot();
//! match snapshot.shortest_path("Main Gate", "Canteen") {
//!     PathOutcome::Found(route) => assert_eq!(route.distance, 200.0),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! # Ok::<(), nav_core::GraphError>(())
//! ```

pub mod error;
pub mod graph;
pub mod pathfinding;

pub use error::{GraphError, Result};
pub use graph::{Adjacency, GraphStore, Neighbors, Snapshot, MAX_DISTANCE};
pub use pathfinding::{distances_from, shortest_path, PathOutcome, Route};
