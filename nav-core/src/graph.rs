//! Graph store: the authoritative weighted, undirected location graph.
//!
//! The graph is an adjacency map from location name to a map of
//! neighbor name to distance. Every edge is stored in both directions with
//! the same weight, and every neighbor is itself a top-level location.
//!
//! # Snapshots
//!
//! ```text
//! GraphStore (owned, mutable) --snapshot()--> Snapshot (shared, frozen)
//! ```
//!
//! The adjacency map lives behind an `Arc`. Taking a snapshot only bumps the
//! reference count; the next mutation clones the map if any snapshot is still
//! alive (`Arc::make_mut`), so a snapshot never observes later changes.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{GraphError, Result};
use crate::pathfinding::{self, PathOutcome};

/// Neighbor name to edge weight.
pub type Neighbors = BTreeMap<String, f64>;

/// Location name to its neighbors. This is also the persisted JSON shape:
/// `{"Main Gate": {"Library": 120.0}, "Library": {"Main Gate": 120.0}}`.
pub type Adjacency = BTreeMap<String, Neighbors>;

/// Largest accepted edge weight (meters).
///
/// Any simple path has fewer edges than there are locations, so even a
/// graph with billions of locations sums to far less than `f64::MAX`. Path
/// lengths therefore stay finite and never reach the `f64::INFINITY` that
/// marks unreached locations.
pub const MAX_DISTANCE: f64 = 1.0e12;

/// Immutable point-in-time view of the graph.
///
/// Cheap to clone and safe to hand to other threads while the store keeps
/// mutating.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    adjacency: Arc<Adjacency>,
}

impl Snapshot {
    /// Check if a location exists.
    pub fn contains(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    /// Weight of the edge between `a` and `b`, if one exists.
    pub fn weight(&self, a: &str, b: &str) -> Option<f64> {
        self.adjacency.get(a).and_then(|n| n.get(b)).copied()
    }

    /// Neighbors of a location with their edge weights. Empty for unknown names.
    pub fn neighbors(&self, name: &str) -> impl Iterator<Item = (&str, f64)> {
        self.adjacency
            .get(name)
            .into_iter()
            .flat_map(|n| n.iter().map(|(k, &w)| (k.as_str(), w)))
    }

    /// All location names in sorted order.
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Get the number of locations.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Get the number of undirected edges (each pair counted once).
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|n| n.len()).sum::<usize>() / 2
    }

    /// Each undirected edge once, as `(a, b, weight)` with `a < b`.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.adjacency.iter().flat_map(|(a, n)| {
            n.iter()
                .filter(move |(b, _)| a < *b)
                .map(move |(b, &w)| (a.as_str(), b.as_str(), w))
        })
    }

    /// Borrow the raw adjacency map.
    pub fn as_adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Shortest path between two locations in this snapshot.
    pub fn shortest_path(&self, source: &str, destination: &str) -> PathOutcome {
        pathfinding::shortest_path(self, source, destination)
    }
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.adjacency.as_ref().serialize(serializer)
    }
}

/// Sole owner and mutator of the location graph.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    adjacency: Arc<Adjacency>,
}

impl GraphStore {
    /// Create an empty graph store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a loaded adjacency map, rejecting maps that break
    /// symmetry, reference missing neighbors, contain self-loops, or carry
    /// weights outside `(0, MAX_DISTANCE]`.
    pub fn from_adjacency(adjacency: Adjacency) -> Result<Self> {
        for (node, neighbors) in &adjacency {
            for (neighbor, &weight) in neighbors {
                if neighbor == node {
                    return Err(invalid_snapshot(format!("self-loop on '{}'", node)));
                }
                if validate_weight(weight).is_err() {
                    return Err(invalid_snapshot(format!(
                        "edge '{}' - '{}' has invalid distance {}",
                        node, neighbor, weight
                    )));
                }
                match adjacency.get(neighbor).map(|n| n.get(node)) {
                    None => {
                        return Err(invalid_snapshot(format!(
                            "'{}' references missing location '{}'",
                            node, neighbor
                        )))
                    }
                    Some(None) => {
                        return Err(invalid_snapshot(format!(
                            "edge '{}' -> '{}' has no reverse direction",
                            node, neighbor
                        )))
                    }
                    Some(Some(&reverse)) if reverse != weight => {
                        return Err(invalid_snapshot(format!(
                            "edge '{}' - '{}' is asymmetric ({} vs {})",
                            node, neighbor, weight, reverse
                        )))
                    }
                    Some(Some(_)) => {}
                }
            }
        }

        Ok(Self {
            adjacency: Arc::new(adjacency),
        })
    }

    /// Restore a store from a previously taken snapshot.
    ///
    /// Snapshots can only be produced by a valid store, so no re-validation
    /// is needed.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            adjacency: snapshot.adjacency,
        }
    }

    /// Take an immutable view of the current graph.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            adjacency: Arc::clone(&self.adjacency),
        }
    }

    /// Add a location with no edges.
    pub fn add_node(&mut self, name: &str) -> Result<()> {
        if self.contains_node(name) {
            return Err(GraphError::DuplicateNode {
                name: name.to_string(),
            });
        }
        Arc::make_mut(&mut self.adjacency).insert(name.to_string(), Neighbors::new());
        Ok(())
    }

    /// Create or overwrite the edge between `from` and `to`.
    ///
    /// Both directions are set to `weight`; any previous weight for the pair
    /// is replaced, not added to.
    pub fn add_or_update_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<()> {
        for name in [from, to] {
            if !self.contains_node(name) {
                return Err(GraphError::UnknownNode {
                    name: name.to_string(),
                });
            }
        }
        if from == to {
            return Err(GraphError::SelfLoop {
                name: from.to_string(),
            });
        }
        let weight = validate_weight(weight)?;

        let adjacency = Arc::make_mut(&mut self.adjacency);
        for (a, b) in [(from, to), (to, from)] {
            if let Some(neighbors) = adjacency.get_mut(a) {
                neighbors.insert(b.to_string(), weight);
            }
        }
        Ok(())
    }

    /// Remove the edge between `from` and `to` in both directions.
    ///
    /// Absent edges and unknown locations are a no-op, not an error. Returns
    /// whether an edge was actually removed.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> bool {
        if self.weight(from, to).is_none() && self.weight(to, from).is_none() {
            return false;
        }

        let adjacency = Arc::make_mut(&mut self.adjacency);
        let mut removed = false;
        for (a, b) in [(from, to), (to, from)] {
            if let Some(neighbors) = adjacency.get_mut(a) {
                removed |= neighbors.remove(b).is_some();
            }
        }
        removed
    }

    /// Delete a location and every edge touching it.
    pub fn delete_node(&mut self, name: &str) -> Result<()> {
        let incident: Vec<String> = match self.adjacency.get(name) {
            Some(neighbors) => neighbors.keys().cloned().collect(),
            None => {
                return Err(GraphError::UnknownNode {
                    name: name.to_string(),
                })
            }
        };

        let adjacency = Arc::make_mut(&mut self.adjacency);
        for neighbor in &incident {
            if let Some(neighbors) = adjacency.get_mut(neighbor) {
                neighbors.remove(name);
            }
        }
        adjacency.remove(name);
        Ok(())
    }

    /// Check if a location exists.
    pub fn contains_node(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    /// Weight of the edge between `a` and `b`, if one exists.
    pub fn weight(&self, a: &str, b: &str) -> Option<f64> {
        self.adjacency.get(a).and_then(|n| n.get(b)).copied()
    }

    /// Neighbors of a location, or `None` if it does not exist.
    pub fn neighbors(&self, name: &str) -> Option<&Neighbors> {
        self.adjacency.get(name)
    }

    /// Get the number of locations.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Get the number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|n| n.len()).sum::<usize>() / 2
    }

    /// All location names in sorted order.
    pub fn node_names(&self) -> Vec<String> {
        self.adjacency.keys().cloned().collect()
    }
}

/// Accept only strictly positive weights up to [`MAX_DISTANCE`].
fn validate_weight(weight: f64) -> Result<f64> {
    if weight > 0.0 && weight <= MAX_DISTANCE {
        Ok(weight)
    } else {
        Err(GraphError::InvalidWeight { weight })
    }
}

fn invalid_snapshot(reason: String) -> GraphError {
    GraphError::InvalidSnapshot { reason }
}
