//! Shortest-path engine: Dijkstra over a graph snapshot.
//!
//! Uses a binary min-heap keyed by tentative distance with lazy deletion:
//! improved distances are pushed as new entries and stale entries are
//! skipped at pop time via the visited set, instead of decreasing keys in
//! place. O((V + E) log V).
//!
//! Weights must be non-negative. The graph store only admits positive
//! weights, so every snapshot satisfies this.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::graph::Snapshot;

/// A found route: ordered location names (both endpoints included) and
/// total distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub path: Vec<String>,
    pub distance: f64,
}

impl Route {
    /// Number of edges along the route.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Result of a path query. Never an error: missing endpoints and
/// unreachable destinations are ordinary outcomes.
#[derive(Debug, Clone, PartialEq)]
pub enum PathOutcome {
    Found(Route),
    /// Both endpoints exist but lie in different components.
    NoPathFound,
    /// Source and/or destination are not in the snapshot.
    InvalidEndpoint { missing: Vec<String> },
}

impl PathOutcome {
    pub fn route(&self) -> Option<&Route> {
        match self {
            PathOutcome::Found(route) => Some(route),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found(_))
    }

    /// Reason code for unsuccessful outcomes.
    pub fn reason(&self) -> Option<&'static str> {
        match self {
            PathOutcome::Found(_) => None,
            PathOutcome::NoPathFound => Some("NoPathFound"),
            PathOutcome::InvalidEndpoint { .. } => Some("InvalidEndpoint"),
        }
    }

    /// Ordered path, empty unless a route was found.
    pub fn path(&self) -> &[String] {
        self.route().map(|r| r.path.as_slice()).unwrap_or(&[])
    }
}

// Wire shape: {path, distance} or {path: [], reason[, missing]}
impl Serialize for PathOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PathOutcome::Found(route) => route.serialize(serializer),
            PathOutcome::NoPathFound => {
                let mut s = serializer.serialize_struct("PathOutcome", 2)?;
                s.serialize_field("path", &[] as &[String])?;
                s.serialize_field("reason", "NoPathFound")?;
                s.end()
            }
            PathOutcome::InvalidEndpoint { missing } => {
                let mut s = serializer.serialize_struct("PathOutcome", 3)?;
                s.serialize_field("path", &[] as &[String])?;
                s.serialize_field("reason", "InvalidEndpoint")?;
                s.serialize_field("missing", missing)?;
                s.end()
            }
        }
    }
}

/// Heap entry ordered so that `BinaryHeap` pops the smallest distance first.
#[derive(Debug, Clone, Copy)]
struct HeapEntry<'a> {
    distance: f64,
    node: &'a str,
}

impl PartialEq for HeapEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry<'_> {}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap; ties are not meaningful
        other.distance.total_cmp(&self.distance)
    }
}

/// Tentative distances and predecessors after a full single-source run.
struct SearchTree<'a> {
    distances: HashMap<&'a str, f64>,
    predecessors: HashMap<&'a str, &'a str>,
}

impl<'a> SearchTree<'a> {
    fn distance(&self, node: &str) -> f64 {
        self.distances.get(node).copied().unwrap_or(f64::INFINITY)
    }

    /// Walk predecessors back from `destination` to `source`.
    fn path_to(&self, source: &'a str, destination: &'a str) -> Vec<String> {
        let mut path = vec![destination.to_string()];
        let mut current = destination;
        while current != source {
            match self.predecessors.get(current) {
                Some(&parent) => {
                    path.push(parent.to_string());
                    current = parent;
                }
                None => break,
            }
        }
        path.reverse();
        path
    }
}

fn dijkstra<'a>(snapshot: &'a Snapshot, source: &'a str) -> SearchTree<'a> {
    let mut distances: HashMap<&str, f64> = snapshot
        .node_names()
        .map(|name| (name, f64::INFINITY))
        .collect();
    let mut predecessors: HashMap<&str, &str> = HashMap::new();
    let mut visited: HashSet<&str> = HashSet::with_capacity(distances.len());
    let mut heap = BinaryHeap::new();

    distances.insert(source, 0.0);
    heap.push(HeapEntry {
        distance: 0.0,
        node: source,
    });

    while let Some(HeapEntry { distance, node }) = heap.pop() {
        if !visited.insert(node) {
            continue;
        }

        for (neighbor, weight) in snapshot.neighbors(node) {
            let candidate = distance + weight;
            let best = distances.entry(neighbor).or_insert(f64::INFINITY);
            if candidate < *best {
                *best = candidate;
                predecessors.insert(neighbor, node);
                heap.push(HeapEntry {
                    distance: candidate,
                    node: neighbor,
                });
            }
        }
    }

    SearchTree {
        distances,
        predecessors,
    }
}

/// Find the minimum-total-weight path from `source` to `destination`.
pub fn shortest_path(snapshot: &Snapshot, source: &str, destination: &str) -> PathOutcome {
    let mut missing: Vec<String> = [source, destination]
        .into_iter()
        .filter(|name| !snapshot.contains(name))
        .map(String::from)
        .collect();
    missing.dedup();
    if !missing.is_empty() {
        return PathOutcome::InvalidEndpoint { missing };
    }

    let tree = dijkstra(snapshot, source);
    let distance = tree.distance(destination);
    if distance.is_infinite() {
        return PathOutcome::NoPathFound;
    }

    PathOutcome::Found(Route {
        path: tree.path_to(source, destination),
        distance,
    })
}

/// Shortest distances from `source` to every reachable location.
///
/// Returns `None` if `source` is not in the snapshot. Unreachable locations
/// are omitted.
pub fn distances_from(snapshot: &Snapshot, source: &str) -> Option<HashMap<String, f64>> {
    if !snapshot.contains(source) {
        return None;
    }
    let tree = dijkstra(snapshot, source);
    Some(
        tree.distances
            .into_iter()
            .filter(|(_, d)| d.is_finite())
            .map(|(name, d)| (name.to_string(), d))
            .collect(),
    )
}
