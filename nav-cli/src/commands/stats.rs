//! Stats command - size and connectivity summary of the graph.

use anyhow::Result;
use nav_core::{distances_from, Snapshot};
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;

use super::load_graph;
use crate::output::{format_distance, OutputConfig, Outputter, TableOutput};

#[derive(Debug, Clone, Serialize)]
pub struct EdgeSummary {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

/// Statistics about the location graph.
#[derive(Debug, Clone, Serialize)]
pub struct GraphStats {
    pub location_count: usize,
    pub path_count: usize,
    pub total_distance: f64,
    /// Number of connected components; locations in different components
    /// cannot reach each other.
    pub component_count: usize,
    pub unconnected: Vec<String>,
    pub longest_path: Option<EdgeSummary>,
}

impl GraphStats {
    pub fn compute(snapshot: &Snapshot) -> Self {
        let mut total_distance = 0.0;
        let mut longest: Option<(&str, &str, f64)> = None;
        for (a, b, w) in snapshot.edges() {
            total_distance += w;
            if longest.map_or(true, |(_, _, max)| w > max) {
                longest = Some((a, b, w));
            }
        }

        // Each unseen location seeds one component
        let mut seen: HashSet<String> = HashSet::new();
        let mut component_count = 0;
        for name in snapshot.node_names() {
            if seen.contains(name) {
                continue;
            }
            component_count += 1;
            if let Some(reachable) = distances_from(snapshot, name) {
                seen.extend(reachable.into_keys());
            }
        }

        let unconnected = snapshot
            .node_names()
            .filter(|name| snapshot.neighbors(name).next().is_none())
            .map(String::from)
            .collect();

        Self {
            location_count: snapshot.node_count(),
            path_count: snapshot.edge_count(),
            total_distance,
            component_count,
            unconnected,
            longest_path: longest.map(|(a, b, w)| EdgeSummary {
                from: a.to_string(),
                to: b.to_string(),
                distance: w,
            }),
        }
    }
}

impl Outputter for GraphStats {
    fn to_table(&self, config: &OutputConfig) -> String {
        let mut pairs = vec![
            ("Locations", self.location_count.to_string()),
            ("Paths", self.path_count.to_string()),
            ("Total distance", format_distance(self.total_distance)),
            ("Components", self.component_count.to_string()),
        ];
        if let Some(edge) = &self.longest_path {
            pairs.push((
                "Longest path",
                format!("{} <-> {} ({})", edge.from, edge.to, format_distance(edge.distance)),
            ));
        }
        if !self.unconnected.is_empty() {
            pairs.push(("Unconnected", self.unconnected.join(", ")));
        }
        TableOutput::format_key_value(&pairs, config)
    }
}

pub fn run(path: &Path, config: &OutputConfig) -> Result<()> {
    let snapshot = load_graph(path)?.snapshot();
    GraphStats::compute(&snapshot).output(config);
    Ok(())
}
