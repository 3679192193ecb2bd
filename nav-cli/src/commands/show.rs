//! Show command - print every location and path in the graph.

use anyhow::Result;
use colored::Colorize;
use nav_core::Snapshot;
use serde::Serialize;
use std::path::Path;

use super::load_graph;
use crate::output::{format_distance, OutputConfig, Outputter, TableOutput};

/// The whole graph. JSON output is the adjacency map itself.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct GraphListing {
    snapshot: Snapshot,
}

impl Outputter for GraphListing {
    fn to_table(&self, config: &OutputConfig) -> String {
        let snapshot = &self.snapshot;
        if snapshot.node_count() == 0 {
            return "Graph is empty. Add locations with `nav add-location <name>`.".to_string();
        }

        let mut lines = vec![format!(
            "{} locations, {} paths",
            snapshot.node_count().to_string().bold(),
            snapshot.edge_count().to_string().bold()
        )];

        let rows: Vec<Vec<String>> = snapshot
            .edges()
            .map(|(a, b, w)| vec![a.to_string(), b.to_string(), format_distance(w)])
            .collect();
        if !rows.is_empty() {
            lines.push(TableOutput::from_rows(
                &["From", "To", "Distance"],
                &rows,
                &[2],
                config,
            ));
        }

        let isolated: Vec<&str> = snapshot
            .node_names()
            .filter(|name| snapshot.neighbors(name).next().is_none())
            .collect();
        if !isolated.is_empty() {
            lines.push(format!("{} {}", "Unconnected:".yellow(), isolated.join(", ")));
        }

        lines.join("\n")
    }
}

pub fn run(path: &Path, config: &OutputConfig) -> Result<()> {
    let snapshot = load_graph(path)?.snapshot();
    GraphListing { snapshot }.output(config);
    Ok(())
}
