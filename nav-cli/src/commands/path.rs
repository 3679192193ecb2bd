//! Path command - shortest route between two locations.

use anyhow::Result;
use colored::Colorize;
use nav_core::{PathOutcome, Snapshot};
use serde::Serialize;
use std::path::Path;

use super::load_graph;
use crate::output::{format_distance, OutputConfig, Outputter, TableOutput};

/// Result of a path query. JSON output is the outcome itself:
/// `{path, distance}` or `{path: [], reason[, missing]}`.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct PathReport {
    outcome: PathOutcome,
    #[serde(skip)]
    source: String,
    #[serde(skip)]
    destination: String,
    #[serde(skip)]
    snapshot: Snapshot,
}

impl PathReport {
    pub fn new(snapshot: Snapshot, source: &str, destination: &str) -> Self {
        Self {
            outcome: snapshot.shortest_path(source, destination),
            source: source.to_string(),
            destination: destination.to_string(),
            snapshot,
        }
    }

    pub fn outcome(&self) -> &PathOutcome {
        &self.outcome
    }
}

impl Outputter for PathReport {
    fn to_table(&self, config: &OutputConfig) -> String {
        match &self.outcome {
            PathOutcome::Found(route) => {
                let mut cumulative = 0.0;
                let mut rows = vec![vec![
                    "0".to_string(),
                    route.path[0].clone(),
                    "-".to_string(),
                    format_distance(0.0),
                ]];
                for (step, pair) in route.path.windows(2).enumerate() {
                    let leg = self.snapshot.weight(&pair[0], &pair[1]).unwrap_or(0.0);
                    cumulative += leg;
                    rows.push(vec![
                        (step + 1).to_string(),
                        pair[1].clone(),
                        format_distance(leg),
                        format_distance(cumulative),
                    ]);
                }

                let table = TableOutput::from_rows(
                    &["#", "Location", "Leg", "Total"],
                    &rows,
                    &[0, 2, 3],
                    config,
                );
                format!(
                    "{}\n{} {} ({} hops)",
                    table,
                    "Distance:".green().bold(),
                    format_distance(route.distance),
                    route.hops()
                )
            }
            PathOutcome::NoPathFound => format!(
                "{} {} and {} are not connected",
                "No path:".yellow().bold(),
                self.source,
                self.destination
            ),
            PathOutcome::InvalidEndpoint { missing } => format!(
                "{} {}",
                "Unknown location:".red().bold(),
                missing.join(", ")
            ),
        }
    }
}

pub fn run(path: &Path, source: &str, destination: &str, config: &OutputConfig) -> Result<()> {
    let snapshot = load_graph(path)?.snapshot();
    let report = PathReport::new(snapshot, source, destination);
    let outcome = report.outcome();
    if outcome.is_found() {
        tracing::debug!("{} -> {}: {} stops", source, destination, outcome.path().len());
    } else {
        tracing::debug!("{} -> {}: {:?}", source, destination, outcome.reason());
    }
    report.output(config);
    Ok(())
}
