//! nav - command-line tool for the campus navigation graph.
//!
//! Edits the same graph file the daemon serves and answers path queries
//! offline.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use nav_core::MAX_DISTANCE;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use config::NavConfig;
use output::{OutputConfig, OutputFormat};

/// Parse a path distance; must be positive and at most `MAX_DISTANCE`.
fn parse_distance(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !(value > 0.0 && value <= MAX_DISTANCE) {
        return Err(format!(
            "distance must be positive and at most {:e}, got {}",
            MAX_DISTANCE, value
        ));
    }
    Ok(value)
}

/// Edit and query the campus navigation graph.
#[derive(Parser)]
#[command(name = "nav")]
#[command(author, version)]
#[command(about = "Edit and query the campus navigation graph")]
#[command(propagate_version = true)]
#[command(after_help = "Examples:
  nav add-location \"Main Gate\"
  nav add-path \"Main Gate\" Library 120
  nav path \"Main Gate\" Canteen
  nav --format json show")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format (overrides config default)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Graph file (overrides config, default: graph.json)
    #[arg(long, global = true)]
    graph: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all locations and paths
    #[command(visible_alias = "ls")]
    Show,

    /// Add a location with no paths
    AddLocation {
        /// Location name (case-sensitive)
        name: String,
    },

    /// Add a path between two locations, or change its distance
    AddPath {
        from: String,
        to: String,

        /// Distance in meters
        #[arg(value_parser = parse_distance)]
        distance: f64,
    },

    /// Remove the path between two locations (no-op if absent)
    RemovePath { from: String, to: String },

    /// Delete a location and every path touching it
    DeleteLocation { name: String },

    /// Find the shortest route between two locations
    #[command(visible_alias = "route")]
    Path { source: String, destination: String },

    /// Show graph size and connectivity
    Stats,
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = NavConfig::load(Path::new("."));

    // Resolve output format: CLI flag > config default > Table
    let format = cli.format.unwrap_or_else(|| {
        config
            .default_format()
            .and_then(|f| f.parse().ok())
            .unwrap_or(OutputFormat::Table)
    });

    let output = OutputConfig::auto_detect(format, config.use_color());
    colored::control::set_override(output.use_colors());
    let graph = config.graph_file(cli.graph);
    tracing::debug!("Using graph file {:?}", graph);

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            let _ = Cli::command().print_help();
            println!();
            return Ok(());
        }
    };

    match command {
        Commands::Show => commands::show::run(&graph, &output),
        Commands::AddLocation { name } => commands::edit::add_location(&graph, &name, &output),
        Commands::AddPath { from, to, distance } => {
            commands::edit::add_path(&graph, &from, &to, distance, &output)
        }
        Commands::RemovePath { from, to } => {
            commands::edit::remove_path(&graph, &from, &to, &output)
        }
        Commands::DeleteLocation { name } => {
            commands::edit::delete_location(&graph, &name, &output)
        }
        Commands::Path {
            source,
            destination,
        } => commands::path::run(&graph, &source, &destination, &output),
        Commands::Stats => commands::stats::run(&graph, &output),
    }
}
