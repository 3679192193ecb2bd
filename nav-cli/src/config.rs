//! Configuration loading from `.navrc.toml`.
//!
//! The config file is optional and read from the working directory. Command
//! line flags always take precedence over values found here.
//!
//! # Example Configuration
//!
//! ```toml
//! [storage]
//! graph_file = "data/graph.json"
//!
//! [output]
//! format = "json"
//! color = false
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".navrc.toml";

/// Graph file used when neither `--graph` nor the config names one.
pub const DEFAULT_GRAPH_FILE: &str = "graph.json";

/// Root configuration structure loaded from `.navrc.toml`.
#[derive(Debug, Deserialize, Default)]
pub struct NavConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    /// Output formatting preferences.
    #[serde(default)]
    pub output: OutputSettings,
}

/// Where the location graph lives on disk.
#[derive(Debug, Deserialize, Default)]
pub struct StorageConfig {
    /// Path to the graph JSON file, relative to the working directory.
    #[serde(default)]
    pub graph_file: Option<PathBuf>,
}

/// Output formatting preferences.
///
/// `--format` on the command line overrides `format`.
#[derive(Debug, Deserialize, Default)]
pub struct OutputSettings {
    /// Valid values: `table`, `json`
    #[serde(default)]
    pub format: Option<String>,

    /// Whether to use colored output. Defaults to `true` when stdout is a TTY.
    #[serde(default)]
    pub color: Option<bool>,
}

impl NavConfig {
    /// Load `.navrc.toml` from `root`, falling back to defaults when the file
    /// is missing or malformed.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse {}: {}", CONFIG_FILE, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", CONFIG_FILE, e);
                }
            }
        }
        Self::default()
    }

    /// Resolve the graph file: explicit flag, then config, then default.
    pub fn graph_file(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.storage.graph_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_GRAPH_FILE))
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output.format.as_deref()
    }

    /// Returns the configured value, or `None` to use auto-detection.
    pub fn use_color(&self) -> Option<bool> {
        self.output.color
    }
}
