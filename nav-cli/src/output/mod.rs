//! Output formatting for the nav CLI.
//!
//! Every command result renders either as a human-readable table or as JSON
//! for scripts. Colors and wrapping are turned off when stdout is not a TTY.

use clap::ValueEnum;
use serde::Serialize;
use std::io::IsTerminal;
use std::str::FromStr;

mod json;
mod table;

pub use self::json::JsonOutput;
pub use self::table::TableOutput;

/// Output format for CLI results
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format (default)
    #[default]
    Table,
    /// JSON format for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: '{}'", s)),
        }
    }
}

/// Configuration for output rendering
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Disable colored output
    pub no_color: bool,
    /// Disable wrapping to the terminal width
    pub no_wrap: bool,
    /// Override terminal width (None = auto-detect)
    pub width: Option<usize>,
    /// Compact mode (less whitespace)
    pub compact: bool,
}

impl OutputConfig {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            no_color: false,
            no_wrap: false,
            width: None,
            compact: false,
        }
    }

    /// Create an OutputConfig with TTY detection and optional color override.
    ///
    /// `Some(true)` forces colors on, `Some(false)` forces them off, and
    /// `None` enables them only when stdout is a terminal.
    pub fn auto_detect(format: OutputFormat, color_override: Option<bool>) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        Self {
            format,
            no_color: !color_override.unwrap_or(is_tty),
            no_wrap: !is_tty,
            width: None,
            compact: false,
        }
    }

    pub fn effective_width(&self) -> usize {
        self.width.unwrap_or_else(|| {
            terminal_size::terminal_size()
                .map(|(w, _)| w.0 as usize)
                .unwrap_or(80)
        })
    }

    /// Check if colors should be used
    pub fn use_colors(&self) -> bool {
        !self.no_color
    }

    pub fn should_wrap(&self) -> bool {
        !self.no_wrap
    }

    /// Builder: enable compact mode
    pub fn compact(mut self) -> Self {
        self.compact = true;
        self
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::auto_detect(OutputFormat::Table, None)
    }
}

/// Trait for command results that can be rendered in every output format.
pub trait Outputter: Serialize + Sized {
    /// Render as table format
    fn to_table(&self, config: &OutputConfig) -> String;

    /// Render as JSON format
    fn to_json(&self, config: &OutputConfig) -> String {
        JsonOutput::format(self, config)
    }

    /// Render using the format specified in config
    fn render(&self, config: &OutputConfig) -> String {
        match config.format {
            OutputFormat::Table => self.to_table(config),
            OutputFormat::Json => self.to_json(config),
        }
    }

    /// Render and print to stdout
    fn output(&self, config: &OutputConfig) {
        println!("{}", self.render(config));
    }
}

// ============================================================================
// Built-in message types
// ============================================================================

/// Simple success message
#[derive(Debug, Serialize)]
pub struct SuccessMessage {
    pub message: String,
}

impl SuccessMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Outputter for SuccessMessage {
    fn to_table(&self, _config: &OutputConfig) -> String {
        use colored::Colorize;
        format!("{} {}", "OK:".green().bold(), self.message)
    }
}

/// Format a distance in meters for display: whole numbers without a
/// fractional part, everything else to two decimals.
pub fn format_distance(distance: f64) -> String {
    if distance.fract() == 0.0 {
        format!("{:.0} m", distance)
    } else {
        format!("{:.2} m", distance)
    }
}
