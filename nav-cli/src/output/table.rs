//! Table output formatting using the `tabled` crate

use super::OutputConfig;
use tabled::{
    builder::Builder,
    settings::{object::Columns, style::Style, Alignment, Modify, Width},
    Table,
};

/// Table output formatter
pub struct TableOutput;

impl TableOutput {
    /// Create a table from a header row and string rows.
    ///
    /// Columns listed in `right_align` (by index) are right-aligned, which
    /// suits numeric columns such as distances.
    pub fn from_rows(
        headers: &[&str],
        rows: &[Vec<String>],
        right_align: &[usize],
        config: &OutputConfig,
    ) -> String {
        if rows.is_empty() {
            return "(no results)".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(headers.iter().copied());
        for row in rows {
            builder.push_record(row.iter().map(|s| s.as_str()));
        }

        let mut table = builder.build();
        for &column in right_align {
            table.with(Modify::new(Columns::single(column)).with(Alignment::right()));
        }
        Self::finish(table, config)
    }

    /// Format a simple key-value table
    pub fn format_key_value(pairs: &[(&str, String)], config: &OutputConfig) -> String {
        let mut builder = Builder::default();
        for (key, value) in pairs {
            builder.push_record([*key, value.as_str()]);
        }

        let mut table = builder.build();
        table.with(Modify::new(Columns::first()).with(Alignment::right()));
        Self::finish(table, config)
    }

    fn finish(mut table: Table, config: &OutputConfig) -> String {
        if config.compact {
            table.with(Style::blank());
        } else {
            table.with(Style::rounded());
        }

        if config.should_wrap() {
            table.with(Width::wrap(config.effective_width()));
        }

        table.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;

    fn plain() -> OutputConfig {
        let mut config = OutputConfig::new(OutputFormat::Table);
        config.no_wrap = true;
        config
    }

    #[test]
    fn test_from_rows() {
        let rows = vec![
            vec!["Main Gate".to_string(), "Library".to_string(), "120 m".to_string()],
            vec!["Library".to_string(), "Canteen".to_string(), "80 m".to_string()],
        ];
        let output = TableOutput::from_rows(&["From", "To", "Distance"], &rows, &[2], &plain());

        assert!(output.contains("From"));
        assert!(output.contains("Main Gate"));
        assert!(output.contains("80 m"));
    }

    #[test]
    fn test_from_rows_empty() {
        let output = TableOutput::from_rows(&["From", "To"], &[], &[], &plain());
        assert_eq!(output, "(no results)");
    }

    #[test]
    fn test_format_key_value() {
        let pairs = [("Locations", "3".to_string()), ("Paths", "2".to_string())];
        let output = TableOutput::format_key_value(&pairs, &plain());

        assert!(output.contains("Locations"));
        assert!(output.contains('3'));
    }
}
