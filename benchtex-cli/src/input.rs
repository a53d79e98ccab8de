//! Table Input
//!
//! Reads run sets and their statistics from a JSON document:
//!
//! ```json
//! { "run_sets": [ { "benchmark_name": "sv-comp", "display_name": "cpachecker",
//!     "columns": [ { "title": "cputime", "unit": "s" } ],
//!     "statistics": [ { "total": { "sum": 12.5 } } ] } ] }
//! ```
//!
//! `statistics` runs parallel to `columns`; missing or `null` entries are empty records.

use anyhow::Context;
use benchtex_report::{Column, RunSet};
use benchtex_stats::StatisticRecord;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// Complete input document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableInput {
    /// Run sets, in output order
    #[serde(default)]
    pub run_sets: Vec<RunSetInput>,
}

/// One run set with per-column statistics
#[derive(Debug, Clone, Deserialize)]
pub struct RunSetInput {
    /// Name of the benchmark definition
    pub benchmark_name: String,
    /// Name of the tool configuration
    pub display_name: String,
    /// Columns, in table order
    #[serde(default)]
    pub columns: Vec<Column>,
    /// Statistics per column, parallel to `columns`; `null` for a column without statistics
    #[serde(default)]
    pub statistics: Vec<Option<StatisticRecord>>,
}

impl TableInput {
    /// Parse an input document from a reader
    pub fn from_reader(reader: impl Read) -> anyhow::Result<Self> {
        serde_json::from_reader(reader).context("Invalid table input")
    }

    /// Parse an input document from a file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open input {}", path.display()))?;
        Self::from_reader(std::io::BufReader::new(file))
            .with_context(|| format!("Failed to load {}", path.display()))
    }

    /// Split into run sets and the parallel statistics table
    ///
    /// `default_digits` fills in significant digits for columns that declare none.
    pub fn into_parts(
        self,
        default_digits: Option<usize>,
    ) -> (Vec<RunSet>, Vec<Vec<StatisticRecord>>) {
        self.run_sets
            .into_iter()
            .map(|input| {
                let columns: Vec<Column> = input
                    .columns
                    .into_iter()
                    .map(|mut column| {
                        column.significant_digits = column.significant_digits.or(default_digits);
                        column
                    })
                    .collect();
                let records: Vec<StatisticRecord> = input
                    .statistics
                    .into_iter()
                    .map(Option::unwrap_or_default)
                    .collect();
                let run_set = RunSet {
                    benchmark_name: input.benchmark_name,
                    display_name: input.display_name,
                    columns,
                };
                (run_set, records)
            })
            .unzip()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "run_sets": [{
            "benchmark_name": "sv-comp",
            "display_name": "cpachecker",
            "columns": [
                {"title": "status"},
                {"title": "cputime", "unit": "s", "significant_digits": 2}
            ],
            "statistics": [
                null,
                {"total": {"sum": 12.5, "max": 3}, "correct_true": null, "correct": {"sum": 0}}
            ]
        }]
    }"#;

    #[test]
    fn test_parse_sample() {
        let input = TableInput::from_reader(SAMPLE.as_bytes()).unwrap();
        let (run_sets, stats) = input.into_parts(None);

        assert_eq!(run_sets.len(), 1);
        assert_eq!(run_sets[0].columns[1].unit.as_deref(), Some("s"));
        assert!(stats[0][0].is_empty());

        let names: Vec<_> = stats[0][1].iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["total", "correct_true", "correct"]);
    }

    #[test]
    fn test_default_digits_fill_missing_only() {
        let input = TableInput::from_reader(SAMPLE.as_bytes()).unwrap();
        let (run_sets, _) = input.into_parts(Some(5));
        assert_eq!(run_sets[0].columns[0].significant_digits, Some(5));
        assert_eq!(run_sets[0].columns[1].significant_digits, Some(2));
    }

    #[test]
    fn test_empty_document() {
        let input = TableInput::from_reader("{}".as_bytes()).unwrap();
        let (run_sets, stats) = input.into_parts(None);
        assert!(run_sets.is_empty());
        assert!(stats.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let input = TableInput::load(file.path()).unwrap();
        assert_eq!(input.run_sets[0].display_name, "cpachecker");
    }

    #[test]
    fn test_invalid_document() {
        let err = TableInput::from_reader(r#"{"run_sets": [{}]}"#.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Invalid table input"));
    }
}
