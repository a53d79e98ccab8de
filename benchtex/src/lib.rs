#![warn(missing_docs)]
//! # BenchTex
//!
//! Turns computed benchmark statistics into LaTeX macros, one per value, so that
//! papers can cite results by name instead of copying numbers by hand.
//!
//! - **Stable names**: `\StoreBenchExecResult{Bench}{Tool}{Column}{Category}{Sub}{Kind}{value}`
//!   defines `\BenchToolColumnCategorySubKind`
//! - **Sanitized**: every name fragment is letters only, numeric labels are spelled as
//!   Roman numerals
//! - **Unique**: colliding names get deterministic Roman numeral suffixes (`I`, `II`, ...)
//!   in input order
//! - **Streaming**: commands are written to the sink as they are produced
//!
//! ## Quick Start
//!
//! ```
//! use benchtex::prelude::*;
//!
//! let run_sets = vec![
//!     RunSet::new("sv-comp", "cpachecker").with_column(Column::new("cputime").with_unit("s")),
//! ];
//! let stats = vec![vec![
//!     StatisticRecord::new().with("correct_true", StatValue::from_sum(1234.5)),
//! ]];
//!
//! let mut out = Vec::new();
//! write_tex_command_table(&mut out, &run_sets, &stats).unwrap();
//! let tex = String::from_utf8(out).unwrap();
//! assert!(tex.contains(r"\StoreBenchExecResult{SvComp}{Cpachecker}{Cputime}{Correct}{True}{Sum}{1234.5}%"));
//! ```

// Re-export statistic records
pub use benchtex_stats::{ColumnStatistics, StatValue, StatisticRecord, Value};

// Re-export report generation
pub use benchtex_report::{
    CONTROL_SEQUENCE, Collision, CollisionLevel, Column, CommandPrefix, FormatTarget, Leaf,
    OutputFormat, RunSet, TEX_HEADER, TableSummary, TexCommand, TexError, collect_commands,
    resolve_collisions, sanitize, to_roman, visit_commands, walk_statistics, write_report,
    write_tex_command_table,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Column, ColumnStatistics, OutputFormat, RunSet, StatValue, StatisticRecord, TexCommand,
        Value, write_report, write_tex_command_table,
    };
}

/// Run the BenchTex CLI.
///
/// ```ignore
/// fn main() {
///     benchtex::run().unwrap();
/// }
/// ```
pub use benchtex_cli::run;
