#![warn(missing_docs)]
//! BenchTex Report - LaTeX Result Macros
//!
//! Turns computed benchmark statistics into one LaTeX macro per value, named after
//! benchmark, run set, column, statistic category, subcategory and kind:
//!
//! ```text
//! \StoreBenchExecResult{SvComp}{Cpachecker}{Cputime}{Correct}{True}{Sum}{1234.5}%
//! ```
//!
//! defines `\SvCompCpacheckerCputimeCorrectTrueSum` expanding to `1234.5`.
//!
//! Names are sanitized to letters only and made unique by deterministic Roman
//! numeral suffixes. The same command stream can also be rendered as JSON or as a
//! terminal listing.

mod collision;
mod column;
mod command;
mod error;
mod human;
mod json;
mod naming;
mod tex;
mod walker;

pub use collision::{Collision, CollisionLevel, Resolved, resolve_collisions};
pub use column::{Column, FormatTarget, RunSet};
pub use command::{CONTROL_SEQUENCE, CommandPrefix, TEX_HEADER, TexCommand};
pub use error::TexError;
pub use human::format_human_output;
pub use json::{JSON_SCHEMA, JSON_SCHEMA_VERSION, ReportSchema, generate_json_report};
pub use naming::{cap_first_letter, sanitize, to_roman};
pub use tex::{TableSummary, collect_commands, visit_commands, write_tex_command_table};
pub use walker::{Leaf, UNIT_KIND, split_statistic_name, walk_statistics, walk_statistics_as};

use benchtex_stats::StatisticRecord;
use std::io::Write;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// LaTeX macro definitions
    Tex,
    /// JSON listing of all commands
    Json,
    /// Human-readable terminal output
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tex" | "latex" => Ok(OutputFormat::Tex),
            "json" => Ok(OutputFormat::Json),
            "human" | "text" => Ok(OutputFormat::Human),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Render the table in `format` and write it to `out`
///
/// Only [`OutputFormat::Tex`] streams commands as they are produced; the other
/// formats are assembled in memory and written at once.
pub fn write_report<W: Write + ?Sized>(
    out: &mut W,
    format: OutputFormat,
    run_sets: &[RunSet],
    stats: &[Vec<StatisticRecord>],
) -> Result<TableSummary, TexError> {
    match format {
        OutputFormat::Tex => write_tex_command_table(out, run_sets, stats),
        OutputFormat::Json => {
            let (commands, summary) = collect_commands(run_sets, stats, FormatTarget::Csv);
            out.write_all(generate_json_report(&commands, &summary)?.as_bytes())?;
            out.write_all(b"\n")?;
            Ok(summary)
        }
        OutputFormat::Human => {
            let (commands, summary) = collect_commands(run_sets, stats, FormatTarget::Human);
            out.write_all(format_human_output(&commands, &summary).as_bytes())?;
            Ok(summary)
        }
    }
}
