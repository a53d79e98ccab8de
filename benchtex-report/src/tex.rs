//! LaTeX Command Table
//!
//! Walks run sets, then columns, then statistic records and turns every leaf value
//! into a [`TexCommand`]:
//!
//! ```text
//! run sets ──► resolve (benchmark, run set) names
//!    │
//!    └─► columns ──► resolve column titles
//!           │
//!           └─► statistic record ──► leaves ──► TexCommand ──► sink
//! ```
//!
//! Commands are handed out one at a time in traversal order, so a sink sees them
//! incrementally. A failing sink stops the pass; whatever was written before stays.

use crate::collision::{Collision, CollisionLevel, resolve_collisions};
use crate::column::{FormatTarget, RunSet};
use crate::command::{CommandPrefix, TEX_HEADER, TexCommand};
use crate::error::TexError;
use crate::naming::sanitize;
use crate::walker::walk_statistics_as;
use benchtex_stats::StatisticRecord;
use serde::Serialize;
use std::convert::Infallible;
use std::io::Write;

/// Outcome of one generation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    /// Number of commands produced
    pub commands: usize,
    /// Name collisions resolved by adding suffixes, in traversal order
    pub collisions: Vec<Collision>,
}

impl TableSummary {
    fn record(&mut self, collisions: impl IntoIterator<Item = Collision>) {
        for collision in collisions {
            tracing::warn!(
                key = %collision.key,
                suffix = %collision.suffix,
                "duplicated {} detected, names must be unique for LaTeX; adding suffix",
                collision.level
            );
            self.collisions.push(collision);
        }
    }
}

/// Produce every command of the table, in order, handing each to `visit`
///
/// `stats[i][j]` is the statistic record of column `j` of `run_sets[i]`. Missing
/// records produce no commands. The first error returned by `visit` aborts the pass.
pub fn visit_commands<E>(
    run_sets: &[RunSet],
    stats: &[Vec<StatisticRecord>],
    target: FormatTarget,
    mut visit: impl FnMut(TexCommand) -> Result<(), E>,
) -> Result<TableSummary, E> {
    let mut summary = TableSummary::default();

    let run_set_keys: Vec<Vec<String>> = run_sets
        .iter()
        .map(|run_set| {
            vec![
                sanitize(&run_set.benchmark_name),
                sanitize(&run_set.display_name),
            ]
        })
        .collect();
    let run_set_names = resolve_collisions(CollisionLevel::RunSet, &run_set_keys);

    for (index, (run_set, resolved)) in run_sets.iter().zip(run_set_names).enumerate() {
        summary.record(resolved.collision);

        let mut fragments = resolved.key.into_iter();
        let prefix = CommandPrefix::new(
            fragments.next().unwrap_or_default(),
            fragments.next().unwrap_or_default(),
        );
        let records = stats.get(index).map(Vec::as_slice).unwrap_or_default();

        tracing::debug!(
            benchmark = %run_set.benchmark_name,
            run_set = %run_set.display_name,
            columns = run_set.columns.len(),
            "generating commands"
        );

        // Display titles win over plain titles
        let column_keys: Vec<Vec<String>> = run_set
            .columns
            .iter()
            .map(|column| vec![sanitize(column.name())])
            .collect();
        let column_titles = resolve_collisions(CollisionLevel::Column, &column_keys);

        for ((column, title), record) in run_set.columns.iter().zip(column_titles).zip(records) {
            summary.record(title.collision);
            let prefix = prefix.for_column(title.key.concat());

            let (collisions, leaves) = walk_statistics_as(column, record, target);
            summary.record(collisions);

            for leaf in leaves {
                visit(TexCommand::from_leaf(&prefix, leaf))?;
                summary.commands += 1;
            }
        }
    }

    Ok(summary)
}

/// Collect every command of the table in memory
pub fn collect_commands(
    run_sets: &[RunSet],
    stats: &[Vec<StatisticRecord>],
    target: FormatTarget,
) -> (Vec<TexCommand>, TableSummary) {
    let mut commands = Vec::new();
    let result = visit_commands(run_sets, stats, target, |command| {
        commands.push(command);
        Ok::<(), Infallible>(())
    });
    let summary = match result {
        Ok(summary) => summary,
        Err(never) => match never {},
    };
    (commands, summary)
}

/// Write the header and one command line per value to `out`
///
/// The header is written even when there are no run sets.
pub fn write_tex_command_table<W: Write + ?Sized>(
    out: &mut W,
    run_sets: &[RunSet],
    stats: &[Vec<StatisticRecord>],
) -> Result<TableSummary, TexError> {
    out.write_all(TEX_HEADER.as_bytes())?;
    let summary = visit_commands(run_sets, stats, FormatTarget::Csv, |command| {
        out.write_all(command.to_tex_line().as_bytes())
    })?;
    Ok(summary)
}
