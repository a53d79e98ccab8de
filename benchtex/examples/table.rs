//! Builds a small results table in code and prints the LaTeX macros.
//!
//! Run with: cargo run --example table

use benchtex::prelude::*;

fn main() -> Result<(), benchtex::TexError> {
    let columns = [
        Column::new("status"),
        Column::new("cputime").with_unit("s").with_significant_digits(3),
        Column::new("memory").with_unit("MB").with_significant_digits(3),
    ];

    let stats_for = |cputime: f64, memory: f64, correct: u64| {
        vec![
            ColumnStatistics {
                total: Some(StatValue::from_sum(10u64)),
                correct_true: Some(StatValue::from_sum(correct)),
                wrong_false: Some(StatValue::from_sum(0u64)),
                ..Default::default()
            }
            .to_record(),
            StatisticRecord::new().with(
                "total",
                StatValue::from_sum(cputime)
                    .with_avg(cputime / 10.0)
                    .with_max(cputime / 3.0),
            ),
            StatisticRecord::new().with("total", StatValue::from_sum(memory).with_max(memory / 4.0)),
        ]
    };

    // Two configurations with the same display name: both get a numeral suffix
    let run_sets = vec![
        RunSet {
            benchmark_name: "sv-comp".to_string(),
            display_name: "predicate analysis".to_string(),
            columns: columns.to_vec(),
        },
        RunSet {
            benchmark_name: "sv-comp".to_string(),
            display_name: "predicate-analysis".to_string(),
            columns: columns.to_vec(),
        },
        RunSet {
            benchmark_name: "sv-comp".to_string(),
            display_name: "2".to_string(),
            columns: columns.to_vec(),
        },
    ];
    let stats = vec![
        stats_for(123.456, 2048.0, 7),
        stats_for(98.7, 1900.5, 8),
        stats_for(45.0, 512.25, 9),
    ];

    let stdout = std::io::stdout();
    let summary = write_tex_command_table(&mut stdout.lock(), &run_sets, &stats)?;
    eprintln!(
        "{} commands, {} collisions resolved",
        summary.commands,
        summary.collisions.len()
    );
    Ok(())
}
