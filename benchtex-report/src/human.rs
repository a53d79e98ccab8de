//! Human-Readable Output
//!
//! Terminal listing of the generated macros, grouped by run set, with values
//! rendered for reading (units attached).

use crate::command::TexCommand;
use crate::tex::TableSummary;

/// Format commands for terminal display
///
/// Expects commands collected with [`FormatTarget::Human`](crate::FormatTarget::Human)
/// so values carry their units.
pub fn format_human_output(commands: &[TexCommand], summary: &TableSummary) -> String {
    let names: Vec<String> = commands.iter().map(|c| c.macro_name()).collect();
    let width = names.iter().map(String::len).max().unwrap_or(0);

    let mut output = String::new();
    output.push('\n');
    output.push_str("BenchTex Results\n");
    output.push_str(&"=".repeat(60));
    output.push_str("\n\n");

    let mut current_group: Option<(&str, &str)> = None;
    for (command, name) in commands.iter().zip(&names) {
        let group = (command.benchmark_name.as_str(), command.runset_name.as_str());
        if current_group != Some(group) {
            if current_group.is_some() {
                output.push('\n');
            }
            output.push_str(&format!("Run set: {} / {}\n", group.0, group.1));
            output.push_str(&"-".repeat(60));
            output.push('\n');
            current_group = Some(group);
        }
        output.push_str(&format!("  {:<width$}  {}\n", name, command.value, width = width));
    }

    output.push('\n');
    output.push_str(&format!(
        "{} commands, {} name collisions resolved\n",
        summary.commands,
        summary.collisions.len()
    ));
    for collision in &summary.collisions {
        output.push_str(&format!("  ! {}\n", collision));
    }

    output
}
