//! JSON Output

use crate::collision::Collision;
use crate::command::TexCommand;
use crate::tex::TableSummary;
use serde::{Deserialize, Serialize};

/// Schema identifier written into every JSON report
pub const JSON_SCHEMA: &str = "benchtex-commands";

/// Version of [`JSON_SCHEMA`]
pub const JSON_SCHEMA_VERSION: &str = "1";

/// Schema information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSchema {
    /// Schema identifier
    pub schema: String,
    /// Schema version
    pub version: String,
}

impl Default for ReportSchema {
    fn default() -> Self {
        Self {
            schema: JSON_SCHEMA.to_string(),
            version: JSON_SCHEMA_VERSION.to_string(),
        }
    }
}

#[derive(Serialize)]
struct JsonCommand<'a> {
    name: String,
    #[serde(flatten)]
    command: &'a TexCommand,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    schema: ReportSchema,
    commands: Vec<JsonCommand<'a>>,
    collisions: &'a [Collision],
}

/// Generate a prettified JSON report.
///
/// Lists every command with its macro name and fragments, followed by the
/// collisions resolved while naming them.
pub fn generate_json_report(
    commands: &[TexCommand],
    summary: &TableSummary,
) -> Result<String, serde_json::Error> {
    let report = JsonReport {
        schema: ReportSchema::default(),
        commands: commands
            .iter()
            .map(|command| JsonCommand {
                name: command.macro_name(),
                command,
            })
            .collect(),
        collisions: &summary.collisions,
    };
    serde_json::to_string_pretty(&report)
}
