//! Configuration loading from benchtex.toml
//!
//! BenchTex configuration can be specified in a `benchtex.toml` file in the project root.
//! The configuration is automatically discovered by walking up from the current directory.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up by [`BenchTexConfig::discover`]
pub const CONFIG_FILE_NAME: &str = "benchtex.toml";

/// BenchTex configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BenchTexConfig {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
    /// Value formatting configuration
    #[serde(default)]
    pub format: FormatConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Default output format: "tex", "json" or "human"
    #[serde(default = "default_format")]
    pub format: String,
    /// Default output file (stdout if not set)
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            path: None,
        }
    }
}

fn default_format() -> String {
    "tex".to_string()
}

/// Value formatting configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FormatConfig {
    /// Significant digits for columns that do not declare their own
    #[serde(default)]
    pub significant_digits: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LoggingConfig {
    /// Log filter directive (e.g. "benchtex=debug"); overrides the --verbose default
    #[serde(default)]
    pub filter: Option<String>,
}

impl BenchTexConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let dir = std::env::current_dir().ok()?;
        Self::discover_from(&dir)
    }

    /// Walk up from `start` and load the first configuration file found
    pub fn discover_from(start: &Path) -> Option<Self> {
        let mut dir = start.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Self::load(&config_path)
                    .map_err(|e| tracing::warn!("Ignoring {}: {:#}", config_path.display(), e))
                    .ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# BenchTex Configuration

[output]
# Default output format: tex, json, human
format = "tex"
# Write to this file instead of stdout (uncomment to enable)
# path = "results.tex"

[format]
# Significant digits for columns without their own setting (uncomment to enable)
# significant_digits = 3

[logging]
# Log filter, e.g. "benchtex=debug" (uncomment to enable)
# filter = "benchtex=info"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BenchTexConfig::default();
        assert_eq!(config.output.format, "tex");
        assert!(config.output.path.is_none());
        assert!(config.format.significant_digits.is_none());
        assert!(config.logging.filter.is_none());
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            [output]
            path = "out/results.tex"

            [format]
            significant_digits = 4
        "#;

        let config: BenchTexConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.path, Some(PathBuf::from("out/results.tex")));
        assert_eq!(config.format.significant_digits, Some(4));
        // Defaults should still apply
        assert_eq!(config.output.format, "tex");
    }

    #[test]
    fn test_default_toml_parses() {
        let config: BenchTexConfig = toml::from_str(&BenchTexConfig::default_toml()).unwrap();
        assert_eq!(config, BenchTexConfig::default());
    }

    #[test]
    fn test_discover_walks_up() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[logging]\nfilter = \"benchtex=debug\"\n",
        )
        .unwrap();
        let nested = root.path().join("paper").join("tables");
        std::fs::create_dir_all(&nested).unwrap();

        let config = BenchTexConfig::discover_from(&nested).unwrap();
        assert_eq!(config.logging.filter.as_deref(), Some("benchtex=debug"));
    }

    #[test]
    fn test_load_reports_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[output]\nformat = 3\n").unwrap();

        let err = BenchTexConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
    }

    #[test]
    fn test_discover_skips_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[output]\nformat = 3\n").unwrap();

        assert!(BenchTexConfig::discover_from(dir.path()).is_none());
    }
}
