#![warn(missing_docs)]
//! BenchTex CLI Library
//!
//! Command-line driver around `benchtex-report`: reads run sets and statistics from
//! JSON, applies `benchtex.toml` defaults, and writes the generated LaTeX macros (or
//! a JSON / terminal rendering of them) to a file or stdout.
//!
//! # Example
//!
//! ```text
//! benchtex results.json -o results.tex
//! benchtex list results.json --filter 'Cputime.*Sum$'
//! benchtex init > benchtex.toml
//! ```

mod config;
mod input;

pub use config::*;
pub use input::{RunSetInput, TableInput};

use anyhow::Context;
use benchtex_report::{FormatTarget, OutputFormat, TexCommand, collect_commands, write_report};
use clap::{Parser, Subcommand};
use regex::Regex;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// BenchTex CLI arguments
#[derive(Parser, Debug)]
#[command(name = "benchtex")]
#[command(
    author,
    version,
    about = "BenchTex - LaTeX result macros from benchmark statistics"
)]
pub struct Cli {
    /// Optional subcommand (Generate, List, Init); defaults to Generate
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Input JSON file ("-" or omitted for stdin)
    pub input: Option<PathBuf>,

    /// Output format: tex, json, human
    #[arg(long, global = true)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Configuration file (benchtex.toml is discovered if not specified)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate result macros (default)
    Generate {
        /// Input JSON file ("-" or omitted for stdin)
        input: Option<PathBuf>,
    },
    /// List the names of the macros that would be defined
    List {
        /// Input JSON file ("-" or omitted for stdin)
        input: Option<PathBuf>,

        /// Only list macro names matching this regex
        #[arg(long, default_value = ".*")]
        filter: String,
    },
    /// Print a default benchtex.toml
    Init,
}

/// Run the BenchTex CLI with the process arguments.
///
/// # Returns
/// Returns `Ok(())` on success, or an error if something goes wrong.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the BenchTex CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => BenchTexConfig::load(path)?,
        None => BenchTexConfig::discover().unwrap_or_default(),
    };

    init_logging(cli.verbose, &config);

    match &cli.command {
        Some(Commands::Init) => {
            print!("{}", BenchTexConfig::default_toml());
        }
        Some(Commands::List { input, filter }) => {
            let input = input.as_deref().or(cli.input.as_deref());
            list_macros(input, filter, &config)?;
        }
        Some(Commands::Generate { input }) => {
            let input = input.as_deref().or(cli.input.as_deref());
            generate(&cli, input, &config)?;
        }
        None => {
            generate(&cli, cli.input.as_deref(), &config)?;
        }
    }

    Ok(())
}

/// Install the tracing subscriber; logs go to stderr so stdout stays clean
fn init_logging(verbose: bool, config: &BenchTexConfig) {
    let filter = config.logging.filter.clone().unwrap_or_else(|| {
        if verbose {
            "benchtex=debug".to_string()
        } else {
            "benchtex=info".to_string()
        }
    });

    // Already initialised when running several commands in one process
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Output format: CLI flag first, then config
pub fn resolve_format(cli: &Cli, config: &BenchTexConfig) -> anyhow::Result<OutputFormat> {
    let name = cli.format.as_deref().unwrap_or(&config.output.format);
    name.parse::<OutputFormat>().map_err(|e| anyhow::anyhow!(e))
}

fn read_input(path: Option<&Path>) -> anyhow::Result<TableInput> {
    match path {
        Some(path) if path != Path::new("-") => TableInput::load(path),
        _ => TableInput::from_reader(std::io::stdin().lock()),
    }
}

fn generate(cli: &Cli, input: Option<&Path>, config: &BenchTexConfig) -> anyhow::Result<()> {
    let format = resolve_format(cli, config)?;
    let (run_sets, stats) = read_input(input)?.into_parts(config.format.significant_digits);

    let summary = match cli.output.as_ref().or(config.output.path.as_ref()) {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            let summary = write_report(&mut writer, format, &run_sets, &stats)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            writer.flush()?;
            summary
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            let summary = write_report(&mut lock, format, &run_sets, &stats)
                .context("Failed to write to stdout")?;
            lock.flush()?;
            summary
        }
    };

    tracing::info!(
        run_sets = run_sets.len(),
        commands = summary.commands,
        collisions = summary.collisions.len(),
        "generated result macros"
    );
    Ok(())
}

/// Macro names of `commands` matching `filter`, in command order
pub fn matching_macro_names(commands: &[TexCommand], filter: &Regex) -> Vec<String> {
    commands
        .iter()
        .map(TexCommand::macro_name)
        .filter(|name| filter.is_match(name))
        .collect()
}

fn list_macros(input: Option<&Path>, filter: &str, config: &BenchTexConfig) -> anyhow::Result<()> {
    let filter_re =
        Regex::new(filter).with_context(|| format!("Invalid filter pattern '{}'", filter))?;
    let (run_sets, stats) = read_input(input)?.into_parts(config.format.significant_digits);
    let (commands, _) = collect_commands(&run_sets, &stats, FormatTarget::Csv);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for name in matching_macro_names(&commands, &filter_re) {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}
