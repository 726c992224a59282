//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use demoji_core::{clean_file, CleanError, CleanReport};

use crate::settings::{ReportFormat, Settings};

#[derive(Parser)]
#[command(name = "demoji")]
#[command(author, version, about = "Remove emoji from text files", long_about = None)]
struct Cli {
    /// Input text file
    input: PathBuf,

    /// Output file (defaults to overwriting the input)
    output: Option<PathBuf>,

    /// Report format (text or json)
    #[arg(short, long, value_enum)]
    format: Option<ReportFormat>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Run the CLI application
///
/// Parses arguments, loads settings and cleans the input file.
pub fn run_cli() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;
    let format = cli.format.unwrap_or(settings.report.format);

    clean_command(&cli.input, cli.output.as_deref(), format)?;

    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    // Ignore the error when a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Execute the clean command and print the report
pub fn clean_command(input: &Path, output: Option<&Path>, format: ReportFormat) -> Result<()> {
    let report = match clean_file(input, output) {
        Ok(report) => report,
        Err(CleanError::NotFound(path)) => {
            anyhow::bail!("Input file not found: {}", path.display());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to process file: {}", input.display()));
        }
    };

    print!("{}", render_report(&report, format)?);

    Ok(())
}

/// Render a [`CleanReport`] in the requested format
pub fn render_report(report: &CleanReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)
                .context("Failed to serialize report to JSON")?;
            json.push('\n');
            Ok(json)
        }
        ReportFormat::Text => {
            let counts = &report.counts;
            let mut output = String::new();
            output.push_str(&format!(
                "Original file size: {} characters\n",
                counts.original_chars
            ));
            output.push_str(&format!(
                "Cleaned file size: {} characters\n",
                counts.cleaned_chars
            ));
            output.push_str(&format!("Removed: {} characters\n", counts.removed_chars));
            if report.overwritten {
                output.push_str(&format!(
                    "Overwriting original file: {}\n",
                    report.input.display()
                ));
            } else {
                output.push_str(&format!(
                    "Writing to new file: {}\n",
                    report.output.display()
                ));
            }
            output.push_str("✓ Successfully removed all emojis!\n");
            Ok(output)
        }
    }
}

/// Load settings from an explicit path, or from `demoji.toml` /
/// `.demoji.toml` in the current directory, or fall back to defaults
pub fn load_settings(config_path: Option<&Path>) -> Result<Settings> {
    match config_path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            Settings::from_toml_str(&content)
                .with_context(|| format!("Failed to parse config: {}", path.display()))
        }
        None => {
            let candidates = ["demoji.toml", ".demoji.toml"];
            for candidate in candidates {
                let path = Path::new(candidate);
                if path.exists() {
                    debug!(config = candidate, "loading settings");
                    let content = fs::read_to_string(path)
                        .with_context(|| format!("Failed to read config: {}", candidate))?;
                    return Settings::from_toml_str(&content)
                        .with_context(|| format!("Failed to parse config: {}", candidate));
                }
            }
            Ok(Settings::default())
        }
    }
}
