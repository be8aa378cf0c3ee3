use clap::Parser;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::{AppConfig, ConfigOverrides};
use crate::errors::AppError;
use crate::identifier::IdentifierType;
use crate::logger::LogFormat;
use crate::obfuscator::{ObfuscationRequest, Obfuscator, ReplacementMode};

/// Replaces sensitive data identifiers with randomly generated values.
#[derive(Debug, Parser)]
#[command(name = "id-obfuscator", version)]
pub struct Cli {
    /// The input file to process.
    pub input_file: PathBuf,

    /// The output file to write to.
    pub output_file: PathBuf,

    /// The type of identifier to obfuscate (supported: ssn) [default: ssn]
    #[arg(long, visible_alias = "identifier_type")]
    pub identifier_type: Option<String>,

    /// Give every match its own value, or reuse one value for the whole file.
    #[arg(long, value_enum)]
    pub replacement: Option<ReplacementMode>,

    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Optional TOML, JSON or YAML config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Obfuscate without writing OUTPUT_FILE and print a JSON summary instead.
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            identifier_type: self.identifier_type.clone(),
            replacement: self.replacement,
            log_format: self.log_format,
        }
    }
}

/// What a run did; printed as JSON in dry-run mode.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub input_file: PathBuf,
    pub output_file: Option<PathBuf>,
    pub identifier_type: IdentifierType,
    pub replacements: usize,
    pub mode: ReplacementMode,
    pub dry_run: bool,
}

pub async fn run(cli: &Cli, config: &AppConfig) -> Result<RunSummary, AppError> {
    // reject unknown types before touching the filesystem
    let identifier_type: IdentifierType = config.identifier_type.parse()?;

    debug!("Reading input from {}", cli.input_file.display());
    let input = read_input(&cli.input_file).await?;

    let obfuscator = Obfuscator::new().with_mode(config.replacement);
    let outcome = obfuscator.process(
        ObfuscationRequest::new(&input, identifier_type),
        &mut rand::rng(),
    )?;
    debug!(
        replacements = outcome.replacements,
        mode = outcome.mode.as_str(),
        "Obfuscation finished"
    );

    let output_file = if cli.dry_run {
        info!("Dry run: not writing {}", cli.output_file.display());
        None
    } else {
        write_output(&cli.output_file, &outcome.text).await?;
        info!("Data obfuscated and written to: {}", cli.output_file.display());
        Some(cli.output_file.clone())
    };

    Ok(RunSummary {
        input_file: cli.input_file.clone(),
        output_file,
        identifier_type: outcome.identifier_type,
        replacements: outcome.replacements,
        mode: outcome.mode,
        dry_run: cli.dry_run,
    })
}

pub async fn read_input(path: &Path) -> Result<String, AppError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::io(path, e))
}

pub async fn write_output(path: &Path, contents: &str) -> Result<(), AppError> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| AppError::io(path, e))
}
