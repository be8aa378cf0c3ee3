use clap::Parser;
use id_obfuscator::cli::{run, Cli};
use id_obfuscator::config::load_config;
use id_obfuscator::errors::AppError;
use id_obfuscator::logger::init_logging;
use id_obfuscator::obfuscator::ObfuscationError;
use id_obfuscator::IdentifierType;
use std::process::ExitCode;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = load_config(cli.config.as_deref(), &cli.overrides()).map_err(AppError::from);
    let cfg = match loaded {
        Ok(cfg) => cfg,
        Err(e) => {
            init_logging(cli.log_format.unwrap_or_default());
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    init_logging(cfg.log_format);

    match run(&cli, &cfg).await {
        Ok(summary) => {
            if summary.dry_run {
                match serde_json::to_string_pretty(&summary) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        error!("Failed to render summary: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            }
            ExitCode::SUCCESS
        }
        Err(AppError::Obfuscation(ObfuscationError::UnsupportedIdentifierType(name))) => {
            error!(
                "Unsupported identifier type: {} (supported: {})",
                name,
                IdentifierType::names().join(", ")
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
