mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use insert_form_validation::{FieldRules, FormConfig, FormSession};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "insert-form")]
#[command(version, about = "Insert form validation - check field values and replay edit logs", long_about = None)]
struct Cli {
    /// Config file with the length bounds
    #[arg(short, long, global = true, default_value = insert_form_validation::config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the tracked fields and their rules
    Fields,

    /// Validate field values, e.g. `name=Giulio nap=6900`
    Check {
        /// `input=value` pairs, applied in order
        #[arg(required = true)]
        pairs: Vec<String>,
    },

    /// Replay a JSON-lines edit log ({"field": "...", "value": "..."} per line)
    Replay {
        /// Path to the edit log
        file: PathBuf,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn new_session(config: &FormConfig) -> Result<FormSession> {
    let rules = FieldRules::from_config(config).context("Invalid bounds in config")?;
    Ok(FormSession::with_rules(rules))
}

fn main() -> Result<ExitCode> {
    init_logging();

    // Parse CLI arguments
    let cli = Cli::parse();
    let config = FormConfig::load(&cli.config)?;

    let submit_enabled = match cli.command {
        Commands::Fields => {
            commands::fields::execute(&new_session(&config)?);
            true
        }
        Commands::Check { pairs } => commands::check::execute(&mut new_session(&config)?, &pairs)?,
        Commands::Replay { file } => commands::replay::execute(&mut new_session(&config)?, &file)?,
    };

    Ok(if submit_enabled {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
