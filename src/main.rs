//! minerva-inspect - print a typed summary of one service response.
//!
//! Reads a response payload from a file (or `-` for stdin), wraps it in a
//! `ResponseEnvelope`, and prints every accessor as JSON.

use clap::Parser;
use minerva_response::inspect::{load_path, Summary};
use minerva_response::{Config, Error};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "minerva-inspect", version, about)]
struct Cli {
    /// Response payload file, or `-` for stdin.
    #[arg(default_value = "-")]
    input: PathBuf,

    /// JSON configuration file.
    #[arg(long, env = "MINERVA_CONFIG")]
    config: Option<PathBuf>,

    /// Embed the raw payload in the output.
    #[arg(long)]
    raw: bool,

    /// Print compact single-line JSON.
    #[arg(long)]
    compact: bool,
}

fn load_config(cli: &Cli) -> minerva_response::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    config.apply_lookup(|key| std::env::var(key).ok())?;
    if cli.raw {
        config.inspect.include_raw = true;
    }
    if cli.compact {
        config.inspect.pretty = false;
    }
    Ok(config)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("minerva-inspect: {err}");
            return ExitCode::from(2);
        }
    };

    minerva_response::observability::init_tracing_with(&config.observability);

    let envelope = match load_path(&cli.input) {
        Ok(envelope) => envelope,
        Err(err @ Error::Construction { .. }) => {
            tracing::error!(input = %cli.input.display(), error = %err, "not a response envelope");
            return ExitCode::from(1);
        }
        Err(err) => {
            tracing::error!(input = %cli.input.display(), error = %err, "unreadable input");
            return ExitCode::from(2);
        }
    };

    tracing::info!(
        message_type = envelope.message_type().unwrap_or("-"),
        model_id = envelope.model_id().unwrap_or("-"),
        "response envelope loaded"
    );

    match Summary::from_envelope(&envelope, &config.inspect).render(&config.inspect) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to render summary");
            ExitCode::from(2)
        }
    }
}
