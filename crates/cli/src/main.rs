//! solkey CLI
//!
//! Generates BIP-39 mnemonics and derives Solana-style Ed25519 wallets from
//! them. Nothing is ever written to disk.

mod commands;
mod config;

use clap::Parser;
use commands::Command;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Solana HD wallet tool
#[derive(Parser)]
#[command(name = "solkey")]
#[command(version)]
#[command(about = "BIP-39 / SLIP-0010 Ed25519 wallet derivation", long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// JSON config file with derivation layout and defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// The logging level (trace|debug|info|warn|error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// The logging format (json|plain)
    #[arg(long, global = true, default_value = "plain")]
    log_format: String,

    /// Disable colored logs
    #[arg(long, global = true, default_value = "false")]
    log_no_color: bool,

    /// Print out full error chain on failure
    #[arg(long, global = true, default_value = "false")]
    trace: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, &cli.log_format, cli.log_no_color);

    let result = config::CliConfig::resolve(cli.config.as_deref())
        .and_then(|config| commands::execute(&config, cli.command));

    match result {
        Ok(code) => code,
        Err(e) => {
            if cli.trace {
                eprintln!("Error: {:?}", e);
            } else {
                eprintln!("Error: {}", e);
            }
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout stays parseable under `--json`
fn init_tracing(log_level: &str, log_format: &str, no_color: bool) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(true)
        .with_ansi(!no_color);

    match log_format {
        "json" => subscriber.json().init(),
        _ => subscriber.init(),
    }
}
