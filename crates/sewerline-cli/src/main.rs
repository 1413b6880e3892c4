//! Sewerline command-line interface.
//!
//! Evaluates partially-filled sewer segments from a JSON parameter file and
//! `--set key=value` overrides.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Sewer segment hydraulics and design verification
#[derive(Parser)]
#[command(name = "sewerline")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Partially-filled sewer segment verification", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one segment
    Run(commands::run::RunArgs),
    /// Check parameters against typical engineering ranges
    Validate(commands::validate::ValidateArgs),
    /// Evaluate one segment over a range of one parameter
    Sweep(commands::sweep::SweepArgs),
}

fn parse_level(text: &str) -> Level {
    match text.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(parse_level(&cli.log_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Run(args) => commands::run::execute(args),
        Commands::Validate(args) => commands::validate::execute(args),
        Commands::Sweep(args) => commands::sweep::execute(args),
    }
}
