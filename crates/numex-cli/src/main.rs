//! CLI application for extracting numeric facts from financial PDF reports.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{ai, config, process};

/// numex - Extract and rank numeric facts from financial PDF reports
#[derive(Parser)]
#[command(name = "numex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract numbers locally and report the largest
    Process(process::ProcessArgs),

    /// Delegate extraction to the hosted model
    Ai(ai::AiArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Per-page progress is logged at INFO; show it by default.
    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Process(args) => process::run(args, cli.config.as_deref()).await,
        Commands::Ai(args) => ai::run(args, cli.config.as_deref()).await,
        Commands::Config(args) => config::run(args).await,
    }
}
