use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vaxtalk_core::config::AppConfig;
use vaxtalk_infrastructure::ConfigLoader;

mod commands;
mod display;

#[derive(Parser)]
#[command(name = "vaxtalk")]
#[command(about = "VaxTalk - practise vaccine conversations with simulated hesitant patients", long_about = None)]
struct Cli {
    /// Config file to use instead of ~/.config/vaxtalk/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive practice conversation
    Chat {
        /// Persona key (see `vaxtalk personas`); unknown keys use the default patient
        #[arg(short, long)]
        persona: Option<String>,

        /// Seed for reproducible patient replies
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Score a single message and print scores and feedback as JSON
    Score {
        /// The student message to score
        message: String,
    },
    /// List the available patient personas
    Personas,
    /// Show the effective configuration and where it is read from
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ConfigLoader::load().context("Failed to load config")?,
    };
    init_tracing(&config);

    match cli.command {
        Commands::Chat { persona, seed } => commands::chat::run(&config, persona, seed).await?,
        Commands::Score { message } => commands::score::run(&message)?,
        Commands::Personas => commands::personas::run(),
        Commands::Config => commands::config::run(&config, cli.config.as_deref())?,
    }

    Ok(())
}

/// Logs go to stderr so JSON output on stdout stays clean.
/// `RUST_LOG` wins over the configured level.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
