//! Reelhouse CLI - Command-line interface
//!
//! Provides command-line access to Reelhouse functionality.

mod commands;

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use reelhouse_core::tracing_setup::{CliLogLevel, init_tracing};

#[derive(Parser)]
#[command(name = "reelhouse")]
#[command(about = "A personal media streaming server")]
struct Cli {
    /// Console log verbosity
    #[arg(long, global = true, default_value_t = CliLogLevel::Info)]
    log_level: CliLogLevel,

    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_level.as_tracing_level(), Path::new("logs"))
        .context("failed to initialize logging")?;

    if let Err(e) = commands::handle_command(cli.command).await {
        tracing::error!("Command failed: {e}");
        eprintln!("Error: {}", e.user_message());
        std::process::exit(1);
    }

    Ok(())
}
