//! convd CLI - conversation API server and dataset seeder
//!
//! Two subcommands:
//! - `serve`: run the paginated /conversations HTTP API
//! - `seed`: bulk-populate contacts and messages for load testing

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "convd",
    author,
    version,
    about = "Paginated, searchable conversation API over contacts and messages"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Bulk-generate synthetic contacts and messages
    Seed(convd_seed::SeedArgs),
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await?,
        Commands::Seed(args) => convd_seed::run_seed(args).await?,
    }
    Ok(())
}
