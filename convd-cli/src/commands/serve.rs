//! HTTP server command

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use convd_server::config::{listen_addr_from_env, DbConfig};
use convd_server::db::create_pool;
use convd_server::http::{run_server, ServerConfig};
use convd_server::MIGRATOR;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: PORT env var, falling back to 0.0.0.0:3000)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Database URL (overrides DB_* environment variables)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    dotenvy::dotenv().ok();

    let config = match args.database_url {
        Some(url) => DbConfig::Url(url),
        None => DbConfig::from_env(),
    };
    let options = config
        .connect_options()
        .context("invalid database configuration")?;

    let bind_addr = args.bind.unwrap_or_else(listen_addr_from_env);
    tracing::info!("Starting convd server on {}", bind_addr);

    let pool = create_pool(options)
        .await
        .context("Failed to create database pool")?;
    MIGRATOR.run(&pool).await.context("migration failed")?;

    run_server(pool, ServerConfig { bind_addr })
        .await
        .context("Server error")?;

    Ok(())
}
