//! HTTP server command
//!
//! Runs the applications API against Postgres, or against a throwaway
//! in-memory store with `--in-memory`.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use jobtrack_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use jobtrack_server::http::server::DEFAULT_TIMEOUT_SECS;
use jobtrack_server::{connect_postgres, in_memory_service, run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "JOBTRACK_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Database URL
    #[arg(long, env = "DATABASE_URL", required_unless_present = "in_memory")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "JOBTRACK_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Mount the API under this path prefix (e.g. /api/v1)
    #[arg(long, env = "JOBTRACK_API_PREFIX", default_value = "")]
    pub api_prefix: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Keep records in process memory instead of Postgres (lost on exit).
    /// Takes precedence over --database-url.
    #[arg(long)]
    pub in_memory: bool,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind,
            cors_permissive: self.cors_permissive,
            api_prefix: self.api_prefix.clone(),
            request_timeout_secs: self.timeout,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.server_config();

    let service = if args.in_memory {
        tracing::warn!("Using in-memory store - records are lost on shutdown");
        in_memory_service()
    } else {
        let database_url = args
            .database_url
            .as_deref()
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;
        connect_postgres(database_url, args.max_connections)
            .await
            .context("Failed to connect to database")?
    };

    tracing::info!("Starting jobtrack server on {}", config.bind_addr);

    // Blocks until shutdown
    run_server(service, config).await.context("Server error")?;

    Ok(())
}
