//! Yellowpages server.
//!
//! # Architecture Overview
//!
//! ```text
//!   services.toml
//!        │
//!        ▼
//!   ┌──────────┐    ┌────────────┐    ┌──────────────────┐
//!   │  config  │───▶│ directory  │───▶│ Service::register│
//!   │ + valid. │    │ (services) │    │  per endpoint    │
//!   └──────────┘    └────────────┘    └────────┬─────────┘
//!                                              │
//!                          ┌───────────────────┴──────────┐
//!                          ▼                              ▼
//!                   ┌─────────────┐               ┌──────────────┐
//!                   │ axum Router │               │  RouteTable  │
//!                   │  (serve)    │               │ (index, CLI) │
//!                   └─────────────┘               └──────────────┘
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use yellowpages::config::{load_config, DirectoryConfig};
use yellowpages::observability::logging;
use yellowpages::{HttpServer, RouteTable, Shutdown};

#[derive(Parser)]
#[command(name = "yellowpages")]
#[command(about = "Serve declarative HTTP services from a TOML directory", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register every service and serve it
    Serve {
        /// Path to the services TOML file
        #[arg(short, long)]
        config: PathBuf,
    },
    /// List the routes each service would register
    Routes {
        /// Path to the services TOML file
        #[arg(short, long)]
        config: PathBuf,

        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => serve(load_config(&config)?).await,
        Commands::Routes { config, json } => routes(&load_config(&config)?, json),
    }
}

async fn serve(config: DirectoryConfig) -> Result<(), Box<dyn std::error::Error>> {
    logging::init(&config.observability);

    tracing::info!("yellowpages v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        services = config.services.len(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = HttpServer::new(config)?;

    let shutdown = Shutdown::new();
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn routes(config: &DirectoryConfig, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let directory = config.build_directory()?;

    let mut table = RouteTable::new();
    directory.register(&mut table)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&table.routes())?);
    } else {
        for route in table.routes() {
            println!("{:<8} {}", route.method.as_str(), route.path);
        }
    }
    Ok(())
}
