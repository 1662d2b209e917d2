//! staffd CLI - employee directory service
//!
//! Entry point for the staffd command-line tool:
//! - HTTP API server (`serve` subcommand)

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::serve::ServeArgs;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "staffd",
    author,
    version,
    about = "Employee directory CRUD service",
    long_about = "Serve an employee roster over a REST API backed by PostgreSQL. \
                  Create, list, fetch, update, and delete employee records."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up DATABASE_URL and friends from a local .env if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_setup::init_tracing(&TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
    }
}
