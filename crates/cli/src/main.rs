//! Tour of Schools CLI - Main Entry Point
//!
//! Terminal front end over the schools data-access layer: list/detail
//! views, dashboard, and progressive search against a running backend.

use std::sync::Arc;

use clap::{Parser, Subcommand};

use schooltour_client::{MessageLog, SchoolService};

mod commands;
mod output;

use commands::{school, search};

/// Tour of Schools CLI
#[derive(Parser)]
#[command(name = "schooltour")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Backend address
    #[arg(long, default_value = "http://127.0.0.1:8080", global = true)]
    server_addr: String,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage schools
    #[command(subcommand)]
    School(school::SchoolCommands),

    /// Search schools by name
    Search(search::SearchArgs),

    /// Show the dashboard's top schools
    Dashboard,

    /// Check backend status
    Status,

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let messages = Arc::new(MessageLog::new());
    let service = Arc::new(SchoolService::new(&cli.server_addr, messages.clone()));

    match cli.command {
        Commands::School(cmd) => school::execute(cmd, service.clone(), cli.format).await?,
        Commands::Search(args) => search::execute(args, service.clone(), cli.format).await?,
        Commands::Dashboard => {
            let mut dashboard = schooltour_client::Dashboard::new(service.clone());
            dashboard.refresh().await;
            let displays: Vec<school::SchoolDisplay> = dashboard
                .top_schools()
                .iter()
                .cloned()
                .map(school::SchoolDisplay::from)
                .collect();
            output::print_list(&displays, cli.format);
        }
        Commands::Status => {
            let url = format!("{}/health", cli.server_addr.trim_end_matches('/'));
            match reqwest::get(&url).await {
                Ok(resp) if resp.status().is_success() => {
                    println!("✅ Backend is running at {}", cli.server_addr);
                }
                Ok(resp) => {
                    println!("❌ Backend returned {} at {}", resp.status(), cli.server_addr);
                    std::process::exit(1);
                }
                Err(e) => {
                    println!("❌ Cannot reach backend: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Version => {
            println!("Tour of Schools CLI v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    // The notification log is the only trace of absorbed failures.
    if cli.verbose {
        for message in messages.messages() {
            eprintln!("{}", message);
        }
    }

    Ok(())
}
