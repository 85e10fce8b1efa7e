use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use runtime::{AppConfig, CliArgs};
use std::path::{Path, PathBuf};

mod app;
mod seed;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Faithfin Server - faith & finance tracking service
#[derive(Parser)]
#[command(name = "faithfin-server")]
#[command(about = "Faithfin Server - faith & finance tracking service")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print current configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Check configuration
    Check,
    /// Create the local demo account
    SeedDemo,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.config.as_deref() {
        if !path.is_file() {
            return Err(anyhow!("Config file not found: {}", path.display()));
        }
    }

    let args = CliArgs {
        config: cli.config.as_ref().map(|p| p.to_string_lossy().to_string()),
        port: cli.port,
        print_config: cli.print_config,
        verbose: cli.verbose,
    };

    // Load configuration (normalized home_dir is applied inside)
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;

    // Apply CLI overrides (port / verbosity)
    config.apply_cli_overrides(&args);

    // Initialize logging
    let logging_config = config.logging.as_ref().cloned().unwrap_or_default();
    runtime::logging::init_logging_from_config(&logging_config, Path::new(&config.server.home_dir));
    tracing::info!("Faithfin Server starting");

    // Print config and exit if requested
    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(config),
        Commands::SeedDemo => seed_demo(config).await,
    }
}

async fn run_server(config: AppConfig) -> Result<()> {
    let db = app::connect_database(&config).await?;
    let services = app::build_services(db, &config);
    let router = app::build_router(&services, config.server.timeout_sec);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}

fn check_config(config: AppConfig) -> Result<()> {
    if config.database.is_none() {
        return Err(anyhow!("Database not configured"));
    }
    if config.auth.token_secret.trim().is_empty() {
        return Err(anyhow!("auth.token_secret must not be empty"));
    }

    println!("Configuration OK");
    println!("{}", config.to_yaml()?);
    Ok(())
}

async fn seed_demo(config: AppConfig) -> Result<()> {
    let db = app::connect_database(&config).await?;
    let services = app::build_services(db, &config);
    seed::seed_demo(&services).await
}
