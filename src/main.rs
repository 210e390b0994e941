//! Hospital record service entry point.

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hospital_records::api::{create_router, AppState};
use hospital_records::config::{Config, Profile};
use hospital_records::metrics;
use hospital_records::utils::shutdown_signal;

/// In-memory hospital record service.
#[derive(Parser, Debug)]
#[command(name = "hospital-records")]
#[command(about = "JSON HTTP service for validated, in-memory hospital records")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides HOSPITAL_PORT).
    #[arg(short, long, global = true)]
    port: Option<u16>,

    /// Route profile, `a` or `b` (overrides HOSPITAL_PROFILE).
    #[arg(long, global = true)]
    profile: Option<Profile>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve,

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let mut config = Config::load()?;
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(profile) = args.profile {
        config.profile = profile;
    }

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("hospital_records=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config),
        Some(Command::Serve) | None => cmd_serve(config).await,
    }
}

/// Check configuration validity.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("HOSPITAL RECORDS - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Bind Address: {}", config.bind_addr());
    println!("  Profile: {}", config.profile);
    println!("  Log Filter: {}", config.rust_log);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server until shutdown.
async fn cmd_serve(config: Config) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(e.into());
    }

    info!("Configuration loaded successfully");
    info!("Profile: {}", config.profile);

    // Initialize metrics
    let handle = metrics::install_recorder()?;

    // Create app state
    let app_state = AppState::new().with_metrics(handle);
    let router = create_router(app_state, config.profile);

    // Start HTTP server
    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr).await?;
    info!("Server is running on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
