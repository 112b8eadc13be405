//! Roster application entry point.
//!
//! Parses command line arguments, loads configuration from TOML with
//! environment overrides, initializes tracing, seeds the demo user store,
//! assembles the router, and runs the HTTP server until shutdown.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roster::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use roster::readiness::{ReadinessCheck, StoreCheck};
use roster::routes::create_router;
use roster::state::AppState;
use roster::store::UserStore;

/// Roster: a minimal user registry HTTP service
#[derive(Parser, Debug)]
#[command(name = "roster", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "roster=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration before tracing init: test mode silences output
    // and the logging format comes from the config file.
    let config = AppConfig::load(&args.config)?;

    // Log filter priority: test mode > CLI > env > default
    let log_filter = if config.app.test_mode {
        "off".to_string()
    } else {
        args.log_level
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
    };

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(
        environment = %config.app.environment,
        port = config.http.port,
        "Loaded configuration"
    );

    // Seed the demo dataset the service has always shipped with.
    let users = UserStore::new();
    users.create("Alice", "alice@example.com").await;
    users.create("Bob", "bob@example.com").await;

    let checks: Vec<Box<dyn ReadinessCheck>> = vec![Box::new(StoreCheck::new(users.clone()))];
    let state = AppState::new(config.clone(), users).with_readiness_checks(checks);

    let app = create_router(state);

    roster::http::server::start_server(app, &config).await?;

    Ok(())
}
