//! Studio: interactive project explorer
//!
//! Loads configuration and the seed collection, then runs the explorer
//! prompt loop on the terminal.

mod explorer;

use tracing_subscriber::{EnvFilter, fmt};

use studio_core::config::AppConfig;
use studio_core::error::AppError;
use studio_service::ExplorerSession;

fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config) {
        tracing::error!("Explorer error: {}", e);
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("STUDIO_ENV").unwrap_or_else(|_| "development".to_string());

    match std::env::var("STUDIO_CONFIG") {
        Ok(path) => AppConfig::load_from(&path),
        Err(_) => AppConfig::load(&env),
    }
}

/// Initialize tracing/logging. Logs go to stderr so prompts stay readable.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

/// Seed the tree and hand the session to the prompt loop
fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Studio v{}", env!("CARGO_PKG_VERSION"));

    let manager = studio_service::seed::manager_from_config(&config.explorer)?;
    tracing::info!(items = manager.len(), "Project tree ready");

    let session = ExplorerSession::new(manager, &config.explorer);
    explorer::Explorer::new(session).run()
}
