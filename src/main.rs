//! Wayfarer - AI trip-planner CLI
//!
//! Main entry point for the Wayfarer application.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wayfarer::cli::{Cli, Commands};
use wayfarer::commands;
use wayfarer::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse_args();

    // If the user supplied a preferences DB path on the CLI, mirror it into
    // WAYFARER_PREFS_DB so the store initializer can pick it up. This keeps
    // callers unchanged while allowing `PreferenceStore::new()` to honor an
    // override.
    if let Some(db_path) = &cli.prefs_db {
        std::env::set_var("WAYFARER_PREFS_DB", db_path);
        tracing::info!("Using preferences DB override from CLI: {}", db_path);
    }

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    // Execute command
    match cli.command {
        Commands::Chat => {
            commands::chat::run_chat(config).await?;
            Ok(())
        }
        Commands::Plan {
            request,
            output,
            json,
        } => {
            tracing::info!("Planning one-shot trip request");
            commands::plan::run_plan(config, request, output, json).await?;
            Ok(())
        }
        Commands::Last => {
            commands::last::show_last()?;
            Ok(())
        }
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wayfarer=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
