//! Dungeon game client binary.
//!
//! This binary is the composition root that assembles:
//! 1. Configuration from the environment (and `.env`)
//! 2. Logging to a per-session file
//! 3. The level, loaded from disk, and the runtime built around it
//! 4. The frontend (UI)
//!
//! # Examples
//!
//! ```bash
//! DUNGEON_LEVEL=assets/level1.map cargo run -p dungeon-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use anyhow::Context;
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use dungeon_client::Client;
    use game_content::LevelLoader;
    use game_core::LevelError;
    use runtime::{Runtime, RuntimeConfig};

    // 1. Load configuration from environment
    let runtime_config = RuntimeConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    let _log_guard = logging::setup_logging(cli_config.session_id.as_deref())?;

    tracing::info!("Starting Dungeon client");
    tracing::info!("Level: {}", cli_config.level_path.display());
    tracing::info!("Atlas: {}", frontend_config.atlas_path.display());

    // 3. Load the level and start the simulation
    let level = LevelLoader::load(&cli_config.level_path, &runtime_config.game_config)
        .inspect_err(|e| {
            let severity = e
                .downcast_ref::<LevelError>()
                .map_or("io", |level_error| level_error.severity().as_str());
            tracing::error!(severity, "Level load failed: {:#}", e);
        })
        .context("Failed to load level")?;

    tracing::debug!("Building runtime...");
    let runtime = Runtime::builder()
        .config(runtime_config)
        .level(level)
        .build()
        .await?;
    tracing::info!("Runtime built successfully");

    // 4. Build Frontend and Client
    let frontend = CliFrontend::new(frontend_config);
    let client = Client::builder().runtime(runtime).frontend(frontend).build()?;

    tracing::info!("Client assembled, starting...");
    let outcome = client.run().await?;

    tracing::info!(%outcome, "Client shutdown complete");
    Ok(())
}
