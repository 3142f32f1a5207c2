//! Voltage Dashboard - Main Entry Point

use api::{init_logging, run_server, Settings};
use std::path::PathBuf;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional settings file path as the only argument
    let settings_path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = Settings::load(settings_path.as_deref())?;

    init_logging(&settings.logging)?;

    info!("=== Voltage Dashboard v{} ===", env!("CARGO_PKG_VERSION"));

    run_server(&settings.server).await?;

    Ok(())
}
