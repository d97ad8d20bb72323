//! Shoebox - Local Photo Shelf
//!
//! Main entry point for the command-line front end.

mod app;

use anyhow::Result;

fn main() -> Result<()> {
    // Initialize logging and panic hook first
    gallery_log::init()?;

    // Load configuration
    let config = gallery_core::GalleryConfig::load().unwrap_or_default();

    if let Err(e) = gallery_log::cleanup_old_logs(config.general.keep_logs_days) {
        tracing::warn!("Failed to cleanup old logs: {}", e);
    }

    tracing::info!("Shoebox starting...");

    // Initialize gallery state
    let gallery = gallery_core::init(config)?;

    // Run the command
    app::run(gallery)
}
