//! Dotalens - Main Entry Point
//!
//! Initializes logging and starts the UI event loop.

use dotalens_ui::AppWindow;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Dotalens");

    let app = AppWindow::new()?;

    // Blocks until the window closes
    app.run()?;

    Ok(())
}
