//! Spotter - Visitor Info Panel
//!
//! Desktop application entry point: initializes logging, then hands off to
//! the UI event loop.

use spotter_ui::AppWindow;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Console logging; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Run the event loop (blocks until window closes)
    let app = AppWindow::new()?;
    app.run()?;

    Ok(())
}
