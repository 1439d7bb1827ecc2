//! # Factory Recipe Demo
//!
//! Runs the furniture and database clients against every configured factory.
//!
//! Usage: `factory-recipe [CONFIG_PATH]`. Without a path every variation runs.

use factory_framework::tracing::setup_tracing;
use factory_recipe::config::DemoConfig;
use factory_recipe::lifecycle::{DemoError, DemoRunner};
use tracing::info;

fn main() -> Result<(), DemoError> {
    setup_tracing();

    let config = match std::env::args_os().nth(1) {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    info!(?config, "Starting factory demo");

    let stdout = std::io::stdout();
    DemoRunner::new(config).run(&mut stdout.lock())?;

    info!("Application completed successfully");
    Ok(())
}
