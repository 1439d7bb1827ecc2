//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! the `RUST_LOG` environment variable.
//!
//! Logs are written to **stderr**. Standard output belongs to the demo text, so
//! piping the binary into a file or a diff never picks up log lines.
//!
//! ```bash
//! # Demo output only
//! cargo run
//!
//! # One span per family run, one event per factory
//! RUST_LOG=debug cargo run
//!
//! # Filter to the client layer
//! RUST_LOG=factory_recipe::clients=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` the furniture demo shows:
//!
//! ```text
//! DEBUG family_run{family="furniture" variation=ArDeko}: Factory built variation=ArDeko
//! DEBUG family_run{family="furniture" variation=ArDeko}:furniture_client{style=ArDeko}: Created table
//! DEBUG family_run{family="furniture" variation=ArDeko}:furniture_client{style=ArDeko}: Created sofa
//! ```

/// Initializes the global subscriber. Call once, at the top of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
