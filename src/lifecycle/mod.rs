//! # Demo Lifecycle & Orchestration
//!
//! This module is the only place where concrete factories are chosen. Everything
//! else (clients, the framework's [`FamilyDemo`](factory_framework::FamilyDemo)
//! driver) works purely in terms of the abstract factory traits.
//!
//! ## The Run Pattern
//!
//! Each family run follows the same one-shot lifecycle per variation:
//!
//! 1. **Construct** - `factory_for(variation)` picks the concrete factory
//! 2. **Create** - the client asks the factory for every product kind
//! 3. **Invoke** - the client calls each product, including the collaboration
//! 4. **Print** - results go to the caller's output sink
//!
//! There is no state between runs and nothing to shut down.
//!
//! ```rust,ignore
//! let runner = DemoRunner::new(DemoConfig::default());
//! runner.run(&mut std::io::stdout().lock())?;
//! ```
//!
//! ## Observability
//!
//! Each family gets an `info` span (`furniture_demo`, `database_demo`), each
//! variation a nested `family_run` span, and each client call a
//! `furniture_client` / `database_client` span. See
//! [`factory_framework::tracing`] for the subscriber setup.

pub mod demo_runner;
pub mod error;
pub mod families;

pub use demo_runner::*;
pub use error::*;
pub use families::*;
