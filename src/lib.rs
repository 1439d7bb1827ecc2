//! # Factory Recipe
//!
//! > **A Recipe for the Abstract Factory pattern in Rust.**
//!
//! Two small product families, built on the traits in [`factory_framework`]:
//!
//! - **Furniture**: tables and sofas in the `ArDeko` and `Modern` styles.
//! - **Database**: connection, record and query-builder objects for `MySQL`,
//!   `PostgreSQL` and `Oracle`.
//!
//! Every product returns a fixed description string. The interesting part is
//! not what the products do but how they are handed out: a client receives one
//! factory trait object and gets a family of products that are guaranteed to
//! match each other.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Families ([`furniture`], [`database`])
//! Product traits, the abstract factory trait, one concrete factory per
//! variation, and a `factory_for` switch from variation to factory.
//!
//! ### 2. The Clients ([`clients`])
//! Code that only knows the traits. Swap the factory and every output line
//! changes with it.
//!
//! ### 3. The Orchestrator ([`lifecycle`])
//! Builds each factory in turn and runs the client against it.
//!
//! ### 4. Configuration ([`config`])
//! TOML file selecting which variations run, and in which order.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Every family, every variation
//! cargo run
//!
//! # Only what demo.toml asks for, with debug logs on stderr
//! RUST_LOG=debug cargo run -- demo.toml
//! ```

pub mod clients;
pub mod config;
pub mod database;
pub mod furniture;
pub mod lifecycle;
