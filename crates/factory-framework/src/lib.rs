//! # Factory Framework
//!
//! This crate provides the family-agnostic building blocks for the **Abstract
//! Factory** pattern: a factory creates a whole family of related products, and
//! every product from one factory belongs to the same variation, so they are
//! always compatible with each other.
//!
//! ## Why Abstract Factory?
//!
//! - **Consistency**: a client that only ever talks to one factory cannot mix an
//!   ArDeko sofa with a Modern table by accident.
//! - **Swappability**: replacing the factory replaces the whole family. The
//!   client code does not change at all.
//! - **Isolation**: clients depend on traits only. Concrete product types stay
//!   private to the module that defines the family.
//!
//! **Further Reading**:
//! - [Abstract factory pattern (Wikipedia)](https://en.wikipedia.org/wiki/Abstract_factory_pattern)
//! - [Trait objects (The Rust Book)](https://doc.rust-lang.org/book/ch18-02-trait-objects.html)
//!
//! ## Architecture Overview
//!
//! 1. **Variation Layer** ([`Variation`]) - the closed set of variations a family comes in
//! 2. **Factory Layer** ([`FamilyFactory`]) - supertrait of every abstract factory
//! 3. **Driver Layer** ([`FamilyDemo`]) - runs one client against every variation
//!
//! A family crate defines its product traits and an abstract factory trait that
//! extends [`FamilyFactory`] with one creation method per product kind:
//!
//! ```rust
//! use factory_framework::{FamilyDemo, FamilyFactory, FrameworkError, Variation};
//! use factory_framework::mock::MockSink;
//! use std::io::Write;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Flavor { Vanilla, Mint }
//! impl std::fmt::Display for Flavor {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.name()) }
//! }
//! impl Variation for Flavor {
//!     const FAMILY: &'static str = "flavor";
//!     fn all() -> &'static [Self] { &[Flavor::Vanilla, Flavor::Mint] }
//!     fn name(&self) -> &'static str {
//!         match self { Flavor::Vanilla => "Vanilla", Flavor::Mint => "Mint" }
//!     }
//! }
//!
//! trait Scoop { fn taste(&self) -> String; }
//! trait IceCreamFactory: FamilyFactory<Variation = Flavor> {
//!     fn create_scoop(&self) -> Box<dyn Scoop>;
//! }
//!
//! struct PlainScoop(Flavor);
//! impl Scoop for PlainScoop {
//!     fn taste(&self) -> String { format!("{} scoop", self.0) }
//! }
//!
//! struct Parlour(Flavor);
//! impl FamilyFactory for Parlour {
//!     type Variation = Flavor;
//!     fn variation(&self) -> Flavor { self.0 }
//! }
//! impl IceCreamFactory for Parlour {
//!     fn create_scoop(&self) -> Box<dyn Scoop> { Box::new(PlainScoop(self.0)) }
//! }
//!
//! struct IceCreamDemo;
//! impl FamilyDemo for IceCreamDemo {
//!     type Variation = Flavor;
//!     type Factory = dyn IceCreamFactory;
//!     fn build(flavor: Flavor) -> Box<Self::Factory> { Box::new(Parlour(flavor)) }
//!     fn exercise(factory: &Self::Factory, out: &mut dyn Write) -> Result<(), FrameworkError> {
//!         writeln!(out, "{}", factory.create_scoop().taste())?;
//!         Ok(())
//!     }
//! }
//!
//! let mut sink = MockSink::new();
//! IceCreamDemo::run(Flavor::all(), &mut sink).unwrap();
//! assert_eq!(sink.lines(), vec![
//!     "Client: Testing client code with the first factory type:",
//!     "Vanilla scoop",
//!     "",
//!     "Client: Testing the same client code with the second factory type:",
//!     "Mint scoop",
//! ]);
//! ```
//!
//! ## Concurrency Model
//!
//! Factories are `Send + Sync` and products hold no mutable state, so any number
//! of clients can run side by side without coordination.
//!
//! ## Testing
//!
//! Output always goes through an explicit `&mut dyn Write`. The [`mock`] module
//! provides sinks that capture output or fail on demand.

pub mod demo;
pub mod error;
pub mod factory;
pub mod mock;
pub mod tracing;
pub mod variation;

// Re-export core types for convenience
pub use demo::{run_header, FamilyDemo};
pub use error::FrameworkError;
pub use factory::FamilyFactory;
pub use variation::{parse_variation, Variation};
