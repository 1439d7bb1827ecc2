//! # FamilyDemo Trait
//!
//! Runs the same client code against one factory per variation, printing a
//! header before each run. This is the "swap the factory, keep the client" part
//! of the pattern, written once for every family.
//!
//! Output for two variations looks like:
//!
//! ```text
//! Client: Testing client code with the first factory type:
//! <client output>
//!
//! Client: Testing the same client code with the second factory type:
//! <client output>
//! ```

use crate::{FamilyFactory, FrameworkError, Variation};
use std::io::Write;
use tracing::{debug, info_span};

/// Ordinal used in run headers: `first`, `second`, `third`, then `next`.
pub fn ordinal(position: usize) -> &'static str {
    match position {
        0 => "first",
        1 => "second",
        2 => "third",
        _ => "next",
    }
}

/// Header line written before the client runs against the factory at `position`.
pub fn run_header(position: usize) -> String {
    if position == 0 {
        format!("Client: Testing client code with the {} factory type:", ordinal(position))
    } else {
        format!(
            "Client: Testing the same client code with the {} factory type:",
            ordinal(position)
        )
    }
}

/// Wiring between a family's variations, its factories and its client.
pub trait FamilyDemo {
    /// The variation enum for this family.
    type Variation: Variation;

    /// The abstract factory the client consumes, usually a `dyn` trait.
    type Factory: FamilyFactory<Variation = Self::Variation> + ?Sized;

    /// Builds the concrete factory for a variation.
    fn build(variation: Self::Variation) -> Box<Self::Factory>;

    /// Runs the client code against one factory.
    fn exercise(factory: &Self::Factory, out: &mut dyn Write) -> Result<(), FrameworkError>;

    /// Runs the client once per variation, in the given order.
    fn run(variations: &[Self::Variation], out: &mut dyn Write) -> Result<(), FrameworkError> {
        for (position, &variation) in variations.iter().enumerate() {
            let span = info_span!("family_run", family = <Self::Variation as Variation>::FAMILY, %variation);
            let _guard = span.enter();

            if position > 0 {
                writeln!(out)?;
            }
            writeln!(out, "{}", run_header(position))?;

            let factory = Self::build(variation);
            debug!(variation = %factory.variation(), "Factory built");
            Self::exercise(&*factory, out)?;
        }
        Ok(())
    }
}
